use std::fmt;

use thiserror::Error;

use crate::{
    growth::{GrowthStrategy, Pow2Growth},
    id::BlockId,
    region::Region,
    types::Block,
};

/// Packs blocks into a single container that grows as needed.
///
/// Blocks are placed one at a time, in the order they are given, into the
/// first free region that can hold them. When none can, the container grows
/// to the right or downwards, as decided by the packer's [`GrowthStrategy`].
///
/// The packer owns the blocks it has placed. Their positions are updated at
/// the end of every call to [`fit`](Packer::fit).
pub struct Packer<T> {
    root: Option<Region>,
    blocks: Vec<Block<T>>,
    strategy: Box<dyn GrowthStrategy + Send + Sync>,
}

impl<T> Packer<T> {
    /// Creates a packer with no container. The container is created from the
    /// size of the first block that is fit.
    pub fn new() -> Self {
        Self {
            root: None,
            blocks: Vec::new(),
            strategy: Box::new(Pow2Growth),
        }
    }

    /// Creates a packer whose container starts out at the given size.
    pub fn with_size(size: (u32, u32)) -> Self {
        Self {
            root: Some(Region::new(size)),
            ..Self::new()
        }
    }

    /// Replaces the strategy used to pick a growth direction.
    pub fn strategy<S>(mut self, strategy: S) -> Self
    where
        S: GrowthStrategy + Send + Sync + 'static,
    {
        self.strategy = Box::new(strategy);
        self
    }

    /// Places every block from `blocks`, in order, then computes final
    /// positions for all blocks held by this packer.
    ///
    /// Fitting can be repeated to add more blocks to the same container.
    /// Blocks are never moved relative to the container's origin once placed,
    /// and the container never shrinks.
    ///
    /// If the container would need to grow past `u32` dimensions, packing
    /// stops at the offending block and an error is returned. Blocks placed
    /// before it keep their resolved positions.
    pub fn fit<I>(&mut self, blocks: I) -> Result<(), PackError>
    where
        I: IntoIterator<Item = Block<T>>,
    {
        let previous = self.blocks.len();

        let result = blocks
            .into_iter()
            .try_for_each(|block| self.place(block));

        if let Some(root) = &self.root {
            root.resolve((0, 0), &mut self.blocks);

            log::trace!(
                "Placed {} blocks, container is {}x{}",
                self.blocks.len() - previous,
                root.size().0,
                root.size().1
            );
        }

        result
    }

    fn place(&mut self, block: Block<T>) -> Result<(), PackError> {
        let size = block.size();
        let id = BlockId(self.blocks.len());

        let root = self.root.get_or_insert_with(|| Region::new(size));

        if let Some(region) = root.find(size) {
            log::trace!(
                "Block {} ({}x{}) fit into a {}x{} region",
                id,
                size.0,
                size.1,
                region.size().0,
                region.size().1
            );

            region.split(id, size);
        } else {
            let root_size = root.size();
            let growth = self.strategy.choose(root_size, size);

            let sizes = growth
                .grown_sizes(root_size, size)
                .ok_or(PackError::ContainerOverflow {
                    container: root_size,
                    block: size,
                })?;

            log::trace!(
                "Block {} ({}x{}) did not fit, growing {:?} to {}x{}",
                id,
                size.0,
                size.1,
                growth,
                sizes.root.0,
                sizes.root.1
            );

            root.grow(growth, sizes, id, size);
        }

        self.blocks.push(block);

        Ok(())
    }

    /// The size of the container, if one exists yet.
    #[inline]
    pub fn size(&self) -> Option<(u32, u32)> {
        self.root.as_ref().map(Region::size)
    }

    /// The root of the region tree, if one exists yet.
    #[inline]
    pub fn root(&self) -> Option<&Region> {
        self.root.as_ref()
    }

    /// All blocks placed so far, indexed by [`BlockId`].
    #[inline]
    pub fn blocks(&self) -> &[Block<T>] {
        &self.blocks
    }

    #[inline]
    pub fn block(&self, id: BlockId) -> Option<&Block<T>> {
        self.blocks.get(id.index())
    }

    /// Gives back ownership of the placed blocks, in placement order.
    pub fn into_blocks(self) -> Vec<Block<T>> {
        self.blocks
    }
}

impl<T> Default for Packer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Packer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Packer")
            .field("root", &self.root)
            .field("blocks", &self.blocks)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    #[error(
        "Growing the {}x{} container to fit a {}x{} block would exceed the maximum container size",
        .container.0, .container.1, .block.0, .block.1
    )]
    ContainerOverflow {
        container: (u32, u32),
        block: (u32, u32),
    },
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::growth::{Growth, SquareGrowth};

    fn sized(sizes: &[(u32, u32)]) -> Vec<Block<()>> {
        sizes.iter().map(|&size| Block::with_size(size)).collect()
    }

    fn positions<T>(packer: &Packer<T>) -> Vec<(u32, u32)> {
        packer.blocks().iter().map(Block::position).collect()
    }

    #[test]
    fn single_block() {
        let mut packer = Packer::new();
        packer.fit(sized(&[(40, 20)])).unwrap();

        assert_eq!(packer.size(), Some((40, 20)));
        assert_eq!(positions(&packer), vec![(0, 0)]);
    }

    #[test]
    fn tie_grows_right() {
        let mut packer = Packer::new();
        packer.fit(sized(&[(10, 10), (10, 10)])).unwrap();

        assert_eq!(packer.size(), Some((20, 10)));
        assert_eq!(positions(&packer), vec![(0, 0), (10, 0)]);
    }

    #[test]
    fn empty_fit_is_noop() {
        let mut packer: Packer<()> = Packer::new();
        packer.fit(Vec::new()).unwrap();

        assert_eq!(packer.size(), None);
        assert!(packer.root().is_none());
        assert!(packer.blocks().is_empty());
    }

    #[test]
    fn preset_size() {
        let mut packer = Packer::with_size((64, 64));
        packer.fit(sized(&[(32, 32), (32, 32), (32, 32)])).unwrap();

        assert_eq!(packer.size(), Some((64, 64)));
        assert_eq!(positions(&packer), vec![(0, 0), (32, 0), (0, 32)]);
    }

    #[test]
    fn preset_size_too_small_grows() {
        let mut packer = Packer::with_size((4, 4));
        packer.fit(sized(&[(8, 8)])).unwrap();

        // Right: 12x8 costs 4 + 0, down: 8x12 costs 0 + 4. Tie goes right.
        assert_eq!(packer.size(), Some((12, 8)));
        assert_eq!(positions(&packer), vec![(4, 0)]);
    }

    #[test]
    fn fills_strips_before_growing() {
        let mut packer = Packer::new();
        packer
            .fit(sized(&[(20, 20), (10, 10), (10, 10), (10, 10)]))
            .unwrap();

        // The second block grows the sheet right to 30x20 and the third fills
        // the space left below it. The fourth grows the sheet down.
        assert_eq!(packer.size(), Some((30, 30)));
        assert_eq!(
            positions(&packer),
            vec![(0, 0), (20, 0), (20, 10), (0, 20)]
        );
    }

    #[test]
    fn square_strategy() {
        let mut packer = Packer::new().strategy(SquareGrowth);
        packer.fit(sized(&[(10, 10), (10, 10)])).unwrap();

        // w = h = 20, so the square heuristic grows down.
        assert_eq!(packer.size(), Some((10, 20)));
        assert_eq!(positions(&packer), vec![(0, 0), (0, 10)]);
    }

    #[test]
    fn fixed_direction() {
        let mut packer = Packer::new().strategy(Growth::Down);
        packer.fit(sized(&[(10, 10), (20, 5), (5, 5)])).unwrap();

        assert_eq!(packer.size(), Some((20, 20)));
        assert_eq!(positions(&packer), vec![(0, 0), (0, 10), (0, 15)]);
    }

    #[test]
    fn repeated_fit_matches_single_fit() {
        let sizes = [(30, 10), (12, 40), (7, 7), (25, 3), (9, 18)];

        let mut once = Packer::new();
        once.fit(sized(&sizes)).unwrap();

        let mut twice = Packer::new();
        twice.fit(sized(&sizes[..2])).unwrap();
        let early = twice.size().unwrap();
        twice.fit(sized(&sizes[2..])).unwrap();
        let late = twice.size().unwrap();

        assert!(late.0 >= early.0 && late.1 >= early.1);
        assert_eq!(once.size(), twice.size());
        assert_eq!(positions(&once), positions(&twice));
    }

    #[test]
    fn payloads_are_kept() {
        let mut packer = Packer::new();
        packer
            .fit(vec![Block::new((2, 2), "a"), Block::new((2, 2), "b")])
            .unwrap();

        let blocks = packer.into_blocks();
        let payloads: Vec<_> = blocks.iter().map(|block| *block.payload()).collect();
        assert_eq!(payloads, vec!["a", "b"]);
    }

    #[test]
    fn zero_sized_blocks() {
        let mut packer = Packer::new();
        packer.fit(sized(&[(0, 0), (5, 5), (0, 7), (3, 0)])).unwrap();

        assert_eq!(packer.size(), Some((8, 7)));
        assert_eq!(positions(&packer), vec![(0, 0), (0, 0), (5, 0), (5, 0)]);

        let size = packer.size().unwrap();
        let blocks = packer.blocks();
        for (i, a) in blocks.iter().enumerate() {
            assert!(a.rect().fits_within(size));

            for b in &blocks[i + 1..] {
                assert!(!a.rect().intersects(&b.rect()));
            }
        }
    }

    #[test]
    fn overflow_is_an_error() {
        let mut packer = Packer::new().strategy(Growth::Right);
        let result = packer.fit(sized(&[(u32::MAX, 1), (1, 1), (1, 1)]));

        assert_eq!(
            result,
            Err(PackError::ContainerOverflow {
                container: (u32::MAX, 1),
                block: (1, 1),
            })
        );
        assert_eq!(packer.blocks().len(), 1);
        assert_eq!(packer.size(), Some((u32::MAX, 1)));
    }
}
