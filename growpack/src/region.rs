use std::mem;

use crate::{
    geometry::Rect,
    growth::{Growth, GrownSizes},
    id::BlockId,
    types::Block,
};

/// A node in the space partitioning tree built up by a
/// [`Packer`](crate::Packer).
///
/// A region only knows its size. Its position follows from the sizes of its
/// parent and siblings and is only computed when the tree is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    size: (u32, u32),
    state: RegionState,
}

/// What a [`Region`] currently holds.
///
/// Every region starts out `Empty`. Splitting an empty region turns it into
/// an `Internal` node whose `first` child holds the block. Neither `Occupied`
/// nor `Internal` regions ever change again; only the root is replaced when
/// the container grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionState {
    Empty,
    Occupied(BlockId),
    Internal {
        first: Box<Region>,
        right: Option<Box<Region>>,
        down: Option<Box<Region>>,
    },
}

impl Region {
    /// Creates an empty region.
    #[inline]
    pub fn new(size: (u32, u32)) -> Self {
        Self {
            size,
            state: RegionState::Empty,
        }
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[inline]
    pub fn state(&self) -> &RegionState {
        &self.state
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self.state, RegionState::Empty)
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        matches!(self.state, RegionState::Occupied(_))
    }

    /// The block held by this region, if it is an occupied leaf.
    pub fn block(&self) -> Option<BlockId> {
        match self.state {
            RegionState::Occupied(id) => Some(id),
            _ => None,
        }
    }

    pub fn first(&self) -> Option<&Region> {
        match &self.state {
            RegionState::Internal { first, .. } => Some(first),
            _ => None,
        }
    }

    pub fn right(&self) -> Option<&Region> {
        match &self.state {
            RegionState::Internal { right, .. } => right.as_deref(),
            _ => None,
        }
    }

    pub fn down(&self) -> Option<&Region> {
        match &self.state {
            RegionState::Internal { down, .. } => down.as_deref(),
            _ => None,
        }
    }

    /// Whether a block of the given size could be placed directly into this
    /// region.
    #[inline]
    fn accepts(&self, size: (u32, u32)) -> bool {
        size.0 <= self.size.0 && size.1 <= self.size.1
    }

    /// Finds an empty region that can hold a block of the given size.
    ///
    /// Children are searched depth-first in `first`, `right`, `down` order and
    /// the first match wins. Layouts depend on this order.
    pub fn find(&mut self, size: (u32, u32)) -> Option<&mut Region> {
        if self.is_empty() {
            return if self.accepts(size) { Some(self) } else { None };
        }

        match &mut self.state {
            RegionState::Internal { first, right, down } => {
                if let Some(found) = first.find(size) {
                    return Some(found);
                }

                if let Some(found) = right.as_deref_mut().and_then(|right| right.find(size)) {
                    return Some(found);
                }

                down.as_deref_mut().and_then(|down| down.find(size))
            }
            _ => None,
        }
    }

    /// Places a block into this region, cutting the leftover space into a
    /// strip to the right of the block and a strip below it.
    ///
    /// The right strip is as tall as the block; the bottom strip spans the
    /// full width of this region. Strips with no area are not created.
    ///
    /// # Panics
    ///
    /// Panics if this region is not empty or is too small for the block.
    pub fn split(&mut self, block: BlockId, size: (u32, u32)) {
        assert!(
            self.is_empty(),
            "Region::split called on a region that is not empty"
        );
        assert!(
            self.accepts(size),
            "Region::split called with a {}x{} block on a {}x{} region",
            size.0,
            size.1,
            self.size.0,
            self.size.1
        );

        let first = Region {
            size,
            state: RegionState::Occupied(block),
        };

        let remaining_width = self.size.0 - size.0;
        let right = if remaining_width > 0 && size.1 > 0 {
            Some(Box::new(Region::new((remaining_width, size.1))))
        } else {
            None
        };

        let remaining_height = self.size.1 - size.1;
        let down = if remaining_height > 0 {
            Some(Box::new(Region::new((self.size.0, remaining_height))))
        } else {
            None
        };

        self.state = RegionState::Internal {
            first: Box::new(first),
            right,
            down,
        };
    }

    /// Wraps this region as the `first` child of a new, larger region and
    /// places the block into a single new sibling in the growth direction.
    pub(crate) fn grow(
        &mut self,
        growth: Growth,
        sizes: GrownSizes,
        block: BlockId,
        size: (u32, u32),
    ) {
        let mut sibling = Region::new(sizes.sibling);
        sibling.split(block, size);

        let old = mem::replace(self, Region::new(sizes.root));
        let first = Box::new(old);
        let added = Some(Box::new(sibling));

        self.state = match growth {
            Growth::Right => RegionState::Internal {
                first,
                right: added,
                down: None,
            },
            Growth::Down => RegionState::Internal {
                first,
                right: None,
                down: added,
            },
        };
    }

    /// Writes absolute positions into every block held by this tree, treating
    /// `origin` as the top-left corner of this region.
    ///
    /// Block ids index into `blocks`. Empty regions are skipped.
    pub fn resolve<T>(&self, origin: (u32, u32), blocks: &mut [Block<T>]) {
        match &self.state {
            RegionState::Empty => {}
            RegionState::Occupied(id) => {
                blocks[id.index()].position = origin;
            }
            RegionState::Internal { first, right, down } => {
                first.resolve(origin, blocks);

                if let Some(right) = right {
                    right.resolve((origin.0 + first.size.0, origin.1), blocks);
                }

                if let Some(down) = down {
                    down.resolve((origin.0, origin.1 + first.size.1), blocks);
                }
            }
        }
    }

    /// Lists the empty leaves of this tree with their absolute positions, in
    /// search order.
    pub fn free_regions(&self) -> Vec<Rect> {
        let mut free = Vec::new();
        self.collect_free((0, 0), &mut free);
        free
    }

    fn collect_free(&self, origin: (u32, u32), free: &mut Vec<Rect>) {
        match &self.state {
            RegionState::Empty => free.push(Rect::new(origin, self.size)),
            RegionState::Occupied(_) => {}
            RegionState::Internal { first, right, down } => {
                first.collect_free(origin, free);

                if let Some(right) = right {
                    right.collect_free((origin.0 + first.size.0, origin.1), free);
                }

                if let Some(down) = down {
                    down.collect_free((origin.0, origin.1 + first.size.1), free);
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn blocks(sizes: &[(u32, u32)]) -> Vec<Block<()>> {
        sizes.iter().map(|&size| Block::with_size(size)).collect()
    }

    #[test]
    fn split_into_three() {
        let mut region = Region::new((30, 30));
        region.split(BlockId::new(0), (20, 10));

        let first = region.first().unwrap();
        assert_eq!(first.size(), (20, 10));
        assert_eq!(first.block(), Some(BlockId::new(0)));
        assert_eq!(region.right().unwrap().size(), (10, 10));
        assert_eq!(region.down().unwrap().size(), (30, 20));

        assert_eq!(
            region.free_regions(),
            vec![
                Rect::new((20, 0), (10, 10)),
                Rect::new((0, 10), (30, 20)),
            ]
        );

        let mut blocks = blocks(&[(20, 10)]);
        region.resolve((0, 0), &mut blocks);
        assert_eq!(blocks[0].position(), (0, 0));
    }

    #[test]
    fn exact_fit_leaves_no_strips() {
        let mut region = Region::new((8, 4));
        region.split(BlockId::new(0), (8, 4));

        assert!(region.first().unwrap().is_occupied());
        assert!(region.right().is_none());
        assert!(region.down().is_none());
        assert!(region.free_regions().is_empty());
    }

    #[test]
    fn zero_height_block_has_no_right_strip() {
        let mut region = Region::new((8, 4));
        region.split(BlockId::new(0), (3, 0));

        assert!(region.right().is_none());
        assert_eq!(region.down().unwrap().size(), (8, 4));
    }

    #[test]
    fn find_searches_first_then_right_then_down() {
        let mut region = Region::new((30, 30));
        region.split(BlockId::new(0), (20, 10));

        // Both strips can hold a 5x5 block; the right one comes first.
        let found = region.find((5, 5)).unwrap();
        assert_eq!(found.size(), (10, 10));

        // Only the bottom strip is wide enough.
        let found = region.find((15, 5)).unwrap();
        assert_eq!(found.size(), (30, 20));

        assert!(region.find((31, 1)).is_none());
    }

    #[test]
    fn find_skips_occupied() {
        let mut region = Region::new((10, 10));
        region.split(BlockId::new(0), (10, 10));

        assert!(region.find((1, 1)).is_none());
        assert!(region.first().unwrap().clone().find((1, 1)).is_none());
    }

    #[test]
    fn nested_resolve() {
        let mut region = Region::new((30, 30));
        region.split(BlockId::new(0), (20, 10));
        region.find((10, 10)).unwrap().split(BlockId::new(1), (10, 10));
        region.find((30, 5)).unwrap().split(BlockId::new(2), (30, 5));
        region.find((4, 4)).unwrap().split(BlockId::new(3), (4, 4));

        let mut blocks = blocks(&[(20, 10), (10, 10), (30, 5), (4, 4)]);
        region.resolve((0, 0), &mut blocks);

        let positions: Vec<_> = blocks.iter().map(Block::position).collect();
        assert_eq!(positions, vec![(0, 0), (20, 0), (0, 10), (0, 15)]);

        // Resolving again is a no-op.
        region.resolve((0, 0), &mut blocks);
        let again: Vec<_> = blocks.iter().map(Block::position).collect();
        assert_eq!(positions, again);

        // A different origin shifts everything.
        region.resolve((1, 2), &mut blocks);
        assert_eq!(blocks[3].position(), (1, 17));
    }

    #[test]
    fn grow_wraps_old_root() {
        let mut root = Region::new((10, 10));
        root.split(BlockId::new(0), (10, 10));

        let sizes = Growth::Right.grown_sizes((10, 10), (10, 6)).unwrap();
        root.grow(Growth::Right, sizes, BlockId::new(1), (10, 6));

        assert_eq!(root.size(), (20, 10));
        assert_eq!(root.first().unwrap().size(), (10, 10));
        assert!(root.down().is_none());

        let sibling = root.right().unwrap();
        assert_eq!(sibling.size(), (10, 10));
        assert_eq!(sibling.first().unwrap().block(), Some(BlockId::new(1)));
        assert_eq!(root.free_regions(), vec![Rect::new((10, 6), (10, 4))]);

        let mut blocks = blocks(&[(10, 10), (10, 6)]);
        root.resolve((0, 0), &mut blocks);
        assert_eq!(blocks[1].position(), (10, 0));
    }

    #[test]
    fn grow_down_places_block_below() {
        let mut root = Region::new((10, 10));
        root.split(BlockId::new(0), (10, 10));

        let sizes = Growth::Down.grown_sizes((10, 10), (4, 4)).unwrap();
        root.grow(Growth::Down, sizes, BlockId::new(1), (4, 4));

        assert_eq!(root.size(), (10, 14));
        assert!(root.right().is_none());
        assert_eq!(root.down().unwrap().size(), (10, 4));

        let mut blocks = blocks(&[(10, 10), (4, 4)]);
        root.resolve((0, 0), &mut blocks);
        assert_eq!(blocks[1].position(), (0, 10));
    }

    #[test]
    #[should_panic]
    fn split_occupied_panics() {
        let mut region = Region::new((10, 10));
        region.split(BlockId::new(0), (5, 5));
        region.split(BlockId::new(1), (5, 5));
    }

    #[test]
    #[should_panic]
    fn split_too_small_panics() {
        let mut region = Region::new((10, 10));
        region.split(BlockId::new(0), (11, 5));
    }
}
