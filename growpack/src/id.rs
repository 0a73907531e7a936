use std::fmt;

/// Identifies a block within the [`Packer`](crate::Packer) that owns it.
///
/// Ids are handed out in the order blocks are given to [`Packer::fit`], starting
/// at zero, so they double as indices into [`Packer::blocks`].
///
/// [`Packer::fit`]: crate::Packer::fit
/// [`Packer::blocks`]: crate::Packer::blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub(crate) usize);

impl BlockId {
    /// Creates an id referring to the block at `index`. Only needed when
    /// driving a [`Region`](crate::Region) tree by hand.
    #[inline]
    pub fn new(index: usize) -> Self {
        BlockId(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}
