use crate::geometry::Rect;

/// A rectangle to be placed by a [`Packer`](crate::Packer).
///
/// `Block` is a fixed 2D size plus a payload that Growpack never looks at.
/// Consumers typically store an image, a path, or an index into their own
/// tables in the payload and use it to associate the packed positions back to
/// their own objects.
///
/// The position starts out at `(0, 0)` and is only meaningful once a call to
/// [`Packer::fit`](crate::Packer::fit) that included this block has returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<T> {
    size: (u32, u32),
    payload: T,
    pub(crate) position: (u32, u32),
}

impl<T> Block<T> {
    #[inline]
    pub fn new(size: (u32, u32), payload: T) -> Self {
        Self {
            size,
            payload,
            position: (0, 0),
        }
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.0
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.1
    }

    #[inline]
    pub fn position(&self) -> (u32, u32) {
        self.position
    }

    #[inline]
    pub fn x(&self) -> u32 {
        self.position.0
    }

    #[inline]
    pub fn y(&self) -> u32 {
        self.position.1
    }

    /// The area this block covers in the packed sheet.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    #[inline]
    pub fn payload(&self) -> &T {
        &self.payload
    }

    #[inline]
    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }

    #[inline]
    pub fn into_payload(self) -> T {
        self.payload
    }

    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.size.0) * u64::from(self.size.1)
    }
}

impl Block<()> {
    /// Creates a block with no payload, for when only the geometry matters.
    #[inline]
    pub fn with_size(size: (u32, u32)) -> Self {
        Self::new(size, ())
    }
}
