/// An axis-aligned rectangle in sheet coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub pos: (u32, u32),
    pub size: (u32, u32),
}

impl Rect {
    #[inline]
    pub fn new(pos: (u32, u32), size: (u32, u32)) -> Self {
        Self { pos, size }
    }

    /// The exclusive far corner of the rectangle. Computed in `u64` so that a
    /// rectangle touching the edge of the `u32` range is still representable.
    #[inline]
    pub fn max(&self) -> (u64, u64) {
        (
            u64::from(self.pos.0) + u64::from(self.size.0),
            u64::from(self.pos.1) + u64::from(self.size.1),
        )
    }

    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.size.0) * u64::from(self.size.1)
    }

    /// Tells whether the two rectangles share any area. Rectangles that only
    /// touch along an edge, and empty rectangles, do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.area() == 0 || other.area() == 0 {
            return false;
        }

        let (self_max_x, self_max_y) = self.max();
        let (other_max_x, other_max_y) = other.max();

        let x_overlap = u64::from(self.pos.0) < other_max_x && u64::from(other.pos.0) < self_max_x;
        let y_overlap = u64::from(self.pos.1) < other_max_y && u64::from(other.pos.1) < self_max_y;

        x_overlap && y_overlap
    }

    /// Tells whether this rectangle lies entirely within a container of the
    /// given size anchored at the origin.
    pub fn fits_within(&self, container: (u32, u32)) -> bool {
        let (max_x, max_y) = self.max();

        max_x <= u64::from(container.0) && max_y <= u64::from(container.1)
    }
}
