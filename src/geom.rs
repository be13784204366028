//! Integer geometry for 3-D image addressing.
//!
//! These mirror the width/height/depth, origin and origin+extent triple used
//! by every read/write operation. All components are expected to be
//! non-negative; region validation happens at the conversion entry points.

/// Integer width/height/depth of an image or sub-region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size3i {
    pub width: i32,
    pub height: i32,
    pub depth: i32,
}

impl Size3i {
    pub const ZERO: Size3i = Size3i::new(0, 0, 0);

    pub const fn new(width: i32, height: i32, depth: i32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Flat 2-D size with depth 1.
    pub const fn flat(width: i32, height: i32) -> Self {
        Self::new(width, height, 1)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0 || self.depth <= 0
    }

    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.width.min(other.width),
            self.height.min(other.height),
            self.depth.min(other.depth),
        )
    }

    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.width.max(other.width),
            self.height.max(other.height),
            self.depth.max(other.depth),
        )
    }
}

/// Integer position within a 3-D image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point3i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point3i {
    pub const ZERO: Point3i = Point3i::new(0, 0, 0);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }
}

/// An origin + extent region of a 3-D image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Box3i {
    pub origin: Point3i,
    pub size: Size3i,
}

impl Box3i {
    pub const fn new(origin: Point3i, size: Size3i) -> Self {
        Self { origin, size }
    }

    /// The whole of an image of the given size.
    pub const fn of(size: Size3i) -> Self {
        Self::new(Point3i::ZERO, size)
    }

    /// Exclusive far corner.
    pub fn max_corner(&self) -> Point3i {
        Point3i::new(
            self.origin.x + self.size.width,
            self.origin.y + self.size.height,
            self.origin.z + self.size.depth,
        )
    }

    /// True when the region lies fully inside an image of extent `size`.
    pub fn fits_in(&self, size: Size3i) -> bool {
        let far = self.max_corner();
        self.origin.x >= 0
            && self.origin.y >= 0
            && self.origin.z >= 0
            && far.x <= size.width
            && far.y <= size.height
            && far.z <= size.depth
    }
}
