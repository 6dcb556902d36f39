/// Axis-aligned, inclusive bounding box of a connected set of opaque pixels.
///
/// Coordinates are in texture space (see [`crate::PixelMask`]): `min_y` is the bottom edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Region {
    /// Discovery-order id assigned by segmentation.
    pub id: u32,
    /// Inclusive left edge.
    pub min_x: u32,
    /// Inclusive bottom edge.
    pub min_y: u32,
    /// Inclusive right edge.
    pub max_x: u32,
    /// Inclusive top edge.
    pub max_y: u32,
}

impl Region {
    /// Single-pixel region at `(x, y)`.
    pub fn point(id: u32, x: u32, y: u32) -> Self {
        Self {
            id,
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    /// Width in pixels (bounds are inclusive).
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    /// Height in pixels (bounds are inclusive).
    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    /// Return `true` when `(x, y)` lies inside the box.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.min_x <= x && x <= self.max_x && self.min_y <= y && y <= self.max_y
    }

    /// Grow the box to include `(x, y)`.
    pub fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Union bounding box. Keeps `self.id`.
    pub fn union(&self, other: &Region) -> Region {
        Region {
            id: self.id,
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}
