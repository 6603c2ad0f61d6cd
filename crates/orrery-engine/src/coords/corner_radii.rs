/// Per-corner radii for a rounded rectangle (logical pixels).
///
/// Corners follow CSS convention: top-left, top-right, bottom-right, bottom-left.
/// Negative values are treated as zero by the canvas.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Expands a `roundRect`-style radius list.
    ///
    /// - `[a]`          all corners
    /// - `[a, b]`       top-left + bottom-right = a, top-right + bottom-left = b
    /// - `[a, b, c]`    top-left = a, top-right + bottom-left = b, bottom-right = c
    /// - `[a, b, c, d]` top-left, top-right, bottom-right, bottom-left
    ///
    /// Returns `None` for an empty list or more than four entries.
    pub fn from_list(list: &[f32]) -> Option<Self> {
        match *list {
            [a] => Some(Self::all(a)),
            [a, b] => Some(Self::new(a, b, a, b)),
            [a, b, c] => Some(Self::new(a, b, c, b)),
            [a, b, c, d] => Some(Self::new(a, b, c, d)),
            _ => None,
        }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.top_left <= 0.0
            && self.top_right <= 0.0
            && self.bottom_right <= 0.0
            && self.bottom_left <= 0.0
    }

    /// Clamps negatives to zero and scales all radii down uniformly so that
    /// adjacent corners never overlap on a `width` × `height` box.
    pub fn fitted(self, width: f32, height: f32) -> Self {
        let tl = self.top_left.max(0.0);
        let tr = self.top_right.max(0.0);
        let br = self.bottom_right.max(0.0);
        let bl = self.bottom_left.max(0.0);

        let (w, h) = (width.abs(), height.abs());
        let mut scale: f32 = 1.0;
        for (sum, side) in [(tl + tr, w), (bl + br, w), (tl + bl, h), (tr + br, h)] {
            if sum > side && sum > 0.0 {
                scale = scale.min(side / sum);
            }
        }

        Self::new(tl * scale, tr * scale, br * scale, bl * scale)
    }
}

impl From<CornerRadii> for lyon::path::builder::BorderRadii {
    fn from(r: CornerRadii) -> Self {
        Self {
            top_left: r.top_left,
            top_right: r.top_right,
            bottom_left: r.bottom_left,
            bottom_right: r.bottom_right,
        }
    }
}
