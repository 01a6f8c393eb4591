use serde::{Deserialize, Serialize};

/// Point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned pixel rectangle.
///
/// Coordinates stay real-valued so renderers can rasterize at any DPI.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Pixel rectangle inside which a chart's geometry is computed.
pub type PlotArea = Rect;

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Carves the plot area out of a viewport by subtracting margins.
    ///
    /// The result may be non-positive for tiny viewports; layout treats such an
    /// area as "nothing to draw".
    #[must_use]
    pub fn from_viewport(width: f64, height: f64, margins: ChartMargins) -> Self {
        Self {
            x: margins.left,
            y: margins.top,
            width: width - margins.left - margins.right,
            height: height - margins.top - margins.bottom,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[must_use]
    pub fn area(self) -> f64 {
        self.width * self.height
    }

    /// Shrinks the rectangle on all sides; extents never go below zero.
    #[must_use]
    pub fn inset(self, padding: f64) -> Self {
        Self {
            x: self.x + padding,
            y: self.y + padding,
            width: (self.width - 2.0 * padding).max(0.0),
            height: (self.height - 2.0 * padding).max(0.0),
        }
    }
}

/// Space reserved around the plot area for axes, labels and titles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartMargins {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ChartMargins {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    #[must_use]
    pub const fn none() -> Self {
        Self::uniform(0.0)
    }
}

impl Default for ChartMargins {
    fn default() -> Self {
        Self::new(60.0, 20.0, 20.0, 60.0)
    }
}
