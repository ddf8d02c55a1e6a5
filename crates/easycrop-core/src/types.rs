//! Value types shared by every geometry operation.
//!
//! All types are plain `Copy` records. Field names serialize in camelCase so
//! they line up with the object shapes JavaScript croppers already pass
//! around (`naturalWidth`, `croppedAreaPixels`, ...).

use serde::{Deserialize, Serialize};

/// Rotation applied when a caller does not supply one, in degrees.
pub const DEFAULT_ROTATION: f64 = 0.0;

/// Whether projections clamp to the image bounds when not told otherwise.
pub const DEFAULT_RESTRICT_POSITION: bool = true;

/// A 2D coordinate. The unit depends on context (screen or natural pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}

/// Displayed and natural dimensions of the source image.
///
/// `width`/`height` are the on-screen size at zoom 1, before rotation.
/// `natural_width`/`natural_height` are the pixel dimensions of the decoded
/// source and must be positive; `width / natural_width` is the display scale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSize {
    pub width: f64,
    pub height: f64,
    pub natural_width: f64,
    pub natural_height: f64,
}

impl ImageSize {
    pub fn new(width: f64, height: f64, natural_width: f64, natural_height: f64) -> Self {
        Self {
            width,
            height,
            natural_width,
            natural_height,
        }
    }

    /// On-screen size as a [`Size`].
    pub fn displayed(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Natural pixel size as a [`Size`].
    pub fn natural(&self) -> Size {
        Size::new(self.natural_width, self.natural_height)
    }

    /// Ratio between on-screen and natural width.
    pub fn display_scale(&self) -> f64 {
        self.width / self.natural_width
    }
}

/// A selection rectangle, `x`/`y` being its top-left corner.
///
/// Used both for percentages of the natural image (0 to 100) and for natural
/// pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Area {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Area {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Width and height of the rectangle.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// The selected region in both percentage and natural pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CroppedArea {
    #[serde(rename = "croppedAreaPercentages")]
    pub percentages: Area,
    #[serde(rename = "croppedAreaPixels")]
    pub pixels: Area,
}

/// Pan position and zoom that reproduce a previously selected pixel area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InitialCrop {
    pub crop: Point,
    pub zoom: f64,
}
