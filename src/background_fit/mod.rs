//! Detects whether section background images are tall enough to cover their
//! sections, and switches all background imagery off when one falls short.

pub mod cache;
pub mod dom;
pub mod evaluator;
pub mod hook;
pub mod scheduler;
pub mod size_rule;
pub mod url;

pub use hook::use_background_fit;

/// Intrinsic pixel dimensions of a decoded image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NaturalSize {
    pub width: f64,
    pub height: f64,
}

impl NaturalSize {
    /// Degenerate images have no usable aspect ratio and count as not loaded.
    pub fn from_pixels(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            width: width as f64,
            height: height as f64,
        })
    }
}

/// Rendered box of a section in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionBox {
    pub width: f64,
    pub height: f64,
}

/// Everything the fit pass needs to know about one section, read from layout
/// at the start of a pass.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionSnapshot {
    pub label: String,
    pub bounds: RegionBox,
    /// Raw `url(...)` declaration, if the section declares one.
    pub background_declaration: Option<String>,
    /// Computed `background-size`, possibly several comma-separated layers.
    pub background_size: String,
    /// Computed `background-position`. Not evaluated.
    pub background_position: String,
}
