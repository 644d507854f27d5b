use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose fit-pass logging while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Viewport width at which the mobile menu collapses back into the header.
pub const NAV_COLLAPSE_BREAKPOINT_PX: f64 = 900.0;

/// Knobs for the background-fit pass.
#[derive(Clone, Debug, PartialEq)]
pub struct FitConfig {
    /// Selector for sections that carry a background image.
    pub section_selector: &'static str,
    /// Custom property holding the raw `url(...)` declaration.
    pub url_property: &'static str,
    /// Class toggled on the document element when any image falls short.
    pub disabled_class: &'static str,
    /// A section is clipped when `rendered + tolerance < section height`.
    /// Absorbs sub-pixel rounding in layout.
    pub clip_tolerance_px: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            section_selector: ".photo-section.has-image",
            url_property: "--section-bg-url",
            disabled_class: "background-images-disabled",
            clip_tolerance_px: 1.0,
        }
    }
}
