use super::{NaturalSize, RegionBox};

/// One component of an explicit `background-size` pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SizeToken {
    Auto,
    Px(f64),
    Percent(f64),
}

impl SizeToken {
    /// Anything that is neither a pixel length nor a percentage is `Auto`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Some(number) = raw.strip_suffix("px") {
            if let Ok(value) = number.trim().parse::<f64>() {
                if value.is_finite() {
                    return SizeToken::Px(value);
                }
            }
        } else if let Some(number) = raw.strip_suffix('%') {
            if let Ok(value) = number.trim().parse::<f64>() {
                if value.is_finite() {
                    return SizeToken::Percent(value);
                }
            }
        }
        SizeToken::Auto
    }

    /// Percentages resolve against `basis`, the section's extent on this axis.
    pub fn resolve(self, basis: f64) -> Option<f64> {
        match self {
            SizeToken::Auto => None,
            SizeToken::Px(value) => Some(value),
            SizeToken::Percent(value) => Some(value / 100.0 * basis),
        }
    }
}

/// A single `background-size` layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BackgroundSize {
    Cover,
    Contain,
    Explicit { width: SizeToken, height: SizeToken },
}

impl BackgroundSize {
    pub fn parse(layer: &str) -> Self {
        let mut parts = layer.split_whitespace();
        let first = parts.next().unwrap_or("auto");
        let second = parts.next();

        if second.is_none() {
            if first.eq_ignore_ascii_case("cover") {
                return BackgroundSize::Cover;
            }
            if first.eq_ignore_ascii_case("contain") {
                return BackgroundSize::Contain;
            }
        }

        BackgroundSize::Explicit {
            width: SizeToken::parse(first),
            height: second.map(SizeToken::parse).unwrap_or(SizeToken::Auto),
        }
    }

    /// Height in CSS pixels at which the image is painted inside `region`.
    pub fn rendered_height(&self, region: RegionBox, natural: NaturalSize) -> f64 {
        match *self {
            BackgroundSize::Cover | BackgroundSize::Contain => {
                let width_scale = region.width / natural.width;
                let height_scale = region.height / natural.height;
                let scale = if *self == BackgroundSize::Cover {
                    width_scale.max(height_scale)
                } else {
                    width_scale.min(height_scale)
                };
                natural.height * scale
            }
            BackgroundSize::Explicit { width, height } => {
                if let Some(height) = height.resolve(region.height) {
                    return height;
                }
                if let Some(width) = width.resolve(region.width) {
                    return width * (natural.height / natural.width);
                }
                natural.height
            }
        }
    }
}

/// Only the last layer of a multi-layer `background-size` is painted on top,
/// so that is the one that matters. `None` when the value is blank.
pub fn effective_layer(computed: &str) -> Option<&str> {
    let layer = computed.rsplit(',').next()?.trim();
    if layer.is_empty() {
        None
    } else {
        Some(layer)
    }
}
