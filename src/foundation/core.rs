use crate::foundation::error::{SundriftError, SundriftResult};

pub use kurbo::Vec2;

/// Normalized scroll progress in [0,1]. Construction clamps, so a `Phase`
/// in hand is always valid.
#[derive(
    Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize,
)]
#[serde(from = "f64", into = "f64")]
pub struct Phase(f64);

impl Phase {
    pub const ZERO: Phase = Phase(0.0);
    pub const ONE: Phase = Phase(1.0);

    /// Clamp to [0,1]. NaN maps to 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Phase {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Phase> for f64 {
    fn from(phase: Phase) -> Self {
        phase.0
    }
}

/// One reading of the host scroll state, taken once per display frame.
/// The engine never mutates it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScrollSample {
    pub scroll_offset_px: u32,
    pub viewport_height_px: u32, // must be > 0
}

impl ScrollSample {
    pub fn new(scroll_offset_px: u32, viewport_height_px: u32) -> SundriftResult<Self> {
        if viewport_height_px == 0 {
            return Err(SundriftError::validation(
                "ScrollSample viewport_height_px must be > 0",
            ));
        }
        Ok(Self {
            scroll_offset_px,
            viewport_height_px,
        })
    }
}

/// Hydration state of the experience. Starts `Unmounted` (first paint uses
/// static fallback values) and moves to `Mounted` exactly once, when the
/// client can measure scroll. There is no way back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Lifecycle {
    Unmounted,
    Mounted,
}

impl Lifecycle {
    pub fn mount(&mut self) {
        *self = Self::Mounted;
    }

    pub fn is_mounted(self) -> bool {
        matches!(self, Self::Mounted)
    }
}

/// Straight (non-premultiplied) RGB8. All engine colors are opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS functional notation, e.g. `rgb(255, 204, 128)`.
    pub fn css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_clamps_and_rejects_non_finite() {
        assert_eq!(Phase::new(-0.5), Phase::ZERO);
        assert_eq!(Phase::new(1.5), Phase::ONE);
        assert_eq!(Phase::new(f64::NAN), Phase::ZERO);
        assert_eq!(Phase::new(f64::INFINITY), Phase::ONE);
        assert_eq!(Phase::new(f64::NEG_INFINITY), Phase::ZERO);
        assert_eq!(Phase::new(0.25).value(), 0.25);
    }

    #[test]
    fn scroll_sample_requires_positive_viewport() {
        assert!(ScrollSample::new(0, 0).is_err());
        let s = ScrollSample::new(1600, 800).unwrap();
        assert_eq!(s.scroll_offset_px, 1600);
        assert_eq!(s.viewport_height_px, 800);
    }

    #[test]
    fn lifecycle_mount_is_one_way() {
        let mut lc = Lifecycle::Unmounted;
        assert!(!lc.is_mounted());
        lc.mount();
        assert!(lc.is_mounted());
        lc.mount(); // idempotent
        assert!(lc.is_mounted());
    }

    #[test]
    fn rgb_css_notation() {
        assert_eq!(Rgb8::new(255, 204, 128).css(), "rgb(255, 204, 128)");
    }
}
