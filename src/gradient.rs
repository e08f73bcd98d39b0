use std::borrow::Cow;

use crate::foundation::core::{Lifecycle, Phase, Rgb8};

pub const GRADIENT_STOPS: usize = 6;

/// Warm dawn-to-sunset palette, in top-to-bottom stop order.
pub const BASE_PALETTE: [Rgb8; GRADIENT_STOPS] = [
    Rgb8::new(255, 255, 255), // dawn
    Rgb8::new(255, 249, 245), // pre-golden
    Rgb8::new(255, 245, 230), // golden
    Rgb8::new(255, 228, 181), // warm golden
    Rgb8::new(255, 204, 128), // sunset
    Rgb8::new(255, 138, 101), // deep sunset
];

/// Pre-mount gradient, identical to the phase-0 palette. Hex form so it
/// matches the statically rendered markup byte-for-byte.
pub const FALLBACK_CSS: &str =
    "linear-gradient(180deg, #FFFFFF, #FFF9F5, #FFF5E6, #FFE4B5, #FFCC80, #FF8A65)";

/// Uniform brightness factor applied to every stop. Descends linearly from
/// 1.0 at phase 0 and floors at 0.4 so the page never blacks out.
pub fn intensity(phase: Phase) -> f64 {
    (1.0 - phase.value() * 0.6).max(0.4)
}

/// A fully evaluated background gradient: six stops, fixed top-to-bottom
/// direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GradientSpec {
    pub stops: [Rgb8; GRADIENT_STOPS],
}

impl GradientSpec {
    /// Darken the base palette toward `intensity(phase)`. This scales one
    /// palette rather than blending between keyframe palettes, which is why
    /// it does not go through [`crate::color::KeyTrack`].
    pub fn at(phase: Phase) -> Self {
        let k = intensity(phase);
        let darken = |c: Rgb8| {
            Rgb8::new(
                (f64::from(c.r) * k).round() as u8,
                (f64::from(c.g) * k).round() as u8,
                (f64::from(c.b) * k).round() as u8,
            )
        };
        Self {
            stops: BASE_PALETTE.map(darken),
        }
    }

    /// CSS `linear-gradient(180deg, ..)` over the evaluated stops.
    pub fn css(&self) -> String {
        let stops: Vec<String> = self.stops.iter().map(|s| s.css()).collect();
        format!("linear-gradient(180deg, {})", stops.join(", "))
    }
}

/// Background declaration for the current lifecycle state. Before mount this
/// is the fixed [`FALLBACK_CSS`] regardless of `phase`, so server and client
/// first paints cannot diverge.
pub fn background_css(lifecycle: Lifecycle, phase: Phase) -> Cow<'static, str> {
    match lifecycle {
        Lifecycle::Unmounted => Cow::Borrowed(FALLBACK_CSS),
        Lifecycle::Mounted => Cow::Owned(GradientSpec::at(phase).css()),
    }
}
