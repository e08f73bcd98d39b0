use std::sync::OnceLock;

use crate::{
    color::{KeyTrack, Lerp},
    foundation::core::{Lifecycle, Phase, Rgb8},
};

/// A (primary, secondary) headline color pair. The two channels follow the
/// same keyframe journey but never share exact values, which keeps the two
/// text elements visually distinct at every phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TextColors {
    pub primary: Rgb8,
    pub secondary: Rgb8,
}

impl Lerp for TextColors {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            primary: Rgb8::lerp(&a.primary, &b.primary, t),
            secondary: Rgb8::lerp(&a.secondary, &b.secondary, t),
        }
    }
}

/// Pre-mount pair, matching the CSS-only fallback (#B45309 / #C2410C).
pub const FALLBACK_TEXT_COLORS: TextColors = TextColors {
    primary: Rgb8::new(0xB4, 0x53, 0x09),
    secondary: Rgb8::new(0xC2, 0x41, 0x0C),
};

/// Warm brown at dawn through vibrant orange at sunset, complementing the
/// background palette stop-for-stop.
const TEXT_JOURNEY: [TextColors; 6] = [
    TextColors {
        primary: Rgb8::new(120, 113, 108),
        secondary: Rgb8::new(146, 139, 134),
    }, // dawn: warm brown
    TextColors {
        primary: Rgb8::new(146, 124, 99),
        secondary: Rgb8::new(168, 146, 121),
    }, // early morning: amber brown
    TextColors {
        primary: Rgb8::new(180, 120, 60),
        secondary: Rgb8::new(194, 140, 80),
    }, // golden: rich amber
    TextColors {
        primary: Rgb8::new(200, 100, 40),
        secondary: Rgb8::new(220, 130, 70),
    }, // warm golden: deep amber
    TextColors {
        primary: Rgb8::new(220, 90, 30),
        secondary: Rgb8::new(240, 120, 60),
    }, // sunset: vibrant orange
    TextColors {
        primary: Rgb8::new(200, 80, 40),
        secondary: Rgb8::new(220, 110, 70),
    }, // deep sunset: warm orange
];

fn journey_track() -> &'static KeyTrack<TextColors> {
    static TRACK: OnceLock<KeyTrack<TextColors>> = OnceLock::new();
    TRACK.get_or_init(|| {
        KeyTrack::new(TEXT_JOURNEY.to_vec()).expect("text journey table is a fixed 6-key constant")
    })
}

/// Text colors for the current lifecycle state. Before mount this is the
/// fixed [`FALLBACK_TEXT_COLORS`] regardless of `phase`.
pub fn resolve_text_colors(lifecycle: Lifecycle, phase: Phase) -> TextColors {
    match lifecycle {
        Lifecycle::Unmounted => FALLBACK_TEXT_COLORS,
        Lifecycle::Mounted => journey_track().sample(phase),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_match_the_table() {
        assert_eq!(
            resolve_text_colors(Lifecycle::Mounted, Phase::ZERO),
            TEXT_JOURNEY[0]
        );
        assert_eq!(
            resolve_text_colors(Lifecycle::Mounted, Phase::ONE),
            TEXT_JOURNEY[5]
        );
    }

    #[test]
    fn midpoint_blends_keys_two_and_three() {
        // phase 0.5 over 6 keys -> position 2.5, halfway between keys 2 and 3
        let mid = resolve_text_colors(Lifecycle::Mounted, Phase::new(0.5));
        assert_eq!(mid.primary, Rgb8::new(190, 110, 50));
        assert_eq!(mid.secondary, Rgb8::new(207, 135, 75));
    }

    #[test]
    fn unmounted_ignores_phase() {
        for p in [Phase::ZERO, Phase::new(0.42), Phase::ONE] {
            assert_eq!(
                resolve_text_colors(Lifecycle::Unmounted, p),
                FALLBACK_TEXT_COLORS
            );
        }
    }

    #[test]
    fn primary_and_secondary_stay_distinct() {
        for i in 0..=60 {
            let c = resolve_text_colors(Lifecycle::Mounted, Phase::new(i as f64 / 60.0));
            assert_ne!(c.primary, c.secondary);
        }
    }
}
