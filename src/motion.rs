use std::f64::consts::PI;

use crate::foundation::core::{Lifecycle, Phase, Vec2};

/// Ambient drift applied to one element group: translation in px, rotation
/// in degrees, uniform scale.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Drift {
    pub translate: Vec2,
    pub rotation_deg: f64,
    pub scale: f64,
}

impl Drift {
    pub const IDENTITY: Drift = Drift {
        translate: Vec2::ZERO,
        rotation_deg: 0.0,
        scale: 1.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

/// Drift for the three animated layers. Each layer uses its own
/// frequency/amplitude pairs so no two ever move in lockstep (parallax).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MotionFrame {
    pub container: Drift,
    pub headline: Drift,
    pub tagline: Drift,
}

impl MotionFrame {
    pub const IDENTITY: MotionFrame = MotionFrame {
        container: Drift::IDENTITY,
        headline: Drift::IDENTITY,
        tagline: Drift::IDENTITY,
    };
}

fn sine(phase: Phase, freq: f64, amp: f64) -> f64 {
    (phase.value() * PI * freq).sin() * amp
}

fn cosine(phase: Phase, freq: f64, amp: f64) -> f64 {
    (phase.value() * PI * freq).cos() * amp
}

/// Superposed-sinusoid drift for the given phase.
///
/// Each offset sums two or three low-frequency terms at small amplitudes so
/// the motion reads as drifting rather than oscillation. Identity is
/// returned unconditionally before mount or when the host prefers reduced
/// motion; honoring that preference is a correctness rule, not an
/// optimization.
pub fn synthesize_motion(lifecycle: Lifecycle, phase: Phase, reduced_motion: bool) -> MotionFrame {
    if reduced_motion || !lifecycle.is_mounted() {
        return MotionFrame::IDENTITY;
    }

    let container = Drift {
        translate: Vec2::new(
            cosine(phase, 3.0, 6.0) + sine(phase, 5.0, 3.0),
            sine(phase, 4.0, 8.0) + sine(phase, 6.0, 4.0),
        ),
        rotation_deg: sine(phase, 2.5, 1.5),
        scale: 1.0 + sine(phase, 8.0, 0.02),
    };

    let headline = Drift {
        translate: Vec2::new(cosine(phase, 5.5, 2.0), sine(phase, 7.0, 3.0)),
        rotation_deg: 0.0,
        scale: 1.0,
    };

    let tagline = Drift {
        translate: Vec2::new(cosine(phase, 4.5, 1.5), sine(phase, 6.5, 2.0)),
        rotation_deg: sine(phase, 3.5, 0.8),
        scale: 1.0,
    };

    MotionFrame {
        container,
        headline,
        tagline,
    }
}
