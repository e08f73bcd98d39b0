use crate::{
    foundation::core::{Lifecycle, Phase, ScrollSample},
    gradient::GradientSpec,
    motion::{self, MotionFrame},
    phase::map_phase,
    text::{self, TextColors},
};

/// Everything the rendering surface needs for one display frame, fully
/// evaluated and serializable. Recomputed per frame, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneFrame {
    pub lifecycle: Lifecycle,
    pub phase: Phase,
    pub gradient: GradientSpec,
    pub text: TextColors,
    pub motion: MotionFrame,
}

/// Pure per-frame evaluation: `ScrollSample -> SceneFrame`.
///
/// Owns the hydration lifecycle and the reduced-motion preference. While
/// `Unmounted` every evaluation yields the same fallback frame (phase 0
/// gradient, fallback text pair, identity motion) no matter the input, so a
/// statically rendered first paint and the first client paint agree.
#[derive(Clone, Copy, Debug)]
pub struct Evaluator {
    lifecycle: Lifecycle,
    reduced_motion: bool,
}

impl Evaluator {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            lifecycle: Lifecycle::Unmounted,
            reduced_motion,
        }
    }

    /// An already-mounted evaluator, for hosts without a hydration step.
    pub fn mounted(reduced_motion: bool) -> Self {
        Self {
            lifecycle: Lifecycle::Mounted,
            reduced_motion,
        }
    }

    /// One-way transition; safe to call again once mounted.
    pub fn mount(&mut self) {
        self.lifecycle.mount();
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn eval_sample(&self, sample: ScrollSample) -> SceneFrame {
        let phase = match self.lifecycle {
            Lifecycle::Unmounted => Phase::ZERO,
            Lifecycle::Mounted => map_phase(sample),
        };
        self.eval_phase(phase)
    }

    pub fn eval_phase(&self, phase: Phase) -> SceneFrame {
        let phase = match self.lifecycle {
            Lifecycle::Unmounted => Phase::ZERO,
            Lifecycle::Mounted => phase,
        };
        SceneFrame {
            lifecycle: self.lifecycle,
            phase,
            gradient: GradientSpec::at(phase),
            text: text::resolve_text_colors(self.lifecycle, phase),
            motion: motion::synthesize_motion(self.lifecycle, phase, self.reduced_motion),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{foundation::core::Rgb8, gradient::BASE_PALETTE, text::FALLBACK_TEXT_COLORS};

    #[test]
    fn unmounted_frames_ignore_input() {
        let eval = Evaluator::new(false);
        let a = eval.eval_sample(ScrollSample::new(0, 800).unwrap());
        let b = eval.eval_sample(ScrollSample::new(3200, 800).unwrap());
        assert_eq!(a, b);
        assert_eq!(a.phase, Phase::ZERO);
        assert_eq!(a.gradient.stops, BASE_PALETTE);
        assert_eq!(a.text, FALLBACK_TEXT_COLORS);
        assert_eq!(a.motion, MotionFrame::IDENTITY);
    }

    #[test]
    fn mount_is_one_way() {
        let mut eval = Evaluator::new(false);
        eval.mount();
        assert!(eval.lifecycle().is_mounted());
        eval.mount();
        assert!(eval.lifecycle().is_mounted());
    }

    #[test]
    fn end_to_end_midpoint_scenario() {
        // viewport 800, scroll 1600 -> phase 0.5
        let eval = Evaluator::mounted(false);
        let frame = eval.eval_sample(ScrollSample::new(1600, 800).unwrap());
        assert_eq!(frame.phase.value(), 0.5);
        assert_eq!(frame.text.primary, Rgb8::new(190, 110, 50));
        assert_eq!(frame.text.secondary, Rgb8::new(207, 135, 75));
        assert_ne!(frame.motion, MotionFrame::IDENTITY);
    }

    #[test]
    fn reduced_motion_only_stills_the_drift() {
        let still = Evaluator::mounted(true);
        let moving = Evaluator::mounted(false);
        let sample = ScrollSample::new(1000, 800).unwrap();
        let a = still.eval_sample(sample);
        let b = moving.eval_sample(sample);
        assert_eq!(a.motion, MotionFrame::IDENTITY);
        assert_eq!(a.gradient, b.gradient);
        assert_eq!(a.text, b.text);
        assert_eq!(a.phase, b.phase);
    }

    #[test]
    fn frames_serialize_deterministically() {
        let eval = Evaluator::mounted(false);
        let frame = eval.eval_sample(ScrollSample::new(777, 900).unwrap());
        let a = serde_json::to_string(&frame).unwrap();
        let b = serde_json::to_string(&frame).unwrap();
        assert_eq!(a, b);
        let back: SceneFrame = serde_json::from_str(&a).unwrap();
        assert_eq!(back, frame);
    }
}
