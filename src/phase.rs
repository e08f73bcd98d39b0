use crate::foundation::core::{Phase, ScrollSample};

/// The experience spans four viewport heights of scroll.
pub const SCROLL_RANGE_VIEWPORTS: u32 = 4;

/// Map a scroll sample to a phase: `clamp(offset / (viewport * 4), 0, 1)`.
///
/// The mapping is deliberately linear with no easing so the nonlinear
/// color/motion curves downstream stay the sole source of perceptual easing.
/// Stateless: the same sample always yields the same phase.
pub fn map_phase(sample: ScrollSample) -> Phase {
    let range = f64::from(sample.viewport_height_px) * f64::from(SCROLL_RANGE_VIEWPORTS);
    Phase::new(f64::from(sample.scroll_offset_px) / range)
}
