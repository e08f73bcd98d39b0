//! Thin CSS adapter over [`SceneFrame`]. The engine stays pure; this module
//! only formats already-computed values for a style-driven surface.

use std::borrow::Cow;

use crate::{eval::SceneFrame, gradient, motion::Drift};

/// Custom property mirroring the current phase for external CSS consumers.
pub const PHASE_VAR: &str = "--phase";

/// Background declaration value. Before mount this is the fixed fallback
/// string (no allocation), afterwards the evaluated gradient.
pub fn background(frame: &SceneFrame) -> Cow<'static, str> {
    gradient::background_css(frame.lifecycle, frame.phase)
}

pub fn primary_color(frame: &SceneFrame) -> String {
    frame.text.primary.css()
}

pub fn secondary_color(frame: &SceneFrame) -> String {
    frame.text.secondary.css()
}

/// CSS transform for one drift record. Identity drift renders as the
/// canonical identity transform so reduced-motion output is stable.
pub fn transform(drift: &Drift) -> String {
    format!(
        "translate({:.2}px, {:.2}px) rotate({:.2}deg) scale({:.4})",
        drift.translate.x, drift.translate.y, drift.rotation_deg, drift.scale
    )
}

/// `--phase: <value>` declaration for the document root.
pub fn phase_declaration(frame: &SceneFrame) -> String {
    format!("{}: {}", PHASE_VAR, frame.phase.value())
}
