//! Sundrift is a scroll-phase-driven ambient animation engine.
//!
//! A single normalized phase in [0,1], derived from vertical scroll
//! position, drives every visual parameter of a continuous scroll
//! experience: a six-stop background gradient, a pair of headline text
//! colors, and small superposed-sinusoid drift offsets.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: the host reads a [`ScrollSample`] once per display frame
//! 2. **Map**: [`map_phase`] turns the sample into a clamped [`Phase`]
//! 3. **Evaluate**: [`Evaluator`] derives a complete [`SceneFrame`]
//!    (gradient stops, text colors, drift) from the phase
//! 4. **Publish**: [`RenderLoop`] drives steps 1-3 on an abstract
//!    [`FrameScheduler`] and hands each frame to a [`FrameSink`]; the
//!    [`style`] adapter formats frames for a CSS-like surface
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic and stateless**: the same sample always evaluates to
//!   the same frame; no hidden accumulation across frames.
//! - **Hydration-safe**: before [`Lifecycle::Mounted`], every component
//!   returns a fixed fallback so a static first paint and the first client
//!   paint agree.
//! - **Reduced motion is unconditional**: the accessibility preference
//!   forces identity drift at every phase.
#![forbid(unsafe_code)]

pub mod color;
pub mod eval;
pub mod foundation;
pub mod gradient;
pub mod motion;
pub mod phase;
pub mod runtime;
pub mod schedule;
pub mod style;
pub mod text;

pub use color::{KeyTrack, Lerp};
pub use eval::{Evaluator, SceneFrame};
pub use foundation::core::{Lifecycle, Phase, Rgb8, ScrollSample, Vec2};
pub use foundation::error::{SundriftError, SundriftResult};
pub use gradient::{BASE_PALETTE, FALLBACK_CSS, GradientSpec, background_css, intensity};
pub use motion::{Drift, MotionFrame, synthesize_motion};
pub use phase::{SCROLL_RANGE_VIEWPORTS, map_phase};
pub use runtime::{FrameSink, LoopState, RecordingSink, RenderLoop, SCROLL_DELTA_THRESHOLD_PX};
pub use schedule::{FrameScheduler, ManualScheduler, ScheduleToken};
pub use text::{FALLBACK_TEXT_COLORS, TextColors, resolve_text_colors};
