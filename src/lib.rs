//! Scrolly is the orchestration core of a scroll-driven narrative page.
//!
//! A page is a stack of "pinned" sections: while a section is pinned, the
//! viewport holds in place and the section's internal visual properties
//! (translation, scale, opacity, rotation) are scrubbed by scroll progress.
//! Once scrolling settles, the page snaps toward the nearest pinned
//! section's center, while gaps between pinned spans stay freely scrollable.
//!
//! # Pipeline overview
//!
//! 1. **Map**: raw scroll offset + a section's pinned span -> progress in `[0,1]`
//! 2. **Scrub**: `SectionTimeline + progress -> ElementStyle` per element (pure)
//! 3. **Coordinate**: `PinRegistry` snapshot + candidate position -> snap target
//! 4. **Drive**: [`Engine`] owns lifecycle, the per-frame tick, and settle
//!
//! The crate computes numbers; a host applies them to an actual viewport.
//! Nothing here paints pixels, touches the DOM, or blocks.
//!
//! Key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic scrubbing**: sampling a timeline at a given progress is
//!   pure, so forward/backward scrub is reversible with no hysteresis.
//! - **No hidden global state**: the registry and coordinator are owned by an
//!   [`Engine`] instance and re-instantiable per test.

#![forbid(unsafe_code)]

pub mod core;
pub mod ease;
pub mod engine;
pub mod error;
pub mod presets;
pub mod progress;
pub mod registry;
pub mod snap;
pub mod storyboard;
pub mod timeline;

pub use crate::core::{
    ContainerBounds, NormalizedRegion, PhaseWindows, PinnedRegion, ScrollMetrics,
};
pub use ease::Ease;
pub use engine::{Activation, Engine, FrameUpdate};
pub use error::{ScrollyError, ScrollyResult};
pub use progress::{normalized_position, section_progress};
pub use registry::PinRegistry;
pub use snap::{SnapConfig, SnapCoordinator, SnapDecision, SnapDurationRange, SnapTween};
pub use storyboard::{SectionConfig, SectionSpec, Storyboard};
pub use timeline::{ElementStyle, Property, ProgressWindow, SectionFrame, SectionTimeline, Tween};
