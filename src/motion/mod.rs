//! Scroll and timeline animation.
//!
//! Sections describe their animations as [`Timeline`]s, optionally bound to a
//! scroll [`Trigger`], inside a [`Scene`]. Committing a scene hands everything
//! to the page's [`Stage`] and returns a [`MotionHandle`]; dropping the handle
//! is the only way to tear the scene down. Markup is expected to be visible at
//! rest: nothing is written to an element until its scene commits.

pub mod dom;
mod easing;
mod props;
mod stage;
#[cfg(test)]
pub(crate) mod testing;
mod timeline;
mod trigger;

pub use dom::{
    animate, request_refresh, use_motion, use_motion_eager, DomScene, DomSurface, MotionReady,
};
pub use easing::Easing;
pub use props::{Clip, Props, Rgba};
pub use stage::{MotionHandle, Scene, Stage, Surface};
pub use timeline::{Playhead, PlayEvent, Position, Repeat, Timeline, Tween};
pub use trigger::{
    Action, Bounds, Cue, Edge, EndMarker, Marker, ScrollRange, ToggleActions, Trigger,
    TriggerMode, Viewport,
};

/// Identifies one animated element within a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub(crate) u64);

/// Identifies everything one committed scene registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(pub(crate) u64);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MotionError {
    #[error("no browser window available")]
    NoWindow,
    #[error("animation target not mounted: {0}")]
    TargetMissing(&'static str),
    #[error("invalid scroll marker: {0:?}")]
    InvalidMarker(String),
    #[error("invalid toggle actions: {0:?}")]
    InvalidToggleActions(String),
    #[error("DOM error: {0}")]
    Dom(String),
}
