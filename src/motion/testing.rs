//! An in-memory surface for exercising scenes without a browser.

use std::collections::HashMap;

use super::stage::{Stage, Surface};
use super::trigger::{Bounds, Viewport};
use super::{Props, TargetId};

/// Records the last props written per target and counts writes.
#[derive(Default)]
pub(crate) struct Recorder {
    pub nodes: HashMap<TargetId, Bounds>,
    pub styles: HashMap<TargetId, Props>,
    pub viewport: Viewport,
    pub writes: usize,
    pub detached: Vec<TargetId>,
}

impl Surface for Recorder {
    type Node = Bounds;

    fn attach(&mut self, target: TargetId, node: Bounds) {
        self.nodes.insert(target, node);
    }

    fn detach(&mut self, target: TargetId) {
        self.nodes.remove(&target);
        self.styles.remove(&target);
        self.detached.push(target);
    }

    fn bounds(&self, target: TargetId) -> Option<Bounds> {
        self.nodes.get(&target).copied()
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn apply(&mut self, target: TargetId, props: &Props) {
        assert!(self.nodes.contains_key(&target), "write to detached target");
        self.styles.entry(target).or_default().overlay(props);
        self.writes += 1;
    }

    fn clear(&mut self, target: TargetId) {
        self.styles.remove(&target);
    }
}

pub(crate) fn stage() -> Stage<Recorder> {
    Stage::new(Recorder {
        viewport: Viewport {
            scroll_y: 0.0,
            height: 800.0,
        },
        ..Recorder::default()
    })
}

pub(crate) fn set_scroll(stage: &Stage<Recorder>, scroll_y: f64) {
    stage.with_surface(|s| s.viewport.scroll_y = scroll_y);
    stage.scroll();
}

pub(crate) fn style(stage: &Stage<Recorder>, target: TargetId) -> Option<Props> {
    stage.with_surface(|s| s.styles.get(&target).cloned())
}

/// Run frames at 60 fps for `seconds`.
pub(crate) fn run(stage: &Stage<Recorder>, seconds: f64) {
    let frames = (seconds * 60.0).ceil() as usize;
    for _ in 0..frames {
        stage.frame(1.0 / 60.0);
    }
}

/// Whether `actual` is set and within float noise of `expected`.
pub(crate) fn near(actual: Option<f64>, expected: f64) -> bool {
    actual.is_some_and(|value| (value - expected).abs() < 1e-6)
}
