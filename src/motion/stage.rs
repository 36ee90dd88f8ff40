//! The per-page animation registry.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::props::Props;
use super::timeline::{Callback, PlayEvent, Playhead, Timeline};
use super::trigger::{Action, Bounds, Cue, Trigger, TriggerMode, Viewport};
use super::{ScopeId, TargetId};

const SCRUB_EPSILON: f64 = 1e-4;

/// Where animated values end up. The browser implementation writes inline
/// styles; tests record writes in memory.
pub trait Surface {
    type Node;

    fn attach(&mut self, target: TargetId, node: Self::Node);

    /// Forget a target, removing any inline style written to it.
    fn detach(&mut self, target: TargetId);

    fn bounds(&self, target: TargetId) -> Option<Bounds>;

    fn viewport(&self) -> Viewport;

    fn apply(&mut self, target: TargetId, props: &Props);

    /// Remove inline styles written to a target but keep it attached.
    fn clear(&mut self, target: TargetId);
}

struct Binding {
    scope: ScopeId,
    timeline: Timeline,
    playhead: Playhead,
    trigger: Option<(Trigger, TargetId)>,
    scrub_goal: Option<f64>,
    rendered: Option<f64>,
}

impl Binding {
    fn new(scope: ScopeId, timeline: Timeline, trigger: Option<(Trigger, TargetId)>) -> Self {
        let playhead = timeline.playhead();
        Self {
            scope,
            timeline,
            playhead,
            trigger,
            scrub_goal: None,
            rendered: None,
        }
    }

    fn lag(&self) -> f64 {
        match self.trigger.as_ref().map(|(trigger, _)| trigger.mode()) {
            Some(TriggerMode::Scrub { lag }) => lag,
            _ => 0.0,
        }
    }

    fn cue(&mut self, cue: Cue) {
        match cue {
            Cue::Scrub(progress) if self.lag() > 0.0 => self.scrub_goal = Some(progress),
            Cue::Scrub(progress) => self.playhead.seek(progress),
            Cue::Toggle(action) => {
                let head = &mut self.playhead;
                match action {
                    Action::Play => head.play(),
                    Action::Pause => head.pause(),
                    Action::Resume => head.resume(),
                    Action::Reverse => head.reverse(),
                    Action::Restart => head.restart(),
                    Action::Reset => head.reset(),
                    Action::Complete => head.complete(),
                    Action::None => {}
                }
            }
        }
    }

    fn is_animating(&self) -> bool {
        self.playhead.is_playing() || self.scrub_goal.is_some()
    }
}

struct Layer {
    scope: ScopeId,
    target: TargetId,
    speed: f64,
    offset: Option<f64>,
}

struct StageInner<S: Surface> {
    surface: S,
    bindings: Vec<Binding>,
    layers: Vec<Layer>,
    targets: Vec<(ScopeId, TargetId)>,
}

impl<S: Surface> StageInner<S> {
    fn release(&mut self, scope: ScopeId) {
        self.bindings.retain(|b| b.scope != scope);
        self.layers.retain(|l| l.scope != scope);
        let surface = &mut self.surface;
        self.targets.retain(|&(owner, target)| {
            if owner == scope {
                surface.detach(target);
                false
            } else {
                true
            }
        });
    }

    fn measure(&mut self, only: Option<ScopeId>) {
        let viewport = self.surface.viewport();
        for binding in self.bindings.iter_mut().filter(|b| only.map_or(true, |s| b.scope == s)) {
            if let Some((trigger, anchor)) = binding.trigger.as_mut() {
                if let Some(bounds) = self.surface.bounds(*anchor) {
                    trigger.refresh(bounds, viewport.height);
                }
            }
        }
    }

    fn update_scroll(&mut self, only: Option<ScopeId>) {
        let scroll_y = self.surface.viewport().scroll_y;
        for binding in self.bindings.iter_mut().filter(|b| only.map_or(true, |s| b.scope == s)) {
            let cues = match binding.trigger.as_mut() {
                Some((trigger, _)) => trigger.update(scroll_y),
                None => continue,
            };
            for cue in cues {
                binding.cue(cue);
            }
        }
        for layer in self.layers.iter_mut().filter(|l| only.map_or(true, |s| l.scope == s)) {
            let offset = -scroll_y * layer.speed;
            if layer.offset != Some(offset) {
                self.surface.apply(layer.target, &Props::new().y(offset));
                layer.offset = Some(offset);
            }
        }
    }

    fn render(&mut self) {
        for binding in &mut self.bindings {
            let time = binding.playhead.time();
            if binding.rendered == Some(time) {
                continue;
            }
            for (target, props) in binding.timeline.sample(time) {
                self.surface.apply(target, &props);
            }
            binding.rendered = Some(time);
        }
    }

    fn advance(&mut self, dt: f64) -> Vec<Callback> {
        let mut callbacks = Vec::new();
        let mut clears = Vec::new();
        for binding in &mut self.bindings {
            if let Some(goal) = binding.scrub_goal {
                let current = binding.playhead.progress();
                let step = (dt / binding.lag()).min(1.0);
                let next = current + (goal - current) * step;
                if (goal - next).abs() < SCRUB_EPSILON {
                    binding.playhead.seek(goal);
                    binding.scrub_goal = None;
                } else {
                    binding.playhead.seek(next);
                }
            }
            if binding.playhead.advance(dt) == Some(PlayEvent::Completed) {
                callbacks.extend(binding.timeline.take_on_complete());
                if binding.timeline.clears_on_complete() {
                    clears.extend(binding.timeline.targets());
                }
            }
        }
        self.render();
        for target in clears {
            self.surface.clear(target);
        }
        callbacks
    }

    fn is_animating(&self) -> bool {
        self.bindings.iter().any(Binding::is_animating)
    }
}

/// Owns every live binding on the page. Cheap to clone; clones share state.
pub struct Stage<S: Surface> {
    inner: Rc<RefCell<StageInner<S>>>,
    released: Rc<RefCell<Vec<ScopeId>>>,
    ids: Rc<Cell<u64>>,
}

impl<S: Surface> Clone for Stage<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            released: Rc::clone(&self.released),
            ids: Rc::clone(&self.ids),
        }
    }
}

impl<S: Surface> Stage<S> {
    pub fn new(surface: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StageInner {
                surface,
                bindings: Vec::new(),
                layers: Vec::new(),
                targets: Vec::new(),
            })),
            released: Rc::new(RefCell::new(Vec::new())),
            ids: Rc::new(Cell::new(0)),
        }
    }

    fn next_id(&self) -> u64 {
        let id = self.ids.get() + 1;
        self.ids.set(id);
        id
    }

    /// Start describing a new scope.
    pub fn scene(&self) -> Scene<S> {
        Scene {
            stage: self.clone(),
            scope: ScopeId(self.next_id()),
            nodes: Vec::new(),
            bindings: Vec::new(),
            layers: Vec::new(),
        }
    }

    /// Tear down every scope whose handle has been dropped.
    pub fn flush(&self) {
        let scopes: Vec<ScopeId> = self.released.borrow_mut().drain(..).collect();
        if scopes.is_empty() {
            return;
        }
        let mut inner = self.inner.borrow_mut();
        for scope in scopes {
            tracing::trace!(scope = scope.0, "releasing motion scope");
            inner.release(scope);
        }
    }

    /// React to a new scroll position. Returns whether frames are needed.
    pub fn scroll(&self) -> bool {
        self.flush();
        let mut inner = self.inner.borrow_mut();
        inner.update_scroll(None);
        inner.render();
        inner.is_animating()
    }

    /// Re-measure every trigger, then react to the current scroll position.
    pub fn refresh(&self) -> bool {
        self.flush();
        self.inner.borrow_mut().measure(None);
        self.scroll()
    }

    /// Advance all playheads by `dt` seconds and render. Completion callbacks
    /// run after the stage is unlocked, so they may drop handles or build new
    /// scenes. Returns whether another frame is needed.
    pub fn frame(&self, dt: f64) -> bool {
        self.flush();
        let callbacks = self.inner.borrow_mut().advance(dt);
        for callback in callbacks {
            callback();
        }
        self.is_animating()
    }

    pub fn is_animating(&self) -> bool {
        self.inner.borrow().is_animating()
    }

    pub fn binding_count(&self) -> usize {
        self.inner.borrow().bindings.len()
    }

    pub fn target_count(&self) -> usize {
        self.inner.borrow().targets.len()
    }

    pub fn with_surface<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.inner.borrow_mut().surface)
    }
}

/// A scope under construction. Nothing reaches the surface until
/// [`Scene::commit`]; dropping an uncommitted scene leaves the page untouched.
pub struct Scene<S: Surface> {
    stage: Stage<S>,
    scope: ScopeId,
    nodes: Vec<(TargetId, S::Node)>,
    bindings: Vec<Binding>,
    layers: Vec<Layer>,
}

impl<S: Surface> Scene<S> {
    pub fn target(&mut self, node: S::Node) -> TargetId {
        let id = TargetId(self.stage.next_id());
        self.nodes.push((id, node));
        id
    }

    pub fn node(&self, target: TargetId) -> Option<&S::Node> {
        self.nodes.iter().find(|(id, _)| *id == target).map(|(_, node)| node)
    }

    /// Play as soon as the scene commits.
    pub fn play(&mut self, timeline: Timeline) {
        let mut binding = Binding::new(self.scope, timeline, None);
        binding.playhead.play();
        self.bindings.push(binding);
    }

    /// Drive `timeline` from `trigger`, measured against `anchor`.
    pub fn bind(&mut self, anchor: TargetId, trigger: Trigger, timeline: Timeline) {
        self.bindings
            .push(Binding::new(self.scope, timeline, Some((trigger, anchor))));
    }

    /// Translate `target` vertically by `-scroll_y * speed`.
    pub fn parallax(&mut self, target: TargetId, speed: f64) {
        self.layers.push(Layer {
            scope: self.scope,
            target,
            speed,
            offset: None,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty() && self.layers.is_empty()
    }

    /// Hand everything to the stage and render the first frame.
    pub fn commit(self) -> MotionHandle {
        let Scene {
            stage,
            scope,
            nodes,
            bindings,
            layers,
        } = self;
        stage.flush();
        {
            let mut inner = stage.inner.borrow_mut();
            for (target, node) in nodes {
                inner.surface.attach(target, node);
                inner.targets.push((scope, target));
            }
            inner.bindings.extend(bindings);
            inner.layers.extend(layers);
            inner.measure(Some(scope));
            inner.update_scroll(Some(scope));
            inner.render();
        }
        MotionHandle {
            scope,
            queue: Rc::downgrade(&stage.released),
        }
    }
}

/// Keeps a committed scope alive. Dropping it releases every binding and
/// target of the scope before the stage next touches the page.
#[must_use = "dropping the handle releases the scene immediately"]
pub struct MotionHandle {
    scope: ScopeId,
    queue: Weak<RefCell<Vec<ScopeId>>>,
}

impl MotionHandle {
    pub fn scope(&self) -> ScopeId {
        self.scope
    }
}

impl Drop for MotionHandle {
    fn drop(&mut self) {
        if let Some(queue) = self.queue.upgrade() {
            queue.borrow_mut().push(self.scope);
        }
    }
}
