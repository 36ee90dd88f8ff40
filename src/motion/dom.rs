//! Browser surface and the page-wide animation driver.
//!
//! One [`Stage`] per page lives in a thread local. Window scroll, resize and
//! load events mark it dirty; a single `requestAnimationFrame` loop then
//! updates triggers and advances playheads, stopping once nothing moves.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::stage::{MotionHandle, Scene, Stage, Surface};
use super::trigger::{Bounds, Viewport};
use super::{MotionError, Props, TargetId};
use crate::browser;

/// Longest step a single frame may take, so a backgrounded tab does not
/// jump every timeline to its end on return.
const MAX_FRAME_SECONDS: f64 = 0.1;

pub type DomScene = Scene<DomSurface>;

/// Whether section animations may register yet. Provided by the app root and
/// flipped once the loader has finished.
#[derive(Debug, Clone, Copy)]
pub struct MotionReady(pub ReadSignal<bool>);

struct Attached {
    element: HtmlElement,
    /// Everything written so far. Bindings that animate different transform
    /// components of one element compose instead of overwriting each other.
    state: Props,
    touched: Vec<&'static str>,
}

/// Writes props as inline styles.
#[derive(Default)]
pub struct DomSurface {
    nodes: HashMap<TargetId, Attached>,
}

impl DomSurface {
    fn strip(attached: &mut Attached) {
        let style = attached.element.style();
        for name in attached.touched.drain(..) {
            let _ = style.remove_property(name);
        }
        attached.state = Props::new();
    }
}

impl Surface for DomSurface {
    type Node = HtmlElement;

    fn attach(&mut self, target: TargetId, element: HtmlElement) {
        self.nodes.insert(
            target,
            Attached {
                element,
                state: Props::new(),
                touched: Vec::new(),
            },
        );
    }

    fn detach(&mut self, target: TargetId) {
        if let Some(mut attached) = self.nodes.remove(&target) {
            Self::strip(&mut attached);
        }
    }

    fn bounds(&self, target: TargetId) -> Option<Bounds> {
        let attached = self.nodes.get(&target)?;
        let rect = attached.element.get_bounding_client_rect();
        Some(Bounds {
            top: rect.top() + browser::scroll_y(),
            height: rect.height(),
        })
    }

    fn viewport(&self) -> Viewport {
        Viewport {
            scroll_y: browser::scroll_y(),
            height: browser::viewport_height(),
        }
    }

    fn apply(&mut self, target: TargetId, props: &Props) {
        let Some(attached) = self.nodes.get_mut(&target) else {
            return;
        };
        attached.state.overlay(props);
        let style = attached.element.style();
        for (name, value) in attached.state.declarations() {
            if let Err(err) = style.set_property(name, &value) {
                tracing::debug!(property = name, ?err, "style write rejected");
                continue;
            }
            if !attached.touched.contains(&name) {
                attached.touched.push(name);
            }
        }
        if let Some(text) = props.text() {
            attached.element.set_text_content(Some(&text));
        }
    }

    fn clear(&mut self, target: TargetId) {
        if let Some(attached) = self.nodes.get_mut(&target) {
            Self::strip(attached);
        }
    }
}

impl Scene<DomSurface> {
    /// Register a mounted element, typically from `NodeRef::get_untracked`.
    pub fn element<E>(&mut self, name: &'static str, node: Option<E>) -> Result<TargetId, MotionError>
    where
        E: Into<HtmlElement>,
    {
        node.map(|node| self.target(node.into()))
            .ok_or(MotionError::TargetMissing(name))
    }

    /// Register a mounted element and keep a handle to it for scoped queries.
    pub fn root<E>(
        &mut self,
        name: &'static str,
        node: Option<E>,
    ) -> Result<(TargetId, HtmlElement), MotionError>
    where
        E: Into<HtmlElement>,
    {
        let element: HtmlElement = node.map(Into::into).ok_or(MotionError::TargetMissing(name))?;
        Ok((self.target(element.clone()), element))
    }

    /// Register the first descendant of `root` matching `selector`.
    pub fn select(
        &mut self,
        root: &HtmlElement,
        selector: &'static str,
    ) -> Result<TargetId, MotionError> {
        let found = root
            .query_selector(selector)
            .map_err(dom_error)?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or(MotionError::TargetMissing(selector))?;
        Ok(self.target(found))
    }

    /// Register every descendant of `root` matching `selector`, in document
    /// order. Matching nothing is not an error.
    pub fn select_all(
        &mut self,
        root: &HtmlElement,
        selector: &str,
    ) -> Result<Vec<TargetId>, MotionError> {
        let list = root.query_selector_all(selector).map_err(dom_error)?;
        let elements: Vec<HtmlElement> = (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect();
        Ok(elements.into_iter().map(|el| self.target(el)).collect())
    }

    /// Register the element children of `root`, in document order.
    pub fn children(&mut self, root: &HtmlElement) -> Vec<TargetId> {
        let list = root.children();
        let elements: Vec<HtmlElement> = (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();
        elements.into_iter().map(|el| self.target(el)).collect()
    }
}

fn dom_error(err: wasm_bindgen::JsValue) -> MotionError {
    MotionError::Dom(format!("{err:?}"))
}

struct Driver {
    stage: Stage<DomSurface>,
    queued: Cell<bool>,
    scrolled: Cell<bool>,
    stale: Cell<bool>,
    last_tick: Cell<Option<f64>>,
}

impl Driver {
    fn wake(self: &Rc<Self>) {
        if self.queued.replace(true) {
            return;
        }
        let driver = Rc::clone(self);
        request_animation_frame(move || driver.tick());
    }

    fn tick(self: &Rc<Self>) {
        self.queued.set(false);
        let now = browser::now_seconds();
        let dt = self
            .last_tick
            .get()
            .map_or(0.0, |last| (now - last).clamp(0.0, MAX_FRAME_SECONDS));

        let mut animating = false;
        if self.stale.replace(false) {
            self.scrolled.set(false);
            animating |= self.stage.refresh();
        } else if self.scrolled.replace(false) {
            animating |= self.stage.scroll();
        }
        animating |= self.stage.frame(dt);

        if animating {
            self.last_tick.set(Some(now));
            self.wake();
        } else {
            self.last_tick.set(None);
        }
    }
}

thread_local! {
    static DRIVER: RefCell<Option<Rc<Driver>>> = const { RefCell::new(None) };
}

fn driver() -> Result<Rc<Driver>, MotionError> {
    if let Some(driver) = DRIVER.with(|slot| slot.borrow().clone()) {
        return Ok(driver);
    }
    web_sys::window().ok_or(MotionError::NoWindow)?;

    let driver = Rc::new(Driver {
        stage: Stage::new(DomSurface::default()),
        queued: Cell::new(false),
        scrolled: Cell::new(false),
        stale: Cell::new(false),
        last_tick: Cell::new(None),
    });

    // The listeners live as long as the page.
    let on_scroll = Rc::clone(&driver);
    let _ = window_event_listener(ev::scroll, move |_| {
        on_scroll.scrolled.set(true);
        on_scroll.wake();
    });
    let on_resize = Rc::clone(&driver);
    let _ = window_event_listener(ev::resize, move |_| {
        on_resize.stale.set(true);
        on_resize.wake();
    });
    let on_load = Rc::clone(&driver);
    let _ = window_event_listener(ev::load, move |_| {
        on_load.stale.set(true);
        on_load.wake();
    });

    tracing::debug!("motion driver started");
    DRIVER.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&driver)));
    Ok(driver)
}

/// Build and commit a scene right away, outside any component lifetime.
/// The caller owns the returned handle.
pub fn animate<F>(build: F) -> Result<MotionHandle, MotionError>
where
    F: FnOnce(&mut DomScene) -> Result<(), MotionError>,
{
    let driver = driver()?;
    let mut scene = driver.stage.scene();
    build(&mut scene)?;
    let handle = scene.commit();
    driver.wake();
    Ok(handle)
}

/// The committed scope of one component. Disposing the owning reactive scope
/// drops the handle, then runs `release` so the stage forgets it at once.
#[derive(Clone, Copy)]
pub(crate) struct ScopeSlot {
    handle: StoredValue<Option<MotionHandle>, LocalStorage>,
}

impl ScopeSlot {
    pub(crate) fn new(release: fn()) -> Self {
        let handle = StoredValue::new_local(None::<MotionHandle>);
        on_cleanup(move || {
            let released = handle.try_update_value(Option::take).flatten();
            if released.is_some() {
                drop(released);
                release();
            }
        });
        Self { handle }
    }

    pub(crate) fn is_filled(&self) -> bool {
        self.handle.try_with_value(Option::is_some).unwrap_or(false)
    }

    /// Keep a freshly committed scope. Returns `false` if it failed to build.
    pub(crate) fn fill(&self, label: &'static str, built: Result<MotionHandle, MotionError>) -> bool {
        match built {
            Ok(committed) => {
                tracing::trace!(label, scope = ?committed.scope(), "animations registered");
                self.handle.set_value(Some(committed));
                true
            }
            // Markup is visible at rest, so a section without animations is
            // still complete.
            Err(err) => {
                tracing::warn!(label, %err, "animations skipped");
                false
            }
        }
    }
}

fn flush_driver() {
    if let Ok(driver) = driver() {
        driver.stage.flush();
    }
}

fn register<F, S>(gate: Option<ReadSignal<bool>>, label: &'static str, build: F, on_skip: S)
where
    F: Fn(&mut DomScene) -> Result<(), MotionError> + 'static,
    S: Fn() + 'static,
{
    let slot = ScopeSlot::new(flush_driver);

    Effect::new(move |_| {
        if gate.is_some_and(|ready| !ready.get()) || slot.is_filled() {
            return;
        }
        if !slot.fill(label, animate(&build)) {
            on_skip();
        }
    });
}

/// Register a component's animations once the page is ready for them.
/// Everything registered is torn down when the component unmounts.
pub fn use_motion<F>(label: &'static str, build: F)
where
    F: Fn(&mut DomScene) -> Result<(), MotionError> + 'static,
{
    let gate = use_context::<MotionReady>().map(|MotionReady(ready)| ready);
    register(gate, label, build, || {});
}

/// Like [`use_motion`] but registers as soon as the component mounts.
/// `on_skip` runs if the scene cannot be built.
pub fn use_motion_eager<F, S>(label: &'static str, build: F, on_skip: S)
where
    F: Fn(&mut DomScene) -> Result<(), MotionError> + 'static,
    S: Fn() + 'static,
{
    register(None, label, build, on_skip);
}

/// Re-measure every trigger on the next frame, e.g. after layout changes.
pub fn request_refresh() {
    if let Ok(driver) = driver() {
        driver.stale.set(true);
        driver.wake();
    }
}
