use leptos::html;
use leptos::prelude::*;

use crate::motion::{
    use_motion_eager, Easing, MotionError, Position, Props, TargetId, Timeline, Tween,
};

/// Head styles for the overlay. Without scripts it never shows; if the motion
/// engine has not claimed it (`.driven`) within a few seconds it fades out on
/// its own.
pub(crate) const LOADER_FAILSAFE: &str = "\
.loader { animation: loader-failsafe 0.4s ease-out 6s forwards; }
.loader.driven { animation: none; }
@keyframes loader-failsafe { to { opacity: 0; visibility: hidden; } }";

/// Elements the intro animates.
pub(crate) struct LoaderParts {
    pub container: TargetId,
    pub brand: TargetId,
    pub line: TargetId,
    pub counter: TargetId,
}

/// Brand in, count to 100 while the line draws, brand out, curtain up.
pub(crate) fn intro(parts: &LoaderParts) -> Timeline {
    Timeline::new()
        .then(
            Tween::from_to(
                parts.brand,
                Props::new().y(20.0).opacity(0.0),
                Props::new().y(0.0).opacity(1.0),
            )
            .duration(1.0)
            .ease(Easing::PowerOut(3)),
        )
        .add(
            Tween::from_to(
                parts.counter,
                Props::new().counter(0.0),
                Props::new().counter(100.0),
            )
            .duration(1.5)
            .ease(Easing::PowerInOut(2)),
            Position::Relative(-0.5),
        )
        .add(
            Tween::from_to(parts.line, Props::new().scale_x(0.0), Props::new().scale_x(1.0))
                .duration(1.5)
                .ease(Easing::ExpoInOut),
            Position::WithPrevious,
        )
        .then(
            Tween::to(parts.brand, Props::new().y(-50.0).opacity(0.0))
                .duration(0.5)
                .ease(Easing::PowerIn(2)),
        )
        .add(
            Tween::from_to(
                parts.container,
                Props::new().y_percent(0.0),
                Props::new().y_percent(-100.0),
            )
            .duration(1.0)
            .ease(Easing::PowerInOut(4)),
            Position::Relative(-0.2),
        )
}

/// Whether the CSS failsafe has already taken the overlay down.
fn timed_out(element: &web_sys::HtmlElement) -> bool {
    web_sys::window()
        .and_then(|w| w.get_computed_style(element).ok().flatten())
        .and_then(|style| style.get_property_value("visibility").ok())
        .is_some_and(|visibility| visibility == "hidden")
}

/// Shell `<head>` content that keeps the overlay from covering the page when
/// the client never takes over.
#[component]
pub fn LoaderFallback() -> impl IntoView {
    view! {
        <style>{LOADER_FAILSAFE}</style>
        <noscript>
            <style>".loader { display: none; }"</style>
        </noscript>
    }
}

/// Full-screen intro. `on_complete` runs once, after the curtain has left the
/// screen, or straight away if the intro cannot play.
#[component]
pub fn Loader(on_complete: Callback<()>) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let brand = NodeRef::<html::Div>::new();
    let line = NodeRef::<html::Div>::new();
    let counter = NodeRef::<html::Div>::new();
    let (driven, set_driven) = signal(false);

    use_motion_eager(
        "loader",
        move |scene| {
            let (overlay, element) = scene.root("loader", container.get_untracked())?;
            if timed_out(&element) {
                return Err(MotionError::Dom("intro overlay already timed out".into()));
            }
            let parts = LoaderParts {
                container: overlay,
                brand: scene.element("loader brand", brand.get_untracked())?,
                line: scene.element("loader line", line.get_untracked())?,
                counter: scene.element("loader counter", counter.get_untracked())?,
            };
            scene.play(intro(&parts).on_complete(move || on_complete.run(())));
            set_driven.set(true);
            Ok(())
        },
        move || on_complete.run(()),
    );

    view! {
        <div node_ref=container class="loader" class:driven=driven aria-hidden="true">
            <div class="loader-grain"></div>
            <div class="loader-inner">
                <div node_ref=brand class="loader-brand">
                    "WAR " <span class="accent">"GYM"</span>
                </div>
                <div node_ref=line class="loader-line"></div>
                <div class="loader-counter-clip">
                    <div node_ref=counter class="loader-counter">"00"</div>
                </div>
            </div>
        </div>
    }
}
