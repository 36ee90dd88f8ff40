use leptos::html;
use leptos::prelude::*;

use crate::components::PinTrack;
use crate::models::content::TOUR_SCENES;
use crate::motion::{
    request_refresh, use_motion, Clip, Easing, MotionError, Position, Props, ScrollRange,
    TargetId, Timeline, Trigger, Tween,
};

const PIN_DISTANCE: f64 = 4.0;

/// One full-screen scene of the tour.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScenePart {
    pub panel: TargetId,
    pub image: TargetId,
    pub text: TargetId,
}

pub(crate) struct TourParts {
    pub arsenal: ScenePart,
    pub zones: ScenePart,
    pub atmosphere: ScenePart,
    /// Indicator dots for the three scenes after the entry.
    pub dots: [TargetId; 3],
}

fn light_dot(dot: TargetId) -> Tween {
    Tween::from_to(dot, Props::new().opacity(0.2), Props::new().opacity(1.0)).duration(0.3)
}

/// Entry, then a wipe, an iris and a fade through the facility.
pub(crate) fn tour(parts: &TourParts) -> Timeline {
    let TourParts { arsenal, zones, atmosphere, dots } = *parts;
    Timeline::new()
        .then(
            Tween::from_to(
                arsenal.panel,
                Props::new().clip(Clip::wiped_up()),
                Props::new().clip(Clip::open()),
            )
            .duration(1.5)
            .ease(Easing::PowerInOut(2)),
        )
        .add(light_dot(dots[0]), Position::WithPrevious)
        .add(
            Tween::from_to(arsenal.image, Props::new().scale(1.2), Props::new().scale(1.0))
                .duration(1.5),
            Position::WithPrevious,
        )
        .add(
            Tween::from(arsenal.text, Props::new().y(100.0).opacity(0.0)).duration(1.0),
            Position::Relative(-0.5),
        )
        .then(
            Tween::from_to(
                zones.panel,
                Props::new().clip(Clip::Circle { radius: 0.0 }),
                Props::new().clip(Clip::Circle { radius: 100.0 }),
            )
            .duration(1.5)
            .ease(Easing::PowerInOut(2)),
        )
        .add(light_dot(dots[1]), Position::WithPrevious)
        .add(
            Tween::from_to(zones.image, Props::new().scale(1.1), Props::new().scale(1.0))
                .duration(1.5),
            Position::WithPrevious,
        )
        .add(
            Tween::from(zones.text, Props::new().opacity(0.0).scale(0.9)).duration(1.0),
            Position::Relative(-0.8),
        )
        .then(
            Tween::from_to(atmosphere.panel, Props::new().opacity(0.0), Props::new().opacity(1.0))
                .duration(1.5)
                .ease(Easing::PowerInOut(1)),
        )
        .add(light_dot(dots[2]), Position::WithPrevious)
        .add(
            Tween::from_to(atmosphere.image, Props::new().scale(1.2), Props::new().scale(1.0))
                .duration(1.5),
            Position::WithPrevious,
        )
        .add(
            Tween::from_to(
                atmosphere.text,
                Props::new().letter_spacing(1.0).opacity(0.0),
                Props::new().letter_spacing(0.05).opacity(1.0),
            )
            .duration(1.5),
            Position::WithPrevious,
        )
}

fn scene_part(
    scene: &mut crate::motion::DomScene,
    root: &web_sys::HtmlElement,
    [panel, image, text]: [&'static str; 3],
) -> Result<ScenePart, MotionError> {
    Ok(ScenePart {
        panel: scene.select(root, panel)?,
        image: scene.select(root, image)?,
        text: scene.select(root, text)?,
    })
}

#[component]
pub fn Solution() -> impl IntoView {
    let track = NodeRef::<html::Section>::new();
    let (pinned, set_pinned) = signal(false);

    use_motion("solution", move |scene| {
        let (anchor, root) = scene.root("solution", track.get_untracked())?;
        let dots: [TargetId; 3] = scene
            .select_all(&root, ".tour-dot:not(.current)")?
            .try_into()
            .map_err(|_| MotionError::TargetMissing("tour dots"))?;
        let parts = TourParts {
            arsenal: scene_part(scene, &root, [".scene-2", ".scene-2-img", ".scene-2-text"])?,
            zones: scene_part(scene, &root, [".scene-3", ".scene-3-img", ".scene-3-text"])?,
            atmosphere: scene_part(scene, &root, [".scene-4", ".scene-4-img", ".scene-4-text"])?,
            dots,
        };
        let range = ScrollRange::parse("top top", &format!("+={}%", PIN_DISTANCE * 100.0))?;
        scene.bind(anchor, Trigger::scrub(range, 1.0), tour(&parts));
        set_pinned.set(true);
        request_refresh();
        Ok(())
    });

    let [entry, arsenal, zones, atmosphere] = TOUR_SCENES;

    view! {
        <PinTrack track=track pinned=pinned distance=PIN_DISTANCE id="solution" class="solution">
            <div class="tour-scene scene-1">
                <div class="scene-dim"></div>
                <img src=entry.image alt=entry.alt class="scene-img scene-1-img"/>
                <div class="scene-copy centered">
                    <p class="eyebrow">"Facility Tour"</p>
                    <h2 class="display display-lg">"Step Inside" <br/> "The Arena"</h2>
                </div>
            </div>

            <div class="tour-scene scene-2">
                <div class="scene-fade-side"></div>
                <img src=arsenal.image alt=arsenal.alt class="scene-img scene-2-img"/>
                <div class="scene-copy scene-2-text">
                    <div class="label-rule">
                        <span class="rule"></span>
                        <span class="mono">"Hardware"</span>
                    </div>
                    <h2 class="display display-md">"Iron" <br/> "Arsenal"</h2>
                    <p class="scene-note">
                        "Hammer Strength & Eleiko plate-loaded machinery. No plastic. No gimmicks. Just heavy metal."
                    </p>
                </div>
            </div>

            <div class="tour-scene scene-3">
                <div class="scene-dim heavy"></div>
                <img src=zones.image alt=zones.alt class="scene-img scene-3-img grayscale"/>
                <div class="scene-copy centered scene-3-text">
                    <h2 class="display display-xl stroke-text">"Combat" <br/> "Ready"</h2>
                    <div class="tag-tilted">
                        <span>"Performance Zones"</span>
                    </div>
                </div>
            </div>

            <div class="tour-scene scene-4">
                <div class="scene-fade-red"></div>
                <div class="grain"></div>
                <img src=atmosphere.image alt=atmosphere.alt class="scene-img scene-4-img"/>
                <div class="scene-copy centered scene-4-text">
                    <h2 class="display display-md">"Built for " <span class="accent">"War"</span></h2>
                    <p class="mono wide">"No Compromise"</p>
                </div>
            </div>

            <div class="tour-dots">
                <span class="tour-dot current"></span>
                <span class="tour-dot"></span>
                <span class="tour-dot"></span>
                <span class="tour-dot"></span>
            </div>
            <div class="tour-hint">
                <span class="mono">"Scroll to Explore"</span>
            </div>
        </PinTrack>
    }
}
