use leptos::html;
use leptos::prelude::*;

use crate::components::PinTrack;
use crate::motion::{
    request_refresh, use_motion, Position, Props, ScrollRange, TargetId, Timeline, Trigger, Tween,
};

/// Scroll distance the section stays pinned for, in viewport heights.
const PIN_DISTANCE: f64 = 2.0;

pub(crate) struct ProblemParts {
    pub headline: TargetId,
    pub overlay: TargetId,
    pub truths: Vec<TargetId>,
}

/// The comfortable headline blows out, the red truth floods in over it.
pub(crate) fn confrontation(parts: ProblemParts) -> Timeline {
    Timeline::new()
        .then(
            Tween::to(parts.headline, Props::new().scale(1.5).opacity(0.0).blur(20.0))
                .duration(1.0),
        )
        .add(
            Tween::from_to(parts.overlay, Props::new().opacity(0.0), Props::new().opacity(1.0))
                .duration(0.5),
            Position::Relative(-0.5),
        )
        .add(
            Tween::from(parts.truths, Props::new().y(100.0).opacity(0.0))
                .duration(1.0)
                .stagger(0.2),
            Position::Relative(-0.2),
        )
}

pub(crate) fn pin_range() -> Result<ScrollRange, crate::motion::MotionError> {
    ScrollRange::parse("top top", &format!("+={}%", PIN_DISTANCE * 100.0))
}

#[component]
pub fn Problem() -> impl IntoView {
    let track = NodeRef::<html::Section>::new();
    let headline = NodeRef::<html::Div>::new();
    let overlay = NodeRef::<html::Div>::new();
    let (pinned, set_pinned) = signal(false);

    use_motion("problem", move |scene| {
        let (anchor, root) = scene.root("problem", track.get_untracked())?;
        let parts = ProblemParts {
            headline: scene.element("problem headline", headline.get_untracked())?,
            overlay: scene.element("problem overlay", overlay.get_untracked())?,
            truths: scene.select_all(&root, ".truth-line")?,
        };
        scene.bind(anchor, Trigger::scrub(pin_range()?, 1.0), confrontation(parts));
        set_pinned.set(true);
        request_refresh();
        Ok(())
    });

    view! {
        <PinTrack track=track pinned=pinned distance=PIN_DISTANCE id="problem" class="problem">
            <div node_ref=headline class="problem-headline">
                <h2 class="display display-lg">
                    "YOU ARE " <br/>
                    <span class="muted">"COMFORTABLE"</span>
                </h2>
            </div>

            <div node_ref=overlay class="problem-overlay">
                <div class="grain"></div>
                <div class="container">
                    <h2 class="truth-line display display-xl">"THAT IS " <br/> "THE PROBLEM"</h2>
                    <p class="truth-line truth-copy">
                        "Comfort is a slow death. You need an environment that challenges your very existence."
                    </p>
                </div>
            </div>
        </PinTrack>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::testing::{near, run, set_scroll, stage, style};
    use crate::motion::Bounds;
    use pretty_assertions::assert_eq;

    #[test]
    fn confrontation_overlaps_overlay_with_zoom() {
        let mut scene = stage().scene();
        let parts = ProblemParts {
            headline: scene.target(Bounds::default()),
            overlay: scene.target(Bounds::default()),
            truths: vec![scene.target(Bounds::default()), scene.target(Bounds::default())],
        };
        // Zoom 0..1, overlay 0.5..1, truths from 0.8 staggered by 0.2.
        assert!((confrontation(parts).duration() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn scrubbed_with_lag_across_two_viewports() {
        let stage = stage();
        let mut scene = stage.scene();
        let anchor = scene.target(Bounds { top: 1000.0, height: 800.0 });
        let parts = ProblemParts {
            headline: scene.target(Bounds::default()),
            overlay: scene.target(Bounds::default()),
            truths: vec![scene.target(Bounds::default())],
        };
        let (headline, overlay, truth) = (parts.headline, parts.overlay, parts.truths[0]);
        scene.bind(anchor, Trigger::scrub(pin_range().unwrap(), 1.0), confrontation(parts));
        let _handle = scene.commit();

        assert_eq!(style(&stage, headline), Some(Props::new().scale(1.0).opacity(1.0).blur(0.0)));
        assert_eq!(style(&stage, overlay), Some(Props::new().opacity(0.0)));

        // Range is 1000..2600; the playhead trails the scroll position.
        set_scroll(&stage, 2600.0);
        assert_eq!(style(&stage, overlay), Some(Props::new().opacity(0.0)));
        stage.frame(1.0 / 60.0);
        assert!(style(&stage, headline).is_some_and(|p| p.scale.unwrap_or(1.0) > 1.0));
        run(&stage, 20.0);
        assert_eq!(style(&stage, headline), Some(Props::new().scale(1.5).opacity(0.0).blur(20.0)));
        assert_eq!(style(&stage, overlay), Some(Props::new().opacity(1.0)));
        assert_eq!(style(&stage, truth), Some(Props::new().y(0.0).opacity(1.0)));

        set_scroll(&stage, 0.0);
        run(&stage, 20.0);
        assert!(near(style(&stage, overlay).and_then(|p| p.opacity), 0.0));
    }
}
