use leptos::html;
use leptos::prelude::*;

use crate::browser::open_external;
use crate::components::{Button, ButtonVariant};
use crate::config::use_config;
use crate::models::content::{BARCODE, OFFER_FEATURES};
use crate::models::whatsapp_link;
use crate::motion::{
    animate, use_motion, Easing, MotionHandle, Position, Props, Repeat, ScrollRange, TargetId,
    Timeline, ToggleActions, Trigger, Tween,
};

pub(crate) struct OfferParts {
    pub title: TargetId,
    pub card: TargetId,
    pub features: TargetId,
    pub cta: TargetId,
}

/// Entrance by position and scale only; the content is readable at every
/// point of the timeline.
pub(crate) fn entrance(parts: &OfferParts) -> Timeline {
    Timeline::new()
        .clear_on_complete(true)
        .then(
            Tween::from(parts.title, Props::new().y(30.0))
                .duration(0.6)
                .ease(Easing::PowerOut(2)),
        )
        .add(
            Tween::from(parts.card, Props::new().scale(0.95).y(30.0))
                .duration(0.8)
                .ease(Easing::PowerOut(2)),
            Position::Relative(-0.4),
        )
        .add(
            Tween::from(parts.features, Props::new().y(15.0))
                .duration(0.5)
                .ease(Easing::PowerOut(2)),
            Position::Relative(-0.6),
        )
        .add(
            Tween::from(parts.cta, Props::new().scale(0.95).y(10.0))
                .duration(0.4)
                .ease(Easing::BackOut(1.5)),
            Position::Relative(-0.3),
        )
}

/// A quick squeeze and release of the button.
pub(crate) fn press(button: TargetId) -> Timeline {
    Timeline::new()
        .repeat(Repeat::Times(1))
        .yoyo(true)
        .clear_on_complete(true)
        .then(
            Tween::to(button, Props::new().scale(0.92))
                .duration(0.1)
                .ease(Easing::PowerInOut(1)),
        )
}

#[component]
pub fn Offer() -> impl IntoView {
    let config = use_config();
    let link = StoredValue::new(whatsapp_link(&config.contact.offer));

    let section = NodeRef::<html::Section>::new();
    let title = NodeRef::<html::Div>::new();
    let card = NodeRef::<html::Div>::new();
    let features = NodeRef::<html::Div>::new();
    let cta = NodeRef::<html::Div>::new();
    let button = NodeRef::<html::Div>::new();

    use_motion("offer", move |scene| {
        let anchor = scene.element("offer", section.get_untracked())?;
        let parts = OfferParts {
            title: scene.element("offer title", title.get_untracked())?,
            card: scene.element("offer card", card.get_untracked())?,
            features: scene.element("offer features", features.get_untracked())?,
            cta: scene.element("offer cta", cta.get_untracked())?,
        };
        let trigger = Trigger::toggle(ScrollRange::starting("top 75%")?, ToggleActions::REVEAL);
        scene.bind(anchor, trigger, entrance(&parts));
        Ok(())
    });

    let pressing = StoredValue::new_local(None::<MotionHandle>);
    let on_press = move |_| {
        let open = move || link.with_value(|url| open_external(url));
        let pressed = animate(|scene| {
            let target = scene.element("offer button", button.get_untracked())?;
            scene.play(press(target).on_complete(open));
            Ok(())
        });
        match pressed {
            Ok(handle) => pressing.set_value(Some(handle)),
            Err(err) => {
                tracing::debug!(%err, "press animation skipped");
                open();
            }
        }
    };

    view! {
        <section node_ref=section id="offer" class="offer">
            <div class="offer-glow"></div>
            <div class="offer-poster" data-speed="0.04">
                <h1 class="display">"INITIATION"</h1>
            </div>

            <div class="offer-content">
                <div node_ref=title class="offer-title">
                    <h2 class="display display-lg">
                        "The 7-Day " <br/> <span class="accent text-glow">"War Pass"</span>
                    </h2>
                    <div class="offer-tagline">
                        <span class="rule"></span>
                        <p class="mono">"Prove Your Worth"</p>
                        <span class="rule"></span>
                    </div>
                </div>

                <div class="offer-card-stage">
                    <div node_ref=card class="offer-card">
                        <span class="corner tl"></span>
                        <span class="corner tr"></span>
                        <span class="corner bl"></span>
                        <span class="corner br"></span>
                        <div class="card-glow"></div>

                        <div class="card-top">
                            <div>
                                <div class="card-status">
                                    <span class="live-dot square"></span>
                                    <span class="mono accent">"Active Status"</span>
                                </div>
                                <div class="display card-name">"WAR GYM ACCESS"</div>
                            </div>
                            <div class="barcode">
                                {BARCODE
                                    .iter()
                                    .map(|height| view! { <span style=format!("height: {height}%")></span> })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class="card-price">
                            <span class="currency accent">"$"</span>
                            <span class="amount">"29"</span>
                        </div>

                        <div class="card-bottom">
                            <div class="mono muted">"Class: Civilian" <br/> "Duration: 168 Hours"</div>
                            <div class="card-badge">
                                <span class="mono">"Priority Entry"</span>
                            </div>
                        </div>
                    </div>
                </div>

                <div node_ref=features class="offer-features">
                    {OFFER_FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="offer-feature">
                                    <span class="diamond"></span>
                                    <span class="mono">{*feature}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div node_ref=cta class="offer-cta" role="button" tabindex="0" on:click=on_press>
                    <div class="urgent-pulse"></div>
                    <div node_ref=button class="offer-button">
                        <Button variant=ButtonVariant::Secondary class="offer-btn" decorative=true>
                            "Start The War Pass"
                        </Button>
                    </div>
                    <p class="fine-print">"Offer ends when capacity is reached"</p>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::motion::testing::{run, set_scroll, stage, style, Recorder};
    use crate::motion::{Bounds, Scene};
    use pretty_assertions::assert_eq;

    fn parts(scene: &mut Scene<Recorder>) -> OfferParts {
        OfferParts {
            title: scene.target(Bounds::default()),
            card: scene.target(Bounds::default()),
            features: scene.target(Bounds::default()),
            cta: scene.target(Bounds::default()),
        }
    }

    #[test]
    fn entrance_never_touches_opacity() {
        let stage = stage();
        let mut scene = stage.scene();
        let anchor = scene.target(Bounds { top: 2000.0, height: 900.0 });
        let parts = parts(&mut scene);
        let targets = [parts.title, parts.card, parts.features, parts.cta];
        let trigger = Trigger::toggle(ScrollRange::starting("top 75%").unwrap(), ToggleActions::REVEAL);
        scene.bind(anchor, trigger, entrance(&parts));
        let _handle = scene.commit();

        for target in targets {
            assert!(style(&stage, target).is_some_and(|p| p.opacity.is_none()));
        }
        assert_eq!(style(&stage, parts.card), Some(Props::new().scale(0.95).y(30.0)));

        // Start is at 2000 - 600.
        set_scroll(&stage, 1500.0);
        run(&stage, 0.3);
        for target in targets {
            assert!(style(&stage, target).map_or(true, |p| p.opacity.is_none()));
        }
        run(&stage, 2.0);
        for target in targets {
            assert_eq!(style(&stage, target), None);
        }
    }

    #[test]
    fn entrance_reverses_above_the_start() {
        let stage = stage();
        let mut scene = stage.scene();
        let anchor = scene.target(Bounds { top: 2000.0, height: 900.0 });
        let parts = parts(&mut scene);
        let title = parts.title;
        let trigger = Trigger::toggle(ScrollRange::starting("top 75%").unwrap(), ToggleActions::REVEAL);
        scene.bind(anchor, trigger, entrance(&parts));
        let _handle = scene.commit();

        set_scroll(&stage, 1500.0);
        run(&stage, 3.0);
        set_scroll(&stage, 0.0);
        run(&stage, 3.0);
        assert_eq!(style(&stage, title), Some(Props::new().y(30.0)));
    }

    #[test]
    fn press_opens_link_after_the_release() {
        let stage = stage();
        let mut scene = stage.scene();
        let button = scene.target(Bounds::default());
        let opened = Rc::new(Cell::new(0));
        let seen = Rc::clone(&opened);
        scene.play(press(button).on_complete(move || seen.set(seen.get() + 1)));
        let _handle = scene.commit();

        run(&stage, 0.1);
        assert_eq!(opened.get(), 0);
        assert!(style(&stage, button).is_some_and(|p| p.scale.is_some_and(|s| s < 1.0)));
        run(&stage, 0.5);
        assert_eq!(opened.get(), 1);
        assert_eq!(style(&stage, button), None);
    }
}
