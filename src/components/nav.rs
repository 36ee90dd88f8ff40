use leptos::html;
use leptos::prelude::*;

use super::icons::IconMessage;
use crate::browser::{open_external, scroll_to_top, use_scroll_position};
use crate::config::use_config;
use crate::models::{whatsapp_link, ScrollFlags};
use crate::motion::{use_motion, Easing, Props, Repeat, TargetId, Timeline, Tween};

/// Endless ring expanding out of the contact button.
pub(crate) fn pulse(ring: TargetId) -> Timeline {
    Timeline::new().repeat(Repeat::Forever).then(
        Tween::to(ring, Props::new().scale(1.2).opacity(0.0))
            .duration(1.5)
            .ease(Easing::PowerOut(1)),
    )
}

#[component]
pub fn Nav() -> impl IntoView {
    let config = use_config();
    let scroll = use_scroll_position();
    let thresholds = config.scroll;
    let scrolled = Memo::new(move |_| ScrollFlags::from_scroll_y(scroll.get(), &thresholds).nav_scrolled);

    let link = whatsapp_link(&config.contact.nav);
    let ring = NodeRef::<html::Div>::new();

    use_motion("nav", move |scene| {
        let ring = scene.element("nav pulse ring", ring.get_untracked())?;
        scene.play(pulse(ring));
        Ok(())
    });

    view! {
        <nav class="main-nav" class:scrolled=move || scrolled.get()>
            <div class="nav-inner">
                <button type="button" class="nav-brand" on:click=|_| scroll_to_top()>
                    "WAR " <span class="accent">"GYM"</span>
                </button>

                <button
                    type="button"
                    class="nav-contact"
                    aria-label="Message us on WhatsApp"
                    on:click=move |_| open_external(&link)
                >
                    <div node_ref=ring class="nav-pulse"></div>
                    <span class="nav-contact-icon">
                        <IconMessage/>
                    </span>
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::testing::{run, stage, style};
    use crate::motion::Bounds;
    use pretty_assertions::assert_eq;

    #[test]
    fn pulse_restarts_from_rest_every_cycle() {
        let stage = stage();
        let mut scene = stage.scene();
        let ring = scene.target(Bounds::default());
        scene.play(pulse(ring));
        let _handle = scene.commit();

        assert_eq!(style(&stage, ring), Some(Props::new().scale(1.0).opacity(1.0)));
        run(&stage, 10.0);
        assert!(stage.is_animating());
        let props = style(&stage, ring).unwrap_or_default();
        assert!(props.scale.is_some_and(|s| (1.0..=1.2).contains(&s)));
    }
}
