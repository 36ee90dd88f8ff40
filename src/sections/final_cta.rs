use leptos::html;
use leptos::prelude::*;

use crate::browser::open_external;
use crate::components::{Button, ButtonVariant};
use crate::config::use_config;
use crate::models::whatsapp_link;
use crate::motion::{use_motion, Easing, Props, Repeat, TargetId, Timeline, Tween};

/// Slow breathing of the background wash.
pub(crate) fn breathe(wash: TargetId) -> Timeline {
    Timeline::new()
        .repeat(Repeat::Forever)
        .yoyo(true)
        .then(
            Tween::from_to(wash, Props::new().opacity(0.2), Props::new().opacity(0.3))
                .duration(2.0)
                .ease(Easing::SineInOut),
        )
}

#[component]
pub fn FinalCta() -> impl IntoView {
    let config = use_config();
    let link = StoredValue::new(whatsapp_link(&config.contact.final_cta));
    let wash = NodeRef::<html::Div>::new();

    use_motion("final cta", move |scene| {
        let wash = scene.element("final cta pulse", wash.get_untracked())?;
        scene.play(breathe(wash));
        Ok(())
    });

    view! {
        <section id="join" class="final-cta">
            <div node_ref=wash class="bg-pulse"></div>
            <div class="grain"></div>

            <div class="container final-content">
                <div class="final-now-clip">
                    <h2 class="display final-now" data-speed="0.03">"NOW"</h2>
                </div>

                <div class="final-body">
                    <h2 class="display display-md">"Tomorrow Never Comes"</h2>
                    <div class="final-button">
                        <Button
                            variant=ButtonVariant::Primary
                            class="btn-inverse"
                            on_click=Callback::new(move |_| link.with_value(|url| open_external(url)))
                        >
                            "Start The War"
                        </Button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::testing::{run, stage, style};
    use crate::motion::Bounds;
    use pretty_assertions::assert_eq;

    #[test]
    fn pulse_breathes_between_bounds_forever() {
        let stage = stage();
        let mut scene = stage.scene();
        let wash = scene.target(Bounds::default());
        scene.play(breathe(wash));
        let _handle = scene.commit();

        assert_eq!(style(&stage, wash), Some(Props::new().opacity(0.2)));
        for _ in 0..20 {
            run(&stage, 0.7);
            let opacity = style(&stage, wash).and_then(|p| p.opacity).unwrap_or_default();
            assert!((0.2 - 1e-9..=0.3 + 1e-9).contains(&opacity));
        }
        assert!(stage.is_animating());
    }
}
