use leptos::html;
use leptos::prelude::*;

use crate::browser::scroll_to_id;
use crate::components::{Button, RevealText};
use crate::models::content::HERO_IMAGE;
use crate::motion::{
    use_motion, Easing, Position, Props, ScrollRange, TargetId, Timeline, Trigger, Tween,
};

pub(crate) struct HeroParts {
    pub image: TargetId,
    pub sub: TargetId,
    pub cta: TargetId,
}

/// The image surfaces out of blur while the copy rises in behind the headline.
pub(crate) fn opening(parts: &HeroParts) -> Timeline {
    Timeline::new()
        .add(
            Tween::from_to(
                parts.image,
                Props::new().scale(1.25).opacity(0.0).blur(8.0),
                Props::new().scale(1.1).opacity(0.5).blur(0.0),
            )
            .duration(2.0)
            .ease(Easing::PowerOut(2)),
            Position::At(0.0),
        )
        .add(
            Tween::from(parts.sub, Props::new().y(20.0).opacity(0.0))
                .duration(1.0)
                .ease(Easing::PowerOut(2)),
            Position::At(0.8),
        )
        .add(
            Tween::from(parts.cta, Props::new().y(20.0).opacity(0.0).scale(0.95))
                .duration(0.8)
                .ease(Easing::BackOut(1.7)),
            Position::At(1.2),
        )
}

/// Background drift while the hero scrolls out.
pub(crate) fn drift(media: TargetId) -> Timeline {
    Timeline::new().then(
        Tween::to(media, Props::new().y_percent(30.0).scale(1.2))
            .duration(1.0)
            .ease(Easing::Linear),
    )
}

#[component]
pub fn Hero() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let media = NodeRef::<html::Div>::new();
    let image = NodeRef::<html::Img>::new();

    use_motion("hero", move |scene| {
        let (anchor, root) = scene.root("hero", section.get_untracked())?;
        let parts = HeroParts {
            image: scene.element("hero image", image.get_untracked())?,
            sub: scene.select(&root, ".hero-sub")?,
            cta: scene.select(&root, ".hero-cta")?,
        };
        let media = scene.element("hero media", media.get_untracked())?;

        scene.play(opening(&parts));
        let range = ScrollRange::parse("top top", "bottom top")?;
        scene.bind(anchor, Trigger::scrub(range, 0.0), drift(media));
        Ok(())
    });

    view! {
        <section node_ref=section id="hero" class="hero">
            <div class="hero-backdrop">
                <div class="hero-shade"></div>
                <div class="hero-dim"></div>
                <div node_ref=media class="hero-media">
                    <img node_ref=image src=HERO_IMAGE alt="Atmosphere" class="hero-image"/>
                </div>
            </div>

            <div class="hero-content container">
                <div class="hero-headline">
                    <RevealText text="BUILD REAL POWER" class="display display-xl"/>
                </div>

                <div class="hero-sub">
                    <p>
                        "Stop exercising. Start training. " <br class="desktop-only"/>
                        "Join the only facility dedicated to your complete physical evolution."
                    </p>
                </div>

                <div class="hero-cta">
                    <Button class="glow" on_click=Callback::new(|_| scroll_to_id("offer"))>
                        "Start Your Transformation"
                    </Button>
                    <p class="fine-print">"Limited spots available for this cycle"</p>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::testing::{near, run, set_scroll, stage, style};
    use crate::motion::Bounds;
    use pretty_assertions::assert_eq;

    #[test]
    fn opening_lands_the_image_dimmed() {
        let stage = stage();
        let mut scene = stage.scene();
        let parts = HeroParts {
            image: scene.target(Bounds::default()),
            sub: scene.target(Bounds::default()),
            cta: scene.target(Bounds::default()),
        };
        let (image, cta) = (parts.image, parts.cta);
        scene.play(opening(&parts));
        let _handle = scene.commit();

        assert_eq!(style(&stage, image), Some(Props::new().scale(1.25).opacity(0.0).blur(8.0)));
        assert_eq!(style(&stage, cta), Some(Props::new().y(20.0).opacity(0.0).scale(0.95)));
        run(&stage, 2.5);
        assert_eq!(style(&stage, image), Some(Props::new().scale(1.1).opacity(0.5).blur(0.0)));
        assert_eq!(style(&stage, cta), Some(Props::new().y(0.0).opacity(1.0).scale(1.0)));
    }

    #[test]
    fn drift_follows_scroll_through_the_hero() {
        let stage = stage();
        let mut scene = stage.scene();
        let anchor = scene.target(Bounds { top: 0.0, height: 800.0 });
        let media = scene.target(Bounds::default());
        let range = ScrollRange::parse("top top", "bottom top").unwrap();
        scene.bind(anchor, Trigger::scrub(range, 0.0), drift(media));
        let _handle = scene.commit();

        assert_eq!(style(&stage, media), Some(Props::new().y_percent(0.0).scale(1.0)));
        set_scroll(&stage, 400.0);
        let halfway = style(&stage, media).unwrap_or_default();
        assert!(near(halfway.y_percent, 15.0));
        assert!(near(halfway.scale, 1.1));
        set_scroll(&stage, 5000.0);
        assert_eq!(style(&stage, media), Some(Props::new().y_percent(30.0).scale(1.2)));
    }
}
