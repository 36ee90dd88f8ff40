use chrono::Datelike;
use leptos::html;
use leptos::prelude::*;

use crate::components::SocialIcon;
use crate::config::use_config;
use crate::models::content::{Social, SOCIALS};
use crate::models::whatsapp_link;
use crate::motion::{
    use_motion, Easing, Position, Props, ScrollRange, TargetId, Timeline, ToggleActions, Trigger,
    Tween,
};

pub(crate) struct FooterParts {
    pub line: TargetId,
    pub content: TargetId,
    pub icons: Vec<TargetId>,
}

pub(crate) fn sign_off(parts: FooterParts) -> Timeline {
    Timeline::new()
        .then(
            Tween::from_to(parts.line, Props::new().scale_x(0.0), Props::new().scale_x(1.0))
                .duration(1.5)
                .ease(Easing::ExpoOut),
        )
        .add(
            Tween::from_to(
                parts.content,
                Props::new().y(30.0).opacity(0.0),
                Props::new().y(0.0).opacity(1.0),
            )
            .duration(1.0)
            .ease(Easing::PowerOut(3)),
            Position::Relative(-1.2),
        )
        .add(
            Tween::from(parts.icons, Props::new().y(20.0).opacity(0.0).scale(0.8))
                .duration(0.6)
                .ease(Easing::BackOut(1.7))
                .stagger(0.05),
            Position::Relative(-0.8),
        )
}

fn social_href(social: Social, contact: &str) -> String {
    if social.is_contact() {
        whatsapp_link(contact)
    } else {
        "#".to_string()
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_config();
    let year = chrono::Utc::now().year();

    let footer = NodeRef::<html::Footer>::new();
    let line = NodeRef::<html::Div>::new();
    let content = NodeRef::<html::Div>::new();

    use_motion("footer", move |scene| {
        let (anchor, root) = scene.root("footer", footer.get_untracked())?;
        let parts = FooterParts {
            line: scene.element("footer line", line.get_untracked())?,
            content: scene.element("footer content", content.get_untracked())?,
            icons: scene.select_all(&root, ".social-icon-item")?,
        };
        let trigger = Trigger::toggle(ScrollRange::starting("top 90%")?, ToggleActions::REVEAL);
        scene.bind(anchor, trigger, sign_off(parts));
        Ok(())
    });

    view! {
        <footer node_ref=footer class="site-footer">
            <div node_ref=line class="footer-line"></div>
            <div class="footer-atmosphere"></div>

            <div node_ref=content class="container footer-content">
                <div class="footer-brand">
                    <h2 class="display display-md">"WAR " <span class="accent">"GYM"</span></h2>
                    <div class="footer-motto">
                        <span class="rule"></span>
                        <p class="mono">"Forging Elite Fitness"</p>
                        <span class="rule"></span>
                    </div>
                </div>

                <div class="socials">
                    {SOCIALS
                        .into_iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social_href(social, &config.contact.footer)
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="social-icon-item"
                                    class:contact=social.is_contact()
                                    aria-label=social.label()
                                >
                                    <span class="social-glow"></span>
                                    <span class="social-ring">
                                        <SocialIcon social=social class="social-glyph"/>
                                    </span>
                                    <span class="social-tip mono">{social.label()}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="footer-meta mono">
                    <p>{format!("© {year} WAR GYM Operations. All Rights Reserved.")}</p>
                    <div class="footer-links">
                        <a href="#">"Privacy Protocol"</a>
                        <a href="#">"Terms of Service"</a>
                        <a href="#">"Contact Command"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::testing::{run, set_scroll, stage, style};
    use crate::motion::Bounds;
    use pretty_assertions::assert_eq;

    #[test]
    fn only_whatsapp_links_out() {
        assert_eq!(social_href(Social::Instagram, "Hello"), "#");
        assert_eq!(social_href(Social::WhatsApp, "Hello"), "https://wa.me/?text=Hello");
    }

    #[test]
    fn sign_off_overlaps_line_and_content() {
        let mut scene = stage().scene();
        let parts = FooterParts {
            line: scene.target(Bounds::default()),
            content: scene.target(Bounds::default()),
            icons: (0..6).map(|_| scene.target(Bounds::default())).collect(),
        };
        // Line 0..1.5, content 0.3..1.3, icons from 0.7, six staggered by 0.05.
        assert!((sign_off(parts).duration() - 1.55).abs() < 1e-9);
    }

    #[test]
    fn draws_in_and_rewinds_with_the_scroll() {
        let stage = stage();
        let mut scene = stage.scene();
        let anchor = scene.target(Bounds { top: 5000.0, height: 700.0 });
        let parts = FooterParts {
            line: scene.target(Bounds::default()),
            content: scene.target(Bounds::default()),
            icons: vec![scene.target(Bounds::default())],
        };
        let (line, icon) = (parts.line, parts.icons[0]);
        let trigger = Trigger::toggle(ScrollRange::starting("top 90%").unwrap(), ToggleActions::REVEAL);
        scene.bind(anchor, trigger, sign_off(parts));
        let _handle = scene.commit();

        assert_eq!(style(&stage, line), Some(Props::new().scale_x(0.0)));
        set_scroll(&stage, 4500.0);
        run(&stage, 2.0);
        assert_eq!(style(&stage, line), Some(Props::new().scale_x(1.0)));
        assert_eq!(style(&stage, icon), Some(Props::new().y(0.0).opacity(1.0).scale(1.0)));

        set_scroll(&stage, 0.0);
        run(&stage, 2.0);
        assert_eq!(style(&stage, line), Some(Props::new().scale_x(0.0)));
    }
}
