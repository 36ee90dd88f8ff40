use leptos::prelude::*;

use crate::components::{Nav, StickyCta};
use crate::motion::{use_motion, MotionError};
use crate::sections::{
    Faq, FinalCta, Footer, Hero, HowItWorks, Offer, Problem, Solution, Transformation,
};

/// Parallax factor from a `data-speed` attribute. Missing, malformed and
/// non-finite values are skipped.
pub(crate) fn parse_speed(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|speed| speed.is_finite())
}

/// Drift every `[data-speed]` element against the scroll.
fn use_parallax() {
    use_motion("parallax", |scene| {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .ok_or(MotionError::NoWindow)?;
        for layer in scene.select_all(&body, "[data-speed]")? {
            let raw = scene.node(layer).and_then(|node| node.get_attribute("data-speed"));
            if let Some(speed) = parse_speed(raw.as_deref()) {
                scene.parallax(layer, speed);
            }
        }
        Ok(())
    });
}

#[component]
pub fn HomePage() -> impl IntoView {
    use_parallax();

    view! {
        <div class="page">
            <div class="noise-overlay"></div>
            <Nav/>
            <main class="sections">
                <Hero/>
                <Problem/>
                <Solution/>
                <Transformation/>
                <Offer/>
                <HowItWorks/>
                <Faq/>
                <FinalCta/>
                <Footer/>
            </main>
            <StickyCta/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_speed_attribute() {
        assert_eq!(parse_speed(Some("0.04")), Some(0.04));
        assert_eq!(parse_speed(Some(" -0.2 ")), Some(-0.2));
    }

    #[test]
    fn skips_unusable_speeds() {
        assert_eq!(parse_speed(None), None);
        assert_eq!(parse_speed(Some("fast")), None);
        assert_eq!(parse_speed(Some("NaN")), None);
        assert_eq!(parse_speed(Some("inf")), None);
    }
}

#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    /// Every inline `style` attribute in `html`.
    fn inline_styles(html: &str) -> Vec<&str> {
        html.split("style=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    fn render_home() -> String {
        let owner = Owner::new();
        let html = owner.with(|| view! { <HomePage/> }.to_html());
        owner.cleanup();
        html
    }

    #[test]
    fn every_section_renders_its_copy_without_a_driver() {
        let html = render_home();
        for copy in [
            "BUILD",
            "POWER",
            "COMFORTABLE",
            "THE PROBLEM",
            "Step Inside",
            "Arsenal",
            "Proof of ",
            "War Pass",
            "Simple Path to Power",
            "Tactical ",
            "Tomorrow Never Comes",
        ] {
            assert!(html.contains(copy), "missing {copy:?}");
        }
    }

    #[test]
    fn markup_starts_at_rest() {
        let html = render_home();
        let styles = inline_styles(&html);
        assert!(!styles.is_empty());
        for style in styles {
            for animated in ["opacity", "transform", "clip-path", "filter", "visibility"] {
                assert!(!style.contains(animated), "{style:?} carries {animated}");
            }
        }
        assert!(!html.contains("pinned"));
    }
}

