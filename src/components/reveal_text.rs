use leptos::html;
use leptos::prelude::*;

use crate::config::use_config;
use crate::motion::{
    use_motion, Easing, MotionError, Props, ScrollRange, TargetId, Timeline, ToggleActions,
    Trigger, Tween,
};

/// Split `text` into word units. Each unit keeps the whitespace that follows
/// it; leading whitespace is dropped.
pub fn split_words(text: &str) -> Vec<&str> {
    let mut units = Vec::new();
    let mut start = None;
    let mut after_space = false;
    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            after_space = start.is_some();
            continue;
        }
        match start {
            None => start = Some(i),
            Some(s) if after_space => {
                units.push(&text[s..i]);
                start = Some(i);
            }
            Some(_) => {}
        }
        after_space = false;
    }
    if let Some(s) = start {
        units.push(&text[s..]);
    }
    units
}

/// Whitespace in a unit is rendered non-breaking so the spacing survives
/// `inline-block` wrappers.
fn display_unit(unit: &str) -> String {
    unit.replace(char::is_whitespace, "\u{a0}")
}

/// Starts when `threshold` of the element's height has entered the viewport.
pub(crate) fn reveal_range(threshold: f64) -> Result<ScrollRange, MotionError> {
    ScrollRange::starting(&format!("{}% bottom", threshold.clamp(0.0, 1.0) * 100.0))
}

pub(crate) fn entrance(words: Vec<TargetId>, delay: f64) -> Timeline {
    Timeline::new().delay(delay).then(
        Tween::from(
            words,
            Props::new()
                .y(200.0)
                .scale(6.0)
                .opacity(0.0)
                .rotate_x(-80.0)
                .rotate(-25.0)
                .blur(25.0),
        )
        .duration(1.2)
        .ease(Easing::PowerOut(4))
        .stagger(0.15),
    )
}

/// Text whose words slam into place once the element scrolls into view.
/// Plays in reverse when scrolled back above the start.
#[component]
pub fn RevealText(
    #[prop(into)] text: String,
    #[prop(optional, into)] class: String,
    #[prop(optional)] delay: f64,
    /// Visible fraction that starts the entrance; the site default if unset.
    #[prop(optional)]
    threshold: Option<f64>,
) -> impl IntoView {
    let units: Vec<String> = split_words(&text).into_iter().map(display_unit).collect();
    if units.is_empty() {
        return ().into_any();
    }

    let threshold = threshold.unwrap_or_else(|| use_config().reveal_threshold());
    let root = NodeRef::<html::Span>::new();

    use_motion("reveal text", move |scene| {
        let (anchor, element) = scene.root("reveal text", root.get_untracked())?;
        let words = scene.select_all(&element, ".reveal-word")?;
        let trigger = Trigger::toggle(reveal_range(threshold)?, ToggleActions::REVEAL);
        scene.bind(anchor, trigger, entrance(words, delay));
        Ok(())
    });

    view! {
        <span node_ref=root class=format!("reveal-text {class}")>
            {units
                .into_iter()
                .map(|unit| {
                    view! {
                        <span class="reveal-clip">
                            <span class="reveal-word">{unit}</span>
                        </span>
                    }
                })
                .collect_view()}
        </span>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::testing::{run, set_scroll, stage, style};
    use crate::motion::Bounds;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_headline_into_word_units() {
        let units = split_words("BUILD REAL POWER");
        assert_eq!(units, vec!["BUILD ", "REAL ", "POWER"]);
        assert_eq!(units.concat(), "BUILD REAL POWER");
    }

    #[test]
    fn keeps_runs_of_whitespace_with_the_preceding_word() {
        assert_eq!(split_words("  NO  EXCUSES \n"), vec!["NO  ", "EXCUSES \n"]);
    }

    #[test]
    fn empty_text_has_no_units() {
        assert!(split_words("").is_empty());
        assert!(split_words(" \t ").is_empty());
    }

    #[test]
    fn display_uses_non_breaking_spaces() {
        assert_eq!(display_unit("REAL "), "REAL\u{a0}");
        assert_eq!(display_unit("POWER"), "POWER");
    }

    #[test]
    fn words_enter_in_source_order() {
        let stage = stage();
        let mut scene = stage.scene();
        let root = scene.target(Bounds { top: 0.0, height: 200.0 });
        let words: Vec<TargetId> = (0..3).map(|_| scene.target(Bounds::default())).collect();
        scene.bind(
            root,
            Trigger::toggle(reveal_range(0.5).unwrap(), ToggleActions::REVEAL),
            entrance(words.clone(), 0.0),
        );
        let _handle = scene.commit();

        // Top of the page: half of the element is already in view.
        run(&stage, 0.2);
        let opacity = |t| style(&stage, t).and_then(|p| p.opacity).unwrap();
        assert!(opacity(words[0]) > opacity(words[1]));
        assert_eq!(opacity(words[2]), 0.0);

        run(&stage, 2.0);
        for &word in &words {
            assert_eq!(
                style(&stage, word),
                Some(
                    Props::new()
                        .y(0.0)
                        .scale(1.0)
                        .opacity(1.0)
                        .rotate_x(0.0)
                        .rotate(0.0)
                        .blur(0.0)
                )
            );
        }
    }

    #[test]
    fn reverses_when_scrolled_back_above_start() {
        let stage = stage();
        let mut scene = stage.scene();
        let root = scene.target(Bounds { top: 2000.0, height: 200.0 });
        let word = scene.target(Bounds::default());
        scene.bind(
            root,
            Trigger::toggle(reveal_range(0.5).unwrap(), ToggleActions::REVEAL),
            entrance(vec![word], 0.0),
        );
        let _handle = scene.commit();
        assert_eq!(style(&stage, word).and_then(|p| p.opacity), Some(0.0));

        set_scroll(&stage, 1400.0);
        run(&stage, 2.0);
        assert_eq!(style(&stage, word).and_then(|p| p.opacity), Some(1.0));

        set_scroll(&stage, 0.0);
        run(&stage, 2.0);
        assert_eq!(style(&stage, word).and_then(|p| p.opacity), Some(0.0));
    }

    #[test]
    fn stagger_extends_duration() {
        let words = vec![TargetId(1), TargetId(2), TargetId(3)];
        let timeline = entrance(words, 0.0);
        assert!((timeline.duration() - 1.5).abs() < 1e-9);
    }
}
