use leptos::html;
use leptos::prelude::*;

use crate::components::{IconClose, IconPlus};
use crate::models::{FaqEntry, FaqState, FAQS};
use crate::motion::{
    animate, use_motion, Easing, MotionHandle, Position, Props, Rgba, ScrollRange, TargetId,
    Timeline, ToggleActions, Trigger, Tween,
};

const OPEN_BACKGROUND: Rgba = Rgba::new(255, 31, 31, 0.03);
const OPEN_BORDER: Rgba = Rgba::new(255, 31, 31, 1.0);
const CLOSED_BORDER: Rgba = Rgba::new(255, 255, 255, 0.1);

fn chrome(open: bool) -> Props {
    if open {
        Props::new().background(OPEN_BACKGROUND).border_color(OPEN_BORDER)
    } else {
        Props::new().background(Rgba::TRANSPARENT).border_color(CLOSED_BORDER)
    }
}

/// Expand or collapse one entry. `height` is the answer's natural height.
/// Inline styles are dropped at the end so the item's classes take over.
pub(crate) fn disclosure(container: TargetId, answer: TargetId, height: f64, open: bool) -> Timeline {
    let shut = Props::new().height(0.0).opacity(0.0);
    let shown = Props::new().height(height).opacity(1.0);
    let answer = if open {
        Tween::from_to(answer, shut, shown)
            .duration(0.4)
            .ease(Easing::PowerOut(2))
    } else {
        Tween::from_to(answer, shown, shut)
            .duration(0.3)
            .ease(Easing::PowerIn(2))
    };

    Timeline::new()
        .clear_on_complete(true)
        .then(answer)
        .add(
            Tween::from_to(container, chrome(!open), chrome(open)).duration(0.3),
            Position::At(0.0),
        )
}

#[component]
fn FaqItem(entry: FaqEntry, #[prop(into)] is_open: Signal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let answer = NodeRef::<html::Div>::new();
    let running = StoredValue::new_local(None::<MotionHandle>);

    Effect::new(move |previous: Option<bool>| {
        let open = is_open.get();
        if previous.is_some_and(|was| was != open) {
            let built = animate(|scene| {
                let container = scene.element("faq item", container.get_untracked())?;
                let (answer, element) = scene.root("faq answer", answer.get_untracked())?;
                let height = f64::from(element.scroll_height());
                scene.play(disclosure(container, answer, height, open));
                Ok(())
            });
            match built {
                Ok(handle) => running.set_value(Some(handle)),
                Err(err) => tracing::debug!(id = entry.id, %err, "disclosure animation skipped"),
            }
        }
        open
    });

    view! {
        <div node_ref=container class="faq-item" class:open=move || is_open.get()>
            <button
                type="button"
                class="faq-question"
                aria-expanded=move || is_open.get().to_string()
                on:click=move |_| on_toggle.run(())
            >
                <div class="faq-heading">
                    <span class="faq-id mono">{entry.id}</span>
                    <h3 class="display">{entry.question}</h3>
                </div>
                <div class="faq-toggle">
                    <Show when=move || is_open.get() fallback=|| view! { <IconPlus/> }>
                        <IconClose class="accent"/>
                    </Show>
                </div>
            </button>

            <div node_ref=answer class="faq-answer">
                <div class="faq-answer-inner">
                    <p>{entry.answer}</p>
                </div>
            </div>
        </div>
    }
}

pub(crate) fn title_entrance(title: TargetId) -> Timeline {
    Timeline::new().then(
        Tween::from(title, Props::new().y(50.0).opacity(0.0))
            .duration(1.0)
            .ease(Easing::PowerOut(3)),
    )
}

pub(crate) fn list_entrance(items: Vec<TargetId>) -> Timeline {
    Timeline::new().then(
        Tween::from(items, Props::new().y(30.0).opacity(0.0))
            .duration(0.8)
            .ease(Easing::PowerOut(2))
            .stagger(0.1),
    )
}

#[component]
pub fn Faq() -> impl IntoView {
    let (state, set_state) = signal(FaqState::new(FAQS.len()));
    let title = NodeRef::<html::Div>::new();
    let list = NodeRef::<html::Div>::new();

    use_motion("faq", move |scene| {
        let title = scene.element("faq title", title.get_untracked())?;
        let (anchor, list) = scene.root("faq list", list.get_untracked())?;
        let items = scene.children(&list);

        let once = |start| -> Result<Trigger, crate::motion::MotionError> {
            Ok(Trigger::toggle(ScrollRange::starting(start)?, ToggleActions::ONCE))
        };
        scene.bind(title, once("top 80%")?, title_entrance(title));
        scene.bind(anchor, once("top 85%")?, list_entrance(items));
        Ok(())
    });

    view! {
        <section id="faq" class="faq">
            <div class="faq-backdrop"></div>

            <div class="container narrow">
                <div node_ref=title class="faq-head">
                    <div>
                        <div class="faq-label">
                            <span class="live-dot"></span>
                            <span class="mono accent">"Intel"</span>
                        </div>
                        <h2 class="display display-md">"Tactical " <br/> <span class="muted">"Briefing"</span></h2>
                    </div>
                    <p class="faq-intro desktop-only">
                        "Answers to common objections. " <br/> "Read carefully. Then execute."
                    </p>
                </div>

                <div node_ref=list class="faq-list">
                    {FAQS
                        .into_iter()
                        .enumerate()
                        .map(|(i, entry)| {
                            view! {
                                <FaqItem
                                    entry=entry
                                    is_open=Signal::derive(move || state.with(|s| s.is_open(i)))
                                    on_toggle=Callback::new(move |_| set_state.update(|s| s.toggle(i)))
                                />
                            }
                        })
                        .collect_view()}
                </div>

                <p class="faq-hint mobile-only mono">"Tap questions to expand"</p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::testing::{run, set_scroll, stage, style};
    use crate::motion::Bounds;
    use pretty_assertions::assert_eq;

    #[test]
    fn opening_grows_the_answer_then_hands_back_to_classes() {
        let stage = stage();
        let mut scene = stage.scene();
        let container = scene.target(Bounds::default());
        let answer = scene.target(Bounds::default());
        scene.play(disclosure(container, answer, 120.0, true));
        let _handle = scene.commit();

        assert_eq!(style(&stage, answer), Some(Props::new().height(0.0).opacity(0.0)));
        assert_eq!(style(&stage, container), Some(chrome(false)));

        run(&stage, 0.2);
        let midway = style(&stage, answer).unwrap_or_default();
        assert!(midway.height.is_some_and(|h| h > 0.0 && h < 120.0));
        let border = style(&stage, container).and_then(|p| p.border_color);
        assert!(border.is_some_and(|c| c.a > 0.5 && c.a < 1.0));

        run(&stage, 1.0);
        assert_eq!(style(&stage, answer), None);
        assert_eq!(style(&stage, container), None);
    }

    #[test]
    fn closing_is_quicker_than_opening() {
        let mut scene = stage().scene();
        let container = scene.target(Bounds::default());
        let answer = scene.target(Bounds::default());
        assert!((disclosure(container, answer, 80.0, true).duration() - 0.4).abs() < 1e-9);
        assert!((disclosure(container, answer, 80.0, false).duration() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn list_items_enter_one_after_another() {
        let stage = stage();
        let mut scene = stage.scene();
        let anchor = scene.target(Bounds { top: 3000.0, height: 600.0 });
        let items: Vec<TargetId> = (0..4).map(|_| scene.target(Bounds::default())).collect();
        let trigger = Trigger::toggle(ScrollRange::starting("top 85%").unwrap(), ToggleActions::ONCE);
        scene.bind(anchor, trigger, list_entrance(items.clone()));
        let _handle = scene.commit();

        for item in &items {
            assert_eq!(style(&stage, *item), Some(Props::new().y(30.0).opacity(0.0)));
        }
        set_scroll(&stage, 2400.0);
        run(&stage, 0.25);
        let first = style(&stage, items[0]).and_then(|p| p.opacity).unwrap_or_default();
        let last = style(&stage, items[3]).and_then(|p| p.opacity).unwrap_or_default();
        assert!(first > last);
        assert_eq!(last, 0.0);

        // Scrolling back up leaves them in place.
        run(&stage, 2.0);
        set_scroll(&stage, 0.0);
        run(&stage, 2.0);
        for item in &items {
            assert_eq!(style(&stage, *item), Some(Props::new().y(0.0).opacity(1.0)));
        }
    }
}
