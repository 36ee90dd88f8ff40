use leptos::prelude::*;

use super::icons::{IconArrowRight, IconMessage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    WhatsApp,
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::WhatsApp => "btn-whatsapp",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    /// Take the button out of the tab order when a wrapper handles clicks.
    #[prop(optional)]
    decorative: bool,
    children: Children,
) -> impl IntoView {
    let class = format!("btn {} {class}", variant.class());
    let icon_leading = variant == ButtonVariant::WhatsApp;

    view! {
        <button
            type="button"
            class=class
            class:btn-full=full_width
            tabindex=decorative.then_some("-1")
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            <span class="btn-label">
                {icon_leading.then(|| view! { <IconMessage class="btn-icon"/> })}
                {children()}
                {(!icon_leading).then(|| view! { <IconArrowRight class="btn-icon btn-arrow"/> })}
            </span>
        </button>
    }
}
