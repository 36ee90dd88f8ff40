use leptos::prelude::*;

use super::button::{Button, ButtonVariant};
use crate::browser::{open_external, use_scroll_position};
use crate::config::use_config;
use crate::models::{whatsapp_link, ScrollFlags};

/// Floating contact button for small screens, shown once the hero is behind.
#[component]
pub fn StickyCta() -> impl IntoView {
    let config = use_config();
    let scroll = use_scroll_position();
    let thresholds = config.scroll;
    let visible = Memo::new(move |_| ScrollFlags::from_scroll_y(scroll.get(), &thresholds).cta_visible);
    let link = StoredValue::new(whatsapp_link(&config.contact.sticky));

    view! {
        <Show when=move || visible.get()>
            <div class="sticky-cta">
                <Button
                    variant=ButtonVariant::WhatsApp
                    full_width=true
                    on_click=Callback::new(move |_| link.with_value(|url| open_external(url)))
                >
                    "Chat on WhatsApp"
                </Button>
            </div>
        </Show>
    }
}
