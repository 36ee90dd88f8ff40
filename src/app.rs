use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::browser::{use_scroll_y, ScrollPosition};
use crate::components::Loader;
use crate::config::SiteConfig;
use crate::motion::MotionReady;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::default();
    // Section animations register only once the intro has finished.
    let (ready, set_ready) = signal(!config.play_loader);
    provide_context(config);
    provide_context(MotionReady(ready));
    provide_context(ScrollPosition(use_scroll_y()));

    Effect::new(move |_| {
        if ready.get() {
            tracing::debug!("intro finished, registering page animations");
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/wargym.css"/>
        <Title text="WAR GYM - Build Real Power"/>
        <Meta name="description" content="Stop exercising. Start training. Claim the 7-Day War Pass."/>

        <Show when=move || !ready.get()>
            <Loader on_complete=Callback::new(move |_| set_ready.set(true))/>
        </Show>

        <Router>
            <Routes fallback=|| view! { <h1 class="not-found">"404 - Page Not Found"</h1> }>
                <Route path=path!("/") view=HomePage/>
            </Routes>
        </Router>
    }
}
