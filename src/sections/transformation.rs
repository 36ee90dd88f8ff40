use leptos::prelude::*;

use crate::components::IconQuote;
use crate::models::content::CASES;
use crate::motion::request_refresh;

/// Testimonial cards that stack on top of each other while scrolling.
#[component]
pub fn Transformation() -> impl IntoView {
    // The stacked cards change the document height after mount.
    Effect::new(|_| request_refresh());

    view! {
        <section id="transformation" class="transformation">
            <div class="container section-head">
                <span class="eyebrow">"Real Results // Real People"</span>
                <h2 class="display display-lg">"Proof of " <span class="accent">"War"</span></h2>
            </div>

            <div class="container case-stack">
                {CASES
                    .iter()
                    .enumerate()
                    .map(|(i, case)| {
                        view! {
                            <div class="case-card">
                                <div class="case-frame">
                                    <div class="case-backdrop">
                                        <img src=case.image alt=case.name class="case-img"/>
                                        <div class="case-shade"></div>
                                    </div>

                                    <div class="case-body">
                                        <div class="case-top">
                                            <div>
                                                <div class="case-subject">
                                                    <span class="live-dot"></span>
                                                    <span class="mono accent">{format!("Subject {}", i + 1)}</span>
                                                </div>
                                                <h3 class="display display-sm">{case.name}</h3>
                                            </div>
                                            <div class="case-time desktop-only">
                                                <span class="mono muted">"Timeframe"</span>
                                                <span class="display">{case.time}</span>
                                            </div>
                                        </div>

                                        <div class="case-quote">
                                            <IconQuote class="accent"/>
                                            <p>{format!("\"{}\"", case.quote)}</p>
                                        </div>

                                        <div class="case-bottom">
                                            <div>
                                                <span class="mono muted">"Outcome"</span>
                                                <div class="case-result stroke-text">{case.result}</div>
                                            </div>
                                            <div class="case-delta">
                                                <span class="display">{case.stats}</span>
                                                <span class="mono">"Delta"</span>
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
