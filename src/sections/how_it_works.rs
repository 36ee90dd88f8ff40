use leptos::prelude::*;

use crate::models::content::STEPS;

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="how-it-works">
            <div class="container">
                <div class="section-head">
                    <p class="eyebrow">"The Process"</p>
                    <h2 class="display display-sm">"Simple Path to Power"</h2>
                </div>

                <div class="steps">
                    <div class="steps-line desktop-only"></div>
                    {STEPS
                        .iter()
                        .map(|step| {
                            view! {
                                <div class="step">
                                    <div class="step-num">
                                        <span class="display accent">{step.num}</span>
                                    </div>
                                    <div class="step-copy">
                                        <h3 class="display">{step.title}</h3>
                                        <p>{step.text}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
