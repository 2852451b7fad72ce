//! Closing call to action.

use leptos::prelude::*;

const PROMISES: [&str; 3] = ["Free consultation", "Custom implementation", "Ongoing support"];

#[component]
pub fn Cta() -> impl IntoView {
    view! {
        <section id="contact" class="cta">
            <h2 class="cta__title">"Ready to Transform Road Safety?"</h2>
            <p class="cta__lead">
                "Join us in revolutionizing infrastructure management and making roads safer for everyone. "
                "Experience the future of intelligent transportation systems."
            </p>
            <div class="cta__actions">
                <a class="button button--light button--large" href="mailto:hello@pathguardian.in?subject=Path%20Guardian%20demo">
                    "Schedule a Demo"
                </a>
                <a class="button button--outline-light button--large" href="mailto:hello@pathguardian.in?subject=Whitepaper">
                    "Download Whitepaper"
                </a>
            </div>
            <ul class="cta__promises">
                {PROMISES
                    .iter()
                    .map(|&promise| {
                        view! {
                            <li class="cta__promise">
                                <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7"/>
                                </svg>
                                <span>{promise}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
