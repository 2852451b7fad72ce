//! Page footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__brand">
                    <img class="footer__logo" src="/path-guardian.svg" alt="" width="32" height="32"/>
                    <span class="footer__name">"Path Guardian"</span>
                    <p class="footer__tagline">"AI road-damage detection for safer, smarter streets."</p>
                </div>
                <nav class="footer__links" aria-label="Footer">
                    <a href="#features">"Features"</a>
                    <a href="#demo">"Demo"</a>
                    <a href="#technology">"Technology"</a>
                    <a href="#benefits">"Benefits"</a>
                    <a href="#market">"Market"</a>
                    <a href="#contact">"Contact"</a>
                </nav>
            </div>
            <p class="footer__legal">"© 2025 Path Guardian. All rights reserved."</p>
        </footer>
    }
}
