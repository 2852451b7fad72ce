//! Fixed top navigation with a collapsible mobile menu.

use leptos::prelude::*;

use crate::state::ui::UiState;

const LINKS: [(&str, &str); 5] = [
    ("#features", "Features"),
    ("#demo", "Demo"),
    ("#technology", "Technology"),
    ("#benefits", "Benefits"),
    ("#market", "Market"),
];

const MENU_OPEN_ICON: &str = "M4 6h16M4 12h16M4 18h16";
const MENU_CLOSE_ICON: &str = "M6 18L18 6M6 6l12 12";

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let menu_open = move || ui.with(|u| u.menu_open);

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a class="navbar__brand" href="#top">
                    <img class="navbar__logo" src="/path-guardian.svg" alt="Path Guardian logo" width="40" height="40"/>
                    <span class="navbar__name">"Path Guardian"</span>
                </a>

                <div class="navbar__links">
                    {LINKS.iter().map(|&(href, label)| view! { <a class="navbar__link" href=href>{label}</a> }).collect_view()}
                    <a class="button button--primary" href="#contact">"Get Demo"</a>
                </div>

                <button
                    class="navbar__toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |_| ui.update(UiState::toggle_menu)
                >
                    <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true">
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d=move || if menu_open() { MENU_CLOSE_ICON } else { MENU_OPEN_ICON }
                        />
                    </svg>
                </button>
            </div>

            <Show when=menu_open>
                <div class="navbar__mobile">
                    {LINKS.iter().map(|&(href, label)| view! {
                        <a class="navbar__mobile-link" href=href on:click=move |_| ui.update(UiState::close_menu)>
                            {label}
                        </a>
                    }).collect_view()}
                    <a class="button button--primary button--block" href="#contact" on:click=move |_| ui.update(UiState::close_menu)>
                        "Get Demo"
                    </a>
                </div>
            </Show>
        </nav>
    }
}
