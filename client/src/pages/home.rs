//! Landing page composed of every marketing section, top to bottom.

use leptos::prelude::*;

use crate::components::{
    benefits::Benefits, cta::Cta, demo::InteractiveDemo, features::Features, footer::Footer, hero::Hero,
    market::Market, nav::Navbar, stats::Stats, technology::Technology,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <Navbar/>
            <main>
                <Hero/>
                <Stats/>
                <Features/>
                <InteractiveDemo/>
                <Technology/>
                <Benefits/>
                <Market/>
                <Cta/>
            </main>
            <Footer/>
        </div>
    }
}
