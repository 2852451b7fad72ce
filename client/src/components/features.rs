//! Solution overview cards.

use leptos::prelude::*;

use crate::components::cards::FeatureCard;

const CHIP_ICON: &str = "M9 3v2m6-2v2M9 19v2m6-2v2M5 9H3m2 6H3m18-6h-2m2 6h-2M7 19h10a2 2 0 002-2V7a2 2 0 00-2-2H7a2 2 0 00-2 2v10a2 2 0 002 2zM9 9h6v6H9V9z";
const MAP_ICON: &str = "M9 20l-5.447-2.724A1 1 0 013 16.382V5.618a1 1 0 011.447-.894L9 7m0 13l6-3m-6 3V7m6 10l4.553 2.276A1 1 0 0021 18.382V7.618a1 1 0 00-.553-.894L15 4m0 13V4m0 0L9 7";
const TREND_ICON: &str = "M13 7h8m0 0v8m0-8l-8 8-4-4-6 6";

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="section features">
            <div class="section__header">
                <h2 class="section__title">"Solution & Innovation"</h2>
                <p class="section__lead">
                    "Our comprehensive approach combines cutting-edge technology with practical solutions."
                </p>
            </div>
            <div class="grid grid--three">
                <FeatureCard
                    icon_path=CHIP_ICON
                    title="AI-Powered Detection"
                    description="Utilizes deep learning and computer vision for instant road surface analysis and damage-severity assessment."
                    tone="brand"
                />
                <FeatureCard
                    icon_path=MAP_ICON
                    title="Dynamic Mapping"
                    description="Maps precise GPS locations of defects, feeding into a centralized dashboard for authorities to visualize and prioritize repairs."
                    tone="success"
                />
                <FeatureCard
                    icon_path=TREND_ICON
                    title="Smart Routing"
                    description="Generates optimized routes to avoid damaged roads, improving commuter safety and reducing vehicle wear."
                    tone="warning"
                />
            </div>
        </section>
    }
}
