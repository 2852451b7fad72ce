//! Market opportunity figures and drivers.

use leptos::prelude::*;

use crate::components::cards::{CheckItem, MarketCard};

const DRIVERS: [&str; 4] = [
    "Government Smart City initiatives creating demand for intelligent infrastructure",
    "Increasing vehicle ownership driving need for better road quality",
    "Rising insurance claims from pothole damage creating market urgency",
    "Digital India push supporting technology adoption in public services",
];

#[component]
pub fn Market() -> impl IntoView {
    view! {
        <section id="market" class="section market">
            <div class="section__header">
                <h2 class="section__title">"Market Opportunity"</h2>
                <p class="section__lead">
                    "Path Guardian addresses a massive and growing market need in India's rapidly expanding infrastructure sector."
                </p>
            </div>
            <div class="grid grid--three">
                <MarketCard
                    value="₹2.1 Lakh Cr"
                    title="Current Market Size"
                    description="Annual road construction and maintenance budget in India"
                    trend="+12% YoY"
                />
                <MarketCard
                    value="₹25k Cr+"
                    title="Target Addressable Market"
                    description="Annual pothole-related damage costs and inefficient maintenance spending"
                    trend="Growing"
                />
                <MarketCard
                    value="500+ Cities"
                    title="Immediate Opportunity"
                    description="Tier-1 and Tier-2 cities requiring smart infrastructure solutions"
                    trend="Ready to deploy"
                />
            </div>
            <div class="market__drivers">
                <h3 class="market__drivers-title">"Key Market Drivers"</h3>
                <ul class="market__drivers-list">
                    {DRIVERS.iter().map(|&text| view! { <CheckItem text=text/> }).collect_view()}
                </ul>
            </div>
        </section>
    }
}
