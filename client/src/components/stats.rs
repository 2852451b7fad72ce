//! "Road safety crisis" statistics strip.

use leptos::prelude::*;

use crate::components::cards::StatCard;

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section class="section stats">
            <div class="section__header">
                <h2 class="section__title">"The Road Safety Crisis"</h2>
                <p class="section__lead">
                    "Path Guardian addresses a severe and costly challenge impacting India's infrastructure and public safety."
                </p>
            </div>
            <div class="grid grid--four">
                <StatCard
                    number="2,300+"
                    label="Annual Fatalities"
                    description="In India due to pothole-related road crashes, highlighting a major public safety crisis."
                    tone="danger"
                />
                <StatCard
                    number="₹10k - ₹30k"
                    label="Vehicle Repair Costs"
                    description="Per incident from pothole damage, a significant financial burden often paid out-of-pocket."
                    tone="warning"
                />
                <StatCard
                    number="6.6M+ km"
                    label="Total Road Network"
                    description="India's extensive road infrastructure requiring constant monitoring and maintenance."
                    tone="brand"
                />
                <StatCard
                    number="₹50k Cr+"
                    label="Annual Repair Budget"
                    description="Across municipalities, often inefficiently allocated due to reactive maintenance approaches."
                    tone="success"
                />
            </div>
        </section>
    }
}
