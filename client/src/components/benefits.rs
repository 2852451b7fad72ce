//! Who benefits, per stakeholder group.

use leptos::prelude::*;

use crate::components::cards::ChecklistCard;

const AUDIENCES: [(&str, &str, &[&str]); 3] = [
    (
        "For Commuters",
        "Advance warning of road damage on the route ahead, before it reaches the wheels.",
        &["Real-time hazard alerts", "Safer route suggestions", "Lower vehicle repair bills"],
    ),
    (
        "For Municipalities",
        "A continuously updated map of road condition, ranked by severity and location.",
        &["Prioritized repair queues", "Budget planning from measured damage", "Verified repair tracking"],
    ),
    (
        "For Fleet Operators",
        "Route intelligence that keeps vehicles moving and out of the workshop.",
        &["Reduced downtime", "Driver safety reporting", "Predictable maintenance costs"],
    ),
];

#[component]
pub fn Benefits() -> impl IntoView {
    view! {
        <section id="benefits" class="section benefits">
            <div class="section__header">
                <h2 class="section__title">"Benefits for Everyone"</h2>
                <p class="section__lead">
                    "From daily commuters to city planners, better road data pays off across the network."
                </p>
            </div>
            <div class="grid grid--three">
                {AUDIENCES
                    .iter()
                    .map(|&(title, description, items)| view! { <ChecklistCard title=title description=description items=items/> })
                    .collect_view()}
            </div>
        </section>
    }
}
