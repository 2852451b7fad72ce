//! SVG map of one route: road, hazard pins and the moving vehicle.
//!
//! DESIGN
//! ======
//! Road geometry and pins only change on route or orientation switches, so
//! they sit behind memos; the per-tick work is the vehicle transform and the
//! pin state classes.

use guardian::tracker::HazardPin;
use leptos::prelude::*;

use crate::state::demo::DemoState;
use crate::util::severity::{pin_radius, severity_fill};

#[component]
pub fn RouteMap(
    state: RwSignal<DemoState>,
    /// Makes pins clickable; receives the hazard id.
    #[prop(optional)]
    on_select: Option<Callback<u32>>,
) -> impl IntoView {
    let view_box = Memo::new(move |_| state.with(|s| s.tracker().orientation().view_box_attr()));
    let road = Memo::new(move |_| state.with(|s| s.tracker().curve().to_svg_path()));
    let pins = Memo::new(move |_| state.with(|s| s.tracker().pins().to_vec()));
    let vehicle_transform = move || state.with(|s| s.tracker().marker().svg_transform());
    let range_radius = state.with_untracked(|s| s.tracker().config().proximity_threshold).to_string();

    view! {
        <svg
            class="route-map"
            viewBox=move || view_box.get()
            preserveAspectRatio="xMidYMid meet"
            role="img"
            aria-label="Route map with detected hazards"
        >
            <path class="route-map__road" d=move || road.get()/>
            <path class="route-map__lane" d=move || road.get()/>

            {move || {
                pins.get()
                    .into_iter()
                    .map(|pin| view! { <Pin state=state pin=pin on_select=on_select/> })
                    .collect_view()
            }}

            <g class="route-map__vehicle" transform=vehicle_transform>
                <circle class="route-map__range" r=range_radius/>
                <rect class="route-map__car" x="-8" y="-14" width="16" height="28" rx="4"/>
                <path class="route-map__windshield" d="M-6 -10 L6 -10 L5 -5 L-5 -5 Z"/>
            </g>
        </svg>
    }
}

#[component]
fn Pin(state: RwSignal<DemoState>, pin: HazardPin, on_select: Option<Callback<u32>>) -> impl IntoView {
    let id = pin.id;
    let radius = pin_radius(pin.severity);
    let fill = severity_fill(pin.severity);
    let cx = pin.position.x.to_string();
    let cy = pin.position.y.to_string();
    let active = move || state.with(|s| s.tracker().is_active(id));
    let selected = move || state.with(|s| s.selection().is_selected(id));
    let label = format!("{} severity hazard", pin.severity);

    view! {
        <g
            class="route-map__pin"
            class:route-map__pin--active=active
            class:route-map__pin--selected=selected
            class:route-map__pin--clickable=on_select.is_some()
            aria-label=label
            on:click=move |_| {
                if let Some(on_select) = on_select {
                    on_select.run(id);
                }
            }
        >
            <circle class="route-map__pin-halo" cx=cx.clone() cy=cy.clone() r=(radius * 2.0).to_string() fill=fill/>
            <circle class="route-map__pin-core" cx=cx cy=cy r=radius.to_string() fill=fill/>
        </g>
    }
}
