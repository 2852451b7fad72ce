//! Interactive demo: route picker, live map, controls and damage report.
//!
//! SYSTEM CONTEXT
//! ==============
//! Visitors choose one of the catalog routes, run the vehicle along it and
//! click hazard pins to open their damage report. All state lives in one
//! `RwSignal<DemoState>` owned by this section; the ticker only runs while
//! the visitor has pressed start.

use guardian::{Catalog, DemoConfig, Hazard, Orientation, RouteId, Severity};
use leptos::logging::warn;
use leptos::prelude::*;

use crate::components::alert_card::AlertCard;
use crate::components::route_map::RouteMap;
use crate::state::demo::DemoState;
use crate::util::format::{format_age_days, format_eta, format_inr, format_km};
use crate::util::severity::badge_class;
use crate::util::ticker::drive_demo;

#[component]
pub fn InteractiveDemo() -> impl IntoView {
    let state = match DemoState::new(RouteId::default(), Orientation::Horizontal, DemoConfig::default()) {
        Ok(state) => RwSignal::new(state),
        Err(err) => {
            warn!("interactive demo disabled: {err}");
            return ().into_any();
        }
    };
    drive_demo(state);

    let on_select = Callback::new(move |id: u32| {
        state.update(|s| {
            if let Err(err) = s.toggle_hazard(id) {
                warn!("hazard selection rejected: {err}");
            }
        });
    });
    let running = move || state.with(|s| s.tracker().is_running());
    let layout = move || state.with(|s| s.tracker().orientation());

    view! {
        <section id="demo" class="section demo">
            <div class="section__header">
                <h2 class="section__title">"See Path Guardian in Action"</h2>
                <p class="section__lead">
                    "Explore our interactive demo to understand how our system detects, "
                    "maps, and helps navigate around road damage."
                </p>
            </div>

            <div class="demo__panel">
                <div class="demo__main">
                    <RoutePicker state=state/>

                    <div class="demo__map">
                        <RouteMap state=state on_select=on_select/>
                        <div class="demo__alert">
                            <AlertCard state=state/>
                        </div>
                    </div>

                    <div class="demo__controls">
                        <button
                            class="button button--primary"
                            class:button--active=running
                            on:click=move |_| state.update(DemoState::toggle_running)
                        >
                            {move || if running() { "Pause Route" } else { "Start Route" }}
                        </button>
                        <button class="button button--outline" on:click=move |_| state.update(DemoState::reset)>
                            "Reset"
                        </button>
                        <button
                            class="button button--ghost"
                            on:click=move |_| {
                                state.update(|s| {
                                    if let Err(err) = s.rotate_layout() {
                                        warn!("layout switch failed: {err}");
                                    }
                                });
                            }
                        >
                            {move || match layout() {
                                Orientation::Horizontal => "Portrait View",
                                Orientation::Vertical => "Landscape View",
                            }}
                        </button>
                    </div>
                </div>

                <aside class="demo__side">
                    <DamageReport state=state on_clear=move |()| state.update(DemoState::clear_selection)/>
                    <TripPanel state=state/>
                    <SeveritySummary/>
                </aside>
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn RoutePicker(state: RwSignal<DemoState>) -> impl IntoView {
    let catalog = Catalog::demo();

    view! {
        <div class="route-picker" role="tablist">
            {catalog
                .routes()
                .iter()
                .map(|route| {
                    let id = route.id;
                    let hazards = catalog.hazard_count(id);
                    let active = move || state.with(|s| s.tracker().route() == id);
                    view! {
                        <button
                            class="route-picker__option"
                            class:route-picker__option--active=active
                            role="tab"
                            aria-selected=move || active().to_string()
                            on:click=move |_| {
                                state.update(|s| {
                                    if let Err(err) = s.select_route(id) {
                                        warn!("route switch failed: {err}");
                                    }
                                });
                            }
                        >
                            <span class="route-picker__name">{route.name}</span>
                            <span class="route-picker__metrics">
                                {format!("{} · {}", format_km(route.distance_km), format_eta(route.eta_min))}
                            </span>
                            <span class=format!("route-picker__traffic route-picker__traffic--{}", route.traffic.slug())>
                                {route.traffic.label()}
                            </span>
                            <span class="route-picker__hazards">
                                {format!("{hazards} hazard{}", if hazards == 1 { "" } else { "s" })}
                            </span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn DamageReport(state: RwSignal<DemoState>, #[prop(into)] on_clear: Callback<()>) -> impl IntoView {
    let selected = move || state.with(DemoState::selected_hazard);

    view! {
        <div class="damage-report">
            <h3 class="damage-report__title">"Road Damage Report"</h3>
            <Show
                when=move || selected().is_some()
                fallback=|| {
                    view! {
                        <p class="damage-report__placeholder">
                            "Click on a pothole to view details or start the route to see smart navigation in action."
                        </p>
                    }
                }
            >
                {move || selected().map(|hazard| view! { <HazardDetails hazard=hazard on_clear=on_clear/> })}
            </Show>
        </div>
    }
}

#[component]
fn HazardDetails(hazard: &'static Hazard, on_clear: Callback<()>) -> impl IntoView {
    view! {
        <div class=format!("hazard-details hazard-details--{}", hazard.severity.slug())>
            <div class="hazard-details__header">
                <h4 class="hazard-details__title">{hazard.title}</h4>
                <span class=badge_class(hazard.severity)>{hazard.severity.label()}</span>
            </div>
            <dl class="hazard-details__facts">
                <dt>"Type"</dt>
                <dd>{hazard.kind.label()}</dd>
                <dt>"Location"</dt>
                <dd>{hazard.location}</dd>
                <dt>"Size"</dt>
                <dd>{hazard.dimensions.to_string()}</dd>
                <dt>"Damage score"</dt>
                <dd>{hazard.damage_points()}</dd>
                <dt>"Est. repair"</dt>
                <dd>{format_inr(hazard.repair_cost_inr())}</dd>
            </dl>
            <p class="hazard-details__age">{format_age_days(hazard.age_days)}</p>
            <button class="button button--ghost button--small" on:click=move |_| on_clear.run(())>
                "Close report"
            </button>
        </div>
    }
}

#[component]
fn TripPanel(state: RwSignal<DemoState>) -> impl IntoView {
    let stats = move || state.with(|s| s.tracker().stats());
    let progress = move || state.with(|s| format!("{:.0}%", s.tracker().progress() * 100.0));

    view! {
        <div class="trip-panel">
            <h4 class="trip-panel__title">"Trip"</h4>
            <div class="trip-panel__grid">
                <div class="trip-panel__cell">
                    <span class="trip-panel__value">{progress}</span>
                    <span class="trip-panel__label">"Progress"</span>
                </div>
                <div class="trip-panel__cell">
                    <span class="trip-panel__value">{move || stats().laps}</span>
                    <span class="trip-panel__label">"Laps"</span>
                </div>
                <div class="trip-panel__cell">
                    <span class="trip-panel__value">{move || stats().alerts_raised}</span>
                    <span class="trip-panel__label">"Alerts"</span>
                </div>
                <div class="trip-panel__cell">
                    <span class="trip-panel__value">{move || stats().score}</span>
                    <span class="trip-panel__label">"Damage avoided"</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SeveritySummary() -> impl IntoView {
    let counts = Catalog::demo().severity_counts();

    view! {
        <div class="severity-summary">
            <h4 class="severity-summary__title">{format!("{} hazards mapped", counts.total())}</h4>
            <ul class="severity-summary__list">
                {Severity::ALL
                    .iter()
                    .rev()
                    .map(|&severity| {
                        view! {
                            <li class="severity-summary__row">
                                <span class=badge_class(severity)>{severity.label()}</span>
                                <span class="severity-summary__count">{counts.get(severity)}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
