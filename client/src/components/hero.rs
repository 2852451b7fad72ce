//! Landing banner with the phone mock-up and live route animation.
//!
//! DESIGN
//! ======
//! One component covers every banner layout: orientation, starting route and
//! autoplay are props. The mock-up owns its own `DemoState`, independent of
//! the interactive demo further down the page.

use guardian::{Catalog, DemoConfig, Orientation, RouteId};
use leptos::logging::warn;
use leptos::prelude::*;

use crate::components::alert_card::AlertCard;
use crate::components::route_map::RouteMap;
use crate::state::demo::DemoState;
use crate::util::format::format_eta;
use crate::util::ticker::{autoplay as start_on_mount, drive_demo};

const HERO_STATS: [(&str, &str); 3] = [("95%", "Detection Accuracy"), ("<100ms", "Alert Latency"), ("24/7", "Road Monitoring")];

#[component]
pub fn Hero(
    #[prop(optional)] orientation: Orientation,
    #[prop(optional)] route: RouteId,
    #[prop(default = true)] autoplay: bool,
) -> impl IntoView {
    let state = match DemoState::new(route, orientation, DemoConfig::default()) {
        Ok(state) => RwSignal::new(state),
        Err(err) => {
            warn!("hero animation disabled: {err}");
            return view! { <HeroCopy/> }.into_any();
        }
    };
    drive_demo(state);
    if autoplay {
        start_on_mount(state);
    }

    let on_route = move |id: RouteId| {
        state.update(|s| {
            if let Err(err) = s.select_route(id) {
                warn!("hero route switch failed: {err}");
            }
        });
    };

    view! {
        <header id="top" class="hero">
            <div class="hero__inner">
                <HeroCopy/>

                <div class="hero__visual">
                    <div class="phone">
                        <div class="phone__screen">
                            <div class="phone__status">
                                <span class="phone__dot"></span>
                                <span class="phone__app">"Path Guardian"</span>
                            </div>

                            <div class="phone__map">
                                <RouteMap state=state/>
                            </div>

                            <AlertCard state=state/>

                            <div class="phone__routes">
                                <h4 class="phone__routes-title">"🚗 Route Options"</h4>
                                {Catalog::demo()
                                    .routes()
                                    .iter()
                                    .map(|r| {
                                        let id = r.id;
                                        view! {
                                            <button
                                                class="route-option"
                                                class:route-option--active=move || state.with(|s| s.tracker().route() == id)
                                                on:click=move |_| on_route(id)
                                            >
                                                <span class="route-option__name">{format!("● {}", r.name)}</span>
                                                <span class="route-option__eta">{format_eta(r.eta_min)}</span>
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>

                            <div class="phone__actions">
                                <button class="button button--primary button--small">"Navigate"</button>
                                <button class="button button--ghost button--small">"Report Issue"</button>
                            </div>
                        </div>
                    </div>
                    <span class="hero__badge hero__badge--live">"Live Detection"</span>
                    <span class="hero__badge hero__badge--ai">"AI Powered"</span>
                </div>
            </div>
        </header>
    }
    .into_any()
}

#[component]
fn HeroCopy() -> impl IntoView {
    view! {
        <div class="hero__copy">
            <h1 class="hero__title">
                "Smart Road Monitoring & "
                <span class="hero__title-accent">"Pothole Detection"</span>
            </h1>
            <p class="hero__lead">
                "Experience real-time road damage detection with AI-powered alerts, "
                "dynamic route optimization, and intelligent maintenance planning."
            </p>
            <div class="hero__actions">
                <a class="button button--primary button--large" href="#demo">"See Path Guardian in Action"</a>
                <a class="button button--outline button--large" href="#demo">"Watch Live Demo"</a>
            </div>
            <div class="hero__stats">
                {HERO_STATS
                    .iter()
                    .map(|&(value, label)| {
                        view! {
                            <div class="hero__stat">
                                <span class="hero__stat-value">{value}</span>
                                <span class="hero__stat-label">{label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
