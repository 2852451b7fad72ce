//! Live proximity alert banner.

use leptos::prelude::*;

use crate::state::demo::DemoState;
use crate::util::format::format_distance_m;

/// Shows the tracker's current alert and fades out when it expires.
#[component]
pub fn AlertCard(state: RwSignal<DemoState>) -> impl IntoView {
    let alert = move || state.with(|s| s.tracker().alert().zip(s.alert_hazard()));
    let visible = move || alert().is_some();
    let modifier = move || {
        alert()
            .map(|(a, _)| format!("alert-card alert-card--{}", a.severity.slug()))
            .unwrap_or_else(|| "alert-card".to_owned())
    };

    view! {
        <div class=modifier class:alert-card--visible=visible role="status" aria-live="polite">
            {move || {
                alert()
                    .map(|(alert, hazard)| {
                        view! {
                            <div class="alert-card__body">
                                <h3 class="alert-card__title">{format!("⚠️ {} Alert", hazard.kind.label())}</h3>
                                <p class="alert-card__detail">
                                    {format!(
                                        "{} severity - {} ahead",
                                        alert.severity,
                                        format_distance_m(alert.distance_m),
                                    )}
                                </p>
                            </div>
                            <span class="alert-card__pulse"></span>
                        }
                    })
            }}
        </div>
    }
}
