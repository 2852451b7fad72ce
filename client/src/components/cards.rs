//! Small presentational cards reused by the content sections.

use leptos::prelude::*;

/// Big-number statistic with a caption.
#[component]
pub fn StatCard(number: &'static str, label: &'static str, description: &'static str, tone: &'static str) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class=format!("stat-card__number stat-card__number--{tone}")>{number}</div>
            <div class="stat-card__label">{label}</div>
            <p class="stat-card__description">{description}</p>
        </div>
    }
}

#[component]
pub fn FeatureCard(icon_path: &'static str, title: &'static str, description: &'static str, tone: &'static str) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class=format!("feature-card__icon feature-card__icon--{tone}")>
                <Icon path=icon_path/>
            </div>
            <h3 class="feature-card__title">{title}</h3>
            <p class="feature-card__description">{description}</p>
        </div>
    }
}

/// Titled card with a checklist of capabilities.
#[component]
pub fn ChecklistCard(title: &'static str, description: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="checklist-card">
            <h3 class="checklist-card__title">{title}</h3>
            <p class="checklist-card__description">{description}</p>
            <ul class="checklist-card__items">
                {items.iter().map(|item| view! { <CheckItem text=*item/> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn CheckItem(text: &'static str) -> impl IntoView {
    view! {
        <li class="check-item">
            <svg class="check-item__icon" viewBox="0 0 20 20" fill="currentColor" aria-hidden="true">
                <path
                    fill-rule="evenodd"
                    clip-rule="evenodd"
                    d="M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z"
                />
            </svg>
            <span>{text}</span>
        </li>
    }
}

#[component]
pub fn MarketCard(value: &'static str, title: &'static str, description: &'static str, trend: &'static str) -> impl IntoView {
    view! {
        <div class="market-card">
            <div class="market-card__value">{value}</div>
            <div class="market-card__title">{title}</div>
            <p class="market-card__description">{description}</p>
            <div class="market-card__trend">{trend}</div>
        </div>
    }
}

/// 24×24 stroked outline icon.
#[component]
pub fn Icon(path: &'static str) -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=path/>
        </svg>
    }
}
