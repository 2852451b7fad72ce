//! Interval driver for a `DemoState`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The tracker only moves when something calls `tick`. In the browser a
//! `gloo_timers` interval does that while the tracker is running. The
//! interval lives inside the effect closure, so pausing drops it and so does
//! disposing the owning component. Server renders never tick.

use leptos::prelude::*;

use crate::state::demo::DemoState;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

/// Tick `state` every `tick_ms` while its tracker is running.
#[cfg(feature = "hydrate")]
pub fn drive_demo(state: RwSignal<DemoState>) {
    let interval = Rc::new(RefCell::new(None::<Interval>));
    Effect::new(move || {
        let (running, tick_ms) = state.with(|s| (s.tracker().is_running(), s.tracker().config().tick_ms));
        if !running {
            interval.borrow_mut().take();
            return;
        }
        if interval.borrow().is_some() {
            return;
        }
        let handle = Interval::new(tick_ms, move || {
            let Some(report) = state.try_update(DemoState::tick) else {
                return;
            };
            if report.wrapped {
                log::debug!("demo lap complete");
            }
            for id in report.raised {
                log::debug!("hazard alert raised: id={id}");
            }
        });
        *interval.borrow_mut() = Some(handle);
    });
}

#[cfg(not(feature = "hydrate"))]
pub fn drive_demo(_state: RwSignal<DemoState>) {}

/// Start `state` once the page has hydrated.
pub fn autoplay(state: RwSignal<DemoState>) {
    Effect::new(move || {
        state.update(DemoState::start);
    });
}
