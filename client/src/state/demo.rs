//! Simulation state behind the hero animation and the interactive demo.
//!
//! DESIGN
//! ======
//! Pairs a `guardian::RouteTracker` with the damage-report selection so a
//! single `RwSignal<DemoState>` drives one map. Route switches drop a
//! selection that no longer belongs to the drawn route; reset drops it
//! unconditionally.

#[cfg(test)]
#[path = "demo_test.rs"]
mod demo_test;

use guardian::{
    Catalog, DemoConfig, GuardianError, Hazard, HazardSelection, Orientation, RouteId, RouteTracker, TickReport,
};

#[derive(Clone, Debug, PartialEq)]
pub struct DemoState {
    tracker: RouteTracker,
    selection: HazardSelection,
}

impl DemoState {
    /// Paused demo at the start of `route`.
    ///
    /// # Errors
    ///
    /// Propagates tracker construction failures (unknown route, bad config).
    pub fn new(route: RouteId, orientation: Orientation, config: DemoConfig) -> Result<Self, GuardianError> {
        Ok(Self {
            tracker: RouteTracker::new(Catalog::demo(), route, orientation, config)?,
            selection: HazardSelection::default(),
        })
    }

    pub fn tracker(&self) -> &RouteTracker {
        &self.tracker
    }

    pub fn selection(&self) -> HazardSelection {
        self.selection
    }

    pub fn tick(&mut self) -> TickReport {
        self.tracker.tick()
    }

    pub fn start(&mut self) {
        self.tracker.start();
    }

    pub fn toggle_running(&mut self) {
        self.tracker.toggle();
    }

    /// Stop, rewind and clear the damage report.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.selection.clear();
    }

    /// # Errors
    ///
    /// Returns [`GuardianError::UnknownRoute`] and changes nothing when the
    /// catalog lacks `route`.
    pub fn select_route(&mut self, route: RouteId) -> Result<(), GuardianError> {
        if route == self.tracker.route() {
            return Ok(());
        }
        self.tracker.select_route(Catalog::demo(), route)?;
        if let Some(id) = self.selection.selected_id()
            && !self.tracker.pins().iter().any(|pin| pin.id == id)
        {
            self.selection.clear();
        }
        Ok(())
    }

    /// Redraw the current route in the other layout, keeping progress.
    ///
    /// # Errors
    ///
    /// Returns [`GuardianError::UnknownRoute`] when the catalog lost the route.
    pub fn rotate_layout(&mut self) -> Result<(), GuardianError> {
        let next = match self.tracker.orientation() {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        };
        self.tracker.set_orientation(Catalog::demo(), next)
    }

    /// Select a hazard for the damage report, or deselect it if already shown.
    ///
    /// # Errors
    ///
    /// Returns [`GuardianError::UnknownHazard`] for ids outside the catalog.
    pub fn toggle_hazard(&mut self, id: u32) -> Result<(), GuardianError> {
        self.selection.toggle(Catalog::demo(), id)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selected_hazard(&self) -> Option<&'static Hazard> {
        self.selection.resolve(Catalog::demo())
    }

    /// Hazard behind the alert currently on screen.
    pub fn alert_hazard(&self) -> Option<&'static Hazard> {
        let alert = self.tracker.alert()?;
        Catalog::demo().hazard(alert.hazard_id).ok()
    }
}
