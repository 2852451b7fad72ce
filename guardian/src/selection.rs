//! Which hazard the damage report is showing.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::catalog::Catalog;
use crate::error::GuardianError;
use crate::hazard::Hazard;

/// Selected hazard id. A set id always refers to a catalog entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HazardSelection {
    selected: Option<u32>,
}

impl HazardSelection {
    #[must_use]
    pub fn selected_id(&self) -> Option<u32> {
        self.selected
    }

    #[must_use]
    pub fn is_selected(&self, id: u32) -> bool {
        self.selected == Some(id)
    }

    /// Select `id`, leaving the current selection untouched if it is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`GuardianError::UnknownHazard`] when `catalog` has no such hazard.
    pub fn select(&mut self, catalog: &Catalog, id: u32) -> Result<(), GuardianError> {
        catalog.hazard(id)?;
        self.selected = Some(id);
        Ok(())
    }

    /// Select `id`, or clear the selection if `id` is already selected.
    ///
    /// # Errors
    ///
    /// Returns [`GuardianError::UnknownHazard`] when `catalog` has no such hazard.
    pub fn toggle(&mut self, catalog: &Catalog, id: u32) -> Result<(), GuardianError> {
        if self.is_selected(id) {
            self.clear();
            return Ok(());
        }
        self.select(catalog, id)
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The selected literal record, if any.
    #[must_use]
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Option<&'a Hazard> {
        self.selected.and_then(|id| catalog.hazards().iter().find(|h| h.id == id))
    }
}
