// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly availability editor state.
//!
//! Error policy differs per operation:
//! - [`ScheduleState::init`] logs and swallows fetch failures, keeping the
//!   current grid.
//! - [`ScheduleState::save`] logs and returns failures so the UI can offer a
//!   retry; the grid stays dirty.

use crate::api::AvailabilityApi;
use crate::error::Result;
use crate::models::availability::AvailabilityGrid;
use crate::models::GroupAvailability;
use tokio::sync::watch;

/// Loading and unsaved-change flags, published to subscribers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleStatus {
    pub loading: bool,
    /// Grid differs from the last successful load or save
    pub dirty: bool,
}

/// Availability grid state container.
pub struct ScheduleState {
    api: AvailabilityApi,
    grid: AvailabilityGrid,
    status: watch::Sender<ScheduleStatus>,
}

impl ScheduleState {
    pub fn new(api: AvailabilityApi) -> Self {
        let (status, _rx) = watch::channel(ScheduleStatus::default());
        Self {
            api,
            grid: AvailabilityGrid::empty(),
            status,
        }
    }

    /// Load the current user's availability from the server.
    ///
    /// Replaces the grid and clears dirty on success. On failure the
    /// existing grid is kept and the error is only logged.
    pub async fn init(&mut self) {
        self.set_loading(true);

        match self.api.get_my_availability().await {
            Ok(slots) => {
                self.grid = AvailabilityGrid::from_slots(&slots);
                self.set_dirty(false);
                tracing::debug!(
                    received = slots.len(),
                    available = self.grid.available_count(),
                    "Schedule loaded"
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load schedule");
            }
        }

        self.set_loading(false);
    }

    /// Set one cell. Marks dirty only if the value changed.
    ///
    /// Panics if `day >= 7` or `hour >= 24`.
    pub fn set_slot(&mut self, day: usize, hour: usize, value: bool) {
        if self.grid.set(day, hour, value) {
            self.set_dirty(true);
        }
    }

    /// Flip one cell. Always marks dirty.
    ///
    /// Panics if `day >= 7` or `hour >= 24`.
    pub fn toggle_slot(&mut self, day: usize, hour: usize) {
        self.grid.toggle(day, hour);
        self.set_dirty(true);
    }

    /// Send the full set of available cells to the server.
    ///
    /// Returns `Ok(true)` on success. On failure the error is logged and
    /// returned; dirty is left as it was.
    pub async fn save(&mut self) -> Result<bool> {
        self.set_loading(true);

        let slots = self.grid.to_slots();
        let result = self.api.update_my_availability(&slots).await;

        let outcome = match result {
            Ok(()) => {
                self.set_dirty(false);
                tracing::info!(slots = slots.len(), "Schedule saved");
                Ok(true)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save schedule");
                Err(e)
            }
        };

        self.set_loading(false);
        outcome
    }

    /// Clear every cell. Always marks dirty.
    pub fn reset(&mut self) {
        self.grid = AvailabilityGrid::empty();
        self.set_dirty(true);
    }

    /// Everyone's availability, computed server-side.
    pub async fn group_availability(&self) -> Result<GroupAvailability> {
        self.api.get_group_availability().await
    }

    // ─── Accessors ───────────────────────────────────────────────

    pub fn grid(&self) -> &AvailabilityGrid {
        &self.grid
    }

    pub fn is_available(&self, day: usize, hour: usize) -> bool {
        self.grid.get(day, hour)
    }

    pub fn is_loading(&self) -> bool {
        self.status.borrow().loading
    }

    pub fn is_dirty(&self) -> bool {
        self.status.borrow().dirty
    }

    pub fn status(&self) -> ScheduleStatus {
        *self.status.borrow()
    }

    /// Observe loading/dirty changes.
    pub fn subscribe(&self) -> watch::Receiver<ScheduleStatus> {
        self.status.subscribe()
    }

    fn set_loading(&self, loading: bool) {
        self.status.send_if_modified(|s| {
            let changed = s.loading != loading;
            s.loading = loading;
            changed
        });
    }

    fn set_dirty(&self, dirty: bool) {
        self.status.send_if_modified(|s| {
            let changed = s.dirty != dirty;
            s.dirty = dirty;
            changed
        });
    }
}
