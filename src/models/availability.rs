//! Weekly availability: sparse wire slots and the dense in-memory grid.
//!
//! The backend speaks a sparse list of `{dayOfWeek, hourOfDay, isAvailable}`
//! entries. The editor works on a dense 7×24 matrix. Conversion is lossy in
//! one direction only: explicit `isAvailable: false` entries and absent
//! entries are indistinguishable once loaded into the grid.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use super::MemberInfo;

/// Days in the grid (0 = first day of the scheduling week).
pub const DAYS_PER_WEEK: usize = 7;
/// Hours in the grid (0-23).
pub const HOURS_PER_DAY: usize = 24;

/// One (day, hour) availability entry in wire format.
///
/// Indices are signed so that out-of-range values from the server still
/// parse and can be discarded instead of failing the whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AvailabilitySlot {
    /// 0-6
    pub day_of_week: i32,
    /// 0-23
    pub hour_of_day: i32,
    pub is_available: bool,
}

impl AvailabilitySlot {
    /// An `isAvailable: true` slot.
    pub fn available(day: usize, hour: usize) -> Self {
        Self {
            day_of_week: day as i32,
            hour_of_day: hour as i32,
            is_available: true,
        }
    }

    /// Grid indices if both fall inside the 7×24 week.
    pub fn cell(&self) -> Option<(usize, usize)> {
        let day = usize::try_from(self.day_of_week).ok()?;
        let hour = usize::try_from(self.hour_of_day).ok()?;
        (day < DAYS_PER_WEEK && hour < HOURS_PER_DAY).then_some((day, hour))
    }
}

/// `GET /api/availability/me` envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlotsResponse {
    #[serde(default)]
    pub slots: Vec<AvailabilitySlot>,
}

/// `POST /api/availability/me` body. The list fully replaces the stored set.
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityUpdateRequest<'a> {
    pub slots: &'a [AvailabilitySlot],
}

/// Dense `[day][hour]` availability matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AvailabilityGrid {
    cells: [[bool; HOURS_PER_DAY]; DAYS_PER_WEEK],
}

impl AvailabilityGrid {
    /// All-false grid.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a grid from wire slots.
    ///
    /// Slots outside the valid day/hour range are dropped silently. If the
    /// same cell appears more than once, the last entry wins.
    pub fn from_slots(slots: &[AvailabilitySlot]) -> Self {
        let mut grid = Self::empty();
        for slot in slots {
            if let Some((day, hour)) = slot.cell() {
                grid.cells[day][hour] = slot.is_available;
            }
        }
        grid
    }

    /// Sparse list of only the `true` cells, day ascending then hour ascending.
    pub fn to_slots(&self) -> Vec<AvailabilitySlot> {
        let mut slots = Vec::new();
        for (day, hours) in self.cells.iter().enumerate() {
            for (hour, &available) in hours.iter().enumerate() {
                if available {
                    slots.push(AvailabilitySlot::available(day, hour));
                }
            }
        }
        slots
    }

    /// Panics if `day >= 7` or `hour >= 24`.
    pub fn get(&self, day: usize, hour: usize) -> bool {
        self.cells[day][hour]
    }

    /// Set a cell, returning `true` if the value changed.
    ///
    /// Panics if `day >= 7` or `hour >= 24`.
    pub fn set(&mut self, day: usize, hour: usize, value: bool) -> bool {
        let cell = &mut self.cells[day][hour];
        let changed = *cell != value;
        *cell = value;
        changed
    }

    /// Flip a cell and return its new value.
    ///
    /// Panics if `day >= 7` or `hour >= 24`.
    pub fn toggle(&mut self, day: usize, hour: usize) -> bool {
        let cell = &mut self.cells[day][hour];
        *cell = !*cell;
        *cell
    }

    /// Row for one day.
    pub fn day(&self, day: usize) -> &[bool; HOURS_PER_DAY] {
        &self.cells[day]
    }

    /// Number of available hours in the week.
    pub fn available_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c).count()
    }
}

// ─── Group Availability ──────────────────────────────────────

/// Members available during one hour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HourData {
    pub hour: u32,
    pub available_user_ids: Vec<String>,
}

/// One day of the group view, labelled by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DayAvailability {
    pub day_name: String,
    pub date_label: String,
    pub is_next_week: bool,
    pub hours: Vec<HourData>,
}

/// Server-computed aggregate of everyone's availability.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GroupAvailability {
    pub days: Vec<DayAvailability>,
    pub members: Vec<MemberInfo>,
}
