//! Tracker set for all columns of a line
//!
//! One [`FieldTracker`] exists per column. Whenever a line arrives with a
//! different number of fields than the set was built for, every tracker is
//! discarded and rebuilt empty: no color history survives a shape change.

use crate::tracker::FieldTracker;
use crate::types::Color;

/// Field trackers for the current line shape
#[derive(Debug, Clone, Default)]
pub struct ColumnSet {
    trackers: Vec<FieldTracker>,
    /// Number of times the set has been (re)built
    rebuilds: u64,
}

impl ColumnSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Colors for every field of one line, in column order.
    ///
    /// A line with no fields leaves the set untouched.
    pub fn assign_line<S: AsRef<str>>(&mut self, fields: &[S]) -> Vec<Color> {
        if fields.is_empty() {
            return Vec::new();
        }

        if fields.len() != self.trackers.len() {
            self.rebuild(fields.len());
        }

        self.trackers
            .iter_mut()
            .zip(fields)
            .map(|(tracker, value)| tracker.assign(value.as_ref()))
            .collect()
    }

    fn rebuild(&mut self, field_count: usize) {
        log::debug!(
            "Line shape changed ({} -> {} fields), resetting colors",
            self.trackers.len(),
            field_count
        );
        self.trackers = (0..field_count).map(|_| FieldTracker::new()).collect();
        self.rebuilds += 1;
    }

    /// Field count the current trackers were built for (0 before the first line)
    pub fn field_count(&self) -> usize {
        self.trackers.len()
    }

    /// Tracker for one column
    pub fn column(&self, index: usize) -> Option<&FieldTracker> {
        self.trackers.get(index)
    }

    /// Number of times the trackers have been rebuilt
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }
}
