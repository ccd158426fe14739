//! Cross-thread feasibility flag.
//!
//! The solver thread publishes whether the last solve for a drone succeeded;
//! the UI thread reads it while painting. The flag is a single mutex-guarded
//! boolean: writes and reads hold the lock only for the copy, so a paint never
//! waits on a solve, only on another copy.

use optgui_core::{thread_safe, ThreadSafe};
use tracing::trace;

/// Shared handle to one drone's feasibility flag.
///
/// Cloning yields another handle to the same cell, which is how the solver
/// side obtains its writer.
#[derive(Debug, Clone)]
pub struct FeasibilityChannel {
    cell: ThreadSafe<bool>,
}

impl FeasibilityChannel {
    pub fn new() -> Self {
        Self {
            cell: thread_safe(true),
        }
    }

    /// Publishes a new value. Last writer wins.
    pub fn set_feasible(&self, feasible: bool) {
        *self.cell.lock() = feasible;
        trace!(feasible, "feasibility updated");
    }

    pub fn is_feasible(&self) -> bool {
        *self.cell.lock()
    }

    /// True when both handles point at the same cell.
    pub fn shares_cell_with(&self, other: &FeasibilityChannel) -> bool {
        std::sync::Arc::ptr_eq(&self.cell, &other.cell)
    }
}

impl Default for FeasibilityChannel {
    fn default() -> Self {
        Self::new()
    }
}
