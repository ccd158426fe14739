//! Type aliases for shared state.
//!
//! The UI thread owns models and views outright; the only state crossing a
//! thread boundary is the per-drone feasibility cell written by the solver.
//! This alias names that sharing pattern.
//!
//! ## Usage
//!
//! ```rust
//! use optgui_core::types::*;
//!
//! let flag: ThreadSafe<bool> = thread_safe(true);
//! *flag.lock() = false;
//! assert!(!*flag.lock());
//! ```

use parking_lot::Mutex;
use std::sync::Arc;

// =============================================================================
// THREAD-SAFE SHARED TYPES (Arc<Mutex<T>>)
// =============================================================================

/// A thread-safe, mutex-protected wrapper for cross-thread sharing.
///
/// Backed by `parking_lot::Mutex`, which does not poison.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

// =============================================================================
// CONSTRUCTORS
// =============================================================================

/// Creates a new `ThreadSafe<T>` from a value.
#[inline]
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}
