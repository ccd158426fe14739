//! # OptGUI Core
//!
//! Core types, errors and tuning parameters shared by the OptGUI crates.
//! Provides the error taxonomy, scene constants and the shared-state
//! aliases used between the UI thread and the solver thread.

pub mod constants;
pub mod error;
pub mod params;
pub mod types;

pub use error::{Error, GeometryError, Result};

pub use params::{RenderParams, SceneParams};

// Re-export type aliases for convenience
pub use types::{thread_safe, ThreadSafe};
