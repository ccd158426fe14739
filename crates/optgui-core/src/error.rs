//! Error handling for OptGUI
//!
//! Provides error types for the recoverable failures of the application:
//! - Geometry errors (controller-level actions on the model store)
//! - I/O and serialization errors (snapshots handed to the solver link)
//!
//! Contract violations inside the geometry kernel (out-of-range vertex
//! index, negative dimension) are not represented here: they panic.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Represents rejected controller actions on the shape store, such as
/// addressing an item that no longer exists or binding a port twice.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// No item with this id exists in the store
    #[error("Unknown item {id}")]
    UnknownItem {
        /// The id that was looked up.
        id: u64,
    },

    /// Port is already bound to another item
    #[error("Port {port} already bound to item {owner}")]
    PortInUse {
        /// The requested port.
        port: u32,
        /// The item currently holding the port.
        owner: u64,
    },

    /// Port zero is reserved for "unbound"
    #[error("Port 0 is reserved for unbound items")]
    ReservedPort,

    /// Polygon has fewer than three vertices
    #[error("Polygon needs at least 3 points, got {count}")]
    DegeneratePolygon {
        /// The number of points supplied.
        count: usize,
    },

    /// The operation does not apply to this kind of item
    #[error("Operation '{operation}' not supported for {kind}")]
    UnsupportedOperation {
        /// The operation name.
        operation: String,
        /// The item kind name.
        kind: String,
    },
}

/// Main error type for OptGUI
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this error reports a missing item
    pub fn is_unknown_item(&self) -> bool {
        matches!(self, Error::Geometry(GeometryError::UnknownItem { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
