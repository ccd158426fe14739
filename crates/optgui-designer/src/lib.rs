//! # OptGUI Designer
//!
//! Interactive constraint geometry for drone trajectory planning.
//!
//! The crate keeps three representations of every item consistent:
//! the [`model`] (canonical numbers), the [`view`] (what to draw, with
//! resize [`handle`]s) and the [`snapshot`] handed to the solver. The
//! [`canvas::Canvas`] controller owns all of them.
//!
//! ## Modules
//!
//! - [`model`]: ellipse, polygon, plane, waypoint chain and drone models
//! - [`handle`]: press/drag/release resize handles
//! - [`view`]: per-item views producing [`view::RenderFrame`]s
//! - [`scene`]: shared scene extent and its growth rule
//! - [`feasibility`]: cross-thread feasibility flag for drones
//! - [`canvas`]: the controller routing placement, erase, flip and drag
//!
//! ## Example
//!
//! ```
//! use optgui_designer::canvas::Canvas;
//! use optgui_designer::model::Point;
//!
//! let mut canvas = Canvas::default();
//! let id = canvas.add_ellipse(Point::new(0.0, 0.0), 20.0);
//! canvas.bind_port(id, 1).unwrap();
//! assert_eq!(canvas.solver_snapshot().len(), 1);
//! ```

pub mod bounds;
pub mod canvas;
pub mod feasibility;
pub mod handle;
pub mod model;
pub mod scene;
pub mod selection_manager;
pub mod snapshot;
pub mod store;
pub mod tool;
pub mod view;
pub mod viewport;

pub use bounds::Bounds;
pub use canvas::Canvas;
pub use feasibility::FeasibilityChannel;
pub use handle::{HandleKind, HandleTarget, PointerButton, ResizeHandle};
pub use model::{
    ConstraintModel, DroneModel, EllipseModel, GeometryModel, ModelKind, PlaneModel, Point,
    PolygonModel, VertexModel, WaypointsModel,
};
pub use scene::{expand_scene, Scene, SceneHost};
pub use snapshot::ConstraintRecord;
pub use store::{ItemId, ModelStore};
pub use tool::{CanvasCommand, PlacementTool, ToolMode};
pub use view::{RenderFrame, ShapeView};
pub use viewport::Viewport;
