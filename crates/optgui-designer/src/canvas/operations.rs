//! Item creation, removal and editing operations for Canvas.

use optgui_core::{GeometryError, Result};
use tracing::{debug, warn};

use super::Canvas;
use crate::feasibility::FeasibilityChannel;
use crate::model::{
    ConstraintModel, DroneModel, EllipseModel, GeometryModel, ModelKind, PlaneModel, Point,
    PolygonModel, WaypointsModel,
};
use crate::snapshot::ConstraintRecord;
use crate::store::ItemId;
use crate::tool::CanvasCommand;
use crate::view::ShapeView;

impl Canvas {
    fn insert_item(&mut self, model: GeometryModel) -> ItemId {
        let kind = model.kind();
        let id = self.model_store.insert(model);
        if let Some(model) = self.model_store.get(id) {
            let mut view = ShapeView::new(id, model, self.scene_params, self.render_params);
            view.on_geometry_changed(model, &mut self.scene);
            self.views.insert(id, view);
        }
        debug!(id, %kind, "item added");
        id
    }

    /// Re-syncs the view of `id` with its model and re-checks the bounds.
    fn refresh_view(&mut self, id: ItemId) -> Result<()> {
        let model = self
            .model_store
            .get(id)
            .ok_or(GeometryError::UnknownItem { id })?;
        let view = self
            .views
            .get_mut(&id)
            .ok_or(GeometryError::UnknownItem { id })?;
        view.on_geometry_changed(model, &mut self.scene);
        Ok(())
    }

    /// Adds a circular ellipse centred on `pos`.
    pub fn add_ellipse(&mut self, pos: Point, radius: f64) -> ItemId {
        self.insert_item(GeometryModel::Ellipse(EllipseModel::new(pos, radius)))
    }

    /// Adds a closed polygon. Fewer than three points are rejected.
    pub fn add_polygon(&mut self, points: Vec<Point>) -> Result<ItemId> {
        if points.len() < 3 {
            warn!(count = points.len(), "rejected degenerate polygon");
            return Err(GeometryError::DegeneratePolygon {
                count: points.len(),
            }
            .into());
        }
        Ok(self.insert_item(GeometryModel::Polygon(PolygonModel::new(points))))
    }

    pub fn add_plane(&mut self, p1: Point, p2: Point) -> ItemId {
        self.insert_item(GeometryModel::Plane(PlaneModel::new(p1, p2)))
    }

    /// Appends to the waypoint chain, creating it on first use. Returns the
    /// chain's id.
    pub fn add_waypoint(&mut self, pos: Point) -> ItemId {
        if let Some(id) = self.waypoints_id {
            if let Some(chain) = self
                .model_store
                .get_mut(id)
                .and_then(GeometryModel::as_waypoints_mut)
            {
                chain.push_point(pos);
                debug!(id, count = chain.points().len(), "waypoint appended");
                if self.refresh_view(id).is_ok() {
                    return id;
                }
            }
        }
        let mut chain = WaypointsModel::new();
        chain.push_point(pos);
        let id = self.insert_item(GeometryModel::Waypoints(chain));
        self.waypoints_id = Some(id);
        id
    }

    pub fn add_drone(&mut self, pos: Point) -> ItemId {
        let half_size = self.scene_params.drone_size;
        self.insert_item(GeometryModel::Drone(DroneModel::new(pos, half_size)))
    }

    /// Destroys an item together with its view and handles.
    pub fn remove_item(&mut self, id: ItemId) -> Result<GeometryModel> {
        let model = self
            .model_store
            .remove(id)
            .ok_or(GeometryError::UnknownItem { id })?;
        self.views.remove(&id);
        self.selection_manager.forget(id);
        if self.body_drag.is_some_and(|drag| drag.id == id) {
            self.body_drag = None;
        }
        if self.waypoints_id == Some(id) {
            self.waypoints_id = None;
        }
        debug!(id, kind = %model.kind(), "item removed");
        Ok(model)
    }

    /// Toggles an ellipse's exterior border and returns the new state.
    ///
    /// Other kinds have no direction; the call is logged and ignored.
    pub fn flip_direction(&mut self, id: ItemId) -> Result<Option<bool>> {
        let model = self
            .model_store
            .get_mut(id)
            .ok_or(GeometryError::UnknownItem { id })?;
        let kind = model.kind();
        let Some(ellipse) = model.as_ellipse_mut() else {
            warn!(id, %kind, "flip ignored, item has no direction");
            return Ok(None);
        };
        let direction = ellipse.flip_direction();
        self.refresh_view(id)?;
        Ok(Some(direction))
    }

    /// Body drag: moves the item's anchor to `pos`.
    pub fn move_item(&mut self, id: ItemId, pos: Point) -> Result<()> {
        self.model_store
            .get_mut(id)
            .ok_or(GeometryError::UnknownItem { id })?
            .set_position(pos);
        self.refresh_view(id)
    }

    /// Sets the clearance (in grid units) of `id` and re-checks the bounds.
    ///
    /// # Panics
    ///
    /// Panics if `clearance` is negative or not finite.
    pub fn set_clearance(&mut self, id: ItemId, clearance: f64) -> Result<()> {
        self.model_store
            .get_mut(id)
            .ok_or(GeometryError::UnknownItem { id })?
            .set_clearance(clearance);
        debug!(id, clearance, "clearance changed");
        self.refresh_view(id)
    }

    /// Copies every selected item, offset by the duplicate offset and with
    /// the port cleared. The copies become the selection.
    ///
    /// The waypoint chain is unique and is not duplicated.
    pub fn duplicate_selected(&mut self) -> Vec<ItemId> {
        let offset = self.scene_params.duplicate_offset;
        let copies: Vec<GeometryModel> = self
            .selected_ids()
            .into_iter()
            .filter_map(|id| self.model_store.get(id))
            .filter(|m| m.kind() != ModelKind::Waypoints)
            .map(|m| {
                let mut copy = m.duplicate();
                copy.translate(offset, offset);
                copy
            })
            .collect();

        self.deselect_all();
        let ids: Vec<ItemId> = copies
            .into_iter()
            .map(|copy| self.insert_item(copy))
            .collect();
        for id in &ids {
            self.selection_manager.select_id(&mut self.views, *id, true);
        }
        debug!(count = ids.len(), "items duplicated");
        ids
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.model_store.clear();
        self.views.clear();
        self.selection_manager = Default::default();
        self.body_drag = None;
        self.waypoints_id = None;
        self.tool.clear_markers();
        debug!("canvas cleared");
    }

    /// Binds `id` to solver channel `port`.
    pub fn bind_port(&mut self, id: ItemId, port: u32) -> Result<()> {
        if port == 0 {
            return Err(GeometryError::ReservedPort.into());
        }
        if !self.model_store.contains(id) {
            return Err(GeometryError::UnknownItem { id }.into());
        }
        if let Some((owner, _)) = self
            .model_store
            .iter()
            .find(|(other, m)| *other != id && m.port() == port)
        {
            warn!(id, port, owner, "port already bound");
            return Err(GeometryError::PortInUse { port, owner }.into());
        }
        if let Some(model) = self.model_store.get_mut(id) {
            model.set_port(port);
        }
        if let Some(view) = self.views.get_mut(&id) {
            view.request_repaint();
        }
        debug!(id, port, "port bound");
        Ok(())
    }

    /// Clears the port of `id`, returning the previous one.
    pub fn unbind_port(&mut self, id: ItemId) -> Result<u32> {
        let model = self
            .model_store
            .get_mut(id)
            .ok_or(GeometryError::UnknownItem { id })?;
        let previous = model.port();
        model.set_port(0);
        if let Some(view) = self.views.get_mut(&id) {
            view.request_repaint();
        }
        Ok(previous)
    }

    /// Records for every bound item, in draw order.
    pub fn solver_snapshot(&self) -> Vec<ConstraintRecord> {
        self.model_store
            .iter()
            .filter(|(_, m)| m.port() != 0)
            .map(|(_, m)| ConstraintRecord::from_model(m))
            .collect()
    }

    /// Writer handle for a drone's feasibility flag, for the solver thread.
    pub fn feasibility_channel(&self, id: ItemId) -> Result<FeasibilityChannel> {
        let model = self
            .model_store
            .get(id)
            .ok_or(GeometryError::UnknownItem { id })?;
        model
            .as_drone()
            .map(|d| d.feasibility().clone())
            .ok_or_else(|| {
                GeometryError::UnsupportedOperation {
                    operation: "feasibility".to_string(),
                    kind: model.kind().to_string(),
                }
                .into()
            })
    }

    /// Carries out a placement tool command.
    pub fn execute(&mut self, command: CanvasCommand) -> Result<Option<ItemId>> {
        match command {
            CanvasCommand::AddEllipse { center, radius } => Ok(Some(self.add_ellipse(center, radius))),
            CanvasCommand::AddPolygon { points } => self.add_polygon(points).map(Some),
            CanvasCommand::AddPlane { p1, p2 } => Ok(Some(self.add_plane(p1, p2))),
            CanvasCommand::AddWaypoint { at } => Ok(Some(self.add_waypoint(at))),
            CanvasCommand::Erase { at } => match self.item_at(at) {
                Some(id) => self.remove_item(id).map(|_| Some(id)),
                None => Ok(None),
            },
            CanvasCommand::Flip { at } => match self.item_at(at) {
                Some(id) => self
                    .flip_direction(id)
                    .map(|flipped| flipped.map(|_| id)),
                None => Ok(None),
            },
            CanvasCommand::Interact { at } => Ok(self.interact(at, false)),
        }
    }
}
