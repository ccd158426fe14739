//! Canvas controller: the single owner of models, views and the scene.
//!
//! The canvas is the only component that creates or destroys models. It
//! routes pointer input either to the handles of selected views or to the
//! active [`PlacementTool`], and re-checks scene bounds after each mutation.

mod operations;

use std::collections::HashMap;

use optgui_core::{GeometryError, RenderParams, Result, SceneParams};
use tracing::{debug, warn};

use crate::bounds::Bounds;
use crate::handle::PointerButton;
use crate::model::{ConstraintModel, GeometryModel, Point};
use crate::scene::{Scene, SceneHost};
use crate::selection_manager::SelectionManager;
use crate::store::{ItemId, ModelStore};
use crate::tool::{CanvasCommand, PlacementTool, ToolMode};
use crate::view::{RenderFrame, ShapeView};
use crate::viewport::Viewport;

/// An item body held under the pointer, with the pointer's offset from the
/// item's anchor at the time of the press.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BodyDrag {
    id: ItemId,
    grab: Point,
}

/// Canvas state managing constraint items and pointer interaction.
#[derive(Debug, Clone)]
pub struct Canvas {
    model_store: ModelStore,
    selection_manager: SelectionManager,
    views: HashMap<ItemId, ShapeView>,
    scene: Scene,
    tool: PlacementTool,
    scene_params: SceneParams,
    render_params: RenderParams,
    waypoints_id: Option<ItemId>,
    body_drag: Option<BodyDrag>,
}

impl Canvas {
    /// Creates a canvas with no display attached.
    pub fn new(scene_params: SceneParams, render_params: RenderParams) -> Self {
        Self {
            model_store: ModelStore::new(),
            selection_manager: SelectionManager::new(),
            views: HashMap::new(),
            scene: Scene::default(),
            tool: PlacementTool::new(scene_params),
            scene_params,
            render_params,
            waypoints_id: None,
            body_drag: None,
        }
    }

    /// Creates a canvas displayed through `viewport`; the extent starts out
    /// covering the viewport.
    pub fn with_viewport(
        scene_params: SceneParams,
        render_params: RenderParams,
        viewport: Viewport,
    ) -> Self {
        let mut canvas = Self::new(scene_params, render_params);
        canvas.scene.attach(viewport);
        canvas.scene.expand_to_viewport();
        canvas
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_rect(&self) -> Bounds {
        self.scene.scene_rect()
    }

    pub fn scene_params(&self) -> &SceneParams {
        &self.scene_params
    }

    /// Current zoom, 1.0 without a viewport.
    pub fn zoom(&self) -> f64 {
        self.scene.scaling_factor()
    }

    /// Sets the viewport zoom; out-of-range values and a missing viewport
    /// leave it unchanged.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        let changed = self
            .scene
            .viewport_mut()
            .is_some_and(|vp| vp.set_zoom(zoom));
        if changed {
            for view in self.views.values_mut() {
                view.request_repaint();
            }
        }
        changed
    }

    /// Resizes the attached viewport and grows the extent to cover it.
    pub fn resize_viewport(&mut self, width: f64, height: f64) -> bool {
        match self.scene.viewport_mut() {
            Some(vp) => vp.set_canvas_size(width, height),
            None => return false,
        }
        self.scene.expand_to_viewport()
    }

    pub fn tool(&self) -> &PlacementTool {
        &self.tool
    }

    /// Switches the placement mode, see [`PlacementTool::select_mode`].
    pub fn set_mode(&mut self, mode: ToolMode) -> ToolMode {
        self.tool.select_mode(mode)
    }

    pub fn mode(&self) -> ToolMode {
        self.tool.mode()
    }

    pub fn len(&self) -> usize {
        self.model_store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.model_store.is_empty()
    }

    pub fn model(&self, id: ItemId) -> Option<&GeometryModel> {
        self.model_store.get(id)
    }

    pub fn view(&self, id: ItemId) -> Option<&ShapeView> {
        self.views.get(&id)
    }

    /// The waypoint chain, once the first waypoint was placed.
    pub fn waypoints_id(&self) -> Option<ItemId> {
        self.waypoints_id
    }

    fn hit_tolerance(&self) -> f64 {
        self.scene_params.handle_size / self.zoom()
    }

    /// Topmost item under `pos`.
    pub fn item_at(&self, pos: Point) -> Option<ItemId> {
        let tolerance = self.hit_tolerance();
        self.model_store.draw_order_iter().rev().find(|id| {
            self.model_store
                .get(*id)
                .is_some_and(|m| m.contains_point(pos, tolerance))
        })
    }

    pub fn select(&mut self, id: ItemId, multi: bool) -> Result<()> {
        if !self.views.contains_key(&id) {
            return Err(GeometryError::UnknownItem { id }.into());
        }
        self.selection_manager.select_id(&mut self.views, id, multi);
        Ok(())
    }

    pub fn deselect_all(&mut self) {
        self.selection_manager.deselect_all(&mut self.views);
    }

    pub fn selected_ids(&self) -> Vec<ItemId> {
        self.selection_manager
            .selected_ids(&self.model_store, &self.views)
    }

    /// Routes a press at scene point `at`.
    ///
    /// In idle mode a primary press first goes to the handles of selected
    /// items (topmost first), then selects the item under the pointer and
    /// grabs its body. In the other modes it drives the placement tool.
    ///
    /// Returns the item created, erased, flipped or selected, if any.
    pub fn pointer_press(
        &mut self,
        button: PointerButton,
        at: Point,
        multi: bool,
    ) -> Result<Option<ItemId>> {
        if button != PointerButton::Primary {
            return Ok(None);
        }
        let zoom = self.zoom();
        match self.tool.press(at, zoom) {
            Some(CanvasCommand::Interact { at }) => Ok(self.interact(at, multi)),
            Some(command) => self.execute(command),
            None => Ok(None),
        }
    }

    fn interact(&mut self, at: Point, multi: bool) -> Option<ItemId> {
        self.body_drag = None;
        let zoom = self.zoom();
        let order: Vec<ItemId> = self.model_store.draw_order_iter().rev().collect();
        for id in order {
            if let Some(view) = self.views.get_mut(&id) {
                if view.is_selected() && view.pointer_press(PointerButton::Primary, at, zoom) {
                    return Some(id);
                }
            }
        }
        let hit = self.item_at(at);
        let tolerance = self.hit_tolerance();
        let selected = self.selection_manager.select_at(
            &self.model_store,
            &mut self.views,
            &at,
            tolerance,
            multi,
        );
        if let Some(id) = selected.filter(|id| hit == Some(*id)) {
            let grabbed = self.views.get(&id).is_some_and(ShapeView::is_selected);
            if let Some(model) = self.model_store.get(id).filter(|_| grabbed) {
                let anchor = model.position();
                let grab = Point::new(at.x - anchor.x, at.y - anchor.y);
                debug!(id, "body drag started");
                self.body_drag = Some(BodyDrag { id, grab });
            }
        }
        selected
    }

    /// Forwards a move to a dragging handle, or else moves a grabbed body so
    /// the grab point stays under the pointer. Returns true when a model
    /// changed.
    pub fn pointer_move(&mut self, at: Point) -> Result<bool> {
        let dragging = self
            .views
            .iter()
            .find(|(_, v)| v.is_dragging())
            .map(|(id, _)| *id);
        if let Some(id) = dragging {
            return match self.views.get_mut(&id) {
                Some(view) => view.pointer_move(&mut self.model_store, &mut self.scene, at),
                None => Ok(false),
            };
        }
        let Some(BodyDrag { id, grab }) = self.body_drag else {
            return Ok(false);
        };
        self.move_item(id, Point::new(at.x - grab.x, at.y - grab.y))?;
        Ok(true)
    }

    /// Ends any handle or body drag. Returns true when one was active.
    pub fn pointer_release(&mut self, button: PointerButton) -> bool {
        let mut released = false;
        if button == PointerButton::Primary && self.body_drag.take().is_some() {
            debug!("body drag released");
            released = true;
        }
        for view in self.views.values_mut() {
            released |= view.pointer_release(button);
        }
        released
    }

    /// Cancels any drag in progress; mutations already applied are kept.
    pub fn focus_lost(&mut self) {
        debug!("canvas lost focus");
        self.body_drag = None;
        for view in self.views.values_mut() {
            view.focus_lost();
        }
    }

    /// Paints every item bottom to top.
    pub fn repaint(&mut self) -> Vec<RenderFrame> {
        let order: Vec<ItemId> = self.model_store.draw_order_iter().collect();
        let mut frames = Vec::with_capacity(order.len());
        for id in order {
            match self.repaint_item(id) {
                Ok(frame) => frames.push(frame),
                Err(e) => warn!(id, error = %e, "repaint failed"),
            }
        }
        frames
    }

    pub fn repaint_item(&mut self, id: ItemId) -> Result<RenderFrame> {
        let model = self
            .model_store
            .get(id)
            .ok_or(GeometryError::UnknownItem { id })?;
        let view = self
            .views
            .get_mut(&id)
            .ok_or(GeometryError::UnknownItem { id })?;
        Ok(view.paint(model, &mut self.scene))
    }

    /// Ids whose views asked for a repaint since the last call, in draw order.
    pub fn take_repaint_requests(&mut self) -> Vec<ItemId> {
        let order: Vec<ItemId> = self.model_store.draw_order_iter().collect();
        order
            .into_iter()
            .filter(|id| {
                self.views
                    .get_mut(id)
                    .is_some_and(ShapeView::take_repaint_request)
            })
            .collect()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(SceneParams::default(), RenderParams::default())
    }
}
