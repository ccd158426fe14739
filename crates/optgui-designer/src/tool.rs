//! Placement tool: turns presses on empty canvas into controller commands
//! according to the active mode.

use optgui_core::SceneParams;
use tracing::debug;

use crate::model::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    #[default]
    Idle,
    Eraser,
    Flip,
    Ellipse,
    Polygon,
    Plane,
    Waypoint,
}

/// Action the canvas should carry out for a press.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasCommand {
    AddEllipse { center: Point, radius: f64 },
    AddPolygon { points: Vec<Point> },
    AddPlane { p1: Point, p2: Point },
    AddWaypoint { at: Point },
    Erase { at: Point },
    Flip { at: Point },
    /// Idle mode: selection or handle interaction.
    Interact { at: Point },
}

#[derive(Debug, Clone)]
pub struct PlacementTool {
    mode: ToolMode,
    markers: Vec<Point>,
    params: SceneParams,
}

impl PlacementTool {
    pub fn new(params: SceneParams) -> Self {
        Self {
            mode: ToolMode::Idle,
            markers: Vec::new(),
            params,
        }
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    /// Temporary markers of an unfinished polygon or plane.
    pub fn markers(&self) -> &[Point] {
        &self.markers
    }

    /// Switches mode. Choosing the active mode again returns to idle.
    /// Pending markers are dropped either way.
    pub fn select_mode(&mut self, mode: ToolMode) -> ToolMode {
        self.markers.clear();
        self.mode = if self.mode == mode {
            ToolMode::Idle
        } else {
            mode
        };
        debug!(mode = ?self.mode, "tool mode changed");
        self.mode
    }

    pub fn clear_markers(&mut self) {
        self.markers.clear();
    }

    /// Handles a primary press at scene point `at`. `zoom` converts the
    /// screen-space sizes into scene units.
    ///
    /// Returns `None` when the press only updated the markers.
    pub fn press(&mut self, at: Point, zoom: f64) -> Option<CanvasCommand> {
        match self.mode {
            ToolMode::Idle => Some(CanvasCommand::Interact { at }),
            ToolMode::Eraser => Some(CanvasCommand::Erase { at }),
            ToolMode::Flip => Some(CanvasCommand::Flip { at }),
            ToolMode::Waypoint => Some(CanvasCommand::AddWaypoint { at }),
            ToolMode::Ellipse => Some(CanvasCommand::AddEllipse {
                center: at,
                radius: self.params.default_radius / zoom,
            }),
            ToolMode::Polygon => self.press_polygon(at, zoom),
            ToolMode::Plane => match self.markers.pop() {
                Some(p1) => Some(CanvasCommand::AddPlane { p1, p2: at }),
                None => {
                    self.markers.push(at);
                    None
                }
            },
        }
    }

    fn press_polygon(&mut self, at: Point, zoom: f64) -> Option<CanvasCommand> {
        let closes = self
            .markers
            .first()
            .is_some_and(|first| first.distance_to(&at) <= self.params.marker_size / zoom);
        if !closes {
            self.markers.push(at);
            return None;
        }
        let points = std::mem::take(&mut self.markers);
        if points.len() >= 3 {
            Some(CanvasCommand::AddPolygon { points })
        } else {
            debug!(count = points.len(), "polygon closed with too few markers, discarded");
            None
        }
    }
}
