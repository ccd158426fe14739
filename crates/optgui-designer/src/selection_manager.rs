use std::collections::HashMap;

use crate::model::{ConstraintModel, Point};
use crate::store::{ItemId, ModelStore};
use crate::view::ShapeView;

/// Manages selection state across the canvas views.
///
/// `SelectionManager` is responsible for:
/// - Tracking which item is the "primary" selection
/// - Point-based selection (clicking on items, topmost first)
/// - Multi-select toggling (Shift+click)
///
/// The `selected` flag itself lives on each [`ShapeView`], which shows or
/// hides its handles accordingly.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected_id: Option<ItemId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use optgui_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    /// Returns the ID of the primary selected item.
    pub fn selected_id(&self) -> Option<ItemId> {
        self.selected_id
    }

    /// Clears the primary selection if it points at `id`.
    pub fn forget(&mut self, id: ItemId) {
        if self.selected_id == Some(id) {
            self.selected_id = None;
        }
    }

    /// Deselects every view and clears the primary selection.
    pub fn deselect_all(&mut self, views: &mut HashMap<ItemId, ShapeView>) {
        for view in views.values_mut() {
            view.set_selected(false);
        }
        self.selected_id = None;
    }

    /// Selects an item by ID.
    ///
    /// If `multi` is `false` the previous selection is replaced.
    pub fn select_id(&mut self, views: &mut HashMap<ItemId, ShapeView>, id: ItemId, multi: bool) {
        if !multi {
            self.deselect_all(views);
        }
        if let Some(view) = views.get_mut(&id) {
            view.set_selected(true);
            self.selected_id = Some(id);
        }
    }

    /// Selects the topmost item at `point`.
    ///
    /// # Multi-select Behavior
    ///
    /// - If `multi` is `false`: deselects everything else first; a click on
    ///   empty space clears the selection
    /// - If `multi` is `true`: toggles the hit item, leaving the rest alone
    pub fn select_at(
        &mut self,
        store: &ModelStore,
        views: &mut HashMap<ItemId, ShapeView>,
        point: &Point,
        tolerance: f64,
        multi: bool,
    ) -> Option<ItemId> {
        let found = store
            .draw_order_iter()
            .rev()
            .find(|id| {
                store
                    .get(*id)
                    .is_some_and(|m| m.contains_point(*point, tolerance))
            });

        if !multi {
            self.deselect_all(views);
        }

        match found {
            Some(id) => {
                let was_selected = views.get(&id).is_some_and(ShapeView::is_selected);
                let should_select = !(multi && was_selected);
                if let Some(view) = views.get_mut(&id) {
                    view.set_selected(should_select);
                }
                if should_select {
                    self.selected_id = Some(id);
                } else if self.selected_id == Some(id) {
                    // fall back to any other selected item
                    self.selected_id = store
                        .draw_order_iter()
                        .find(|other| views.get(other).is_some_and(ShapeView::is_selected));
                }
            }
            None if !multi => self.selected_id = None,
            None => {}
        }

        self.selected_id
    }

    /// Selected ids in draw order.
    pub fn selected_ids(&self, store: &ModelStore, views: &HashMap<ItemId, ShapeView>) -> Vec<ItemId> {
        store
            .draw_order_iter()
            .filter(|id| views.get(id).is_some_and(ShapeView::is_selected))
            .collect()
    }

    /// Returns the number of currently selected items.
    pub fn selected_count(&self, views: &HashMap<ItemId, ShapeView>) -> usize {
        views.values().filter(|v| v.is_selected()).count()
    }
}
