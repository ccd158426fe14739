//! Id arena owning every geometry model on the canvas.

use std::collections::HashMap;

use crate::model::GeometryModel;

/// Identifier of a model in the [`ModelStore`].
pub type ItemId = u64;

/// Owns the models and remembers the order they were added in, which is
/// also the paint order (last on top).
#[derive(Debug, Clone, Default)]
pub struct ModelStore {
    models: HashMap<ItemId, GeometryModel>,
    draw_order: Vec<ItemId>,
    next_id: ItemId,
}

impl ModelStore {
    pub fn new() -> Self {
        Self {
            models: HashMap::new(),
            draw_order: Vec::new(),
            next_id: 1,
        }
    }

    pub fn generate_id(&mut self) -> ItemId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Stores `model` under a fresh id.
    pub fn insert(&mut self, model: GeometryModel) -> ItemId {
        let id = self.generate_id();
        self.models.insert(id, model);
        self.draw_order.push(id);
        id
    }

    pub fn get(&self, id: ItemId) -> Option<&GeometryModel> {
        self.models.get(&id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut GeometryModel> {
        self.models.get_mut(&id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.models.contains_key(&id)
    }

    pub fn remove(&mut self, id: ItemId) -> Option<GeometryModel> {
        let removed = self.models.remove(&id)?;
        self.draw_order.retain(|&other| other != id);
        Some(removed)
    }

    /// Ids bottom to top.
    pub fn draw_order_iter(&self) -> impl DoubleEndedIterator<Item = ItemId> + '_ {
        self.draw_order.iter().copied()
    }

    /// Models bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &GeometryModel)> + '_ {
        self.draw_order
            .iter()
            .filter_map(move |id| self.models.get(id).map(|m| (*id, m)))
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Drops every model. Ids keep increasing afterwards.
    pub fn clear(&mut self) {
        self.models.clear();
        self.draw_order.clear();
    }
}
