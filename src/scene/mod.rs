//! The entity tree and transform composer.
//!
//! A [`SceneGraph`] owns every entity in a flat arena keyed by
//! [`EntityId`], with parent/child links forming a single-rooted acyclic
//! tree. Each entity carries a local [`Transform`]; the global transform of
//! an entity is the product of its ancestors' locals (root first) followed
//! by its own.
//!
//! Registration is always explicit: entities enter the tree through
//! [`SceneGraph::spawn`] or move through [`SceneGraph::add_child`] — there
//! is no implicit "assign it somewhere and it shows up" path.

mod entity;
mod transform;

pub use entity::{EntityId, EntityNode};
use glam::Mat4;
use rustc_hash::FxHashMap;
pub use transform::Transform;

use crate::error::VantageError;

/// The authoritative entity tree.
///
/// Storage is a flat arena (`Vec` of nodes plus an id→slot map) so lookups
/// stay cheap while the tree shape lives purely in the parent/child links.
/// A generation counter is bumped on every structural or transform mutation
/// so the host can decide whether a redraw is needed.
pub struct SceneGraph {
    /// Arena slots; order is unrelated to tree structure.
    nodes: Vec<EntityNode>,
    /// Entity id → arena slot.
    index: FxHashMap<u32, usize>,
    root: EntityId,
    next_entity_id: u32,
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
    /// Generation that was last consumed by the renderer.
    rendered_generation: u64,
}

impl SceneGraph {
    /// Create a graph containing only the root entity (identity transform).
    #[must_use]
    pub fn new() -> Self {
        let root = EntityId(0);
        let node = EntityNode {
            id: root,
            name: "root".to_owned(),
            visible: true,
            local: Transform::IDENTITY,
            parent: None,
            children: Vec::new(),
        };
        let mut index = FxHashMap::default();
        let _prev = index.insert(0, 0);
        Self {
            nodes: vec![node],
            index,
            root,
            next_entity_id: 1,
            generation: 0,
            rendered_generation: 0,
        }
    }

    /// The root entity.
    #[must_use]
    pub fn root(&self) -> EntityId {
        self.root
    }

    // -- Dirty tracking --

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Whether graph data changed since the last [`Self::mark_rendered`].
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Force the graph dirty (e.g. when display options change but tree data
    /// hasn't).
    pub fn force_dirty(&mut self) {
        self.invalidate();
    }

    /// Mark the current generation as rendered.
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }

    // -- Lookup --

    fn slot(&self, id: EntityId) -> Result<usize, VantageError> {
        self.index
            .get(&id.0)
            .copied()
            .ok_or(VantageError::UnknownEntity(id))
    }

    /// Read access to a node, `None` if the id is stale.
    #[must_use]
    pub fn node(&self, id: EntityId) -> Option<&EntityNode> {
        self.index.get(&id.0).map(|&slot| &self.nodes[slot])
    }

    /// Whether an entity exists in the graph.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.index.contains_key(&id.0)
    }

    /// Number of entities, root included.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.nodes.len()
    }

    /// Children of an entity, in insertion order.
    pub fn children(&self, id: EntityId) -> Result<&[EntityId], VantageError> {
        Ok(self.nodes[self.slot(id)?].children.as_slice())
    }

    /// Parent of an entity (`None` for the root).
    pub fn parent(
        &self,
        id: EntityId,
    ) -> Result<Option<EntityId>, VantageError> {
        Ok(self.nodes[self.slot(id)?].parent)
    }

    // -- Entity management --

    /// Register a new entity under `parent`. Returns its id.
    pub fn spawn(
        &mut self,
        parent: EntityId,
        local: Transform,
    ) -> Result<EntityId, VantageError> {
        let id = EntityId(self.next_entity_id);
        self.spawn_named(parent, local, format!("entity-{}", id.0))
    }

    /// Register a new named entity under `parent`.
    pub fn spawn_named(
        &mut self,
        parent: EntityId,
        local: Transform,
        name: String,
    ) -> Result<EntityId, VantageError> {
        let parent_slot = self.slot(parent)?;
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;

        let slot = self.nodes.len();
        self.nodes.push(EntityNode {
            id,
            name,
            visible: true,
            local,
            parent: Some(parent),
            children: Vec::new(),
        });
        let _prev = self.index.insert(id.0, slot);
        self.nodes[parent_slot].children.push(id);
        self.invalidate();
        Ok(id)
    }

    /// Whether `ancestor` appears on `entity`'s parent chain (inclusive of
    /// `entity` itself).
    fn is_ancestor_or_self(&self, ancestor: EntityId, entity: EntityId) -> bool {
        let mut cursor = Some(entity);
        while let Some(id) = cursor {
            if id == ancestor {
                return true;
            }
            cursor = self
                .index
                .get(&id.0)
                .and_then(|&slot| self.nodes[slot].parent);
        }
        false
    }

    /// Re-parent `child` under `parent`, appending it to the child sequence.
    ///
    /// Fails with [`VantageError::Cycle`] if `child` is `parent` itself or
    /// one of its ancestors (the move would make an entity its own
    /// descendant).
    pub fn add_child(
        &mut self,
        parent: EntityId,
        child: EntityId,
    ) -> Result<(), VantageError> {
        let parent_slot = self.slot(parent)?;
        let child_slot = self.slot(child)?;

        if self.is_ancestor_or_self(child, parent) {
            return Err(VantageError::Cycle { entity: child });
        }

        // Detach from the old parent. The cycle check above already rules
        // out the root (it is an ancestor of every parent).
        if let Some(old_parent) = self.nodes[child_slot].parent {
            let old_slot = self.slot(old_parent)?;
            self.nodes[old_slot].children.retain(|&c| c != child);
        }

        self.nodes[child_slot].parent = Some(parent);
        self.nodes[parent_slot].children.push(child);
        self.invalidate();
        Ok(())
    }

    /// Detach `child` from `parent` and drop its entire subtree.
    ///
    /// Fails with [`VantageError::NotAChild`] if `child` is not currently a
    /// child of `parent`.
    pub fn remove_child(
        &mut self,
        parent: EntityId,
        child: EntityId,
    ) -> Result<(), VantageError> {
        let parent_slot = self.slot(parent)?;
        if !self.nodes[parent_slot].children.contains(&child) {
            return Err(VantageError::NotAChild { parent, child });
        }
        self.nodes[parent_slot].children.retain(|&c| c != child);

        // Collect the subtree before releasing any slots.
        let mut doomed = vec![child];
        let mut i = 0;
        while i < doomed.len() {
            if let Some(&slot) = self.index.get(&doomed[i].0) {
                doomed.extend_from_slice(&self.nodes[slot].children);
            }
            i += 1;
        }
        for id in doomed {
            self.release_slot(id);
        }
        self.invalidate();
        Ok(())
    }

    /// Remove a node from the arena, fixing up the slot of the element that
    /// `swap_remove` moved into its place.
    fn release_slot(&mut self, id: EntityId) {
        let Some(slot) = self.index.remove(&id.0) else {
            return;
        };
        let _removed = self.nodes.swap_remove(slot);
        if slot < self.nodes.len() {
            let moved_id = self.nodes[slot].id;
            let _prev = self.index.insert(moved_id.0, slot);
        }
    }

    // -- Transforms --

    /// The entity's local transform.
    pub fn local_transform(
        &self,
        id: EntityId,
    ) -> Result<Transform, VantageError> {
        Ok(self.nodes[self.slot(id)?].local)
    }

    /// Replace the entity's local transform.
    pub fn set_local_transform(
        &mut self,
        id: EntityId,
        local: Transform,
    ) -> Result<(), VantageError> {
        let slot = self.slot(id)?;
        self.nodes[slot].local = local;
        self.invalidate();
        Ok(())
    }

    /// Global transform of an entity: the matrix product of every ancestor's
    /// local transform (root first) followed by the entity's own local.
    ///
    /// Cost is proportional to tree depth. Taking `&self` means the borrow
    /// checker enforces the "no tree mutation during composition" rule.
    pub fn global_transform(
        &self,
        id: EntityId,
    ) -> Result<Mat4, VantageError> {
        let mut chain = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let slot = self.slot(current)?;
            chain.push(slot);
            cursor = self.nodes[slot].parent;
        }

        let mut global = Mat4::IDENTITY;
        for &slot in chain.iter().rev() {
            global *= self.nodes[slot].local.matrix();
        }
        Ok(global)
    }

    // -- Visibility --

    /// Toggle an entity's visibility flag.
    pub fn set_visible(
        &mut self,
        id: EntityId,
        visible: bool,
    ) -> Result<(), VantageError> {
        let slot = self.slot(id)?;
        if self.nodes[slot].visible != visible {
            self.nodes[slot].visible = visible;
            self.invalidate();
        }
        Ok(())
    }

    /// Rename an entity.
    pub fn set_name(
        &mut self,
        id: EntityId,
        name: String,
    ) -> Result<(), VantageError> {
        let slot = self.slot(id)?;
        self.nodes[slot].name = name;
        Ok(())
    }

    /// All entity ids in arena order (not tree order).
    #[must_use]
    pub fn entity_ids(&self) -> Vec<EntityId> {
        self.nodes.iter().map(EntityNode::id).collect()
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn spawn_builds_tree_links() {
        let mut graph = SceneGraph::new();
        let a = graph.spawn(graph.root(), Transform::IDENTITY).unwrap();
        let b = graph.spawn(a, Transform::IDENTITY).unwrap();

        assert_eq!(graph.parent(b).unwrap(), Some(a));
        assert_eq!(graph.children(a).unwrap(), &[b]);
        assert_eq!(graph.entity_count(), 3);
    }

    #[test]
    fn spawn_under_unknown_parent_fails() {
        let mut graph = SceneGraph::new();
        let a = graph.spawn(graph.root(), Transform::IDENTITY).unwrap();
        graph.remove_child(graph.root(), a).unwrap();

        let err = graph.spawn(a, Transform::IDENTITY).unwrap_err();
        assert!(matches!(err, VantageError::UnknownEntity(id) if id == a));
    }

    #[test]
    fn add_child_rejects_cycles() {
        let mut graph = SceneGraph::new();
        let a = graph.spawn(graph.root(), Transform::IDENTITY).unwrap();
        let b = graph.spawn(a, Transform::IDENTITY).unwrap();
        let c = graph.spawn(b, Transform::IDENTITY).unwrap();

        // Moving an ancestor under its own descendant must fail.
        let err = graph.add_child(c, a).unwrap_err();
        assert!(matches!(err, VantageError::Cycle { entity } if entity == a));
        // Self-parenting is the degenerate cycle.
        let err = graph.add_child(b, b).unwrap_err();
        assert!(matches!(err, VantageError::Cycle { .. }));
        // The root can never become a child.
        let err = graph.add_child(c, graph.root()).unwrap_err();
        assert!(matches!(err, VantageError::Cycle { .. }));
    }

    #[test]
    fn add_child_reparents() {
        let mut graph = SceneGraph::new();
        let a = graph.spawn(graph.root(), Transform::IDENTITY).unwrap();
        let b = graph.spawn(graph.root(), Transform::IDENTITY).unwrap();
        let c = graph.spawn(a, Transform::IDENTITY).unwrap();

        graph.add_child(b, c).unwrap();
        assert_eq!(graph.parent(c).unwrap(), Some(b));
        assert!(graph.children(a).unwrap().is_empty());
        assert_eq!(graph.children(b).unwrap(), &[c]);
    }

    #[test]
    fn remove_child_drops_subtree() {
        let mut graph = SceneGraph::new();
        let a = graph.spawn(graph.root(), Transform::IDENTITY).unwrap();
        let b = graph.spawn(a, Transform::IDENTITY).unwrap();
        let c = graph.spawn(b, Transform::IDENTITY).unwrap();

        graph.remove_child(graph.root(), a).unwrap();
        assert!(!graph.contains(a));
        assert!(!graph.contains(b));
        assert!(!graph.contains(c));
        assert_eq!(graph.entity_count(), 1);
    }

    #[test]
    fn remove_child_of_wrong_parent_errors() {
        let mut graph = SceneGraph::new();
        let a = graph.spawn(graph.root(), Transform::IDENTITY).unwrap();
        let b = graph.spawn(a, Transform::IDENTITY).unwrap();

        let err = graph.remove_child(graph.root(), b).unwrap_err();
        assert!(matches!(
            err,
            VantageError::NotAChild { parent, child }
                if parent == graph.root() && child == b
        ));
        // b is untouched by the failed call
        assert!(graph.contains(b));
    }

    #[test]
    fn global_transform_is_root_first_product() {
        let mut graph = SceneGraph::new();
        let ta = Transform::from_translation(Vec3::new(1.0, 0.0, 0.0));
        let tb = Transform::from_scale(Vec3::splat(2.0));
        let tc = Transform::from_translation(Vec3::new(0.0, 3.0, 0.0));

        let a = graph.spawn(graph.root(), ta).unwrap();
        let b = graph.spawn(a, tb).unwrap();
        let c = graph.spawn(b, tc).unwrap();

        let expected = ta.matrix() * tb.matrix() * tc.matrix();
        let global = graph.global_transform(c).unwrap();
        assert!(global.abs_diff_eq(expected, 1e-6));

        // A point at the origin of c: scaled translate (0,3,0) -> (0,6,0),
        // then offset by (1,0,0).
        let p = global.transform_point3(Vec3::ZERO);
        assert!((p - Vec3::new(1.0, 6.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn global_transform_survives_unrelated_removal() {
        // swap_remove slot reuse must not corrupt the id index.
        let mut graph = SceneGraph::new();
        let a = graph.spawn(graph.root(), Transform::IDENTITY).unwrap();
        let b = graph
            .spawn(
                graph.root(),
                Transform::from_translation(Vec3::new(5.0, 0.0, 0.0)),
            )
            .unwrap();
        graph.remove_child(graph.root(), a).unwrap();

        let p = graph
            .global_transform(b)
            .unwrap()
            .transform_point3(Vec3::ZERO);
        assert!((p - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn dirty_tracking() {
        let mut graph = SceneGraph::new();
        assert!(!graph.is_dirty());

        let a = graph.spawn(graph.root(), Transform::IDENTITY).unwrap();
        assert!(graph.is_dirty());
        graph.mark_rendered();
        assert!(!graph.is_dirty());

        graph
            .set_local_transform(a, Transform::from_scale(Vec3::splat(2.0)))
            .unwrap();
        assert!(graph.is_dirty());
    }

    #[test]
    fn set_visible_only_dirties_on_change() {
        let mut graph = SceneGraph::new();
        let a = graph.spawn(graph.root(), Transform::IDENTITY).unwrap();
        graph.mark_rendered();

        graph.set_visible(a, true).unwrap();
        assert!(!graph.is_dirty());
        graph.set_visible(a, false).unwrap();
        assert!(graph.is_dirty());
    }
}
