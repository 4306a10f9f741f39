use std::fmt;

use super::Transform;

// ---------------------------------------------------------------------------
// EntityId
// ---------------------------------------------------------------------------

/// Opaque identifier of an entity within a [`SceneGraph`](super::SceneGraph).
///
/// Ids are assigned by the graph at spawn time and never reused; an id whose
/// entity has been removed stays invalid forever and surfaces as
/// [`VantageError::UnknownEntity`](crate::error::VantageError::UnknownEntity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub(crate) u32);

impl EntityId {
    /// Raw numeric value (stable per graph, useful as a host-side key).
    #[must_use]
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// EntityNode
// ---------------------------------------------------------------------------

/// A node of the entity tree: local transform plus tree links.
///
/// The parent link is a non-owning back-reference; children are held in
/// insertion order and owned (removing a node drops its whole subtree).
#[derive(Debug, Clone)]
pub struct EntityNode {
    pub(crate) id: EntityId,
    pub(crate) name: String,
    pub(crate) visible: bool,
    pub(crate) local: Transform,
    pub(crate) parent: Option<EntityId>,
    pub(crate) children: Vec<EntityId>,
}

impl EntityNode {
    /// Entity identifier.
    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Human-readable name (defaults to `entity-<id>`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this entity is visible to the renderer.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// The entity's local transform, relative to its parent.
    #[must_use]
    pub fn local_transform(&self) -> &Transform {
        &self.local
    }

    /// Parent entity, `None` only for the root.
    #[must_use]
    pub fn parent(&self) -> Option<EntityId> {
        self.parent
    }

    /// Child entities in insertion order.
    #[must_use]
    pub fn children(&self) -> &[EntityId] {
        &self.children
    }
}
