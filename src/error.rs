//! Crate-level error types.

use std::fmt;

use crate::scene::EntityId;

/// Errors produced by the vantage crate.
///
/// These are the *fatal* errors of the core: the offending operation is
/// aborted and nothing is silently defaulted. The recoverable
/// "capability not implemented by this camera variant" case is a separate
/// type, [`Unsupported`](crate::camera::Unsupported), because callers are
/// expected to continue after it.
#[derive(Debug)]
pub enum VantageError {
    /// Re-parenting would create a parent/child cycle in the entity tree.
    Cycle {
        /// The entity that would have become a descendant of itself.
        entity: EntityId,
    },
    /// An entity id that is not (or no longer) present in the graph.
    UnknownEntity(EntityId),
    /// `remove_child` was asked to detach an entity that is not a child of
    /// the given parent.
    NotAChild {
        /// The parent passed to the call.
        parent: EntityId,
        /// The entity that was not among its children.
        child: EntityId,
    },
    /// A viewbox was asked to project or draw without an assigned camera.
    NoActiveCamera,
    /// A camera parameter outside its valid range (e.g. field of view).
    InvalidParameter(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for VantageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cycle { entity } => {
                write!(f, "re-parenting entity {entity} would create a cycle")
            }
            Self::UnknownEntity(id) => {
                write!(f, "entity {id} is not in the graph")
            }
            Self::NotAChild { parent, child } => {
                write!(f, "entity {child} is not a child of {parent}")
            }
            Self::NoActiveCamera => {
                write!(f, "viewbox has no active camera")
            }
            Self::InvalidParameter(msg) => {
                write!(f, "invalid camera parameter: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for VantageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VantageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
