// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Hierarchical scene-graph transforms and interactive camera navigation.
//!
//! Vantage is the coordinate core of a visualization host: a tree of
//! positioned entities, rectangular view regions ([`viewbox::ViewBox`]) each
//! owning exactly one active camera, and a family of camera models
//! ([`camera::Camera`]) that project entity-local coordinates into
//! normalized device coordinates while supporting interactive pan, zoom,
//! orbit, and first-person navigation.
//!
//! # Key entry points
//!
//! - [`scene::SceneGraph`] - the entity tree and transform composer
//! - [`viewbox::ViewBox`] - a pixel region owning the active camera
//! - [`camera::Camera`] - the polymorphic camera family
//! - [`input::Dispatcher`] - converts pointer/wheel events into camera calls
//! - [`options::Options`] - runtime tuning (sensitivities, clip planes)
//!
//! # Architecture
//!
//! Everything runs synchronously on the thread driving the host's
//! render/event loop. Input events are routed through a [`input::Dispatcher`]
//! into the active camera of the [`viewbox::ViewBox`] under the cursor; each
//! frame the host queries [`viewbox::ViewBox::entity_transform`] per entity,
//! which composes ancestor local transforms with the camera projection.
//! Dirty flags on the graph and the viewbox tell the host whether a redraw
//! is needed. Window creation, GPU resources, and draw calls are the host's
//! concern; the only GPU-facing type here is the plain-old-data
//! [`camera::CameraUniform`].

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod viewbox;

pub use camera::{Camera, CameraUniform, Unsupported, Viewport};
pub use error::VantageError;
pub use input::Dispatcher;
pub use scene::{EntityId, SceneGraph, Transform};
pub use viewbox::ViewBox;
