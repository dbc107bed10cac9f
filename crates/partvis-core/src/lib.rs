//! Core abstractions for partvis.
//!
//! This crate provides the fundamental traits and types used throughout partvis:
//! - [`HostScene`] trait for the external host application's scene commands
//! - [`ShapeKind`] creation-strategy enum for primitive shapes
//! - [`MockScene`], an in-memory host for tests and development
//! - Error taxonomy and decomposed-transform helpers

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;
pub mod host;
pub mod kind;
pub mod mock;
pub mod transform;

pub use error::{PartvisError, Result};
pub use graph::{Node, SceneGraph};
pub use host::HostScene;
pub use kind::{ShapeKind, DEFAULT_CUBE_SIZE, DEFAULT_SPHERE_RADIUS};
pub use mock::MockScene;
pub use transform::Transform;

// Re-export glam types for convenience
pub use glam::{Mat4, Quat, Vec3};
