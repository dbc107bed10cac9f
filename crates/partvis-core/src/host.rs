//! The host-scene command interface.
//!
//! A [`HostScene`] is the capability handle through which everything in
//! partvis touches the external application. Injecting it (rather than
//! calling a process-global command layer) is what makes test doubles like
//! [`crate::mock::MockScene`] possible.

use glam::{Mat4, Vec3};

use crate::error::Result;
use crate::kind::ShapeKind;

/// The scene-command interface of an external 3D host application.
///
/// Every method is a synchronous, blocking round-trip into the host; none
/// are pure. Methods take `&self` so a single host handle can back many
/// proxies at once; implementations guard their shared scene state
/// internally.
///
/// Transform accessors are world-space throughout. Queries against a node
/// that no longer exists fail with [`PartvisError::NotFound`]; rejected
/// commands fail with [`PartvisError::HostCommand`].
///
/// [`PartvisError::NotFound`]: crate::error::PartvisError::NotFound
/// [`PartvisError::HostCommand`]: crate::error::PartvisError::HostCommand
pub trait HostScene {
    /// Returns whether a node with the given name exists in the scene.
    fn exists(&self, name: &str) -> bool;

    /// Creates a primitive node for `kind` and returns the node's actual
    /// name.
    ///
    /// The host may rename on creation, for example to fit its namespace
    /// rules or to avoid a collision; callers must track the returned name,
    /// not the requested one.
    fn create_primitive(&self, kind: ShapeKind, name: &str) -> Result<String>;

    /// Queries the world-space translation of a node.
    fn translation(&self, name: &str) -> Result<Vec3>;

    /// Sets the world-space translation of a node.
    fn set_translation(&self, name: &str, translation: Vec3) -> Result<()>;

    /// Queries the world-space rotation of a node, as Euler XYZ angles in
    /// degrees (the host's angle unit).
    fn rotation(&self, name: &str) -> Result<Vec3>;

    /// Sets the world-space rotation of a node from Euler XYZ degrees.
    fn set_rotation(&self, name: &str, rotation: Vec3) -> Result<()>;

    /// Queries the full world-space transform matrix of a node.
    fn matrix(&self, name: &str) -> Result<Mat4>;

    /// Sets the full world-space transform matrix of a node.
    fn set_matrix(&self, name: &str, matrix: Mat4) -> Result<()>;
}
