//! partvis: thin shape proxies for particle visualization in a host 3D scene.
//!
//! partvis lets code running against an external 3D host application spawn
//! simple primitive shapes (spheres, cubes) as stand-ins for particles and
//! read or write their world-space transforms. The host scene is the single
//! source of truth; every accessor is a synchronous round-trip into the
//! host's command layer.
//!
//! # Quick Start
//!
//! ```
//! use partvis::*;
//!
//! fn main() -> Result<()> {
//!     // An in-memory host scene; a real deployment injects a binding to
//!     // the actual host application here instead.
//!     let scene = MockScene::new();
//!
//!     let mut ball = ShapeBuilder::sphere("ball1")
//!         .with_size(0.5)
//!         .with_position(Vec3::new(0.0, 5.0, 0.0))
//!         .spawn(&scene)?;
//!
//!     assert_eq!(ball.position()?, Vec3::new(0.0, 5.0, 0.0));
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! partvis uses a paradigm of **capabilities** and **proxies**:
//!
//! - A [`HostScene`] is the injected command interface of the external host
//!   application. [`MockScene`] is the in-memory implementation used for
//!   tests and development.
//! - A [`Shape`] is a proxy for one named node in the host scene. It caches
//!   the transform it last saw, and refreshes that cache on every accessor
//!   call.
//! - A [`ShapeKind`] selects the creation command a host binding issues:
//!   a polygonal sphere parameterized by radius, or a polygonal cube with
//!   uniform edge length.

mod shape;

// Re-export core types
pub use partvis_core::{
    error::{PartvisError, Result},
    graph::{Node, SceneGraph},
    host::HostScene,
    kind::{ShapeKind, DEFAULT_CUBE_SIZE, DEFAULT_SPHERE_RADIUS},
    mock::MockScene,
    transform::Transform,
    Mat4, Quat, Vec3,
};

pub use shape::{Shape, ShapeBuilder};
