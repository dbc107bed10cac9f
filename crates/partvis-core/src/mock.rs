//! In-memory host scene, the library's test double.
//!
//! [`MockScene`] implements [`HostScene`] with the command semantics of a
//! real host: names get sanitized to the host namespace on creation,
//! transforms are stored decomposed so component reads agree with matrix
//! writes, and queries against removed nodes fail with `NotFound`.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use glam::{Mat4, Vec3};

use crate::error::{PartvisError, Result};
use crate::graph::{Node, SceneGraph};
use crate::host::HostScene;
use crate::kind::ShapeKind;
use crate::transform::Transform;

/// An in-memory [`HostScene`] for tests and development outside a real host.
///
/// The node table is guarded by an `RwLock` so the trait's `&self` methods
/// can mutate it; a poisoned lock surfaces as a `HostCommand` error rather
/// than a panic.
#[derive(Debug, Default)]
pub struct MockScene {
    graph: RwLock<SceneGraph>,
}

impl MockScene {
    /// Creates a new empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes a node, simulating host-side deletion.
    ///
    /// Returns whether a node with that name existed. Deletion is a
    /// host-side concern; proxies never issue it, which is why this is not
    /// part of [`HostScene`].
    pub fn remove(&self, name: &str) -> bool {
        let Ok(mut graph) = self.graph.write() else {
            return false;
        };
        let removed = graph.remove(name).is_some();
        if removed {
            log::debug!("removed node '{name}'");
        }
        removed
    }

    /// Removes every node from the scene.
    pub fn clear(&self) {
        if let Ok(mut graph) = self.graph.write() {
            graph.clear();
            log::debug!("cleared scene");
        }
    }

    /// Returns the number of nodes in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graph.read().map_or(0, |g| g.len())
    }

    /// Returns true if the scene contains no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the names of all nodes in the scene.
    #[must_use]
    pub fn node_names(&self) -> Vec<String> {
        self.graph
            .read()
            .map_or_else(|_| Vec::new(), |g| g.names().map(str::to_owned).collect())
    }

    /// Serializes the node table to pretty-printed JSON, for debugging.
    pub fn to_json(&self) -> Result<String> {
        let graph = self.read_graph("dump")?;
        Ok(serde_json::to_string_pretty(&*graph)?)
    }

    fn read_graph(&self, command: &str) -> Result<RwLockReadGuard<'_, SceneGraph>> {
        self.graph
            .read()
            .map_err(|_| PartvisError::host_command(command, "scene state poisoned"))
    }

    fn write_graph(&self, command: &str) -> Result<RwLockWriteGuard<'_, SceneGraph>> {
        self.graph
            .write()
            .map_err(|_| PartvisError::host_command(command, "scene state poisoned"))
    }

    /// Maps a requested name into the host namespace.
    ///
    /// Characters outside `[A-Za-z0-9_]` become `_`; a leading digit gets a
    /// `_` prefix. An empty name is rejected.
    fn sanitize(name: &str) -> Option<String> {
        if name.is_empty() {
            return None;
        }
        let mut out = String::with_capacity(name.len() + 1);
        for (i, c) in name.chars().enumerate() {
            if i == 0 && c.is_ascii_digit() {
                out.push('_');
            }
            if c.is_ascii_alphanumeric() || c == '_' {
                out.push(c);
            } else {
                out.push('_');
            }
        }
        Some(out)
    }

    /// Picks a free name, appending a numeric suffix on collision.
    fn unique_name(graph: &SceneGraph, base: &str) -> String {
        if !graph.contains(base) {
            return base.to_owned();
        }
        let mut n = 1;
        loop {
            let candidate = format!("{base}{n}");
            if !graph.contains(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

impl HostScene for MockScene {
    fn exists(&self, name: &str) -> bool {
        self.graph.read().is_ok_and(|g| g.contains(name))
    }

    fn create_primitive(&self, kind: ShapeKind, name: &str) -> Result<String> {
        let command = format!("create {}", kind.type_name());
        let Some(base) = Self::sanitize(name) else {
            return Err(PartvisError::host_command(command, "empty node name"));
        };
        let mut graph = self.write_graph(&command)?;
        let actual = Self::unique_name(&graph, &base);
        graph.insert(actual.clone(), Node::new(kind));
        log::info!(
            "created {} '{actual}' (requested '{name}')",
            kind.type_name()
        );
        Ok(actual)
    }

    fn translation(&self, name: &str) -> Result<Vec3> {
        let graph = self.read_graph("query translation")?;
        let node = graph
            .get(name)
            .ok_or_else(|| PartvisError::NotFound(name.to_owned()))?;
        Ok(node.transform.translation)
    }

    fn set_translation(&self, name: &str, translation: Vec3) -> Result<()> {
        let mut graph = self.write_graph("set translation")?;
        let node = graph
            .get_mut(name)
            .ok_or_else(|| PartvisError::NotFound(name.to_owned()))?;
        node.transform.translation = translation;
        Ok(())
    }

    fn rotation(&self, name: &str) -> Result<Vec3> {
        let graph = self.read_graph("query rotation")?;
        let node = graph
            .get(name)
            .ok_or_else(|| PartvisError::NotFound(name.to_owned()))?;
        Ok(node.transform.euler_angles_degrees())
    }

    fn set_rotation(&self, name: &str, rotation: Vec3) -> Result<()> {
        let mut graph = self.write_graph("set rotation")?;
        let node = graph
            .get_mut(name)
            .ok_or_else(|| PartvisError::NotFound(name.to_owned()))?;
        node.transform.set_euler_angles_degrees(rotation);
        Ok(())
    }

    fn matrix(&self, name: &str) -> Result<Mat4> {
        let graph = self.read_graph("query matrix")?;
        let node = graph
            .get(name)
            .ok_or_else(|| PartvisError::NotFound(name.to_owned()))?;
        Ok(node.transform.to_matrix())
    }

    fn set_matrix(&self, name: &str, matrix: Mat4) -> Result<()> {
        let mut graph = self.write_graph("set matrix")?;
        let node = graph
            .get_mut(name)
            .ok_or_else(|| PartvisError::NotFound(name.to_owned()))?;
        node.transform = Transform::from_matrix(matrix);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_returns_requested_name_when_valid() {
        let scene = MockScene::new();
        let name = scene
            .create_primitive(ShapeKind::sphere(), "ball1")
            .unwrap();
        assert_eq!(name, "ball1");
        assert!(scene.exists("ball1"));
    }

    #[test]
    fn test_create_sanitizes_invalid_names() {
        let scene = MockScene::new();
        let name = scene
            .create_primitive(ShapeKind::sphere(), "my ball")
            .unwrap();
        assert_eq!(name, "my_ball");

        let name = scene.create_primitive(ShapeKind::cube(), "1cube").unwrap();
        assert_eq!(name, "_1cube");
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let scene = MockScene::new();
        let err = scene.create_primitive(ShapeKind::sphere(), "").unwrap_err();
        assert!(matches!(err, PartvisError::HostCommand { .. }));
    }

    #[test]
    fn test_create_renames_on_collision() {
        let scene = MockScene::new();
        scene
            .create_primitive(ShapeKind::sphere(), "ball")
            .unwrap();
        let second = scene
            .create_primitive(ShapeKind::sphere(), "ball")
            .unwrap();
        assert_eq!(second, "ball1");
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn test_queries_against_missing_node_fail() {
        let scene = MockScene::new();
        assert!(matches!(
            scene.translation("ghost"),
            Err(PartvisError::NotFound(_))
        ));
        assert!(matches!(
            scene.set_matrix("ghost", Mat4::IDENTITY),
            Err(PartvisError::NotFound(_))
        ));
    }

    #[test]
    fn test_matrix_write_drives_component_reads() {
        let scene = MockScene::new();
        scene
            .create_primitive(ShapeKind::cube(), "cube1")
            .unwrap();

        let matrix = Mat4::from_translation(Vec3::new(4.0, 0.0, -2.0));
        scene.set_matrix("cube1", matrix).unwrap();

        let t = scene.translation("cube1").unwrap();
        assert!((t - Vec3::new(4.0, 0.0, -2.0)).length() < 1e-5);
        let r = scene.rotation("cube1").unwrap();
        assert!(r.length() < 1e-4);
    }

    #[test]
    fn test_rotation_roundtrips_through_quaternion() {
        let scene = MockScene::new();
        scene
            .create_primitive(ShapeKind::sphere(), "s")
            .unwrap();

        let angles = Vec3::new(10.0, 20.0, 30.0);
        scene.set_rotation("s", angles).unwrap();
        let back = scene.rotation("s").unwrap();
        assert!((back - angles).length() < 0.01);
    }

    #[test]
    fn test_node_names_and_clear() {
        let scene = MockScene::new();
        scene
            .create_primitive(ShapeKind::sphere(), "a")
            .unwrap();
        scene.create_primitive(ShapeKind::cube(), "b").unwrap();

        let mut names = scene.node_names();
        names.sort();
        assert_eq!(names, vec!["a".to_owned(), "b".to_owned()]);

        scene.clear();
        assert!(scene.is_empty());
    }

    #[test]
    fn test_to_json_lists_nodes() {
        let scene = MockScene::new();
        scene
            .create_primitive(ShapeKind::sphere(), "ball1")
            .unwrap();
        let json = scene.to_json().unwrap();
        assert!(json.contains("ball1"));
        assert!(json.contains("Sphere"));
    }
}
