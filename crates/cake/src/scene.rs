//! The scene-graph seam between cake assembly and the rendering engine.
//!
//! Builders only create nodes, set local transforms, parent nodes and
//! attach/detach roots. [`SceneBackend`] captures exactly that surface;
//! [`SceneGraph`] is the in-memory implementation backed by a
//! [`cake_ir::Document`], which a renderer can consume directly.

use crate::error::{BuildError, Result};
use cake_ir::{Document, Geometry, MaterialDef, Node, NodeId, NodeKind, Transform, Vec3};
use nalgebra::{Matrix4, Rotation3, Vector3};

/// Operations the cake builders need from a scene graph.
pub trait SceneBackend {
    /// Create a detached, empty group node.
    fn create_group(&mut self, name: &str) -> NodeId;

    /// Create a detached mesh node, validating the primitive parameters.
    fn create_mesh(&mut self, name: &str, geometry: Geometry, material: MaterialDef)
        -> Result<NodeId>;

    /// Append `child` to `parent`'s children, detaching it from any previous parent.
    fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<()>;

    /// Current local transform of `node`.
    fn transform(&self, node: NodeId) -> Result<Transform>;

    /// Replace the local transform of `node`.
    fn set_transform(&mut self, node: NodeId, transform: Transform) -> Result<()>;

    /// Remove `node` and its whole subtree, detaching it from its parent or the roots.
    fn remove_node(&mut self, node: NodeId) -> Result<()>;

    /// Attach `node` as a top-level scene root.
    fn attach_root(&mut self, node: NodeId) -> Result<()>;

    /// Detach `node` from the roots without disposing it.
    fn detach_root(&mut self, node: NodeId) -> Result<()>;

    /// Attached roots, in attach order.
    fn roots(&self) -> Vec<NodeId>;

    /// Name given to `node` at creation, if the node exists.
    fn name(&self, node: NodeId) -> Option<&str>;

    /// Set the local position.
    fn set_position(&mut self, node: NodeId, position: Vec3) -> Result<()> {
        let mut t = self.transform(node)?;
        t.position = position;
        self.set_transform(node, t)
    }

    /// Set the local Euler rotation (radians, XYZ order).
    fn set_rotation(&mut self, node: NodeId, rotation: Vec3) -> Result<()> {
        let mut t = self.transform(node)?;
        t.rotation = rotation;
        self.set_transform(node, t)
    }

    /// Set the local scale.
    fn set_scale(&mut self, node: NodeId, scale: Vec3) -> Result<()> {
        let mut t = self.transform(node)?;
        t.scale = scale;
        self.set_transform(node, t)
    }
}

/// In-memory scene graph.
///
/// Ids are allocated from a per-graph counter and never reused, so a
/// stale id from a disposed cake reports [`BuildError::UnknownNode`].
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    doc: Document,
    next_id: NodeId,
}

impl SceneGraph {
    /// Create an empty scene with default viewport settings.
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc_id(&mut self) -> NodeId {
        self.next_id += 1;
        self.next_id
    }

    fn insert(&mut self, name: &str, kind: NodeKind) -> NodeId {
        let id = self.alloc_id();
        self.doc.nodes.insert(
            id,
            Node {
                id,
                name: Some(name.to_string()),
                parent: None,
                children: Vec::new(),
                transform: Transform::IDENTITY,
                kind,
            },
        );
        id
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.doc.nodes.get_mut(&id).ok_or(BuildError::UnknownNode(id))
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.doc.nodes.get(&id)
    }

    /// Total number of live nodes, attached or not.
    pub fn len(&self) -> usize {
        self.doc.nodes.len()
    }

    /// Whether the scene holds no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.doc.nodes.is_empty()
    }

    /// Borrow the underlying document.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Snapshot of the scene as a standalone document.
    pub fn to_document(&self) -> Document {
        self.doc.clone()
    }

    /// `root` and every node below it, depth-first pre-order.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.doc.nodes.get(&id) else {
                continue;
            };
            out.push(id);
            stack.extend(node.children.iter().rev());
        }
        out
    }

    /// Nodes under `root` (inclusive) whose name equals `name`.
    pub fn find_named(&self, root: NodeId, name: &str) -> Vec<&Node> {
        self.descendants(root)
            .into_iter()
            .filter_map(|id| self.doc.nodes.get(&id))
            .filter(|n| n.name.as_deref() == Some(name))
            .collect()
    }

    /// Nodes under `root` (inclusive) whose name starts with `prefix`.
    pub fn find_prefixed(&self, root: NodeId, prefix: &str) -> Vec<&Node> {
        self.descendants(root)
            .into_iter()
            .filter_map(|id| self.doc.nodes.get(&id))
            .filter(|n| n.name.as_deref().is_some_and(|s| s.starts_with(prefix)))
            .collect()
    }

    /// Transform from `node`'s local space to scene space.
    pub fn world_matrix(&self, node: NodeId) -> Result<Matrix4<f64>> {
        let mut matrix = Matrix4::identity();
        let mut current = Some(node);
        while let Some(id) = current {
            let n = self.doc.nodes.get(&id).ok_or(BuildError::UnknownNode(id))?;
            matrix = local_matrix(&n.transform) * matrix;
            current = n.parent;
        }
        Ok(matrix)
    }

    /// Scene-space position of `node`'s origin.
    pub fn world_position(&self, node: NodeId) -> Result<Vector3<f64>> {
        let m = self.world_matrix(node)?;
        Ok(Vector3::new(m[(0, 3)], m[(1, 3)], m[(2, 3)]))
    }
}

/// Local transform as a 4×4 matrix: `T · Rx · Ry · Rz · S`.
pub fn local_matrix(t: &Transform) -> Matrix4<f64> {
    let rotation = Rotation3::from_axis_angle(&Vector3::x_axis(), t.rotation.x)
        * Rotation3::from_axis_angle(&Vector3::y_axis(), t.rotation.y)
        * Rotation3::from_axis_angle(&Vector3::z_axis(), t.rotation.z);
    Matrix4::new_translation(&Vector3::new(t.position.x, t.position.y, t.position.z))
        * rotation.to_homogeneous()
        * Matrix4::new_nonuniform_scaling(&Vector3::new(t.scale.x, t.scale.y, t.scale.z))
}

impl SceneBackend for SceneGraph {
    fn create_group(&mut self, name: &str) -> NodeId {
        self.insert(name, NodeKind::Group)
    }

    fn create_mesh(
        &mut self,
        name: &str,
        geometry: Geometry,
        material: MaterialDef,
    ) -> Result<NodeId> {
        geometry
            .validate()
            .map_err(|source| BuildError::InvalidGeometry {
                node: name.to_string(),
                kind: geometry.kind(),
                source,
            })?;
        Ok(self.insert(name, NodeKind::Mesh { geometry, material }))
    }

    fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if !self.doc.nodes.contains_key(&parent) {
            return Err(BuildError::UnknownNode(parent));
        }
        let previous = self.node_mut(child)?.parent.replace(parent);
        if let Some(old) = previous {
            if let Some(old_parent) = self.doc.nodes.get_mut(&old) {
                old_parent.children.retain(|&c| c != child);
            }
        }
        self.doc.roots.retain(|&r| r != child);
        self.node_mut(parent)?.children.push(child);
        Ok(())
    }

    fn transform(&self, node: NodeId) -> Result<Transform> {
        self.doc
            .nodes
            .get(&node)
            .map(|n| n.transform)
            .ok_or(BuildError::UnknownNode(node))
    }

    fn set_transform(&mut self, node: NodeId, transform: Transform) -> Result<()> {
        self.node_mut(node)?.transform = transform;
        Ok(())
    }

    fn remove_node(&mut self, node: NodeId) -> Result<()> {
        let parent = self
            .doc
            .nodes
            .get(&node)
            .ok_or(BuildError::UnknownNode(node))?
            .parent;
        if let Some(parent) = parent {
            if let Some(p) = self.doc.nodes.get_mut(&parent) {
                p.children.retain(|&c| c != node);
            }
        }
        self.doc.roots.retain(|&r| r != node);
        for id in self.descendants(node) {
            self.doc.nodes.remove(&id);
        }
        Ok(())
    }

    fn attach_root(&mut self, node: NodeId) -> Result<()> {
        // Roots are top-level; unhook from any previous parent.
        if let Some(old) = self.node_mut(node)?.parent.take() {
            if let Some(p) = self.doc.nodes.get_mut(&old) {
                p.children.retain(|&c| c != node);
            }
        }
        if !self.doc.roots.contains(&node) {
            self.doc.roots.push(node);
        }
        Ok(())
    }

    fn detach_root(&mut self, node: NodeId) -> Result<()> {
        if !self.doc.nodes.contains_key(&node) {
            return Err(BuildError::UnknownNode(node));
        }
        self.doc.roots.retain(|&r| r != node);
        Ok(())
    }

    fn roots(&self) -> Vec<NodeId> {
        self.doc.roots.clone()
    }

    fn name(&self, node: NodeId) -> Option<&str> {
        self.doc.nodes.get(&node).and_then(|n| n.name.as_deref())
    }
}
