use std::collections::HashMap;

use crate::qname::{QName, QNameModule};

/// Child lookup over a read-only schema tree.
///
/// The fields parser never owns or constructs schema trees; it receives this
/// narrow capability by reference, so tests can substitute a hand-built tree
/// for a full YANG-backed one.
pub trait SchemaNode {
    fn qname(&self) -> &QName;

    /// The direct child carrying `qname`, if any. Lookup is by the full
    /// qualified name, so a matching local name in the wrong namespace does
    /// not resolve.
    fn child(&self, qname: &QName) -> Option<&dyn SchemaNode>;
}

/// Module prefix resolution for a schema context rooted at a known node.
pub trait SchemaContext {
    fn module_for_prefix(&self, prefix: &str) -> Option<QNameModule>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Container,
    List,
    Leaf,
}

/// An in-memory schema node, for tests, demos and embedders that do not carry
/// a full YANG model stack.
#[derive(Debug)]
pub struct DataNode {
    qname: QName,
    kind: NodeKind,
    children: Vec<DataNode>,
}

impl DataNode {
    pub fn container(qname: QName) -> Self {
        Self::new(qname, NodeKind::Container)
    }

    pub fn list(qname: QName) -> Self {
        Self::new(qname, NodeKind::List)
    }

    pub fn leaf(qname: QName) -> Self {
        Self::new(qname, NodeKind::Leaf)
    }

    fn new(qname: QName, kind: NodeKind) -> Self {
        Self {
            qname,
            kind,
            children: Vec::new(),
        }
    }

    /// Attaches a child node. Only containers and lists carry children.
    pub fn with_child(mut self, child: DataNode) -> Self {
        assert!(
            self.kind != NodeKind::Leaf,
            "leaf nodes cannot have children"
        );
        self.children.push(child);
        self
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }
}

impl SchemaNode for DataNode {
    fn qname(&self) -> &QName {
        &self.qname
    }

    fn child(&self, qname: &QName) -> Option<&dyn SchemaNode> {
        self.children
            .iter()
            .find(|c| c.qname == *qname)
            .map(|c| c as &dyn SchemaNode)
    }
}

/// A fixed prefix-to-module table.
#[derive(Debug, Default)]
pub struct StaticSchemaContext {
    modules: HashMap<String, QNameModule>,
}

impl StaticSchemaContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_module(mut self, prefix: impl Into<String>, module: QNameModule) -> Self {
        self.modules.insert(prefix.into(), module);
        self
    }
}

impl SchemaContext for StaticSchemaContext {
    fn module_for_prefix(&self, prefix: &str) -> Option<QNameModule> {
        self.modules.get(prefix).cloned()
    }
}
