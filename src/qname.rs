use core::fmt;

use serde::Serialize;

/// A YANG module identity: namespace URI plus optional revision date.
///
/// Two modules are equal only when both namespace and revision match, so a
/// node from a `2015-04-04` revision never collides with the same name from
/// a later revision of the module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct QNameModule {
    pub namespace: String,
    pub revision: Option<String>,
}

impl QNameModule {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            revision: None,
        }
    }

    pub fn with_revision(namespace: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            revision: Some(revision.into()),
        }
    }
}

impl fmt::Display for QNameModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.revision {
            Some(rev) => write!(f, "{}?revision={}", self.namespace, rev),
            None => f.write_str(&self.namespace),
        }
    }
}

/// The namespace-qualified identity of a schema node.
///
/// A `QName` is only ever produced by a successful schema lookup; the parser
/// never fabricates one from raw selector text alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct QName {
    pub module: QNameModule,
    pub local_name: String,
}

impl QName {
    pub fn new(module: QNameModule, local_name: impl Into<String>) -> Self {
        Self {
            module,
            local_name: local_name.into(),
        }
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}){}", self.module, self.local_name)
    }
}
