/// One imported name within an import statement, with its optional alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedName {
    pub name: String,
    pub alias: Option<String>,
}

/// The shape of a syntax node, with the literal attributes extraction
/// keys off. Anything the front end can't classify into one of these
/// kinds never reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Tree root. The only kind without a source row.
    Module,
    /// A bare identifier reference.
    Identifier { id: String },
    ClassDef {
        name: String,
    },
    FunctionDef {
        name: String,
    },
    /// A call whose callee is a bare identifier.
    Call { callee: String },
    /// A call whose callee is an attribute access. `receiver` is set only
    /// when the receiver is itself a bare identifier.
    MethodCall {
        receiver: Option<String>,
        attr: String,
    },
    /// `import a.b` or `from a.b import c as d`. Plain imports carry their
    /// dotted module as an imported name and leave `module` empty.
    Import {
        module: Option<String>,
        names: Vec<ImportedName>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    /// 0-based source row. Nodes without one are skipped by the engine.
    pub row: Option<usize>,
}

impl SyntaxNode {
    pub fn new(kind: NodeKind, row: usize) -> Self {
        Self {
            kind,
            row: Some(row),
        }
    }

    /// The id-like field, if this node exposes one.
    pub fn identifier(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Identifier { id } => Some(id),
            _ => None,
        }
    }

    /// The name-like field, if this node exposes one. Definitions carry
    /// their defined name here; nothing else does.
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::ClassDef { name } | NodeKind::FunctionDef { name } => Some(name),
            _ => None,
        }
    }
}

/// A lowered syntax tree: nodes stored flat, in pre-order. Traversal is
/// a slice iteration; child links are not retained since extraction is
/// strictly per-node shape.
#[derive(Debug, Default)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
}

impl SyntaxTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SyntaxNode) {
        self.nodes.push(node);
    }

    pub fn nodes(&self) -> &[SyntaxNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_accessor() {
        let node = SyntaxNode::new(
            NodeKind::Identifier {
                id: "load_config".to_string(),
            },
            3,
        );
        assert_eq!(node.identifier(), Some("load_config"));
        assert_eq!(node.name(), None);
    }

    #[test]
    fn name_accessor_on_definitions() {
        let class = SyntaxNode::new(
            NodeKind::ClassDef {
                name: "Config".to_string(),
            },
            0,
        );
        let func = SyntaxNode::new(
            NodeKind::FunctionDef {
                name: "load".to_string(),
            },
            1,
        );
        assert_eq!(class.name(), Some("Config"));
        assert_eq!(func.name(), Some("load"));
        assert_eq!(class.identifier(), None);
    }

    #[test]
    fn call_nodes_expose_neither_accessor() {
        let call = SyntaxNode::new(
            NodeKind::Call {
                callee: "main".to_string(),
            },
            0,
        );
        assert_eq!(call.identifier(), None);
        assert_eq!(call.name(), None);
    }

    #[test]
    fn module_root_has_no_row() {
        let root = SyntaxNode {
            kind: NodeKind::Module,
            row: None,
        };
        assert_eq!(root.row, None);
    }

    #[test]
    fn tree_preserves_push_order() {
        let mut tree = SyntaxTree::new();
        assert!(tree.is_empty());
        tree.push(SyntaxNode {
            kind: NodeKind::Module,
            row: None,
        });
        tree.push(SyntaxNode::new(
            NodeKind::Identifier {
                id: "x".to_string(),
            },
            0,
        ));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.nodes()[0].kind, NodeKind::Module);
        assert_eq!(tree.nodes()[1].identifier(), Some("x"));
    }
}
