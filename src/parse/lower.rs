//! Lowering from the tree-sitter CST to the flat node model.
//!
//! Only the constructs the extractors key off become nodes; everything
//! else is walked through for the identifiers it contains. Names that are
//! bindings
//! or literal attributes in the grammar (a def's name, the attr side of an
//! attribute access, parameter names, import lists) are captured as fields
//! of their owning node, not as identifier references.

use tree_sitter::Node;

use crate::node::{ImportedName, NodeKind, SyntaxNode, SyntaxTree};

pub(crate) fn lower_tree(root: Node<'_>, src: &str) -> SyntaxTree {
    let mut tree = SyntaxTree::new();
    tree.push(SyntaxNode {
        kind: NodeKind::Module,
        row: None,
    });
    lower_children(root, src, &mut tree);
    tree
}

fn lower_node(node: Node<'_>, src: &str, tree: &mut SyntaxTree) {
    let row = node.start_position().row;
    match node.kind() {
        "identifier" => {
            tree.push(SyntaxNode::new(
                NodeKind::Identifier {
                    id: text(node, src),
                },
                row,
            ));
        }
        "class_definition" | "function_definition" => {
            if let Some(name_node) = node.child_by_field_name("name") {
                let name = text(name_node, src);
                let kind = if node.kind() == "class_definition" {
                    NodeKind::ClassDef { name }
                } else {
                    NodeKind::FunctionDef { name }
                };
                tree.push(SyntaxNode::new(kind, row));
                let name_id = name_node.id();
                lower_children_filtered(node, src, tree, |child| child.id() != name_id);
            } else {
                lower_children(node, src, tree);
            }
        }
        "call" => {
            if let Some(kind) = classify_call(node, src) {
                tree.push(SyntaxNode::new(kind, row));
            }
            lower_children(node, src, tree);
        }
        "attribute" => {
            // The attr side is a literal, not a reference; only the object
            // side can contain identifiers worth walking.
            if let Some(object) = node.child_by_field_name("object") {
                lower_node(object, src, tree);
            }
        }
        "keyword_argument" | "default_parameter" => {
            if let Some(value) = node.child_by_field_name("value") {
                lower_node(value, src, tree);
            }
        }
        "typed_parameter" => {
            if let Some(ty) = node.child_by_field_name("type") {
                lower_node(ty, src, tree);
            }
        }
        "typed_default_parameter" => {
            for field in ["type", "value"] {
                if let Some(child) = node.child_by_field_name(field) {
                    lower_node(child, src, tree);
                }
            }
        }
        "parameters" | "lambda_parameters" => {
            lower_children_filtered(node, src, tree, |child| {
                !matches!(
                    child.kind(),
                    "identifier" | "list_splat_pattern" | "dictionary_splat_pattern"
                )
            });
        }
        "import_statement" | "import_from_statement" | "future_import_statement" => {
            tree.push(SyntaxNode::new(lower_import(node, src), row));
        }
        _ => lower_children(node, src, tree),
    }
}

fn lower_children(node: Node<'_>, src: &str, tree: &mut SyntaxTree) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        lower_node(child, src, tree);
    }
}

fn lower_children_filtered(
    node: Node<'_>,
    src: &str,
    tree: &mut SyntaxTree,
    keep: impl Fn(&Node<'_>) -> bool,
) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if keep(&child) {
            lower_node(child, src, tree);
        }
    }
}

fn classify_call(node: Node<'_>, src: &str) -> Option<NodeKind> {
    let callee = node.child_by_field_name("function")?;
    match callee.kind() {
        "identifier" => Some(NodeKind::Call {
            callee: text(callee, src),
        }),
        "attribute" => {
            let attr = callee.child_by_field_name("attribute")?;
            let receiver = callee
                .child_by_field_name("object")
                .filter(|object| object.kind() == "identifier")
                .map(|object| text(object, src));
            Some(NodeKind::MethodCall {
                receiver,
                attr: text(attr, src),
            })
        }
        // Callee is some other expression (subscript, nested call, ...);
        // its pieces are still walked as children.
        _ => None,
    }
}

fn lower_import(node: Node<'_>, src: &str) -> NodeKind {
    let module = match node.kind() {
        "import_from_statement" => module_path(node, src),
        "future_import_statement" => Some("__future__".to_string()),
        _ => None,
    };

    let mut names = Vec::new();
    let mut cursor = node.walk();
    for item in node.children_by_field_name("name", &mut cursor) {
        match item.kind() {
            "dotted_name" | "identifier" => names.push(ImportedName {
                name: text(item, src),
                alias: None,
            }),
            "aliased_import" => {
                if let Some(name_node) = item.child_by_field_name("name") {
                    names.push(ImportedName {
                        name: text(name_node, src),
                        alias: item.child_by_field_name("alias").map(|a| text(a, src)),
                    });
                }
            }
            _ => {}
        }
    }

    NodeKind::Import { module, names }
}

/// `from a.b import ...` -> "a.b"; `from .pkg import ...` -> "pkg";
/// bare-relative `from . import ...` has no module path.
fn module_path(node: Node<'_>, src: &str) -> Option<String> {
    let module = node.child_by_field_name("module_name")?;
    match module.kind() {
        "dotted_name" => Some(text(module, src)),
        "relative_import" => {
            let mut cursor = module.walk();
            module
                .named_children(&mut cursor)
                .find(|child| child.kind() == "dotted_name")
                .map(|child| text(child, src))
        }
        _ => None,
    }
}

fn text(node: Node<'_>, src: &str) -> String {
    node.utf8_text(src.as_bytes())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use crate::node::{ImportedName, NodeKind, SyntaxNode};
    use crate::parse::parse_source;

    fn nodes(src: &str) -> Vec<SyntaxNode> {
        parse_source(src).unwrap().nodes().to_vec()
    }

    fn identifiers(nodes: &[SyntaxNode]) -> Vec<(&str, usize)> {
        nodes
            .iter()
            .filter_map(|n| Some((n.identifier()?, n.row?)))
            .collect()
    }

    #[test]
    fn function_def_and_call() {
        let nodes = nodes("def load_config():\n    pass\n\nload_config()\n");
        assert!(nodes.iter().any(|n| n.kind
            == NodeKind::FunctionDef {
                name: "load_config".to_string()
            }
            && n.row == Some(0)));
        assert!(nodes.iter().any(|n| n.kind
            == NodeKind::Call {
                callee: "load_config".to_string()
            }
            && n.row == Some(3)));
        // The callee identifier is also present, as a reference on line 4
        assert!(identifiers(&nodes).contains(&("load_config", 3)));
    }

    #[test]
    fn definition_names_are_not_identifier_references() {
        let nodes = nodes("class Loader(Base):\n    pass\n");
        assert!(nodes.iter().any(|n| n.kind
            == NodeKind::ClassDef {
                name: "Loader".to_string()
            }));
        let ids = identifiers(&nodes);
        assert!(!ids.iter().any(|(id, _)| *id == "Loader"));
        // The superclass is a reference
        assert!(ids.contains(&("Base", 0)));
    }

    #[test]
    fn method_call_with_bare_receiver() {
        let nodes = nodes("obj.method(1)\n");
        assert!(nodes.iter().any(|n| n.kind
            == NodeKind::MethodCall {
                receiver: Some("obj".to_string()),
                attr: "method".to_string()
            }));
        // The receiver is also an identifier reference; the attr is not
        let ids = identifiers(&nodes);
        assert!(ids.contains(&("obj", 0)));
        assert!(!ids.iter().any(|(id, _)| *id == "method"));
    }

    #[test]
    fn method_call_with_complex_receiver() {
        let nodes = nodes("get_client().connect()\n");
        assert!(nodes.iter().any(|n| n.kind
            == NodeKind::MethodCall {
                receiver: None,
                attr: "connect".to_string()
            }));
        // The inner call is its own node
        assert!(nodes.iter().any(|n| n.kind
            == NodeKind::Call {
                callee: "get_client".to_string()
            }));
    }

    #[test]
    fn plain_attribute_access_keeps_only_the_object() {
        let nodes = nodes("x.y\n");
        let ids = identifiers(&nodes);
        assert!(ids.contains(&("x", 0)));
        assert!(!ids.iter().any(|(id, _)| *id == "y"));
    }

    #[test]
    fn from_import_with_aliases() {
        let nodes = nodes("from pkg.sub import a as b, c\n");
        assert!(nodes.iter().any(|n| n.kind
            == NodeKind::Import {
                module: Some("pkg.sub".to_string()),
                names: vec![
                    ImportedName {
                        name: "a".to_string(),
                        alias: Some("b".to_string())
                    },
                    ImportedName {
                        name: "c".to_string(),
                        alias: None
                    },
                ],
            }));
    }

    #[test]
    fn plain_import_with_alias() {
        let nodes = nodes("import os.path as p\n");
        assert!(nodes.iter().any(|n| n.kind
            == NodeKind::Import {
                module: None,
                names: vec![ImportedName {
                    name: "os.path".to_string(),
                    alias: Some("p".to_string())
                }],
            }));
    }

    #[test]
    fn wildcard_import_keeps_only_the_module() {
        let nodes = nodes("from m import *\n");
        assert!(nodes.iter().any(|n| n.kind
            == NodeKind::Import {
                module: Some("m".to_string()),
                names: vec![],
            }));
    }

    #[test]
    fn bare_relative_import_has_no_module() {
        let nodes = nodes("from . import helpers\n");
        assert!(nodes.iter().any(|n| n.kind
            == NodeKind::Import {
                module: None,
                names: vec![ImportedName {
                    name: "helpers".to_string(),
                    alias: None
                }],
            }));
    }

    #[test]
    fn dotted_relative_import_keeps_the_dotted_part() {
        let nodes = nodes("from .pkg import x\n");
        assert!(nodes.iter().any(|n| match &n.kind {
            NodeKind::Import { module, .. } => module.as_deref() == Some("pkg"),
            _ => false,
        }));
    }

    #[test]
    fn parameter_names_are_bindings_not_references() {
        let nodes = nodes("def f(a, b=1, *args, **kw):\n    return a\n");
        let ids = identifiers(&nodes);
        // Only the body reference to `a` survives
        assert_eq!(
            ids.iter().filter(|(id, _)| *id == "a").count(),
            1,
            "ids: {ids:?}"
        );
        assert!(ids.contains(&("a", 1)));
        for bound in ["b", "args", "kw"] {
            assert!(!ids.iter().any(|(id, _)| *id == bound), "leaked {bound}");
        }
    }

    #[test]
    fn keyword_argument_names_are_not_references() {
        let nodes = nodes("f(key=value)\n");
        let ids = identifiers(&nodes);
        assert!(ids.iter().any(|(id, _)| *id == "value"));
        assert!(!ids.iter().any(|(id, _)| *id == "key"));
    }

    #[test]
    fn decorator_expressions_are_walked() {
        let nodes = nodes("@app.route('/x')\ndef handler():\n    pass\n");
        assert!(nodes.iter().any(|n| n.kind
            == NodeKind::MethodCall {
                receiver: Some("app".to_string()),
                attr: "route".to_string()
            }
            && n.row == Some(0)));
        assert!(nodes.iter().any(|n| n.kind
            == NodeKind::FunctionDef {
                name: "handler".to_string()
            }
            && n.row == Some(1)));
    }

    #[test]
    fn rows_are_non_decreasing_in_lowered_order() {
        let src = "import os\n\nclass A:\n    def m(self):\n        return os.path.join(a, b)\n\na = A()\na.m()\n";
        let nodes = nodes(src);
        let rows: Vec<usize> = nodes.iter().filter_map(|n| n.row).collect();
        for pair in rows.windows(2) {
            assert!(pair[0] <= pair[1], "rows went backwards: {rows:?}");
        }
    }

    #[test]
    fn future_import_is_an_import_of_dunder_future() {
        let nodes = nodes("from __future__ import annotations\n");
        assert!(nodes.iter().any(|n| match &n.kind {
            NodeKind::Import { module, names } =>
                module.as_deref() == Some("__future__")
                    && names.iter().any(|i| i.name == "annotations"),
            _ => false,
        }));
    }
}
