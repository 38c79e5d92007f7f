use crate::extract::Extractor;
use crate::node::{NodeKind, SyntaxNode};

pub struct ClassDef;

impl Extractor for ClassDef {
    fn name(&self) -> &'static str {
        "class-def"
    }

    fn candidates(&self, node: &SyntaxNode) -> Vec<String> {
        match &node.kind {
            NodeKind::ClassDef { name } => vec![name.clone()],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_the_defined_name() {
        let node = SyntaxNode::new(
            NodeKind::ClassDef {
                name: "HttpClient".to_string(),
            },
            7,
        );
        assert_eq!(ClassDef.candidates(&node), vec!["HttpClient"]);
    }

    #[test]
    fn ignores_function_definitions() {
        let node = SyntaxNode::new(
            NodeKind::FunctionDef {
                name: "HttpClient".to_string(),
            },
            7,
        );
        assert!(ClassDef.candidates(&node).is_empty());
    }
}
