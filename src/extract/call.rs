use crate::extract::Extractor;
use crate::node::{NodeKind, SyntaxNode};

/// Calls whose callee is a bare identifier. Attribute-access callees are
/// the method-call extractor's territory.
pub struct Call;

impl Extractor for Call {
    fn name(&self) -> &'static str {
        "call"
    }

    fn candidates(&self, node: &SyntaxNode) -> Vec<String> {
        match &node.kind {
            NodeKind::Call { callee } => vec![callee.clone()],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_the_callee_name() {
        let node = SyntaxNode::new(
            NodeKind::Call {
                callee: "load_config".to_string(),
            },
            9,
        );
        assert_eq!(Call.candidates(&node), vec!["load_config"]);
    }

    #[test]
    fn ignores_method_calls() {
        let node = SyntaxNode::new(
            NodeKind::MethodCall {
                receiver: Some("obj".to_string()),
                attr: "load".to_string(),
            },
            9,
        );
        assert!(Call.candidates(&node).is_empty());
    }
}
