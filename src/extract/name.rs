use crate::extract::Extractor;
use crate::node::SyntaxNode;

/// Matches any node exposing a name-like field (definitions).
pub struct Name;

impl Extractor for Name {
    fn name(&self) -> &'static str {
        "name"
    }

    fn candidates(&self, node: &SyntaxNode) -> Vec<String> {
        match node.name() {
            Some(name) => vec![name.to_string()],
            None => Vec::new(),
        }
    }
}
