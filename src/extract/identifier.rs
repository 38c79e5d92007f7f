use crate::extract::Extractor;
use crate::node::SyntaxNode;

/// Matches any node exposing an id-like field. Overlaps with the typed
/// extractors; dedup collapses the duplication.
pub struct Identifier;

impl Extractor for Identifier {
    fn name(&self) -> &'static str {
        "identifier"
    }

    fn candidates(&self, node: &SyntaxNode) -> Vec<String> {
        match node.identifier() {
            Some(id) => vec![id.to_string()],
            None => Vec::new(),
        }
    }
}
