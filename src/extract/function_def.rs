use crate::extract::Extractor;
use crate::node::{NodeKind, SyntaxNode};

pub struct FunctionDef;

impl Extractor for FunctionDef {
    fn name(&self) -> &'static str {
        "function-def"
    }

    fn candidates(&self, node: &SyntaxNode) -> Vec<String> {
        match &node.kind {
            NodeKind::FunctionDef { name } => vec![name.clone()],
            _ => Vec::new(),
        }
    }
}
