use crate::extract::Extractor;
use crate::node::{NodeKind, SyntaxNode};

/// Calls through an attribute access. Always produces the attribute name;
/// when the receiver is a bare identifier, also the receiver alone and the
/// dotted `receiver.attr` form, so a pattern can target either side or the
/// full chain.
pub struct MethodCall;

impl Extractor for MethodCall {
    fn name(&self) -> &'static str {
        "method-call"
    }

    fn candidates(&self, node: &SyntaxNode) -> Vec<String> {
        let NodeKind::MethodCall { receiver, attr } = &node.kind else {
            return Vec::new();
        };

        let mut strings = vec![attr.clone()];
        if let Some(receiver) = receiver {
            strings.push(receiver.clone());
            strings.push(format!("{receiver}.{attr}"));
        }
        strings
    }
}
