use crate::extract::Extractor;
use crate::node::{NodeKind, SyntaxNode};

/// Import statements, plain and from-module. Produces the module path when
/// present, every imported name, and every alias.
pub struct Import;

impl Extractor for Import {
    fn name(&self) -> &'static str {
        "import"
    }

    fn candidates(&self, node: &SyntaxNode) -> Vec<String> {
        let NodeKind::Import { module, names } = &node.kind else {
            return Vec::new();
        };

        let mut strings = Vec::new();
        if let Some(module) = module {
            strings.push(module.clone());
        }
        for name in names {
            strings.push(name.name.clone());
            if let Some(alias) = &name.alias {
                strings.push(alias.clone());
            }
        }
        strings
    }
}
