pub mod source;

mod lower;

use thiserror::Error;

use crate::node::SyntaxTree;

/// A file the Python front end could not turn into a syntax tree. Handled
/// at file granularity: the file contributes nothing and the run continues.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to load python grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),
    #[error("parser produced no tree")]
    NoTree,
    #[error("syntax error at line {line}")]
    Syntax { line: usize },
}

/// Parse Python source text into a lowered syntax tree.
///
/// A tree containing any syntax error is rejected wholesale, matching the
/// all-or-nothing behavior of a conventional Python parser.
pub fn parse_source(text: &str) -> Result<SyntaxTree, ParseError> {
    let mut parser = tree_sitter::Parser::new();
    parser.set_language(&tree_sitter_python::LANGUAGE.into())?;

    let cst = parser.parse(text, None).ok_or(ParseError::NoTree)?;
    let root = cst.root_node();
    if root.has_error() {
        return Err(ParseError::Syntax {
            line: first_error_row(root).map_or(1, |row| row + 1),
        });
    }

    Ok(lower::lower_tree(root, text))
}

fn first_error_row(node: tree_sitter::Node<'_>) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position().row);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(row) = first_error_row(child) {
            return Some(row);
        }
    }
    None
}
