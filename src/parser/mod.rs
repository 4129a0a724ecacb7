//! Parser infrastructure for the C# surface grammar.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's
//! green tree builder. Key design decisions borrowed from rust-analyzer,
//! rnix-parser, and taplo:
//!
//! - Zero-copy parsing: tokens carry spans, text sliced only when building tree nodes
//! - Trivia buffering: whitespace, comments, and preprocessor directives are
//!   collected, then attached as leading trivia of the next real token
//! - Checkpoint-based wrapping: retroactively wrap nodes for binary chains,
//!   qualified names, and suffix types
//! - Token-level speculation: declared conflict sets are resolved by bounded
//!   scans over the token stream, never by tree rollback
//!
//! # Recovery Strategy
//!
//! The parser is resilient—it always produces a tree. Recovery follows
//! these rules:
//!
//! 1. Unknown tokens get wrapped in `SyntaxKind::Error` nodes and consumed
//! 2. Missing expected tokens emit a diagnostic but don't consume (parent may handle)
//! 3. Delimited constructs synchronize on their closing token
//! 4. On recursion limit, remaining input goes into a single Error node
//!
//! However, fuel exhaustion (exec fuel, recursion fuel) returns an actual
//! error immediately.

pub mod ast;
pub mod cst;
pub mod lexer;

mod conflicts;
mod core;
mod grammar;
mod invariants;
mod precedence;

#[cfg(test)]
mod tests;

pub use self::conflicts::{CONFLICTS, ConflictSet};
pub use self::core::{DEFAULT_RECURSION_LIMIT, Parser};
pub use self::cst::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, TokenSet};
pub use self::precedence::{Assoc, OperatorEntry, PrecedenceTable};

use crate::PassResult;
use cst::token_sets;
use lexer::lex;

/// The parser's immutable configuration: the precedence table, the declared
/// conflict sets, and the extras (trivia) set. Constructed once and injected
/// into every [`Parser`]; there is no ambient singleton.
#[derive(Debug, Clone, Copy)]
pub struct Grammar {
    pub precedence: PrecedenceTable,
    pub conflicts: &'static [ConflictSet],
    pub extras: TokenSet,
}

impl Grammar {
    pub const STANDARD: Grammar = Grammar {
        precedence: PrecedenceTable::standard(),
        conflicts: CONFLICTS,
        extras: token_sets::TRIVIA,
    };
}

/// Entry points for parsing a bare fragment instead of a whole compilation
/// unit, for tooling use. Fragments share every production with the
/// top-level parse and are wrapped in a `Fragment` root node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Declaration,
    Statement,
    Expression,
}

/// Parse result containing the green tree.
///
/// The tree is always complete—diagnostics are returned separately.
/// Error nodes in the tree represent recovery points.
#[derive(Debug, Clone)]
pub struct Parse {
    cst: rowan::GreenNode,
}

impl Parse {
    pub fn as_cst(&self) -> &rowan::GreenNode {
        &self.cst
    }

    /// Creates a typed view over the immutable green tree.
    /// This is cheap—SyntaxNode is a thin wrapper with parent pointers.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.cst.clone())
    }
}

/// Main entry point: parses a full compilation unit (optional byte-order
/// mark plus declarations). Returns Err only on fuel exhaustion.
pub fn parse(source: &str) -> PassResult<Parse> {
    parse_with_parser(
        Parser::new(source, lex(source), &Grammar::STANDARD),
        None,
    )
}

/// Parses a bare declaration, statement, or expression fragment.
pub fn parse_fragment(source: &str, kind: FragmentKind) -> PassResult<Parse> {
    parse_with_parser(
        Parser::new(source, lex(source), &Grammar::STANDARD),
        Some(kind),
    )
}

/// Parse with a pre-configured parser (for custom fuel limits).
pub(crate) fn parse_with_parser(
    mut parser: Parser,
    fragment: Option<FragmentKind>,
) -> PassResult<Parse> {
    match fragment {
        None => parser.parse_compilation_unit(),
        Some(kind) => parser.parse_fragment_root(kind),
    }
    let (cst, diagnostics) = parser.finish()?;
    Ok((Parse { cst }, diagnostics))
}
