//! sharptree: a lossless parser for the C# language surface.
//!
//! The parser turns source text into a full-fidelity concrete syntax tree:
//! every byte of the input, including whitespace, comments, preprocessor
//! directives, and a leading byte-order mark, is present in the tree, so the
//! text can be reconstructed exactly from the leaves.
//!
//! # Example
//!
//! ```
//! let source = "class C { int F() { return 1 + 2 * 3; } }";
//!
//! let (parse, diagnostics) = sharptree::parse(source).expect("within limits");
//! assert!(!diagnostics.has_errors());
//! assert_eq!(parse.syntax().text().to_string(), source);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod parser;

/// Result type for passes that produce both output and diagnostics.
///
/// The parse is resilient: syntactic problems become diagnostics alongside
/// a complete tree. Only resource exhaustion uses the outer `Result`.
pub type PassResult<T> = std::result::Result<(T, Diagnostics), Error>;

pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use parser::{
    FragmentKind, Parse, SyntaxKind, SyntaxNode, SyntaxToken, parse, parse_fragment,
};

/// Fatal errors that abort a parse outright.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

/// Result type for parser operations.
pub type Result<T> = std::result::Result<T, Error>;
