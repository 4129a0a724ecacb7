//! Shared low-level helpers for the grammar productions.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;

impl Parser<'_, '_> {
    /// Closes a delimited construct whose opening token was registered with
    /// `push_delimiter`. On a missing closer at end of file the diagnostic
    /// points back at the opener.
    pub(crate) fn expect_closing(
        &mut self,
        kind: SyntaxKind,
        unclosed: DiagnosticKind,
        what: &str,
        construct: &str,
    ) {
        if self.eat_token(kind) {
            self.pop_delimiter();
            return;
        }
        let open = self.pop_delimiter();
        if self.eof() {
            if let Some(open) = open {
                self.error_unclosed_delimiter(
                    unclosed,
                    format!("expected {what}"),
                    format!("{construct} started here"),
                    open.span,
                );
            }
            return;
        }
        self.error_msg(DiagnosticKind::ExpectedToken, what.to_string());
    }

    /// `block` | `=> expression ;` | `;`
    pub(crate) fn parse_function_body(&mut self) {
        match self.current() {
            SyntaxKind::OpenBrace => self.parse_block(),
            SyntaxKind::FatArrow => {
                self.parse_arrow_expression_clause();
                self.expect(SyntaxKind::Semicolon, "`;` after expression body");
            }
            _ => {
                self.expect(SyntaxKind::Semicolon, "`;`, `=>`, or a body");
            }
        }
    }

    pub(crate) fn parse_arrow_expression_clause(&mut self) {
        self.start_node(SyntaxKind::ArrowExpressionClause);
        self.bump(); // '=>'
        self.parse_expression_or_error();
        self.finish_node();
    }

    /// A statement position that must not be empty (loop bodies, branches).
    pub(crate) fn parse_embedded_statement(&mut self) {
        if self.should_stop() {
            self.error(DiagnosticKind::ExpectedStatement);
            return;
        }
        if self.currently_is(SyntaxKind::CloseBrace) {
            self.error(DiagnosticKind::ExpectedStatement);
            return;
        }
        self.parse_statement();
    }
}
