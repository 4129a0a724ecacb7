//! Pattern productions.
//!
//! Patterns only activate inside `case` labels and switch-expression arms;
//! everywhere else the same tokens parse as expressions or types. The
//! `constant-label-vs-pattern-label` conflict is resolved by shape: a
//! constant `case` label stays a constant label unless the input has a
//! pattern-only shape or a trailing `when` clause.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::conflicts::PatternShape;
use crate::parser::cst::SyntaxKind;

impl Parser<'_, '_> {
    pub(crate) fn parse_pattern(&mut self) {
        match self.pattern_shape_ahead() {
            PatternShape::Var => {
                self.start_node(SyntaxKind::VarPattern);
                self.bump(); // 'var' identifier
                self.parse_variable_designation();
                self.finish_node();
            }
            PatternShape::Discard => {
                self.start_node(SyntaxKind::DiscardPattern);
                self.bump(); // '_' identifier
                self.finish_node();
            }
            PatternShape::Declaration => {
                self.start_node(SyntaxKind::DeclarationPattern);
                self.parse_type();
                self.parse_variable_designation();
                self.finish_node();
            }
            PatternShape::Constant => {
                self.start_node(SyntaxKind::ConstantPattern);
                self.parse_expression_or_error();
                self.finish_node();
            }
        }
    }

    pub(crate) fn parse_variable_designation(&mut self) {
        match self.current() {
            SyntaxKind::Identifier if self.current_text() == "_" => {
                self.start_node(SyntaxKind::DiscardDesignation);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::Identifier => {
                self.start_node(SyntaxKind::SingleVariableDesignation);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::OpenParen => {
                self.start_node(SyntaxKind::ParenthesizedVariableDesignation);
                self.push_delimiter(SyntaxKind::OpenParen);
                self.bump();
                loop {
                    if self.should_stop() || self.currently_is(SyntaxKind::CloseParen) {
                        break;
                    }
                    self.parse_variable_designation();
                    if self.eat_token(SyntaxKind::Comma) {
                        continue;
                    }
                    break;
                }
                self.expect_closing(
                    SyntaxKind::CloseParen,
                    DiagnosticKind::UnclosedParen,
                    "`)`",
                    "designation",
                );
                self.finish_node();
            }
            _ => self.error(DiagnosticKind::ExpectedIdentifier),
        }
    }

    pub(crate) fn parse_when_clause(&mut self) {
        self.start_node(SyntaxKind::WhenClause);
        self.bump(); // 'when' identifier
        self.parse_expression_or_error();
        self.finish_node();
    }

    /// `case` label dispatch: a pattern-only shape (or a trailing `when`)
    /// selects the pattern form; otherwise the constant form wins by
    /// declaration order.
    pub(crate) fn parse_case_label(&mut self) {
        self.assert_current(SyntaxKind::KwCase);
        let checkpoint = self.checkpoint();
        self.bump(); // 'case'

        if self.pattern_shape_ahead() != PatternShape::Constant {
            self.start_node_at(checkpoint, SyntaxKind::CasePatternSwitchLabel);
            self.parse_pattern();
            if self.at_contextual("when") {
                self.parse_when_clause();
            }
            self.expect(SyntaxKind::Colon, "`:` after the pattern");
            self.finish_node();
            return;
        }

        let expr_checkpoint = self.checkpoint();
        self.parse_expression_or_error();

        if self.at_contextual("when") {
            // A `when` clause retroactively makes this a pattern label.
            self.start_node_at(expr_checkpoint, SyntaxKind::ConstantPattern);
            self.finish_node();
            self.parse_when_clause();
            self.expect(SyntaxKind::Colon, "`:` after the pattern");
            self.start_node_at(checkpoint, SyntaxKind::CasePatternSwitchLabel);
            self.finish_node();
            return;
        }

        self.expect(SyntaxKind::Colon, "`:` after the case value");
        self.start_node_at(checkpoint, SyntaxKind::CaseSwitchLabel);
        self.finish_node();
    }
}
