//! Expression productions.
//!
//! The flat `expression OP expression` surface is resolved by precedence
//! climbing over the table in `precedence`: an operator at level L only
//! extends the current left operand when L is at least the minimum level
//! currently permitted; left-associative operators parse their right side
//! with minimum L+1, right-associative ones (assignment, conditional,
//! `await`) with L.

use rowan::Checkpoint;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{
    ARGUMENT_MODIFIERS, EXPR_FIRST, PREDEFINED_TYPES, PREFIX_OPERATORS,
};
use crate::parser::grammar::types::{GenericsMode, TypeShape};
use crate::parser::precedence::{self, Assoc};

impl Parser<'_, '_> {
    pub(crate) fn at_expression_start(&mut self) -> bool {
        self.currently_is_one_of(EXPR_FIRST)
    }

    /// Parse an expression, or emit an error if the current token can't
    /// start one. Returns `true` if an expression was parsed.
    pub(crate) fn parse_expression_or_error(&mut self) -> bool {
        if self.at_expression_start() {
            self.parse_expression();
            return true;
        }
        match self.current() {
            SyntaxKind::Semicolon
            | SyntaxKind::Comma
            | SyntaxKind::CloseParen
            | SyntaxKind::CloseBracket
            | SyntaxKind::CloseBrace => self.error(DiagnosticKind::ExpectedExpression),
            SyntaxKind::Garbage => self.error_and_bump(DiagnosticKind::UnrecognizedCharacter),
            _ => self.error_and_bump(DiagnosticKind::ExpectedExpression),
        }
        false
    }

    pub(crate) fn parse_expression(&mut self) {
        self.parse_expression_bp(precedence::SEQUENCE);
    }

    /// Core precedence climbing. `min` is the lowest operator level allowed
    /// to extend the operand parsed here.
    fn parse_expression_bp(&mut self, min: u8) {
        if !self.enter_recursion() {
            self.start_node(SyntaxKind::Error);
            while !self.should_stop() {
                self.bump();
            }
            self.finish_node();
            return;
        }

        let checkpoint = self.checkpoint();

        match self.current() {
            kind if PREFIX_OPERATORS.contains(kind) => {
                self.start_node(SyntaxKind::PrefixUnaryExpression);
                self.bump();
                self.parse_expression_bp(precedence::UNARY);
                self.finish_node();
            }
            SyntaxKind::Identifier
                if self.current_text() == "await" && EXPR_FIRST.contains(self.peek_nth(1)) =>
            {
                // `await` sequences at the lowest level, right-associative.
                self.start_node(SyntaxKind::AwaitExpression);
                self.bump();
                self.parse_expression_bp(precedence::SEQUENCE);
                self.finish_node();
            }
            SyntaxKind::OpenParen if self.cast_ahead() => {
                self.start_node(SyntaxKind::CastExpression);
                self.bump(); // '('
                self.parse_type();
                self.expect(SyntaxKind::CloseParen, "`)` after cast target");
                self.parse_expression_bp(precedence::CAST);
                self.finish_node();
            }
            _ => {
                self.parse_primary_expression();
                self.parse_postfix_suffixes(checkpoint);
            }
        }

        self.parse_binary_suffixes(checkpoint, min);
        self.exit_recursion();
    }

    /// Postfix forms bind at the highest level: invocation, element access,
    /// member access, `++` `--`, null-forgiving `!`, and `switch` expressions.
    fn parse_postfix_suffixes(&mut self, checkpoint: Checkpoint) {
        loop {
            if self.has_fatal_error() {
                break;
            }
            match self.current() {
                SyntaxKind::OpenParen => {
                    self.start_node_at(checkpoint, SyntaxKind::InvocationExpression);
                    self.parse_argument_list();
                    self.finish_node();
                }
                SyntaxKind::OpenBracket => {
                    self.start_node_at(checkpoint, SyntaxKind::ElementAccessExpression);
                    self.parse_bracketed_argument_list();
                    self.finish_node();
                }
                SyntaxKind::Dot => {
                    self.start_node_at(checkpoint, SyntaxKind::QualifiedName);
                    self.bump(); // '.'
                    self.parse_simple_name(GenericsMode::ByPolicy);
                    self.finish_node();
                }
                SyntaxKind::Arrow => {
                    // pointer member access is scoped out; recover as `.`
                    let range = self.current_span();
                    self.error_with_fix(
                        DiagnosticKind::UnexpectedToken,
                        range,
                        "pointer member access is not supported",
                        "use `.`",
                        ".",
                    );
                    self.start_node_at(checkpoint, SyntaxKind::QualifiedName);
                    self.bump(); // '->'
                    self.parse_simple_name(GenericsMode::ByPolicy);
                    self.finish_node();
                }
                SyntaxKind::PlusPlus | SyntaxKind::MinusMinus | SyntaxKind::Bang => {
                    self.start_node_at(checkpoint, SyntaxKind::PostfixUnaryExpression);
                    self.bump();
                    self.finish_node();
                }
                SyntaxKind::KwSwitch if self.next_is(SyntaxKind::OpenBrace) => {
                    self.parse_switch_expression_suffix(checkpoint);
                }
                _ => break,
            }
        }
    }

    fn parse_binary_suffixes(&mut self, checkpoint: Checkpoint, min: u8) {
        loop {
            if self.has_fatal_error() {
                break;
            }

            if self.currently_is(SyntaxKind::Question) {
                if precedence::CONDITIONAL < min {
                    break;
                }
                self.start_node_at(checkpoint, SyntaxKind::ConditionalExpression);
                self.bump(); // '?'
                self.parse_expression_bp(precedence::SEQUENCE);
                self.expect(SyntaxKind::Colon, "`:` in conditional expression");
                self.parse_expression_bp(precedence::CONDITIONAL);
                self.finish_node();
                continue;
            }

            // `>>=`: glued from `>` `>=`.
            if self.at_glued_pair(SyntaxKind::GreaterThan, SyntaxKind::GreaterThanEquals) {
                if precedence::ASSIGNMENT < min {
                    break;
                }
                self.start_node_at(checkpoint, SyntaxKind::AssignmentExpression);
                self.start_node(SyntaxKind::AssignmentOperator);
                self.bump();
                self.bump();
                self.finish_node();
                self.parse_expression_bp(precedence::ASSIGNMENT);
                self.finish_node();
                continue;
            }

            // `>>`: glued from `>` `>`.
            if self.at_glued_pair(SyntaxKind::GreaterThan, SyntaxKind::GreaterThan) {
                let entry = self.grammar.precedence.shift_right();
                if entry.level < min {
                    break;
                }
                self.start_node_at(checkpoint, SyntaxKind::BinaryExpression);
                self.bump();
                self.bump();
                self.parse_expression_bp(entry.level + 1);
                self.finish_node();
                continue;
            }

            let current = self.current();

            if self.grammar.precedence.is_assignment(current) {
                if precedence::ASSIGNMENT < min {
                    break;
                }
                self.start_node_at(checkpoint, SyntaxKind::AssignmentExpression);
                self.start_node(SyntaxKind::AssignmentOperator);
                self.bump();
                self.finish_node();
                self.parse_expression_bp(precedence::ASSIGNMENT);
                self.finish_node();
                continue;
            }

            if let Some(entry) = self.grammar.precedence.binary(current) {
                if entry.level < min {
                    break;
                }
                let rhs_min = match entry.assoc {
                    Assoc::Left => entry.level + 1,
                    Assoc::Right => entry.level,
                };
                self.start_node_at(checkpoint, SyntaxKind::BinaryExpression);
                self.bump();
                self.parse_expression_bp(rhs_min);
                self.finish_node();
                continue;
            }

            break;
        }
    }

    fn parse_primary_expression(&mut self) {
        match self.current() {
            SyntaxKind::IntegerLiteral
            | SyntaxKind::RealLiteral
            | SyntaxKind::CharacterLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::VerbatimStringLiteral
            | SyntaxKind::KwTrue
            | SyntaxKind::KwFalse
            | SyntaxKind::KwNull
            | SyntaxKind::KwArglist => {
                self.start_node(SyntaxKind::Literal);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::Identifier => {
                if self.current_text() == "async" && self.next_is(SyntaxKind::KwDelegate) {
                    self.parse_anonymous_method_expression();
                } else {
                    self.parse_simple_name(GenericsMode::ByPolicy);
                }
            }
            kind if PREDEFINED_TYPES.contains(kind) => {
                // `int.Parse(...)`: the predefined type is the operand.
                self.start_node(SyntaxKind::PredefinedType);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::KwThis => {
                self.start_node(SyntaxKind::ThisExpression);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::KwBase => {
                self.start_node(SyntaxKind::BaseExpression);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::OpenParen => {
                self.start_node(SyntaxKind::ParenthesizedExpression);
                self.push_delimiter(SyntaxKind::OpenParen);
                self.bump();
                self.parse_expression_or_error();
                self.expect_closing(
                    SyntaxKind::CloseParen,
                    DiagnosticKind::UnclosedParen,
                    "`)`",
                    "parenthesized expression",
                );
                self.finish_node();
            }
            SyntaxKind::KwNew => self.parse_creation_expression(),
            SyntaxKind::KwTypeof => self.parse_type_in_parens(SyntaxKind::TypeOfExpression),
            SyntaxKind::KwSizeof => self.parse_type_in_parens(SyntaxKind::SizeOfExpression),
            SyntaxKind::KwDefault => self.parse_type_in_parens(SyntaxKind::DefaultExpression),
            SyntaxKind::KwChecked | SyntaxKind::KwUnchecked => {
                self.start_node(SyntaxKind::CheckedExpression);
                self.bump();
                self.push_delimiter(SyntaxKind::OpenParen);
                self.expect(SyntaxKind::OpenParen, "`(`");
                self.parse_expression_or_error();
                self.expect_closing(
                    SyntaxKind::CloseParen,
                    DiagnosticKind::UnclosedParen,
                    "`)`",
                    "checked expression",
                );
                self.finish_node();
            }
            SyntaxKind::KwDelegate => self.parse_anonymous_method_expression(),
            SyntaxKind::KwStackalloc => {
                self.start_node(SyntaxKind::ImplicitStackAllocArrayCreationExpression);
                self.bump();
                self.expect(SyntaxKind::OpenBracket, "`[`");
                self.expect(SyntaxKind::CloseBracket, "`]`");
                self.parse_array_initializer_or_error();
                self.finish_node();
            }
            SyntaxKind::KwMakeref => {
                self.start_node(SyntaxKind::MakeRefExpression);
                self.bump();
                self.push_delimiter(SyntaxKind::OpenParen);
                self.expect(SyntaxKind::OpenParen, "`(`");
                self.parse_expression_or_error();
                self.expect_closing(
                    SyntaxKind::CloseParen,
                    DiagnosticKind::UnclosedParen,
                    "`)`",
                    "__makeref expression",
                );
                self.finish_node();
            }
            SyntaxKind::KwReftype => {
                self.start_node(SyntaxKind::RefTypeExpression);
                self.bump();
                self.push_delimiter(SyntaxKind::OpenParen);
                self.expect(SyntaxKind::OpenParen, "`(`");
                self.parse_expression_or_error();
                self.expect_closing(
                    SyntaxKind::CloseParen,
                    DiagnosticKind::UnclosedParen,
                    "`)`",
                    "__reftype expression",
                );
                self.finish_node();
            }
            SyntaxKind::KwRefvalue => {
                self.start_node(SyntaxKind::RefValueExpression);
                self.bump();
                self.push_delimiter(SyntaxKind::OpenParen);
                self.expect(SyntaxKind::OpenParen, "`(`");
                self.parse_expression_or_error();
                self.expect(SyntaxKind::Comma, "`,` before the target type");
                self.parse_type();
                self.expect_closing(
                    SyntaxKind::CloseParen,
                    DiagnosticKind::UnclosedParen,
                    "`)`",
                    "__refvalue expression",
                );
                self.finish_node();
            }
            SyntaxKind::Dot => {
                self.start_node(SyntaxKind::MemberBindingExpression);
                self.bump();
                self.parse_simple_name(GenericsMode::ByPolicy);
                self.finish_node();
            }
            SyntaxKind::OpenBracket => {
                self.start_node(SyntaxKind::ElementBindingExpression);
                self.parse_bracketed_argument_list();
                self.finish_node();
            }
            SyntaxKind::Garbage => self.error_and_bump(DiagnosticKind::UnrecognizedCharacter),
            _ => {
                self.parse_expression_or_error();
            }
        }
    }

    /// `typeof (T)` / `sizeof (T)` / `default (T)`
    fn parse_type_in_parens(&mut self, node: SyntaxKind) {
        self.start_node(node);
        self.bump(); // keyword
        self.push_delimiter(SyntaxKind::OpenParen);
        self.expect(SyntaxKind::OpenParen, "`(`");
        self.parse_type();
        self.expect_closing(
            SyntaxKind::CloseParen,
            DiagnosticKind::UnclosedParen,
            "`)`",
            "type operand",
        );
        self.finish_node();
    }

    /// Dispatch for `new`: anonymous object, implicit array, object, or
    /// array creation. `new` never acts as a modifier here.
    fn parse_creation_expression(&mut self) {
        self.assert_current(SyntaxKind::KwNew);
        match self.peek_nth(1) {
            SyntaxKind::OpenBrace => {
                self.parse_anonymous_object_creation_expression();
            }
            SyntaxKind::OpenBracket => {
                // `new [*,*] { ... }`
                self.start_node(SyntaxKind::ImplicitArrayCreationExpression);
                self.bump(); // 'new'
                self.eat_token(SyntaxKind::OpenBracket);
                while self.currently_is(SyntaxKind::Star) || self.currently_is(SyntaxKind::Comma) {
                    self.bump();
                }
                self.expect(SyntaxKind::CloseBracket, "`]`");
                self.parse_array_initializer_or_error();
                self.finish_node();
            }
            _ => {
                let checkpoint = self.checkpoint();
                self.bump(); // 'new'
                let shape = self.parse_type();
                if self.currently_is(SyntaxKind::OpenParen) {
                    self.start_node_at(checkpoint, SyntaxKind::ObjectCreationExpression);
                    self.parse_argument_list();
                    self.finish_node();
                } else if self.currently_is(SyntaxKind::OpenBrace) || shape == TypeShape::Array {
                    self.start_node_at(checkpoint, SyntaxKind::ArrayCreationExpression);
                    if self.currently_is(SyntaxKind::OpenBrace) {
                        self.parse_array_initializer();
                    }
                    self.finish_node();
                } else {
                    self.start_node_at(checkpoint, SyntaxKind::ObjectCreationExpression);
                    self.error_msg(DiagnosticKind::ExpectedToken, "`(` for the argument list");
                    self.finish_node();
                }
            }
        }
    }

    fn parse_anonymous_object_creation_expression(&mut self) {
        self.start_node(SyntaxKind::AnonymousObjectCreationExpression);
        self.bump(); // 'new'
        self.push_delimiter(SyntaxKind::OpenBrace);
        self.eat_token(SyntaxKind::OpenBrace);
        loop {
            if self.should_stop() || self.currently_is(SyntaxKind::CloseBrace) {
                break;
            }
            if self.currently_is(SyntaxKind::Identifier) && self.next_is(SyntaxKind::Equals) {
                self.parse_name_equals();
            }
            if !self.parse_expression_or_error() {
                break;
            }
            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            break;
        }
        self.expect_closing(
            SyntaxKind::CloseBrace,
            DiagnosticKind::UnclosedBrace,
            "`}`",
            "anonymous object",
        );
        self.finish_node();
    }

    /// `delegate (params)? { ... }`, optionally prefixed by `async`.
    fn parse_anonymous_method_expression(&mut self) {
        self.start_node(SyntaxKind::AnonymousMethodExpression);
        if self.at_contextual("async") {
            self.bump();
        }
        self.assert_current(SyntaxKind::KwDelegate);
        self.bump();
        if self.currently_is(SyntaxKind::OpenParen) {
            self.parse_parameter_list();
        }
        if self.currently_is(SyntaxKind::OpenBrace) {
            self.parse_block();
        } else {
            self.error_msg(DiagnosticKind::ExpectedToken, "`{` for the method body");
        }
        self.finish_node();
    }

    /// `operand switch { arm (, arm)* }` wrapped around the checkpoint.
    fn parse_switch_expression_suffix(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::SwitchExpression);
        self.bump(); // 'switch'
        self.push_delimiter(SyntaxKind::OpenBrace);
        self.eat_token(SyntaxKind::OpenBrace);
        loop {
            if self.should_stop() || self.currently_is(SyntaxKind::CloseBrace) {
                break;
            }
            self.parse_switch_expression_arm();
            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            break;
        }
        self.expect_closing(
            SyntaxKind::CloseBrace,
            DiagnosticKind::UnclosedBrace,
            "`}`",
            "switch expression",
        );
        self.finish_node();
    }

    fn parse_switch_expression_arm(&mut self) {
        self.start_node(SyntaxKind::SwitchExpressionArm);
        self.parse_pattern();
        if self.at_contextual("when") {
            self.parse_when_clause();
        }
        self.expect(SyntaxKind::FatArrow, "`=>` after the pattern");
        self.parse_expression_or_error();
        self.finish_node();
    }

    /// `( expr (, expr)* )`: plain expressions per the declaration surface.
    pub(crate) fn parse_argument_list(&mut self) {
        self.start_node(SyntaxKind::ArgumentList);
        self.push_delimiter(SyntaxKind::OpenParen);
        self.bump(); // '('
        loop {
            if self.should_stop() || self.currently_is(SyntaxKind::CloseParen) {
                break;
            }
            if !self.parse_expression_or_error() {
                break;
            }
            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            break;
        }
        self.expect_closing(
            SyntaxKind::CloseParen,
            DiagnosticKind::UnclosedParen,
            "`)`",
            "argument list",
        );
        self.finish_node();
    }

    /// `[ argument (, argument)* ]`: arguments carry optional `name:` and
    /// `ref`/`out`/`in` prefixes.
    pub(crate) fn parse_bracketed_argument_list(&mut self) {
        self.start_node(SyntaxKind::BracketedArgumentList);
        self.push_delimiter(SyntaxKind::OpenBracket);
        self.bump(); // '['
        loop {
            if self.should_stop() || self.currently_is(SyntaxKind::CloseBracket) {
                break;
            }
            self.parse_argument();
            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            break;
        }
        self.expect_closing(
            SyntaxKind::CloseBracket,
            DiagnosticKind::UnclosedBracket,
            "`]`",
            "bracketed argument list",
        );
        self.finish_node();
    }

    fn parse_argument(&mut self) {
        self.start_node(SyntaxKind::Argument);
        if self.currently_is(SyntaxKind::Identifier) && self.next_is(SyntaxKind::Colon) {
            self.parse_name_colon();
        }
        if self.currently_is_one_of(ARGUMENT_MODIFIERS) {
            self.bump();
        }
        self.parse_expression_or_error();
        self.finish_node();
    }

    pub(crate) fn parse_name_equals(&mut self) {
        self.start_node(SyntaxKind::NameEquals);
        self.parse_identifier_name();
        self.eat_token(SyntaxKind::Equals);
        self.finish_node();
    }

    pub(crate) fn parse_name_colon(&mut self) {
        self.start_node(SyntaxKind::NameColon);
        self.parse_identifier_name();
        self.eat_token(SyntaxKind::Colon);
        self.finish_node();
    }

    /// `{ initializer (, initializer)* }`: elements are expressions or
    /// nested initializers.
    pub(crate) fn parse_array_initializer(&mut self) {
        self.start_node(SyntaxKind::ArrayInitializer);
        self.push_delimiter(SyntaxKind::OpenBrace);
        self.bump(); // '{'
        loop {
            if self.should_stop() || self.currently_is(SyntaxKind::CloseBrace) {
                break;
            }
            if self.currently_is(SyntaxKind::OpenBrace) {
                self.parse_array_initializer();
            } else if !self.parse_expression_or_error() {
                break;
            }
            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            break;
        }
        self.expect_closing(
            SyntaxKind::CloseBrace,
            DiagnosticKind::UnclosedBrace,
            "`}`",
            "initializer",
        );
        self.finish_node();
    }

    fn parse_array_initializer_or_error(&mut self) {
        if self.currently_is(SyntaxKind::OpenBrace) {
            self.parse_array_initializer();
        } else {
            self.error_msg(DiagnosticKind::ExpectedToken, "`{` for the initializer");
        }
    }
}
