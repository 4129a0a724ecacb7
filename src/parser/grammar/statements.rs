//! Statement productions.
//!
//! Statement dispatch is keyword-first; statements that begin with a type
//! or an expression go through the declaration-vs-expression resolver
//! before committing.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::conflicts::LocalShape;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{LOCAL_MODIFIERS, TYPE_FIRST};

impl Parser<'_, '_> {
    pub(crate) fn parse_statement(&mut self) {
        if !self.enter_recursion() {
            self.start_node(SyntaxKind::Error);
            while !self.should_stop() {
                self.bump();
            }
            self.finish_node();
            return;
        }
        self.parse_statement_inner();
        self.exit_recursion();
    }

    fn parse_statement_inner(&mut self) {
        match self.current() {
            SyntaxKind::OpenBrace => self.parse_block(),
            SyntaxKind::Semicolon => {
                self.start_node(SyntaxKind::EmptyStatement);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::KwBreak => self.parse_keyword_semicolon(SyntaxKind::BreakStatement),
            SyntaxKind::KwContinue => self.parse_keyword_semicolon(SyntaxKind::ContinueStatement),
            SyntaxKind::KwDo => self.parse_do_statement(),
            SyntaxKind::KwFor => self.parse_for_statement(),
            SyntaxKind::KwForeach => self.parse_for_each_statement(false),
            SyntaxKind::KwGoto => self.parse_goto_statement(),
            SyntaxKind::KwIf => self.parse_if_statement(),
            SyntaxKind::KwLock => self.parse_paren_statement(SyntaxKind::LockStatement),
            SyntaxKind::KwWhile => self.parse_paren_statement(SyntaxKind::WhileStatement),
            SyntaxKind::KwReturn => self.parse_return_like(SyntaxKind::ReturnStatement),
            SyntaxKind::KwThrow => self.parse_return_like(SyntaxKind::ThrowStatement),
            SyntaxKind::KwSwitch => self.parse_switch_statement(),
            SyntaxKind::KwTry => self.parse_try_statement(),
            SyntaxKind::KwChecked | SyntaxKind::KwUnchecked => {
                if self.next_is(SyntaxKind::OpenBrace) {
                    self.start_node(SyntaxKind::CheckedStatement);
                    self.bump();
                    self.parse_block();
                    self.finish_node();
                } else {
                    self.parse_expression_statement();
                }
            }
            SyntaxKind::KwFixed => self.parse_fixed_statement(),
            SyntaxKind::KwUnsafe if self.next_is(SyntaxKind::OpenBrace) => {
                self.start_node(SyntaxKind::UnsafeStatement);
                self.bump();
                self.parse_block();
                self.finish_node();
            }
            SyntaxKind::KwUsing => {
                if self.next_is(SyntaxKind::OpenParen) {
                    self.parse_using_statement(false);
                } else {
                    self.parse_local_declaration_statement(false);
                }
            }
            SyntaxKind::Identifier => self.parse_identifier_led_statement(),
            SyntaxKind::ByteOrderMark => {
                self.error_and_bump(DiagnosticKind::MisplacedByteOrderMark)
            }
            SyntaxKind::Garbage => self.error_and_bump(DiagnosticKind::UnrecognizedCharacter),
            SyntaxKind::CloseBrace => self.error(DiagnosticKind::ExpectedStatement),
            _ => self.parse_declaration_or_expression_statement(),
        }
    }

    fn parse_identifier_led_statement(&mut self) {
        if self.next_is(SyntaxKind::Colon) {
            self.parse_labeled_statement();
            return;
        }
        match self.current_text() {
            "await" => match self.peek_nth(1) {
                SyntaxKind::KwForeach => self.parse_for_each_statement(true),
                SyntaxKind::KwUsing => {
                    if self.peek_nth(2) == SyntaxKind::OpenParen {
                        self.parse_using_statement(true);
                    } else {
                        self.parse_local_declaration_statement(true);
                    }
                }
                // `await expr;` wins over a declaration with type `await`.
                _ => self.parse_expression_statement(),
            },
            "yield"
                if matches!(
                    self.peek_nth(1),
                    SyntaxKind::KwReturn | SyntaxKind::KwBreak
                ) =>
            {
                self.parse_yield_statement()
            }
            _ => self.parse_declaration_or_expression_statement(),
        }
    }

    /// `declaration-vs-expression-statement` conflict: the resolver scans a
    /// type plus declarator or signature before committing.
    fn parse_declaration_or_expression_statement(&mut self) {
        match self.local_shape_ahead() {
            LocalShape::Declaration => self.parse_local_declaration_statement(false),
            LocalShape::Function => self.parse_local_function_statement(),
            LocalShape::Expression => {
                if self.at_expression_start() {
                    self.parse_expression_statement();
                } else {
                    self.error_and_bump(DiagnosticKind::ExpectedStatement);
                }
            }
        }
    }

    pub(crate) fn parse_block(&mut self) {
        self.assert_current(SyntaxKind::OpenBrace);
        self.start_node(SyntaxKind::Block);
        self.push_delimiter(SyntaxKind::OpenBrace);
        self.bump(); // '{'
        while !self.should_stop() && !self.currently_is(SyntaxKind::CloseBrace) {
            self.parse_statement();
        }
        self.expect_closing(
            SyntaxKind::CloseBrace,
            DiagnosticKind::UnclosedBrace,
            "`}`",
            "block",
        );
        self.finish_node();
    }

    fn parse_expression_statement(&mut self) {
        self.start_node(SyntaxKind::ExpressionStatement);
        self.parse_expression_or_error();
        self.expect(SyntaxKind::Semicolon, "`;` after expression");
        self.finish_node();
    }

    /// `break ;` / `continue ;`
    fn parse_keyword_semicolon(&mut self, node: SyntaxKind) {
        self.start_node(node);
        self.bump();
        self.expect(SyntaxKind::Semicolon, "`;`");
        self.finish_node();
    }

    /// `return [expr] ;` / `throw [expr] ;`
    fn parse_return_like(&mut self, node: SyntaxKind) {
        self.start_node(node);
        self.bump();
        if self.at_expression_start() {
            self.parse_expression();
        }
        self.expect(SyntaxKind::Semicolon, "`;`");
        self.finish_node();
    }

    /// `lock ( expr ) stmt` / `while ( expr ) stmt`
    fn parse_paren_statement(&mut self, node: SyntaxKind) {
        self.start_node(node);
        self.bump();
        self.expect(SyntaxKind::OpenParen, "`(`");
        self.parse_expression_or_error();
        self.expect(SyntaxKind::CloseParen, "`)`");
        self.parse_embedded_statement();
        self.finish_node();
    }

    fn parse_if_statement(&mut self) {
        self.start_node(SyntaxKind::IfStatement);
        self.bump(); // 'if'
        self.expect(SyntaxKind::OpenParen, "`(`");
        self.parse_expression_or_error();
        self.expect(SyntaxKind::CloseParen, "`)`");
        self.parse_embedded_statement();
        if self.currently_is(SyntaxKind::KwElse) {
            self.start_node(SyntaxKind::ElseClause);
            self.bump();
            self.parse_embedded_statement();
            self.finish_node();
        }
        self.finish_node();
    }

    fn parse_do_statement(&mut self) {
        self.start_node(SyntaxKind::DoStatement);
        self.bump(); // 'do'
        self.parse_embedded_statement();
        self.expect(SyntaxKind::KwWhile, "`while`");
        self.expect(SyntaxKind::OpenParen, "`(`");
        self.parse_expression_or_error();
        self.expect(SyntaxKind::CloseParen, "`)`");
        self.expect(SyntaxKind::Semicolon, "`;`");
        self.finish_node();
    }

    fn parse_for_statement(&mut self) {
        self.start_node(SyntaxKind::ForStatement);
        self.bump(); // 'for'
        self.expect(SyntaxKind::OpenParen, "`(`");
        if !self.currently_is(SyntaxKind::Semicolon) {
            if self.local_shape_ahead() == LocalShape::Declaration {
                self.parse_variable_declaration();
            } else {
                self.parse_expression_list();
            }
        }
        self.expect(SyntaxKind::Semicolon, "`;` after the initializer");
        if !self.currently_is(SyntaxKind::Semicolon) && self.at_expression_start() {
            self.parse_expression();
        }
        self.expect(SyntaxKind::Semicolon, "`;` after the condition");
        if self.at_expression_start() {
            self.parse_expression_list();
        }
        self.expect(SyntaxKind::CloseParen, "`)`");
        self.parse_embedded_statement();
        self.finish_node();
    }

    fn parse_expression_list(&mut self) {
        loop {
            if !self.parse_expression_or_error() {
                break;
            }
            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            break;
        }
    }

    /// `[await] foreach ( (T x | expr) in expr ) stmt`
    fn parse_for_each_statement(&mut self, with_await: bool) {
        self.start_node(SyntaxKind::ForEachStatement);
        if with_await {
            self.bump(); // 'await' identifier
        }
        self.eat_token(SyntaxKind::KwForeach);
        self.expect(SyntaxKind::OpenParen, "`(`");
        if self.typed_foreach_ahead() {
            self.parse_type();
            self.bump(); // the iteration variable
        } else {
            self.parse_expression_or_error();
        }
        self.expect(SyntaxKind::KwIn, "`in`");
        self.parse_expression_or_error();
        self.expect(SyntaxKind::CloseParen, "`)`");
        self.parse_embedded_statement();
        self.finish_node();
    }

    /// `goto label ;` / `goto case expr ;` / `goto default ;`
    fn parse_goto_statement(&mut self) {
        self.start_node(SyntaxKind::GotoStatement);
        self.bump(); // 'goto'
        match self.current() {
            SyntaxKind::KwCase => {
                self.bump();
                self.parse_expression_or_error();
            }
            SyntaxKind::KwDefault => {
                self.bump();
            }
            SyntaxKind::Identifier => {
                self.start_node(SyntaxKind::LabelName);
                self.bump();
                self.finish_node();
            }
            _ => self.error(DiagnosticKind::ExpectedIdentifier),
        }
        self.expect(SyntaxKind::Semicolon, "`;`");
        self.finish_node();
    }

    fn parse_labeled_statement(&mut self) {
        self.start_node(SyntaxKind::LabeledStatement);
        self.start_node(SyntaxKind::LabelName);
        self.bump(); // identifier
        self.finish_node();
        self.eat_token(SyntaxKind::Colon);
        self.parse_embedded_statement();
        self.finish_node();
    }

    fn parse_yield_statement(&mut self) {
        self.start_node(SyntaxKind::YieldStatement);
        self.bump(); // 'yield' identifier
        match self.current() {
            SyntaxKind::KwReturn => {
                self.bump();
                self.parse_expression_or_error();
            }
            SyntaxKind::KwBreak => {
                self.bump();
            }
            _ => unreachable!("caller checked for `return` or `break`"),
        }
        self.expect(SyntaxKind::Semicolon, "`;`");
        self.finish_node();
    }

    /// `[await] [using] modifiers variable_declaration ;`
    fn parse_local_declaration_statement(&mut self, with_await: bool) {
        self.start_node(SyntaxKind::LocalDeclarationStatement);
        if with_await {
            self.bump(); // 'await' identifier
        }
        self.eat_token(SyntaxKind::KwUsing);
        self.parse_local_modifiers();
        self.parse_variable_declaration();
        self.expect(SyntaxKind::Semicolon, "`;` after declaration");
        self.finish_node();
    }

    fn parse_local_function_statement(&mut self) {
        self.start_node(SyntaxKind::LocalFunctionStatement);
        self.parse_local_modifiers();
        self.parse_return_type();
        if self.currently_is(SyntaxKind::Identifier) {
            self.bump();
        } else {
            self.error(DiagnosticKind::ExpectedIdentifier);
        }
        if self.currently_is(SyntaxKind::LessThan) {
            self.parse_type_parameter_list();
        }
        if self.currently_is(SyntaxKind::OpenParen) {
            self.parse_parameter_list();
        } else {
            self.error_msg(DiagnosticKind::ExpectedToken, "`(` for the parameter list");
        }
        while self.at_contextual("where") {
            self.parse_type_parameter_constraints_clause();
        }
        self.parse_function_body();
        self.finish_node();
    }

    fn parse_local_modifiers(&mut self) {
        loop {
            if self.currently_is_one_of(LOCAL_MODIFIERS) {
                self.start_node(SyntaxKind::Modifier);
                self.bump();
                self.finish_node();
                continue;
            }
            if self.at_contextual("async")
                && (self.peek_nth(1) == SyntaxKind::KwVoid
                    || TYPE_FIRST.contains(self.peek_nth(1)))
            {
                self.start_node(SyntaxKind::Modifier);
                self.bump();
                self.finish_node();
                continue;
            }
            break;
        }
    }

    /// `[await] using ( declaration | expr ) stmt`
    fn parse_using_statement(&mut self, with_await: bool) {
        self.start_node(SyntaxKind::UsingStatement);
        if with_await {
            self.bump(); // 'await' identifier
        }
        self.eat_token(SyntaxKind::KwUsing);
        self.expect(SyntaxKind::OpenParen, "`(`");
        if self.local_shape_ahead() == LocalShape::Declaration {
            self.parse_variable_declaration();
        } else {
            self.parse_expression_or_error();
        }
        self.expect(SyntaxKind::CloseParen, "`)`");
        self.parse_embedded_statement();
        self.finish_node();
    }

    /// `fixed ( variable_declaration ) stmt`
    fn parse_fixed_statement(&mut self) {
        self.start_node(SyntaxKind::FixedStatement);
        self.bump(); // 'fixed'
        self.expect(SyntaxKind::OpenParen, "`(`");
        self.parse_variable_declaration();
        self.expect(SyntaxKind::CloseParen, "`)`");
        self.parse_embedded_statement();
        self.finish_node();
    }

    fn parse_switch_statement(&mut self) {
        self.start_node(SyntaxKind::SwitchStatement);
        self.bump(); // 'switch'
        self.expect(SyntaxKind::OpenParen, "`(`");
        self.parse_expression_or_error();
        self.expect(SyntaxKind::CloseParen, "`)`");
        self.push_delimiter(SyntaxKind::OpenBrace);
        if !self.expect(SyntaxKind::OpenBrace, "`{` for the switch body") {
            self.pop_delimiter();
            self.finish_node();
            return;
        }
        while !self.should_stop() && !self.currently_is(SyntaxKind::CloseBrace) {
            if self.at_switch_label() {
                self.parse_switch_section();
            } else {
                self.error_and_bump_msg(
                    DiagnosticKind::UnexpectedToken,
                    "expected `case`, `default`, or `}`",
                );
            }
        }
        self.expect_closing(
            SyntaxKind::CloseBrace,
            DiagnosticKind::UnclosedBrace,
            "`}`",
            "switch body",
        );
        self.finish_node();
    }

    fn at_switch_label(&mut self) -> bool {
        self.currently_is(SyntaxKind::KwCase)
            || (self.currently_is(SyntaxKind::KwDefault) && self.next_is(SyntaxKind::Colon))
    }

    /// One or more labels followed by one or more statements.
    fn parse_switch_section(&mut self) {
        self.start_node(SyntaxKind::SwitchSection);
        while self.at_switch_label() {
            if self.currently_is(SyntaxKind::KwCase) {
                self.parse_case_label();
            } else {
                self.start_node(SyntaxKind::DefaultSwitchLabel);
                self.bump(); // 'default'
                self.eat_token(SyntaxKind::Colon);
                self.finish_node();
            }
        }
        while !self.should_stop()
            && !self.currently_is(SyntaxKind::CloseBrace)
            && !self.at_switch_label()
        {
            self.parse_statement();
        }
        self.finish_node();
    }

    fn parse_try_statement(&mut self) {
        self.start_node(SyntaxKind::TryStatement);
        self.bump(); // 'try'
        if self.currently_is(SyntaxKind::OpenBrace) {
            self.parse_block();
        } else {
            self.error_msg(DiagnosticKind::ExpectedToken, "`{` after `try`");
        }
        while self.currently_is(SyntaxKind::KwCatch) {
            self.parse_catch_clause();
        }
        if self.currently_is(SyntaxKind::KwFinally) {
            self.start_node(SyntaxKind::FinallyClause);
            self.bump();
            if self.currently_is(SyntaxKind::OpenBrace) {
                self.parse_block();
            } else {
                self.error_msg(DiagnosticKind::ExpectedToken, "`{` after `finally`");
            }
            self.finish_node();
        }
        self.finish_node();
    }

    fn parse_catch_clause(&mut self) {
        self.start_node(SyntaxKind::CatchClause);
        self.bump(); // 'catch'
        if self.currently_is(SyntaxKind::OpenParen) {
            self.start_node(SyntaxKind::CatchDeclaration);
            self.bump();
            self.parse_type();
            if self.currently_is(SyntaxKind::Identifier) {
                self.bump();
            }
            self.expect(SyntaxKind::CloseParen, "`)`");
            self.finish_node();
        }
        if self.at_contextual("when") {
            self.start_node(SyntaxKind::CatchFilterClause);
            self.bump(); // 'when' identifier
            self.expect(SyntaxKind::OpenParen, "`(`");
            self.parse_expression_or_error();
            self.expect(SyntaxKind::CloseParen, "`)`");
            self.finish_node();
        }
        if self.currently_is(SyntaxKind::OpenBrace) {
            self.parse_block();
        } else {
            self.error_msg(DiagnosticKind::ExpectedToken, "`{` for the catch body");
        }
        self.finish_node();
    }
}
