//! Type references: predefined types, (qualified, generic) names, and the
//! `?` `*` `[]` suffix forms.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{PREDEFINED_TYPES, TYPE_FIRST};

/// Whether `<` after an identifier is unconditionally a type-argument list
/// (type context) or subject to the generic-name conflict policy
/// (expression context).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GenericsMode {
    Always,
    ByPolicy,
}

/// Summary of a parsed type, for callers that dispatch on its shape
/// (`new T(...)` vs `new T[...] {...}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TypeShape {
    NotAType,
    Simple,
    Array,
}

impl Parser<'_, '_> {
    /// `_type`: a predefined type or name, with any number of nullable,
    /// pointer, and array-rank suffixes.
    pub(crate) fn parse_type(&mut self) -> TypeShape {
        if !self.currently_is_one_of(TYPE_FIRST) {
            self.error(DiagnosticKind::ExpectedType);
            return TypeShape::NotAType;
        }

        let checkpoint = self.checkpoint();
        if self.currently_is_one_of(PREDEFINED_TYPES) {
            self.start_node(SyntaxKind::PredefinedType);
            self.bump();
            self.finish_node();
        } else {
            self.parse_name();
        }

        let mut shape = TypeShape::Simple;
        loop {
            match self.current() {
                SyntaxKind::Question => {
                    self.start_node_at(checkpoint, SyntaxKind::NullableType);
                    self.bump();
                    self.finish_node();
                    shape = TypeShape::Simple;
                }
                SyntaxKind::Star => {
                    self.start_node_at(checkpoint, SyntaxKind::PointerType);
                    self.bump();
                    self.finish_node();
                    shape = TypeShape::Simple;
                }
                SyntaxKind::OpenBracket => {
                    self.start_node_at(checkpoint, SyntaxKind::ArrayType);
                    self.parse_array_rank_specifier();
                    self.finish_node();
                    shape = TypeShape::Array;
                }
                _ => break,
            }
        }
        shape
    }

    /// `return_type`: `void` only counts as a type here.
    pub(crate) fn parse_return_type(&mut self) {
        if self.currently_is(SyntaxKind::KwVoid) {
            self.start_node(SyntaxKind::PredefinedType);
            self.bump();
            self.finish_node();
        } else {
            self.parse_type();
        }
    }

    /// `_name`: alias-qualified, qualified, generic, or plain. Generic
    /// arguments are unconditional (type context).
    pub(crate) fn parse_name(&mut self) {
        if !self.currently_is(SyntaxKind::Identifier) {
            self.error(DiagnosticKind::ExpectedIdentifier);
            return;
        }

        let checkpoint = self.checkpoint();

        if self.next_is(SyntaxKind::ColonColon) {
            // `global::X` and friends; the qualifier is lexically a plain
            // identifier.
            self.parse_identifier_name();
            self.start_node_at(checkpoint, SyntaxKind::AliasQualifiedName);
            self.eat_token(SyntaxKind::ColonColon);
            self.parse_simple_name(GenericsMode::Always);
            self.finish_node();
        } else {
            self.parse_simple_name(GenericsMode::Always);
        }

        while self.currently_is(SyntaxKind::Dot) {
            self.start_node_at(checkpoint, SyntaxKind::QualifiedName);
            self.bump(); // '.'
            self.parse_simple_name(GenericsMode::Always);
            self.finish_node();
        }
    }

    /// `_simple_name`: an identifier, or a generic name when `<` follows
    /// and the mode (or the conflict policy) commits to type arguments.
    pub(crate) fn parse_simple_name(&mut self, mode: GenericsMode) {
        if !self.currently_is(SyntaxKind::Identifier) {
            self.error(DiagnosticKind::ExpectedIdentifier);
            return;
        }

        let generic = self.next_is(SyntaxKind::LessThan)
            && match mode {
                GenericsMode::Always => true,
                GenericsMode::ByPolicy => self.generic_name_ahead(),
            };

        if generic {
            self.start_node(SyntaxKind::GenericName);
            self.bump(); // identifier
            self.parse_type_argument_list();
            self.finish_node();
        } else {
            self.parse_identifier_name();
        }
    }

    pub(crate) fn parse_identifier_name(&mut self) {
        self.assert_current(SyntaxKind::Identifier);
        self.start_node(SyntaxKind::IdentifierName);
        self.bump();
        self.finish_node();
    }

    /// `< T (, T)* >`
    pub(crate) fn parse_type_argument_list(&mut self) {
        self.start_node(SyntaxKind::TypeArgumentList);
        self.eat_token(SyntaxKind::LessThan);
        loop {
            if self.currently_is_one_of(TYPE_FIRST) {
                self.parse_type();
            } else {
                self.error(DiagnosticKind::ExpectedType);
                break;
            }
            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            break;
        }
        self.expect(
            SyntaxKind::GreaterThan,
            "`>` to close the type argument list",
        );
        self.finish_node();
    }

    /// `[ ... ]` after a type, with optional size expressions (`new int[5]`)
    /// and bare commas for multi-dimensional ranks (`int[,]`).
    pub(crate) fn parse_array_rank_specifier(&mut self) {
        self.start_node(SyntaxKind::ArrayRankSpecifier);
        self.push_delimiter(SyntaxKind::OpenBracket);
        self.bump(); // '['
        loop {
            if self.should_stop() || self.currently_is(SyntaxKind::CloseBracket) {
                break;
            }
            if self.currently_is(SyntaxKind::Comma) {
                self.bump();
                continue;
            }
            if self.at_expression_start() {
                self.parse_expression();
                continue;
            }
            break;
        }
        self.expect_closing(
            SyntaxKind::CloseBracket,
            DiagnosticKind::UnclosedBracket,
            "`]`",
            "array rank specifier",
        );
        self.finish_node();
    }
}
