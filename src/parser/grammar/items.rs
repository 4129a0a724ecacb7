//! Compilation units, directives, and declarations.
//!
//! Member dispatch is keyword-first after attribute lists and modifiers;
//! type-first members (fields, methods, properties, indexers, operators)
//! are shaped by a lookahead scan over the member name before committing
//! to a node kind.

use crate::diagnostics::DiagnosticKind;
use crate::parser::conflicts::scan_type_argument_list;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{
    MEMBER_MODIFIERS, OVERLOADABLE_OPERATORS, PARAMETER_MODIFIERS, TYPE_FIRST,
};
use crate::parser::grammar::types::GenericsMode;
use crate::parser::{FragmentKind, Parser};

/// Where a declaration appears; enum bodies and type-parameter lists never
/// consult this because their productions are only reachable from their
/// own context (the declared identifier-contexts conflict resolution).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DeclContext {
    TopLevel,
    Namespace,
    Type,
}

/// Shape of a type-first member, decided by scanning the dotted name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemberShape {
    Method,
    Property,
    Indexer,
    Field,
}

impl Parser<'_, '_> {
    /// Entry rule: optional byte-order mark, then declarations to end of
    /// input. Unconsumed input is impossible here: anything unrecognized
    /// becomes an `Error` node with a diagnostic.
    pub(crate) fn parse_compilation_unit(&mut self) {
        self.start_node(SyntaxKind::CompilationUnit);
        if self.pos == 0 && self.nth_raw(0) == SyntaxKind::ByteOrderMark {
            self.bump();
        }
        while !self.should_stop() {
            self.parse_top_level_declaration();
        }
        self.eat_trivia();
        self.finish_node();
    }

    /// Entry-per-fragment mode: the fragment shares every production with
    /// the top-level parse; trailing input is a syntax error.
    pub(crate) fn parse_fragment_root(&mut self, kind: FragmentKind) {
        self.start_node(SyntaxKind::Fragment);
        match kind {
            FragmentKind::Declaration => {
                if self.should_stop() {
                    self.error(DiagnosticKind::ExpectedMember);
                } else {
                    self.parse_top_level_declaration();
                }
            }
            FragmentKind::Statement => {
                if self.should_stop() {
                    self.error(DiagnosticKind::ExpectedStatement);
                } else {
                    self.parse_statement();
                }
            }
            FragmentKind::Expression => {
                self.parse_expression_or_error();
            }
        }
        if !self.should_stop() {
            self.error(DiagnosticKind::TrailingInput);
            self.start_node(SyntaxKind::Error);
            while !self.should_stop() {
                self.bump();
                self.skip_trivia_to_buffer();
            }
            self.finish_node();
        }
        self.eat_trivia();
        self.finish_node();
    }

    fn parse_top_level_declaration(&mut self) {
        match self.current() {
            SyntaxKind::ByteOrderMark => {
                self.error_and_bump(DiagnosticKind::MisplacedByteOrderMark)
            }
            SyntaxKind::Garbage => self.error_and_bump(DiagnosticKind::UnrecognizedCharacter),
            SyntaxKind::KwUsing => self.parse_using_directive(),
            SyntaxKind::KwExtern if self.extern_alias_ahead() => {
                self.parse_extern_alias_directive()
            }
            SyntaxKind::OpenBracket if self.global_attribute_ahead() => {
                self.parse_global_attribute_list()
            }
            _ => self.parse_member_declaration(DeclContext::TopLevel),
        }
    }

    fn extern_alias_ahead(&mut self) -> bool {
        let mut la = self.lookahead();
        if !la.at(SyntaxKind::KwExtern) {
            return false;
        }
        la.bump();
        la.at(SyntaxKind::Identifier) && la.text() == "alias"
    }

    fn global_attribute_ahead(&mut self) -> bool {
        let mut la = self.lookahead();
        la.bump(); // '['
        if !la.at(SyntaxKind::Identifier) || !matches!(la.text(), "assembly" | "module") {
            return false;
        }
        la.bump();
        la.at(SyntaxKind::Colon)
    }

    /// `using [static | alias =] name ;`
    fn parse_using_directive(&mut self) {
        self.start_node(SyntaxKind::UsingDirective);
        self.bump(); // 'using'
        if self.currently_is(SyntaxKind::KwStatic) {
            self.bump();
        } else if self.currently_is(SyntaxKind::Identifier) && self.next_is(SyntaxKind::Equals) {
            self.parse_name_equals();
        }
        self.parse_name();
        self.expect(SyntaxKind::Semicolon, "`;` after using directive");
        self.finish_node();
    }

    /// `extern alias name ;`
    fn parse_extern_alias_directive(&mut self) {
        self.start_node(SyntaxKind::ExternAliasDirective);
        self.bump(); // 'extern'
        self.eat_token(SyntaxKind::Identifier); // 'alias'
        if self.currently_is(SyntaxKind::Identifier) {
            self.bump();
        } else {
            self.error(DiagnosticKind::ExpectedIdentifier);
        }
        self.expect(SyntaxKind::Semicolon, "`;` after extern alias");
        self.finish_node();
    }

    /// `[assembly: ...]` / `[module: ...]`
    fn parse_global_attribute_list(&mut self) {
        self.start_node(SyntaxKind::GlobalAttributeList);
        self.push_delimiter(SyntaxKind::OpenBracket);
        self.bump(); // '['
        self.eat_token(SyntaxKind::Identifier); // 'assembly' / 'module'
        self.eat_token(SyntaxKind::Colon);
        loop {
            if self.should_stop() || self.currently_is(SyntaxKind::CloseBracket) {
                break;
            }
            if self.currently_is(SyntaxKind::Identifier) {
                self.parse_attribute();
            } else {
                self.error_and_bump(DiagnosticKind::ExpectedIdentifier);
            }
            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            break;
        }
        self.expect_closing(
            SyntaxKind::CloseBracket,
            DiagnosticKind::UnclosedBracket,
            "`]`",
            "global attribute list",
        );
        self.finish_node();
    }

    pub(super) fn parse_member_declaration(&mut self, ctx: DeclContext) {
        let checkpoint = self.checkpoint();
        self.parse_attribute_lists();
        self.parse_member_modifiers();

        match self.current() {
            SyntaxKind::KwClass => {
                self.parse_type_declaration(checkpoint, SyntaxKind::ClassDeclaration)
            }
            SyntaxKind::KwStruct => {
                self.parse_type_declaration(checkpoint, SyntaxKind::StructDeclaration)
            }
            SyntaxKind::KwInterface => {
                self.parse_type_declaration(checkpoint, SyntaxKind::InterfaceDeclaration)
            }
            SyntaxKind::KwEnum => self.parse_enum_declaration(checkpoint),
            SyntaxKind::KwDelegate => self.parse_delegate_declaration(checkpoint),
            SyntaxKind::KwNamespace if ctx != DeclContext::Type => {
                self.parse_namespace_declaration(checkpoint)
            }
            SyntaxKind::KwEvent => self.parse_event_declaration(checkpoint),
            SyntaxKind::Tilde => self.parse_destructor_declaration(checkpoint),
            SyntaxKind::KwImplicit | SyntaxKind::KwExplicit => {
                self.parse_conversion_operator_declaration(checkpoint)
            }
            SyntaxKind::Identifier if self.next_is(SyntaxKind::OpenParen) => {
                self.parse_constructor_declaration(checkpoint)
            }
            SyntaxKind::KwVoid => self.parse_type_first_member(checkpoint),
            kind if TYPE_FIRST.contains(kind) => self.parse_type_first_member(checkpoint),
            _ => {
                self.error_and_bump_msg(DiagnosticKind::ExpectedMember, "not a valid declaration");
            }
        }
    }

    pub(super) fn parse_attribute_lists(&mut self) {
        while self.currently_is(SyntaxKind::OpenBracket) {
            self.parse_attribute_list();
        }
    }

    fn parse_attribute_list(&mut self) {
        self.start_node(SyntaxKind::AttributeList);
        self.push_delimiter(SyntaxKind::OpenBracket);
        self.bump(); // '['
        loop {
            if self.should_stop() || self.currently_is(SyntaxKind::CloseBracket) {
                break;
            }
            if self.currently_is(SyntaxKind::Identifier) {
                self.parse_attribute();
            } else {
                self.error_and_bump(DiagnosticKind::ExpectedIdentifier);
            }
            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            break;
        }
        self.expect_closing(
            SyntaxKind::CloseBracket,
            DiagnosticKind::UnclosedBracket,
            "`]`",
            "attribute list",
        );
        self.finish_node();
    }

    fn parse_attribute(&mut self) {
        self.start_node(SyntaxKind::Attribute);
        self.bump(); // attribute name
        if self.currently_is(SyntaxKind::OpenParen) {
            self.parse_attribute_argument_list();
        }
        self.finish_node();
    }

    fn parse_attribute_argument_list(&mut self) {
        self.start_node(SyntaxKind::AttributeArgumentList);
        self.push_delimiter(SyntaxKind::OpenParen);
        self.bump(); // '('
        loop {
            if self.should_stop() || self.currently_is(SyntaxKind::CloseParen) {
                break;
            }
            self.parse_attribute_argument();
            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            break;
        }
        self.expect_closing(
            SyntaxKind::CloseParen,
            DiagnosticKind::UnclosedParen,
            "`)`",
            "attribute arguments",
        );
        self.finish_node();
    }

    fn parse_attribute_argument(&mut self) {
        self.start_node(SyntaxKind::AttributeArgument);
        if self.currently_is(SyntaxKind::Identifier) {
            if self.next_is(SyntaxKind::Equals) {
                self.parse_name_equals();
            } else if self.next_is(SyntaxKind::Colon) {
                self.parse_name_colon();
            }
        }
        self.parse_expression_or_error();
        self.finish_node();
    }

    fn parse_member_modifiers(&mut self) {
        loop {
            if self.currently_is_one_of(MEMBER_MODIFIERS) {
                self.start_node(SyntaxKind::Modifier);
                self.bump();
                self.finish_node();
                continue;
            }
            if (self.at_contextual("async") || self.at_contextual("partial"))
                && self.modifier_continues_declaration()
            {
                self.start_node(SyntaxKind::Modifier);
                self.bump();
                self.finish_node();
                continue;
            }
            break;
        }
    }

    fn modifier_continues_declaration(&mut self) -> bool {
        matches!(
            self.peek_nth(1),
            SyntaxKind::KwVoid | SyntaxKind::KwClass | SyntaxKind::KwStruct
                | SyntaxKind::KwInterface | SyntaxKind::KwDelegate
        ) || TYPE_FIRST.contains(self.peek_nth(1))
    }

    /// `class` / `struct` / `interface` declarations share one shape.
    fn parse_type_declaration(&mut self, checkpoint: rowan::Checkpoint, kind: SyntaxKind) {
        self.start_node_at(checkpoint, kind);
        self.bump(); // keyword
        if self.currently_is(SyntaxKind::Identifier) {
            self.bump();
        } else {
            self.error(DiagnosticKind::ExpectedIdentifier);
        }
        if self.currently_is(SyntaxKind::LessThan) {
            self.parse_type_parameter_list();
        }
        if self.currently_is(SyntaxKind::Colon) {
            self.parse_base_list();
        }
        while self.at_contextual("where") {
            self.parse_type_parameter_constraints_clause();
        }
        self.parse_class_body();
        self.eat_token(SyntaxKind::Semicolon);
        self.finish_node();
    }

    fn parse_class_body(&mut self) {
        self.start_node(SyntaxKind::ClassBody);
        self.push_delimiter(SyntaxKind::OpenBrace);
        if !self.expect(SyntaxKind::OpenBrace, "`{` to open the type body") {
            self.pop_delimiter();
            self.finish_node();
            return;
        }
        while !self.should_stop() && !self.currently_is(SyntaxKind::CloseBrace) {
            self.parse_member_declaration(DeclContext::Type);
        }
        self.expect_closing(
            SyntaxKind::CloseBrace,
            DiagnosticKind::UnclosedBrace,
            "`}`",
            "type body",
        );
        self.finish_node();
    }

    fn parse_enum_declaration(&mut self, checkpoint: rowan::Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::EnumDeclaration);
        self.bump(); // 'enum'
        if self.currently_is(SyntaxKind::Identifier) {
            self.bump();
        } else {
            self.error(DiagnosticKind::ExpectedIdentifier);
        }
        if self.currently_is(SyntaxKind::Colon) {
            self.parse_base_list();
        }
        self.push_delimiter(SyntaxKind::OpenBrace);
        if !self.expect(SyntaxKind::OpenBrace, "`{` to open the enum body") {
            self.pop_delimiter();
            self.finish_node();
            return;
        }
        loop {
            if self.should_stop() || self.currently_is(SyntaxKind::CloseBrace) {
                break;
            }
            if self.currently_is(SyntaxKind::Identifier)
                || self.currently_is(SyntaxKind::OpenBracket)
            {
                self.parse_enum_member_declaration();
            } else {
                self.error_and_bump(DiagnosticKind::ExpectedIdentifier);
                continue;
            }
            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            if self.currently_is(SyntaxKind::CloseBrace) || self.should_stop() {
                break;
            }
            self.error_msg(DiagnosticKind::ExpectedToken, "`,` between enum members");
        }
        self.expect_closing(
            SyntaxKind::CloseBrace,
            DiagnosticKind::UnclosedBrace,
            "`}`",
            "enum body",
        );
        self.eat_token(SyntaxKind::Semicolon);
        self.finish_node();
    }

    /// Only reachable from an enum body: the identifier-contexts conflict
    /// is resolved by construction.
    fn parse_enum_member_declaration(&mut self) {
        self.start_node(SyntaxKind::EnumMemberDeclaration);
        self.parse_attribute_lists();
        if self.currently_is(SyntaxKind::Identifier) {
            self.bump();
        } else {
            self.error(DiagnosticKind::ExpectedIdentifier);
        }
        if self.currently_is(SyntaxKind::Equals) {
            self.parse_equals_value_clause();
        }
        self.finish_node();
    }

    fn parse_delegate_declaration(&mut self, checkpoint: rowan::Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::DelegateDeclaration);
        self.bump(); // 'delegate'
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
        self.expect(SyntaxKind::Semicolon, "`;` after delegate declaration");
        self.finish_node();
    }

    fn parse_namespace_declaration(&mut self, checkpoint: rowan::Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::NamespaceDeclaration);
        self.bump(); // 'namespace'
        self.parse_name();
        self.push_delimiter(SyntaxKind::OpenBrace);
        if !self.expect(SyntaxKind::OpenBrace, "`{` to open the namespace body") {
            self.pop_delimiter();
            self.finish_node();
            return;
        }
        while !self.should_stop() && !self.currently_is(SyntaxKind::CloseBrace) {
            match self.current() {
                SyntaxKind::KwExtern if self.extern_alias_ahead() => {
                    self.parse_extern_alias_directive()
                }
                SyntaxKind::KwUsing => self.parse_using_directive(),
                _ => self.parse_member_declaration(DeclContext::Namespace),
            }
        }
        self.expect_closing(
            SyntaxKind::CloseBrace,
            DiagnosticKind::UnclosedBrace,
            "`}`",
            "namespace body",
        );
        self.eat_token(SyntaxKind::Semicolon);
        self.finish_node();
    }

    /// `event T name { accessors }` vs `event T declarators ;`, the
    /// declared event-vs-variable-declarator conflict. Only `{` after the
    /// (possibly dotted) name selects the accessor form.
    fn parse_event_declaration(&mut self, checkpoint: rowan::Checkpoint) {
        self.bump(); // 'event'
        let decl_checkpoint = self.checkpoint();
        self.parse_type();

        if self.event_accessor_form_ahead() {
            self.start_node_at(checkpoint, SyntaxKind::EventDeclaration);
            self.parse_explicit_interface_and_name(false);
            if self.currently_is(SyntaxKind::OpenBrace) {
                self.parse_accessor_list();
            }
            self.finish_node();
        } else {
            self.start_node_at(decl_checkpoint, SyntaxKind::VariableDeclaration);
            self.parse_variable_declarators();
            self.finish_node();
            self.start_node_at(checkpoint, SyntaxKind::EventFieldDeclaration);
            self.expect(SyntaxKind::Semicolon, "`;` after event declaration");
            self.finish_node();
        }
    }

    fn event_accessor_form_ahead(&mut self) -> bool {
        let mut la = self.lookahead();
        loop {
            if !la.at(SyntaxKind::Identifier) {
                return false;
            }
            la.bump();
            if la.at(SyntaxKind::LessThan) {
                let mut probe = la.clone();
                if scan_type_argument_list(&mut probe) {
                    la = probe;
                }
            }
            if la.at(SyntaxKind::Dot) {
                la.bump();
                continue;
            }
            break;
        }
        la.at(SyntaxKind::OpenBrace)
    }

    fn parse_destructor_declaration(&mut self, checkpoint: rowan::Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::DestructorDeclaration);
        self.bump(); // '~'
        if self.currently_is(SyntaxKind::Identifier) {
            self.bump();
        } else {
            self.error(DiagnosticKind::ExpectedIdentifier);
        }
        if self.currently_is(SyntaxKind::OpenParen) {
            self.parse_parameter_list();
        } else {
            self.error_msg(DiagnosticKind::ExpectedToken, "`(` for the parameter list");
        }
        self.parse_function_body();
        self.finish_node();
    }

    /// `implicit operator T (...)` / `explicit operator T (...)`
    fn parse_conversion_operator_declaration(&mut self, checkpoint: rowan::Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::ConversionOperatorDeclaration);
        self.bump(); // 'implicit' / 'explicit'
        self.expect(SyntaxKind::KwOperator, "`operator`");
        self.parse_type();
        if self.currently_is(SyntaxKind::OpenParen) {
            self.parse_parameter_list();
        } else {
            self.error_msg(DiagnosticKind::ExpectedToken, "`(` for the parameter list");
        }
        self.parse_function_body();
        self.finish_node();
    }

    fn parse_constructor_declaration(&mut self, checkpoint: rowan::Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::ConstructorDeclaration);
        self.bump(); // name
        self.parse_parameter_list();
        if self.currently_is(SyntaxKind::Colon) {
            self.start_node(SyntaxKind::ConstructorInitializer);
            self.bump(); // ':'
            if self.currently_is(SyntaxKind::KwBase) || self.currently_is(SyntaxKind::KwThis) {
                self.bump();
            } else {
                self.error_msg(DiagnosticKind::ExpectedToken, "`base` or `this`");
            }
            if self.currently_is(SyntaxKind::OpenParen) {
                self.parse_argument_list();
            } else {
                self.error_msg(DiagnosticKind::ExpectedToken, "`(` for the argument list");
            }
            self.finish_node();
        }
        self.parse_function_body();
        self.finish_node();
    }

    /// Members that start with a return type: operator, indexer, method,
    /// property, or field, shaped by scanning the member name.
    fn parse_type_first_member(&mut self, checkpoint: rowan::Checkpoint) {
        let decl_checkpoint = self.checkpoint();
        self.parse_return_type();

        if self.currently_is(SyntaxKind::KwOperator) {
            self.start_node_at(checkpoint, SyntaxKind::OperatorDeclaration);
            self.bump();
            self.parse_operator_token();
            if self.currently_is(SyntaxKind::OpenParen) {
                self.parse_parameter_list();
            } else {
                self.error_msg(DiagnosticKind::ExpectedToken, "`(` for the parameter list");
            }
            self.parse_function_body();
            self.finish_node();
            return;
        }

        match self.member_shape() {
            MemberShape::Indexer => {
                self.start_node_at(checkpoint, SyntaxKind::IndexerDeclaration);
                if self.currently_is(SyntaxKind::Identifier) {
                    self.parse_explicit_interface_for_this();
                }
                self.expect(SyntaxKind::KwThis, "`this`");
                if self.currently_is(SyntaxKind::OpenBracket) {
                    self.parse_bracketed_parameter_list();
                } else {
                    self.error_msg(DiagnosticKind::ExpectedToken, "`[` for the indexer parameters");
                }
                if self.currently_is(SyntaxKind::FatArrow) {
                    self.parse_arrow_expression_clause();
                    self.expect(SyntaxKind::Semicolon, "`;` after expression body");
                } else if self.currently_is(SyntaxKind::OpenBrace) {
                    self.parse_accessor_list();
                } else {
                    self.error_msg(DiagnosticKind::ExpectedToken, "`{` or `=>`");
                }
                self.finish_node();
            }
            MemberShape::Method => {
                self.start_node_at(checkpoint, SyntaxKind::MethodDeclaration);
                self.parse_explicit_interface_and_name(true);
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
            MemberShape::Property => {
                self.start_node_at(checkpoint, SyntaxKind::PropertyDeclaration);
                self.parse_explicit_interface_and_name(false);
                if self.currently_is(SyntaxKind::OpenBrace) {
                    self.parse_accessor_list();
                    if self.currently_is(SyntaxKind::Equals) {
                        self.parse_equals_value_clause();
                        self.expect(SyntaxKind::Semicolon, "`;` after property initializer");
                    }
                } else if self.currently_is(SyntaxKind::FatArrow) {
                    self.parse_arrow_expression_clause();
                    self.expect(SyntaxKind::Semicolon, "`;` after expression body");
                } else {
                    self.error_msg(DiagnosticKind::ExpectedToken, "`{` or `=>`");
                }
                self.finish_node();
            }
            MemberShape::Field => {
                self.start_node_at(decl_checkpoint, SyntaxKind::VariableDeclaration);
                self.parse_variable_declarators();
                self.finish_node();
                self.start_node_at(checkpoint, SyntaxKind::FieldDeclaration);
                self.expect(SyntaxKind::Semicolon, "`;` after field declaration");
                self.finish_node();
            }
        }
    }

    fn member_shape(&mut self) -> MemberShape {
        let mut la = self.lookahead();
        loop {
            if la.at(SyntaxKind::KwThis) {
                return MemberShape::Indexer;
            }
            if !la.at(SyntaxKind::Identifier) {
                return MemberShape::Field;
            }
            la.bump();
            if la.at(SyntaxKind::LessThan) {
                let mut probe = la.clone();
                if scan_type_argument_list(&mut probe) {
                    la = probe;
                } else {
                    break;
                }
            }
            if la.at(SyntaxKind::Dot) {
                la.bump();
                continue;
            }
            break;
        }
        match la.peek() {
            SyntaxKind::OpenParen => MemberShape::Method,
            SyntaxKind::OpenBrace | SyntaxKind::FatArrow => MemberShape::Property,
            _ => MemberShape::Field,
        }
    }

    /// Optional `I.`-style qualifier followed by the member name itself.
    fn parse_explicit_interface_and_name(&mut self, allow_type_params: bool) {
        if self.explicit_interface_ahead() {
            let checkpoint = self.checkpoint();
            self.parse_simple_name(GenericsMode::Always);
            loop {
                if !self.currently_is(SyntaxKind::Dot) {
                    break;
                }
                if self.at_last_dot_before_name() {
                    break;
                }
                self.start_node_at(checkpoint, SyntaxKind::QualifiedName);
                self.bump(); // '.'
                self.parse_simple_name(GenericsMode::Always);
                self.finish_node();
            }
            if self.currently_is(SyntaxKind::Dot) {
                self.bump();
            }
            self.start_node_at(checkpoint, SyntaxKind::ExplicitInterfaceSpecifier);
            self.finish_node();
        }

        if self.currently_is(SyntaxKind::Identifier) {
            self.bump();
        } else {
            self.error(DiagnosticKind::ExpectedIdentifier);
        }
        if allow_type_params && self.currently_is(SyntaxKind::LessThan) {
            self.parse_type_parameter_list();
        }
    }

    fn explicit_interface_ahead(&mut self) -> bool {
        let mut la = self.lookahead();
        let mut dotted = false;
        loop {
            if !la.at(SyntaxKind::Identifier) {
                break;
            }
            la.bump();
            if la.at(SyntaxKind::LessThan) {
                let mut probe = la.clone();
                if scan_type_argument_list(&mut probe) {
                    la = probe;
                }
            }
            if la.at(SyntaxKind::Dot) {
                la.bump();
                dotted = true;
                continue;
            }
            break;
        }
        dotted
    }

    fn at_last_dot_before_name(&mut self) -> bool {
        let mut la = self.lookahead();
        la.bump(); // '.'
        if !la.at(SyntaxKind::Identifier) {
            return true;
        }
        la.bump();
        if la.at(SyntaxKind::LessThan) {
            let mut probe = la.clone();
            if scan_type_argument_list(&mut probe) {
                la = probe;
            }
        }
        !la.at(SyntaxKind::Dot)
    }

    /// The qualifier of an explicit-interface indexer: everything up to
    /// (and including) the dot before `this`.
    fn parse_explicit_interface_for_this(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_simple_name(GenericsMode::Always);
        while self.currently_is(SyntaxKind::Dot) && !self.next_is(SyntaxKind::KwThis) {
            self.start_node_at(checkpoint, SyntaxKind::QualifiedName);
            self.bump(); // '.'
            self.parse_simple_name(GenericsMode::Always);
            self.finish_node();
        }
        if self.currently_is(SyntaxKind::Dot) {
            self.bump();
        }
        self.start_node_at(checkpoint, SyntaxKind::ExplicitInterfaceSpecifier);
        self.finish_node();
    }

    fn parse_operator_token(&mut self) {
        if self.at_glued_pair(SyntaxKind::GreaterThan, SyntaxKind::GreaterThan) {
            self.bump();
            self.bump();
            return;
        }
        if self.currently_is_one_of(OVERLOADABLE_OPERATORS) {
            self.bump();
            return;
        }
        self.error_msg(DiagnosticKind::ExpectedToken, "an overloadable operator");
    }

    /// `< ident (, ident)* >`: bare identifiers only, unlike a
    /// type-argument list (the declared identifier-contexts conflict).
    pub(crate) fn parse_type_parameter_list(&mut self) {
        self.start_node(SyntaxKind::TypeParameterList);
        self.bump(); // '<'
        loop {
            if self.currently_is(SyntaxKind::Identifier) {
                self.bump();
            } else {
                self.error(DiagnosticKind::ExpectedIdentifier);
                break;
            }
            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            break;
        }
        self.expect(
            SyntaxKind::GreaterThan,
            "`>` to close the type parameter list",
        );
        self.finish_node();
    }

    fn parse_base_list(&mut self) {
        self.start_node(SyntaxKind::BaseList);
        self.bump(); // ':'
        loop {
            self.parse_type();
            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            break;
        }
        self.finish_node();
    }

    /// `where T : constraint (, constraint)*`
    pub(crate) fn parse_type_parameter_constraints_clause(&mut self) {
        self.start_node(SyntaxKind::TypeParameterConstraintsClause);
        self.bump(); // 'where' identifier
        if self.currently_is(SyntaxKind::Identifier) {
            self.bump();
        } else {
            self.error(DiagnosticKind::ExpectedIdentifier);
        }
        self.expect(SyntaxKind::Colon, "`:` after the constrained parameter");
        loop {
            match self.current() {
                SyntaxKind::KwClass | SyntaxKind::KwStruct => self.bump(),
                SyntaxKind::KwNew => {
                    self.start_node(SyntaxKind::ConstructorConstraint);
                    self.bump();
                    self.expect(SyntaxKind::OpenParen, "`(`");
                    self.expect(SyntaxKind::CloseParen, "`)`");
                    self.finish_node();
                }
                kind if TYPE_FIRST.contains(kind) => {
                    self.start_node(SyntaxKind::TypeConstraint);
                    self.parse_type();
                    self.finish_node();
                }
                _ => {
                    self.error(DiagnosticKind::ExpectedType);
                    break;
                }
            }
            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            break;
        }
        self.finish_node();
    }

    pub(crate) fn parse_parameter_list(&mut self) {
        self.assert_current(SyntaxKind::OpenParen);
        self.start_node(SyntaxKind::ParameterList);
        self.push_delimiter(SyntaxKind::OpenParen);
        self.bump(); // '('
        loop {
            if self.should_stop() || self.currently_is(SyntaxKind::CloseParen) {
                break;
            }
            self.parse_parameter_or_array();
            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            break;
        }
        self.expect_closing(
            SyntaxKind::CloseParen,
            DiagnosticKind::UnclosedParen,
            "`)`",
            "parameter list",
        );
        self.finish_node();
    }

    fn parse_bracketed_parameter_list(&mut self) {
        self.start_node(SyntaxKind::BracketedParameterList);
        self.push_delimiter(SyntaxKind::OpenBracket);
        self.bump(); // '['
        loop {
            if self.should_stop() || self.currently_is(SyntaxKind::CloseBracket) {
                break;
            }
            self.parse_parameter_or_array();
            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            break;
        }
        self.expect_closing(
            SyntaxKind::CloseBracket,
            DiagnosticKind::UnclosedBracket,
            "`]`",
            "parameter list",
        );
        self.finish_node();
    }

    fn parse_parameter_or_array(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_attribute_lists();

        if self.currently_is(SyntaxKind::KwParams) {
            self.start_node_at(checkpoint, SyntaxKind::ParameterArray);
            self.bump();
            self.parse_type();
            if self.currently_is(SyntaxKind::Identifier) {
                self.bump();
            } else {
                self.error(DiagnosticKind::ExpectedIdentifier);
            }
            self.finish_node();
            return;
        }

        self.start_node_at(checkpoint, SyntaxKind::Parameter);
        if self.currently_is_one_of(PARAMETER_MODIFIERS) {
            self.start_node(SyntaxKind::ParameterModifier);
            self.bump();
            self.finish_node();
        }
        if self.currently_is(SyntaxKind::Identifier)
            && matches!(
                self.peek_nth(1),
                SyntaxKind::Comma | SyntaxKind::CloseParen | SyntaxKind::Equals
            )
        {
            // untyped parameter (anonymous-method style)
            self.bump();
        } else if self.currently_is_one_of(TYPE_FIRST) {
            self.parse_type();
            if self.currently_is(SyntaxKind::Identifier) {
                self.bump();
            } else {
                self.error(DiagnosticKind::ExpectedIdentifier);
            }
        } else if matches!(
            self.current(),
            SyntaxKind::CloseBrace | SyntaxKind::Semicolon
        ) {
            // don't swallow the enclosing construct's terminator
            self.error_msg(DiagnosticKind::ExpectedType, "parameter type or name");
        } else {
            self.error_and_bump_msg(DiagnosticKind::ExpectedType, "parameter type or name");
        }
        if self.currently_is(SyntaxKind::Equals) {
            self.parse_equals_value_clause();
        }
        self.finish_node();
    }

    fn parse_accessor_list(&mut self) {
        self.assert_current(SyntaxKind::OpenBrace);
        self.start_node(SyntaxKind::AccessorList);
        self.push_delimiter(SyntaxKind::OpenBrace);
        self.bump(); // '{'
        loop {
            if self.should_stop() || self.currently_is(SyntaxKind::CloseBrace) {
                break;
            }
            if self.currently_is(SyntaxKind::OpenBracket)
                || self.currently_is(SyntaxKind::Identifier)
                || self.currently_is_one_of(MEMBER_MODIFIERS)
            {
                self.parse_accessor_declaration();
            } else {
                self.error_and_bump_msg(DiagnosticKind::UnexpectedToken, "expected an accessor");
            }
        }
        self.expect_closing(
            SyntaxKind::CloseBrace,
            DiagnosticKind::UnclosedBrace,
            "`}`",
            "accessor list",
        );
        self.finish_node();
    }

    /// `get` / `set` / `add` / `remove` are ordinary identifiers here.
    fn parse_accessor_declaration(&mut self) {
        self.start_node(SyntaxKind::AccessorDeclaration);
        self.parse_attribute_lists();
        self.parse_member_modifiers();
        if self.currently_is(SyntaxKind::Identifier) {
            self.bump();
        } else {
            self.error(DiagnosticKind::ExpectedIdentifier);
        }
        self.parse_function_body();
        self.finish_node();
    }

    /// `T declarator (, declarator)*`
    pub(crate) fn parse_variable_declaration(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_type();
        self.start_node_at(checkpoint, SyntaxKind::VariableDeclaration);
        self.parse_variable_declarators();
        self.finish_node();
    }

    pub(crate) fn parse_variable_declarators(&mut self) {
        loop {
            self.parse_variable_declarator();
            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            break;
        }
    }

    fn parse_variable_declarator(&mut self) {
        self.start_node(SyntaxKind::VariableDeclarator);
        if self.currently_is(SyntaxKind::Identifier) {
            self.bump();
        } else {
            self.error(DiagnosticKind::ExpectedIdentifier);
        }
        if self.currently_is(SyntaxKind::OpenBracket) {
            // fixed-size buffer declarator
            self.parse_bracketed_argument_list();
        }
        if self.currently_is(SyntaxKind::Equals) {
            self.parse_equals_value_clause();
        }
        self.finish_node();
    }

    pub(crate) fn parse_equals_value_clause(&mut self) {
        self.start_node(SyntaxKind::EqualsValueClause);
        self.bump(); // '='
        if self.currently_is(SyntaxKind::OpenBrace) {
            self.parse_array_initializer();
        } else {
            self.parse_expression_or_error();
        }
        self.finish_node();
    }
}
