//! Declared conflict sets and their resolution policies.
//!
//! C#'s surface syntax overlaps on shared prefixes in a handful of known
//! places (`a<b` starting either a generic name or a comparison chain,
//! `(T)` starting either a cast or a parenthesized expression, a statement
//! starting either a declaration or an expression). Each overlap is
//! declared once in [`CONFLICTS`] with a written policy, and resolved by a
//! bounded speculative scan over the token stream.
//!
//! Speculation never builds tree nodes: a [`Lookahead`] is a cursor
//! (position + fuel) over the already-lexed tokens, so rolling back is
//! free. Fuel bounds the scan window; running out is surfaced as an
//! `AmbiguousSyntax` diagnostic and resolved to the conservative
//! alternative rather than looping.

use super::core::Parser;
use super::cst::token_sets::{
    EXPR_FIRST, GENERIC_NAME_FOLLOW, LOCAL_MODIFIERS, PREDEFINED_TYPES, TYPE_FIRST,
};
use super::cst::{SyntaxKind, TokenSet};
use super::lexer::{Token, token_text};
use crate::diagnostics::DiagnosticKind;

use SyntaxKind::*;

/// How many tokens a single speculative scan may inspect.
const LOOKAHEAD_FUEL: u32 = 1024;

/// A named group of productions known to overlap on a shared input prefix,
/// with the policy that picks one. Part of the parser's immutable
/// configuration; each set is pinned by a regression test.
#[derive(Debug, Clone, Copy)]
pub struct ConflictSet {
    pub name: &'static str,
    pub members: &'static [SyntaxKind],
    pub policy: &'static str,
}

pub const EXPRESSION_VS_GENERIC_NAME: ConflictSet = ConflictSet {
    name: "expression-vs-generic-name",
    members: &[BinaryExpression, GenericName],
    policy: "`ident <` commits to a type-argument list only when the list scans to a \
             closing `>` whose follow token cannot begin a relational right-hand side; \
             otherwise `<` is a relational operator",
};

pub const CAST_VS_PARENTHESIZED: ConflictSet = ConflictSet {
    name: "cast-vs-parenthesized-expression",
    members: &[CastExpression, ParenthesizedExpression],
    policy: "`( T )` is a cast when T scans as a type and the token after `)` can begin \
             a unary operand; a predefined type is always a cast",
};

pub const IDENTIFIER_CONTEXTS: ConflictSet = ConflictSet {
    name: "identifier-vs-enum-member-vs-type-parameter",
    members: &[IdentifierName, EnumMemberDeclaration, TypeParameterList],
    policy: "resolved by the enclosing production: enum bodies only invoke the member \
             production, type-parameter positions only accept bare identifier lists",
};

pub const ANONYMOUS_METHOD: ConflictSet = ConflictSet {
    name: "anonymous-method-vs-expression",
    members: &[AnonymousMethodExpression],
    policy: "`delegate` in expression position always begins an anonymous method; the \
             alternative is listed first in the primary-expression choice",
};

pub const SWITCH_LABELS: ConflictSet = ConflictSet {
    name: "constant-label-vs-pattern-label",
    members: &[CaseSwitchLabel, CasePatternSwitchLabel, ConstantPattern],
    policy: "a `case` label stays a constant label unless it has a pattern-only shape \
             (`var`, `_`, type + designation) or a trailing `when` clause; pattern \
             productions only activate inside `case` labels and switch arms",
};

pub const MODIFIER_VS_OBJECT_CREATION: ConflictSet = ConflictSet {
    name: "modifier-vs-object-creation",
    members: &[Modifier, ObjectCreationExpression],
    policy: "`new` is a modifier only in member-declaration context; in expression \
             position it always begins a creation expression",
};

pub const EVENT_VS_VARIABLE_DECLARATOR: ConflictSet = ConflictSet {
    name: "event-vs-variable-declarator",
    members: &[EventDeclaration, VariableDeclarator],
    policy: "after `event T name`, `{` selects the accessor form; anything else is the \
             field form (declaration order of the field alternative wins the tie)",
};

pub const DECLARATION_VS_EXPRESSION_STATEMENT: ConflictSet = ConflictSet {
    name: "declaration-vs-expression-statement",
    members: &[LocalDeclarationStatement, LocalFunctionStatement, ExpressionStatement],
    policy: "a statement commits to a declaration when a type scan succeeds and is \
             followed by a declarator (`ident` then `= , ; [`) or a function signature \
             (`ident` then `(` or `<...> (`); `T* x;` reads as a pointer declaration",
};

/// The conflict half of the parser's immutable configuration.
pub const CONFLICTS: &[ConflictSet] = &[
    EXPRESSION_VS_GENERIC_NAME,
    CAST_VS_PARENTHESIZED,
    IDENTIFIER_CONTEXTS,
    ANONYMOUS_METHOD,
    SWITCH_LABELS,
    MODIFIER_VS_OBJECT_CREATION,
    EVENT_VS_VARIABLE_DECLARATOR,
    DECLARATION_VS_EXPRESSION_STATEMENT,
];

/// Cheap speculation cursor: position + fuel over the lexed tokens.
/// Skips trivia automatically and never touches the tree builder.
#[derive(Clone)]
pub(super) struct Lookahead<'a> {
    tokens: &'a [Token],
    source: &'a str,
    extras: TokenSet,
    pos: usize,
    fuel: u32,
    exhausted: bool,
}

impl<'a> Lookahead<'a> {
    fn new(tokens: &'a [Token], pos: usize, source: &'a str, extras: TokenSet) -> Self {
        let mut la = Self {
            tokens,
            source,
            extras,
            pos,
            fuel: LOOKAHEAD_FUEL,
            exhausted: false,
        };
        la.skip_trivia();
        la
    }

    fn skip_trivia(&mut self) {
        while self.pos < self.tokens.len() && self.extras.contains(self.tokens[self.pos].kind) {
            self.pos += 1;
        }
    }

    pub(super) fn peek(&self) -> SyntaxKind {
        if self.exhausted {
            return Error;
        }
        self.tokens.get(self.pos).map_or(Error, |t| t.kind)
    }

    pub(super) fn text(&self) -> &'a str {
        match self.tokens.get(self.pos) {
            Some(token) => token_text(self.source, token),
            None => "",
        }
    }

    pub(super) fn at(&self, kind: SyntaxKind) -> bool {
        self.peek() == kind
    }

    pub(super) fn bump(&mut self) {
        if self.fuel == 0 {
            self.exhausted = true;
            return;
        }
        self.fuel -= 1;
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        self.skip_trivia();
    }

    pub(super) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }
}

/// Shape of a statement prefix, decided by speculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum LocalShape {
    Expression,
    Declaration,
    Function,
}

/// Shape of a pattern position, decided by speculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum PatternShape {
    Var,
    Discard,
    Declaration,
    Constant,
}

impl Parser<'_, '_> {
    /// Run a speculative scan for `conflict`. Fuel exhaustion is surfaced
    /// as an `AmbiguousSyntax` diagnostic; the caller's result (computed on
    /// the truncated window) then resolves conservatively.
    pub(super) fn speculate<R>(
        &mut self,
        conflict: &'static ConflictSet,
        scan: impl FnOnce(&mut Lookahead) -> R,
    ) -> R {
        self.skip_trivia_to_buffer();
        let mut la = Lookahead::new(&self.tokens, self.pos, self.source, self.grammar.extras);
        let result = scan(&mut la);
        let exhausted = la.exhausted;
        if exhausted {
            let range = self.current_span();
            self.diagnostics
                .report(DiagnosticKind::AmbiguousSyntax, range)
                .message(format!(
                    "speculation window exceeded while resolving `{}`",
                    conflict.name
                ))
                .emit();
        }
        result
    }

    /// Plain structural lookahead with no conflict attached.
    pub(super) fn lookahead(&mut self) -> Lookahead<'_> {
        self.skip_trivia_to_buffer();
        Lookahead::new(&self.tokens, self.pos, self.source, self.grammar.extras)
    }

    /// `expression-vs-generic-name`: caller is at `ident` with `<` next.
    pub(super) fn generic_name_ahead(&mut self) -> bool {
        self.speculate(&EXPRESSION_VS_GENERIC_NAME, |la| {
            la.bump(); // identifier
            if !la.at(LessThan) {
                return false;
            }
            if !scan_type_argument_list(la) {
                return false;
            }
            let follow = la.peek();
            if GENERIC_NAME_FOLLOW.contains(follow) {
                return true;
            }
            // Anything that can begin a relational right-hand side keeps
            // `<` and `>` as comparison operators.
            !EXPR_FIRST.contains(follow)
        })
    }

    /// `cast-vs-parenthesized-expression`: caller is at `(` in unary position.
    pub(super) fn cast_ahead(&mut self) -> bool {
        self.speculate(&CAST_VS_PARENTHESIZED, |la| {
            la.bump(); // '('
            let predefined = PREDEFINED_TYPES.contains(la.peek());
            if !scan_type(la) {
                return false;
            }
            if !la.eat(CloseParen) {
                return false;
            }
            if predefined {
                return true;
            }
            // For a plain name the token after `)` decides: a cast only if
            // it can begin a unary operand.
            let follow = la.peek();
            follow == Identifier
                || follow == OpenParen
                || follow == Tilde
                || follow == Bang
                || follow.is_literal_token()
                || (follow.is_keyword() && follow != KwIs && follow != KwAs)
        })
    }

    /// `declaration-vs-expression-statement`.
    pub(super) fn local_shape_ahead(&mut self) -> LocalShape {
        self.speculate(&DECLARATION_VS_EXPRESSION_STATEMENT, |la| {
            let mut saw_modifier = false;
            loop {
                let kind = la.peek();
                if LOCAL_MODIFIERS.contains(kind) {
                    la.bump();
                    saw_modifier = true;
                    continue;
                }
                if kind == Identifier && la.text() == "async" {
                    let mut probe = la.clone();
                    probe.bump();
                    if probe.at(KwVoid) || TYPE_FIRST.contains(probe.peek()) {
                        *la = probe;
                        saw_modifier = true;
                        continue;
                    }
                }
                break;
            }

            if la.eat(KwVoid) {
                // `void` can only begin a local function.
                return LocalShape::Function;
            }

            if !scan_type(la) || !la.at(Identifier) {
                return if saw_modifier {
                    LocalShape::Declaration
                } else {
                    LocalShape::Expression
                };
            }
            la.bump(); // declarator or function name

            match la.peek() {
                OpenParen => LocalShape::Function,
                LessThan => {
                    let mut probe = la.clone();
                    if scan_type_argument_list(&mut probe) && probe.at(OpenParen) {
                        LocalShape::Function
                    } else if saw_modifier {
                        LocalShape::Declaration
                    } else {
                        LocalShape::Expression
                    }
                }
                Equals | Comma | Semicolon | OpenBracket => LocalShape::Declaration,
                _ if saw_modifier => LocalShape::Declaration,
                _ => LocalShape::Expression,
            }
        })
    }

    /// `foreach (T x in ...)` vs `foreach (expr in ...)`: caller is just
    /// past the opening `(`.
    pub(super) fn typed_foreach_ahead(&mut self) -> bool {
        self.speculate(&DECLARATION_VS_EXPRESSION_STATEMENT, |la| {
            if !scan_type(la) || !la.at(Identifier) {
                return false;
            }
            la.bump();
            la.at(KwIn)
        })
    }

    /// Shape of a pattern position (`case` label or switch arm).
    pub(super) fn pattern_shape_ahead(&mut self) -> PatternShape {
        self.speculate(&SWITCH_LABELS, |la| {
            if la.at(Identifier) && la.text() == "var" {
                let mut probe = la.clone();
                probe.bump();
                if probe.at(Identifier) || probe.at(OpenParen) {
                    return PatternShape::Var;
                }
            }
            if la.at(Identifier) && la.text() == "_" {
                let mut probe = la.clone();
                probe.bump();
                if probe.at(Colon) || probe.at(FatArrow) || probe.text() == "when" {
                    return PatternShape::Discard;
                }
            }
            // `case F(1):` stays a constant invocation, so a declaration
            // pattern requires a plain identifier designation here.
            let mut probe = la.clone();
            if scan_type(&mut probe) && probe.at(Identifier) && probe.text() != "when" {
                return PatternShape::Declaration;
            }
            PatternShape::Constant
        })
    }
}

/// Scans a type reference: a predefined type or a (possibly alias- or
/// dot-qualified, possibly generic) name, with `?` `*` `[]` suffixes.
pub(super) fn scan_type(la: &mut Lookahead) -> bool {
    let kind = la.peek();
    if PREDEFINED_TYPES.contains(kind) {
        la.bump();
    } else if kind == Identifier {
        if !scan_name(la) {
            return false;
        }
    } else {
        return false;
    }
    scan_type_suffixes(la);
    true
}

fn scan_name(la: &mut Lookahead) -> bool {
    la.bump(); // first identifier
    if la.eat(ColonColon) {
        if !la.at(Identifier) {
            return false;
        }
        la.bump();
    }
    if la.at(LessThan) && !scan_type_argument_list(la) {
        return false;
    }
    while la.at(Dot) {
        la.bump();
        if !la.at(Identifier) {
            return false;
        }
        la.bump();
        if la.at(LessThan) && !scan_type_argument_list(la) {
            return false;
        }
    }
    true
}

fn scan_type_suffixes(la: &mut Lookahead) {
    loop {
        match la.peek() {
            Question | Star => la.bump(),
            OpenBracket => {
                // Only rank-only specifiers (`[]`, `[,]`) participate in
                // speculation; sized ranks appear under `new`, which needs
                // no scan.
                let mut probe = la.clone();
                probe.bump();
                while probe.at(Comma) {
                    probe.bump();
                }
                if !probe.eat(CloseBracket) {
                    break;
                }
                *la = probe;
            }
            _ => break,
        }
    }
}

/// Scans `< T (, T)* >` starting at `<`.
pub(super) fn scan_type_argument_list(la: &mut Lookahead) -> bool {
    if !la.eat(LessThan) {
        return false;
    }
    loop {
        if !scan_type(la) {
            return false;
        }
        if la.eat(Comma) {
            continue;
        }
        break;
    }
    la.eat(GreaterThan)
}
