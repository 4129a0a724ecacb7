//! Syntax kinds for the C# surface grammar.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds
//! (from parser). Logos derives token recognition; node kinds lack
//! token/regex attributes. `CsLang` implements Rowan's `Language` trait for
//! tree construction.
//!
//! Contextual words (`global`, `async`, `await`, `var`, `when`, `where`,
//! `yield`, `get`, `set`, `add`, `remove`, `alias`, `partial`, `assembly`,
//! `module`) deliberately have no token of their own: they lex as
//! `Identifier` and are recognized by text at the parse sites that give
//! them meaning.

#![allow(dead_code)] // Some items are for future use

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // --- Punctuation ---
    #[token("(")]
    OpenParen = 0,

    #[token(")")]
    CloseParen,

    #[token("[")]
    OpenBracket,

    #[token("]")]
    CloseBracket,

    #[token("{")]
    OpenBrace,

    #[token("}")]
    CloseBrace,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    /// `::` for alias-qualified names. Defined before `Colon` for correct precedence.
    #[token("::")]
    ColonColon,

    #[token(":")]
    Colon,

    #[token("?")]
    Question,

    #[token("??")]
    QuestionQuestion,

    #[token("??=")]
    QuestionQuestionEquals,

    #[token("=")]
    Equals,

    #[token("==")]
    EqualsEquals,

    #[token("=>")]
    FatArrow,

    #[token("!")]
    Bang,

    #[token("!=")]
    BangEquals,

    #[token("<")]
    LessThan,

    #[token("<=")]
    LessThanEquals,

    #[token("<<")]
    LessThanLessThan,

    #[token("<<=")]
    LessThanLessThanEquals,

    /// `>>` and `>>=` are never lexed as single tokens; the expression
    /// parser glues adjacent `>` tokens so nested type-argument lists
    /// (`List<List<int>>`) close correctly.
    #[token(">")]
    GreaterThan,

    #[token(">=")]
    GreaterThanEquals,

    #[token("+")]
    Plus,

    #[token("++")]
    PlusPlus,

    #[token("+=")]
    PlusEquals,

    #[token("-")]
    Minus,

    #[token("--")]
    MinusMinus,

    #[token("-=")]
    MinusEquals,

    #[token("->")]
    Arrow,

    #[token("*")]
    Star,

    #[token("*=")]
    StarEquals,

    #[token("/")]
    Slash,

    #[token("/=")]
    SlashEquals,

    #[token("%")]
    Percent,

    #[token("%=")]
    PercentEquals,

    #[token("&")]
    Amp,

    #[token("&&")]
    AmpAmp,

    #[token("&=")]
    AmpEquals,

    #[token("|")]
    Pipe,

    #[token("||")]
    PipePipe,

    #[token("|=")]
    PipeEquals,

    #[token("^")]
    Caret,

    #[token("^=")]
    CaretEquals,

    #[token("~")]
    Tilde,

    // --- Reserved keywords ---
    #[token("abstract")]
    KwAbstract,

    #[token("as")]
    KwAs,

    #[token("base")]
    KwBase,

    #[token("bool")]
    KwBool,

    #[token("break")]
    KwBreak,

    #[token("byte")]
    KwByte,

    #[token("case")]
    KwCase,

    #[token("catch")]
    KwCatch,

    #[token("char")]
    KwChar,

    #[token("checked")]
    KwChecked,

    #[token("class")]
    KwClass,

    #[token("const")]
    KwConst,

    #[token("continue")]
    KwContinue,

    #[token("decimal")]
    KwDecimal,

    #[token("default")]
    KwDefault,

    #[token("delegate")]
    KwDelegate,

    #[token("do")]
    KwDo,

    #[token("double")]
    KwDouble,

    #[token("else")]
    KwElse,

    #[token("enum")]
    KwEnum,

    #[token("event")]
    KwEvent,

    #[token("explicit")]
    KwExplicit,

    #[token("extern")]
    KwExtern,

    #[token("false")]
    KwFalse,

    #[token("finally")]
    KwFinally,

    #[token("fixed")]
    KwFixed,

    #[token("float")]
    KwFloat,

    #[token("for")]
    KwFor,

    #[token("foreach")]
    KwForeach,

    #[token("goto")]
    KwGoto,

    #[token("if")]
    KwIf,

    #[token("implicit")]
    KwImplicit,

    #[token("in")]
    KwIn,

    #[token("int")]
    KwInt,

    #[token("interface")]
    KwInterface,

    #[token("internal")]
    KwInternal,

    #[token("is")]
    KwIs,

    #[token("lock")]
    KwLock,

    #[token("long")]
    KwLong,

    #[token("namespace")]
    KwNamespace,

    #[token("new")]
    KwNew,

    #[token("null")]
    KwNull,

    #[token("object")]
    KwObject,

    #[token("operator")]
    KwOperator,

    #[token("out")]
    KwOut,

    #[token("override")]
    KwOverride,

    #[token("params")]
    KwParams,

    #[token("private")]
    KwPrivate,

    #[token("protected")]
    KwProtected,

    #[token("public")]
    KwPublic,

    #[token("readonly")]
    KwReadonly,

    #[token("ref")]
    KwRef,

    #[token("return")]
    KwReturn,

    #[token("sbyte")]
    KwSbyte,

    #[token("sealed")]
    KwSealed,

    #[token("short")]
    KwShort,

    #[token("sizeof")]
    KwSizeof,

    #[token("stackalloc")]
    KwStackalloc,

    #[token("static")]
    KwStatic,

    #[token("string")]
    KwString,

    #[token("struct")]
    KwStruct,

    #[token("switch")]
    KwSwitch,

    #[token("this")]
    KwThis,

    #[token("throw")]
    KwThrow,

    #[token("true")]
    KwTrue,

    #[token("try")]
    KwTry,

    #[token("typeof")]
    KwTypeof,

    #[token("uint")]
    KwUint,

    #[token("ulong")]
    KwUlong,

    #[token("unchecked")]
    KwUnchecked,

    #[token("unsafe")]
    KwUnsafe,

    #[token("ushort")]
    KwUshort,

    #[token("using")]
    KwUsing,

    #[token("virtual")]
    KwVirtual,

    #[token("void")]
    KwVoid,

    #[token("volatile")]
    KwVolatile,

    #[token("while")]
    KwWhile,

    #[token("__arglist")]
    KwArglist,

    #[token("__makeref")]
    KwMakeref,

    #[token("__reftype")]
    KwReftype,

    #[token("__refvalue")]
    KwRefvalue,

    // --- Literals ---
    /// Decimal or `0x` hex digits plus an optional case-insensitive
    /// `u`/`l` suffix combination.
    #[regex(r"(0x[0-9a-fA-F]+|[0-9]+)([uU][lL]?|[lL][uU]?)?")]
    IntegerLiteral,

    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?[fFdDmM]?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?[fFdDmM]?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+[fFdDmM]?")]
    #[regex(r"[0-9]+[fFdDmM]")]
    RealLiteral,

    #[regex(r"'([^'\\]|\\x[0-9a-fA-F]{1,4}|\\u[0-9a-fA-F]{4}|\\U[0-9a-fA-F]{8}|\\[^xuU])'")]
    CharacterLiteral,

    #[regex(r#""([^"\\\n]|\\x[0-9a-fA-F]{1,4}|\\u[0-9a-fA-F]{4}|\\U[0-9a-fA-F]{8}|\\[^xuU])*""#)]
    StringLiteral,

    /// Everything up to the next `"` is taken verbatim, including characters
    /// a normal string would require escaping.
    #[regex(r#"@"[^"]*""#)]
    VerbatimStringLiteral,

    /// Defined after keywords so they take precedence.
    #[regex(r"[a-zA-Z_][a-zA-Z_0-9]*")]
    Identifier,

    // --- Trivia ---
    #[regex(r"[ \t\u{000B}\u{000C}\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    #[regex(r"/\*([^*]|\*[^/])*\*/")]
    Comment,

    /// A single token spanning from `#` to end of line, for the fixed
    /// directive keyword set.
    #[regex(
        r"#(if|else|elif|endif|define|undef|warning|error|line|region|endregion|pragma[ \t]+warning|pragma[ \t]+checksum)[^\n]*",
        allow_greedy = true
    )]
    PreprocessorDirective,

    /// Accepted only as the very first token of a compilation unit.
    #[token("\u{feff}")]
    ByteOrderMark,

    /// Coalesced unrecognized characters
    Garbage,
    Error,

    // --- Node kinds (non-terminals) ---
    CompilationUnit,
    /// Root wrapper for entry-per-fragment parses.
    Fragment,

    ExternAliasDirective,
    UsingDirective,
    NameEquals,
    NameColon,

    IdentifierName,
    GenericName,
    QualifiedName,
    AliasQualifiedName,
    TypeArgumentList,

    AttributeList,
    GlobalAttributeList,
    Attribute,
    AttributeArgumentList,
    AttributeArgument,

    Modifier,
    ParameterModifier,

    VariableDeclaration,
    VariableDeclarator,
    EqualsValueClause,

    FieldDeclaration,
    EventFieldDeclaration,
    EventDeclaration,
    MethodDeclaration,
    ConstructorDeclaration,
    ConstructorInitializer,
    DestructorDeclaration,
    OperatorDeclaration,
    ConversionOperatorDeclaration,
    PropertyDeclaration,
    IndexerDeclaration,
    AccessorList,
    AccessorDeclaration,

    ParameterList,
    Parameter,
    ParameterArray,
    BracketedParameterList,

    TypeParameterList,
    TypeParameterConstraintsClause,
    ConstructorConstraint,
    TypeConstraint,

    ClassDeclaration,
    StructDeclaration,
    InterfaceDeclaration,
    ClassBody,
    EnumDeclaration,
    EnumMemberDeclaration,
    BaseList,
    DelegateDeclaration,
    NamespaceDeclaration,
    ExplicitInterfaceSpecifier,

    ArgumentList,
    Argument,
    BracketedArgumentList,

    Block,
    ArrowExpressionClause,
    /// Alias over a plain identifier in label positions.
    LabelName,

    // Types
    PredefinedType,
    ArrayType,
    ArrayRankSpecifier,
    NullableType,
    PointerType,

    // Statements
    BreakStatement,
    CheckedStatement,
    ContinueStatement,
    DoStatement,
    EmptyStatement,
    ExpressionStatement,
    FixedStatement,
    ForStatement,
    ForEachStatement,
    GotoStatement,
    IfStatement,
    ElseClause,
    LabeledStatement,
    LocalDeclarationStatement,
    LocalFunctionStatement,
    LockStatement,
    ReturnStatement,
    SwitchStatement,
    SwitchSection,
    CaseSwitchLabel,
    CasePatternSwitchLabel,
    DefaultSwitchLabel,
    ThrowStatement,
    TryStatement,
    CatchClause,
    CatchDeclaration,
    CatchFilterClause,
    FinallyClause,
    UnsafeStatement,
    UsingStatement,
    WhileStatement,
    YieldStatement,

    // Patterns
    ConstantPattern,
    DeclarationPattern,
    DiscardPattern,
    VarPattern,
    DiscardDesignation,
    ParenthesizedVariableDesignation,
    SingleVariableDesignation,
    WhenClause,

    // Expressions
    Literal,
    AnonymousMethodExpression,
    AnonymousObjectCreationExpression,
    ObjectCreationExpression,
    ArrayCreationExpression,
    ImplicitArrayCreationExpression,
    ImplicitStackAllocArrayCreationExpression,
    ArrayInitializer,
    AssignmentExpression,
    AssignmentOperator,
    AwaitExpression,
    BinaryExpression,
    CastExpression,
    CheckedExpression,
    ConditionalExpression,
    DefaultExpression,
    ElementAccessExpression,
    ElementBindingExpression,
    MemberBindingExpression,
    InvocationExpression,
    ParenthesizedExpression,
    PostfixUnaryExpression,
    PrefixUnaryExpression,
    MakeRefExpression,
    RefTypeExpression,
    RefValueExpression,
    SizeOfExpression,
    TypeOfExpression,
    SwitchExpression,
    SwitchExpressionArm,
    BaseExpression,
    ThisExpression,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Comment | PreprocessorDirective)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage)
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        let raw = self as u16;
        raw >= KwAbstract as u16 && raw <= KwRefvalue as u16
    }

    #[inline]
    pub const fn is_literal_token(self) -> bool {
        let raw = self as u16;
        raw >= IntegerLiteral as u16 && raw <= VerbatimStringLiteral as u16
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CsLang {}

impl Language for CsLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<CsLang>;
pub type SyntaxToken = rowan::SyntaxToken<CsLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 192-bit bitset of token `SyntaxKind`s for O(1) membership testing.
///
/// Only token kinds fit; node kinds live above the capacity on purpose.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet([u64; 3]);

impl TokenSet {
    const CAPACITY: u16 = 192;

    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet([0; 3]);

    /// Panics at compile time if any kind's discriminant >= 192.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = [0u64; 3];
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(
                kind < Self::CAPACITY,
                "SyntaxKind value exceeds TokenSet capacity"
            );
            bits[(kind / 64) as usize] |= 1 << (kind % 64);
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        Self::new(&[kind])
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= Self::CAPACITY {
            return false;
        }
        self.0[(kind / 64) as usize] & (1 << (kind % 64)) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet([
            self.0[0] | other.0[0],
            self.0[1] | other.0[1],
            self.0[2] | other.0[2],
        ])
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..Self::CAPACITY {
            if self.contains_raw(i) && i < __LAST as u16 {
                let kind: SyntaxKind = unsafe { std::mem::transmute(i) };
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

impl TokenSet {
    #[inline]
    const fn contains_raw(&self, kind: u16) -> bool {
        self.0[(kind / 64) as usize] & (1 << (kind % 64)) != 0
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    pub const TRIVIA: TokenSet = TokenSet::new(&[Whitespace, Comment, PreprocessorDirective]);

    /// The fifteen predefined type keywords. `void` is handled separately
    /// so it is only treated as a type in return-type position.
    pub const PREDEFINED_TYPES: TokenSet = TokenSet::new(&[
        KwBool, KwByte, KwChar, KwDecimal, KwDouble, KwFloat, KwInt, KwLong, KwObject, KwSbyte,
        KwShort, KwString, KwUint, KwUlong, KwUshort,
    ]);

    /// FIRST set of a type reference.
    pub const TYPE_FIRST: TokenSet = PREDEFINED_TYPES.union(TokenSet::single(Identifier));

    /// FIRST set of an expression. Contextual words (`await`, `async`)
    /// arrive as `Identifier` and are covered by that entry.
    pub const EXPR_FIRST: TokenSet = TokenSet::new(&[
        OpenParen,
        OpenBracket,
        Dot,
        Bang,
        Tilde,
        Amp,
        Star,
        Plus,
        PlusPlus,
        Minus,
        MinusMinus,
        Caret,
        Identifier,
        IntegerLiteral,
        RealLiteral,
        CharacterLiteral,
        StringLiteral,
        VerbatimStringLiteral,
        KwTrue,
        KwFalse,
        KwNull,
        KwArglist,
        KwNew,
        KwThis,
        KwBase,
        KwTypeof,
        KwSizeof,
        KwDefault,
        KwChecked,
        KwUnchecked,
        KwDelegate,
        KwStackalloc,
        KwMakeref,
        KwReftype,
        KwRefvalue,
    ])
    .union(PREDEFINED_TYPES);

    /// Keyword modifiers valid on member declarations. `async` and
    /// `partial` are contextual and recognized by text; `new` is a
    /// modifier only here, never in expression position.
    pub const MEMBER_MODIFIERS: TokenSet = TokenSet::new(&[
        KwAbstract, KwConst, KwExtern, KwFixed, KwInternal, KwNew, KwOverride, KwPrivate,
        KwProtected, KwPublic, KwReadonly, KwRef, KwSealed, KwStatic, KwUnsafe, KwVirtual,
        KwVolatile,
    ]);

    /// Modifiers valid on local declarations and local functions.
    pub const LOCAL_MODIFIERS: TokenSet =
        TokenSet::new(&[KwConst, KwExtern, KwReadonly, KwRef, KwStatic, KwUnsafe]);

    pub const PREFIX_OPERATORS: TokenSet = TokenSet::new(&[
        Bang, Amp, Star, Plus, PlusPlus, Minus, MinusMinus, Caret, Tilde,
    ]);

    pub const PARAMETER_MODIFIERS: TokenSet = TokenSet::new(&[KwRef, KwOut, KwThis]);

    pub const ARGUMENT_MODIFIERS: TokenSet = TokenSet::new(&[KwRef, KwOut, KwIn]);

    /// Operator tokens accepted after the `operator` keyword. `>>` arrives
    /// as two adjacent `>` tokens and is handled at the parse site.
    pub const OVERLOADABLE_OPERATORS: TokenSet = TokenSet::new(&[
        Bang,
        Tilde,
        PlusPlus,
        MinusMinus,
        KwTrue,
        KwFalse,
        Plus,
        Minus,
        Star,
        Slash,
        Percent,
        Caret,
        Pipe,
        Amp,
        LessThanLessThan,
        GreaterThan,
        LessThan,
        GreaterThanEquals,
        LessThanEquals,
        EqualsEquals,
        BangEquals,
    ]);

    /// Tokens after a closing `>` that commit `ident <...>` to a generic
    /// name in expression context.
    pub const GENERIC_NAME_FOLLOW: TokenSet = TokenSet::new(&[
        OpenParen,
        CloseParen,
        CloseBracket,
        CloseBrace,
        Comma,
        Semicolon,
        Colon,
        Dot,
    ]);

}
