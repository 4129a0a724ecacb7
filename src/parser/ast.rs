//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind` - validation happens elsewhere.

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(CompilationUnit, CompilationUnit);
ast_node!(Fragment, Fragment);
ast_node!(UsingDirective, UsingDirective);
ast_node!(ExternAliasDirective, ExternAliasDirective);
ast_node!(NamespaceDeclaration, NamespaceDeclaration);
ast_node!(ClassDeclaration, ClassDeclaration);
ast_node!(StructDeclaration, StructDeclaration);
ast_node!(InterfaceDeclaration, InterfaceDeclaration);
ast_node!(EnumDeclaration, EnumDeclaration);
ast_node!(EnumMemberDeclaration, EnumMemberDeclaration);
ast_node!(DelegateDeclaration, DelegateDeclaration);
ast_node!(ClassBody, ClassBody);
ast_node!(MethodDeclaration, MethodDeclaration);
ast_node!(ConstructorDeclaration, ConstructorDeclaration);
ast_node!(FieldDeclaration, FieldDeclaration);
ast_node!(PropertyDeclaration, PropertyDeclaration);
ast_node!(VariableDeclaration, VariableDeclaration);
ast_node!(VariableDeclarator, VariableDeclarator);
ast_node!(ParameterList, ParameterList);
ast_node!(Parameter, Parameter);
ast_node!(Block, Block);

ast_node!(IdentifierName, IdentifierName);
ast_node!(GenericName, GenericName);
ast_node!(QualifiedName, QualifiedName);
ast_node!(AliasQualifiedName, AliasQualifiedName);
ast_node!(PredefinedType, PredefinedType);
ast_node!(ArrayType, ArrayType);
ast_node!(NullableType, NullableType);
ast_node!(PointerType, PointerType);

ast_node!(Literal, Literal);
ast_node!(BinaryExpression, BinaryExpression);
ast_node!(AssignmentExpression, AssignmentExpression);
ast_node!(ConditionalExpression, ConditionalExpression);
ast_node!(PrefixUnaryExpression, PrefixUnaryExpression);
ast_node!(PostfixUnaryExpression, PostfixUnaryExpression);
ast_node!(CastExpression, CastExpression);
ast_node!(ParenthesizedExpression, ParenthesizedExpression);
ast_node!(InvocationExpression, InvocationExpression);
ast_node!(ElementAccessExpression, ElementAccessExpression);
ast_node!(ObjectCreationExpression, ObjectCreationExpression);
ast_node!(AwaitExpression, AwaitExpression);
ast_node!(SwitchExpression, SwitchExpression);

ast_node!(ExpressionStatement, ExpressionStatement);
ast_node!(LocalDeclarationStatement, LocalDeclarationStatement);
ast_node!(IfStatement, IfStatement);
ast_node!(ReturnStatement, ReturnStatement);
ast_node!(SwitchStatement, SwitchStatement);
ast_node!(LabeledStatement, LabeledStatement);
ast_node!(LabelName, LabelName);

/// Any node in expression position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    IdentifierName(IdentifierName),
    GenericName(GenericName),
    QualifiedName(QualifiedName),
    PredefinedType(PredefinedType),
    Literal(Literal),
    Binary(BinaryExpression),
    Assignment(AssignmentExpression),
    Conditional(ConditionalExpression),
    PrefixUnary(PrefixUnaryExpression),
    PostfixUnary(PostfixUnaryExpression),
    Cast(CastExpression),
    Parenthesized(ParenthesizedExpression),
    Invocation(InvocationExpression),
    ElementAccess(ElementAccessExpression),
    ObjectCreation(ObjectCreationExpression),
    Await(AwaitExpression),
    Switch(SwitchExpression),
    /// Any other expression kind, exposed as the raw node.
    Other(SyntaxNode),
}

impl Expression {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        let expr = match node.kind() {
            SyntaxKind::IdentifierName => Self::IdentifierName(IdentifierName(node)),
            SyntaxKind::GenericName => Self::GenericName(GenericName(node)),
            SyntaxKind::QualifiedName => Self::QualifiedName(QualifiedName(node)),
            SyntaxKind::PredefinedType => Self::PredefinedType(PredefinedType(node)),
            SyntaxKind::Literal => Self::Literal(Literal(node)),
            SyntaxKind::BinaryExpression => Self::Binary(BinaryExpression(node)),
            SyntaxKind::AssignmentExpression => Self::Assignment(AssignmentExpression(node)),
            SyntaxKind::ConditionalExpression => Self::Conditional(ConditionalExpression(node)),
            SyntaxKind::PrefixUnaryExpression => Self::PrefixUnary(PrefixUnaryExpression(node)),
            SyntaxKind::PostfixUnaryExpression => Self::PostfixUnary(PostfixUnaryExpression(node)),
            SyntaxKind::CastExpression => Self::Cast(CastExpression(node)),
            SyntaxKind::ParenthesizedExpression => {
                Self::Parenthesized(ParenthesizedExpression(node))
            }
            SyntaxKind::InvocationExpression => Self::Invocation(InvocationExpression(node)),
            SyntaxKind::ElementAccessExpression => {
                Self::ElementAccess(ElementAccessExpression(node))
            }
            SyntaxKind::ObjectCreationExpression => {
                Self::ObjectCreation(ObjectCreationExpression(node))
            }
            SyntaxKind::AwaitExpression => Self::Await(AwaitExpression(node)),
            SyntaxKind::SwitchExpression => Self::Switch(SwitchExpression(node)),
            SyntaxKind::AnonymousMethodExpression
            | SyntaxKind::AnonymousObjectCreationExpression
            | SyntaxKind::ArrayCreationExpression
            | SyntaxKind::ImplicitArrayCreationExpression
            | SyntaxKind::ImplicitStackAllocArrayCreationExpression
            | SyntaxKind::ArrayInitializer
            | SyntaxKind::CheckedExpression
            | SyntaxKind::DefaultExpression
            | SyntaxKind::ElementBindingExpression
            | SyntaxKind::MemberBindingExpression
            | SyntaxKind::MakeRefExpression
            | SyntaxKind::RefTypeExpression
            | SyntaxKind::RefValueExpression
            | SyntaxKind::SizeOfExpression
            | SyntaxKind::TypeOfExpression
            | SyntaxKind::BaseExpression
            | SyntaxKind::ThisExpression
            | SyntaxKind::AliasQualifiedName => Self::Other(node),
            _ => return None,
        };
        Some(expr)
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Self::IdentifierName(n) => n.as_cst(),
            Self::GenericName(n) => n.as_cst(),
            Self::QualifiedName(n) => n.as_cst(),
            Self::PredefinedType(n) => n.as_cst(),
            Self::Literal(n) => n.as_cst(),
            Self::Binary(n) => n.as_cst(),
            Self::Assignment(n) => n.as_cst(),
            Self::Conditional(n) => n.as_cst(),
            Self::PrefixUnary(n) => n.as_cst(),
            Self::PostfixUnary(n) => n.as_cst(),
            Self::Cast(n) => n.as_cst(),
            Self::Parenthesized(n) => n.as_cst(),
            Self::Invocation(n) => n.as_cst(),
            Self::ElementAccess(n) => n.as_cst(),
            Self::ObjectCreation(n) => n.as_cst(),
            Self::Await(n) => n.as_cst(),
            Self::Switch(n) => n.as_cst(),
            Self::Other(n) => n,
        }
    }
}

fn first_token_of_kind(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == kind)
}

fn first_operator_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| !t.kind().is_trivia())
}

impl CompilationUnit {
    pub fn members(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0.children()
    }

    pub fn using_directives(&self) -> impl Iterator<Item = UsingDirective> + '_ {
        self.0.children().filter_map(UsingDirective::cast)
    }
}

impl Fragment {
    /// The single parsed fragment node, if any survived recovery.
    pub fn inner(&self) -> Option<SyntaxNode> {
        self.0.children().find(|n| n.kind() != SyntaxKind::Error)
    }
}

impl NamespaceDeclaration {
    pub fn name(&self) -> Option<SyntaxNode> {
        self.0.children().find(|n| {
            matches!(
                n.kind(),
                SyntaxKind::IdentifierName
                    | SyntaxKind::QualifiedName
                    | SyntaxKind::GenericName
                    | SyntaxKind::AliasQualifiedName
            )
        })
    }

    pub fn members(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0.children()
    }
}

impl ClassDeclaration {
    pub fn name(&self) -> Option<SyntaxToken> {
        first_token_of_kind(&self.0, SyntaxKind::Identifier)
    }

    pub fn body(&self) -> Option<ClassBody> {
        self.0.children().find_map(ClassBody::cast)
    }
}

impl ClassBody {
    pub fn members(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0.children()
    }
}

impl EnumDeclaration {
    pub fn name(&self) -> Option<SyntaxToken> {
        first_token_of_kind(&self.0, SyntaxKind::Identifier)
    }

    pub fn members(&self) -> impl Iterator<Item = EnumMemberDeclaration> + '_ {
        self.0.children().filter_map(EnumMemberDeclaration::cast)
    }
}

impl EnumMemberDeclaration {
    pub fn name(&self) -> Option<SyntaxToken> {
        first_token_of_kind(&self.0, SyntaxKind::Identifier)
    }
}

impl MethodDeclaration {
    /// The method name: the identifier directly under the declaration,
    /// after any explicit interface specifier.
    pub fn name(&self) -> Option<SyntaxToken> {
        first_token_of_kind(&self.0, SyntaxKind::Identifier)
    }

    pub fn parameter_list(&self) -> Option<ParameterList> {
        self.0.children().find_map(ParameterList::cast)
    }

    pub fn body(&self) -> Option<Block> {
        self.0.children().find_map(Block::cast)
    }
}

impl FieldDeclaration {
    pub fn declaration(&self) -> Option<VariableDeclaration> {
        self.0.children().find_map(VariableDeclaration::cast)
    }
}

impl VariableDeclaration {
    pub fn declarators(&self) -> impl Iterator<Item = VariableDeclarator> + '_ {
        self.0.children().filter_map(VariableDeclarator::cast)
    }
}

impl VariableDeclarator {
    pub fn name(&self) -> Option<SyntaxToken> {
        first_token_of_kind(&self.0, SyntaxKind::Identifier)
    }

    pub fn value(&self) -> Option<Expression> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::EqualsValueClause)
            .and_then(|clause| clause.children().find_map(Expression::cast))
    }
}

impl ParameterList {
    pub fn parameters(&self) -> impl Iterator<Item = Parameter> + '_ {
        self.0.children().filter_map(Parameter::cast)
    }
}

impl Parameter {
    pub fn name(&self) -> Option<SyntaxToken> {
        // the last identifier directly under the parameter
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| t.kind() == SyntaxKind::Identifier)
            .last()
    }
}

impl Block {
    pub fn statements(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0.children()
    }
}

impl IdentifierName {
    pub fn token(&self) -> Option<SyntaxToken> {
        first_token_of_kind(&self.0, SyntaxKind::Identifier)
    }
}

impl GenericName {
    pub fn token(&self) -> Option<SyntaxToken> {
        first_token_of_kind(&self.0, SyntaxKind::Identifier)
    }
}

impl Literal {
    pub fn token(&self) -> Option<SyntaxToken> {
        first_operator_token(&self.0)
    }
}

impl BinaryExpression {
    pub fn lhs(&self) -> Option<Expression> {
        self.0.children().filter_map(Expression::cast).next()
    }

    pub fn rhs(&self) -> Option<Expression> {
        self.0.children().filter_map(Expression::cast).nth(1)
    }

    pub fn operator(&self) -> Option<SyntaxToken> {
        first_operator_token(&self.0)
    }
}

impl AssignmentExpression {
    pub fn lhs(&self) -> Option<Expression> {
        self.0.children().filter_map(Expression::cast).next()
    }

    pub fn rhs(&self) -> Option<Expression> {
        self.0.children().filter_map(Expression::cast).nth(1)
    }
}

impl ConditionalExpression {
    pub fn condition(&self) -> Option<Expression> {
        self.0.children().filter_map(Expression::cast).next()
    }

    pub fn when_true(&self) -> Option<Expression> {
        self.0.children().filter_map(Expression::cast).nth(1)
    }

    pub fn when_false(&self) -> Option<Expression> {
        self.0.children().filter_map(Expression::cast).nth(2)
    }
}

impl CastExpression {
    /// The cast target type.
    pub fn target(&self) -> Option<SyntaxNode> {
        self.0.children().next()
    }

    pub fn operand(&self) -> Option<Expression> {
        self.0.children().filter_map(Expression::cast).last()
    }
}

impl InvocationExpression {
    pub fn callee(&self) -> Option<Expression> {
        self.0.children().filter_map(Expression::cast).next()
    }

    pub fn arguments(&self) -> impl Iterator<Item = Expression> + '_ {
        self.0
            .children()
            .filter(|n| n.kind() == SyntaxKind::ArgumentList)
            .flat_map(|list| list.children_with_tokens())
            .filter_map(|it| it.into_node())
            .filter_map(Expression::cast)
    }
}

impl LabeledStatement {
    /// The aliased label node; its token stays a plain identifier.
    pub fn label(&self) -> Option<LabelName> {
        self.0.children().find_map(LabelName::cast)
    }
}

impl LabelName {
    pub fn token(&self) -> Option<SyntaxToken> {
        first_token_of_kind(&self.0, SyntaxKind::Identifier)
    }
}
