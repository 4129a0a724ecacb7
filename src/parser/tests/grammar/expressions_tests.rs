//! Primary and postfix expression forms.

use crate::parser::tests::expr;

#[test]
fn literals() {
    insta::assert_snapshot!(expr("true"), @r#"
    Fragment
      Literal
        KwTrue "true"
    "#);
}

#[test]
fn qualified_name_chain() {
    insta::assert_snapshot!(expr("a.b.c"), @r#"
    Fragment
      QualifiedName
        QualifiedName
          IdentifierName
            Identifier "a"
          Dot "."
          IdentifierName
            Identifier "b"
        Dot "."
        IdentifierName
          Identifier "c"
    "#);
}

#[test]
fn member_call_on_predefined_type() {
    insta::assert_snapshot!(expr("int.Parse(s)"), @r#"
    Fragment
      InvocationExpression
        QualifiedName
          PredefinedType
            KwInt "int"
          Dot "."
          IdentifierName
            Identifier "Parse"
        ArgumentList
          OpenParen "("
          IdentifierName
            Identifier "s"
          CloseParen ")"
    "#);
}

#[test]
fn element_access_with_argument_modifiers() {
    insta::assert_snapshot!(expr("a[ref b]"), @r#"
    Fragment
      ElementAccessExpression
        IdentifierName
          Identifier "a"
        BracketedArgumentList
          OpenBracket "["
          Argument
            KwRef "ref"
            IdentifierName
              Identifier "b"
          CloseBracket "]"
    "#);
}

#[test]
fn typeof_takes_a_type_operand() {
    insta::assert_snapshot!(expr("typeof(List<int>)"), @r#"
    Fragment
      TypeOfExpression
        KwTypeof "typeof"
        OpenParen "("
        GenericName
          Identifier "List"
          TypeArgumentList
            LessThan "<"
            PredefinedType
              KwInt "int"
            GreaterThan ">"
        CloseParen ")"
    "#);
}

#[test]
fn default_expression() {
    insta::assert_snapshot!(expr("default(int)"), @r#"
    Fragment
      DefaultExpression
        KwDefault "default"
        OpenParen "("
        PredefinedType
          KwInt "int"
        CloseParen ")"
    "#);
}

#[test]
fn object_creation_with_arguments() {
    insta::assert_snapshot!(expr("new Foo(1, x)"), @r#"
    Fragment
      ObjectCreationExpression
        KwNew "new"
        IdentifierName
          Identifier "Foo"
        ArgumentList
          OpenParen "("
          Literal
            IntegerLiteral "1"
          Comma ","
          IdentifierName
            Identifier "x"
          CloseParen ")"
    "#);
}

#[test]
fn array_creation_with_initializer() {
    insta::assert_snapshot!(expr("new int[] { 1, 2 }"), @r#"
    Fragment
      ArrayCreationExpression
        KwNew "new"
        ArrayType
          PredefinedType
            KwInt "int"
          ArrayRankSpecifier
            OpenBracket "["
            CloseBracket "]"
        ArrayInitializer
          OpenBrace "{"
          Literal
            IntegerLiteral "1"
          Comma ","
          Literal
            IntegerLiteral "2"
          CloseBrace "}"
    "#);
}

#[test]
fn sized_array_creation() {
    insta::assert_snapshot!(expr("new int[5]"), @r#"
    Fragment
      ArrayCreationExpression
        KwNew "new"
        ArrayType
          PredefinedType
            KwInt "int"
          ArrayRankSpecifier
            OpenBracket "["
            Literal
              IntegerLiteral "5"
            CloseBracket "]"
    "#);
}

#[test]
fn implicit_array_creation() {
    insta::assert_snapshot!(expr("new [] { 1 }"), @r#"
    Fragment
      ImplicitArrayCreationExpression
        KwNew "new"
        OpenBracket "["
        CloseBracket "]"
        ArrayInitializer
          OpenBrace "{"
          Literal
            IntegerLiteral "1"
          CloseBrace "}"
    "#);
}

#[test]
fn anonymous_object_creation() {
    insta::assert_snapshot!(expr("new { Name = x, y }"), @r#"
    Fragment
      AnonymousObjectCreationExpression
        KwNew "new"
        OpenBrace "{"
        NameEquals
          IdentifierName
            Identifier "Name"
          Equals "="
        IdentifierName
          Identifier "x"
        Comma ","
        IdentifierName
          Identifier "y"
        CloseBrace "}"
    "#);
}

#[test]
fn switch_expression_with_arms() {
    insta::assert_snapshot!(expr("x switch { 1 => a, _ => b }"), @r#"
    Fragment
      SwitchExpression
        IdentifierName
          Identifier "x"
        KwSwitch "switch"
        OpenBrace "{"
        SwitchExpressionArm
          ConstantPattern
            Literal
              IntegerLiteral "1"
          FatArrow "=>"
          IdentifierName
            Identifier "a"
        Comma ","
        SwitchExpressionArm
          DiscardPattern
            Identifier "_"
          FatArrow "=>"
          IdentifierName
            Identifier "b"
        CloseBrace "}"
    "#);
}

#[test]
fn checked_expression() {
    insta::assert_snapshot!(expr("checked(a + b)"), @r#"
    Fragment
      CheckedExpression
        KwChecked "checked"
        OpenParen "("
        BinaryExpression
          IdentifierName
            Identifier "a"
          Plus "+"
          IdentifierName
            Identifier "b"
        CloseParen ")"
    "#);
}

#[test]
fn member_binding_expression() {
    insta::assert_snapshot!(expr(".Name"), @r#"
    Fragment
      MemberBindingExpression
        Dot "."
        IdentifierName
          Identifier "Name"
    "#);
}

#[test]
fn null_forgiving_postfix() {
    insta::assert_snapshot!(expr("a!.b"), @r#"
    Fragment
      QualifiedName
        PostfixUnaryExpression
          IdentifierName
            Identifier "a"
          Bang "!"
        Dot "."
        IdentifierName
          Identifier "b"
    "#);
}

#[test]
fn cast_binds_tighter_than_binary() {
    insta::assert_snapshot!(expr("(int)x + y"), @r#"
    Fragment
      BinaryExpression
        CastExpression
          OpenParen "("
          PredefinedType
            KwInt "int"
          CloseParen ")"
          IdentifierName
            Identifier "x"
        Plus "+"
        IdentifierName
          Identifier "y"
    "#);
}

#[test]
fn cast_of_a_name_before_an_operand() {
    insta::assert_snapshot!(expr("(Foo)x"), @r#"
    Fragment
      CastExpression
        OpenParen "("
        IdentifierName
          Identifier "Foo"
        CloseParen ")"
        IdentifierName
          Identifier "x"
    "#);
}

#[test]
fn parenthesized_before_an_operator_stays_parenthesized() {
    insta::assert_snapshot!(expr("(a) - b"), @r#"
    Fragment
      BinaryExpression
        ParenthesizedExpression
          OpenParen "("
          IdentifierName
            Identifier "a"
          CloseParen ")"
        Minus "-"
        IdentifierName
          Identifier "b"
    "#);
}

#[test]
fn sizeof_and_makeref() {
    insta::assert_snapshot!(expr("__makeref(x)"), @r#"
    Fragment
      MakeRefExpression
        KwMakeref "__makeref"
        OpenParen "("
        IdentifierName
          Identifier "x"
        CloseParen ")"
    "#);
}

#[test]
fn stackalloc_implicit_creation() {
    insta::assert_snapshot!(expr("stackalloc [] { 1 }"), @r#"
    Fragment
      ImplicitStackAllocArrayCreationExpression
        KwStackalloc "stackalloc"
        OpenBracket "["
        CloseBracket "]"
        ArrayInitializer
          OpenBrace "{"
          Literal
            IntegerLiteral "1"
          CloseBrace "}"
    "#);
}
