//! One regression pin per declared conflict set.

use crate::parser::tests::{cst, expr, stmt};
use crate::parser::{CONFLICTS, Grammar};

#[test]
fn conflict_table_is_wired_into_the_grammar() {
    assert_eq!(Grammar::STANDARD.conflicts.len(), CONFLICTS.len());
    let names: Vec<_> = CONFLICTS.iter().map(|c| c.name).collect();
    assert!(names.contains(&"expression-vs-generic-name"));
    assert!(names.contains(&"cast-vs-parenthesized-expression"));
    assert!(names.contains(&"declaration-vs-expression-statement"));
}

#[test]
fn generic_name_wins_before_a_call() {
    insta::assert_snapshot!(expr("f<int>(x)"), @r#"
    Fragment
      InvocationExpression
        GenericName
          Identifier "f"
          TypeArgumentList
            LessThan "<"
            PredefinedType
              KwInt "int"
            GreaterThan ">"
        ArgumentList
          OpenParen "("
          IdentifierName
            Identifier "x"
          CloseParen ")"
    "#);
}

#[test]
fn relational_chain_wins_before_an_operand() {
    insta::assert_snapshot!(expr("a<b>c"), @r#"
    Fragment
      BinaryExpression
        BinaryExpression
          IdentifierName
            Identifier "a"
          LessThan "<"
          IdentifierName
            Identifier "b"
        GreaterThan ">"
        IdentifierName
          Identifier "c"
    "#);
}

#[test]
fn cast_wins_for_a_predefined_type() {
    insta::assert_snapshot!(expr("(int)x"), @r#"
    Fragment
      CastExpression
        OpenParen "("
        PredefinedType
          KwInt "int"
        CloseParen ")"
        IdentifierName
          Identifier "x"
    "#);
}

#[test]
fn lone_parenthesized_identifier_stays_an_expression() {
    insta::assert_snapshot!(expr("(x)"), @r#"
    Fragment
      ParenthesizedExpression
        OpenParen "("
        IdentifierName
          Identifier "x"
        CloseParen ")"
    "#);
}

#[test]
fn enum_bodies_only_accept_member_declarations() {
    insta::assert_snapshot!(cst("enum E { A, B }"), @r#"
    CompilationUnit
      EnumDeclaration
        KwEnum "enum"
        Identifier "E"
        OpenBrace "{"
        EnumMemberDeclaration
          Identifier "A"
        Comma ","
        EnumMemberDeclaration
          Identifier "B"
        CloseBrace "}"
    "#);
}

#[test]
fn type_parameter_positions_only_accept_identifiers() {
    insta::assert_snapshot!(cst("class C<T, U> { }"), @r#"
    CompilationUnit
      ClassDeclaration
        KwClass "class"
        Identifier "C"
        TypeParameterList
          LessThan "<"
          Identifier "T"
          Comma ","
          Identifier "U"
          GreaterThan ">"
        ClassBody
          OpenBrace "{"
          CloseBrace "}"
    "#);
}

#[test]
fn delegate_keyword_begins_an_anonymous_method() {
    insta::assert_snapshot!(expr("delegate (int x) { }"), @r#"
    Fragment
      AnonymousMethodExpression
        KwDelegate "delegate"
        ParameterList
          OpenParen "("
          Parameter
            PredefinedType
              KwInt "int"
            Identifier "x"
          CloseParen ")"
        Block
          OpenBrace "{"
          CloseBrace "}"
    "#);
}

#[test]
fn constant_case_label_wins_without_a_pattern_shape() {
    insta::assert_snapshot!(stmt("switch (x) { case 1: break; }"), @r#"
    Fragment
      SwitchStatement
        KwSwitch "switch"
        OpenParen "("
        IdentifierName
          Identifier "x"
        CloseParen ")"
        OpenBrace "{"
        SwitchSection
          CaseSwitchLabel
            KwCase "case"
            Literal
              IntegerLiteral "1"
            Colon ":"
          BreakStatement
            KwBreak "break"
            Semicolon ";"
        CloseBrace "}"
    "#);
}

#[test]
fn when_clause_retroactively_selects_the_pattern_label() {
    insta::assert_snapshot!(stmt("switch (x) { case 1 when b: break; }"), @r#"
    Fragment
      SwitchStatement
        KwSwitch "switch"
        OpenParen "("
        IdentifierName
          Identifier "x"
        CloseParen ")"
        OpenBrace "{"
        SwitchSection
          CasePatternSwitchLabel
            KwCase "case"
            ConstantPattern
              Literal
                IntegerLiteral "1"
            WhenClause
              Identifier "when"
              IdentifierName
                Identifier "b"
            Colon ":"
          BreakStatement
            KwBreak "break"
            Semicolon ";"
        CloseBrace "}"
    "#);
}

#[test]
fn new_in_expression_position_is_object_creation() {
    insta::assert_snapshot!(expr("new Foo()"), @r#"
    Fragment
      ObjectCreationExpression
        KwNew "new"
        IdentifierName
          Identifier "Foo"
        ArgumentList
          OpenParen "("
          CloseParen ")"
    "#);
}

#[test]
fn new_in_member_position_is_a_modifier() {
    insta::assert_snapshot!(cst("class C { new void F() { } }"), @r#"
    CompilationUnit
      ClassDeclaration
        KwClass "class"
        Identifier "C"
        ClassBody
          OpenBrace "{"
          MethodDeclaration
            Modifier
              KwNew "new"
            PredefinedType
              KwVoid "void"
            Identifier "F"
            ParameterList
              OpenParen "("
              CloseParen ")"
            Block
              OpenBrace "{"
              CloseBrace "}"
          CloseBrace "}"
    "#);
}

#[test]
fn event_with_accessor_list_is_an_event_declaration() {
    insta::assert_snapshot!(cst("class C { event Handler Changed { add { } remove { } } }"), @r#"
    CompilationUnit
      ClassDeclaration
        KwClass "class"
        Identifier "C"
        ClassBody
          OpenBrace "{"
          EventDeclaration
            KwEvent "event"
            IdentifierName
              Identifier "Handler"
            Identifier "Changed"
            AccessorList
              OpenBrace "{"
              AccessorDeclaration
                Identifier "add"
                Block
                  OpenBrace "{"
                  CloseBrace "}"
              AccessorDeclaration
                Identifier "remove"
                Block
                  OpenBrace "{"
                  CloseBrace "}"
              CloseBrace "}"
          CloseBrace "}"
    "#);
}

#[test]
fn event_without_accessors_is_a_field_with_declarators() {
    insta::assert_snapshot!(cst("class C { event Handler a, b; }"), @r#"
    CompilationUnit
      ClassDeclaration
        KwClass "class"
        Identifier "C"
        ClassBody
          OpenBrace "{"
          EventFieldDeclaration
            KwEvent "event"
            VariableDeclaration
              IdentifierName
                Identifier "Handler"
              VariableDeclarator
                Identifier "a"
              Comma ","
              VariableDeclarator
                Identifier "b"
            Semicolon ";"
          CloseBrace "}"
    "#);
}

#[test]
fn type_then_declarator_commits_to_a_declaration_statement() {
    insta::assert_snapshot!(stmt("List<int> x;"), @r#"
    Fragment
      LocalDeclarationStatement
        VariableDeclaration
          GenericName
            Identifier "List"
            TypeArgumentList
              LessThan "<"
              PredefinedType
                KwInt "int"
              GreaterThan ">"
          VariableDeclarator
            Identifier "x"
        Semicolon ";"
    "#);
}

#[test]
fn plain_assignment_stays_an_expression_statement() {
    insta::assert_snapshot!(stmt("x = 1;"), @r#"
    Fragment
      ExpressionStatement
        AssignmentExpression
          IdentifierName
            Identifier "x"
          AssignmentOperator
            Equals "="
          Literal
            IntegerLiteral "1"
        Semicolon ";"
    "#);
}
