//! Declaration surface: directives, types, and members.

use crate::parser::tests::cst;

#[test]
fn empty_input() {
    insta::assert_snapshot!(cst(""), @"CompilationUnit");
}

#[test]
fn using_directive() {
    insta::assert_snapshot!(cst("using System;"), @r#"
    CompilationUnit
      UsingDirective
        KwUsing "using"
        IdentifierName
          Identifier "System"
        Semicolon ";"
    "#);
}

#[test]
fn using_alias_directive() {
    insta::assert_snapshot!(cst("using S = System.Text;"), @r#"
    CompilationUnit
      UsingDirective
        KwUsing "using"
        NameEquals
          IdentifierName
            Identifier "S"
          Equals "="
        QualifiedName
          IdentifierName
            Identifier "System"
          Dot "."
          IdentifierName
            Identifier "Text"
        Semicolon ";"
    "#);
}

#[test]
fn using_static_directive() {
    insta::assert_snapshot!(cst("using static System.Math;"), @r#"
    CompilationUnit
      UsingDirective
        KwUsing "using"
        KwStatic "static"
        QualifiedName
          IdentifierName
            Identifier "System"
          Dot "."
          IdentifierName
            Identifier "Math"
        Semicolon ";"
    "#);
}

#[test]
fn extern_alias_directive() {
    insta::assert_snapshot!(cst("extern alias Lib;"), @r#"
    CompilationUnit
      ExternAliasDirective
        KwExtern "extern"
        Identifier "alias"
        Identifier "Lib"
        Semicolon ";"
    "#);
}

#[test]
fn global_using_qualifier() {
    insta::assert_snapshot!(cst("using global::System;"), @r#"
    CompilationUnit
      UsingDirective
        KwUsing "using"
        AliasQualifiedName
          IdentifierName
            Identifier "global"
          ColonColon "::"
          IdentifierName
            Identifier "System"
        Semicolon ";"
    "#);
}

#[test]
fn empty_namespace() {
    insta::assert_snapshot!(cst("namespace N { }"), @r#"
    CompilationUnit
      NamespaceDeclaration
        KwNamespace "namespace"
        IdentifierName
          Identifier "N"
        OpenBrace "{"
        CloseBrace "}"
    "#);
}

#[test]
fn namespace_with_directives_and_members() {
    insta::assert_snapshot!(cst("namespace A.B { using C; class D { } }"), @r#"
    CompilationUnit
      NamespaceDeclaration
        KwNamespace "namespace"
        QualifiedName
          IdentifierName
            Identifier "A"
          Dot "."
          IdentifierName
            Identifier "B"
        OpenBrace "{"
        UsingDirective
          KwUsing "using"
          IdentifierName
            Identifier "C"
          Semicolon ";"
        ClassDeclaration
          KwClass "class"
          Identifier "D"
          ClassBody
            OpenBrace "{"
            CloseBrace "}"
        CloseBrace "}"
    "#);
}

#[test]
fn class_with_base_list() {
    insta::assert_snapshot!(cst("class C : Base, IFace { }"), @r#"
    CompilationUnit
      ClassDeclaration
        KwClass "class"
        Identifier "C"
        BaseList
          Colon ":"
          IdentifierName
            Identifier "Base"
          Comma ","
          IdentifierName
            Identifier "IFace"
        ClassBody
          OpenBrace "{"
          CloseBrace "}"
    "#);
}

#[test]
fn struct_and_interface_share_the_class_shape() {
    insta::assert_snapshot!(cst("struct S { } interface I { }"), @r#"
    CompilationUnit
      StructDeclaration
        KwStruct "struct"
        Identifier "S"
        ClassBody
          OpenBrace "{"
          CloseBrace "}"
      InterfaceDeclaration
        KwInterface "interface"
        Identifier "I"
        ClassBody
          OpenBrace "{"
          CloseBrace "}"
    "#);
}

#[test]
fn constraint_clause() {
    insta::assert_snapshot!(cst("class C<T> where T : class { }"), @r#"
    CompilationUnit
      ClassDeclaration
        KwClass "class"
        Identifier "C"
        TypeParameterList
          LessThan "<"
          Identifier "T"
          GreaterThan ">"
        TypeParameterConstraintsClause
          Identifier "where"
          Identifier "T"
          Colon ":"
          KwClass "class"
        ClassBody
          OpenBrace "{"
          CloseBrace "}"
    "#);
}

#[test]
fn constructor_constraint_and_type_constraint() {
    insta::assert_snapshot!(cst("class C<T> where T : IFace, new() { }"), @r#"
    CompilationUnit
      ClassDeclaration
        KwClass "class"
        Identifier "C"
        TypeParameterList
          LessThan "<"
          Identifier "T"
          GreaterThan ">"
        TypeParameterConstraintsClause
          Identifier "where"
          Identifier "T"
          Colon ":"
          TypeConstraint
            IdentifierName
              Identifier "IFace"
          Comma ","
          ConstructorConstraint
            KwNew "new"
            OpenParen "("
            CloseParen ")"
        ClassBody
          OpenBrace "{"
          CloseBrace "}"
    "#);
}

#[test]
fn field_with_multiple_declarators() {
    insta::assert_snapshot!(cst("class C { int x, y = 2; }"), @r#"
    CompilationUnit
      ClassDeclaration
        KwClass "class"
        Identifier "C"
        ClassBody
          OpenBrace "{"
          FieldDeclaration
            VariableDeclaration
              PredefinedType
                KwInt "int"
              VariableDeclarator
                Identifier "x"
              Comma ","
              VariableDeclarator
                Identifier "y"
                EqualsValueClause
                  Equals "="
                  Literal
                    IntegerLiteral "2"
            Semicolon ";"
          CloseBrace "}"
    "#);
}

#[test]
fn method_with_params_array() {
    insta::assert_snapshot!(cst("class C { int F(int a, params int[] b) { return a; } }"), @r#"
    CompilationUnit
      ClassDeclaration
        KwClass "class"
        Identifier "C"
        ClassBody
          OpenBrace "{"
          MethodDeclaration
            PredefinedType
              KwInt "int"
            Identifier "F"
            ParameterList
              OpenParen "("
              Parameter
                PredefinedType
                  KwInt "int"
                Identifier "a"
              Comma ","
              ParameterArray
                KwParams "params"
                ArrayType
                  PredefinedType
                    KwInt "int"
                  ArrayRankSpecifier
                    OpenBracket "["
                    CloseBracket "]"
                Identifier "b"
              CloseParen ")"
            Block
              OpenBrace "{"
              ReturnStatement
                KwReturn "return"
                IdentifierName
                  Identifier "a"
                Semicolon ";"
              CloseBrace "}"
          CloseBrace "}"
    "#);
}

#[test]
fn property_with_accessors() {
    insta::assert_snapshot!(cst("class C { int P { get; set; } }"), @r#"
    CompilationUnit
      ClassDeclaration
        KwClass "class"
        Identifier "C"
        ClassBody
          OpenBrace "{"
          PropertyDeclaration
            PredefinedType
              KwInt "int"
            Identifier "P"
            AccessorList
              OpenBrace "{"
              AccessorDeclaration
                Identifier "get"
                Semicolon ";"
              AccessorDeclaration
                Identifier "set"
                Semicolon ";"
              CloseBrace "}"
          CloseBrace "}"
    "#);
}

#[test]
fn expression_bodied_property() {
    insta::assert_snapshot!(cst("class C { int P => x; }"), @r#"
    CompilationUnit
      ClassDeclaration
        KwClass "class"
        Identifier "C"
        ClassBody
          OpenBrace "{"
          PropertyDeclaration
            PredefinedType
              KwInt "int"
            Identifier "P"
            ArrowExpressionClause
              FatArrow "=>"
              IdentifierName
                Identifier "x"
            Semicolon ";"
          CloseBrace "}"
    "#);
}

#[test]
fn constructor_with_initializer() {
    insta::assert_snapshot!(cst("class C { C() : base() { } }"), @r#"
    CompilationUnit
      ClassDeclaration
        KwClass "class"
        Identifier "C"
        ClassBody
          OpenBrace "{"
          ConstructorDeclaration
            Identifier "C"
            ParameterList
              OpenParen "("
              CloseParen ")"
            ConstructorInitializer
              Colon ":"
              KwBase "base"
              ArgumentList
                OpenParen "("
                CloseParen ")"
            Block
              OpenBrace "{"
              CloseBrace "}"
          CloseBrace "}"
    "#);
}

#[test]
fn destructor() {
    insta::assert_snapshot!(cst("class C { ~C() { } }"), @r#"
    CompilationUnit
      ClassDeclaration
        KwClass "class"
        Identifier "C"
        ClassBody
          OpenBrace "{"
          DestructorDeclaration
            Tilde "~"
            Identifier "C"
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
fn operator_declaration() {
    insta::assert_snapshot!(cst("class C { static C operator +(C a, C b) { } }"), @r#"
    CompilationUnit
      ClassDeclaration
        KwClass "class"
        Identifier "C"
        ClassBody
          OpenBrace "{"
          OperatorDeclaration
            Modifier
              KwStatic "static"
            IdentifierName
              Identifier "C"
            KwOperator "operator"
            Plus "+"
            ParameterList
              OpenParen "("
              Parameter
                IdentifierName
                  Identifier "C"
                Identifier "a"
              Comma ","
              Parameter
                IdentifierName
                  Identifier "C"
                Identifier "b"
              CloseParen ")"
            Block
              OpenBrace "{"
              CloseBrace "}"
          CloseBrace "}"
    "#);
}

#[test]
fn conversion_operator_with_expression_body() {
    insta::assert_snapshot!(cst("class C { public static implicit operator int(C c) => 0; }"), @r#"
    CompilationUnit
      ClassDeclaration
        KwClass "class"
        Identifier "C"
        ClassBody
          OpenBrace "{"
          ConversionOperatorDeclaration
            Modifier
              KwPublic "public"
            Modifier
              KwStatic "static"
            KwImplicit "implicit"
            KwOperator "operator"
            PredefinedType
              KwInt "int"
            ParameterList
              OpenParen "("
              Parameter
                IdentifierName
                  Identifier "C"
                Identifier "c"
              CloseParen ")"
            ArrowExpressionClause
              FatArrow "=>"
              Literal
                IntegerLiteral "0"
            Semicolon ";"
          CloseBrace "}"
    "#);
}

#[test]
fn indexer_declaration() {
    insta::assert_snapshot!(cst("class C { int this[int i] { get; } }"), @r#"
    CompilationUnit
      ClassDeclaration
        KwClass "class"
        Identifier "C"
        ClassBody
          OpenBrace "{"
          IndexerDeclaration
            PredefinedType
              KwInt "int"
            KwThis "this"
            BracketedParameterList
              OpenBracket "["
              Parameter
                PredefinedType
                  KwInt "int"
                Identifier "i"
              CloseBracket "]"
            AccessorList
              OpenBrace "{"
              AccessorDeclaration
                Identifier "get"
                Semicolon ";"
              CloseBrace "}"
          CloseBrace "}"
    "#);
}

#[test]
fn explicit_interface_method() {
    insta::assert_snapshot!(cst("class C { void I.F() { } }"), @r#"
    CompilationUnit
      ClassDeclaration
        KwClass "class"
        Identifier "C"
        ClassBody
          OpenBrace "{"
          MethodDeclaration
            PredefinedType
              KwVoid "void"
            ExplicitInterfaceSpecifier
              IdentifierName
                Identifier "I"
              Dot "."
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
fn delegate_declaration() {
    insta::assert_snapshot!(cst("delegate void D(int x);"), @r#"
    CompilationUnit
      DelegateDeclaration
        KwDelegate "delegate"
        PredefinedType
          KwVoid "void"
        Identifier "D"
        ParameterList
          OpenParen "("
          Parameter
            PredefinedType
              KwInt "int"
            Identifier "x"
          CloseParen ")"
        Semicolon ";"
    "#);
}

#[test]
fn attribute_on_declaration() {
    insta::assert_snapshot!(cst("[Obsolete] class C { }"), @r#"
    CompilationUnit
      ClassDeclaration
        AttributeList
          OpenBracket "["
          Attribute
            Identifier "Obsolete"
          CloseBracket "]"
        KwClass "class"
        Identifier "C"
        ClassBody
          OpenBrace "{"
          CloseBrace "}"
    "#);
}

#[test]
fn attribute_with_arguments() {
    insta::assert_snapshot!(cst("[Limit(10, Name = x)] class C { }"), @r#"
    CompilationUnit
      ClassDeclaration
        AttributeList
          OpenBracket "["
          Attribute
            Identifier "Limit"
            AttributeArgumentList
              OpenParen "("
              AttributeArgument
                Literal
                  IntegerLiteral "10"
              Comma ","
              AttributeArgument
                NameEquals
                  IdentifierName
                    Identifier "Name"
                  Equals "="
                IdentifierName
                  Identifier "x"
              CloseParen ")"
          CloseBracket "]"
        KwClass "class"
        Identifier "C"
        ClassBody
          OpenBrace "{"
          CloseBrace "}"
    "#);
}

#[test]
fn global_attribute_list() {
    insta::assert_snapshot!(cst("[assembly: Version]"), @r#"
    CompilationUnit
      GlobalAttributeList
        OpenBracket "["
        Identifier "assembly"
        Colon ":"
        Attribute
          Identifier "Version"
        CloseBracket "]"
    "#);
}

#[test]
fn enum_with_base_and_values() {
    insta::assert_snapshot!(cst("enum E : byte { A = 1 }"), @r#"
    CompilationUnit
      EnumDeclaration
        KwEnum "enum"
        Identifier "E"
        BaseList
          Colon ":"
          PredefinedType
            KwByte "byte"
        OpenBrace "{"
        EnumMemberDeclaration
          Identifier "A"
          EqualsValueClause
            Equals "="
            Literal
              IntegerLiteral "1"
        CloseBrace "}"
    "#);
}

#[test]
fn async_and_partial_are_contextual_modifiers() {
    insta::assert_snapshot!(cst("partial class C { async void F() { } }"), @r#"
    CompilationUnit
      ClassDeclaration
        Modifier
          Identifier "partial"
        KwClass "class"
        Identifier "C"
        ClassBody
          OpenBrace "{"
          MethodDeclaration
            Modifier
              Identifier "async"
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
