//! Statement surface.

use crate::parser::tests::stmt;

#[test]
fn empty_statement() {
    insta::assert_snapshot!(stmt(";"), @r#"
    Fragment
      EmptyStatement
        Semicolon ";"
    "#);
}

#[test]
fn if_with_else() {
    insta::assert_snapshot!(stmt("if (x) return; else throw e;"), @r#"
    Fragment
      IfStatement
        KwIf "if"
        OpenParen "("
        IdentifierName
          Identifier "x"
        CloseParen ")"
        ReturnStatement
          KwReturn "return"
          Semicolon ";"
        ElseClause
          KwElse "else"
          ThrowStatement
            KwThrow "throw"
            IdentifierName
              Identifier "e"
            Semicolon ";"
      "#);
}

#[test]
fn while_loop() {
    insta::assert_snapshot!(stmt("while (b) { }"), @r#"
    Fragment
      WhileStatement
        KwWhile "while"
        OpenParen "("
        IdentifierName
          Identifier "b"
        CloseParen ")"
        Block
          OpenBrace "{"
          CloseBrace "}"
    "#);
}

#[test]
fn do_while_loop() {
    insta::assert_snapshot!(stmt("do f(); while (b);"), @r#"
    Fragment
      DoStatement
        KwDo "do"
        ExpressionStatement
          InvocationExpression
            IdentifierName
              Identifier "f"
            ArgumentList
              OpenParen "("
              CloseParen ")"
          Semicolon ";"
        KwWhile "while"
        OpenParen "("
        IdentifierName
          Identifier "b"
        CloseParen ")"
        Semicolon ";"
    "#);
}

#[test]
fn for_with_declaration_initializer() {
    insta::assert_snapshot!(stmt("for (int i = 0; i < n; i++) { }"), @r#"
    Fragment
      ForStatement
        KwFor "for"
        OpenParen "("
        VariableDeclaration
          PredefinedType
            KwInt "int"
          VariableDeclarator
            Identifier "i"
            EqualsValueClause
              Equals "="
              Literal
                IntegerLiteral "0"
        Semicolon ";"
        BinaryExpression
          IdentifierName
            Identifier "i"
          LessThan "<"
          IdentifierName
            Identifier "n"
        Semicolon ";"
        PostfixUnaryExpression
          IdentifierName
            Identifier "i"
          PlusPlus "++"
        CloseParen ")"
        Block
          OpenBrace "{"
          CloseBrace "}"
    "#);
}

#[test]
fn typed_foreach() {
    insta::assert_snapshot!(stmt("foreach (int x in xs) { }"), @r#"
    Fragment
      ForEachStatement
        KwForeach "foreach"
        OpenParen "("
        PredefinedType
          KwInt "int"
        Identifier "x"
        KwIn "in"
        IdentifierName
          Identifier "xs"
        CloseParen ")"
        Block
          OpenBrace "{"
          CloseBrace "}"
    "#);
}

#[test]
fn expression_foreach() {
    insta::assert_snapshot!(stmt("foreach (x in xs) f();"), @r#"
    Fragment
      ForEachStatement
        KwForeach "foreach"
        OpenParen "("
        IdentifierName
          Identifier "x"
        KwIn "in"
        IdentifierName
          Identifier "xs"
        CloseParen ")"
        ExpressionStatement
          InvocationExpression
            IdentifierName
              Identifier "f"
            ArgumentList
              OpenParen "("
              CloseParen ")"
          Semicolon ";"
    "#);
}

#[test]
fn labeled_statement_and_goto_use_the_label_alias() {
    insta::assert_snapshot!(stmt("start: goto start;"), @r#"
    Fragment
      LabeledStatement
        LabelName
          Identifier "start"
        Colon ":"
        GotoStatement
          KwGoto "goto"
          LabelName
            Identifier "start"
          Semicolon ";"
    "#);
}

#[test]
fn goto_case_and_default() {
    insta::assert_snapshot!(stmt("switch (x) { case 1: goto default; default: goto case 1; }"), @r#"
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
          GotoStatement
            KwGoto "goto"
            KwDefault "default"
            Semicolon ";"
        SwitchSection
          DefaultSwitchLabel
            KwDefault "default"
            Colon ":"
          GotoStatement
            KwGoto "goto"
            KwCase "case"
            Literal
              IntegerLiteral "1"
            Semicolon ";"
        CloseBrace "}"
    "#);
}

#[test]
fn switch_with_pattern_section() {
    insta::assert_snapshot!(stmt("switch (x) { case int n: break; }"), @r#"
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
            DeclarationPattern
              PredefinedType
                KwInt "int"
              SingleVariableDesignation
                Identifier "n"
            Colon ":"
          BreakStatement
            KwBreak "break"
            Semicolon ";"
        CloseBrace "}"
    "#);
}

#[test]
fn var_pattern_in_case_label() {
    insta::assert_snapshot!(stmt("switch (x) { case var v: break; }"), @r#"
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
            VarPattern
              Identifier "var"
              SingleVariableDesignation
                Identifier "v"
            Colon ":"
          BreakStatement
            KwBreak "break"
            Semicolon ";"
        CloseBrace "}"
    "#);
}

#[test]
fn try_catch_filter_finally() {
    insta::assert_snapshot!(stmt("try { } catch (Exception e) when (b) { } finally { }"), @r#"
    Fragment
      TryStatement
        KwTry "try"
        Block
          OpenBrace "{"
          CloseBrace "}"
        CatchClause
          KwCatch "catch"
          CatchDeclaration
            OpenParen "("
            IdentifierName
              Identifier "Exception"
            Identifier "e"
            CloseParen ")"
          CatchFilterClause
            Identifier "when"
            OpenParen "("
            IdentifierName
              Identifier "b"
            CloseParen ")"
          Block
            OpenBrace "{"
            CloseBrace "}"
        FinallyClause
          KwFinally "finally"
          Block
            OpenBrace "{"
            CloseBrace "}"
    "#);
}

#[test]
fn using_statement_with_declaration() {
    insta::assert_snapshot!(stmt("using (var r = f()) { }"), @r#"
    Fragment
      UsingStatement
        KwUsing "using"
        OpenParen "("
        VariableDeclaration
          IdentifierName
            Identifier "var"
          VariableDeclarator
            Identifier "r"
            EqualsValueClause
              Equals "="
              InvocationExpression
                IdentifierName
                  Identifier "f"
                ArgumentList
                  OpenParen "("
                  CloseParen ")"
        CloseParen ")"
        Block
          OpenBrace "{"
          CloseBrace "}"
    "#);
}

#[test]
fn lock_statement() {
    insta::assert_snapshot!(stmt("lock (gate) { }"), @r#"
    Fragment
      LockStatement
        KwLock "lock"
        OpenParen "("
        IdentifierName
          Identifier "gate"
        CloseParen ")"
        Block
          OpenBrace "{"
          CloseBrace "}"
    "#);
}

#[test]
fn fixed_statement() {
    insta::assert_snapshot!(stmt("fixed (int* p = x) { }"), @r#"
    Fragment
      FixedStatement
        KwFixed "fixed"
        OpenParen "("
        VariableDeclaration
          PointerType
            PredefinedType
              KwInt "int"
            Star "*"
          VariableDeclarator
            Identifier "p"
            EqualsValueClause
              Equals "="
              IdentifierName
                Identifier "x"
        CloseParen ")"
        Block
          OpenBrace "{"
          CloseBrace "}"
    "#);
}

#[test]
fn checked_and_unsafe_blocks() {
    insta::assert_snapshot!(stmt("checked { unsafe { } }"), @r#"
    Fragment
      CheckedStatement
        KwChecked "checked"
        Block
          OpenBrace "{"
          UnsafeStatement
            KwUnsafe "unsafe"
            Block
              OpenBrace "{"
              CloseBrace "}"
          CloseBrace "}"
    "#);
}

#[test]
fn yield_return_and_break() {
    insta::assert_snapshot!(stmt("{ yield return 1; yield break; }"), @r#"
    Fragment
      Block
        OpenBrace "{"
        YieldStatement
          Identifier "yield"
          KwReturn "return"
          Literal
            IntegerLiteral "1"
          Semicolon ";"
        YieldStatement
          Identifier "yield"
          KwBreak "break"
          Semicolon ";"
        CloseBrace "}"
    "#);
}

#[test]
fn await_expression_statement() {
    insta::assert_snapshot!(stmt("await t;"), @r#"
    Fragment
      ExpressionStatement
        AwaitExpression
          Identifier "await"
          IdentifierName
            Identifier "t"
        Semicolon ";"
    "#);
}

#[test]
fn await_foreach() {
    insta::assert_snapshot!(stmt("await foreach (x in xs) { }"), @r#"
    Fragment
      ForEachStatement
        Identifier "await"
        KwForeach "foreach"
        OpenParen "("
        IdentifierName
          Identifier "x"
        KwIn "in"
        IdentifierName
          Identifier "xs"
        CloseParen ")"
        Block
          OpenBrace "{"
          CloseBrace "}"
    "#);
}

#[test]
fn local_function_with_expression_body() {
    insta::assert_snapshot!(stmt("int Add(int a, int b) => a + b;"), @r#"
    Fragment
      LocalFunctionStatement
        PredefinedType
          KwInt "int"
        Identifier "Add"
        ParameterList
          OpenParen "("
          Parameter
            PredefinedType
              KwInt "int"
            Identifier "a"
          Comma ","
          Parameter
            PredefinedType
              KwInt "int"
            Identifier "b"
          CloseParen ")"
        ArrowExpressionClause
          FatArrow "=>"
          BinaryExpression
            IdentifierName
              Identifier "a"
            Plus "+"
            IdentifierName
              Identifier "b"
        Semicolon ";"
    "#);
}

#[test]
fn const_local_declaration() {
    insta::assert_snapshot!(stmt("const int x = 1;"), @r#"
    Fragment
      LocalDeclarationStatement
        Modifier
          KwConst "const"
        VariableDeclaration
          PredefinedType
            KwInt "int"
          VariableDeclarator
            Identifier "x"
            EqualsValueClause
              Equals "="
              Literal
                IntegerLiteral "1"
        Semicolon ";"
    "#);
}

#[test]
fn pointer_declaration_wins_over_multiplication() {
    insta::assert_snapshot!(stmt("a * b;"), @r#"
    Fragment
      LocalDeclarationStatement
        VariableDeclaration
          PointerType
            IdentifierName
              Identifier "a"
            Star "*"
          VariableDeclarator
            Identifier "b"
        Semicolon ";"
    "#);
}
