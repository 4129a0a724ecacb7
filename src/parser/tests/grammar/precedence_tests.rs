//! Pins for the operator precedence table and associativity rules.

use crate::parser::tests::expr;

#[test]
fn multiplication_binds_tighter_than_addition() {
    insta::assert_snapshot!(expr("a + b * c"), @r#"
    Fragment
      BinaryExpression
        IdentifierName
          Identifier "a"
        Plus "+"
        BinaryExpression
          IdentifierName
            Identifier "b"
          Star "*"
          IdentifierName
            Identifier "c"
    "#);
}

#[test]
fn addition_left_associates() {
    insta::assert_snapshot!(expr("a - b + c"), @r#"
    Fragment
      BinaryExpression
        BinaryExpression
          IdentifierName
            Identifier "a"
          Minus "-"
          IdentifierName
            Identifier "b"
        Plus "+"
        IdentifierName
          Identifier "c"
    "#);
}

#[test]
fn assignment_right_associates() {
    insta::assert_snapshot!(expr("a = b = c"), @r#"
    Fragment
      AssignmentExpression
        IdentifierName
          Identifier "a"
        AssignmentOperator
          Equals "="
        AssignmentExpression
          IdentifierName
            Identifier "b"
          AssignmentOperator
            Equals "="
          IdentifierName
            Identifier "c"
    "#);
}

#[test]
fn conditional_right_associates() {
    insta::assert_snapshot!(expr("a ? b : c"), @r#"
    Fragment
      ConditionalExpression
        IdentifierName
          Identifier "a"
        Question "?"
        IdentifierName
          Identifier "b"
        Colon ":"
        IdentifierName
          Identifier "c"
    "#);
}

#[test]
fn logical_operators_rank_below_bitwise() {
    insta::assert_snapshot!(expr("a && b | c"), @r#"
    Fragment
      BinaryExpression
        IdentifierName
          Identifier "a"
        AmpAmp "&&"
        BinaryExpression
          IdentifierName
            Identifier "b"
          Pipe "|"
          IdentifierName
            Identifier "c"
    "#);
}

#[test]
fn xor_sits_between_or_and_and() {
    insta::assert_snapshot!(expr("a | b ^ c & d"), @r#"
    Fragment
      BinaryExpression
        IdentifierName
          Identifier "a"
        Pipe "|"
        BinaryExpression
          IdentifierName
            Identifier "b"
          Caret "^"
          BinaryExpression
            IdentifierName
              Identifier "c"
            Amp "&"
            IdentifierName
              Identifier "d"
    "#);
}

#[test]
fn shift_right_glues_adjacent_greater_than() {
    insta::assert_snapshot!(expr("a >> b"), @r#"
    Fragment
      BinaryExpression
        IdentifierName
          Identifier "a"
        GreaterThan ">"
        GreaterThan ">"
        IdentifierName
          Identifier "b"
    "#);
}

#[test]
fn shift_assign_glues_adjacent_tokens() {
    insta::assert_snapshot!(expr("a >>= b"), @r#"
    Fragment
      AssignmentExpression
        IdentifierName
          Identifier "a"
        AssignmentOperator
          GreaterThan ">"
          GreaterThanEquals ">="
        IdentifierName
          Identifier "b"
    "#);
}

#[test]
fn null_coalescing_shares_the_equality_rank() {
    insta::assert_snapshot!(expr("a ?? b == c"), @r#"
    Fragment
      BinaryExpression
        BinaryExpression
          IdentifierName
            Identifier "a"
          QuestionQuestion "??"
          IdentifierName
            Identifier "b"
        EqualsEquals "=="
        IdentifierName
          Identifier "c"
    "#);
}

#[test]
fn is_operator_parses_as_binary() {
    insta::assert_snapshot!(expr("x is Foo"), @r#"
    Fragment
      BinaryExpression
        IdentifierName
          Identifier "x"
        KwIs "is"
        IdentifierName
          Identifier "Foo"
    "#);
}

#[test]
fn prefix_unary_binds_tighter_than_binary() {
    insta::assert_snapshot!(expr("-a * b"), @r#"
    Fragment
      BinaryExpression
        PrefixUnaryExpression
          Minus "-"
          IdentifierName
            Identifier "a"
        Star "*"
        IdentifierName
          Identifier "b"
    "#);
}

#[test]
fn postfix_binds_inside_prefix() {
    insta::assert_snapshot!(expr("-a++"), @r#"
    Fragment
      PrefixUnaryExpression
        Minus "-"
        PostfixUnaryExpression
          IdentifierName
            Identifier "a"
          PlusPlus "++"
    "#);
}

#[test]
fn await_sequences_at_the_lowest_level() {
    insta::assert_snapshot!(expr("await a + b"), @r#"
    Fragment
      AwaitExpression
        Identifier "await"
        BinaryExpression
          IdentifierName
            Identifier "a"
          Plus "+"
          IdentifierName
            Identifier "b"
    "#);
}
