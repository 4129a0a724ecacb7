mod conflicts_tests;
mod declarations_tests;
mod expressions_tests;
mod precedence_tests;
mod statements_tests;
