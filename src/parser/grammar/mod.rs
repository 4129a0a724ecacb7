//! Grammar productions for the C# surface.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`,
//! one method per named production. Choices dispatch on FIRST sets in
//! declaration order; locally ambiguous prefixes go through the resolvers
//! in `conflicts` before committing.

mod expressions;
mod items;
mod patterns;
mod statements;
mod types;
mod utils;
