//! Root module for the template parsing machinery.
pub mod ast;
pub mod lexer;
pub mod meta;
pub mod parser;
pub mod tokens;
