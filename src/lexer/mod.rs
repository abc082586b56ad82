//! Lexical analysis module for the Ahoy language.
//!
//! This module turns Ahoy source text into a flat stream of tokens, including
//! the layout tokens (NEWLINE, INDENT, DEDENT) that Ahoy's block structure
//! depends on. It is the default token source behind the C entry points.

#[allow(clippy::module_inception)]
mod lexer;
mod token;

pub use lexer::{tokenize, AhoyLexer, LexedToken, Lexer, LexerOptions};
pub use token::TokenKind;
