//! Ahoy Tokenizer Library
//!
//! This library hands Ahoy token streams to foreign callers through a C ABI.
//! The exported functions live in [`ffi`]; [`lexer`] is the default token
//! source and [`source`] is the seam for plugging in another one.

pub mod error;
pub mod ffi;
pub mod lexer;
pub mod source;

// Re-export commonly used types
pub use error::{AhoyErrorCode, TokenizeError, TokenizeResult};
pub use ffi::{free_token_list, tokenize_ahoy, OwnedTokenList, Token, TokenList, TokenRecord};
pub use lexer::{AhoyLexer, Lexer, LexerOptions, TokenKind};
pub use source::{SourceToken, TokenSource};
