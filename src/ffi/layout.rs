//! Wire layout shared with C consumers.
//!
//! The equivalent C declarations are:
//!
//! ```c
//! typedef struct {
//!     int token_type;
//!     char* value;
//!     int line;
//! } Token;
//!
//! typedef struct {
//!     Token* tokens;
//!     int count;
//! } TokenList;
//! ```

use std::ffi::CStr;
use std::os::raw::{c_char, c_int};

use serde::Serialize;

use crate::lexer::TokenKind;

/// One entry of a [`TokenList`]
#[repr(C)]
#[derive(Debug)]
pub struct Token {
    pub token_type: c_int,
    /// NUL-terminated text, owned by the containing list
    pub value: *mut c_char,
    /// 1始まりの行番号
    pub line: c_int,
}

impl Token {
    /// Borrow the entry's text.
    ///
    /// # Safety
    /// `value`は生きている`TokenList`に属する有効なnull終端C文字列である必要があります。
    pub unsafe fn text(&self) -> &CStr {
        // SAFETY: 呼び出し側がリスト解放前であることを保証する
        CStr::from_ptr(self.value)
    }
}

/// Handle returned by `tokenize_ahoy`, released by `free_token_list`
#[repr(C)]
#[derive(Debug)]
pub struct TokenList {
    pub tokens: *mut Token,
    pub count: c_int,
}

impl TokenList {
    /// Borrow the entries as a slice.
    ///
    /// # Safety
    /// The list must have been produced by this library and not yet released.
    pub unsafe fn entries(&self) -> &[Token] {
        if self.count <= 0 || self.tokens.is_null() {
            return &[];
        }
        // SAFETY: tokensは長さcountの連続した配列を指す
        std::slice::from_raw_parts(self.tokens, self.count as usize)
    }

    /// Copy every entry into owned records.
    ///
    /// # Safety
    /// Same as [`TokenList::entries`].
    pub unsafe fn to_records(&self) -> Vec<TokenRecord> {
        self.entries()
            .iter()
            .map(|token| TokenRecord::from_token(token))
            .collect()
    }
}

/// An owned copy of one wire entry, as a consumer would keep it after release
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    pub kind: i32,
    pub kind_name: &'static str,
    pub text: String,
    pub line: i32,
}

impl TokenRecord {
    /// # Safety
    /// Same as [`Token::text`].
    pub unsafe fn from_token(token: &Token) -> Self {
        Self {
            kind: token.token_type,
            kind_name: TokenKind::from_i32(token.token_type)
                .map(TokenKind::name)
                .unwrap_or("UNKNOWN"),
            text: token.text().to_string_lossy().into_owned(),
            line: token.line,
        }
    }
}
