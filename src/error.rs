//! 統一的なエラーハンドリングモジュール
//!
//! トークナイズ境界で発生し得るエラー型と、C側へ返すエラーコードを提供します。

use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use thiserror::Error;

/// トークナイズ処理の統一エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// 入力ポインタがnull
    #[error("source pointer is null")]
    NullSource,

    /// 入力がUTF-8として不正
    #[error("source is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },

    /// トークンテキストにNULバイトが含まれる
    #[error("token {index} contains an interior NUL byte")]
    InteriorNul { index: usize },

    /// トークン数が32ビット符号付き整数に収まらない
    #[error("token count {count} does not fit in a 32-bit signed integer")]
    TooManyTokens { count: usize },

    /// 行番号が32ビット符号付き整数に収まらない
    #[error("token {index} has line {line}, which does not fit in a 32-bit signed integer")]
    LineOverflow { index: usize, line: usize },

    /// トークナイザ側のエラー
    #[error("tokenizer failed: {0}")]
    Collaborator(String),
}

/// トークナイズ処理の結果型
pub type TokenizeResult<T> = Result<T, TokenizeError>;

/// Status codes returned across the C boundary
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AhoyErrorCode {
    Success = 0,
    InvalidArgument = 1,
    InvalidEncoding = 2,
    TokenizationError = 3,
    RepresentationError = 4,
}

impl From<&TokenizeError> for AhoyErrorCode {
    fn from(error: &TokenizeError) -> Self {
        match error {
            TokenizeError::NullSource => AhoyErrorCode::InvalidArgument,
            TokenizeError::InvalidUtf8 { .. } => AhoyErrorCode::InvalidEncoding,
            TokenizeError::Collaborator(_) => AhoyErrorCode::TokenizationError,
            TokenizeError::InteriorNul { .. }
            | TokenizeError::TooManyTokens { .. }
            | TokenizeError::LineOverflow { .. } => AhoyErrorCode::RepresentationError,
        }
    }
}

/// Write a newly allocated copy of `message` into `error_out`.
///
/// The string must be released with `ahoy_free_string`. A null `error_out` is ignored.
///
/// # Safety
/// `error_out`はnullか、書き込み可能な`*mut c_char`を指すポインタである必要があります。
pub unsafe fn set_error_message(error_out: *mut *mut c_char, message: &str) {
    if error_out.is_null() {
        return;
    }
    // SAFETY: error_outは非nullで書き込み可能であることを呼び出し側が保証する
    *error_out = match CString::new(message) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => ptr::null_mut(),
    };
}

/// Reset `error_out` to null.
///
/// # Safety
/// `set_error_message`と同じ条件を満たす必要があります。
pub unsafe fn clear_error_message(error_out: *mut *mut c_char) {
    if !error_out.is_null() {
        // SAFETY: error_outは非nullで書き込み可能であることを呼び出し側が保証する
        *error_out = ptr::null_mut();
    }
}
