//! Helpers for C consumers that want readable output

use std::os::raw::{c_char, c_int};

use crate::lexer::TokenKind;

const UNKNOWN_KIND: &str = "UNKNOWN\0";

/// Name of a token kind
///
/// # Returns
/// * Static NUL-terminated string; "UNKNOWN" for values outside the Ahoy vocabulary.
///   The string must NOT be freed.
#[no_mangle]
pub extern "C" fn ahoy_token_kind_name(kind: c_int) -> *const c_char {
    TokenKind::from_i32(kind)
        .map(TokenKind::nul_terminated_name)
        .unwrap_or(UNKNOWN_KIND)
        .as_ptr() as *const c_char
}

/// Route this library's log records to stderr
///
/// Honors `RUST_LOG`. Safe to call more than once; later calls do nothing.
#[no_mangle]
pub extern "C" fn ahoy_tokenizer_init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();
}
