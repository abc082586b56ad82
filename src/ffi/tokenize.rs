//! Tokenize entry points

use std::ffi::CStr;
use std::os::raw::c_char;
use std::ptr;

use super::layout::TokenList;
use super::owned::OwnedTokenList;
use crate::error::{
    clear_error_message, set_error_message, AhoyErrorCode, TokenizeError, TokenizeResult,
};
use crate::lexer::AhoyLexer;
use crate::source::TokenSource;

/// Reinterpret a foreign NUL-terminated buffer as UTF-8 text.
///
/// # Safety
/// `source`はnullか、有効なnull終端C文字列を指すポインタである必要があります。
/// 返される`&str`は呼び出しの間だけ使用すること。
pub unsafe fn decode_source<'a>(source: *const c_char) -> TokenizeResult<&'a str> {
    if source.is_null() {
        return Err(TokenizeError::NullSource);
    }
    // SAFETY: 呼び出し側が有効なnull終端C文字列を提供することを前提とする
    CStr::from_ptr(source)
        .to_str()
        .map_err(|e| TokenizeError::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        })
}

/// Run `tokenizer` over `source` and marshal the result.
///
/// # Safety
/// Same as [`decode_source`].
pub unsafe fn try_tokenize_with<S>(
    source: *const c_char,
    tokenizer: &S,
) -> TokenizeResult<OwnedTokenList>
where
    S: TokenSource + ?Sized,
{
    let text = decode_source(source)?;
    let tokens = tokenizer.tokenize(text)?;
    let list = OwnedTokenList::from_tokens(tokens)?;
    log::debug!(
        "tokenized {} bytes into {} tokens",
        text.len(),
        list.len()
    );
    Ok(list)
}

/// Run `tokenizer` over `source` and hand the list to the caller.
///
/// Returns null when the input is rejected (see [`TokenizeError`]); a
/// successful call with no tokens returns a list with `count == 0`.
///
/// # Safety
/// Same as [`decode_source`]. The returned handle must be released exactly
/// once with `free_token_list`.
pub unsafe fn tokenize_with<S>(source: *const c_char, tokenizer: &S) -> *mut TokenList
where
    S: TokenSource + ?Sized,
{
    match try_tokenize_with(source, tokenizer) {
        Ok(list) => list.into_raw(),
        Err(e) => {
            log::warn!("rejected tokenize request: {}", e);
            ptr::null_mut()
        }
    }
}

/// Tokenize Ahoy source text
///
/// # Arguments
/// * `source` - Source text (null-terminated, UTF-8)
///
/// # Returns
/// * Pointer to a TokenList on success (possibly with `count == 0`)
/// * Null if `source` is null, not valid UTF-8, or cannot be represented
///
/// # Safety
/// `source` must point to a NUL-terminated buffer that stays alive for the
/// duration of the call. The returned list must be freed with
/// `free_token_list`, exactly once, and must not be touched afterwards.
#[no_mangle]
pub unsafe extern "C" fn tokenize_ahoy(source: *const c_char) -> *mut TokenList {
    tokenize_with(source, &AhoyLexer::default())
}

/// Tokenize Ahoy source text, reporting failures as a message
///
/// # Arguments
/// * `source` - Source text (null-terminated, UTF-8)
/// * `error_out` - Optional pointer to receive an error message (must be freed with `ahoy_free_string`)
///
/// # Returns
/// * Pointer to a TokenList on success, null on failure
///
/// # Safety
/// Same as `tokenize_ahoy`. `error_out` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn tokenize_ahoy_checked(
    source: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut TokenList {
    match try_tokenize_with(source, &AhoyLexer::default()) {
        Ok(list) => {
            clear_error_message(error_out);
            list.into_raw()
        }
        Err(e) => {
            log::warn!("rejected tokenize request: {}", e);
            set_error_message(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Tokenize Ahoy source text, reporting failures as a status code
///
/// # Arguments
/// * `source` - Source text (null-terminated, UTF-8)
/// * `list_out` - Pointer to receive the TokenList (set to null on failure)
///
/// # Returns
/// * AhoyErrorCode::Success on success, error code on failure
///
/// # Safety
/// Same as `tokenize_ahoy`. `list_out` must be writable.
#[no_mangle]
pub unsafe extern "C" fn ahoy_tokenize_status(
    source: *const c_char,
    list_out: *mut *mut TokenList,
) -> AhoyErrorCode {
    if list_out.is_null() {
        return AhoyErrorCode::InvalidArgument;
    }
    match try_tokenize_with(source, &AhoyLexer::default()) {
        Ok(list) => {
            *list_out = list.into_raw();
            AhoyErrorCode::Success
        }
        Err(e) => {
            log::warn!("rejected tokenize request: {}", e);
            *list_out = ptr::null_mut();
            AhoyErrorCode::from(&e)
        }
    }
}
