//! Release entry points

use std::ffi::CString;
use std::os::raw::c_char;

use super::layout::TokenList;
use super::owned::OwnedTokenList;

/// Free a TokenList returned by `tokenize_ahoy` (or one of its variants)
///
/// Releases every entry's text, then the entry array, then the list itself.
/// Passing null is a no-op.
///
/// # Safety
/// This function must only be called with pointers returned by the tokenize
/// functions of this library. Calling it twice on the same list, or reading the
/// list after this call, is undefined behavior; nothing here can detect it.
#[no_mangle]
pub unsafe extern "C" fn free_token_list(list: *mut TokenList) {
    // SAFETY: 呼び出し側が未解放のハンドルであることを保証する
    if let Some(owned) = OwnedTokenList::from_raw(list) {
        log::debug!("releasing token list with {} entries", owned.len());
        drop(owned);
    }
}

/// Free a C string allocated by this library
///
/// # Safety
/// This function must only be called with strings returned through an
/// `error_out` parameter. Calling it with arbitrary pointers or multiple times
/// on the same pointer is undefined behavior.
#[no_mangle]
pub unsafe extern "C" fn ahoy_free_string(s: *mut c_char) {
    if !s.is_null() {
        // SAFETY: 呼び出し側がこのライブラリで割り当てられたポインタを
        // 提供することを前提とする
        let _ = CString::from_raw(s);
    }
}
