//! Rust-side ownership of a wire [`TokenList`].
//!
//! Ownership is a tree: handle → entry array → one string per entry. An
//! [`OwnedTokenList`] owns the whole tree; dropping it is the only way the tree
//! is freed, and [`OwnedTokenList::into_raw`] / [`OwnedTokenList::from_raw`]
//! are the two points where that ownership crosses the C boundary.

use std::ffi::CString;
use std::mem::ManuallyDrop;
use std::os::raw::c_int;
use std::ptr::{self, NonNull};

use super::layout::{Token, TokenList};
use crate::error::{TokenizeError, TokenizeResult};
use crate::source::SourceToken;

/// An allocated token list that has not been handed to C yet (or has been handed back)
#[derive(Debug)]
pub struct OwnedTokenList {
    raw: NonNull<TokenList>,
}

// SAFETY: リストは排他的に所有されており、内部ポインタは他と共有されない
unsafe impl Send for OwnedTokenList {}

impl OwnedTokenList {
    /// Marshal a token sequence into the wire layout.
    ///
    /// Every fallible step runs before anything is laid out, so an error leaves
    /// nothing behind: the strings converted so far are dropped with the `Vec`
    /// that holds them.
    pub fn from_tokens(tokens: Vec<SourceToken>) -> TokenizeResult<Self> {
        let count = tokens.len();
        let count = c_int::try_from(count).map_err(|_| TokenizeError::TooManyTokens { count })?;

        let converted = tokens
            .into_iter()
            .enumerate()
            .map(|(index, token)| {
                let line = c_int::try_from(token.line).map_err(|_| TokenizeError::LineOverflow {
                    index,
                    line: token.line,
                })?;
                let text =
                    CString::new(token.text).map_err(|_| TokenizeError::InteriorNul { index })?;
                Ok((token.kind, text, line))
            })
            .collect::<TokenizeResult<Vec<_>>>()?;

        let entries: Box<[Token]> = converted
            .into_iter()
            .map(|(token_type, text, line)| Token {
                token_type,
                value: text.into_raw(),
                line,
            })
            .collect();
        // 空の場合は非nullで整列済みだが実際の割り当てではない（参照されることはない）
        let tokens = Box::into_raw(entries) as *mut Token;

        let raw = Box::new(TokenList { tokens, count });
        Ok(Self {
            raw: NonNull::from(Box::leak(raw)),
        })
    }

    /// Give up ownership; the pointer must eventually come back through
    /// [`OwnedTokenList::from_raw`] (which `free_token_list` does).
    pub fn into_raw(self) -> *mut TokenList {
        ManuallyDrop::new(self).raw.as_ptr()
    }

    /// Take ownership of a handle previously produced by [`OwnedTokenList::into_raw`].
    ///
    /// Returns `None` for a null handle.
    ///
    /// # Safety
    /// 呼び出し側は以下を保証する必要があります：
    /// - `list`はこのライブラリが返したハンドルである
    /// - このハンドルはまだ解放されていない
    /// - 呼び出し後にハンドルやその中のポインタを使用しない
    pub unsafe fn from_raw(list: *mut TokenList) -> Option<Self> {
        NonNull::new(list).map(|raw| Self { raw })
    }

    pub fn as_list(&self) -> &TokenList {
        // SAFETY: rawは生きているBox由来のポインタ
        unsafe { self.raw.as_ref() }
    }

    pub fn entries(&self) -> &[Token] {
        // SAFETY: このリストを所有している間は全エントリが有効
        unsafe { self.as_list().entries() }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl Drop for OwnedTokenList {
    fn drop(&mut self) {
        // SAFETY: rawはBox::leak由来で、所有権はこの値だけが持つ
        let list = unsafe { Box::from_raw(self.raw.as_ptr()) };
        let count = usize::try_from(list.count).unwrap_or(0);

        // SAFETY: tokensはBox<[Token]>をinto_rawしたもので、長さはcount
        let entries = unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(list.tokens, count)) };

        // 文字列 → 配列 → ハンドルの順で解放する
        for token in entries.iter() {
            if !token.value.is_null() {
                // SAFETY: valueはCString::into_raw由来
                drop(unsafe { CString::from_raw(token.value) });
            }
        }
        drop(entries);
        drop(list);
        log::trace!("released token list with {} entries", count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<SourceToken> {
        vec![
            SourceToken::new(40, "program", 1),
            SourceToken::new(4, "demo", 1),
            SourceToken::new(3, "\n", 1),
        ]
    }

    #[test]
    fn test_from_tokens_preserves_fields_and_order() {
        let list = OwnedTokenList::from_tokens(sample()).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.as_list().count, 3);

        let fields: Vec<_> = list
            .entries()
            .iter()
            .map(|t| (t.token_type, unsafe { t.text() }.to_str().unwrap().to_owned(), t.line))
            .collect();
        assert_eq!(
            fields,
            vec![
                (40, "program".to_string(), 1),
                (4, "demo".to_string(), 1),
                (3, "\n".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_empty_list_has_non_null_entries() {
        let list = OwnedTokenList::from_tokens(Vec::new()).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.as_list().count, 0);
        assert!(!list.as_list().tokens.is_null());
    }

    #[test]
    fn test_raw_round_trip() {
        let raw = OwnedTokenList::from_tokens(sample()).unwrap().into_raw();
        assert!(!raw.is_null());
        let list = unsafe { OwnedTokenList::from_raw(raw) }.unwrap();
        assert_eq!(list.len(), 3);
        assert!(unsafe { OwnedTokenList::from_raw(ptr::null_mut()) }.is_none());
    }

    #[test]
    fn test_interior_nul_fails_whole_list() {
        let tokens = vec![
            SourceToken::new(6, "fine", 1),
            SourceToken::new(6, "bro\0ken", 2),
        ];
        assert_eq!(
            OwnedTokenList::from_tokens(tokens).unwrap_err(),
            TokenizeError::InteriorNul { index: 1 }
        );
    }

    #[test]
    fn test_line_overflow_is_rejected() {
        let line = c_int::MAX as usize + 1;
        let tokens = vec![SourceToken::new(4, "x", line)];
        assert_eq!(
            OwnedTokenList::from_tokens(tokens).unwrap_err(),
            TokenizeError::LineOverflow { index: 0, line }
        );
    }
}
