//! C boundary for the Ahoy tokenizer.
//!
//! This module provides C-compatible function signatures for:
//! - Tokenizing source text into a `TokenList`
//! - Releasing a `TokenList` (and strings returned through `error_out`)
//! - Kind names and log setup for consumers
//!
//! # Ownership
//! A `TokenList` is created only by the tokenize functions and owned by the
//! caller until it is passed, exactly once, to `free_token_list`. The list owns
//! its entry array and the array owns every entry's `value` string. Consumers
//! must not free any part of it with their own allocator, must not write into
//! the strings, and must not read it after release. None of this is checked at
//! runtime. In particular C `free()` must never be called on `tokens`, on any
//! `value`, or on the list itself: they come from Rust's allocator, and an
//! empty list's `tokens` is a non-null, well-aligned pointer that was never
//! allocated at all.
//!
//! # Failures
//! The tokenize functions return null when the input is rejected (null
//! pointer, invalid UTF-8, or tokens that cannot be represented). Running out
//! of memory aborts the process. A list with `count == 0` means "no tokens",
//! not "failed".
//!
//! # Threads
//! Every call works on its own input and allocations, so calls on different
//! lists may run concurrently. A single list must not be shared between
//! threads while it is being read or released.

mod diagnostics;
mod layout;
mod memory;
mod owned;
mod tokenize;

pub use diagnostics::{ahoy_token_kind_name, ahoy_tokenizer_init_logging};
pub use layout::{Token, TokenList, TokenRecord};
pub use memory::{ahoy_free_string, free_token_list};
pub use owned::OwnedTokenList;
pub use tokenize::{
    ahoy_tokenize_status, decode_source, tokenize_ahoy, tokenize_ahoy_checked, tokenize_with,
    try_tokenize_with,
};
