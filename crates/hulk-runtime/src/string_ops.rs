//! String primitives.
//!
//! Inputs are borrowed and never modified; every result is a new buffer
//! owned by the caller.

use crate::number::format_number;
use crate::string::{BorrowedStr, OwnedStr};

/// `a` followed by `b`.
#[unsafe(no_mangle)]
pub extern "C" fn concat_string_string_string(a: BorrowedStr<'_>, b: BorrowedStr<'_>) -> OwnedStr {
    OwnedStr::from_parts(&[a.to_bytes(), b.to_bytes()])
}

/// Text form of a number, in the same format `print` uses.
#[unsafe(no_mangle)]
pub extern "C" fn sitos_number_string(n: f64) -> OwnedStr {
    OwnedStr::from_parts(&[format_number(n).as_bytes()])
}

/// A copy of `s`, so that every `sitos` result is independently owned.
#[unsafe(no_mangle)]
pub extern "C" fn sitos_string_string(s: BorrowedStr<'_>) -> OwnedStr {
    OwnedStr::from_c_str(s.as_c_str())
}
