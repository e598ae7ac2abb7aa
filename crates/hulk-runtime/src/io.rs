//! Output primitives.
//!
//! Both print one line to standard output and report whether the write
//! succeeded. Standard output is held locked for the whole line, so lines
//! from concurrent callers never interleave.

use std::io::{self, Write};

use crate::number::format_number;
use crate::string::BorrowedStr;

/// Write `n` in the fixed six-decimal format, then a newline.
pub fn write_number<W: Write>(out: &mut W, n: f64) -> io::Result<()> {
    writeln!(out, "{}", format_number(n))
}

/// Write `bytes` unchanged, then a newline.
pub fn write_bytes<W: Write>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    out.write_all(bytes)?;
    out.write_all(b"\n")
}

#[unsafe(no_mangle)]
pub extern "C" fn print_number_boolean(n: f64) -> bool {
    write_number(&mut io::stdout().lock(), n).is_ok()
}

#[unsafe(no_mangle)]
pub extern "C" fn print_string_boolean(s: BorrowedStr<'_>) -> bool {
    write_bytes(&mut io::stdout().lock(), s.to_bytes()).is_ok()
}
