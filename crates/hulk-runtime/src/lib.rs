//! HULK runtime library.
//!
//! Provides the primitives that compiled HULK programs call directly:
//! - Output (`print_number_boolean`, `print_string_boolean`)
//! - Math (`cos_number_number`, `log_number_number_number`, `rand_number`, etc.)
//! - Strings (`concat_string_string_string`, `sitos_*_string`)
//! - The object header constructor (`object_ctor`)
//!
//! Every primitive is exported under the symbol that `hulk_abi` derives
//! from its signature; `hulk_abi::PRIMITIVES` lists them all.
//!
//! # Ownership
//!
//! Numbers and booleans travel by value. String arguments are borrowed for
//! the duration of the call and never freed or kept. String results are new
//! `malloc` buffers that the caller owns and releases with `free`.
//! Running out of memory aborts the process.

pub mod io;
pub mod math;
mod memory;
pub mod number;
pub mod object;
pub mod string;
pub mod string_ops;

pub use io::{print_number_boolean, print_string_boolean};
pub use math::{
    cos_number_number, exp_number_number, log_number_number_number, pow_number_number_number,
    rand_number, sin_number_number, sqrt_number_number,
};
pub use object::{Object, object_ctor};
pub use string::{BorrowedStr, OwnedStr};
pub use string_ops::{concat_string_string_string, sitos_number_string, sitos_string_string};
