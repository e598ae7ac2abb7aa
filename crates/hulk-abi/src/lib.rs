//! Naming contract between generated HULK code and `hulk-runtime`.
//!
//! Every runtime primitive is exported under a symbol that spells out its
//! signature: `<operation>_<param kinds...>_<return kind>`, with kinds drawn
//! from `{number, string, boolean}`. A code generator resolves a call purely
//! from the static kinds of its arguments:
//!
//! ```
//! use hulk_abi::{ScalarKind, resolve};
//!
//! let sig = resolve("log", &[ScalarKind::Number, ScalarKind::Number]).unwrap();
//! assert_eq!(sig.mangle(), "log_number_number_number");
//! ```
//!
//! This crate carries the contract as data only; it never links the runtime.

mod error;
mod kind;
mod object;
mod signature;
mod table;

pub use error::{AbiError, AbiResult};
pub use kind::ScalarKind;
pub use object::{BASE_TYPEID, OBJECT_CTOR_SYMBOL, OBJECT_HEADER_ALIGN, OBJECT_HEADER_SIZE};
pub use signature::Signature;
pub use table::{CONSTANTS, Constant, PRIMITIVES, constant, lookup_symbol, resolve};
