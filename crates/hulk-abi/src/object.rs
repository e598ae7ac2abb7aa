//! Object header constants shared with the runtime.
//!
//! Every heap object starts with a `u32` type identifier. Only the base
//! identifier exists so far; concrete types will claim non-zero values once
//! dispatch is implemented.

/// Identifier written by the base constructor, meaning "untyped".
pub const BASE_TYPEID: u32 = 0;

/// Exported name of the header constructor.
pub const OBJECT_CTOR_SYMBOL: &str = "object_ctor";

pub const OBJECT_HEADER_SIZE: usize = 4;
pub const OBJECT_HEADER_ALIGN: usize = 4;
