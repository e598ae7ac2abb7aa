use std::str::FromStr;

use derive_more::Display;

use crate::{AbiError, AbiResult};

/// The value categories that can appear in a mangled symbol.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScalarKind {
    /// IEEE double, passed by value.
    #[display("number")]
    Number,
    /// Null-terminated `char*`.
    #[display("string")]
    String,
    /// C `_Bool`.
    #[display("boolean")]
    Boolean,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 3] = [ScalarKind::Number, ScalarKind::String, ScalarKind::Boolean];

    /// The word used for this kind inside a mangled symbol.
    pub const fn as_str(self) -> &'static str {
        match self {
            ScalarKind::Number => "number",
            ScalarKind::String => "string",
            ScalarKind::Boolean => "boolean",
        }
    }
}

impl FromStr for ScalarKind {
    type Err = AbiError;

    fn from_str(word: &str) -> AbiResult<Self> {
        ScalarKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == word)
            .ok_or_else(|| AbiError::UnknownKind(word.to_owned()))
    }
}
