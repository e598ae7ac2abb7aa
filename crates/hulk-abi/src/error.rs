//! Error types for the naming contract

use derive_more::Display;

pub type AbiResult<T> = Result<T, AbiError>;

#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum AbiError {
    #[display("Invalid operation name: {_0:?}")]
    InvalidOperation(String),

    #[display("Unknown scalar kind: {_0:?}")]
    UnknownKind(String),

    #[display("Malformed symbol: {_0:?}")]
    MalformedSymbol(String),

    #[display("No primitive `{op}` taking ({params})")]
    NoSuchPrimitive { op: String, params: String },
}

impl AbiError {
    pub(crate) fn no_such_primitive(op: &str, params: &[crate::ScalarKind]) -> Self {
        let params = params
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        AbiError::NoSuchPrimitive {
            op: op.to_owned(),
            params,
        }
    }
}

impl std::error::Error for AbiError {}
