//! The primitives exported by `hulk-runtime`, and the builtin constants the
//! code generator inlines.

use crate::{AbiError, AbiResult, ScalarKind, Signature};

const NUMBER: ScalarKind = ScalarKind::Number;
const STRING: ScalarKind = ScalarKind::String;
const BOOLEAN: ScalarKind = ScalarKind::Boolean;

/// Every primitive the runtime exports, keyed by signature.
///
/// The mangled form of each entry is the exact symbol name of an
/// `extern "C"` function in `hulk-runtime`.
pub static PRIMITIVES: &[Signature<'static>] = &[
    // io
    Signature::from_static("print", &[NUMBER], BOOLEAN),
    Signature::from_static("print", &[STRING], BOOLEAN),
    // math
    Signature::from_static("cos", &[NUMBER], NUMBER),
    Signature::from_static("exp", &[NUMBER], NUMBER),
    Signature::from_static("log", &[NUMBER, NUMBER], NUMBER),
    Signature::from_static("pow", &[NUMBER, NUMBER], NUMBER),
    Signature::from_static("rand", &[], NUMBER),
    Signature::from_static("sin", &[NUMBER], NUMBER),
    Signature::from_static("sqrt", &[NUMBER], NUMBER),
    // strings
    Signature::from_static("concat", &[STRING, STRING], STRING),
    Signature::from_static("sitos", &[NUMBER], STRING),
    Signature::from_static("sitos", &[STRING], STRING),
];

/// A named value that generated code embeds directly instead of calling
/// into the runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant {
    pub name: &'static str,
    pub kind: ScalarKind,
    pub value: f64,
}

pub static CONSTANTS: &[Constant] = &[
    Constant {
        name: "E",
        kind: NUMBER,
        value: std::f64::consts::E,
    },
    Constant {
        name: "PI",
        kind: NUMBER,
        value: std::f64::consts::PI,
    },
];

/// Find the primitive for a call to `op` with arguments of the given kinds.
///
/// Resolution is exact: there is no coercion between kinds and no
/// overloading on arity alone.
pub fn resolve(op: &str, params: &[ScalarKind]) -> AbiResult<&'static Signature<'static>> {
    PRIMITIVES
        .iter()
        .find(|sig| sig.op() == op && sig.params() == params)
        .ok_or_else(|| {
            tracing::debug!(op, ?params, "no primitive matches call");
            AbiError::no_such_primitive(op, params)
        })
}

/// Find the primitive exported under `symbol`.
pub fn lookup_symbol(symbol: &str) -> AbiResult<&'static Signature<'static>> {
    let wanted = Signature::demangle(symbol)?;
    PRIMITIVES
        .iter()
        .find(|sig| **sig == wanted)
        .ok_or_else(|| {
            tracing::debug!(symbol, "symbol is not a runtime primitive");
            AbiError::no_such_primitive(wanted.op(), wanted.params())
        })
}

pub fn constant(name: &str) -> Option<&'static Constant> {
    CONSTANTS.iter().find(|constant| constant.name == name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use insta::assert_snapshot;

    use super::*;
    use crate::signature::validate_operation;

    #[test]
    fn test_symbol_table() {
        let listing = PRIMITIVES
            .iter()
            .map(|sig| format!("{:<28} {sig}", sig.mangle()))
            .collect::<Vec<_>>()
            .join("\n");
        assert_snapshot!(listing, @r"
        print_number_boolean         print(number) -> boolean
        print_string_boolean         print(string) -> boolean
        cos_number_number            cos(number) -> number
        exp_number_number            exp(number) -> number
        log_number_number_number     log(number, number) -> number
        pow_number_number_number     pow(number, number) -> number
        rand_number                  rand() -> number
        sin_number_number            sin(number) -> number
        sqrt_number_number           sqrt(number) -> number
        concat_string_string_string  concat(string, string) -> string
        sitos_number_string          sitos(number) -> string
        sitos_string_string          sitos(string) -> string
        ");
    }

    #[test]
    fn test_operation_names_are_valid() {
        for sig in PRIMITIVES {
            assert_eq!(validate_operation(sig.op()), Ok(()), "{sig}");
        }
    }

    #[test]
    fn test_mangled_names_are_unique() {
        let mut seen = HashSet::new();
        for sig in PRIMITIVES {
            assert!(seen.insert(sig.mangle()), "duplicate symbol {}", sig.mangle());
        }
    }

    #[test]
    fn test_return_kind_is_determined_by_call() {
        let mut seen = HashSet::new();
        for sig in PRIMITIVES {
            assert!(
                seen.insert((sig.op(), sig.params())),
                "ambiguous call {sig}"
            );
        }
    }

    #[test]
    fn test_every_entry_round_trips() {
        for sig in PRIMITIVES {
            assert_eq!(&Signature::demangle(&sig.mangle()).unwrap(), sig);
            assert_eq!(lookup_symbol(&sig.mangle()).unwrap(), sig);
        }
    }

    #[test]
    fn test_resolve_picks_overload_by_kind() {
        let sig = resolve("sitos", &[NUMBER]).unwrap();
        assert_eq!(sig.mangle(), "sitos_number_string");

        let sig = resolve("sitos", &[STRING]).unwrap();
        assert_eq!(sig.mangle(), "sitos_string_string");

        let sig = resolve("print", &[STRING]).unwrap();
        assert_eq!(sig.ret(), BOOLEAN);
    }

    #[test]
    fn test_resolve_does_not_coerce() {
        assert_eq!(
            resolve("cos", &[STRING]),
            Err(AbiError::NoSuchPrimitive {
                op: "cos".to_owned(),
                params: "string".to_owned(),
            })
        );
        // No arity-only overloading: `log` needs both operands.
        assert!(resolve("log", &[NUMBER]).is_err());
        assert!(resolve("print", &[BOOLEAN]).is_err());
        assert!(resolve("tan", &[NUMBER]).is_err());
    }

    #[test]
    fn test_lookup_symbol_errors() {
        assert_eq!(
            lookup_symbol("object_ctor"),
            Err(AbiError::MalformedSymbol("object_ctor".to_owned()))
        );
        // Well formed, but the return kind is wrong.
        assert!(matches!(
            lookup_symbol("cos_number_string"),
            Err(AbiError::NoSuchPrimitive { .. })
        ));
    }

    #[test]
    fn test_constants() {
        assert_eq!(constant("PI").map(|c| c.value), Some(std::f64::consts::PI));
        assert_eq!(constant("E").map(|c| c.kind), Some(ScalarKind::Number));
        assert_eq!(constant("TAU"), None);
        // Constants share a namespace with callable primitives.
        for c in CONSTANTS {
            assert!(PRIMITIVES.iter().all(|sig| sig.op() != c.name));
        }
    }
}
