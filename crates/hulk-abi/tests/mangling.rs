//! Property tests for the symbol naming scheme.

use hulk_abi::{AbiError, ScalarKind, Signature};
use proptest::prelude::*;

fn kind() -> impl Strategy<Value = ScalarKind> {
    prop::sample::select(ScalarKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn demangle_inverts_mangle(
        op in "[a-z][a-z0-9]{0,6}(_[a-z][a-z0-9]{0,6}){0,2}",
        params in prop::collection::vec(kind(), 0..4),
        ret in kind(),
    ) {
        let sig = Signature::new(op.as_str(), params.as_slice(), ret);
        // Names ending in a kind word are rejected up front.
        prop_assume!(sig.is_ok());
        let sig = sig.unwrap();

        let symbol = sig.mangle();
        prop_assert_eq!(Signature::demangle(&symbol), Ok(sig.clone().into_owned()));
        prop_assert_eq!(symbol.matches('_').count(), op.matches('_').count() + params.len() + 1);
    }

    #[test]
    fn names_ending_in_a_kind_are_rejected(
        prefix in "[a-z]{1,6}",
        last in kind(),
    ) {
        let op = format!("{prefix}_{last}");
        prop_assert_eq!(
            Signature::new(op.as_str(), Vec::new(), ScalarKind::Number),
            Err(AbiError::InvalidOperation(op.clone()))
        );
    }
}

#[test]
fn display_lists_kinds_in_order() {
    let sig = Signature::demangle("pow_number_number_number").unwrap();
    assert_eq!(sig.to_string(), "pow(number, number) -> number");
}
