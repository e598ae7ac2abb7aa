//! Signatures and their mangled symbol form.
//!
//! A symbol is the operation name followed by every parameter kind and then
//! the return kind, joined with `_`. Demangling takes the longest run of
//! kind words at the end of the symbol, so an operation name may contain
//! underscores as long as its last segment is not itself a kind word.

use std::borrow::Cow;
use std::fmt;

use crate::{AbiError, AbiResult, ScalarKind};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature<'a> {
    op: Cow<'a, str>,
    params: Cow<'a, [ScalarKind]>,
    ret: ScalarKind,
}

impl Signature<'static> {
    /// Build a table entry. The operation name is checked by the table tests
    /// rather than here, since `const fn` cannot validate strings.
    pub(crate) const fn from_static(
        op: &'static str,
        params: &'static [ScalarKind],
        ret: ScalarKind,
    ) -> Self {
        Signature {
            op: Cow::Borrowed(op),
            params: Cow::Borrowed(params),
            ret,
        }
    }

    /// Parse a mangled symbol back into its signature.
    pub fn demangle(symbol: &str) -> AbiResult<Self> {
        let malformed = || AbiError::MalformedSymbol(symbol.to_owned());

        let segments: Vec<&str> = symbol.split('_').collect();
        let kinds_start = segments
            .iter()
            .rposition(|segment| segment.parse::<ScalarKind>().is_err())
            .map_or(0, |index| index + 1);
        // Need at least one operation segment and one (return) kind.
        if kinds_start == 0 || kinds_start == segments.len() {
            return Err(malformed());
        }

        let kinds = segments[kinds_start..]
            .iter()
            .map(|segment| segment.parse::<ScalarKind>())
            .collect::<AbiResult<Vec<_>>>()?;
        let (&ret, params) = kinds.split_last().ok_or_else(malformed)?;
        let op = segments[..kinds_start].join("_");

        Signature::new(op, params.to_vec(), ret).map_err(|_| malformed())
    }
}

impl<'a> Signature<'a> {
    pub fn new(
        op: impl Into<Cow<'a, str>>,
        params: impl Into<Cow<'a, [ScalarKind]>>,
        ret: ScalarKind,
    ) -> AbiResult<Self> {
        let op = op.into();
        validate_operation(&op)?;
        Ok(Signature {
            op,
            params: params.into(),
            ret,
        })
    }

    pub fn op(&self) -> &str {
        &self.op
    }

    pub fn params(&self) -> &[ScalarKind] {
        &self.params
    }

    pub fn ret(&self) -> ScalarKind {
        self.ret
    }

    /// The exported symbol for this signature, e.g. `pow_number_number_number`.
    pub fn mangle(&self) -> String {
        let mut symbol = String::from(&*self.op);
        for kind in self.params.iter().chain(std::iter::once(&self.ret)) {
            symbol.push('_');
            symbol.push_str(kind.as_str());
        }
        symbol
    }

    pub fn into_owned(self) -> Signature<'static> {
        Signature {
            op: Cow::Owned(self.op.into_owned()),
            params: Cow::Owned(self.params.into_owned()),
            ret: self.ret,
        }
    }
}

impl fmt::Display for Signature<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.op)?;
        for (i, kind) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{kind}")?;
        }
        write!(f, ") -> {}", self.ret)
    }
}

/// Operation names are lowercase identifiers whose segments are never
/// empty, and whose final segment is not a kind word.
pub(crate) fn validate_operation(op: &str) -> AbiResult<()> {
    let starts_with_letter = op.bytes().next().is_some_and(|b| b.is_ascii_lowercase());
    let charset_ok = op
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_');
    let segments_ok = op.split('_').all(|segment| !segment.is_empty());
    let ends_with_kind = op
        .rsplit('_')
        .next()
        .is_some_and(|segment| segment.parse::<ScalarKind>().is_ok());

    if starts_with_letter && charset_ok && segments_ok && !ends_with_kind {
        Ok(())
    } else {
        Err(AbiError::InvalidOperation(op.to_owned()))
    }
}
