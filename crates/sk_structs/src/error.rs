use sk_reflect::info::ReflectKind;
use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Failure of [`Field::set`](crate::Field::set) and [`Field::zero`](crate::Field::zero).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldError {
    #[error("field `{0}` is not exported")]
    NotExported(&'static str),

    #[error("field `{0}` is not settable")]
    NotSettable(&'static str),

    #[error("field `{name}` has wrong kind, got: {actual} want: {expect}")]
    KindMismatch {
        name: &'static str,
        expect: ReflectKind,
        actual: ReflectKind,
    },

    #[error("field `{name}` has type `{expect}`, got: `{actual}`")]
    TypeMismatch {
        name: &'static str,
        expect: &'static str,
        actual: &'static str,
    },
}

/// Failure of a projection ([`Record::try_map`](crate::Record::try_map),
/// [`Record::try_values`](crate::Record::try_values)).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProjectError {
    #[error("cyclic structure: `{0}` is reachable from itself")]
    CyclicStructure(&'static str),

    #[error("field `{0}` has the `string` option but no string conversion")]
    UnsupportedConversion(&'static str),
}

/// The value is not a struct, even after following every pointer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("not struct: `{0}`")]
pub struct NotStructError(pub &'static str);
