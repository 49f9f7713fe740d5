use proc_macro2::Span;

/// A struct used to record whether the specified trait is available.
///
/// The span points at the flag, so errors caused by a missing impl are
/// reported on the attribute.
#[derive(Default, Debug)]
pub(crate) struct TraitAvailableFlags {
    /// `#[reflect(default)]`: build and compare the zero value with `Default`.
    pub default: Option<Span>,
    /// `#[reflect(debug)]`: format with `Debug`.
    pub debug: Option<Span>,
    /// `#[reflect(display)]`: expose `Display` as the string conversion.
    pub display: Option<Span>,
}
