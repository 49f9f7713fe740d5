//! Field tag directives.
//!
//! A raw tag is `name,option,option`. The first segment renames the output
//! key (empty keeps the declared name), the rest are options.

/// The tag value that excludes a field from every enumeration.
pub const SKIP_TAG: &str = "-";

/// Skip the field when its value is zero.
pub const OMIT_EMPTY: &str = "omitempty";
/// Keep the raw value instead of projecting nested records.
pub const OMIT_NESTED: &str = "omitnested";
/// Merge a projected nested record into the parent map.
pub const FLATTEN: &str = "flatten";
/// Emit the value's string conversion.
pub const STRING: &str = "string";

/// Options of a parsed tag, in the order they were written.
///
/// Empty segments are ignored and duplicates are harmless.
///
/// # Examples
///
/// ```
/// use sk_structs::tags::{self, parse_tag};
///
/// let (name, options) = parse_tag("age,omitempty,,string");
///
/// assert_eq!(name, "age");
/// assert!(options.has(tags::OMIT_EMPTY));
/// assert!(options.has(tags::STRING));
/// assert!(!options.has(tags::FLATTEN));
/// assert_eq!(options.iter().count(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagOptions<'a> {
    raw: &'a str,
}

impl<'a> TagOptions<'a> {
    /// Returns `true` if `option` is set.
    #[inline]
    pub fn has(&self, option: &str) -> bool {
        self.iter().any(|set| set == option)
    }

    /// Returns `true` if no option is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Iterates over the non-empty options.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.raw.split(',').filter(|option| !option.is_empty())
    }
}

/// Splits a raw tag into its rename target and options.
///
/// Never fails: `""` gives an empty name and no options.
pub fn parse_tag(raw: &str) -> (&str, TagOptions<'_>) {
    match raw.split_once(',') {
        Some((name, options)) => (name, TagOptions { raw: options }),
        None => (raw, TagOptions::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_only() {
        let (name, options) = parse_tag("id");
        assert_eq!(name, "id");
        assert!(options.is_empty());
    }

    #[test]
    fn empty_tag() {
        let (name, options) = parse_tag("");
        assert_eq!(name, "");
        assert!(options.is_empty());
        assert!(!options.has(""));
    }

    #[test]
    fn options_without_name() {
        let (name, options) = parse_tag(",flatten,flatten");
        assert_eq!(name, "");
        assert!(options.has(FLATTEN));
        assert!(!options.has(OMIT_NESTED));
    }

    #[test]
    fn skip_is_just_a_name() {
        let (name, options) = parse_tag("-");
        assert_eq!(name, SKIP_TAG);
        assert!(options.is_empty());

        // `-,` renames the key to "-" rather than skipping.
        assert_eq!(parse_tag("-,").0, "-");
    }
}
