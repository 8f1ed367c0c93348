//! Traits which, typically, may be imported without concern: `use switchyard::prelude::*`.
use crate::error::ConfigError;

/// Behaviour for an enum whose members are selectable by name on the Cli.
///
/// Typically implemented via `#[derive(ArgEnum)]`.
pub trait ArgEnum: Sized {
    /// The canonical member names, in declaration order.
    fn members() -> &'static [&'static str];

    /// The member at the declaration index `ordinal`.
    fn from_ordinal(ordinal: usize) -> Option<Self>;

    /// The declaration index of this member.
    fn ordinal(&self) -> usize;

    /// The canonical name of this member.
    fn name(&self) -> &'static str;

    /// Resolve a member by name, ignoring case.
    fn from_name(name: &str) -> Option<Self> {
        let target = name.trim().to_lowercase();
        Self::members()
            .iter()
            .position(|member| member.to_lowercase() == target)
            .and_then(Self::from_ordinal)
    }
}

/// Behaviour for attaching the built-in value providers to an option.
// Needs to be imported in order to use the `accept_*` methods.
pub trait Accepts {
    /// Accept any string.
    fn accept_string(&mut self, default: Option<&str>) -> &mut Self;

    /// Accept an integer number.
    fn accept_integer(&mut self, default: Option<i64>) -> &mut Self;

    /// Accept a decimal number.
    fn accept_decimal(&mut self, default: Option<f64>) -> &mut Self;

    /// Accept a flag, optionally trailed by `true` or `false`, defaulting to `false`.
    fn accept_flag(&mut self) -> &mut Self;

    /// Accept a flag, optionally trailed by `true` or `false`.
    fn accept_flag_or(&mut self, default: Option<bool>) -> &mut Self;

    /// Accept a filename, optionally checking that the file exists.
    fn accept_filename(
        &mut self,
        must_exist: bool,
        default: Option<&str>,
    ) -> Result<&mut Self, ConfigError>;

    /// Accept a directory, optionally checking that the directory exists.
    fn accept_directory(
        &mut self,
        must_exist: bool,
        default: Option<&str>,
    ) -> Result<&mut Self, ConfigError>;

    /// Accept the name of a member of `E`.
    fn accept_enum<E: ArgEnum + 'static>(&mut self, default: Option<E>) -> &mut Self;
}


#[cfg(test)]
mod tests {
    use super::test::Numbers;
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("one", Some(Numbers::One))]
    #[case("ONE", Some(Numbers::One))]
    #[case("tWo", Some(Numbers::Two))]
    #[case(" three ", Some(Numbers::Three))]
    #[case("four", None)]
    #[case("", None)]
    fn from_name(#[case] name: &str, #[case] expected: Option<Numbers>) {
        assert_eq!(Numbers::from_name(name), expected);
    }

    #[test]
    fn round_trip_ordinal() {
        for (i, member) in Numbers::members().iter().enumerate() {
            let value = Numbers::from_ordinal(i).unwrap();
            assert_eq!(value.ordinal(), i);
            assert_eq!(&value.name(), member);
        }
        assert_eq!(Numbers::from_ordinal(3), None);
    }
}
