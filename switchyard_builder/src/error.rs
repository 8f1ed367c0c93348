use thiserror::Error;

/// A mistake in the option configuration.
///
/// These are raised immediately while declaring options or building the handler.
/// They are never part of the [`ValidationResult`](crate::ValidationResult) of a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The long or short flag of an option is already used by another option.
    #[error("Config error: neither the long flag '{long}', nor the short flag '{}' can be repeated on multiple options.", .short.map(String::from).unwrap_or_default())]
    DuplicateFlag {
        /// The long name of the rejected option.
        long: String,
        /// The short name of the rejected option.
        short: Option<char>,
    },

    /// A second default option was declared.
    #[error("Config error: only one option can be the default option (rejected '{0}').")]
    MultipleDefaults(String),

    /// The option was never given a value provider.
    #[error("Config error: all options must have a value provider (missing on '{0}').")]
    MissingProvider(String),

    /// A must-exist default file does not exist.
    #[error("Config error: the file must exist, but the default '{0}' does not exist.")]
    MissingFile(String),

    /// A must-exist default directory does not exist.
    #[error("Config error: the directory must exist, but the default '{0}' does not exist.")]
    MissingDirectory(String),
}

/// A failure to convert a parsed value into the requested type.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot convert '{value}' to {type_name}.")]
pub struct ConversionError {
    value: String,
    type_name: &'static str,
}

impl ConversionError {
    pub(crate) fn new(value: impl std::fmt::Display, type_name: &'static str) -> Self {
        Self {
            value: value.to_string(),
            type_name,
        }
    }

    /// The rendered value that failed to convert.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The name of the requested type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        ConfigError::DuplicateFlag { long: "flag".to_string(), short: Some('f') },
        "Config error: neither the long flag 'flag', nor the short flag 'f' can be repeated on multiple options."
    )]
    #[case(
        ConfigError::DuplicateFlag { long: "flag".to_string(), short: None },
        "Config error: neither the long flag 'flag', nor the short flag '' can be repeated on multiple options."
    )]
    #[case(
        ConfigError::MultipleDefaults("command".to_string()),
        "Config error: only one option can be the default option (rejected 'command')."
    )]
    #[case(
        ConfigError::MissingProvider("count".to_string()),
        "Config error: all options must have a value provider (missing on 'count')."
    )]
    #[case(
        ConfigError::MissingFile("./x.dll".to_string()),
        "Config error: the file must exist, but the default './x.dll' does not exist."
    )]
    #[case(
        ConfigError::MissingDirectory("./x/".to_string()),
        "Config error: the directory must exist, but the default './x/' does not exist."
    )]
    fn config_error_message(#[case] error: ConfigError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn conversion_error_message() {
        let error = ConversionError::new("abc", "i64");
        assert_eq!(error.value(), "abc");
        assert_eq!(error.type_name(), "i64");
        assert_eq!(error.to_string(), "cannot convert 'abc' to i64.");
    }
}
