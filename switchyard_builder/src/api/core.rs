use crate::api::option::ArgumentOption;
use crate::error::ConfigError;
use crate::parser::{ArgumentSource, ArgumentsHandler, ProcessArguments};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The command line option builder.
///
/// Options are declared via [`ArgumentsBuilder::add`] (or [`ArgumentsBuilder::add_default`]), and then configured fluently.
/// Conflicting declarations are rejected immediately, as a [`ConfigError`].
///
/// ### Example
/// ```
/// # use switchyard_builder as switchyard;
/// use switchyard::{prelude::*, ArgumentsBuilder};
///
/// let mut builder = ArgumentsBuilder::new();
/// builder.set_arguments(&["--count", "911", "--flag"]);
/// builder.add("count", None).unwrap().accept_integer(None);
/// builder.add("flag", Some('f')).unwrap().accept_flag();
/// let handler = builder.build().unwrap();
///
/// assert!(handler.is_valid());
/// assert_eq!(handler.get_value::<i64>("count"), 911);
/// assert!(handler.get_value::<bool>("flag"));
/// ```
pub struct ArgumentsBuilder {
    options: Vec<ArgumentOption>,
    arguments: Option<Vec<String>>,
    source: Box<dyn ArgumentSource>,
}

impl Default for ArgumentsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ArgumentsBuilder {
    /// Create a builder whose arguments come from the Cli ([`std::env::args`], without the program name).
    pub fn new() -> Self {
        Self::with_source(ProcessArguments::default())
    }

    /// Create a builder whose arguments come from `source`.
    ///
    /// ### Example
    /// ```
    /// # use switchyard_builder as switchyard;
    /// use switchyard::{prelude::*, ArgumentsBuilder};
    ///
    /// let mut builder = ArgumentsBuilder::with_source(vec!["--name".to_string(), "abc".to_string()]);
    /// builder.add("name", None).unwrap().accept_string(None);
    /// let handler = builder.build().unwrap();
    ///
    /// assert_eq!(handler.get_value::<String>("name"), "abc");
    /// ```
    pub fn with_source(source: impl ArgumentSource + 'static) -> Self {
        Self {
            options: Vec::default(),
            arguments: None,
            source: Box::new(source),
        }
    }

    /// Declare an option, matched via `--long` or `-short`.
    ///
    /// Fails when either flag is already used by another option.
    pub fn add(
        &mut self,
        long: impl Into<String>,
        short: Option<char>,
    ) -> Result<&mut ArgumentOption, ConfigError> {
        self.push(ArgumentOption::new(long, short, false))
    }

    /// Declare the default option.
    /// Its value may be given as the first token on the Cli, without the flag.
    ///
    /// Fails when either flag is already used by another option, or when a default option has already been declared.
    ///
    /// ### Example
    /// ```
    /// # use switchyard_builder as switchyard;
    /// use switchyard::{prelude::*, ArgumentsBuilder};
    ///
    /// let mut builder = ArgumentsBuilder::new();
    /// builder.set_arguments(&["new"]);
    /// builder.add_default("command", None).unwrap().accept_string(None);
    /// let handler = builder.build().unwrap();
    ///
    /// assert_eq!(handler.get_value::<String>("command"), "new");
    /// ```
    pub fn add_default(
        &mut self,
        long: impl Into<String>,
        short: Option<char>,
    ) -> Result<&mut ArgumentOption, ConfigError> {
        self.push(ArgumentOption::new(long, short, true))
    }

    fn push(&mut self, option: ArgumentOption) -> Result<&mut ArgumentOption, ConfigError> {
        if option.is_default() && self.options.iter().any(ArgumentOption::is_default) {
            return Err(ConfigError::MultipleDefaults(option.long().to_string()));
        }

        let flags = option.flags();
        let duplicate = self.options.iter().any(|existing| {
            existing.long() == option.long()
                || (option.short().is_some() && existing.short() == option.short())
                || flags.iter().any(|flag| existing.is_match(flag))
        });

        if duplicate {
            return Err(ConfigError::DuplicateFlag {
                long: option.long().to_string(),
                short: option.short(),
            });
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Declared {option:?}.");
        }

        self.options.push(option);
        let last = self.options.len() - 1;
        Ok(&mut self.options[last])
    }

    /// Override the arguments to parse.
    /// If repeated, only the final arguments will apply.
    pub fn set_arguments(&mut self, arguments: &[&str]) -> &mut Self {
        self.arguments
            .replace(arguments.iter().map(|a| a.to_string()).collect());
        self
    }

    /// The options declared so far, in declaration order.
    pub fn options(&self) -> &[ArgumentOption] {
        &self.options
    }

    /// Build the handler, which immediately parses the arguments.
    ///
    /// Fails when an option has no value provider.
    /// Problems with the arguments themselves do not fail the build; they are reported through [`ArgumentsHandler::errors`].
    pub fn build(self) -> Result<ArgumentsHandler, ConfigError> {
        let ArgumentsBuilder {
            options,
            arguments,
            source,
        } = self;
        let arguments = arguments.unwrap_or_else(|| source.arguments());
        ArgumentsHandler::new(arguments, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::Accepts;
    use rand::distributions::Alphanumeric;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    fn random_name() -> String {
        let length = thread_rng().gen_range(1..12);
        thread_rng()
            .sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }

    fn random_short() -> char {
        char::from(thread_rng().sample(&Alphanumeric))
    }

    #[test]
    fn empty_build() {
        // Setup
        let mut builder = ArgumentsBuilder::new();
        builder.set_arguments(&[]);

        // Execute
        let handler = builder.build().unwrap();

        // Verify
        assert!(handler.is_valid());
        assert!(handler.errors().is_empty());
        assert!(handler.options().is_empty());
    }

    #[test]
    fn add_returns_option() {
        let mut builder = ArgumentsBuilder::new();
        let option = builder.add("flag", Some('f')).unwrap();
        assert_eq!(option.long(), "flag");
        assert_eq!(option.short(), Some('f'));
        assert!(!option.is_default());

        let option = builder.add_default("command", None).unwrap();
        assert_eq!(option.long(), "command");
        assert!(option.is_default());

        assert_eq!(builder.options().len(), 2);
    }

    #[test]
    fn duplicate_long() {
        for _ in 0..100 {
            // Setup
            let name = random_name();
            let mut builder = ArgumentsBuilder::new();
            builder.add(name.clone(), None).unwrap();

            // Execute
            let result = builder.add(name.clone(), Some(random_short()));

            // Verify
            assert_matches!(result, Err(ConfigError::DuplicateFlag { long, .. }) => {
                assert_eq!(long, name);
            });
            assert_eq!(builder.options().len(), 1);
        }
    }

    #[test]
    fn duplicate_short() {
        for _ in 0..100 {
            // Setup
            let short = random_short();
            let mut builder = ArgumentsBuilder::new();
            builder.add("first", Some(short)).unwrap();

            // Execute
            let result = builder.add("second", Some(short));

            // Verify
            assert_matches!(result, Err(ConfigError::DuplicateFlag { short: s, .. }) => {
                assert_eq!(s, Some(short));
            });
            assert_eq!(builder.options().len(), 1);
        }
    }

    #[test]
    fn distinct_names() {
        let mut builder = ArgumentsBuilder::new();
        builder.add("flag", None).unwrap();
        builder.add("banner", None).unwrap();
        builder.add("last", Some('l')).unwrap();
        builder.add_default("command", Some('c')).unwrap();
        assert_eq!(builder.options().len(), 4);
    }

    #[rstest]
    #[case(None)]
    #[case(Some('x'))]
    fn multiple_defaults(#[case] short: Option<char>) {
        // Setup
        let mut builder = ArgumentsBuilder::new();
        builder.add_default("command", None).unwrap();

        // Execute
        let result = builder.add_default("other", short);

        // Verify
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MultipleDefaults("other".to_string())
        );
        // A non-default option is still fine.
        builder.add("another", short).unwrap();
    }

    #[rstest]
    #[case("", Some('x'), "other", Some('-'))]
    #[case("other", Some('-'), "", None)]
    fn rendered_flag_collision(
        #[case] first_long: &str,
        #[case] first_short: Option<char>,
        #[case] second_long: &str,
        #[case] second_short: Option<char>,
    ) {
        // Setup
        let mut builder = ArgumentsBuilder::new();
        builder.add(first_long, first_short).unwrap();

        // Execute
        let result = builder.add(second_long, second_short);

        // Verify
        assert_matches!(result, Err(ConfigError::DuplicateFlag { .. }));
    }

    #[test]
    fn set_arguments_last_applies() {
        // Setup
        let mut builder = ArgumentsBuilder::with_source(vec!["--name".to_string(), "source".to_string()]);
        builder
            .set_arguments(&["--name", "discarded"])
            .set_arguments(&["--name", "abc"]);
        builder.add("name", None).unwrap().accept_string(None);

        // Execute
        let handler = builder.build().unwrap();

        // Verify
        assert_eq!(handler.get_value::<String>("name"), "abc");
    }

    #[test]
    fn source_arguments() {
        let mut builder = ArgumentsBuilder::with_source(vec!["--name".to_string(), "source".to_string()]);
        builder.add("name", None).unwrap().accept_string(None);
        let handler = builder.build().unwrap();
        assert_eq!(handler.get_value::<String>("name"), "source");
    }

    #[test]
    fn build_missing_provider() {
        // Setup
        let mut builder = ArgumentsBuilder::new();
        builder.set_arguments(&[]);
        builder.add("flag", None).unwrap().accept_flag();
        builder.add("count", None).unwrap();

        // Execute
        let result = builder.build();

        // Verify
        assert_matches!(result, Err(ConfigError::MissingProvider(long)) => {
            assert_eq!(long, "count");
        });
    }
}
