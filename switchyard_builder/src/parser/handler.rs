use crate::api::{ArgumentOption, FromValue};
use crate::error::{ConfigError, ConversionError};
use crate::model::ValidationResult;
use crate::parser::interface::{ConsoleInterface, UserInterface};
use crate::parser::printer::Printer;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The parsed command line.
/// Built via [`ArgumentsBuilder::build`](crate::ArgumentsBuilder::build).
///
/// The arguments are parsed exactly once, when the handler is created.
/// Parsing never stops early; every problem with the arguments is collected into the handler's [`ValidationResult`].
///
/// ### Example
/// ```
/// # use switchyard_builder as switchyard;
/// use switchyard::{prelude::*, ArgumentsBuilder};
///
/// let mut builder = ArgumentsBuilder::new();
/// builder.set_arguments(&["--count", "many", "--other"]);
/// builder.add("count", None).unwrap().accept_integer(Some(1));
/// let handler = builder.build().unwrap();
///
/// assert!(!handler.is_valid());
/// assert_eq!(
///     handler.errors(),
///     &[
///         "An integer number is required.".to_string(),
///         "--other is not a valid option.".to_string(),
///     ]
/// );
/// assert_eq!(handler.get_value::<i64>("count"), 1);
/// ```
pub struct ArgumentsHandler {
    arguments: Vec<String>,
    options: Vec<ArgumentOption>,
    validation: ValidationResult,
}

impl std::fmt::Debug for ArgumentsHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgumentsHandler")
            .field("arguments", &self.arguments)
            .field("options", &self.options)
            .field("validation", &self.validation)
            .finish()
    }
}

impl ArgumentsHandler {
    /// Parse `arguments` against the `options`.
    ///
    /// Fails when an option has no value provider.
    pub fn new(
        arguments: Vec<String>,
        mut options: Vec<ArgumentOption>,
    ) -> Result<Self, ConfigError> {
        if let Some(option) = options.iter().find(|o| o.provider().is_none()) {
            return Err(ConfigError::MissingProvider(option.long().to_string()));
        }

        let validation = parse(&arguments, &mut options);

        Ok(Self {
            arguments,
            options,
            validation,
        })
    }

    /// Whether the arguments were valid.
    pub fn is_valid(&self) -> bool {
        self.validation.is_valid()
    }

    /// The problems found in the arguments, in the order they were encountered.
    pub fn errors(&self) -> &[String] {
        self.validation.errors()
    }

    /// The combined validation verdict.
    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    /// The parsed arguments.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// The options, in declaration order.
    pub fn options(&self) -> &[ArgumentOption] {
        &self.options
    }

    /// The option with the long name `long`.
    pub fn option(&self, long: &str) -> Option<&ArgumentOption> {
        self.options.iter().find(|o| o.long() == long)
    }

    /// Get the value of the option `long` as a `T`.
    ///
    /// Falls back onto the option's default when no value was given.
    /// Returns `T::default()` for an unknown option, when there is neither a value nor a default, or when the conversion fails.
    /// Use [`ArgumentsHandler::try_get_value`] to tell these cases apart.
    ///
    /// ### Example
    /// ```
    /// # use switchyard_builder as switchyard;
    /// use switchyard::{prelude::*, ArgumentsBuilder};
    ///
    /// let mut builder = ArgumentsBuilder::new();
    /// builder.set_arguments(&["--pi", "1.75"]);
    /// builder.add("pi", Some('p')).unwrap().accept_decimal(None);
    /// builder.add("name", None).unwrap().accept_string(Some("bob"));
    /// let handler = builder.build().unwrap();
    ///
    /// assert_eq!(handler.get_value::<f64>("pi"), 1.75);
    /// assert_eq!(handler.get_value::<String>("name"), "bob");
    /// assert_eq!(handler.get_value::<i64>("unknown"), 0);
    /// ```
    pub fn get_value<T: FromValue + Default>(&self, long: &str) -> T {
        self.try_get_value(long)
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    /// Get the value of the option `long` as a `T`, exposing conversion failures.
    ///
    /// Returns `Ok(None)` for an unknown option, or when there is neither a value nor a default.
    pub fn try_get_value<T: FromValue>(&self, long: &str) -> Result<Option<T>, ConversionError> {
        let value = self
            .option(long)
            .and_then(ArgumentOption::provider)
            .and_then(|provider| provider.value().or_else(|| provider.default_value()));

        value.as_ref().map(T::from_value).transpose()
    }

    /// Render the usage to `user_interface`.
    /// When `show_errors` is set and the arguments were invalid, the errors are listed after the options.
    pub fn usage(
        &self,
        program: &str,
        version: &str,
        show_errors: bool,
        user_interface: &mut dyn UserInterface,
    ) {
        let errors = if show_errors {
            Some(&self.validation)
        } else {
            None
        };
        Printer::new(program, version).print_usage(&self.options, errors, user_interface);
    }

    /// Render the usage to the standard output.
    pub fn print_usage(&self, program: &str, version: &str, show_errors: bool) {
        self.usage(
            program,
            version,
            show_errors,
            &mut ConsoleInterface::default(),
        );
    }
}

fn parse(arguments: &[String], options: &mut [ArgumentOption]) -> ValidationResult {
    let mut validation = ValidationResult::default();
    let mut index = 0;

    if let Some(first) = arguments.first() {
        if !options.iter().any(|o| o.is_match(first)) {
            if let Some(option) = options.iter_mut().find(|o| o.is_default()) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Capturing '{first}' into the default option {option:?}.");
                }

                if let Some(provider) = option.provider_mut() {
                    validation = validation.combine(provider.set(Some(first.as_str())));
                }
                index = 1;
            }
        }
    }

    while index < arguments.len() {
        let token = &arguments[index];

        match options.iter_mut().find(|o| o.is_match(token)) {
            Some(option) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Matched '{token}' to {option:?}.");
                }

                if let Some(provider) = option.provider_mut() {
                    let next = arguments.get(index + 1).map(String::as_str);
                    let looks_like_flag = next.map_or(true, |n| n.starts_with('-'));

                    if looks_like_flag && provider.default_value().is_some() {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Leaving {next:?} for the next match.");
                        }

                        validation = validation.combine(provider.set(None));
                    } else {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Consuming {next:?} as the value.");
                        }

                        validation = validation.combine(provider.set(next));
                        index += 1;
                    }
                }
            }
            None => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Unable to match '{token}'.");
                }

                validation = validation.combine(ValidationResult::invalid(format!(
                    "{token} is not a valid option."
                )));
            }
        }

        index += 1;
    }

    for option in options.iter() {
        let was_set = option.provider().map_or(false, |p| p.was_set());

        if option.is_required() && !was_set {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Missing required {option:?}.");
            }

            validation = validation.combine(ValidationResult::invalid(format!(
                "The option {} is a required option.",
                option.long()
            )));
        }
    }

    validation
}
