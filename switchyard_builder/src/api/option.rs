use crate::api::provider::{
    DecimalProvider, DirectoryProvider, EnumProvider, FilenameProvider, FlagProvider,
    IntegerProvider, StringProvider, ValueProvider,
};
use crate::error::ConfigError;
use crate::prelude::{Accepts, ArgEnum};

const DEFAULT_DESCRIPTION: &str = "No description provided.";

/// The declaration of a single option on the Cli.
///
/// An option is matched via its long flag `--NAME` or, optionally, its short flag `-N`.
/// The token following the flag is handed to the option's [`ValueProvider`], which converts and holds the value.
///
/// At most one option may be the *default* option.
/// The value of the default option may be given as the very first token, without the flag.
///
/// Options are created via [`ArgumentsBuilder::add`](crate::ArgumentsBuilder::add) and configured fluently.
///
/// ### Example
/// ```
/// # use switchyard_builder as switchyard;
/// use switchyard::{prelude::*, ArgumentsBuilder};
///
/// let mut builder = ArgumentsBuilder::new();
/// builder
///     .add("count", Some('c'))
///     .unwrap()
///     .accept_integer(Some(1))
///     .make_required()
///     .with_description("How many times to repeat.");
/// ```
pub struct ArgumentOption {
    long: String,
    short: Option<char>,
    is_default: bool,
    required: bool,
    description: String,
    provider: Option<Box<dyn ValueProvider>>,
}

impl ArgumentOption {
    pub(crate) fn new(long: impl Into<String>, short: Option<char>, is_default: bool) -> Self {
        Self {
            long: long.into(),
            short,
            is_default,
            required: false,
            description: DEFAULT_DESCRIPTION.to_string(),
            provider: None,
        }
    }

    /// The long flag, without the leading `--`.
    pub fn long(&self) -> &str {
        &self.long
    }

    /// The short flag, without the leading `-`.
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// Whether this is the default option.
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// Whether this option must be given on the Cli.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The description shown in the usage.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The attached value provider.
    pub fn provider(&self) -> Option<&dyn ValueProvider> {
        self.provider.as_deref()
    }

    pub(crate) fn provider_mut(&mut self) -> Option<&mut (dyn ValueProvider + 'static)> {
        self.provider.as_deref_mut()
    }

    /// Whether `token` is a flag of this option.
    pub fn is_match(&self, token: &str) -> bool {
        self.flags().iter().any(|flag| flag == token)
    }

    /// The rendered flags, long first.
    pub(crate) fn flags(&self) -> Vec<String> {
        let mut flags = vec![format!("--{}", self.long)];
        if let Some(short) = self.short {
            flags.push(format!("-{short}"));
        }
        flags
    }

    /// Mark this option as required.
    pub fn make_required(&mut self) -> &mut Self {
        self.required = true;
        self
    }

    /// Document the description for this option.
    /// If repeated, only the final description will apply.
    pub fn with_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    /// Attach the value provider for this option.
    /// If repeated, only the final provider will apply.
    ///
    /// ### Example
    /// ```
    /// # use switchyard_builder as switchyard;
    /// use switchyard::{ArgumentsBuilder, IntegerProvider};
    ///
    /// let mut builder = ArgumentsBuilder::new();
    /// builder.set_arguments(&["--count", "3"]);
    /// builder
    ///     .add("count", None)
    ///     .unwrap()
    ///     .add_provider(IntegerProvider::new(None));
    /// let handler = builder.build().unwrap();
    ///
    /// assert_eq!(handler.get_value::<i64>("count"), 3);
    /// ```
    pub fn add_provider(&mut self, provider: impl ValueProvider + 'static) -> &mut Self {
        self.provider.replace(Box::new(provider));
        self
    }
}

impl std::fmt::Debug for ArgumentOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let short = match &self.short {
            Some(s) => format!(" -{s},"),
            None => "".to_string(),
        };
        let default = if self.is_default { " default," } else { "" };
        let required = if self.required { " required," } else { "" };

        write!(
            f,
            "Opt[--{long},{short}{default}{required} {description}]",
            long = self.long,
            description = self.description,
        )
    }
}

impl Accepts for ArgumentOption {
    fn accept_string(&mut self, default: Option<&str>) -> &mut Self {
        self.add_provider(StringProvider::new(default))
    }

    fn accept_integer(&mut self, default: Option<i64>) -> &mut Self {
        self.add_provider(IntegerProvider::new(default))
    }

    fn accept_decimal(&mut self, default: Option<f64>) -> &mut Self {
        self.add_provider(DecimalProvider::new(default))
    }

    fn accept_flag(&mut self) -> &mut Self {
        self.accept_flag_or(Some(false))
    }

    fn accept_flag_or(&mut self, default: Option<bool>) -> &mut Self {
        self.add_provider(FlagProvider::new(default))
    }

    fn accept_filename(
        &mut self,
        must_exist: bool,
        default: Option<&str>,
    ) -> Result<&mut Self, ConfigError> {
        let provider = FilenameProvider::new(must_exist, default)?;
        Ok(self.add_provider(provider))
    }

    fn accept_directory(
        &mut self,
        must_exist: bool,
        default: Option<&str>,
    ) -> Result<&mut Self, ConfigError> {
        let provider = DirectoryProvider::new(must_exist, default)?;
        Ok(self.add_provider(provider))
    }

    fn accept_enum<E: ArgEnum + 'static>(&mut self, default: Option<E>) -> &mut Self {
        self.add_provider(EnumProvider::new(default))
    }
}
