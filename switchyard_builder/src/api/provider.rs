use std::marker::PhantomData;

use crate::api::convert::parse_bool;
use crate::error::ConfigError;
use crate::model::{ValidationResult, Value};
use crate::parser::{FileSystem, LocalFileSystem, UserInterface};
use crate::prelude::ArgEnum;

/// Behaviour to interpret the raw value of an option.
///
/// The provider receives the token following the option's flag (or `None` when there isn't one), converts it, and holds onto the result.
/// The handler later reads the value back out as a [`Value`].
///
/// Implement this to attach a custom provider via [`ArgumentOption::add_provider`](crate::ArgumentOption::add_provider).
pub trait ValueProvider {
    /// Receive the raw value.
    /// Must mark the provider as set, regardless of the outcome.
    fn set(&mut self, value: Option<&str>) -> ValidationResult;

    /// The value held, if any.
    fn value(&self) -> Option<Value>;

    /// The value to fall back onto when nothing is held.
    fn default_value(&self) -> Option<Value>;

    /// Whether [`ValueProvider::set`] has been invoked.
    fn was_set(&self) -> bool;

    /// Describe the accepted input.
    fn usage(&self, user_interface: &mut dyn UserInterface);

    /// Whether the value must name something that exists on the file system.
    fn requires_existence(&self) -> bool {
        false
    }
}

/// Captures any string.
#[derive(Debug, Default)]
pub struct StringProvider {
    value: Option<String>,
    default: Option<String>,
    was_set: bool,
}

impl StringProvider {
    /// Create a string provider.
    pub fn new(default: Option<impl Into<String>>) -> Self {
        Self {
            value: None,
            default: default.map(Into::into),
            was_set: false,
        }
    }
}

impl ValueProvider for StringProvider {
    fn set(&mut self, value: Option<&str>) -> ValidationResult {
        self.was_set = true;
        self.value = value.map(str::to_string).or_else(|| self.default.clone());
        ValidationResult::valid()
    }

    fn value(&self) -> Option<Value> {
        self.value.clone().map(Value::Text)
    }

    fn default_value(&self) -> Option<Value> {
        self.default.clone().map(Value::Text)
    }

    fn was_set(&self) -> bool {
        self.was_set
    }

    fn usage(&self, user_interface: &mut dyn UserInterface) {
        user_interface.write("string");
    }
}

/// Captures a whole number.
#[derive(Debug, Default)]
pub struct IntegerProvider {
    value: Option<i64>,
    default: Option<i64>,
    was_set: bool,
}

impl IntegerProvider {
    /// Create an integer provider.
    pub fn new(default: Option<i64>) -> Self {
        Self {
            value: None,
            default,
            was_set: false,
        }
    }
}

impl ValueProvider for IntegerProvider {
    fn set(&mut self, value: Option<&str>) -> ValidationResult {
        self.was_set = true;

        match value {
            None => {
                self.value = None;
                ValidationResult::valid()
            }
            Some(token) => match token.trim().parse::<i64>() {
                Ok(number) => {
                    self.value = Some(number);
                    ValidationResult::valid()
                }
                Err(_) => ValidationResult::invalid("An integer number is required."),
            },
        }
    }

    fn value(&self) -> Option<Value> {
        self.value.map(Value::Integer)
    }

    fn default_value(&self) -> Option<Value> {
        self.default.map(Value::Integer)
    }

    fn was_set(&self) -> bool {
        self.was_set
    }

    fn usage(&self, user_interface: &mut dyn UserInterface) {
        user_interface.write("integer");
    }
}

/// Captures a decimal number.
#[derive(Debug, Default)]
pub struct DecimalProvider {
    value: Option<f64>,
    default: Option<f64>,
    was_set: bool,
}

impl DecimalProvider {
    /// Create a decimal provider.
    pub fn new(default: Option<f64>) -> Self {
        Self {
            value: None,
            default,
            was_set: false,
        }
    }
}

impl ValueProvider for DecimalProvider {
    fn set(&mut self, value: Option<&str>) -> ValidationResult {
        self.was_set = true;

        match value {
            None => {
                self.value = None;
                ValidationResult::valid()
            }
            Some(token) => match token.trim().parse::<f64>() {
                Ok(number) if number.is_finite() => {
                    self.value = Some(number);
                    ValidationResult::valid()
                }
                _ => ValidationResult::invalid("An decimal number is required."),
            },
        }
    }

    fn value(&self) -> Option<Value> {
        self.value.map(Value::Decimal)
    }

    fn default_value(&self) -> Option<Value> {
        self.default.map(Value::Decimal)
    }

    fn was_set(&self) -> bool {
        self.was_set
    }

    fn usage(&self, user_interface: &mut dyn UserInterface) {
        user_interface.write("decimal");
    }
}

/// Captures a flag.
///
/// A flag without a trailing value is `true`.
/// It may also be trailed by an explicit `true` or `false` (case-insensitive).
/// The default (typically `false`) only applies when the flag is absent from the Cli.
#[derive(Debug, Default)]
pub struct FlagProvider {
    value: Option<bool>,
    default: Option<bool>,
    was_set: bool,
}

impl FlagProvider {
    /// Create a flag provider.
    pub fn new(default: Option<bool>) -> Self {
        Self {
            value: None,
            default,
            was_set: false,
        }
    }
}

impl ValueProvider for FlagProvider {
    fn set(&mut self, value: Option<&str>) -> ValidationResult {
        self.was_set = true;

        match value {
            None => {
                self.value = Some(true);
                ValidationResult::valid()
            }
            Some(token) => match parse_bool(token) {
                Some(flag) => {
                    self.value = Some(flag);
                    ValidationResult::valid()
                }
                None => ValidationResult::invalid(format!("{token} is not a valid boolean value.")),
            },
        }
    }

    fn value(&self) -> Option<Value> {
        self.value.map(Value::Flag)
    }

    fn default_value(&self) -> Option<Value> {
        self.default.map(Value::Flag)
    }

    fn was_set(&self) -> bool {
        self.was_set
    }

    fn usage(&self, user_interface: &mut dyn UserInterface) {
        user_interface.write("true, false");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathKind {
    File,
    Directory,
}

impl PathKind {
    fn exists(&self, file_system: &dyn FileSystem, path: &str) -> bool {
        match self {
            PathKind::File => file_system.file_exists(path),
            PathKind::Directory => file_system.directory_exists(path),
        }
    }

    fn missing_default(&self, path: &str) -> ConfigError {
        match self {
            PathKind::File => ConfigError::MissingFile(path.to_string()),
            PathKind::Directory => ConfigError::MissingDirectory(path.to_string()),
        }
    }

    fn noun(&self) -> &'static str {
        match self {
            PathKind::File => "file",
            PathKind::Directory => "directory",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            PathKind::File => "filename",
            PathKind::Directory => "directory",
        }
    }
}

struct PathProvider {
    kind: PathKind,
    must_exist: bool,
    value: Option<String>,
    default: Option<String>,
    was_set: bool,
    file_system: Box<dyn FileSystem>,
}

impl PathProvider {
    fn new(
        kind: PathKind,
        file_system: Box<dyn FileSystem>,
        must_exist: bool,
        default: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = &default {
            if must_exist && !kind.exists(file_system.as_ref(), path) {
                return Err(kind.missing_default(path));
            }
        }

        Ok(Self {
            kind,
            must_exist,
            value: None,
            default,
            was_set: false,
            file_system,
        })
    }

    fn set(&mut self, value: Option<&str>) -> ValidationResult {
        self.was_set = true;

        match value {
            // The default was vetted at construction.
            None => {
                self.value = None;
                ValidationResult::valid()
            }
            Some(path) => {
                if !self.must_exist || self.kind.exists(self.file_system.as_ref(), path) {
                    self.value = Some(path.to_string());
                    ValidationResult::valid()
                } else {
                    ValidationResult::invalid(format!(
                        "The {noun} {path} does not exist.",
                        noun = self.kind.noun()
                    ))
                }
            }
        }
    }
}

impl std::fmt::Debug for PathProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathProvider")
            .field("kind", &self.kind)
            .field("must_exist", &self.must_exist)
            .field("value", &self.value)
            .field("default", &self.default)
            .field("was_set", &self.was_set)
            .finish()
    }
}

macro_rules! path_provider {
    ($name:ident, $kind:expr, $noun:literal) => {
        #[doc = concat!("Captures a ", $noun, ", and optionally validates that the ", $noun, " exists.")]
        #[derive(Debug)]
        pub struct $name(PathProvider);

        impl $name {
            #[doc = concat!("Create a ", $noun, " provider, checked against the local file system.")]
            ///
            #[doc = concat!("Fails when `must_exist` is set and the `default` ", $noun, " does not exist.")]
            pub fn new(must_exist: bool, default: Option<impl Into<String>>) -> Result<Self, ConfigError> {
                Self::with_file_system(LocalFileSystem::default(), must_exist, default)
            }

            #[doc = concat!("Create a ", $noun, " provider, checked against `file_system`.")]
            pub fn with_file_system(
                file_system: impl FileSystem + 'static,
                must_exist: bool,
                default: Option<impl Into<String>>,
            ) -> Result<Self, ConfigError> {
                PathProvider::new($kind, Box::new(file_system), must_exist, default.map(Into::into))
                    .map($name)
            }
        }

        impl ValueProvider for $name {
            fn set(&mut self, value: Option<&str>) -> ValidationResult {
                self.0.set(value)
            }

            fn value(&self) -> Option<Value> {
                self.0.value.clone().map(Value::Text)
            }

            fn default_value(&self) -> Option<Value> {
                self.0.default.clone().map(Value::Text)
            }

            fn was_set(&self) -> bool {
                self.0.was_set
            }

            fn usage(&self, user_interface: &mut dyn UserInterface) {
                user_interface.write(self.0.kind.hint());
            }

            fn requires_existence(&self) -> bool {
                self.0.must_exist
            }
        }
    };
}

path_provider!(FilenameProvider, PathKind::File, "file");
path_provider!(DirectoryProvider, PathKind::Directory, "directory");

/// Captures the name of a member of the enum `E`, ignoring case.
///
/// An unknown name is reported as a validation error, listing the accepted names.
pub struct EnumProvider<E> {
    value: Option<Value>,
    default: Option<Value>,
    was_set: bool,
    _phantom: PhantomData<E>,
}

impl<E: ArgEnum> EnumProvider<E> {
    /// Create an enum provider.
    pub fn new(default: Option<E>) -> Self {
        Self {
            value: None,
            default: default.as_ref().map(member),
            was_set: false,
            _phantom: PhantomData,
        }
    }
}

fn member<E: ArgEnum>(variant: &E) -> Value {
    Value::Member {
        name: variant.name(),
        ordinal: variant.ordinal(),
    }
}

impl<E> std::fmt::Debug for EnumProvider<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumProvider")
            .field("type", &std::any::type_name::<E>())
            .field("value", &self.value)
            .field("default", &self.default)
            .field("was_set", &self.was_set)
            .finish()
    }
}

impl<E: ArgEnum> ValueProvider for EnumProvider<E> {
    fn set(&mut self, value: Option<&str>) -> ValidationResult {
        self.was_set = true;

        match value {
            None => {
                self.value = None;
                ValidationResult::valid()
            }
            Some(token) => match E::from_name(token) {
                Some(variant) => {
                    self.value = Some(member(&variant));
                    ValidationResult::valid()
                }
                None => ValidationResult::invalid(format!(
                    "{token} is not a valid value; expected one of: {}.",
                    E::members().join(", ")
                )),
            },
        }
    }

    fn value(&self) -> Option<Value> {
        self.value.clone()
    }

    fn default_value(&self) -> Option<Value> {
        self.default.clone()
    }

    fn was_set(&self) -> bool {
        self.was_set
    }

    fn usage(&self, user_interface: &mut dyn UserInterface) {
        user_interface.write(&E::members().join(", "));
    }
}
