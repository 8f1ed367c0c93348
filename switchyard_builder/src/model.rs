/// The verdict of validating one option, or of an entire command line.
///
/// A verdict is never mutated after construction.
/// Verdicts are merged via [`ValidationResult::combine`]: the result is valid only if both inputs were valid, and the errors are concatenated in order.
///
/// ### Example
/// ```
/// # use switchyard_builder as switchyard;
/// use switchyard::ValidationResult;
///
/// let verdict = ValidationResult::default()
///     .combine(ValidationResult::invalid("first"))
///     .combine(ValidationResult::invalid("second"));
///
/// assert!(!verdict.is_valid());
/// assert_eq!(verdict.errors(), &["first".to_string(), "second".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<String>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

impl ValidationResult {
    /// Create a verdict from its parts.
    pub fn new(valid: bool, errors: Vec<String>) -> Self {
        Self { valid, errors }
    }

    /// A successful verdict without errors.
    pub fn valid() -> Self {
        Self::new(true, Vec::default())
    }

    /// A failed verdict carrying a single error message.
    pub fn invalid(error: impl Into<String>) -> Self {
        Self::new(false, vec![error.into()])
    }

    /// Whether the validation succeeded.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The error messages, in the order they were recorded.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Stack `other` on top of this verdict.
    pub fn combine(self, other: ValidationResult) -> Self {
        let ValidationResult { valid, mut errors } = self;
        errors.extend(other.errors);
        Self {
            valid: valid && other.valid,
            errors,
        }
    }
}

impl FromIterator<ValidationResult> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationResult>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ValidationResult::default(), ValidationResult::combine)
    }
}

/// A scalar value held by a value provider.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Free text, filenames and directories.
    Text(String),
    /// A whole number.
    Integer(i64),
    /// A decimal number.
    Decimal(f64),
    /// A boolean.
    Flag(bool),
    /// An enum member, by its canonical name and declaration index.
    Member {
        /// The canonical member name.
        name: &'static str,
        /// The member's position in the declaration.
        ordinal: usize,
    },
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{text}"),
            Value::Integer(number) => write!(f, "{number}"),
            Value::Decimal(number) => write!(f, "{number}"),
            Value::Flag(flag) => write!(f, "{flag}"),
            Value::Member { name, .. } => write!(f, "{name}"),
        }
    }
}
