//! Yes/no confirmation prompts.

use std::fmt;
use std::sync::Arc;

use crate::error::ParseError;

/// Choices shown when a [`Confirmation`] does not set its own.
pub const DEFAULT_CHOICES: [&str; 2] = ["y", "n"];

/// Turns a trimmed answer into yes or no.
pub type ConfirmationParser = Arc<dyn Fn(&str) -> Result<bool, ParseError> + Send + Sync>;

/// The parser used unless a [`Confirmation`] provides its own.
///
/// `y`, `Y`, `yes` and `YES` are yes; `n`, `N`, `no` and `NO` are no. Anything
/// else goes through [`parse_bool_literal`].
pub fn default_confirmation(input: &str) -> Result<bool, ParseError> {
    match input {
        "y" | "Y" | "yes" | "YES" => Ok(true),
        "n" | "N" | "no" | "NO" => Ok(false),
        _ => parse_bool_literal(input),
    }
}

/// Accepts `1 t T true True TRUE` and `0 f F false False FALSE`.
pub fn parse_bool_literal(input: &str) -> Result<bool, ParseError> {
    match input {
        "1" | "t" | "T" | "true" | "True" | "TRUE" => Ok(true),
        "0" | "f" | "F" | "false" | "False" | "FALSE" => Ok(false),
        _ => Err(ParseError::invalid_answer(input)),
    }
}

/// A confirmation prompt's configuration.
///
/// ```
/// use stepline::Confirmation;
///
/// let install = Confirmation::new("Install with current database?")
///     .choices(["Y", "n"])
///     .default(true);
/// # let _ = install;
/// ```
#[derive(Clone)]
pub struct Confirmation {
    label: String,
    choices: Option<Vec<String>>,
    enable_default: bool,
    default_value: bool,
    parser: Option<ConfirmationParser>,
    require_valid_input: bool,
}

impl Confirmation {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            choices: None,
            enable_default: false,
            default_value: false,
            parser: None,
            require_valid_input: false,
        }
    }

    /// Choices displayed after the label, joined with `/`. Display only: what
    /// is accepted is up to the parser. Uppercasing the default is a good
    /// convention (`Y/n`).
    pub fn choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    /// Answer `value` when the user just presses enter, and when the prompter
    /// is not interactive.
    pub fn default(mut self, value: bool) -> Self {
        self.enable_default = true;
        self.default_value = value;
        self
    }

    /// Answer `value` when the prompter is not interactive, without making an
    /// empty answer acceptable.
    pub fn default_value(mut self, value: bool) -> Self {
        self.default_value = value;
        self
    }

    /// Replace [`default_confirmation`] with a custom parser.
    pub fn parser(
        mut self,
        parser: impl Fn(&str) -> Result<bool, ParseError> + Send + Sync + 'static,
    ) -> Self {
        self.parser = Some(Arc::new(parser));
        self
    }

    /// Ask again, after printing the parse error, until the answer parses.
    pub fn require_valid_input(mut self) -> Self {
        self.require_valid_input = true;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn has_default(&self) -> bool {
        self.enable_default
    }

    pub fn default_answer(&self) -> bool {
        self.default_value
    }

    pub fn requires_valid_input(&self) -> bool {
        self.require_valid_input
    }

    /// `label [c1/c2/...] `, as written before reading the answer.
    pub fn prompt_text(&self) -> String {
        let choices = match &self.choices {
            Some(choices) => choices.join("/"),
            None => DEFAULT_CHOICES.join("/"),
        };
        format!("{} [{}] ", self.label, choices)
    }

    /// Run the configured parser on an already-trimmed answer.
    pub fn parse(&self, answer: &str) -> Result<bool, ParseError> {
        match &self.parser {
            Some(parser) => parser(answer),
            None => default_confirmation(answer),
        }
    }
}

impl fmt::Debug for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Confirmation")
            .field("label", &self.label)
            .field("choices", &self.choices)
            .field("enable_default", &self.enable_default)
            .field("default_value", &self.default_value)
            .field("custom_parser", &self.parser.is_some())
            .field("require_valid_input", &self.require_valid_input)
            .finish()
    }
}
