//! # Text Adapter Options
//!
//! `TextOptions` controls how [`crate::text::fill`] turns a text field into an
//! option and how [`crate::text::emit`] renders one back.
//!
//! | Option          | Default      | Description                                   |
//! |-----------------|--------------|-----------------------------------------------|
//! | true_literal    | `"true"`     | Text stored for / accepted as boolean true    |
//! | false_literal   | `"false"`    | Text stored for / accepted as boolean false   |
//! | date_format     | `Standard`   | Layout of Date fields                         |
//! | date_time_format| `Standard`   | Layout of DateTime fields                     |
//! | trim_input      | `false`      | Strip surrounding whitespace before parsing   |
//! | error_policy    | `Fail`       | What a malformed field does to the record     |
//!
//! ```ignore
//! let options = TextOptions::builder()
//!     .date_format(DateFormat::Compact)
//!     .error_policy(ErrorPolicy::Skip)
//!     .build();
//! ```

use crate::temporal::DateFormat;

/// Reaction to a malformed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Return the `FormatError` to the caller.
    #[default]
    Fail,
    /// Store null, log a warning and keep going.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOptions {
    true_literal: String,
    false_literal: String,
    date_format: DateFormat,
    date_time_format: DateFormat,
    trim_input: bool,
    error_policy: ErrorPolicy,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            true_literal: "true".to_string(),
            false_literal: "false".to_string(),
            date_format: DateFormat::Standard,
            date_time_format: DateFormat::Standard,
            trim_input: false,
            error_policy: ErrorPolicy::Fail,
        }
    }
}

impl TextOptions {
    pub fn builder() -> TextOptionsBuilder {
        TextOptionsBuilder::new()
    }

    pub fn true_literal(&self) -> &str {
        &self.true_literal
    }

    pub fn false_literal(&self) -> &str {
        &self.false_literal
    }

    pub fn date_format(&self) -> DateFormat {
        self.date_format
    }

    pub fn date_time_format(&self) -> DateFormat {
        self.date_time_format
    }

    pub fn trim_input(&self) -> bool {
        self.trim_input
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }
}

/// Fluent builder for [`TextOptions`]. Unset fields keep their defaults.
#[derive(Debug, Default)]
pub struct TextOptionsBuilder {
    true_literal: Option<String>,
    false_literal: Option<String>,
    date_format: Option<DateFormat>,
    date_time_format: Option<DateFormat>,
    trim_input: Option<bool>,
    error_policy: Option<ErrorPolicy>,
}

impl TextOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets both boolean literals. Matching on input is case-insensitive.
    pub fn boolean_literals(
        mut self,
        true_literal: impl Into<String>,
        false_literal: impl Into<String>,
    ) -> Self {
        self.true_literal = Some(true_literal.into());
        self.false_literal = Some(false_literal.into());
        self
    }

    pub fn date_format(mut self, format: DateFormat) -> Self {
        self.date_format = Some(format);
        self
    }

    pub fn date_time_format(mut self, format: DateFormat) -> Self {
        self.date_time_format = Some(format);
        self
    }

    pub fn trim_input(mut self, trim: bool) -> Self {
        self.trim_input = Some(trim);
        self
    }

    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = Some(policy);
        self
    }

    pub fn build(self) -> TextOptions {
        let defaults = TextOptions::default();
        TextOptions {
            true_literal: self.true_literal.unwrap_or(defaults.true_literal),
            false_literal: self.false_literal.unwrap_or(defaults.false_literal),
            date_format: self.date_format.unwrap_or(defaults.date_format),
            date_time_format: self.date_time_format.unwrap_or(defaults.date_time_format),
            trim_input: self.trim_input.unwrap_or(defaults.trim_input),
            error_policy: self.error_policy.unwrap_or(defaults.error_policy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_without_settings_matches_default() {
        assert_eq!(TextOptions::builder().build(), TextOptions::default());
    }

    #[test]
    fn builder_overrides_only_given_fields() {
        let options = TextOptions::builder()
            .boolean_literals("Y", "N")
            .error_policy(ErrorPolicy::Skip)
            .build();
        assert_eq!(options.true_literal(), "Y");
        assert_eq!(options.false_literal(), "N");
        assert_eq!(options.error_policy(), ErrorPolicy::Skip);
        assert_eq!(options.date_format(), DateFormat::Standard);
        assert!(!options.trim_input());
    }
}
