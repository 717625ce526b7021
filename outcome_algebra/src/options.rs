//! Per-call settings for the aggregating combinators.

use serde::Deserialize;

/// Separator placed between merged messages unless overridden.
pub const DEFAULT_SEPARATOR: &str = "\n  ";

/// Controls how [`crate::merge`], [`crate::apply`] and [`crate::flatten`]
/// combine failures.
///
/// Defaults: messages are joined with [`DEFAULT_SEPARATOR`], no group header
/// is written, and the left operand's payload survives.
///
/// The separator and header can be deserialized from an application's own
/// configuration; the payload override is always set in code.
///
/// # Examples
///
/// ```
/// use outcome_algebra::{Failure, MergeOptions, merge};
///
/// let options = MergeOptions::new()
///     .with_header("signup rejected")
///     .with_separator("; ")
///     .with_payload(400_u16);
/// let merged = merge(
///     Failure::new(1_u16).with_message("name empty"),
///     Failure::new(2_u16).with_message("age negative"),
///     options,
/// );
/// assert_eq!(merged.message(), "signup rejected; name empty; age negative");
/// assert_eq!(*merged.payload(), 400);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MergeOptions<P> {
    separator: String,
    header: Option<String>,
    #[serde(skip)]
    payload: Option<P>,
}

impl<P> Default for MergeOptions<P> {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_owned(),
            header: None,
            payload: None,
        }
    }
}

impl<P> MergeOptions<P> {
    /// Options with every default applied.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `separator` between merged messages.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Prepends `header` once to the aggregated message.
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Makes `payload` the surviving payload instead of the left operand's.
    #[must_use]
    pub fn with_payload(mut self, payload: P) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Separator between messages.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Group header, if any.
    #[must_use]
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// Payload override, if any.
    #[must_use]
    pub const fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    pub(crate) fn into_parts(self) -> (String, Option<String>, Option<P>) {
        (self.separator, self.header, self.payload)
    }
}
