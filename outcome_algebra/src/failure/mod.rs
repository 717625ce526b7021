//! The [`Failure`] record carried on the failure channel of an
//! [`crate::Outcome`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::severity::{Severity, max_severity};

/// Structured description of a computation that did not produce a value.
///
/// A failure carries a [`Severity`], a human-readable message, a payload of
/// the caller's choosing and a list of child failures. The combinators in
/// [`crate::aggregate`] fold messages and severities together; they never
/// write to `children`, which is left for callers who want to build a tree
/// by hand.
///
/// # Examples
///
/// ```
/// use outcome_algebra::{Failure, Severity};
///
/// let failure = Failure::new(404_u16)
///     .with_level(Severity::Warn)
///     .with_message("user not found");
/// assert_eq!(failure.render(), "[Warn] user not found");
/// assert_eq!(*failure.payload(), 404);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
#[error("[{level}] {message}")]
pub struct Failure<P> {
    level: Severity,
    message: String,
    payload: P,
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    children: Vec<Self>,
}

impl<P> Failure<P> {
    /// Creates an `Err`-level failure with an empty message.
    #[must_use]
    pub const fn new(payload: P) -> Self {
        Self {
            level: Severity::Err,
            message: String::new(),
            payload,
            children: Vec::new(),
        }
    }

    /// Sets the severity.
    #[must_use]
    pub const fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Sets the message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Appends a child failure.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Replaces the child list.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Severity of this node.
    #[must_use]
    pub const fn level(&self) -> Severity {
        self.level
    }

    /// Accumulated message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Caller-supplied payload.
    #[must_use]
    pub const fn payload(&self) -> &P {
        &self.payload
    }

    /// Child failures attached with [`Failure::with_child`].
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Consumes the failure and returns its payload.
    #[must_use]
    pub fn into_payload(self) -> P {
        self.payload
    }

    /// Replaces the payload, possibly changing its type.
    ///
    /// Children are converted with the same function.
    #[must_use]
    pub fn map_payload<Q>(self, mut f: impl FnMut(P) -> Q) -> Failure<Q> {
        self.map_payload_with(&mut f)
    }

    fn map_payload_with<Q, F>(self, f: &mut F) -> Failure<Q>
    where
        F: FnMut(P) -> Q,
    {
        let mut children = Vec::with_capacity(self.children.len());
        for child in self.children {
            children.push(child.map_payload_with(&mut *f));
        }
        Failure {
            level: self.level,
            message: self.message,
            payload: f(self.payload),
            children,
        }
    }

    /// Raises the severity to at least `level`. Never lowers it.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_algebra::{Failure, Severity};
    ///
    /// let raised = Failure::new(()).with_level(Severity::Warn).escalate(Severity::Panic);
    /// assert_eq!(raised.level(), Severity::Panic);
    /// let kept = raised.escalate(Severity::Info);
    /// assert_eq!(kept.level(), Severity::Panic);
    /// ```
    #[must_use]
    pub fn escalate(mut self, level: Severity) -> Self {
        self.level = max_severity(self.level, level);
        self
    }

    /// Formats the failure as `"[<Level>] <message>"`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Emits the rendered failure as a `tracing` event.
    ///
    /// `Info` maps to an info event, `Warn` to a warning, and `Err` and
    /// `Panic` to errors. Nothing in the combinators calls this; it exists
    /// for call sites that want to log a failure without aborting.
    pub fn report(&self) {
        let rendered = self.render();
        match self.level {
            Severity::Info => tracing::info!(severity = %self.level, "{rendered}"),
            Severity::Warn => tracing::warn!(severity = %self.level, "{rendered}"),
            Severity::Err | Severity::Panic => {
                tracing::error!(severity = %self.level, "{rendered}");
            }
        }
    }

    /// Folds `other` into `self`: max severity, messages joined by
    /// `separator`, left payload and children kept.
    pub(crate) fn join(mut self, other: &Self, separator: &str) -> Self {
        self.level = max_severity(self.level, other.level);
        self.message.reserve(separator.len() + other.message.len());
        self.message.push_str(separator);
        self.message.push_str(&other.message);
        self
    }

    /// Prefixes the message with `header` and `separator`.
    pub(crate) fn under_header(mut self, header: &str, separator: &str) -> Self {
        self.message = format!("{header}{separator}{}", self.message);
        self
    }

    pub(crate) fn replace_payload(mut self, payload: Option<P>) -> Self {
        if let Some(replacement) = payload {
            self.payload = replacement;
        }
        self
    }
}

/// Renders a failure; see [`Failure::render`].
#[must_use]
pub fn render<P>(failure: &Failure<P>) -> String {
    failure.render()
}
