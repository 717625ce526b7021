//! Sample failure payload modelled on form validation.

use std::fmt;

/// Which input field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Account name.
    Name,
    /// Contact e-mail.
    Email,
    /// Age in years.
    Age,
    /// Anything not tied to one field.
    Form,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Age => "age",
            Self::Form => "form",
        };
        f.write_str(name)
    }
}
