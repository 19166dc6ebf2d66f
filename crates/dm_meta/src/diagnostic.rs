use alloc::string::String;
use core::fmt;

use crate::model::TypeRef;

// -----------------------------------------------------------------------------
// Constants

/// Category of every diagnostic the engine reports.
pub const CATEGORY: &str = "Serialization";

/// Help page of a diagnostic; `{id}` is replaced by the diagnostic id.
pub const LINK_FORMAT: &str = "https://docs.example.org/diagnostics/{id}.html";

/// Partial declarations of one type disagree on accessibility.
pub const PARTIAL_ACCESSIBILITY_MISMATCH: &str = "DM0001";

/// Two different types map to the same generated identifier.
pub const GENERATED_IDENTIFIER_COLLISION: &str = "DM0002";

/// Partial declarations of one type name different base types.
pub const PARTIAL_BASE_MISMATCH: &str = "DM0003";

/// Partial declarations of one type disagree on generic parameters.
pub const PARTIAL_GENERIC_MISMATCH: &str = "DM0004";

// -----------------------------------------------------------------------------
// Severity

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

// -----------------------------------------------------------------------------
// Diagnostic

/// A user-facing problem the driving generator should report.
///
/// `location` is the declaration the problem is tied to.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    pub id: &'static str,
    pub severity: Severity,
    pub category: &'static str,
    pub message: String,
    pub location: Option<TypeRef>,
}

impl Diagnostic {
    /// Creates a diagnostic in the serialization category.
    pub fn new(id: &'static str, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id,
            severity,
            category: CATEGORY,
            message: message.into(),
            location: None,
        }
    }

    #[inline]
    pub fn at(mut self, location: TypeRef) -> Self {
        self.location = Some(location);
        self
    }

    /// Returns the help page of this diagnostic.
    ///
    /// # Examples
    ///
    /// ```
    /// use dm_meta::diagnostic::{Diagnostic, Severity};
    ///
    /// let diagnostic = Diagnostic::new("DM0002", Severity::Error, "collision");
    /// assert_eq!(
    ///     diagnostic.help_link(),
    ///     "https://docs.example.org/diagnostics/DM0002.html",
    /// );
    /// ```
    pub fn help_link(&self) -> String {
        LINK_FORMAT.replace("{id}", self.id)
    }

    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.severity.as_str(), self.id, self.message)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{Diagnostic, Severity};
    use crate::model::TypeRef;

    #[test]
    fn display() {
        let diagnostic = Diagnostic::new("DM0001", Severity::Warning, "mismatch").at(TypeRef::new(2));

        assert_eq!(diagnostic.to_string(), "warning DM0001: mismatch");
        assert_eq!(diagnostic.category, "Serialization");
        assert_eq!(diagnostic.location, Some(TypeRef::new(2)));
        assert!(!diagnostic.is_error());
    }
}
