use std::fmt;

/// An opaque SPARQL expression.
///
/// Filter, bind and having expressions are carried as already-rendered SPARQL
/// text and embedded verbatim in the output. Building and evaluating the
/// expression language is outside of this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expression(String);

impl Expression {
    /// Wraps already-rendered SPARQL expression text.
    pub fn raw(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Expression {
    fn from(text: &str) -> Self {
        Expression::raw(text)
    }
}

impl From<String> for Expression {
    fn from(text: String) -> Self {
        Expression::raw(text)
    }
}
