use crate::error::NamespaceParseError;
use oxiri::Iri;

/// A (prefix, IRI) mapping used to compact IRIs when rendering terms.
///
/// Callers hand an ordered list of namespaces to the renderer. List order is
/// significant: the first namespace whose IRI is a string prefix of a resource
/// IRI wins the compaction. Resources no namespace covers keep their
/// angle-bracketed form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace {
    prefix: String,
    iri: String,
}

impl Namespace {
    /// Creates a new [Namespace], validating the prefix label and the IRI.
    ///
    /// The empty prefix is allowed and declares the default namespace (`:`).
    pub fn new(
        prefix: impl Into<String>,
        iri: impl Into<String>,
    ) -> Result<Self, NamespaceParseError> {
        let prefix = prefix.into();
        if !is_valid_prefix_label(&prefix) {
            return Err(NamespaceParseError::InvalidPrefix(prefix));
        }
        let iri = Iri::parse(iri.into())?;
        Ok(Self {
            prefix,
            iri: iri.into_inner(),
        })
    }

    /// The prefix label, without the trailing colon.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The namespace IRI.
    pub fn iri(&self) -> &str {
        &self.iri
    }

    /// Returns the local part of `iri` if this namespace covers it.
    pub fn local_part<'a>(&self, iri: &'a str) -> Option<&'a str> {
        iri.strip_prefix(self.iri.as_str())
    }
}

/// A prefix label must be empty, or start alphabetic, continue with
/// alphanumerics, `-`, `_` or `.`, and not end with a dot.
fn is_valid_prefix_label(label: &str) -> bool {
    let mut chars = label.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    first.is_alphabetic()
        && !label.ends_with('.')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
