use oxiri::IriParseError;
use thiserror::Error;

/// An error raised when constructing a namespace from invalid input.
#[derive(Debug, Error)]
pub enum NamespaceParseError {
    /// The prefix label is not usable in a `PREFIX` declaration.
    #[error("'{0}' is not a valid prefix label")]
    InvalidPrefix(String),
    /// The namespace IRI is invalid.
    #[error(transparent)]
    InvalidIri(#[from] IriParseError),
}
