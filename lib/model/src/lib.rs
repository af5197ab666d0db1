mod error;
mod namespace;
mod term;

pub use error::*;
pub use namespace::*;
pub use term::*;

// Re-export some oxrdf types.
pub use oxiri::Iri;
pub use oxrdf::{
    BlankNode, BlankNodeIdParseError, BlankNodeRef, IriParseError, Literal, LiteralRef, NamedNode,
    NamedNodeRef, Variable, VariableNameParseError, VariableRef,
};
