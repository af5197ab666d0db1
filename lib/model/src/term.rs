use crate::namespace::Namespace;
use oxrdf::vocab::xsd;
use oxrdf::{BlankNode, Literal, NamedNode, Variable};

/// A single position of a graph pattern: a variable or a concrete RDF term.
///
/// This is a closed sum over the term kinds a pattern position can hold. The
/// `From` impls let builder callers pass oxrdf terms and variables directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TermPattern {
    Variable(Variable),
    Iri(NamedNode),
    BlankNode(BlankNode),
    Literal(Literal),
}

impl TermPattern {
    /// Renders this term to its SPARQL token form.
    ///
    /// Resource and datatype IRIs are compacted against `namespaces`; the
    /// first namespace in list order whose IRI covers the resource wins.
    /// Uncovered IRIs keep the angle-bracketed form. Language tags render
    /// upper-cased.
    pub fn render(&self, namespaces: &[Namespace]) -> String {
        match self {
            TermPattern::Variable(variable) => format!("?{}", variable.as_str()),
            TermPattern::Iri(resource) => render_iri(resource.as_str(), namespaces),
            TermPattern::BlankNode(node) => format!("_:{}", node.as_str()),
            TermPattern::Literal(literal) => render_literal(literal, namespaces),
        }
    }
}

impl From<Variable> for TermPattern {
    fn from(variable: Variable) -> Self {
        TermPattern::Variable(variable)
    }
}

impl From<NamedNode> for TermPattern {
    fn from(resource: NamedNode) -> Self {
        TermPattern::Iri(resource)
    }
}

impl From<BlankNode> for TermPattern {
    fn from(node: BlankNode) -> Self {
        TermPattern::BlankNode(node)
    }
}

impl From<Literal> for TermPattern {
    fn from(literal: Literal) -> Self {
        TermPattern::Literal(literal)
    }
}

/// Renders a single term or variable, compacting IRIs against `namespaces`.
pub fn render_term(term: &TermPattern, namespaces: &[Namespace]) -> String {
    term.render(namespaces)
}

/// Renders an IRI, compacted to `prefix:localname` when a namespace covers it.
pub fn render_iri(iri: &str, namespaces: &[Namespace]) -> String {
    for namespace in namespaces {
        if let Some(local) = namespace.local_part(iri) {
            return format!("{}:{local}", namespace.prefix());
        }
    }
    format!("<{iri}>")
}

fn render_literal(literal: &Literal, namespaces: &[Namespace]) -> String {
    let mut out = String::with_capacity(literal.value().len() + 2);
    out.push('"');
    escape_into(literal.value(), &mut out);
    out.push('"');
    if let Some(language) = literal.language() {
        out.push('@');
        out.push_str(&language.to_uppercase());
    } else if literal.datatype() != xsd::STRING {
        out.push_str("^^");
        out.push_str(&render_iri(literal.datatype().as_str(), namespaces));
    }
    out
}

fn escape_into(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
}
