use itertools::Itertools;
use rdf_scribe_model::{render_iri, Namespace, NamedNode};

/// A SPARQL 1.1 property path expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyPath {
    Predicate(NamedNode),
    Reverse(Box<PropertyPath>),
    Sequence(Box<PropertyPath>, Box<PropertyPath>),
    Alternative(Box<PropertyPath>, Box<PropertyPath>),
    ZeroOrMore(Box<PropertyPath>),
    OneOrMore(Box<PropertyPath>),
    ZeroOrOne(Box<PropertyPath>),
    NegatedPropertySet(Vec<NamedNode>),
}

impl PropertyPath {
    /// A path of a single predicate step.
    pub fn predicate(predicate: NamedNode) -> Self {
        PropertyPath::Predicate(predicate)
    }

    /// Follows this path in the inverse direction.
    pub fn reverse(self) -> Self {
        PropertyPath::Reverse(Box::new(self))
    }

    /// Follows this path, then `next`.
    pub fn then(self, next: PropertyPath) -> Self {
        PropertyPath::Sequence(Box::new(self), Box::new(next))
    }

    /// Follows either this path or `alternative`.
    pub fn or(self, alternative: PropertyPath) -> Self {
        PropertyPath::Alternative(Box::new(self), Box::new(alternative))
    }

    /// Repeats this path zero or more times.
    pub fn zero_or_more(self) -> Self {
        PropertyPath::ZeroOrMore(Box::new(self))
    }

    /// Repeats this path one or more times.
    pub fn one_or_more(self) -> Self {
        PropertyPath::OneOrMore(Box::new(self))
    }

    /// Follows this path zero or one times.
    pub fn zero_or_one(self) -> Self {
        PropertyPath::ZeroOrOne(Box::new(self))
    }

    /// Renders the path infix, parenthesizing nested composite operands.
    pub(crate) fn render(&self, namespaces: &[Namespace]) -> String {
        match self {
            PropertyPath::Predicate(predicate) => render_iri(predicate.as_str(), namespaces),
            PropertyPath::Reverse(path) => format!("^{}", path.render_operand(namespaces)),
            PropertyPath::Sequence(first, second) => format!(
                "{} / {}",
                first.render_operand(namespaces),
                second.render_operand(namespaces)
            ),
            PropertyPath::Alternative(first, second) => format!(
                "{} | {}",
                first.render_operand(namespaces),
                second.render_operand(namespaces)
            ),
            PropertyPath::ZeroOrMore(path) => format!("{}*", path.render_operand(namespaces)),
            PropertyPath::OneOrMore(path) => format!("{}+", path.render_operand(namespaces)),
            PropertyPath::ZeroOrOne(path) => format!("{}?", path.render_operand(namespaces)),
            PropertyPath::NegatedPropertySet(predicates) => format!(
                "!({})",
                predicates
                    .iter()
                    .map(|p| render_iri(p.as_str(), namespaces))
                    .join(" | ")
            ),
        }
    }

    fn render_operand(&self, namespaces: &[Namespace]) -> String {
        let text = self.render(namespaces);
        if matches!(self, PropertyPath::Predicate(_)) {
            text
        } else {
            format!("({text})")
        }
    }
}

impl From<NamedNode> for PropertyPath {
    fn from(predicate: NamedNode) -> Self {
        PropertyPath::Predicate(predicate)
    }
}
