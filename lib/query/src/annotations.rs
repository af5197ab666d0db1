use rdf_scribe_model::NamedNode;

/// The set-operator annotations a groupable member carries.
///
/// `union_with_next` and `minus_with_next` are mutually exclusive by
/// convention only. The fluent setters overwrite each other, so the last call
/// decides which operator governs the member's relation to its successor. A
/// flag on the last member of a sequence has no successor to combine with and
/// is silently discarded when grouping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemberAnnotations {
    pub union_with_next: bool,
    pub minus_with_next: bool,
    pub optional: bool,
}

impl MemberAnnotations {
    pub(crate) fn set_union_with_next(&mut self) {
        self.union_with_next = true;
        self.minus_with_next = false;
    }

    pub(crate) fn set_minus_with_next(&mut self) {
        self.minus_with_next = true;
        self.union_with_next = false;
    }
}

/// Delegates the evaluation of a member to a remote SPARQL endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceAnnotation {
    endpoint: NamedNode,
    silent: bool,
}

impl ServiceAnnotation {
    /// Creates an annotation for `endpoint` that propagates endpoint errors.
    pub fn new(endpoint: NamedNode) -> Self {
        Self {
            endpoint,
            silent: false,
        }
    }

    /// Creates an annotation for `endpoint` that suppresses endpoint errors.
    pub fn silent(endpoint: NamedNode) -> Self {
        Self {
            endpoint,
            silent: true,
        }
    }

    /// The endpoint the wrapped member is evaluated against.
    pub fn endpoint(&self) -> &NamedNode {
        &self.endpoint
    }

    /// Whether endpoint errors are suppressed.
    pub fn is_silent(&self) -> bool {
        self.silent
    }
}
