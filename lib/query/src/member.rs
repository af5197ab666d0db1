use crate::annotations::{MemberAnnotations, ServiceAnnotation};
use crate::pattern::PatternGroup;
use crate::query::Query;
use rdf_scribe_model::NamedNode;

/// A top-level member of a query's `WHERE` block.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryMember {
    Group(PatternGroup),
    SubQuery(SubSelect),
}

impl QueryMember {
    /// Makes the member optional.
    pub fn optional(mut self) -> Self {
        self.annotations_mut().optional = true;
        self
    }

    /// Combines the member with its successor via `UNION`.
    pub fn union_with_next(mut self) -> Self {
        self.annotations_mut().set_union_with_next();
        self
    }

    /// Subtracts the remaining sequence from the member via `MINUS`.
    pub fn minus_with_next(mut self) -> Self {
        self.annotations_mut().set_minus_with_next();
        self
    }

    /// Evaluates the member against a remote endpoint.
    pub fn service(mut self, endpoint: NamedNode) -> Self {
        *self.service_mut() = Some(ServiceAnnotation::new(endpoint));
        self
    }

    /// Evaluates the member against a remote endpoint, suppressing errors.
    pub fn service_silent(mut self, endpoint: NamedNode) -> Self {
        *self.service_mut() = Some(ServiceAnnotation::silent(endpoint));
        self
    }

    pub(crate) fn annotations(&self) -> &MemberAnnotations {
        match self {
            QueryMember::Group(group) => &group.annotations,
            QueryMember::SubQuery(sub) => &sub.annotations,
        }
    }

    pub(crate) fn service_annotation(&self) -> Option<&ServiceAnnotation> {
        match self {
            QueryMember::Group(group) => group.service.as_ref(),
            QueryMember::SubQuery(sub) => sub.service.as_ref(),
        }
    }

    fn annotations_mut(&mut self) -> &mut MemberAnnotations {
        match self {
            QueryMember::Group(group) => &mut group.annotations,
            QueryMember::SubQuery(sub) => &mut sub.annotations,
        }
    }

    fn service_mut(&mut self) -> &mut Option<ServiceAnnotation> {
        match self {
            QueryMember::Group(group) => &mut group.service,
            QueryMember::SubQuery(sub) => &mut sub.service,
        }
    }
}

impl From<PatternGroup> for QueryMember {
    fn from(group: PatternGroup) -> Self {
        QueryMember::Group(group)
    }
}

impl From<SubSelect> for QueryMember {
    fn from(sub: SubSelect) -> Self {
        QueryMember::SubQuery(sub)
    }
}

/// A nested `SELECT` used as a query member.
///
/// The nested query is always printed inside its own bracket. Its prefix
/// declarations are not printed; compaction uses the outermost query's
/// namespace list.
#[derive(Debug, Clone, PartialEq)]
pub struct SubSelect {
    pub(crate) query: Query,
    pub(crate) annotations: MemberAnnotations,
    pub(crate) service: Option<ServiceAnnotation>,
}

impl SubSelect {
    pub fn new(query: Query) -> Self {
        Self {
            query,
            annotations: MemberAnnotations::default(),
            service: None,
        }
    }

    /// Makes the sub-query optional.
    pub fn optional(mut self) -> Self {
        self.annotations.optional = true;
        self
    }

    /// Combines the sub-query with its successor via `UNION`.
    pub fn union_with_next(mut self) -> Self {
        self.annotations.set_union_with_next();
        self
    }

    /// Subtracts the remaining sequence from the sub-query via `MINUS`.
    pub fn minus_with_next(mut self) -> Self {
        self.annotations.set_minus_with_next();
        self
    }

    /// Evaluates the sub-query against a remote endpoint.
    pub fn service(mut self, endpoint: NamedNode) -> Self {
        self.service = Some(ServiceAnnotation::new(endpoint));
        self
    }

    pub fn query(&self) -> &Query {
        &self.query
    }
}

impl From<Query> for SubSelect {
    fn from(query: Query) -> Self {
        SubSelect::new(query)
    }
}
