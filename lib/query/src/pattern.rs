use crate::annotations::{MemberAnnotations, ServiceAnnotation};
use crate::expression::Expression;
use crate::path::PropertyPath;
use rdf_scribe_model::{NamedNode, TermPattern, Variable};

/// A single subject-predicate-object pattern, possibly containing variables.
#[derive(Debug, Clone, PartialEq)]
pub struct TriplePattern {
    pub subject: TermPattern,
    pub predicate: TermPattern,
    pub object: TermPattern,
    pub(crate) annotations: MemberAnnotations,
}

impl TriplePattern {
    pub fn new(
        subject: impl Into<TermPattern>,
        predicate: impl Into<TermPattern>,
        object: impl Into<TermPattern>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            annotations: MemberAnnotations::default(),
        }
    }

    /// Makes the pattern optional.
    pub fn optional(mut self) -> Self {
        self.annotations.optional = true;
        self
    }

    /// Combines the pattern with its successor via `UNION`.
    pub fn union_with_next(mut self) -> Self {
        self.annotations.set_union_with_next();
        self
    }

    /// Subtracts the remaining sequence from the pattern via `MINUS`.
    pub fn minus_with_next(mut self) -> Self {
        self.annotations.set_minus_with_next();
        self
    }
}

/// A property path connecting two pattern positions.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPattern {
    pub start: TermPattern,
    pub path: PropertyPath,
    pub end: TermPattern,
    pub(crate) annotations: MemberAnnotations,
}

impl PathPattern {
    pub fn new(
        start: impl Into<TermPattern>,
        path: impl Into<PropertyPath>,
        end: impl Into<TermPattern>,
    ) -> Self {
        Self {
            start: start.into(),
            path: path.into(),
            end: end.into(),
            annotations: MemberAnnotations::default(),
        }
    }

    /// Makes the pattern optional.
    pub fn optional(mut self) -> Self {
        self.annotations.optional = true;
        self
    }

    /// Combines the pattern with its successor via `UNION`.
    pub fn union_with_next(mut self) -> Self {
        self.annotations.set_union_with_next();
        self
    }

    /// Subtracts the remaining sequence from the pattern via `MINUS`.
    pub fn minus_with_next(mut self) -> Self {
        self.annotations.set_minus_with_next();
        self
    }
}

/// An inline table of variable bindings injected into the pattern.
///
/// `None` cells stand for `UNDEF`. Rows shorter than the variable list are
/// padded with `UNDEF`; longer rows are truncated.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuesBlock {
    pub(crate) variables: Vec<Variable>,
    pub(crate) rows: Vec<Vec<Option<TermPattern>>>,
}

impl ValuesBlock {
    pub fn new(variables: impl IntoIterator<Item = Variable>) -> Self {
        Self {
            variables: variables.into_iter().collect(),
            rows: Vec::new(),
        }
    }

    /// Appends one row of bindings, one cell per declared variable.
    pub fn row(mut self, bindings: impl IntoIterator<Item = Option<TermPattern>>) -> Self {
        let mut row: Vec<_> = bindings.into_iter().collect();
        row.resize(self.variables.len(), None);
        self.rows.push(row);
        self
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }
}

/// Assigns the result of an expression to a variable.
#[derive(Debug, Clone, PartialEq)]
pub struct BindAssignment {
    pub expression: Expression,
    pub variable: Variable,
}

impl BindAssignment {
    pub fn new(expression: impl Into<Expression>, variable: Variable) -> Self {
        Self {
            expression: expression.into(),
            variable,
        }
    }
}

/// A member of a [PatternGroup].
///
/// Triple patterns and property paths carry set-operator annotations; values,
/// bind and filter members do not take part in grouping and are emitted in
/// their sequence position.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupMember {
    Pattern(TriplePattern),
    Path(PathPattern),
    Values(ValuesBlock),
    Bind(BindAssignment),
    Filter(Expression),
}

impl GroupMember {
    pub(crate) fn annotations(&self) -> Option<&MemberAnnotations> {
        match self {
            GroupMember::Pattern(pattern) => Some(&pattern.annotations),
            GroupMember::Path(path) => Some(&path.annotations),
            GroupMember::Values(_) | GroupMember::Bind(_) | GroupMember::Filter(_) => None,
        }
    }
}

impl From<TriplePattern> for GroupMember {
    fn from(pattern: TriplePattern) -> Self {
        GroupMember::Pattern(pattern)
    }
}

impl From<PathPattern> for GroupMember {
    fn from(path: PathPattern) -> Self {
        GroupMember::Path(path)
    }
}

impl From<ValuesBlock> for GroupMember {
    fn from(values: ValuesBlock) -> Self {
        GroupMember::Values(values)
    }
}

impl From<BindAssignment> for GroupMember {
    fn from(bind: BindAssignment) -> Self {
        GroupMember::Bind(bind)
    }
}

/// A bracketed basic graph pattern.
///
/// An empty group is legal and renders as an empty block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternGroup {
    pub(crate) members: Vec<GroupMember>,
    pub(crate) annotations: MemberAnnotations,
    pub(crate) service: Option<ServiceAnnotation>,
}

impl PatternGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a member to the group.
    pub fn member(mut self, member: impl Into<GroupMember>) -> Self {
        self.members.push(member.into());
        self
    }

    /// Appends a triple pattern built from its three positions.
    pub fn pattern(
        self,
        subject: impl Into<TermPattern>,
        predicate: impl Into<TermPattern>,
        object: impl Into<TermPattern>,
    ) -> Self {
        self.member(TriplePattern::new(subject, predicate, object))
    }

    /// Appends a property path pattern.
    pub fn path(
        self,
        start: impl Into<TermPattern>,
        path: impl Into<PropertyPath>,
        end: impl Into<TermPattern>,
    ) -> Self {
        self.member(PathPattern::new(start, path, end))
    }

    /// Appends a `BIND` assignment.
    pub fn bind(self, expression: impl Into<Expression>, variable: Variable) -> Self {
        self.member(BindAssignment::new(expression, variable))
    }

    /// Appends a `FILTER` over the group.
    pub fn filter(mut self, expression: impl Into<Expression>) -> Self {
        self.members.push(GroupMember::Filter(expression.into()));
        self
    }

    /// Makes the whole group optional.
    pub fn optional(mut self) -> Self {
        self.annotations.optional = true;
        self
    }

    /// Combines the group with its successor via `UNION`.
    pub fn union_with_next(mut self) -> Self {
        self.annotations.set_union_with_next();
        self
    }

    /// Subtracts the remaining sequence from the group via `MINUS`.
    pub fn minus_with_next(mut self) -> Self {
        self.annotations.set_minus_with_next();
        self
    }

    /// Evaluates the group against a remote endpoint.
    pub fn service(mut self, endpoint: NamedNode) -> Self {
        self.service = Some(ServiceAnnotation::new(endpoint));
        self
    }

    /// Evaluates the group against a remote endpoint, suppressing errors.
    pub fn service_silent(mut self, endpoint: NamedNode) -> Self {
        self.service = Some(ServiceAnnotation::silent(endpoint));
        self
    }

    pub fn members(&self) -> &[GroupMember] {
        &self.members
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
