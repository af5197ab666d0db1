use crate::expression::Expression;
use crate::member::QueryMember;
use crate::modifier::{Aggregate, Modifiers, OrderKey};
use crate::pattern::{PatternGroup, TriplePattern};
use crate::text;
use rdf_scribe_model::{Namespace, TermPattern, Variable};
use std::fmt;

/// The head clause of a query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryForm {
    Select { projection: Projection },
    Ask,
    Construct { template: Vec<TriplePattern> },
    Describe { terms: Vec<TermPattern> },
}

/// The projection of a `SELECT` query.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Projection {
    #[default]
    Star,
    Elements(Vec<ProjectionElement>),
}

/// One element of a `SELECT` projection.
///
/// An element with an expression renders as `(expr AS ?var)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionElement {
    pub variable: Variable,
    pub expression: Option<Expression>,
}

/// An annotated SPARQL query.
///
/// A query is built through the fluent, append-only API and then rendered;
/// rendering never mutates the query.
///
/// # Example
///
/// ```
/// use rdf_scribe_model::{NamedNode, Namespace, Variable};
/// use rdf_scribe_query::{PatternGroup, Query};
///
/// let rdfs = Namespace::new("rdfs", "http://www.w3.org/2000/01/rdf-schema#")?;
/// let label = NamedNode::new("http://www.w3.org/2000/01/rdf-schema#label")?;
///
/// let query = Query::select()
///     .add_prefix(rdfs)
///     .add_group(
///         PatternGroup::new().pattern(Variable::new("s")?, label, Variable::new("name")?),
///     )
///     .project(Variable::new("name")?);
///
/// assert!(query.to_sparql().starts_with("PREFIX rdfs:"));
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub(crate) form: QueryForm,
    pub(crate) prefixes: Vec<Namespace>,
    pub(crate) members: Vec<QueryMember>,
    pub(crate) modifiers: Modifiers,
}

impl Query {
    fn new(form: QueryForm) -> Self {
        Self {
            form,
            prefixes: Vec::new(),
            members: Vec::new(),
            modifiers: Modifiers::default(),
        }
    }

    /// Creates a `SELECT` query projecting `*` until variables are added.
    pub fn select() -> Self {
        Self::new(QueryForm::Select {
            projection: Projection::Star,
        })
    }

    /// Creates an `ASK` query.
    pub fn ask() -> Self {
        Self::new(QueryForm::Ask)
    }

    /// Creates a `CONSTRUCT` query with an empty template.
    pub fn construct() -> Self {
        Self::new(QueryForm::Construct {
            template: Vec::new(),
        })
    }

    /// Creates a `DESCRIBE` query describing `*` until terms are added.
    pub fn describe() -> Self {
        Self::new(QueryForm::Describe { terms: Vec::new() })
    }

    /// Appends a prefix declaration.
    pub fn add_prefix(mut self, namespace: Namespace) -> Self {
        self.prefixes.push(namespace);
        self
    }

    /// Appends a member to the `WHERE` block.
    pub fn add_member(mut self, member: impl Into<QueryMember>) -> Self {
        self.members.push(member.into());
        self
    }

    /// Appends a pattern group to the `WHERE` block.
    pub fn add_group(self, group: PatternGroup) -> Self {
        self.add_member(group)
    }

    /// Projects `variable`. The first projected variable replaces `*`.
    ///
    /// Only meaningful on a `SELECT` query; other forms ignore the call.
    pub fn project(self, variable: Variable) -> Self {
        self.push_projection(ProjectionElement {
            variable,
            expression: None,
        })
    }

    /// Projects `expression` under the name of `variable`.
    ///
    /// Only meaningful on a `SELECT` query; other forms ignore the call.
    pub fn project_as(self, expression: impl Into<Expression>, variable: Variable) -> Self {
        self.push_projection(ProjectionElement {
            variable,
            expression: Some(expression.into()),
        })
    }

    /// Appends a triple to the `CONSTRUCT` template.
    ///
    /// Set-operator annotations are not representable in a template and are
    /// discarded when printing. Other query forms ignore the call.
    pub fn template(mut self, triple: TriplePattern) -> Self {
        if let QueryForm::Construct { template } = &mut self.form {
            template.push(triple);
        }
        self
    }

    /// Appends a term to the `DESCRIBE` list. The first term replaces `*`.
    ///
    /// Other query forms ignore the call.
    pub fn describe_term(mut self, term: impl Into<TermPattern>) -> Self {
        if let QueryForm::Describe { terms } = &mut self.form {
            terms.push(term.into());
        }
        self
    }

    /// Requests distinct results.
    pub fn distinct(mut self) -> Self {
        self.modifiers.distinct = true;
        self
    }

    /// Appends an `ORDER BY` key.
    pub fn order_by(mut self, key: OrderKey) -> Self {
        self.modifiers.order_by.push(key);
        self
    }

    /// Appends a `GROUP BY` key variable.
    pub fn group_by(mut self, variable: Variable) -> Self {
        self.modifiers.group_by.push(variable);
        self
    }

    /// Projects an aggregate as `(expr AS ?var)`.
    pub fn aggregate(mut self, expression: impl Into<Expression>, variable: Variable) -> Self {
        self.modifiers
            .aggregates
            .push(Aggregate::new(expression, variable));
        self
    }

    /// Restricts groups with a `HAVING` predicate.
    pub fn having(mut self, expression: impl Into<Expression>) -> Self {
        self.modifiers.having = Some(expression.into());
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.modifiers.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.modifiers.offset = Some(offset);
        self
    }

    pub fn form(&self) -> &QueryForm {
        &self.form
    }

    pub fn prefixes(&self) -> &[Namespace] {
        &self.prefixes
    }

    pub fn members(&self) -> &[QueryMember] {
        &self.members
    }

    pub fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    /// Renders this query to SPARQL text.
    pub fn to_sparql(&self) -> String {
        text::print_query(self)
    }

    fn push_projection(mut self, element: ProjectionElement) -> Self {
        if let QueryForm::Select { projection } = &mut self.form {
            match projection {
                Projection::Star => *projection = Projection::Elements(vec![element]),
                Projection::Elements(elements) => elements.push(element),
            }
        }
        self
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sparql())
    }
}
