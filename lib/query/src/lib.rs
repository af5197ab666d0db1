mod algebra;
mod annotations;
mod expression;
mod member;
mod modifier;
mod path;
mod pattern;
mod query;
mod text;

pub use annotations::{MemberAnnotations, ServiceAnnotation};
pub use expression::Expression;
pub use member::{QueryMember, SubSelect};
pub use modifier::{Aggregate, Modifiers, OrderKey};
pub use path::PropertyPath;
pub use pattern::{
    BindAssignment, GroupMember, PathPattern, PatternGroup, TriplePattern, ValuesBlock,
};
pub use query::{Projection, ProjectionElement, Query, QueryForm};
pub use text::render_query;
