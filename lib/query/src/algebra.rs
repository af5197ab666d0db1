use crate::annotations::{MemberAnnotations, ServiceAnnotation};
use crate::member::QueryMember;
use crate::pattern::GroupMember;

/// The composed set-operator algebra of one nesting scope.
#[derive(Debug)]
pub(crate) enum Algebra<'a, M> {
    /// A scope with no members.
    Empty,
    Leaf(&'a M),
    /// `UNION`-joined sibling blocks, each individually bracketed.
    Union(Vec<Algebra<'a, M>>),
    /// `left MINUS right`; the right operand holds the whole remaining
    /// sequence of the scope.
    Minus(Box<Algebra<'a, M>>, Box<Algebra<'a, M>>),
    Optional(Box<Algebra<'a, M>>),
    Service(&'a ServiceAnnotation, Box<Algebra<'a, M>>),
    /// Nodes printed one after another at the same scope.
    Sequence(Vec<Algebra<'a, M>>),
}

impl<M> Algebra<'_, M> {
    /// Union clusters, minus chains and multi-node sequences cannot stay flat
    /// inside an enclosing `MINUS` bracket; the printer demotes the chain
    /// remainder into a fresh bracket when it meets one.
    pub(crate) fn is_composite(&self) -> bool {
        matches!(
            self,
            Algebra::Union(_) | Algebra::Minus(..) | Algebra::Sequence(_)
        )
    }
}

/// A member sequence element the grouping engine can inspect.
pub(crate) trait Annotated {
    /// The member's grouping annotations, or `None` for members that only
    /// interleave positionally (values, bind, filter).
    fn annotations(&self) -> Option<&MemberAnnotations>;

    /// The member's federated-execution annotation, if any.
    fn service(&self) -> Option<&ServiceAnnotation>;
}

impl Annotated for QueryMember {
    fn annotations(&self) -> Option<&MemberAnnotations> {
        Some(QueryMember::annotations(self))
    }

    fn service(&self) -> Option<&ServiceAnnotation> {
        self.service_annotation()
    }
}

impl Annotated for GroupMember {
    fn annotations(&self) -> Option<&MemberAnnotations> {
        GroupMember::annotations(self)
    }

    fn service(&self) -> Option<&ServiceAnnotation> {
        None
    }
}

/// Reconstructs the nested set-operator algebra of one member sequence.
///
/// The scan is applied recursively wherever a nested scope appears: a
/// query's top-level members, each pattern group's members, and the right
/// operand of every `MINUS`. Flags on the last member of a sequence have no
/// successor and are discarded.
pub(crate) fn group_members<M: Annotated>(members: &[M]) -> Algebra<'_, M> {
    if members.is_empty() {
        return Algebra::Empty;
    }
    let mut sequence = Vec::new();
    let mut index = 0;
    while index < members.len() {
        let member = &members[index];
        if member.annotations().is_none() {
            sequence.push(Algebra::Leaf(member));
            index += 1;
            continue;
        }

        // Union clustering: absorb successors while the current member links
        // onward and the successor can take part in grouping.
        let first = wrap(member);
        let mut rest = Vec::new();
        let mut last = index;
        while links_union(members, last) {
            last += 1;
            rest.push(wrap(&members[last]));
        }
        let node = if rest.is_empty() {
            first
        } else {
            let mut operands = vec![first];
            operands.append(&mut rest);
            Algebra::Union(operands)
        };

        // Minus chaining: the whole remaining sequence becomes the right
        // operand, grouped recursively.
        let links_minus = members[last]
            .annotations()
            .is_some_and(|a| a.minus_with_next)
            && last + 1 < members.len();
        if links_minus {
            let right = group_members(&members[last + 1..]);
            sequence.push(Algebra::Minus(Box::new(node), Box::new(right)));
            index = members.len();
        } else {
            sequence.push(node);
            index = last + 1;
        }
    }
    if sequence.len() == 1 {
        match sequence.pop() {
            Some(node) => node,
            None => Algebra::Empty,
        }
    } else {
        Algebra::Sequence(sequence)
    }
}

fn links_union<M: Annotated>(members: &[M], index: usize) -> bool {
    members[index]
        .annotations()
        .is_some_and(|a| a.union_with_next)
        && index + 1 < members.len()
        && members[index + 1].annotations().is_some()
}

/// Wraps a member leaf per its own annotations: `SERVICE` first, `OPTIONAL`
/// around it. The wrapped node then takes part in clustering as one unit.
fn wrap<M: Annotated>(member: &M) -> Algebra<'_, M> {
    let mut node = Algebra::Leaf(member);
    if let Some(service) = member.service() {
        node = Algebra::Service(service, Box::new(node));
    }
    if member.annotations().is_some_and(|a| a.optional) {
        node = Algebra::Optional(Box::new(node));
    }
    node
}
