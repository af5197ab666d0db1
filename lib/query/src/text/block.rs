use crate::algebra::{group_members, Algebra, Annotated};
use crate::annotations::ServiceAnnotation;
use crate::member::QueryMember;
use crate::pattern::{GroupMember, TriplePattern, ValuesBlock};
use crate::text::{form, Printer};
use itertools::Itertools;
use rdf_scribe_model::{render_term, Namespace};

/// A member the block printer can render as an algebra leaf.
pub(crate) trait BlockMember: Annotated {
    /// Emits the member's full text at the current scope, including its own
    /// bracket for self-bracketing members.
    fn print(&self, printer: &mut Printer<'_>);

    /// Emits the member's text without a surrounding bracket, for use inside
    /// a bracket the caller already opened.
    fn print_interior(&self, printer: &mut Printer<'_>);
}

impl BlockMember for QueryMember {
    fn print(&self, printer: &mut Printer<'_>) {
        printer.open("{");
        self.print_interior(printer);
        printer.close();
    }

    fn print_interior(&self, printer: &mut Printer<'_>) {
        match self {
            QueryMember::Group(group) => print_scope(group.members(), printer),
            QueryMember::SubQuery(sub) => form::print_sub_select(&sub.query, printer),
        }
    }
}

impl BlockMember for GroupMember {
    fn print(&self, printer: &mut Printer<'_>) {
        self.print_interior(printer);
    }

    fn print_interior(&self, printer: &mut Printer<'_>) {
        match self {
            GroupMember::Pattern(pattern) => {
                let line = triple_line(pattern, printer.namespaces());
                printer.line(&line);
            }
            GroupMember::Path(path) => {
                let line = format!(
                    "{} ({}) {} .",
                    render_term(&path.start, printer.namespaces()),
                    path.path.render(printer.namespaces()),
                    render_term(&path.end, printer.namespaces())
                );
                printer.line(&line);
            }
            GroupMember::Values(values) => print_values(values, printer),
            GroupMember::Bind(bind) => {
                let line = format!("BIND({} AS ?{}) .", bind.expression, bind.variable.as_str());
                printer.line(&line);
            }
            GroupMember::Filter(expression) => {
                let line = format!("FILTER ( {expression} )");
                printer.line(&line);
            }
        }
    }
}

/// Renders `subject predicate object .` for pattern lines and templates.
pub(crate) fn triple_line(pattern: &TriplePattern, namespaces: &[Namespace]) -> String {
    format!(
        "{} {} {} .",
        render_term(&pattern.subject, namespaces),
        render_term(&pattern.predicate, namespaces),
        render_term(&pattern.object, namespaces)
    )
}

/// Prints the composed body of one member sequence at the current scope.
pub(crate) fn print_scope<M: BlockMember>(members: &[M], printer: &mut Printer<'_>) {
    let algebra = group_members(members);
    print_node(&algebra, printer);
}

fn print_node<M: BlockMember>(node: &Algebra<'_, M>, printer: &mut Printer<'_>) {
    match node {
        Algebra::Empty => {}
        Algebra::Leaf(member) => member.print(printer),
        Algebra::Sequence(nodes) => {
            for node in nodes {
                print_node(node, printer);
            }
        }
        Algebra::Union(operands) => {
            for (index, operand) in operands.iter().enumerate() {
                if index > 0 {
                    printer.line("UNION");
                }
                print_bracketed("{", operand, printer);
            }
        }
        Algebra::Minus(left, right) => {
            print_node(left, printer);
            print_minus_chain(right, printer);
        }
        Algebra::Optional(inner) => {
            printer.open("OPTIONAL {");
            print_node(inner, printer);
            printer.close();
        }
        Algebra::Service(service, inner) => {
            let header = service_header(service);
            printer.open(&header);
            print_node(inner, printer);
            printer.close();
        }
    }
}

/// Prints the right spine of a minus chain.
///
/// Singleton operands stay flat at the current scope, each inside its own
/// `MINUS { … }`. The first composite operand demotes the remainder of the
/// chain into one freshly opened bracket, inside which flattening restarts.
fn print_minus_chain<M: BlockMember>(node: &Algebra<'_, M>, printer: &mut Printer<'_>) {
    let mut current = node;
    loop {
        match current {
            Algebra::Minus(left, right) if !left.is_composite() => {
                print_bracketed("MINUS {", left, printer);
                current = right.as_ref();
            }
            other => {
                print_bracketed("MINUS {", other, printer);
                return;
            }
        }
    }
}

/// Prints `node` inside exactly one bracket opened with `header`. The bracket
/// of a self-bracketing leaf collapses into the opened one.
fn print_bracketed<M: BlockMember>(
    header: &str,
    node: &Algebra<'_, M>,
    printer: &mut Printer<'_>,
) {
    printer.open(header);
    match node {
        Algebra::Leaf(member) => member.print_interior(printer),
        other => print_node(other, printer),
    }
    printer.close();
}

fn service_header(service: &ServiceAnnotation) -> String {
    if service.is_silent() {
        format!("SERVICE SILENT <{}> {{", service.endpoint().as_str())
    } else {
        format!("SERVICE <{}> {{", service.endpoint().as_str())
    }
}

/// Serializes a values block column-wise: one `VALUES` line per variable,
/// `UNDEF` for cells without a binding.
fn print_values(values: &ValuesBlock, printer: &mut Printer<'_>) {
    for (column, variable) in values.variables.iter().enumerate() {
        let bindings = values
            .rows
            .iter()
            .map(|row| match row.get(column) {
                Some(Some(term)) => render_term(term, printer.namespaces()),
                _ => "UNDEF".to_owned(),
            })
            .join(" ");
        let line = if bindings.is_empty() {
            format!("VALUES ?{} {{ }}", variable.as_str())
        } else {
            format!("VALUES ?{} {{ {bindings} }}", variable.as_str())
        };
        printer.line(&line);
    }
}
