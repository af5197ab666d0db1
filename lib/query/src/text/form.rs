use crate::modifier::Modifiers;
use crate::query::{Projection, Query, QueryForm};
use crate::text::{block, Printer};
use itertools::Itertools;
use rdf_scribe_model::render_term;

/// Renders `query` to SPARQL text, or empty text when no query is given.
pub fn render_query(query: Option<&Query>) -> String {
    query.map(print_query).unwrap_or_default()
}

/// Renders a full query document.
pub(crate) fn print_query(query: &Query) -> String {
    tracing::trace!(
        form = form_keyword(&query.form),
        members = query.members.len(),
        "rendering query"
    );
    let mut printer = Printer::new(&query.prefixes);
    print_prefixes(query, &mut printer);
    match &query.form {
        QueryForm::Select { projection } => {
            printer.line(&select_head(projection, &query.modifiers));
            print_where(query, &mut printer);
            print_trailing_modifiers(&query.modifiers, &mut printer);
            // The outermost SELECT is terminated by one trailing blank line;
            // sub-queries and the other forms are not.
            let mut out = printer.finish();
            out.push('\n');
            out
        }
        QueryForm::Ask => {
            printer.line("ASK");
            print_where(query, &mut printer);
            printer.finish()
        }
        QueryForm::Construct { template } => {
            printer.open("CONSTRUCT {");
            for triple in template {
                // Set-operator flags on template triples are not
                // representable here and are discarded.
                let line = block::triple_line(triple, printer.namespaces());
                printer.line(&line);
            }
            printer.close();
            print_where(query, &mut printer);
            printer.finish()
        }
        QueryForm::Describe { terms } => {
            if terms.is_empty() {
                printer.line("DESCRIBE *");
            } else {
                let terms = terms
                    .iter()
                    .map(|term| render_term(term, printer.namespaces()))
                    .join(" ");
                printer.line(&format!("DESCRIBE {terms}"));
            }
            print_where(query, &mut printer);
            printer.finish()
        }
    }
}

/// Prints a nested `SELECT` inside the bracket its caller opened.
///
/// Sub-queries never print a prefix block and never add trailing padding.
pub(crate) fn print_sub_select(query: &Query, printer: &mut Printer<'_>) {
    match &query.form {
        QueryForm::Select { projection } => {
            printer.line(&select_head(projection, &query.modifiers));
        }
        // Sub-queries are SELECT by construction; any other form degrades to
        // a star projection over its members.
        QueryForm::Ask | QueryForm::Construct { .. } | QueryForm::Describe { .. } => {
            printer.line(&select_head(&Projection::Star, &query.modifiers));
        }
    }
    print_where(query, printer);
    print_trailing_modifiers(&query.modifiers, printer);
}

fn print_prefixes(query: &Query, printer: &mut Printer<'_>) {
    if query.prefixes.is_empty() {
        return;
    }
    for namespace in &query.prefixes {
        printer.line(&format!(
            "PREFIX {}: <{}>",
            namespace.prefix(),
            namespace.iri()
        ));
    }
    printer.line("");
}

fn print_where(query: &Query, printer: &mut Printer<'_>) {
    printer.open("WHERE {");
    block::print_scope(&query.members, printer);
    printer.close();
}

fn select_head(projection: &Projection, modifiers: &Modifiers) -> String {
    let mut tokens = vec!["SELECT".to_owned()];
    if modifiers.distinct {
        tokens.push("DISTINCT".to_owned());
    }
    match projection {
        Projection::Star => tokens.push("*".to_owned()),
        Projection::Elements(elements) => {
            for element in elements {
                match &element.expression {
                    Some(expression) => tokens.push(format!(
                        "({expression} AS ?{})",
                        element.variable.as_str()
                    )),
                    None => tokens.push(format!("?{}", element.variable.as_str())),
                }
            }
        }
    }
    for aggregate in &modifiers.aggregates {
        tokens.push(format!(
            "({} AS ?{})",
            aggregate.expression,
            aggregate.variable.as_str()
        ));
    }
    tokens.join(" ")
}

fn print_trailing_modifiers(modifiers: &Modifiers, printer: &mut Printer<'_>) {
    if !modifiers.group_by.is_empty() {
        let keys = modifiers
            .group_by
            .iter()
            .map(|variable| format!("?{}", variable.as_str()))
            .join(" ");
        printer.line(&format!("GROUP BY {keys}"));
    }
    if let Some(having) = &modifiers.having {
        printer.line(&format!("HAVING ( {having} )"));
    }
    if !modifiers.order_by.is_empty() {
        let keys = modifiers
            .order_by
            .iter()
            .map(|key| {
                if key.descending {
                    format!("DESC(?{})", key.variable.as_str())
                } else {
                    format!("?{}", key.variable.as_str())
                }
            })
            .join(" ");
        printer.line(&format!("ORDER BY {keys}"));
    }
    if let Some(limit) = modifiers.limit {
        printer.line(&format!("LIMIT {limit}"));
    }
    if let Some(offset) = modifiers.offset {
        printer.line(&format!("OFFSET {offset}"));
    }
}

fn form_keyword(form: &QueryForm) -> &'static str {
    match form {
        QueryForm::Select { .. } => "SELECT",
        QueryForm::Ask => "ASK",
        QueryForm::Construct { .. } => "CONSTRUCT",
        QueryForm::Describe { .. } => "DESCRIBE",
    }
}
