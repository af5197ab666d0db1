use crate::test_utils::{assert_balanced, ex, var};
use rdf_scribe_query::{OrderKey, PatternGroup, Query};

fn people() -> PatternGroup {
    PatternGroup::new().pattern(var("person"), ex("name"), var("name"))
}

#[test]
fn distinct_renders_in_the_head() {
    let query = Query::select().distinct().project(var("name")).add_group(people());
    let text = query.to_sparql();
    assert!(
        text.starts_with("SELECT DISTINCT ?name\n"),
        "unexpected head:\n{text}"
    );
}

#[test]
fn computed_projections_render_as_expressions() {
    let query = Query::select()
        .project(var("person"))
        .project_as("YEAR(?birth)", var("year"))
        .add_group(people());
    let text = query.to_sparql();
    assert!(
        text.starts_with("SELECT ?person (YEAR(?birth) AS ?year)\n"),
        "unexpected head:\n{text}"
    );
}

#[test]
fn trailing_modifiers_render_in_clause_order() {
    let query = Query::select()
        .project(var("name"))
        .aggregate("COUNT(?item)", var("count"))
        .add_group(people())
        .group_by(var("name"))
        .having("COUNT(?item) > 2")
        .order_by(OrderKey::asc(var("name")))
        .order_by(OrderKey::desc(var("count")))
        .limit(10)
        .offset(20);
    let text = query.to_sparql();
    assert_balanced(&text);
    let expected = concat!(
        "SELECT ?name (COUNT(?item) AS ?count)\n",
        "WHERE {\n",
        "  {\n",
        "    ?person <http://example.org/name> ?name .\n",
        "  }\n",
        "}\n",
        "GROUP BY ?name\n",
        "HAVING ( COUNT(?item) > 2 )\n",
        "ORDER BY ?name DESC(?count)\n",
        "LIMIT 10\n",
        "OFFSET 20\n",
        "\n",
    );
    assert_eq!(text, expected);
}

#[test]
fn absent_modifiers_render_nothing() {
    let query = Query::select().add_group(people());
    let text = query.to_sparql();
    for keyword in ["GROUP BY", "HAVING", "ORDER BY", "LIMIT", "OFFSET", "DISTINCT"] {
        assert!(!text.contains(keyword), "{keyword} leaked into:\n{text}");
    }
}

#[test]
fn sub_query_modifiers_stay_inside_the_bracket() {
    let inner = Query::select()
        .project(var("x"))
        .add_group(PatternGroup::new().pattern(var("x"), ex("p"), var("o")))
        .order_by(OrderKey::asc(var("x")))
        .limit(5);
    let query = Query::select().add_member(rdf_scribe_query::SubSelect::new(inner));
    let text = query.to_sparql();
    assert_balanced(&text);
    insta::assert_snapshot!(text, @r"
    SELECT *
    WHERE {
      {
        SELECT ?x
        WHERE {
          {
            ?x <http://example.org/p> ?o .
          }
        }
        ORDER BY ?x
        LIMIT 5
      }
    }
    ");
}
