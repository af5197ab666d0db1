use crate::test_utils::{assert_balanced, ex, var};
use rdf_scribe_model::TermPattern;
use rdf_scribe_query::{PatternGroup, PropertyPath, Query, ValuesBlock};

#[test]
fn inert_members_keep_their_sequence_position() {
    let query = Query::ask().add_group(
        PatternGroup::new()
            .pattern(var("s"), ex("price"), var("price"))
            .filter("?price > 10")
            .bind("?price * 2", var("double")),
    );
    let text = query.to_sparql();
    assert_balanced(&text);
    insta::assert_snapshot!(text, @r"
    ASK
    WHERE {
      {
        ?s <http://example.org/price> ?price .
        FILTER ( ?price > 10 )
        BIND(?price * 2 AS ?double) .
      }
    }
    ");
}

#[test]
fn values_render_one_line_per_column() {
    let values = ValuesBlock::new([var("s"), var("o")])
        .row([Some(TermPattern::from(ex("a"))), None])
        .row([Some(TermPattern::from(ex("b"))), Some(TermPattern::from(ex("c")))]);
    let query = Query::ask().add_group(PatternGroup::new().member(values));
    let text = query.to_sparql();
    assert_balanced(&text);
    insta::assert_snapshot!(text, @r"
    ASK
    WHERE {
      {
        VALUES ?s { <http://example.org/a> <http://example.org/b> }
        VALUES ?o { UNDEF <http://example.org/c> }
      }
    }
    ");
}

#[test]
fn short_value_rows_pad_with_undef() {
    let values = ValuesBlock::new([var("a"), var("b")]).row([Some(TermPattern::from(ex("x")))]);
    let query = Query::ask().add_group(PatternGroup::new().member(values));
    let text = query.to_sparql();
    assert!(
        text.contains("VALUES ?b { UNDEF }"),
        "missing padding in:\n{text}"
    );
}

#[test]
fn property_paths_render_parenthesized_between_their_ends() {
    let path = PropertyPath::predicate(ex("knows"))
        .then(PropertyPath::predicate(ex("name")))
        .zero_or_more();
    let query = Query::ask().add_group(PatternGroup::new().path(var("s"), path, var("o")));
    let text = query.to_sparql();
    assert_balanced(&text);
    assert!(
        text.contains(
            "?s ((<http://example.org/knows> / <http://example.org/name>)*) ?o ."
        ),
        "unexpected path rendering:\n{text}"
    );
}

#[test]
fn a_flagged_path_joins_grouping_like_a_pattern() {
    let query = Query::ask().add_group(
        PatternGroup::new()
            .member(
                rdf_scribe_query::PathPattern::new(
                    var("s"),
                    PropertyPath::predicate(ex("a")),
                    var("o"),
                )
                .union_with_next(),
            )
            .pattern(var("s"), ex("b"), var("o")),
    );
    let text = query.to_sparql();
    assert_balanced(&text);
    assert_eq!(text.matches("UNION").count(), 1, "paths cluster like patterns");
}
