use crate::test_utils::{assert_balanced, ex, var};
use rdf_scribe_query::{PatternGroup, Query, SubSelect, TriplePattern};

fn group(predicate: &str) -> PatternGroup {
    PatternGroup::new().pattern(var("s"), ex(predicate), var("o"))
}

#[test]
fn an_empty_group_renders_an_empty_block() {
    let query = Query::select().add_group(PatternGroup::new());
    assert_eq!(query.to_sparql(), "SELECT *\nWHERE {\n  {\n  }\n}\n\n");
}

#[test]
fn a_trailing_union_flag_renders_like_no_flag() {
    let plain = Query::select().add_group(group("a"));
    let flagged = Query::select().add_group(group("a").union_with_next());
    assert_eq!(plain.to_sparql(), flagged.to_sparql());
}

#[test]
fn a_trailing_minus_flag_renders_like_no_flag() {
    let plain = Query::select().add_group(group("a"));
    let flagged = Query::select().add_group(group("a").minus_with_next());
    assert_eq!(plain.to_sparql(), flagged.to_sparql());
}

#[test]
fn union_joins_sibling_blocks() {
    let query = Query::ask()
        .add_group(group("a").union_with_next())
        .add_group(group("b"));
    let text = query.to_sparql();
    assert_balanced(&text);
    insta::assert_snapshot!(text, @r"
    ASK
    WHERE {
      {
        ?s <http://example.org/a> ?o .
      }
      UNION
      {
        ?s <http://example.org/b> ?o .
      }
    }
    ");
}

#[test]
fn union_clusters_span_more_than_two_members() {
    let query = Query::ask()
        .add_group(group("a").union_with_next())
        .add_group(group("b").union_with_next())
        .add_group(group("c"));
    let text = query.to_sparql();
    assert_balanced(&text);
    assert_eq!(text.matches("UNION").count(), 2, "three blocks, two joins");
}

#[test]
fn minus_chains_stay_flat_over_singleton_operands() {
    let query = Query::ask()
        .add_group(group("a").minus_with_next())
        .add_group(group("b").minus_with_next())
        .add_group(group("c"));
    let text = query.to_sparql();
    assert_balanced(&text);
    insta::assert_snapshot!(text, @r"
    ASK
    WHERE {
      {
        ?s <http://example.org/a> ?o .
      }
      MINUS {
        ?s <http://example.org/b> ?o .
      }
      MINUS {
        ?s <http://example.org/c> ?o .
      }
    }
    ");
}

#[test]
fn a_union_cluster_before_minus_prints_at_the_same_scope() {
    let query = Query::ask()
        .add_group(group("a").union_with_next())
        .add_group(group("b").minus_with_next())
        .add_group(group("c"));
    let text = query.to_sparql();
    assert_balanced(&text);
    insta::assert_snapshot!(text, @r"
    ASK
    WHERE {
      {
        ?s <http://example.org/a> ?o .
      }
      UNION
      {
        ?s <http://example.org/b> ?o .
      }
      MINUS {
        ?s <http://example.org/c> ?o .
      }
    }
    ");
}

#[test]
fn a_composite_minus_operand_demotes_the_chain_remainder() {
    let query = Query::ask()
        .add_group(group("a").minus_with_next())
        .add_group(group("u1").union_with_next())
        .add_group(group("u2").minus_with_next())
        .add_group(group("c"));
    let text = query.to_sparql();
    assert_balanced(&text);
    insta::assert_snapshot!(text, @r"
    ASK
    WHERE {
      {
        ?s <http://example.org/a> ?o .
      }
      MINUS {
        {
          ?s <http://example.org/u1> ?o .
        }
        UNION
        {
          ?s <http://example.org/u2> ?o .
        }
        MINUS {
          ?s <http://example.org/c> ?o .
        }
      }
    }
    ");
}

#[test]
fn minus_consumes_the_whole_remaining_sequence() {
    let query = Query::ask()
        .add_group(group("a").minus_with_next())
        .add_group(group("b"))
        .add_group(group("c"));
    let text = query.to_sparql();
    assert_balanced(&text);
    insta::assert_snapshot!(text, @r"
    ASK
    WHERE {
      {
        ?s <http://example.org/a> ?o .
      }
      MINUS {
        {
          ?s <http://example.org/b> ?o .
        }
        {
          ?s <http://example.org/c> ?o .
        }
      }
    }
    ");
}

#[test]
fn optional_wraps_the_group_bracket() {
    let query = Query::ask().add_group(group("a").optional());
    let text = query.to_sparql();
    assert_balanced(&text);
    insta::assert_snapshot!(text, @r"
    ASK
    WHERE {
      OPTIONAL {
        {
          ?s <http://example.org/a> ?o .
        }
      }
    }
    ");
}

#[test]
fn optional_encloses_the_service_block() {
    let query = Query::ask().add_group(group("a").service(ex("sparql")).optional());
    let text = query.to_sparql();
    assert_balanced(&text);
    insta::assert_snapshot!(text, @r"
    ASK
    WHERE {
      OPTIONAL {
        SERVICE <http://example.org/sparql> {
          {
            ?s <http://example.org/a> ?o .
          }
        }
      }
    }
    ");
}

#[test]
fn silent_services_render_the_keyword() {
    let query = Query::ask().add_group(group("a").service_silent(ex("sparql")));
    let text = query.to_sparql();
    assert!(
        text.contains("SERVICE SILENT <http://example.org/sparql> {"),
        "missing SILENT keyword:\n{text}"
    );
}

#[test]
fn pattern_level_union_brackets_each_triple() {
    let query = Query::ask().add_group(
        PatternGroup::new()
            .member(
                TriplePattern::new(var("s"), ex("a"), var("o"))
                    .union_with_next(),
            )
            .pattern(var("s"), ex("b"), var("o")),
    );
    let text = query.to_sparql();
    assert_balanced(&text);
    insta::assert_snapshot!(text, @r"
    ASK
    WHERE {
      {
        {
          ?s <http://example.org/a> ?o .
        }
        UNION
        {
          ?s <http://example.org/b> ?o .
        }
      }
    }
    ");
}

#[test]
fn pattern_level_minus_keeps_the_left_operand_bare() {
    let query = Query::ask().add_group(
        PatternGroup::new()
            .member(
                TriplePattern::new(var("s"), ex("a"), var("o"))
                    .minus_with_next(),
            )
            .pattern(var("s"), ex("b"), var("o")),
    );
    let text = query.to_sparql();
    assert_balanced(&text);
    insta::assert_snapshot!(text, @r"
    ASK
    WHERE {
      {
        ?s <http://example.org/a> ?o .
        MINUS {
          ?s <http://example.org/b> ?o .
        }
      }
    }
    ");
}

#[test]
fn an_optional_sub_query_nests_its_own_bracket() {
    let inner = Query::select()
        .project(var("x"))
        .add_group(PatternGroup::new().pattern(var("x"), ex("p"), var("o")));
    let query = Query::ask().add_member(SubSelect::new(inner).optional());
    let text = query.to_sparql();
    assert_balanced(&text);
    insta::assert_snapshot!(text, @r"
    ASK
    WHERE {
      OPTIONAL {
        {
          SELECT ?x
          WHERE {
            {
              ?x <http://example.org/p> ?o .
            }
          }
        }
      }
    }
    ");
}

#[test]
fn deep_mixed_sequences_balance_brackets() {
    let query = Query::select()
        .add_group(group("a").union_with_next())
        .add_group(group("b").minus_with_next())
        .add_group(group("c").union_with_next())
        .add_group(group("d").minus_with_next())
        .add_group(group("e").optional());
    assert_balanced(&query.to_sparql());
}
