//! Behaviour every clause kind must share, run once per kind by the test files.
//!
//! Each builder yields a clause whose body contains the letter `a` so the
//! checks can look for prefixes directly in front of it.

#![allow(dead_code)]

use lucene_query::{AnyClause, Clause, Phrase, Range, Term};

/// Builds a fresh clause, optionally scoped to a field at construction
pub type ClauseBuilder<C> = fn(Option<&str>) -> C;

pub fn term(field: Option<&str>) -> Term {
    Term::with_field("a", field.unwrap_or_default()).unwrap()
}

pub fn phrase(field: Option<&str>) -> Phrase {
    Phrase::with_field("a b", field.unwrap_or_default())
}

pub fn range(field: Option<&str>) -> Range {
    Range::with_field("a", "b", field.unwrap_or_default())
}

pub fn any_term(field: Option<&str>) -> AnyClause {
    term(field).into()
}

/// Position of the clause body, i.e. the first `a`
fn body_start(rendered: &str) -> usize {
    rendered.find('a').expect("test clauses contain 'a'")
}

/// The clause renders `prefix` right in front of its body, allowing one
/// bracket or quote between them
pub fn assert_prefixed(rendered: &str, prefix: &str) {
    let start = body_start(rendered);
    let before = &rendered[..start];
    assert!(
        before.ends_with(prefix) || before[..before.len().saturating_sub(1)].ends_with(prefix),
        "expected {:?} in front of the body in {:?}",
        prefix,
        rendered
    );
}

pub fn check_field_set_by_setter<C: Clause>(build: ClauseBuilder<C>) {
    let mut clause = build(None);
    clause.set_field("field");
    assert_prefixed(&clause.to_string(), "field:");
}

pub fn check_field_set_by_constructor<C: Clause>(build: ClauseBuilder<C>) {
    let clause = build(Some("field"));
    assert_prefixed(&clause.to_string(), "field:");
}

pub fn check_no_separator_without_field<C: Clause>(build: ClauseBuilder<C>) {
    assert!(!build(None).to_string().contains(':'));
    assert!(!build(Some("")).to_string().contains(':'));
}

pub fn check_set_field_overwrites<C: Clause>(build: ClauseBuilder<C>) {
    let mut clause = build(Some("field"));
    clause.set_field("otherField");
    let rendered = clause.to_string();
    assert_prefixed(&rendered, "otherField:");
    assert!(!rendered.contains("field:a") && !rendered.starts_with("field:"));

    let mut clause = build(None);
    clause.set_field("field").set_field("otherField");
    assert_prefixed(&clause.to_string(), "otherField:");
}

pub fn check_set_field_empty_unsets<C: Clause>(build: ClauseBuilder<C>) {
    let mut clause = build(None);
    clause.set_field("field");
    clause.set_field("");
    assert!(!clause.to_string().contains("field"));

    let mut clause = build(Some("field"));
    clause.clear_field();
    assert!(!clause.to_string().contains(':'));
}

pub fn check_optional_is_noop<C: Clause>(build: ClauseBuilder<C>) {
    let mut clause = build(None);
    let original = clause.to_string();
    clause.optional();
    assert_eq!(clause.to_string(), original);
}

pub fn check_optional_overwrites_operator<C: Clause>(build: ClauseBuilder<C>) {
    let mut clause = build(None);
    let original = clause.to_string();
    clause.required().prohibited().optional();
    assert_eq!(clause.to_string(), original);
}

pub fn check_required<C: Clause>(build: ClauseBuilder<C>) {
    let mut clause = build(None);
    clause.required();
    assert!(clause.to_string().starts_with('+'));

    let mut clause = build(None);
    clause.optional().prohibited().required();
    let rendered = clause.to_string();
    assert!(rendered.starts_with('+'));
    assert!(!rendered.contains('-'));
}

pub fn check_prohibited<C: Clause>(build: ClauseBuilder<C>) {
    let mut clause = build(None);
    clause.prohibited();
    assert!(clause.to_string().starts_with('-'));

    let mut clause = build(None);
    clause.optional().required().prohibited();
    let rendered = clause.to_string();
    assert!(rendered.starts_with('-'));
    assert!(!rendered.contains('+'));
}

pub fn check_boost<C: Clause>(build: ClauseBuilder<C>) {
    let mut clause = build(None);
    clause.boost(2.5).unwrap();
    assert!(clause.to_string().ends_with("^2.5"));

    clause.boost(2.0).unwrap();
    assert!(clause.to_string().ends_with("^2"));

    clause.boost(2.10).unwrap();
    assert!(clause.to_string().ends_with("^2.1"));
}

pub fn check_default_boost_hidden<C: Clause>(build: ClauseBuilder<C>) {
    let mut clause = build(None);
    assert!(!clause.to_string().contains('^'));
    clause.boost(3.0).unwrap();
    clause.boost(1.0).unwrap();
    assert!(!clause.to_string().contains('^'));
}

pub fn check_negative_boost_rejected<C: Clause>(build: ClauseBuilder<C>) {
    let mut clause = build(None);
    assert!(matches!(clause.boost(-2.0), Err(e) if e.is_argument_error()));
    assert!(matches!(clause.boost(-0.0), Err(e) if e.is_argument_error()));
    assert!(!clause.to_string().contains('^'));
}

pub fn check_bare_rendering_has_no_modifiers<C: Clause>(build: ClauseBuilder<C>) {
    let rendered = build(None).to_string();
    for symbol in [':', '^', '~', '+', '-'] {
        assert!(
            !rendered.contains(symbol),
            "unexpected {:?} in {:?}",
            symbol,
            rendered
        );
    }
}

pub fn check_render_is_idempotent<C: Clause>(build: ClauseBuilder<C>) {
    let mut clause = build(Some("f"));
    clause.required().boost(1.5).unwrap();
    let first = clause.render();
    assert_eq!(clause.render(), first);
    assert_eq!(clause.to_string(), first);
}

/// Run the whole contract against one clause kind
pub fn check_clause_contract<C: Clause>(build: ClauseBuilder<C>) {
    check_field_set_by_setter(build);
    check_field_set_by_constructor(build);
    check_no_separator_without_field(build);
    check_set_field_overwrites(build);
    check_set_field_empty_unsets(build);
    check_optional_is_noop(build);
    check_optional_overwrites_operator(build);
    check_required(build);
    check_prohibited(build);
    check_boost(build);
    check_default_boost_hidden(build);
    check_negative_boost_rejected(build);
    check_bare_rendering_has_no_modifiers(build);
    check_render_is_idempotent(build);
}
