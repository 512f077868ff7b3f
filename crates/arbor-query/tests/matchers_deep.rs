use arbor_query::simple_node::{SimpleNode, elem, text};
use arbor_query::{
    DomNode, Error, find_descendant_by_attr, find_descendant_by_attr_match,
    find_descendant_by_class, find_descendant_by_class_match, find_descendant_by_id,
    find_descendant_by_id_match, find_descendant_by_tag, tag,
};
use rstest::{fixture, rstest};

// <article>
//   "intro"
//   <section id="top">
//     <p class="foo-bar"/>
//   </section>
//   <section id="bottom">
//     <p class="  exact  " id="deep"/>
//   </section>
// </article>
#[fixture]
fn doc() -> SimpleNode {
    elem("article")
        .child(text("intro"))
        .child(elem("section").attr("id", "top").child(elem("p").attr("class", "foo-bar")))
        .child(
            elem("section")
                .attr("id", "bottom")
                .child(elem("p").attr("class", "  exact  ").attr("id", "deep")),
        )
        .build()
}

#[rstest]
fn deep_search_includes_the_starting_node(doc: SimpleNode) {
    let hit = find_descendant_by_tag(&tag("article"), &doc).unwrap();
    assert_eq!(hit, doc);
}

#[rstest]
fn root_matches_regardless_of_children() {
    // Even a childless root is a valid hit for its own tag.
    let lone = elem("div").build();
    assert_eq!(find_descendant_by_tag(&tag("div"), &lone), Some(lone.clone()));
}

#[rstest]
fn preorder_returns_leftmost_match(doc: SimpleNode) {
    let hit = find_descendant_by_tag(&tag("section"), &doc).unwrap();
    assert_eq!(hit.attribute("id").as_deref(), Some("top"));
}

#[rstest]
fn descends_past_text_siblings(doc: SimpleNode) {
    // "intro" precedes the sections but must not stop the scan.
    assert!(find_descendant_by_tag(&tag("p"), &doc).is_some());
}

#[rstest]
fn deep_attr_uses_trimmed_exact_equality(doc: SimpleNode) {
    let hit = find_descendant_by_attr("class", "exact", &doc).unwrap();
    assert_eq!(hit.attribute("id").as_deref(), Some("deep"));
    assert!(find_descendant_by_attr("class", "exa", &doc).is_none());
}

#[rstest]
fn deep_attr_match_tests_raw_value_as_regex(doc: SimpleNode) {
    // Substring regex hits where exact equality misses.
    assert!(find_descendant_by_attr("class", "foo", &doc).is_none());
    let hit = find_descendant_by_attr_match("class", "foo", &doc)
        .unwrap()
        .unwrap();
    assert_eq!(hit.attribute("class").as_deref(), Some("foo-bar"));
}

#[rstest]
fn regex_anchors_see_untrimmed_value(doc: SimpleNode) {
    // The stored value is "  exact  "; an anchored pattern on the trimmed
    // spelling must not match.
    assert!(
        find_descendant_by_class_match("^exact$", &doc)
            .unwrap()
            .is_none()
    );
    assert!(
        find_descendant_by_class_match("^\\s+exact\\s+$", &doc)
            .unwrap()
            .is_some()
    );
}

#[rstest]
fn invalid_pattern_is_propagated(doc: SimpleNode) {
    let err = find_descendant_by_attr_match("class", "(unclosed", &doc).unwrap_err();
    assert!(matches!(err, Error::Regex(_)));
}

#[rstest]
fn id_specializations(doc: SimpleNode) {
    let hit = find_descendant_by_id("bottom", &doc).unwrap();
    assert_eq!(hit.tag(), Some(tag("section")));
    let hit = find_descendant_by_id_match("^de", &doc).unwrap().unwrap();
    assert_eq!(hit.attribute("id").as_deref(), Some("deep"));
}

#[rstest]
fn class_specialization(doc: SimpleNode) {
    assert_eq!(
        find_descendant_by_class("foo-bar", &doc),
        find_descendant_by_attr("class", "foo-bar", &doc)
    );
}

#[rstest]
fn absent_everywhere_yields_none(doc: SimpleNode) {
    assert!(find_descendant_by_tag(&tag("table"), &doc).is_none());
    assert!(find_descendant_by_attr("role", "nav", &doc).is_none());
    assert!(
        find_descendant_by_attr_match("role", "nav", &doc)
            .unwrap()
            .is_none()
    );
}
