use class_manipulator::{list, DummyElement};

fn starts_with_ba(token: &str) -> bool {
    token.starts_with("ba")
}

fn longer_than_three(token: &str) -> bool {
    token.len() > 3
}

#[test]
fn test_list_wraps_a_class_string() {
    assert_eq!(list("foo bar").to_string(), "foo bar");
}

#[test]
fn test_list_wraps_an_element() {
    let mut element = DummyElement::with_class("foo bar");
    assert_eq!(class_manipulator::list_from(&mut element).to_string(), "foo bar");
}

#[test]
fn test_list_keeps_odd_but_whitespace_free_names() {
    assert_eq!(
        list("foo [bla] bawe23ur0u2!").to_string(),
        "foo [bla] bawe23ur0u2!"
    );
}

#[test]
fn test_to_string_normalizes_the_input() {
    assert_eq!(list("  foo\t\tbar \n baz ").to_string(), "foo bar baz");
    assert_eq!(list("").to_string(), "");
    assert_eq!(list("   ").to_string(), "");
}

#[test]
fn test_add_appends_a_name() {
    assert_eq!(list("foo bar").add("baz").to_string(), "foo bar baz");
}

#[test]
fn test_add_appends_a_name_only_once() {
    assert_eq!(list("foo bar").add("baz").add("baz").to_string(), "foo bar baz");
}

#[test]
fn test_add_splits_a_class_string_with_spaces() {
    assert_eq!(list("foo bar").add("baz nub").to_string(), "foo bar baz nub");
}

#[test]
fn test_add_many_accepts_a_sequence() {
    assert_eq!(
        list("foo").add_many(["bar", "baz", "nub"]).to_string(),
        "foo bar baz nub"
    );
}

#[test]
fn test_add_many_accepts_a_class_string() {
    assert_eq!(list("foo").add_many("bar baz nub").to_string(), "foo bar baz nub");
}

#[test]
fn test_remove_drops_a_name() {
    assert_eq!(list("foo bar baz").remove("bar").to_string(), "foo baz");
}

#[test]
fn test_remove_splits_a_class_string_with_spaces() {
    assert_eq!(list("foo bar baz").remove("foo baz").to_string(), "bar");
}

#[test]
fn test_remove_many_accepts_a_sequence() {
    assert_eq!(list("foo bar baz").remove_many(["bar", "baz"]).to_string(), "foo");
}

#[test]
fn test_remove_many_accepts_a_class_string() {
    assert_eq!(list("foo bar baz").remove_many("bar baz").to_string(), "foo");
}

#[test]
fn test_has_answers_membership() {
    let classes = list("foo bar baz");
    assert!(classes.has("bar"));
    assert!(!classes.has("nub"));
}

#[test]
fn test_has_on_a_class_string_requires_every_name() {
    let classes = list("foo bar baz");
    assert!(classes.has("bar baz"));
    assert!(!classes.has("nub bar"));
}

#[test]
fn test_has_all_on_a_sequence() {
    let classes = list("foo bar baz");
    assert!(classes.has_all(["bar", "foo"]));
    assert!(!classes.has_all(["nub", "baz"]));
}

#[test]
fn test_has_all_on_a_class_string() {
    let classes = list("foo bar baz");
    assert!(classes.has_all("bar foo"));
    assert!(!classes.has_all("nub baz"));
}

#[test]
fn test_has_some_on_a_sequence() {
    let classes = list("foo bar baz");
    assert!(classes.has_some(["bar", "foo"]));
    assert!(classes.has_some(["nub", "baz"]));
    assert!(!classes.has_some(["nub", "biz"]));
}

#[test]
fn test_has_some_on_a_class_string() {
    let classes = list("foo bar baz");
    assert!(classes.has_some("bar nub foo"));
    assert!(!classes.has_some("nub biz"));
}

#[test]
fn test_toggle_removes_present_and_adds_absent_names() {
    assert_eq!(list("foo bar baz").toggle("bar").to_string(), "foo baz");
    assert_eq!(list("foo baz").toggle("bar").to_string(), "foo baz bar");
}

#[test]
fn test_toggle_splits_a_class_string_with_spaces() {
    assert_eq!(list("foo bar baz").toggle("bar foo").to_string(), "baz");
    assert_eq!(list("foo baz bar").toggle("baz nub").to_string(), "foo bar nub");
}

#[test]
fn test_toggle_many_accepts_a_sequence() {
    assert_eq!(list("foo bar baz").toggle_many(["bar", "baz"]).to_string(), "foo");
    assert_eq!(list("foo baz").toggle_many(["bar", "baz"]).to_string(), "foo bar");
}

#[test]
fn test_toggle_many_accepts_a_class_string() {
    assert_eq!(list("foo bar baz").toggle_many("bar foo").to_string(), "baz");
    assert_eq!(list("foo baz bar").toggle_many("baz nub").to_string(), "foo bar nub");
}

#[test]
fn test_clear_drops_every_name() {
    assert_eq!(list("foo bar baz").clear().to_string(), "");
    assert_eq!(list("foo baz").clear().to_string(), "");
}

#[test]
fn test_sort_orders_names_alphabetically() {
    assert_eq!(list("foo bar baz").sort().to_string(), "bar baz foo");
    assert_eq!(list("b0 b1 a4 x10 y").sort().to_string(), "a4 b0 b1 x10 y");
}

#[test]
fn test_sort_by_uses_the_comparator() {
    assert_eq!(
        list("foo bar baz")
            .sort_by(|a, b| b.cmp(a))
            .to_string(),
        "foo baz bar"
    );
    // Stable: equal-length names keep their relative order.
    assert_eq!(
        list("bb aa c dd")
            .sort_by(|a, b| a.len().cmp(&b.len()))
            .to_string(),
        "c bb aa dd"
    );
}

#[test]
fn test_filter_keeps_only_matching_names() {
    assert_eq!(
        list("foo bar baz").filter(|token, _, _| starts_with_ba(token)).to_string(),
        "bar baz"
    );
    assert_eq!(
        list("footer bar mana")
            .filter(|token, _, _| !longer_than_three(token))
            .to_string(),
        "bar"
    );
}

#[test]
fn test_filter_can_use_snapshot_indices() {
    // Keep every other name, counted against the original sequence.
    assert_eq!(
        list("a b c d e").filter(|_, index, _| index % 2 == 0).to_string(),
        "a c e"
    );
}

#[test]
fn test_size_reflects_mutations() {
    let mut classes = list("foo bar");
    assert_eq!(classes.len(), 2);
    classes.add("baz nub");
    assert_eq!(classes.len(), 4);
    classes.remove("foo");
    assert_eq!(classes.len(), 3);
}

#[test]
fn test_to_vec_returns_the_names_in_order() {
    assert_eq!(list("foo bar baz").to_vec(), vec!["foo", "bar", "baz"]);
}
