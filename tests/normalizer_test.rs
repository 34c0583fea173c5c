//! Tests for normalizing rendered form views into initial values.

use liform::{normalize_view, FormView, NormalizationStrategy};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_object_mode_skips_empty_string() {
    let view = FormView::new()
        .child("x", FormView::leaf(json!(1)))
        .child("y", FormView::leaf(json!("")));

    assert_eq!(normalize_view(&view), json!({"x": 1}));
}

#[test]
fn test_null_leaf_is_skipped() {
    let view = FormView::new()
        .child("a", FormView::new())
        .child("b", FormView::leaf(json!("kept")));

    assert_eq!(normalize_view(&view), json!({"b": "kept"}));
}

#[test]
fn test_falsy_values_are_not_skipped() {
    let view = FormView::new()
        .child("zero", FormView::leaf(json!(0)))
        .child("no", FormView::leaf(json!(false)))
        .child("space", FormView::leaf(json!(" ")));

    assert_eq!(
        normalize_view(&view),
        json!({"zero": 0, "no": false, "space": " "})
    );
}

#[test]
fn test_empty_leaf_skipped_in_array_mode() {
    let view = FormView::new()
        .strategy(NormalizationStrategy::ChildrenAsArray)
        .child("0", FormView::leaf(json!("a")))
        .child("1", FormView::leaf(json!("")))
        .child("2", FormView::leaf(json!("c")));

    assert_eq!(normalize_view(&view), json!(["a", "c"]));
}

#[test]
fn test_children_as_array_preserves_order() {
    let view = FormView::new()
        .strategy(NormalizationStrategy::ChildrenAsArray)
        .child("x", FormView::leaf(json!(1)))
        .child("y", FormView::leaf(json!(2)));

    assert_eq!(normalize_view(&view), json!([1, 2]));
}

#[test]
fn test_children_as_true_names() {
    let view = FormView::new()
        .strategy(NormalizationStrategy::ChildrenAsTrueNames)
        .child("a", FormView::checkbox(true))
        .child("b", FormView::checkbox(false))
        .child("c", FormView::checkbox(true));

    assert_eq!(normalize_view(&view), json!(["a", "c"]));
}

#[test]
fn test_true_names_requires_exactly_true() {
    let view = FormView::new()
        .strategy(NormalizationStrategy::ChildrenAsTrueNames)
        .child("one", FormView::leaf(json!(1)))
        .child("yes", FormView::leaf(json!("true")))
        .child("real", FormView::leaf(json!(true)));

    assert_eq!(normalize_view(&view), json!(["real"]));
}

#[test]
fn test_checked_is_boolean() {
    let view = FormView::new()
        .child("on", FormView::leaf(json!(1)).checked(true))
        .child("off", FormView::leaf(json!(0)).checked(false));

    let values = normalize_view(&view);
    assert_eq!(values, json!({"on": true, "off": false}));
    assert!(values["on"].is_boolean());
}

#[test]
fn test_all_children_skipped_gives_empty_container() {
    let object = FormView::new().child("a", FormView::leaf(json!("")));
    assert_eq!(normalize_view(&object), json!({}));

    let array = FormView::new()
        .strategy(NormalizationStrategy::ChildrenAsArray)
        .child("a", FormView::new());
    assert_eq!(normalize_view(&array), json!([]));
}

#[test]
fn test_empty_collection_in_array_mode_is_array() {
    let view = FormView::collection(vec![]).strategy(NormalizationStrategy::ChildrenAsArray);
    assert_eq!(normalize_view(&view), json!([]));

    let names = FormView::collection(vec![]).strategy(NormalizationStrategy::ChildrenAsTrueNames);
    assert_eq!(normalize_view(&names), json!([]));
}

#[test]
fn test_empty_collection_in_object_mode_is_raw_object() {
    let view = FormView::collection(vec![]);
    assert_eq!(normalize_view(&view), json!({}));
}

#[test]
fn test_collection_leaf_elements() {
    let view = FormView::new().child("ids", FormView::collection(vec![json!(1), json!(2)]));
    assert_eq!(normalize_view(&view), json!({"ids": [1, 2]}));
}

#[test]
fn test_empty_collection_child_is_not_skipped() {
    let view = FormView::new().child(
        "tags",
        FormView::collection(vec![]).strategy(NormalizationStrategy::ChildrenAsArray),
    );

    assert_eq!(normalize_view(&view), json!({"tags": []}));
}

#[test]
fn test_nested_form() {
    let view = FormView::new()
        .child("name", FormView::leaf(json!("Alice")))
        .child(
            "address",
            FormView::new()
                .child("street", FormView::leaf(json!("Main St")))
                .child("unit", FormView::leaf(json!(""))),
        )
        .child(
            "phones",
            FormView::new()
                .strategy(NormalizationStrategy::ChildrenAsArray)
                .child(
                    "0",
                    FormView::new()
                        .child("kind", FormView::leaf(json!("home")))
                        .child("number", FormView::leaf(json!("555-0100"))),
                ),
        )
        .child(
            "interests",
            FormView::new()
                .strategy(NormalizationStrategy::ChildrenAsTrueNames)
                .child("music", FormView::checkbox(true))
                .child("sports", FormView::checkbox(false)),
        );

    assert_eq!(
        normalize_view(&view),
        json!({
            "name": "Alice",
            "address": {"street": "Main St"},
            "phones": [{"kind": "home", "number": "555-0100"}],
            "interests": ["music"]
        })
    );
}

#[test]
fn test_object_keys_keep_child_order() {
    let view = FormView::new()
        .child("zeta", FormView::leaf(json!(1)))
        .child("alpha", FormView::leaf(json!(2)));

    let values = normalize_view(&view);
    let keys: Vec<_> = values.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["zeta".to_string(), "alpha".to_string()]);
}

#[test]
fn test_input_tree_is_not_modified() {
    let view = FormView::new()
        .child("a", FormView::leaf(json!("")))
        .child("b", FormView::leaf(json!(1)));
    let before = view.clone();

    let _ = normalize_view(&view);
    assert_eq!(view, before);
}
