//! Tests for sharing resolvers and generators across threads.

use liform::{FieldConfig, FormView, Liform, Resolver, StringTransformer};
use serde_json::json;
use std::sync::Arc;
use std::thread;

#[test]
fn test_concurrent_transform() {
    let liform = Arc::new(Liform::with_defaults());

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let liform = Arc::clone(&liform);
            thread::spawn(move || {
                let form = FieldConfig::new("user", "form")
                    .child(FieldConfig::new("name", "text").label(format!("Name {}", i)))
                    .child(FieldConfig::new("age", "integer"));

                let schema = liform.transform(&form).unwrap();
                assert_eq!(schema["properties"]["name"]["title"], format!("Name {}", i));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_registration_and_resolution() {
    let resolver = Resolver::new();
    resolver.set_transformer("text", StringTransformer, None);

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let resolver = resolver.clone();
            thread::spawn(move || {
                resolver.set_transformer(format!("custom{}", i), StringTransformer, None);
                let field = FieldConfig::new("name", "text");
                assert!(resolver.resolve(&field).is_ok());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    for i in 0..10 {
        assert!(resolver.contains(&format!("custom{}", i)));
    }
}

#[test]
fn test_concurrent_normalize() {
    let liform = Arc::new(Liform::with_defaults());

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let liform = Arc::clone(&liform);
            thread::spawn(move || {
                let view = FormView::new().child("n", FormView::leaf(json!(i)));
                assert_eq!(liform.normalize(&view), json!({"n": i}));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
