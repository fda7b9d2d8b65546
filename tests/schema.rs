//! End-to-end validation of compiled schemas.

use pretty_assertions::assert_eq;
use serde_json::json;
use validata::prelude::*;

fn compiled(raw: &str) -> BoxValidator {
    compile(serde_json::from_str::<Definition>(raw).expect("definition parses"))
}

#[test]
fn user_profile_schema() {
    let v = compiled(
        r#"{
            "type": "struct",
            "struct": {
                "name": { "type": "string", "min": 1 },
                "age": { "type": "number", "min": 0, "required": false }
            }
        }"#,
    );

    // A missing optional field validates and stays off the output.
    assert_eq!(
        v.validate(Some(&json!({"name": "Alice"}))).unwrap(),
        Some(json!({"name": "Alice"}))
    );

    // String coercion (trim) and number coercion (parse) both apply.
    assert_eq!(
        v.validate(Some(&json!({"name": " Alice ", "age": "30"})))
            .unwrap(),
        Some(json!({"name": "Alice", "age": 30}))
    );

    // Failures name the offending field.
    let err = v.validate(Some(&json!({"name": ""}))).unwrap_err();
    assert_eq!(err.message, r#"value["name"]'s length must >= 1"#);
    let err = v
        .validate(Some(&json!({"name": "Alice", "age": -1})))
        .unwrap_err();
    assert_eq!(err.message, r#"value["age"] must >= 0"#);
}

#[test]
fn deep_nesting_accumulates_the_path() {
    let v = compiled(
        r#"{
            "type": "struct",
            "struct": {
                "teams": {
                    "type": "array",
                    "item": {
                        "type": "struct",
                        "struct": {
                            "members": {
                                "type": "array",
                                "item": { "type": "string", "min": 1 }
                            }
                        }
                    }
                }
            }
        }"#,
    );
    let err = v
        .validate(Some(&json!({
            "teams": [
                {"members": ["ana"]},
                {"members": ["bo", ""]}
            ]
        })))
        .unwrap_err();
    assert_eq!(
        err.message,
        r#"value["teams"][1]["members"][1]'s length must >= 1"#
    );
}

#[test]
fn struct_fields_fail_in_declaration_order() {
    let v = compiled(
        r#"{
            "type": "struct",
            "struct": {
                "first": { "type": "number" },
                "second": { "type": "number" }
            }
        }"#,
    );
    // Both fields are invalid; only the first declared one is reported.
    let err = v
        .validate(Some(&json!({"second": "x", "first": "y"})))
        .unwrap_err();
    assert_eq!(err.message, r#"value["first"] must be a valid number"#);
}

#[test]
fn record_of_structs() {
    let v = compiled(
        r#"{
            "type": "record",
            "min": 1,
            "record": {
                "type": "struct",
                "struct": { "port": { "type": "number", "min": 1, "max": 65535 } }
            }
        }"#,
    );
    assert_eq!(
        v.validate(Some(&json!({"web": {"port": "8080"}}))).unwrap(),
        Some(json!({"web": {"port": 8080}}))
    );
    let err = v
        .validate(Some(&json!({"web": {"port": 0}})))
        .unwrap_err();
    assert_eq!(err.message, r#"value["web"]["port"] must >= 1"#);
}

#[test]
fn tuple_of_mixed_definitions() {
    let v = compiled(
        r#"{
            "type": "tuple",
            "tuple": [
                { "type": "string", "pattern": "uuid" },
                { "type": "number", "required": false }
            ]
        }"#,
    );
    assert_eq!(
        v.validate(Some(&json!(["c74a8f64-5a1e-4f0a-bb4d-02f6f04ca74b"])))
            .unwrap(),
        Some(json!(["c74a8f64-5a1e-4f0a-bb4d-02f6f04ca74b", null]))
    );
    let err = v.validate(Some(&json!(["nope", 1]))).unwrap_err();
    assert_eq!(err.message, "value[0] is not a valid uuid");
}

#[test]
fn choices_definitions() {
    let v = compiled(r#"{"type": "string", "choices": ["dev", "prod"]}"#);
    assert_eq!(v.validate(Some(&json!("dev"))).unwrap(), Some(json!("dev")));
    let err = v.validate(Some(&json!("staging"))).unwrap_err();
    assert_eq!(err.message, "value can only be one of dev, prod.");

    let v = compiled(r#"{"type": "number", "choices": {"low": 1, "high": 9}}"#);
    assert_eq!(v.validate(Some(&json!("9"))).unwrap(), Some(json!(9)));
    assert_eq!(
        v.validate(Some(&json!(5))).unwrap_err().message,
        "value can only be one of 1, 9."
    );
}

#[test]
fn union_aggregates_alternative_failures() {
    // Unions are built in code (they carry validators, not data).
    let id = one_of(
        vec![
            number(NumberOptions::new().min(1.0)).boxed(),
            string(StringOptions::new().pattern(Pattern::Uuid)).boxed(),
        ],
        CommonOptions::new(),
    );
    assert_eq!(id.validate(Some(&json!("17"))).unwrap(), Some(json!(17)));
    assert_eq!(
        id.validate(Some(&json!("c74a8f64-5a1e-4f0a-bb4d-02f6f04ca74b")))
            .unwrap(),
        Some(json!("c74a8f64-5a1e-4f0a-bb4d-02f6f04ca74b"))
    );
    let err = id.validate_field("id", Some(&json!("zero"))).unwrap_err();
    assert_eq!(
        err.message,
        "id do not match any valid format:\n- id must be a valid number\n- id is not a valid uuid"
    );
}

#[test]
fn compiled_and_handwritten_trees_agree() {
    let from_schema = compiled(
        r#"{"type": "array", "min": 1, "item": {"type": "boolean", "null": true}}"#,
    );
    let by_hand = array(
        boolean(CommonOptions::new().nullable()).boxed(),
        ArrayOptions::new().min(1),
    );

    for input in [json!(["yes", null, 0]), json!([]), json!("not an array")] {
        let a = from_schema.validate(Some(&input));
        let b = by_hand.validate(Some(&input));
        match (a, b) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(a), Err(b)) => assert_eq!(a.message, b.message),
            (a, b) => panic!("diverged on {input}: {a:?} vs {b:?}"),
        }
    }
}
