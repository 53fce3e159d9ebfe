//! Wire shape of `Outcome` under the `serde` feature.

#![cfg(feature = "serde")]

use serde::{Deserialize, Serialize};
use wellspring::Outcome;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Receipt {
    id: u32,
    total: i64,
}

#[test]
fn success_serializes_as_tagged_variant() {
    let outcome: Outcome<Receipt, String> = Outcome::success(Receipt { id: 3, total: 120 });

    let json = serde_json::to_string(&outcome).unwrap();

    assert_eq!(json, r#"{"Success":{"id":3,"total":120}}"#);
}

#[test]
fn error_serializes_as_tagged_variant() {
    let outcome: Outcome<Receipt, String> = Outcome::error("card declined".into());

    let json = serde_json::to_string(&outcome).unwrap();

    assert_eq!(json, r#"{"Error":"card declined"}"#);
}

#[test]
fn stored_outcome_reads_back_and_keeps_chaining() {
    let json = r#"{"Success":{"id":9,"total":40}}"#;

    let outcome: Outcome<Receipt, String> = serde_json::from_str(json).unwrap();
    let doubled = outcome.map(|r| r.total * 2);

    assert_eq!(doubled, Outcome::success(80));
}

#[test]
fn unknown_variant_is_rejected() {
    let parsed: Result<Outcome<i32, String>, _> = serde_json::from_str(r#"{"Ok":1}"#);
    assert!(parsed.is_err());
}
