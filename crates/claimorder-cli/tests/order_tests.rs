//! Integration tests for batch ordering and output formatting.

use claimorder_cli::commands::order::{build_collection, ClaimEntry};
use claimorder_cli::config::OutputFormat;
use claimorder_cli::Formatter;

fn entries(json: &str) -> Vec<ClaimEntry> {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_plain_output_groups_shared_rejections() {
    let input = entries(
        r#"[
            {"number": 1, "references": ["Smith"]},
            {"number": 2, "parent": 1},
            {"number": 3, "parent": 1, "references": ["Jones"]},
            {"number": 4},
            {"number": 5, "references": ["Smith"]},
            {"number": 6, "parent": 4, "references": ["Jones", "Smith"]}
        ]"#,
    );

    let mut claims = build_collection(&input).unwrap();
    let formatter = Formatter::new(OutputFormat::Plain, false);
    let output = formatter.format_claims(claims.compute_display_order()).unwrap();

    assert_eq!(
        output,
        [
            "Claim 4: ",
            "Claim 1: Smith",
            "Claim 2: Smith",
            "Claim 5: Smith",
            "Claim 3: Smith, Jones",
            "Claim 6: Jones, Smith",
        ]
        .join("\n")
    );
}

#[test]
fn test_json_output_carries_group_order() {
    let input = entries(r#"[{"number": 2, "references": ["A"]}, {"number": 1}]"#);

    let mut claims = build_collection(&input).unwrap();
    let formatter = Formatter::new(OutputFormat::Json, false);
    let output = formatter.format_claims(claims.compute_display_order()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value[0]["number"], 1);
    assert_eq!(value[0]["group_order"], 1);
    assert_eq!(value[1]["number"], 2);
    assert_eq!(value[1]["group_order"], 2);
}

#[test]
fn test_dependent_listed_before_parent_is_not_linked() {
    let input = entries(
        r#"[
            {"number": 2, "parent": 1},
            {"number": 1, "references": ["Smith"]}
        ]"#,
    );

    let claims = build_collection(&input).unwrap();
    assert!(claims.get(2).unwrap().references().is_empty());
}
