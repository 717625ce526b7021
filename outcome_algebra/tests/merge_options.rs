//! Merge options: defaults, builders and loading from configuration.

use anyhow::Result;
use outcome_algebra::{DEFAULT_SEPARATOR, Failure, MergeOptions, Severity, merge_all};
use rstest::rstest;

#[test]
fn defaults_match_documented_values() {
    let options = MergeOptions::<()>::default();
    assert_eq!(options.separator(), DEFAULT_SEPARATOR);
    assert_eq!(options.separator(), "\n  ");
    assert_eq!(options.header(), None);
    assert!(options.payload().is_none());
    assert_eq!(options, MergeOptions::new());
}

#[test]
fn builders_set_each_field() {
    let options = MergeOptions::new()
        .with_separator(" / ")
        .with_header("deploy")
        .with_payload(3_u8);
    assert_eq!(options.separator(), " / ");
    assert_eq!(options.header(), Some("deploy"));
    assert_eq!(options.payload(), Some(&3));
}

#[rstest]
#[case(r#"{}"#, "\n  ", None)]
#[case(r#"{ "separator": "; " }"#, "; ", None)]
#[case(r#"{ "header": "batch failed" }"#, "\n  ", Some("batch failed"))]
#[case(r#"{ "separator": " | ", "header": "h" }"#, " | ", Some("h"))]
fn deserializes_from_config(
    #[case] json: &str,
    #[case] separator: &str,
    #[case] header: Option<&str>,
) -> Result<()> {
    let options: MergeOptions<()> = serde_json::from_str(json)?;
    assert_eq!(options.separator(), separator);
    assert_eq!(options.header(), header);
    assert!(options.payload().is_none());
    Ok(())
}

#[test]
fn loaded_options_drive_aggregation() -> Result<()> {
    let options: MergeOptions<&str> =
        serde_json::from_str(r#"{ "separator": ", ", "header": "lint" }"#)?;
    let merged = merge_all(
        [
            Failure::new("a")
                .with_level(Severity::Info)
                .with_message("unused import"),
            Failure::new("b")
                .with_level(Severity::Warn)
                .with_message("shadowed name"),
        ],
        options.with_payload("lint"),
    )
    .ok_or_else(|| anyhow::anyhow!("two failures were merged"))?;
    assert_eq!(merged.render(), "[Warn] lint, unused import, shadowed name");
    assert_eq!(*merged.payload(), "lint");
    Ok(())
}
