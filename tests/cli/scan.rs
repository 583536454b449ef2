use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_scan_gettext() -> Result<()> {
    let test = CliTest::new()?;
    test.write_mo("usr", "pt_BR", "foo", 40)?;
    test.write_mo("usr", "de", "foo", 100)?;
    test.write_mo("usr", "en_GB", "foo", 10)?;
    test.write_mo("usr", "de", "unrelated", 500)?;

    let output = test
        .scan_command()
        .args(["usr", "-t", "gettext:foo"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_snapshot!(stdout(&output), @r"
de    100%
pt_BR  40%

✓ 2 languages at or above 25% (3 catalogs scanned, 100 strings max)
");

    Ok(())
}

#[test]
fn test_scan_qt_and_gettext() -> Result<()> {
    let test = CliTest::new()?;
    test.write_qm("usr", "viewer", "de", 8)?;
    test.write_qm("usr", "viewer", "fr", 2)?;
    test.write_mo("usr", "it", "viewer", 4)?;

    let output = test
        .scan_command()
        .args(["usr", "-t", "viewer", "--min-percentage", "0", "--format", "json"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let json: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        json["languages"],
        serde_json::json!([
            { "locale": "de", "percentage": 100 },
            { "locale": "fr", "percentage": 25 },
            { "locale": "it", "percentage": 50 }
        ])
    );
    assert_eq!(json["catalogsScanned"], 3);
    assert_eq!(json["maxStringCount"], 8);

    Ok(())
}

#[test]
fn test_scan_fallbacks() -> Result<()> {
    let test = CliTest::new()?;
    test.write_mo("usr", "de", "foo", 10)?;
    test.write_mo("usr", "fr", "bar", 10)?;

    let output = test
        .scan_command()
        .args(["usr", "-t", "gettext:foo", "--no-fallbacks", "--format", "json"])
        .output()?;
    let json: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(json["languagesAdded"], 1);

    let output = test
        .scan_command()
        .args(["usr", "-t", "gettext:foo", "--fallbacks", "--format", "json"])
        .output()?;
    let json: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(json["languagesAdded"], 2);
    assert_eq!(json["languages"][1]["locale"], "fr");

    Ok(())
}

#[test]
fn test_scan_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".langcovrc.json",
        r#"{
            "prefix": "install",
            "translations": [{ "kind": "gettext", "id": "foo" }],
            "minPercentage": 50
        }"#,
    )?;
    test.write_mo("install", "de", "foo", 100)?;
    test.write_mo("install", "fr", "foo", 49)?;

    let output = test.scan_command().args(["--format", "json"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    let json: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(json["minPercentage"], 50);
    assert_eq!(
        json["languages"],
        serde_json::json!([{ "locale": "de", "percentage": 100 }])
    );

    Ok(())
}

#[test]
fn test_scan_nothing_found() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("usr/share/locale/de/LC_MESSAGES/.keep", "")?;

    let output = test
        .scan_command()
        .args(["usr", "-t", "gettext:foo", "--no-fallbacks"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_snapshot!(stdout(&output), @"✘ No languages at or above 25% (0 catalogs scanned)");

    Ok(())
}

#[test]
fn test_scan_invalid_catalog() -> Result<()> {
    let test = CliTest::new()?;
    test.write_mo("usr", "de", "foo", 10)?;
    test.write_file("usr/share/locale/fr/LC_MESSAGES/foo.mo", "not a catalog")?;

    let output = test
        .scan_command()
        .args(["usr", "-t", "gettext:foo"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    let stderr = stderr(&output);
    assert!(stderr.contains("Failed to scan translations"), "{stderr}");
    assert!(stderr.contains("file is invalid"), "{stderr}");

    Ok(())
}

#[test]
fn test_scan_missing_prefix() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.scan_command().arg("does-not-exist").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("is not a directory"));

    Ok(())
}

#[test]
fn test_invalid_translation_argument() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.scan_command().args(["-t", "po:foo"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("unknown translation kind"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("scan"));
    assert!(stdout.contains("init"));

    Ok(())
}
