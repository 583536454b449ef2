use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "\u{2713} Created .langcovrc.json\n");
    assert!(test.root().join(".langcovrc.json").exists());

    let content = test.read_file(".langcovrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["prefix"], "/usr");
    assert_eq!(parsed["minPercentage"], 25);
    assert_eq!(parsed["useFallbacks"], true);
    assert_eq!(parsed["translations"], serde_json::json!([]));

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".langcovrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Error: .langcovrc.json already exists\n");
    assert_eq!(test.read_file(".langcovrc.json")?, "{}");

    Ok(())
}
