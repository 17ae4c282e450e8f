use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.init_command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .binstubsrc.json

    ----- stderr -----
    "#);

    let content = test.read_file(".binstubsrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["input"], "tools.go");
    assert_eq!(parsed["outputDir"], "bin");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".binstubsrc.json", "{}")?;

    assert_cmd_snapshot!(test.init_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .binstubsrc.json already exists
    "#);
    assert_eq!(test.read_file(".binstubsrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_file("tools.go", "import (\n\t_ \"example.com/cmd/tool\"\n)\n")?;

    test.init_command().output()?;

    assert_cmd_snapshot!(test.command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ✓ wrote bin/tool
    "#);
    assert_eq!(test.list_dir("bin")?, vec!["tool"]);

    Ok(())
}
