use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert!(
        parsed.get("marker").is_some(),
        "Config should have 'marker' field"
    );
    assert!(
        parsed.get("targetMarker").is_some(),
        "Config should have 'targetMarker' field"
    );
    assert!(
        parsed.get("ignoreMethods").is_some(),
        "Config should have 'ignoreMethods' field"
    );
    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0));

    assert!(test.root().join(".vkexpandrc.json").exists());

    let content = test.read_file(".vkexpandrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".vkexpandrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"));

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;

    test.write_file(
        "triangle.cpp",
        "\
class Triangle : public VulkanExampleBase\n\
{\n\
\tVkSemaphoreCreateInfo s = vkTools::initializers::semaphoreCreateInfo();\n\
};\n",
    )?;

    let output = test.expand_command().output()?;
    assert!(
        output.status.success(),
        "Expand command should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(test.root().join("triangle__expanded__.cpp").exists());

    Ok(())
}
