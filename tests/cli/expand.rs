use anyhow::Result;

use crate::CliTest;

const TRIANGLE: &str = "\
class Triangle : public VulkanExampleBase\n\
{\n\
\tvoid prepare()\n\
\t{\n\
\t\tVkFenceCreateInfo fenceCreateInfo = vkTools::initializers::fenceCreateInfo(VK_FLAGS_NONE);\n\
\t}\n\
};\n";

#[test]
fn test_expand_writes_derived_file() -> Result<()> {
    let test = CliTest::with_file("triangle.cpp", TRIANGLE)?;

    let output = test.expand_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let expanded = test.read_file("triangle__expanded__.cpp")?;
    assert!(expanded.contains("\t\tVkFenceCreateInfo fenceCreateInfo{};\n"));
    assert!(
        expanded
            .contains("\t\tfenceCreateInfo.sType = VK_STRUCTURE_TYPE_FENCE_CREATE_INFO;\n")
    );
    assert!(expanded.contains("\t\tfenceCreateInfo.flags = VK_FLAGS_NONE;\n"));
    assert!(!expanded.contains("vkTools::initializers::"));

    // Input untouched.
    assert_eq!(test.read_file("triangle.cpp")?, TRIANGLE);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Processed 1 source file, expanded 1"));
    Ok(())
}

#[test]
fn test_expand_function_parameter_gets_comment() -> Result<()> {
    let source = "\
class Sample : public VulkanExampleBase\n\
{\n\
\tvoid submit()\n\
\t{\n\
\t\tqueueSubmit(vkTools::initializers::submitInfo());\n\
\t}\n\
};\n";
    let test = CliTest::with_file("sample.cpp", source)?;

    let output = test.expand_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let expanded = test.read_file("sample__expanded__.cpp")?;
    assert!(expanded.contains("\t\t// Lookup of initializer 'submitInfo'\n"));
    assert!(expanded.contains("\t\t// .sType = VK_STRUCTURE_TYPE_SUBMIT_INFO;\n"));
    assert!(expanded.contains("\t\t// .pNext = nullptr;\n"));
    // The original call is preserved right after the comment block.
    assert!(expanded.contains("\t\tqueueSubmit(vkTools::initializers::submitInfo());\n"));
    Ok(())
}

#[test]
fn test_expand_ambiguous_lists_possibilities() -> Result<()> {
    let source = "\
class Sample : public VulkanExampleBase\n\
{\n\
\tvoid setup()\n\
\t{\n\
\t\tVkWriteDescriptorSet write = vkTools::initializers::writeDescriptorSet(set, type, 0, &info);\n\
\t}\n\
};\n";
    let test = CliTest::with_file("sample.cpp", source)?;

    let output = test.expand_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let expanded = test.read_file("sample__expanded__.cpp")?;
    assert!(expanded.contains("// Possibility #0"));
    assert!(expanded.contains("// Possibility #1"));
    assert!(expanded.contains("// .pBufferInfo = &info;"));
    assert!(expanded.contains("// .pImageInfo = &info;"));
    // Ambiguous calls are never rewritten, only annotated.
    assert!(expanded.contains("vkTools::initializers::writeDescriptorSet(set, type, 0, &info);"));
    Ok(())
}

#[test]
fn test_expand_unresolved_warns() -> Result<()> {
    let source = "\
class Sample : public VulkanExampleBase\n\
{\n\
\tauto x = vkTools::initializers::notRegistered(1, 2);\n\
};\n";
    let test = CliTest::with_file("sample.cpp", source)?;

    let output = test.expand_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("warning"));
    assert!(stdout.contains("notRegistered"));
    assert!(stdout.contains("no-descriptor-match"));
    assert!(stdout.contains("sample.cpp:3:11"));
    Ok(())
}

#[test]
fn test_expand_strict_fails_on_warnings() -> Result<()> {
    let source = "\
class Sample : public VulkanExampleBase\n\
{\n\
\tauto x = vkTools::initializers::notRegistered(1, 2);\n\
};\n";
    let test = CliTest::with_file("sample.cpp", source)?;

    let output = test.expand_command().arg("--strict").output()?;
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn test_expand_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("triangle.cpp", TRIANGLE)?;

    let output = test.expand_command().arg("--dry-run").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(!test.root().join("triangle__expanded__.cpp").exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dry-run"));
    Ok(())
}

#[test]
fn test_expand_in_place() -> Result<()> {
    let test = CliTest::with_file("triangle.cpp", TRIANGLE)?;

    let output = test.expand_command().arg("--in-place").output()?;
    assert_eq!(output.status.code(), Some(0));

    let rewritten = test.read_file("triangle.cpp")?;
    assert!(rewritten.contains("fenceCreateInfo.flags = VK_FLAGS_NONE;"));
    assert!(!test.root().join("triangle__expanded__.cpp").exists());
    Ok(())
}

#[test]
fn test_expand_skips_files_without_target_marker() -> Result<()> {
    let test = CliTest::with_file(
        "helper.cpp",
        "VkFenceCreateInfo f = vkTools::initializers::fenceCreateInfo(0);\n",
    )?;

    let output = test.expand_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(!test.root().join("helper__expanded__.cpp").exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Processed 0 source files, expanded 0"));
    Ok(())
}

#[test]
fn test_expand_honors_default_ignore_methods() -> Result<()> {
    let source = "\
class Sample : public VulkanExampleBase\n\
{\n\
\tVkPushConstantRange r = vkTools::initializers::pushConstantRange(flags, size, 0);\n\
};\n";
    let test = CliTest::with_file("sample.cpp", source)?;

    let output = test.expand_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    // Ignored name: no expansion, no warning, nothing to write.
    assert!(!test.root().join("sample__expanded__.cpp").exists());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("pushConstantRange"));
    Ok(())
}

#[test]
fn test_expand_respects_config_marker() -> Result<()> {
    let test = CliTest::with_file(
        "sample.cpp",
        "\
class Sample : public VulkanExampleBase\n\
{\n\
\tVkFenceCreateInfo f = vks::initializers::fenceCreateInfo(0);\n\
};\n",
    )?;
    test.write_file(".vkexpandrc.json", r#"{ "marker": "vks::initializers::" }"#)?;

    let output = test.expand_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let expanded = test.read_file("sample__expanded__.cpp")?;
    assert!(expanded.contains("f.sType = VK_STRUCTURE_TYPE_FENCE_CREATE_INFO;"));
    Ok(())
}

#[test]
fn test_expand_explicit_file_argument() -> Result<()> {
    let test = CliTest::with_file("a/triangle.cpp", TRIANGLE)?;
    test.write_file("b/other.cpp", TRIANGLE)?;

    let output = test.expand_command().arg("a/triangle.cpp").output()?;
    assert_eq!(output.status.code(), Some(0));

    assert!(test.root().join("a/triangle__expanded__.cpp").exists());
    assert!(!test.root().join("b/other__expanded__.cpp").exists());
    Ok(())
}

#[test]
fn test_expand_invalid_config_is_internal_error() -> Result<()> {
    let test = CliTest::with_file("triangle.cpp", TRIANGLE)?;
    test.write_file(".vkexpandrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = test.expand_command().output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("expand"));
    assert!(stdout.contains("init"));
    Ok(())
}
