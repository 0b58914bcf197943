use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

#[test]
fn test_directory_consolidated_recurses_into_subdirectories() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("styles/x.css", "/*! X tokens */\n.x { color: red; }")?;
    test.write_file("styles/y.txt", "/*! not extracted */")?;
    test.write_file("styles/z/w.js", "/*! W helpers */\nexport const w = 1;")?;

    let output = test.run(&["styles"])?;

    assert!(output.status.success(), "stderr: {}", crate::stderr(&output));
    assert_eq!(test.list_dir("output")?, vec!["docs.md"]);
    assert_eq!(test.read_file("output/docs.md")?, " X tokens \n\n W helpers \n\n");

    let stdout = stdout(&output);
    assert!(stdout.contains("'x' added to Markdown file successfully."));
    assert!(stdout.contains("'w' added to Markdown file successfully."));
    assert!(!stdout.contains("'y'"));
    Ok(())
}

#[test]
fn test_multiple_writes_one_document_per_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("styles/button.scss", "/*! Button */")?;
    test.write_file("styles/card.css", "/*! Card */\n/*! Card variants */")?;
    test.write_file("styles/plain.css", ".plain {}")?;

    let output = test.run(&["styles", "-multiple"])?;

    assert!(output.status.success());
    assert_eq!(test.list_dir("output")?, vec!["button.md", "card.md"]);
    assert_eq!(test.read_file("output/button.md")?, " Button \n\n");
    assert_eq!(test.read_file("output/card.md")?, " Card \n\n Card variants \n\n");

    let stdout = stdout(&output);
    assert!(stdout.contains("'plain' doesn't have comments to extract."));
    assert!(stdout.contains("updated successfully."));
    Ok(())
}

#[test]
fn test_source_link_with_public_folder() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("x.css", "/*! X */")?;

    let output = test.run(&["x.css", "-public-folder", "assets"])?;

    assert!(output.status.success());
    let doc = test.read_file("output/docs.md")?;
    assert_eq!(doc.trim_end().lines().last(), Some("**Source:** [x.css](assets/x.css)"));
    Ok(())
}

#[test]
fn test_remove_source_suppresses_link() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("x.css", "/*! X */")?;

    let output = test.run(&["x.css", "-public-folder", "assets", "-remove-source"])?;

    assert!(output.status.success());
    assert_eq!(test.read_file("output/docs.md")?, " X \n\n");
    Ok(())
}

#[test]
fn test_custom_folder_and_output_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/tokens.scss", "/*! Tokens */")?;

    let output = test.run(&["src", "-folder", "docs/generated", "-output-file", "design"])?;

    assert!(output.status.success());
    assert_eq!(test.read_file("docs/generated/design.md")?, " Tokens \n\n");
    assert!(!test.exists("output"));
    Ok(())
}

#[test]
fn test_double_dash_flags_accepted() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/tokens.scss", "/*! Tokens */")?;

    let output = test.run(&["src", "--output-file", "design"])?;

    assert!(output.status.success());
    assert!(test.exists("output/design.md"));
    Ok(())
}

#[test]
fn test_previous_output_is_cleared() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a.css", "/*! A */")?;
    test.write_file("output/stale.md", "stale")?;
    test.write_file("output/docs.md", "from an earlier run\n")?;

    let output = test.run(&["src"])?;

    assert!(output.status.success());
    assert_eq!(test.list_dir("output")?, vec!["docs.md"]);
    assert_eq!(test.read_file("output/docs.md")?, " A \n\n");
    Ok(())
}

#[test]
fn test_flat_skips_subdirectories() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a.css", "/*! A */")?;
    test.write_file("src/nested/b.css", "/*! B */")?;

    let output = test.run(&["src", "-flat"])?;

    assert!(output.status.success());
    assert_eq!(test.read_file("output/docs.md")?, " A \n\n");
    assert!(stdout(&output).contains("Skipping directory"));
    Ok(())
}

#[test]
fn test_headings_prefix_each_comment() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/button.scss", "/*!Primary*/ /*!Secondary*/")?;

    let output = test.run(&["src", "-headings"])?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("output/docs.md")?,
        "## button\n\nPrimary\n\n## button\n\nSecondary\n\n"
    );
    Ok(())
}

#[test]
fn test_config_file_provides_defaults() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".bannerdocrc.json",
        r#"{ "folder": "site", "publicFolder": "/css" }"#,
    )?;
    test.write_file("src/a.css", "/*! A */")?;

    let output = test.run(&["src"])?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("site/docs.md")?,
        " A \n\n**Source:** [a.css](/css/a.css)\n\n"
    );

    // -no-config falls back to built-in defaults
    let output = test.run(&["src", "-no-config"])?;
    assert!(output.status.success());
    assert_eq!(test.read_file("output/docs.md")?, " A \n\n");
    Ok(())
}

#[test]
fn test_summary_line() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a.css", "/*! A */")?;
    test.write_file("src/b.js", "/*! B1 */ /*! B2 */")?;

    let output = test.run(&["src"])?;

    assert!(
        stdout(&output).contains("Extracted 3 comments from 2 files into 1 document"),
        "stdout: {}",
        stdout(&output)
    );

    let quiet = test.run(&["src", "-q"])?;
    assert_eq!(stdout(&quiet), "");
    Ok(())
}

#[test]
fn test_node_modules_not_skipped_by_default() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("site/node_modules/ui/w.js", "/*! W */")?;
    test.write_file("site/a.css", "/*! A */")?;

    let output = test.run(&["site"])?;

    assert!(output.status.success());
    assert_eq!(test.read_file("output/docs.md")?, " A \n\n W \n\n");
    Ok(())
}
