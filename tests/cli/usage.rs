use anyhow::Result;

use crate::{CliTest, stderr};

#[test]
fn test_current_directory_rejected_without_touching_output() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.css", "/*! A */")?;
    test.write_file("output/keep.md", "keep")?;

    for entry in [".", "./"] {
        let output = test.run(&[entry])?;

        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).contains("Cannot process the current directory"));
        assert_eq!(test.read_file("output/keep.md")?, "keep");
        assert!(!test.exists("output/docs.md"));
    }
    Ok(())
}

#[test]
fn test_missing_entry_path_rejected() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[])?;

    assert!(!output.status.success());
    assert!(!test.exists("output"));
    Ok(())
}

#[test]
fn test_unknown_flag_rejected() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a.css", "/*! A */")?;

    let output = test.run(&["src", "-bogus"])?;

    assert!(!output.status.success());
    assert!(!test.exists("output"));
    Ok(())
}

#[test]
fn test_nonexistent_entry_is_io_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["does-not-exist"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("does-not-exist"));
    Ok(())
}

#[test]
fn test_entry_inside_output_folder_rejected() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("site/src/a.css", "/*! A */")?;

    let output = test.run(&["site/src", "-folder", "site"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(test.exists("site/src/a.css"));
    Ok(())
}

#[test]
fn test_invalid_config_rejected() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".bannerdocrc.json", r#"{ "ignores": ["[invalid"] }"#)?;
    test.write_file("src/a.css", "/*! A */")?;

    let output = test.run(&["src"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("ignores"));
    Ok(())
}

#[test]
fn test_init_creates_config_once() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["-init"])?;
    assert!(output.status.success());
    assert!(test.root().join(".bannerdocrc.json").exists());

    let output = test.run(&["-init"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("already exists"));
    Ok(())
}
