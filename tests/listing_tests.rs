use anyhow::Result;
use dircols::cli::parse_args;
use dircols::listing::run;
use dircols::render::RenderOptions;
use dircols::scan::ScanResult;

use test_helpers::{TestEnvironment, names};

fn plain_options() -> RenderOptions {
    RenderOptions {
        terminal_width: Some(80),
        color: false,
        ..RenderOptions::default()
    }
}

/// Parse `args` and run the listing, returning (stdout, stderr)
fn run_listing(args: &[&str]) -> Result<(String, String)> {
    let mut argv = vec!["dircols"];
    argv.extend_from_slice(args);
    let request = parse_args(argv)?;

    let mut out = Vec::new();
    let mut err = Vec::new();
    run(&request, &mut out, &mut err, &plain_options())?;

    Ok((String::from_utf8(out)?, String::from_utf8(err)?))
}

#[test]
fn test_listing_default_sections() -> Result<()> {
    let env = TestEnvironment::mixed_case_tree()?;
    let dir = env.path().to_string_lossy().to_string();

    let (out, err) = run_listing(&[&dir])?;

    assert!(err.is_empty());
    let expected = format!(
        "Directory: {}\n\nDirectories:\n{}\n\nFiles:\n{}\n\n",
        dir,
        "Alpha    beta     ",
        "readme.txt    Setup.exe     ",
    );
    assert_eq!(out, expected);

    Ok(())
}

#[test]
fn test_listing_readonly_section() -> Result<()> {
    let env = TestEnvironment::mixed_case_tree()?;
    let dir = env.path().to_string_lossy().to_string();

    let (out, _) = run_listing(&["-R", &dir])?;

    assert!(out.contains("Read-Only Files:\nSetup.exe    \n"));
    // Sections appear in a fixed order
    let dirs_at = out.find("Directories:").unwrap();
    let files_at = out.find("Files:").unwrap();
    let readonly_at = out.find("Read-Only Files:").unwrap();
    assert!(dirs_at < files_at && files_at < readonly_at);

    Ok(())
}

#[test]
fn test_listing_dirs_only_and_files_only() -> Result<()> {
    let env = TestEnvironment::mixed_case_tree()?;
    let dir = env.path().to_string_lossy().to_string();

    let (out, _) = run_listing(&["-d", &dir])?;
    assert!(out.contains("Directories:"));
    assert!(!out.contains("Files:"));

    let (out, _) = run_listing(&["-f", &dir])?;
    assert!(!out.contains("Directories:"));
    assert!(out.contains("Files:"));

    Ok(())
}

#[test]
fn test_listing_empty_sections_show_placeholder() -> Result<()> {
    let env = TestEnvironment::setup()?;
    env.add_file("only.md")?;
    let dir = env.path().to_string_lossy().to_string();

    let (out, _) = run_listing(&["-e", ".txt", &dir])?;

    assert!(out.contains("Directories:\n(none)\n"));
    assert!(out.contains("Files:\n(none)\n"));

    Ok(())
}

#[test]
fn test_listing_missing_directory_continues() -> Result<()> {
    let env = TestEnvironment::mixed_case_tree()?;
    let dir = env.path().to_string_lossy().to_string();
    let missing = env.path().join("missing").to_string_lossy().to_string();

    let (out, err) = run_listing(&[&missing, &dir])?;

    assert_eq!(err, format!("Directory not found: {}\n", missing));
    assert!(out.starts_with(&format!("Directory: {}\n", dir)));
    assert!(out.contains("readme.txt"));
    assert!(!out.contains(&format!("Directory: {}\n", missing)));

    Ok(())
}

#[test]
fn test_listing_processes_targets_in_order() -> Result<()> {
    let first = TestEnvironment::setup()?;
    first.add_file("first.txt")?;
    let second = TestEnvironment::setup()?;
    second.add_file("second.txt")?;

    let first_dir = first.path().to_string_lossy().to_string();
    let second_dir = second.path().to_string_lossy().to_string();

    let (out, _) = run_listing(&[&second_dir, &first_dir])?;

    let second_at = out.find("second.txt").unwrap();
    let first_at = out.find("first.txt").unwrap();
    assert!(second_at < first_at);

    Ok(())
}

#[test]
fn test_listing_json_output() -> Result<()> {
    let env = TestEnvironment::mixed_case_tree()?;
    let dir = env.path().to_string_lossy().to_string();

    let (out, _) = run_listing(&["--json", &dir])?;

    let value: serde_json::Value = serde_json::from_str(&out)?;
    assert_eq!(value["directory_names"], serde_json::json!(["Alpha", "beta"]));
    assert_eq!(
        value["file_names"],
        serde_json::json!(["readme.txt", "Setup.exe"])
    );
    assert_eq!(value["readonly_file_names"], serde_json::json!(["Setup.exe"]));

    Ok(())
}

#[test]
fn test_scan_result_serializes_field_names() -> Result<()> {
    let result = ScanResult {
        directory_names: names(&["a"]),
        file_names: names(&["b"]),
        readonly_file_names: Vec::new(),
    };

    let json = serde_json::to_string(&result)?;
    assert_eq!(
        json,
        r#"{"directory_names":["a"],"file_names":["b"],"readonly_file_names":[]}"#
    );

    Ok(())
}
