use crate::common::command::{git_head_hash, repository_dir, run_tool_command};
use crate::common::{INVALID_OPTIONS, observed_exit_code};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
#[case::hash("--hash=medium", "Invalid 'hash' argument. 'medium' [valid values: 'short' or 'long']")]
#[case::namespace("--namespace=1Acme", "Invalid 'namespace/ns' argument. '1Acme' [valid values: valid C# namespace name]")]
#[case::namespace_alias("--ns=Acme..Build", "Invalid 'namespace/ns' argument. 'Acme..Build'")]
#[case::class("--class=Git.Hash", "Invalid 'class' argument. 'Git.Hash' [valid values: valid C# class name]")]
#[case::access_modifier("--access-modifier=private", "Invalid 'access-modifier' argument. 'private' [valid values: 'public' or 'internal']")]
#[case::indent("--indent=tabulator", "Invalid 'indent/indenting' argument. 'tabulator'")]
#[case::indenting("--indenting=none", "Invalid 'indent/indenting' argument. 'none'")]
#[case::indent_size("--indent-size=-1", "Invalid 'indent-size/indenting-size' argument. '-1' [valid values: integer from 0 to 256]")]
#[case::indent_size_too_large("--indent-size=4294967295", "Invalid 'indent-size/indenting-size' argument. '4294967295' [valid values: integer from 0 to 256]")]
#[case::indenting_size("--indenting-size=four", "Invalid 'indent-size/indenting-size' argument. 'four'")]
#[case::line_ending("--line-ending=cr", "Invalid 'line-ending' argument. 'cr' [valid values: 'crlf' or 'lf']")]
#[case::timeout("--timeout=soon", "Invalid 'timeout' argument. 'soon'")]
fn reject_invalid_option_values(
    repository_dir: TempDir,
    #[case] argument: &str,
    #[case] message: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    run_tool_command(repository_dir.path(), &[argument])
        .assert()
        .code(observed_exit_code(INVALID_OPTIONS))
        .stdout(predicate::str::contains(message));

    assert!(!repository_dir.path().join("GitCommitHash.cs").exists());

    Ok(())
}

#[rstest]
#[case::unknown_key("--color=red", "Unknown argument 'color'.")]
#[case::keys_are_case_sensitive("--Hash=short", "Unknown argument 'Hash'.")]
fn reject_unknown_options(
    repository_dir: TempDir,
    #[case] argument: &str,
    #[case] message: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    run_tool_command(repository_dir.path(), &[argument])
        .assert()
        .code(observed_exit_code(INVALID_OPTIONS))
        .stdout(predicate::str::contains(message));

    assert!(!repository_dir.path().join("GitCommitHash.cs").exists());

    Ok(())
}

#[rstest]
fn repeated_option_keeps_the_last_value(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let head = git_head_hash(repository_dir.path(), true);

    run_tool_command(repository_dir.path(), &["--hash=short", "--hash=long"])
        .assert()
        .success();

    let generated = std::fs::read_to_string(repository_dir.path().join("GitCommitHash.cs"))?;
    assert!(generated.contains(&format!("get {{ return \"{head}\"; }}")));

    Ok(())
}

#[rstest]
fn repeated_invalid_option_is_rejected(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_tool_command(repository_dir.path(), &["--hash=medium", "--hash=long"])
        .assert()
        .success();
    run_tool_command(repository_dir.path(), &["--hash=long", "--hash=medium"])
        .assert()
        .code(observed_exit_code(INVALID_OPTIONS))
        .stdout(predicate::str::contains("Invalid 'hash' argument. 'medium'"));

    Ok(())
}

#[rstest]
fn reject_invalid_option_before_writing_custom_output(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_tool_command(
        repository_dir.path(),
        &["--output=out/gen.cs", "--line-ending=unix"],
    )
    .assert()
    .code(observed_exit_code(INVALID_OPTIONS));

    assert!(!repository_dir.path().join("out").exists());

    Ok(())
}
