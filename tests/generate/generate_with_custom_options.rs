use crate::common::command::{git_head_hash, repository_dir, run_tool_command};
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Word;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn generate_internal_class_in_tab_indented_namespace(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let head = git_head_hash(repository_dir.path(), false);

    run_tool_command(
        repository_dir.path(),
        &[
            "--hash=short",
            "--namespace=Acme.Build",
            "--class=GitHash",
            "--access-modifier=internal",
            "--indent=tabs",
            "--indent-size=1",
            "--line-ending=lf",
        ],
    )
    .assert()
    .success();

    let generated = std::fs::read_to_string(repository_dir.path().join("GitCommitHash.cs"))?;
    let expected = format!(
        "using System;\n\
         \n\
         namespace Acme.Build\n\
         {{\n\
         \t/// <summary>\n\
         \t/// Stores the git commit hash of the current HEAD of your local repository.\n\
         \t/// </summary>\n\
         \tinternal static class GitHash\n\
         \t{{\n\
         \t\t/// <summary>\n\
         \t\t/// Gets the git commit hash.\n\
         \t\t/// </summary>\n\
         \t\tpublic static string Value\n\
         \t\t{{\n\
         \t\t\tget {{ return \"{head}\"; }}\n\
         \t\t}}\n\
         \t}}\n\
         }}\n"
    );
    assert_eq!(generated, expected);

    Ok(())
}

#[rstest]
fn generate_long_hash_with_crlf_using_aliases(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let head = git_head_hash(repository_dir.path(), true);

    run_tool_command(
        repository_dir.path(),
        &[
            "--hash=LONG",
            "--ns=Acme",
            "--indenting=Space",
            "--indenting-size=2",
            "--line-ending=CRLF",
        ],
    )
    .assert()
    .success();

    let generated = std::fs::read_to_string(repository_dir.path().join("GitCommitHash.cs"))?;

    assert!(generated.contains(&format!("      get {{ return \"{head}\"; }}\r\n")));
    assert!(generated.contains("\r\nnamespace Acme\r\n{\r\n  /// <summary>\r\n"));
    assert!(generated.contains("  public static class GitCommitHash\r\n"));
    assert_eq!(generated.matches('\n').count(), generated.matches("\r\n").count());
    assert!(generated.ends_with("}\r\n"));

    Ok(())
}

#[rstest]
fn generate_with_values_given_as_separate_arguments(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let class_name = format!("{}Hash", Word().fake::<String>());

    run_tool_command(
        repository_dir.path(),
        &["--class", &class_name, "--indent-size", "0"],
    )
    .assert()
    .success();

    let generated = std::fs::read_to_string(repository_dir.path().join("GitCommitHash.cs"))?;

    assert!(generated.contains(&format!("\npublic static class {class_name}\n{{\n/// <summary>\n")));
    assert!(generated.lines().all(|line| !line.starts_with(' ')));

    Ok(())
}
