use anyhow::Context;
use clap::Parser;
use clap::error::{ContextKind, ErrorKind};
use colored::Colorize;
use git_commit_hash::areas::generator::Generator;
use git_commit_hash::artifacts::options::generator_options::GeneratorOptions;
use git_commit_hash::errors::{GenerateError, INVALID_OPTIONS_EXIT_CODE};
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "git-commit-hash",
    version,
    args_override_self = true,
    about = "Generate a C# class exposing the current git commit hash",
    long_about = "Reads the hash of the latest commit of the git repository in the current \
    directory and writes a C# source file with a static class exposing it as a constant. \
    Meant to run as a pre-build step.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(long, visible_alias = "ns", value_name = "NAME", help = "Namespace wrapping the class")]
    namespace: Option<String>,
    #[arg(long, value_name = "NAME", help = "Name of the class [default: GitCommitHash]")]
    class: Option<String>,
    #[arg(long, value_name = "PATH", help = "Output file [default: GitCommitHash.cs]")]
    output: Option<String>,
    #[arg(long, value_name = "short|long", help = "Abbreviated or full commit hash")]
    hash: Option<String>,
    #[arg(long = "access-modifier", value_name = "public|internal", help = "Class visibility")]
    access_modifier: Option<String>,
    #[arg(
        long = "indent",
        visible_alias = "indenting",
        value_name = "space|spaces|tab|tabs",
        help = "Indentation character"
    )]
    indent: Option<String>,
    #[arg(
        long = "indent-size",
        visible_alias = "indenting-size",
        value_name = "SIZE",
        help = "Indentation characters per nesting level [default: 4]"
    )]
    indent_size: Option<String>,
    #[arg(long = "line-ending", value_name = "crlf|lf", help = "Line terminator [default: lf]")]
    line_ending: Option<String>,
    #[arg(
        long,
        value_name = "SECONDS",
        help = "Give up on git after this many seconds, 0 waits forever"
    )]
    timeout: Option<String>,
}

impl Cli {
    /// Supplied options as `key=value` pairs, in declaration order
    fn option_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("namespace", &self.namespace),
            ("class", &self.class),
            ("output", &self.output),
            ("hash", &self.hash),
            ("access-modifier", &self.access_modifier),
            ("indent", &self.indent),
            ("indent-size", &self.indent_size),
            ("line-ending", &self.line_ending),
            ("timeout", &self.timeout),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|value| (key, value)))
        .collect()
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let code = match run().await {
        Ok(()) => 0,
        Err(code) => code,
    };

    std::process::exit(code);
}

async fn run() -> Result<(), i32> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return Err(report_cli_error(err)),
    };

    let options = GeneratorOptions::try_from_pairs(cli.option_pairs()).map_err(report)?;

    let pwd = std::env::current_dir()
        .context("cannot read the current directory")
        .map_err(|err| report(err.into()))?;

    Generator::new(&pwd)
        .generate(&options)
        .await
        .map(|_| ())
        .map_err(report)
}

fn report(error: GenerateError) -> i32 {
    tracing::debug!(error = ?error, "generation failed");
    println!("{}", error.to_string().red());
    error.exit_code()
}

fn report_cli_error(err: clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            0
        }
        ErrorKind::UnknownArgument => {
            let argument = err
                .get(ContextKind::InvalidArg)
                .map(|arg| option_key(&arg.to_string()).to_string())
                .unwrap_or_default();
            report(GenerateError::UnknownOption(argument))
        }
        _ => {
            println!("{}", err.render().to_string().trim_end().red());
            INVALID_OPTIONS_EXIT_CODE
        }
    }
}

/// Bare key of a command-line argument: `--color=red` becomes `color`
fn option_key(argument: &str) -> &str {
    let argument = argument.trim_start_matches('-');
    argument
        .split_once('=')
        .map_or(argument, |(key, _)| key)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}
