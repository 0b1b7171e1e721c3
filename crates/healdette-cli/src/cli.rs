use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Healdette Contributors",
    version,
    about = "Healdette CLI - Ancestry-weighted validation of candidate antibody sequences against population-specific biophysical and binding-motif profiles.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of worker threads for batch validation.
    /// Defaults to the number of available logical cores, and is never allowed to exceed it.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate candidate sequences against a population configuration.
    Validate(ValidateArgs),
    /// Check a population configuration and report every problem found.
    Check(CheckArgs),
    /// Print the ancestry-weighted blended ranges of a population configuration.
    Blend(BlendArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Full results as a JSON array.
    #[default]
    Json,
    /// One summary row per sequence.
    Csv,
}

/// Arguments shared by every command that loads a population configuration.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Path to the population configuration (JSON, or TOML with a `.toml` extension).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub config: PathBuf,

    /// Override the ancestry weight of a population before validation.
    /// Can be used multiple times. Example: -w finnish=0.4
    #[arg(short = 'w', long = "weight", value_name = "NAME=WEIGHT")]
    pub weights: Vec<String>,
}

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(flatten)]
    pub source: SequenceSource,

    /// Validate at most this many candidates, in input order.
    #[arg(short = 'n', long = "count", value_name = "INT")]
    pub count: Option<usize>,

    /// Write results to this file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format for the results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Where candidate sequences come from; exactly one source is required.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct SequenceSource {
    /// File with one sequence per line, or FASTA records.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Sequences given directly on the command line.
    #[arg(short, long = "sequence", value_name = "SEQ", num_args(1..))]
    pub sequences: Vec<String>,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the population configuration (JSON, or TOML with a `.toml` extension).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub config: PathBuf,
}

/// Arguments for the `blend` subcommand.
#[derive(Args, Debug)]
pub struct BlendArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn validate_accepts_inline_sequences_and_overrides() {
        let cli = Cli::parse_from([
            "healdette", "-vv", "validate", "-c", "pops.json", "-s", "WYRF", "KWYF", "-w",
            "finnish=0.4", "-w", "yoruba=0.6", "--format", "csv", "-j", "2",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.threads, Some(2));
        let Commands::Validate(args) = cli.command else {
            panic!("expected validate command");
        };
        assert_eq!(args.source.sequences, vec!["WYRF", "KWYF"]);
        assert!(args.source.input.is_none());
        assert_eq!(args.config.weights, vec!["finnish=0.4", "yoruba=0.6"]);
        assert_eq!(args.format, OutputFormat::Csv);
    }

    #[test]
    fn validate_requires_exactly_one_source() {
        assert!(Cli::try_parse_from(["healdette", "validate", "-c", "pops.json"]).is_err());
        assert!(
            Cli::try_parse_from([
                "healdette", "validate", "-c", "pops.json", "-i", "seqs.txt", "-s", "WY"
            ])
            .is_err()
        );
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["healdette", "-q", "-v", "check", "-c", "a.json"]).is_err());
    }
}
