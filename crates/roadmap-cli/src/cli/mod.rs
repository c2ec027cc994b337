use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod generate;
pub mod global;

pub use generate::{FormatArg, GenerateArgs};
pub use global::GlobalFlags;

/// Top-level CLI parser for the `roadmap` binary.
#[derive(Debug, Parser)]
#[command(
    name = "roadmap",
    version,
    about = "Sprint roadmap tables from Pivotal Tracker epics"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to ./roadmap.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Fetch projects and write the roadmap document.
    Generate(GenerateArgs),
    /// Print the JSON schema of the `--format json` document.
    Schema,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, FormatArg};

    fn generate_args(argv: &[&str]) -> super::GenerateArgs {
        let cli = Cli::try_parse_from(argv).expect("cli should parse");
        match cli.command {
            Commands::Generate(args) => args,
            Commands::Schema => panic!("expected generate"),
        }
    }

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn projects_split_on_commas_and_trim() {
        let args = generate_args(&["roadmap", "generate", "--projects", "101, 202,303"]);
        assert_eq!(args.project_ids(), &[101, 202, 303]);
    }

    #[test]
    fn blank_project_entries_are_skipped() {
        let args = generate_args(&["roadmap", "generate", "--projects", "1,2,"]);
        assert_eq!(args.project_ids(), &[1, 2]);

        let args = generate_args(&["roadmap", "generate", "--projects", " ,7,, 8 ,"]);
        assert_eq!(args.project_ids(), &[7, 8]);
    }

    #[test]
    fn only_blank_projects_means_no_override() {
        let args = generate_args(&["roadmap", "generate", "--projects", ","]);
        assert!(args.project_ids().is_empty());
    }

    #[test]
    fn non_numeric_project_is_rejected() {
        let parsed = Cli::try_parse_from(["roadmap", "generate", "--projects", "101,abc"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn generate_flags_parse() {
        let args = generate_args(&[
            "roadmap",
            "generate",
            "--token",
            "t0k",
            "--offset",
            "12",
            "-o",
            "out.json",
            "-f",
            "json",
        ]);
        assert_eq!(args.token.as_deref(), Some("t0k"));
        assert_eq!(args.offset, Some(12));
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        assert_eq!(args.format, Some(FormatArg::Json));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["roadmap", "generate", "--verbose", "-c", "alt.toml"])
            .expect("cli should parse");
        let flags = cli.global_flags();
        assert!(flags.verbose);
        assert_eq!(flags.config, Some(PathBuf::from("alt.toml")));
    }

    #[test]
    fn format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["roadmap", "generate", "--format", "xml"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn schema_subcommand_parses() {
        let cli = Cli::try_parse_from(["roadmap", "schema"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Schema));
    }
}
