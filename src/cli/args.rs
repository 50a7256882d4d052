//! CLI argument parsing

use crate::neuron::Category;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate MkDocs documentation for analyzers and responders
#[derive(Parser, Debug)]
#[command(name = "neurondoc")]
#[command(about = "Generate MkDocs documentation for analyzers and responders")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Locations shared by every generating command
#[derive(clap::Args, Debug, Default)]
pub struct PathArgs {
    /// Directory holding `analyzers/` and `responders/`
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Documentation root
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// MkDocs configuration file to write
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate every neuron page and the MkDocs manifest
    Generate {
        #[command(flatten)]
        paths: PathArgs,
    },

    /// Generate the page of a single neuron
    Document {
        /// Neuron category (analyzers or responders)
        category: Category,

        /// Neuron directory name
        neuron: String,

        #[command(flatten)]
        paths: PathArgs,
    },

    /// Rebuild the MkDocs manifest from existing pages
    Manifest {
        #[command(flatten)]
        paths: PathArgs,
    },

    /// Show version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_defaults() {
        let args = Args::try_parse_from(["neurondoc", "generate"]).unwrap();
        match args.command {
            Command::Generate { paths } => {
                assert!(paths.input.is_none());
                assert!(paths.output.is_none());
                assert!(paths.manifest.is_none());
                assert!(paths.config.is_none());
            }
            _ => panic!("Expected Generate command"),
        }
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_generate_with_options() {
        let args = Args::try_parse_from([
            "neurondoc", "generate",
            "--input", "./neurons",
            "--output", "/tmp/docs",
            "--manifest", "/tmp/mkdocs.yml",
            "--config", "custom.toml",
            "--verbose",
        ])
        .unwrap();

        match args.command {
            Command::Generate { paths } => {
                assert_eq!(paths.input, Some(PathBuf::from("./neurons")));
                assert_eq!(paths.output, Some(PathBuf::from("/tmp/docs")));
                assert_eq!(paths.manifest, Some(PathBuf::from("/tmp/mkdocs.yml")));
                assert_eq!(paths.config, Some(PathBuf::from("custom.toml")));
            }
            _ => panic!("Expected Generate command"),
        }
        assert!(args.verbose);
    }

    #[test]
    fn test_document_command() {
        let args = Args::try_parse_from(["neurondoc", "document", "responders", "Mailer"]).unwrap();
        match args.command {
            Command::Document { category, neuron, .. } => {
                assert_eq!(category, Category::Responders);
                assert_eq!(neuron, "Mailer");
            }
            _ => panic!("Expected Document command"),
        }
    }

    #[test]
    fn test_document_rejects_unknown_category() {
        let result = Args::try_parse_from(["neurondoc", "document", "dev_guides", "X"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        let result = Args::try_parse_from(["neurondoc", "manifest", "-v", "-q"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_version_command() {
        let args = Args::try_parse_from(["neurondoc", "version"]).unwrap();
        assert!(matches!(args.command, Command::Version));
    }
}
