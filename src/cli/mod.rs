//! CLI module for Neurondoc

mod args;

pub use args::{Args, Command, PathArgs};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging;
use crate::output::{ManifestBuilder, Synthesizer};
use crate::pipeline::Pipeline;
use std::path::Path;
use std::process::ExitCode;

/// Config file picked up from the working directory when `--config` is absent
const DEFAULT_CONFIG: &str = "neurondoc.toml";

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();
    logging::init(args.verbose, args.quiet);

    match execute(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> Result<()> {
    match args.command {
        Command::Generate { paths } => {
            let cfg = load_config(paths)?;
            if !cfg.input.root.exists() {
                return Err(Error::PathNotFound(cfg.input.root));
            }

            let report = Pipeline::new(cfg)
                .with_progress(args.verbose)
                .run()?;

            println!("{}", report.summary());
            if let Some(manifest) = &report.manifest {
                println!("Manifest written to: {}", manifest.display());
            }
            Ok(())
        }

        Command::Document {
            category,
            neuron,
            paths,
        } => {
            let cfg = load_config(paths)?;
            let synthesizer = Synthesizer::new(&cfg.input.root, &cfg.output.docs_dir);
            let report = synthesizer.synthesize(category, &neuron)?;

            for missing in &report.assets_missing {
                println!("Skipped missing asset: {}", missing.display());
            }
            println!("Page written to: {}", report.document.display());
            Ok(())
        }

        Command::Manifest { paths } => {
            let cfg = load_config(paths)?;
            let builder = ManifestBuilder::new(cfg.site.clone())?;
            let report = builder.build(&cfg.output.docs_dir, &cfg.output.manifest)?;

            println!(
                "Manifest written to: {} ({} entries)",
                report.path.display(),
                report.entries
            );
            Ok(())
        }

        Command::Version => {
            println!("neurondoc {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Load the config file (explicit or default) and apply CLI overrides
fn load_config(paths: PathArgs) -> Result<Config> {
    let mut cfg = match &paths.config {
        // An explicitly requested config must load.
        Some(config_path) => Config::load(config_path)?,
        None => Config::load_or_default(Path::new(DEFAULT_CONFIG)),
    };

    cfg.merge_cli(paths.input, paths.output, paths.manifest);
    cfg.validate()?;

    tracing::debug!(
        input = %cfg.input.root.display(),
        docs = %cfg.output.docs_dir.display(),
        manifest = %cfg.output.manifest.display(),
        "configuration loaded"
    );

    Ok(cfg)
}
