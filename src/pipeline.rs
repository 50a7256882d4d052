// Full documentation run
//
// Prepares the category output directories, writes a page for every neuron
// of every category, and only then builds the manifest from the docs tree.

use crate::config::Config;
use crate::error::Result;
use crate::neuron::{discover_neurons, prepare_output, Category, NeuronDir};
use crate::output::{ManifestBuilder, Synthesizer};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// Summary of a documentation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub documents: usize,
    pub descriptors: usize,
    pub assets_copied: usize,
    pub assets_missing: usize,
    pub nav_entries: usize,
    pub manifest: Option<PathBuf>,
}

impl RunReport {
    pub fn summary(&self) -> String {
        format!(
            "Generated {} pages from {} descriptors, assets: {} copied, {} missing, nav entries: {}",
            self.documents,
            self.descriptors,
            self.assets_copied,
            self.assets_missing,
            self.nav_entries
        )
    }
}

/// Orchestrates page synthesis and manifest generation
pub struct Pipeline {
    config: Config,
    progress: bool,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            progress: false,
        }
    }

    /// Show a progress bar while writing pages
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Write every neuron page. The manifest is left untouched.
    pub fn generate_documents(&self) -> Result<RunReport> {
        let input = &self.config.input.root;
        let docs = &self.config.output.docs_dir;
        let synthesizer = Synthesizer::new(input, docs);

        let mut neurons: Vec<NeuronDir> = Vec::new();
        for category in Category::ALL {
            prepare_output(docs, category)?;
            neurons.extend(discover_neurons(input, category)?);
        }
        tracing::info!(neurons = neurons.len(), "generating pages into {}", docs.display());

        let progress = self.progress_bar(neurons.len());
        let mut report = RunReport::default();

        for neuron in &neurons {
            if let Some(pb) = &progress {
                pb.set_message(neuron.name.clone());
            }

            let page = synthesizer.synthesize(neuron.category, &neuron.name)?;
            report.documents += 1;
            report.descriptors += page.descriptors;
            report.assets_copied += page.assets_copied;
            report.assets_missing += page.assets_missing.len();

            if let Some(pb) = &progress {
                pb.inc(1);
            }
        }

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        Ok(report)
    }

    /// Write all pages, then the manifest
    pub fn run(&self) -> Result<RunReport> {
        let mut report = self.generate_documents()?;

        let builder = ManifestBuilder::new(self.config.site.clone())?;
        let manifest = builder.build(&self.config.output.docs_dir, &self.config.output.manifest)?;
        report.nav_entries = manifest.entries;
        report.manifest = Some(manifest.path);

        Ok(report)
    }

    fn progress_bar(&self, len: usize) -> Option<ProgressBar> {
        if !self.progress {
            return None;
        }
        let pb = ProgressBar::new(len as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);
        Some(pb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.merge_cli(
            Some(dir.path().join("neurons")),
            Some(dir.path().join("docs")),
            Some(dir.path().join("mkdocs.yml")),
        );
        config
    }

    #[test]
    fn test_run_report_summary() {
        let report = RunReport {
            documents: 3,
            descriptors: 4,
            assets_copied: 2,
            ..Default::default()
        };
        let summary = report.summary();
        assert!(summary.contains("3 pages"));
        assert!(summary.contains("4 descriptors"));
        assert!(summary.contains("2 copied"));
    }

    #[test]
    fn test_generate_documents_creates_category_dirs() {
        let dir = TempDir::new().unwrap();
        let report = Pipeline::new(config_for(&dir)).generate_documents().unwrap();

        assert_eq!(report.documents, 0);
        assert!(dir.path().join("docs/analyzers/assets").is_dir());
        assert!(dir.path().join("docs/responders/assets").is_dir());
    }

    #[test]
    fn test_run_writes_pages_then_manifest() {
        let dir = TempDir::new().unwrap();
        let neurons = dir.path().join("neurons");
        fs::create_dir_all(neurons.join("analyzers/DNS")).unwrap();
        fs::write(neurons.join("analyzers/DNS/DNS.json"), r#"{"name": "DNS"}"#).unwrap();
        fs::create_dir_all(neurons.join("responders/Mailer")).unwrap();
        fs::write(neurons.join("responders/Mailer/Mailer.json"), r#"{"name": "Mailer"}"#)
            .unwrap();
        fs::create_dir_all(dir.path().join("docs/dev_guides")).unwrap();

        let report = Pipeline::new(config_for(&dir)).run().unwrap();

        assert_eq!(report.documents, 2);
        assert_eq!(report.nav_entries, 2);
        assert_eq!(report.manifest, Some(dir.path().join("mkdocs.yml")));
        assert!(dir.path().join("docs/analyzers/DNS.md").exists());
        assert!(dir.path().join("docs/responders/Mailer.md").exists());
    }

    #[test]
    fn test_run_without_dev_guides_fails_after_pages() {
        let dir = TempDir::new().unwrap();
        let neurons = dir.path().join("neurons");
        fs::create_dir_all(neurons.join("analyzers/DNS")).unwrap();

        let result = Pipeline::new(config_for(&dir)).run();

        assert!(result.is_err());
        assert!(dir.path().join("docs/analyzers/DNS.md").exists());
        assert!(!dir.path().join("mkdocs.yml").exists());
    }
}
