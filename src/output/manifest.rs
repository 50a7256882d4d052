// MkDocs manifest generation
//
// Scans the generated docs tree and writes `mkdocs.yml`: the static site
// configuration plus a `nav` tree with one entry per generated page. Every
// section directory must exist; a missing one aborts the build.

use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::neuron::{leading_stem, Category, ASSETS_DIR};
use crate::output::templates::TemplateEngine;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Hand-written developer guides, listed after the neuron sections
pub const DEV_GUIDES_DIR: &str = "dev_guides";

/// A navigation section backed by a directory of the docs root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Neurons(Category),
    DevGuides,
}

impl Section {
    /// Sections in navigation order
    pub const ALL: [Section; 3] = [
        Section::Neurons(Category::Analyzers),
        Section::Neurons(Category::Responders),
        Section::DevGuides,
    ];

    pub fn dir_name(self) -> &'static str {
        match self {
            Section::Neurons(category) => category.dir_name(),
            Section::DevGuides => DEV_GUIDES_DIR,
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Neurons(category) => category.nav_label(),
            Section::DevGuides => "Developers guides",
        }
    }
}

/// One page in the navigation: display key and path relative to the docs root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub key: String,
    pub path: String,
}

/// Navigation entries grouped by section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub section: Section,
    pub entries: Vec<NavEntry>,
}

/// What was written by a manifest build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestReport {
    pub path: PathBuf,
    pub entries: usize,
}

/// List a section directory, sorted by file name, skipping the asset directory
/// and hidden files.
pub fn collect_section(docs_root: &Path, section: Section) -> Result<Vec<NavEntry>> {
    let dir = docs_root.join(section.dir_name());
    if !dir.is_dir() {
        return Err(Error::MissingSection(dir));
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(&dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name == ASSETS_DIR || name.starts_with('.') {
            continue;
        }
        entries.push(NavEntry {
            key: leading_stem(&name).to_string(),
            path: format!("{}/{}", section.dir_name(), name),
        });
    }

    Ok(entries)
}

/// Builds the MkDocs configuration from site metadata and the docs tree
pub struct ManifestBuilder {
    site: SiteConfig,
    templates: TemplateEngine,
}

impl ManifestBuilder {
    pub fn new(site: SiteConfig) -> Result<Self> {
        Ok(Self {
            site,
            templates: TemplateEngine::new()?,
        })
    }

    /// Collect every section in navigation order
    pub fn navigation(&self, docs_root: &Path) -> Result<Vec<NavSection>> {
        Section::ALL
            .iter()
            .map(|&section| {
                Ok(NavSection {
                    section,
                    entries: collect_section(docs_root, section)?,
                })
            })
            .collect()
    }

    /// Render the complete manifest as YAML
    pub fn render(&self, docs_root: &Path) -> Result<String> {
        let nav = self.navigation(docs_root)?;
        self.render_with(&nav)
    }

    fn render_with(&self, nav: &[NavSection]) -> Result<String> {
        let base = self.templates.render_base(&self.site)?;
        let mut manifest: Value = serde_yaml::from_str(&base)?;
        let mapping = manifest
            .as_mapping_mut()
            .ok_or_else(|| Error::other("manifest base is not a mapping"))?;
        mapping.insert(Value::from("nav"), nav_value(nav));
        Ok(serde_yaml::to_string(&manifest)?)
    }

    /// Write the manifest, replacing any existing file
    pub fn build(&self, docs_root: &Path, manifest_path: &Path) -> Result<ManifestReport> {
        let nav = self.navigation(docs_root)?;
        let yaml = self.render_with(&nav)?;

        if let Some(parent) = manifest_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(manifest_path, yaml)?;

        let entries = nav.iter().map(|s| s.entries.len()).sum();
        tracing::info!(entries, "wrote manifest {}", manifest_path.display());

        Ok(ManifestReport {
            path: manifest_path.to_path_buf(),
            entries,
        })
    }
}

fn single(key: &str, value: Value) -> Value {
    let mut map = Mapping::new();
    map.insert(Value::from(key), value);
    Value::Mapping(map)
}

/// Home, one group per section, then the fixed trailing pages
fn nav_value(nav: &[NavSection]) -> Value {
    let mut items = vec![single("Home", Value::from("README.md"))];

    for group in nav {
        let entries = group
            .entries
            .iter()
            .map(|e| single(&e.key, Value::from(e.path.as_str())))
            .collect();
        items.push(single(group.section.nav_label(), Value::Sequence(entries)));
    }

    items.push(single("Changelog", Value::from("CHANGELOG.md")));
    items.push(single("Code of Conduct", Value::from("code_of_conduct.md")));
    Value::Sequence(items)
}
