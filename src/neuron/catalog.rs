// Discovery of neurons and their descriptors on disk
//
// Listing order is always sorted so repeated runs produce identical output
// regardless of the underlying filesystem.

use crate::error::Result;
use crate::neuron::Category;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Name of the asset directory inside each category output directory
pub const ASSETS_DIR: &str = "assets";

/// Optional neuron overview, rendered as an abstract callout
pub const README_FILE: &str = "README.md";

/// Optional developer notes, rendered as a tip callout
pub const NOTES_FILE: &str = "notes.md";

/// A neuron directory under one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeuronDir {
    pub category: Category,
    pub name: String,
    pub path: PathBuf,
}

impl NeuronDir {
    /// Locate a neuron by name beneath the input root
    pub fn new(input_root: &Path, category: Category, name: &str) -> Self {
        Self {
            category,
            name: name.to_string(),
            path: input_root.join(category.dir_name()).join(name),
        }
    }

    /// Descriptor files of this neuron, sorted by file name
    pub fn descriptors(&self) -> Result<Vec<PathBuf>> {
        descriptor_files(&self.path)
    }

    /// Contents of an optional text file in the neuron directory
    pub fn read_optional(&self, file_name: &str) -> Result<Option<String>> {
        let path = self.path.join(file_name);
        if !path.is_file() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }
}

/// List neuron directories of a category, sorted by name.
///
/// A missing category directory is not an error: it simply has no neurons.
pub fn discover_neurons(input_root: &Path, category: Category) -> Result<Vec<NeuronDir>> {
    let category_dir = input_root.join(category.dir_name());
    if !category_dir.is_dir() {
        tracing::debug!(path = %category_dir.display(), "no {} directory, skipping", category);
        return Ok(Vec::new());
    }

    let mut neurons = Vec::new();
    for entry in WalkDir::new(&category_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        neurons.push(NeuronDir {
            category,
            name,
            path: entry.into_path(),
        });
    }

    Ok(neurons)
}

/// JSON descriptor files directly inside a neuron directory, sorted by name
pub fn descriptor_files(neuron_dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/*.json",
        glob::Pattern::escape(&neuron_dir.to_string_lossy())
    );

    let mut files = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry.map_err(glob::GlobError::into_error)?;
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Create `<docs_root>/<category>/assets`, returning the category directory
pub fn prepare_output(docs_root: &Path, category: Category) -> Result<PathBuf> {
    let category_dir = docs_root.join(category.dir_name());
    fs::create_dir_all(category_dir.join(ASSETS_DIR))?;
    Ok(category_dir)
}

/// File name up to its first dot (`DShield_lookup.json` -> `DShield_lookup`)
pub fn leading_stem(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}
