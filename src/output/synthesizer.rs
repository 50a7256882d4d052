// Neuron page synthesis
//
// Reads one neuron directory, copies its referenced images into the category
// asset directory and assembles the page in memory before a single write to
// `<docs_root>/<category>/<neuron>.md`. Assets are always copied before the
// page referencing them is written.

use crate::error::{Error, Result};
use crate::neuron::{
    leading_stem, value_text, Category, Descriptor, NeuronDir, ASSETS_DIR, NOTES_FILE,
    README_FILE,
};
use crate::output::document::{
    Block, CalloutKind, ConfigRow, Document, Identity, NOT_AVAILABLE, NO_CONFIGURATION,
    NO_DESCRIPTION, NO_TEMPLATE_SAMPLES,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Width hint for service logos
const LOGO_WIDTH: u32 = 150;

/// Caption used when a screenshot declares none
const DEFAULT_CAPTION: &str = "screenshot";

/// Outcome of synthesizing one neuron page
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisReport {
    /// Path of the written page
    pub document: PathBuf,
    pub descriptors: usize,
    pub assets_copied: usize,
    /// Referenced images that did not exist on disk
    pub assets_missing: Vec<PathBuf>,
}

/// Builds neuron pages from an input tree into a docs tree
#[derive(Debug, Clone)]
pub struct Synthesizer {
    input_root: PathBuf,
    docs_root: PathBuf,
}

/// Assets gathered while assembling a page
#[derive(Debug, Default)]
struct AssetTally {
    copied: usize,
    missing: Vec<PathBuf>,
}

impl Synthesizer {
    pub fn new(input_root: impl Into<PathBuf>, docs_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            docs_root: docs_root.into(),
        }
    }

    /// Destination of a neuron page
    pub fn document_path(&self, category: Category, neuron: &str) -> PathBuf {
        self.docs_root
            .join(category.dir_name())
            .join(format!("{}.md", neuron))
    }

    /// Generate and write the page for one neuron
    pub fn synthesize(&self, category: Category, neuron: &str) -> Result<SynthesisReport> {
        let dir = NeuronDir::new(&self.input_root, category, neuron);
        if !dir.path.is_dir() {
            return Err(Error::PathNotFound(dir.path));
        }

        let descriptors = dir.descriptors()?;
        let mut tally = AssetTally::default();
        let document = self.build_document(&dir, &descriptors, &mut tally)?;

        let path = self.document_path(category, neuron);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, document.to_markdown())?;

        tracing::debug!(
            neuron = %neuron,
            category = %category,
            descriptors = descriptors.len(),
            assets = tally.copied,
            "wrote {}",
            path.display()
        );

        Ok(SynthesisReport {
            document: path,
            descriptors: descriptors.len(),
            assets_copied: tally.copied,
            assets_missing: tally.missing,
        })
    }

    fn build_document(
        &self,
        dir: &NeuronDir,
        descriptors: &[PathBuf],
        tally: &mut AssetTally,
    ) -> Result<Document> {
        let mut doc = Document::new(dir.name.as_str());

        if let Some(readme) = dir.read_optional(README_FILE)? {
            doc.push(Block::callout(CalloutKind::Abstract, "README", readme));
        }

        let notes = dir.read_optional(NOTES_FILE)?;

        for path in descriptors {
            let descriptor = Descriptor::load(path)?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            let stem = leading_stem(&file_name);

            doc.push(Block::heading(
                2,
                descriptor.name.as_deref().unwrap_or(NOT_AVAILABLE),
            ));

            if let Some(logo) = descriptor.logo_path() {
                let dest = asset_name(stem, "logo", logo);
                if let Some(rel) = self.copy_asset(dir, logo, &dest, tally)? {
                    doc.push(Block::CenteredImage {
                        src: format!("../{}", rel),
                        width: LOGO_WIDTH,
                    });
                }
            }

            doc.push(Block::Identity(identity(dir.category, &descriptor)));
            doc.extend(description_blocks(&descriptor));
            doc.extend(configuration_blocks(&descriptor));

            if let Some(notes) = &notes {
                doc.push(Block::callout(
                    CalloutKind::Tip,
                    "Developer notes",
                    notes.as_str(),
                ));
            }

            if dir.category.has_template_samples() {
                doc.extend(self.sample_blocks(dir, stem, &descriptor, tally)?);
            }
        }

        Ok(doc)
    }

    fn sample_blocks(
        &self,
        dir: &NeuronDir,
        stem: &str,
        descriptor: &Descriptor,
        tally: &mut AssetTally,
    ) -> Result<Vec<Block>> {
        let mut blocks = vec![Block::heading(3, "Templates samples")];

        if descriptor.screenshots.is_empty() {
            blocks.push(Block::paragraph(NO_TEMPLATE_SAMPLES));
            return Ok(blocks);
        }

        // Indices follow the declared list, so skipped entries leave gaps.
        for (idx, shot) in descriptor.screenshots.iter().enumerate() {
            let dest = asset_name(stem, &idx.to_string(), &shot.path);
            if let Some(rel) = self.copy_asset(dir, &shot.path, &dest, tally)? {
                blocks.push(Block::InlineImage {
                    caption: shot
                        .caption
                        .clone()
                        .unwrap_or_else(|| DEFAULT_CAPTION.to_string()),
                    src: rel,
                });
            }
        }

        Ok(blocks)
    }

    /// Copy an image referenced by a descriptor into the category assets.
    ///
    /// Returns the path relative to the category directory, or `None` when
    /// the source does not exist.
    fn copy_asset(
        &self,
        dir: &NeuronDir,
        source: &str,
        dest_name: &str,
        tally: &mut AssetTally,
    ) -> Result<Option<String>> {
        let src = dir.path.join(source);
        if source.is_empty() || !src.is_file() {
            tracing::warn!(neuron = %dir.name, "referenced asset not found: {}", src.display());
            tally.missing.push(src);
            return Ok(None);
        }

        let assets = self.docs_root.join(dir.category.dir_name()).join(ASSETS_DIR);
        fs::create_dir_all(&assets)?;
        fs::copy(&src, assets.join(dest_name))?;
        tally.copied += 1;

        Ok(Some(format!("{}/{}", ASSETS_DIR, dest_name)))
    }
}

/// `<stem>_<suffix>.<ext>`, keeping the extension of the source file
fn asset_name(stem: &str, suffix: &str, source: &str) -> String {
    match Path::new(source).extension() {
        Some(ext) => format!("{}_{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}_{}", stem, suffix),
    }
}

fn identity(category: Category, d: &Descriptor) -> Identity {
    Identity {
        author: d.author.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        license: d.license.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        version: value_text(d.version.as_ref(), NOT_AVAILABLE),
        data_types_label: category.data_types_label().to_string(),
        data_types: d.data_types.clone(),
        registration_required: value_text(d.registration_required.as_ref(), NOT_AVAILABLE),
        subscription_required: value_text(d.subscription_required.as_ref(), NOT_AVAILABLE),
        free_subscription: value_text(d.free_subscription.as_ref(), NOT_AVAILABLE),
        homepage: d
            .service_homepage
            .clone()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    }
}

fn description_blocks(d: &Descriptor) -> Vec<Block> {
    vec![
        Block::heading(3, "Description"),
        Block::paragraph(d.description.as_deref().unwrap_or(NOT_AVAILABLE)),
    ]
}

fn configuration_blocks(d: &Descriptor) -> Vec<Block> {
    let mut blocks = vec![Block::heading(3, "Configuration")];

    if d.configuration_items.is_empty() {
        blocks.push(Block::paragraph(NO_CONFIGURATION));
        return blocks;
    }

    for item in &d.configuration_items {
        blocks.push(Block::ConfigTable(ConfigRow {
            name: item.name.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            description: item
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            default_value: value_text(item.default_value.as_ref(), NOT_AVAILABLE),
            kind: item.kind.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            multi: value_text(item.multi.as_ref(), NOT_AVAILABLE),
            required: value_text(item.required.as_ref(), NOT_AVAILABLE),
        }));
    }

    blocks
}
