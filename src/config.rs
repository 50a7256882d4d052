use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub site: SiteConfig,
}

/// Where neuron sources live
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Directory holding the `analyzers/` and `responders/` trees
    pub root: PathBuf,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Documentation root (MkDocs `docs_dir`)
    pub docs_dir: PathBuf,
    /// MkDocs configuration file to (over)write
    pub manifest: PathBuf,
}

/// Site metadata merged into the generated manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub logo: String,
    pub primary_color: String,
    pub accent_color: String,
    pub repo_name: String,
    pub repo_url: String,
    pub social: Vec<SocialLink>,
}

/// A footer social link (`extra.social`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: String,
    pub link: String,
}

impl SocialLink {
    fn new(icon: &str, link: &str) -> Self {
        Self {
            icon: icon.to_string(),
            link: link.to_string(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("./docs"),
            manifest: PathBuf::from("./mkdocs.yml"),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Cortex Neurons documentation".to_string(),
            logo: "images/cortex-logo.png".to_string(),
            primary_color: "blue".to_string(),
            accent_color: "blue".to_string(),
            repo_name: "Cortex-Neurons".to_string(),
            repo_url: "https://github.com/TheHive-Project/Cortex-Analyzers".to_string(),
            social: vec![
                SocialLink::new("fontawesome/solid/home", "https://www.thehive-project.org"),
                SocialLink::new("fontawesome/brands/wordpress", "https://blog.thehive-project.org"),
                SocialLink::new("fontawesome/brands/twitter", "https://twitter.com/TheHive_Project"),
                SocialLink::new("fontawesome/brands/github", "https://github.com/TheHive-Project"),
                SocialLink::new(
                    "fontawesome/brands/gitter",
                    "https://gitter.im/TheHive-Project/TheHive",
                ),
            ],
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file or return defaults
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                if path.exists() {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring unusable config file");
                }
                Self::default()
            }
        }
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(
        &mut self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        manifest: Option<PathBuf>,
    ) {
        if let Some(root) = input {
            self.input.root = root;
        }

        if let Some(out) = output {
            self.output.docs_dir = out;
        }

        if let Some(path) = manifest {
            self.output.manifest = path;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.site.name.trim().is_empty() {
            return Err(Error::config_validation("site name must not be empty"));
        }

        if self.output.docs_dir.as_os_str().is_empty() {
            return Err(Error::config_validation("docs_dir must not be empty"));
        }

        if self.output.manifest.as_os_str().is_empty() {
            return Err(Error::config_validation("manifest path must not be empty"));
        }

        if let Some(link) = self.site.social.iter().find(|s| s.icon.is_empty()) {
            return Err(Error::config_validation(format!(
                "social link {} has no icon",
                link.link
            )));
        }

        Ok(())
    }
}
