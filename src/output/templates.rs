// Template engine for the MkDocs base configuration

use crate::config::SiteConfig;
use crate::error::Result;
use std::collections::HashMap;
use tera::{Context, Tera, Value};

const MKDOCS_TEMPLATE: &str = "mkdocs.yml";

const MKDOCS_BASE: &str = r##"site_name: {{ site.name | yaml_str }}
theme:
  name: material
  logo: {{ site.logo | yaml_str }}
  palette:
    primary: {{ site.primary_color | yaml_str }}
    accent: {{ site.accent_color | yaml_str }}
extra:
  social:{% if not site.social %} []{% endif %}
{%- for s in site.social %}
    - icon: {{ s.icon | yaml_str }}
      link: {{ s.link | yaml_str }}
{%- endfor %}
repo_name: {{ site.repo_name | yaml_str }}
repo_url: {{ site.repo_url | yaml_str }}
markdown_extensions:
  - toc:
      permalink: "#"
  - codehilite
  - admonition
  - pymdownx.superfences
  - pymdownx.tabbed
plugins:
  - search
  - git-revision-date-localized:
      type: datetime
  - awesome-pages:
      filename: .md
extra_css:
  - css/pdf.css
"##;

/// Template engine wrapping Tera with the embedded manifest template
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Create a new template engine with embedded templates
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(MKDOCS_TEMPLATE, MKDOCS_BASE)?;
        tera.register_filter("yaml_str", yaml_str);
        Ok(Self { tera })
    }

    /// Render the static part of the MkDocs configuration
    pub fn render_base(&self, site: &SiteConfig) -> Result<String> {
        let mut context = Context::new();
        context.insert("site", site);
        Ok(self.tera.render(MKDOCS_TEMPLATE, &context)?)
    }
}

/// Quote a value as a YAML scalar. JSON strings are valid YAML.
fn yaml_str(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };
    let quoted = serde_json::to_string(&s).map_err(|e| tera::Error::msg(e.to_string()))?;
    Ok(Value::String(quoted))
}
