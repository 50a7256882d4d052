// In-memory documentation page
//
// A page is assembled as a list of blocks and serialized to Markdown once.
// Callouts use the MkDocs admonition syntax, whose body must be indented by
// four spaces on every line.

/// Indentation required for admonition bodies
const CALLOUT_INDENT: &str = "    ";

/// Fallback for any missing scalar
pub const NOT_AVAILABLE: &str = "N/A";

/// Fallback for a configuration item without description
pub const NO_DESCRIPTION: &str = "No description";

/// Shown when a descriptor declares no configuration items
pub const NO_CONFIGURATION: &str = "No specific configuration required.";

/// Shown when an analyzer declares no screenshots
pub const NO_TEMPLATE_SAMPLES: &str = "No template samples to display.";

/// Admonition kinds used on neuron pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutKind {
    Abstract,
    Note,
    Tip,
}

impl CalloutKind {
    fn keyword(self) -> &'static str {
        match self {
            CalloutKind::Abstract => "abstract",
            CalloutKind::Note => "note",
            CalloutKind::Tip => "tip",
        }
    }
}

/// Identity summary of one descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub author: String,
    pub license: String,
    pub version: String,
    pub data_types_label: String,
    pub data_types: Vec<String>,
    pub registration_required: String,
    pub subscription_required: String,
    pub free_subscription: String,
    pub homepage: String,
}

/// A configuration item, already reduced to display text
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigRow {
    pub name: String,
    pub description: String,
    pub default_value: String,
    pub kind: String,
    pub multi: String,
    pub required: String,
}

/// A single block of page content
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: u8, text: String },
    Callout { kind: CalloutKind, title: String, body: String },
    Paragraph(String),
    CenteredImage { src: String, width: u32 },
    InlineImage { caption: String, src: String },
    Identity(Identity),
    ConfigTable(ConfigRow),
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(text.into())
    }

    pub fn callout(kind: CalloutKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Block::Callout {
            kind,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Render this block as Markdown, without trailing newline
    pub fn to_markdown(&self) -> String {
        match self {
            Block::Heading { level, text } => {
                format!("{} {}", "#".repeat(usize::from(*level)), text)
            }
            Block::Callout { kind, title, body } => {
                format!("!!! {} \"{}\"\n{}", kind.keyword(), title, indent_callout(body))
            }
            Block::Paragraph(text) => text.clone(),
            Block::CenteredImage { src, width } => {
                format!("<p align=\"center\"><img src=\"{}\" width=\"{}\" /></p>", src, width)
            }
            Block::InlineImage { caption, src } => format!("![{}]({})", caption, src),
            Block::Identity(identity) => render_identity(identity),
            Block::ConfigTable(row) => render_config_table(row),
        }
    }
}

/// A complete neuron page
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn extend(&mut self, blocks: impl IntoIterator<Item = Block>) {
        self.blocks.extend(blocks);
    }

    /// Headings of the given level, in page order
    pub fn headings(&self, level: u8) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Heading { level: l, text } if *l == level => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Serialize the page. Blocks are separated by one blank line.
    pub fn to_markdown(&self) -> String {
        let mut md = format!("# {}\n", self.title);
        for block in &self.blocks {
            md.push('\n');
            md.push_str(&block.to_markdown());
            md.push('\n');
        }
        md
    }
}

/// Prefix the body and every following line with the admonition indent.
/// Blank lines get the indent too.
pub fn indent_callout(body: &str) -> String {
    let mut out = String::with_capacity(body.len() + CALLOUT_INDENT.len());
    out.push_str(CALLOUT_INDENT);
    out.push_str(&body.replace('\n', &format!("\n{}", CALLOUT_INDENT)));
    out
}

fn render_identity(identity: &Identity) -> String {
    let mut lines = vec![
        format!("**Author**: _{}_", identity.author),
        format!("**License**: _{}_", identity.license),
        format!("**Version**: _{}_", identity.version),
        format!("**{}**:", identity.data_types_label),
    ];
    for data_type in &identity.data_types {
        lines.push(format!("  - {}", data_type));
    }
    lines.push(format!(
        "**Registration required**: _{}_",
        identity.registration_required
    ));
    lines.push(format!(
        "**Subscription required**: _{}_",
        identity.subscription_required
    ));
    lines.push(format!("**Free subscription**: _{}_", identity.free_subscription));
    lines.push(format!(
        "**Third party service**: [{}]({})",
        identity.homepage, identity.homepage
    ));

    // Trailing double space keeps each entry on its own line.
    let body = lines.join("  \n");
    format!("!!! {} \"\"\n{}", CalloutKind::Note.keyword(), indent_callout(&body))
}

fn render_config_table(row: &ConfigRow) -> String {
    let rows = [
        (format!("**{}**", row.name), row.description.clone()),
        (
            "**Default value if not configured**".to_string(),
            format!("_{}_", row.default_value),
        ),
        (
            "**Type of the configuration item**".to_string(),
            format!("_{}_", row.kind),
        ),
        (
            "**The configuration item can contain multiple values**".to_string(),
            format!("_{}_", row.multi),
        ),
        ("**Is required**".to_string(), format!("_{}_", row.required)),
    ];

    let mut lines = Vec::with_capacity(rows.len() + 1);
    for (i, (label, value)) in rows.iter().enumerate() {
        lines.push(format!("| {} | {} |", table_cell(label), table_cell(value)));
        if i == 0 {
            lines.push("| :--- | :--- |".to_string());
        }
    }
    lines.join("\n")
}

/// Keep a value inside its table cell
fn table_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            author: "Jane".to_string(),
            license: "AGPL-V3".to_string(),
            version: "1.0".to_string(),
            data_types_label: "Supported observables types".to_string(),
            data_types: vec!["domain".to_string(), "fqdn".to_string()],
            registration_required: NOT_AVAILABLE.to_string(),
            subscription_required: "false".to_string(),
            free_subscription: NOT_AVAILABLE.to_string(),
            homepage: NOT_AVAILABLE.to_string(),
        }
    }

    #[test]
    fn test_indent_callout_keeps_blank_lines() {
        assert_eq!(indent_callout("a\n\nb\n"), "    a\n    \n    b\n    ");
    }

    #[test]
    fn test_callout_block() {
        let block = Block::callout(CalloutKind::Abstract, "README", "line one\nline two");
        assert_eq!(
            block.to_markdown(),
            "!!! abstract \"README\"\n    line one\n    line two"
        );
    }

    #[test]
    fn test_tip_callout_keyword() {
        let block = Block::callout(CalloutKind::Tip, "Developer notes", "x");
        assert!(block.to_markdown().starts_with("!!! tip \"Developer notes\""));
    }

    #[test]
    fn test_identity_block() {
        let md = Block::Identity(identity()).to_markdown();
        assert!(md.starts_with("!!! note \"\"\n    **Author**: _Jane_"));
        assert!(md.contains("    **Supported observables types**:  \n      - domain  \n      - fqdn"));
        assert!(md.contains("**Registration required**: _N/A_"));
        assert!(md.contains("**Subscription required**: _false_"));
        assert!(md.ends_with("**Third party service**: [N/A](N/A)"));
    }

    #[test]
    fn test_config_table() {
        let row = ConfigRow {
            name: "key".to_string(),
            description: "API key | secret".to_string(),
            default_value: NOT_AVAILABLE.to_string(),
            kind: "string".to_string(),
            multi: "false".to_string(),
            required: "true".to_string(),
        };
        let md = Block::ConfigTable(row).to_markdown();
        let lines: Vec<_> = md.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "| **key** | API key \\| secret |");
        assert_eq!(lines[1], "| :--- | :--- |");
        assert_eq!(lines[2], "| **Default value if not configured** | _N/A_ |");
        assert_eq!(lines[5], "| **Is required** | _true_ |");
    }

    #[test]
    fn test_images() {
        let logo = Block::CenteredImage {
            src: "../assets/DNS_logo.png".to_string(),
            width: 150,
        };
        assert_eq!(
            logo.to_markdown(),
            "<p align=\"center\"><img src=\"../assets/DNS_logo.png\" width=\"150\" /></p>"
        );

        let shot = Block::InlineImage {
            caption: "screenshot".to_string(),
            src: "assets/DNS_0.png".to_string(),
        };
        assert_eq!(shot.to_markdown(), "![screenshot](assets/DNS_0.png)");
    }

    #[test]
    fn test_document_serialization() {
        let mut doc = Document::new("DNS");
        doc.push(Block::heading(2, "DNS Lookup"));
        doc.push(Block::heading(3, "Description"));
        doc.push(Block::paragraph("Resolve names."));

        assert_eq!(
            doc.to_markdown(),
            "# DNS\n\n## DNS Lookup\n\n### Description\n\nResolve names.\n"
        );
        assert_eq!(doc.headings(2), vec!["DNS Lookup"]);
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(Document::new("Empty").to_markdown(), "# Empty\n");
    }
}
