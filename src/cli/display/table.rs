//! Table rendering for CLI output

use super::{ColorTheme, StatusIcon};
use crate::infrastructure::kubernetes::resources::{template_path, ResourceKind};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use std::path::{Path, PathBuf};

/// Template lookup result for one resource kind
#[derive(Debug, Clone)]
pub struct TemplateInfo {
    pub kind: ResourceKind,
    pub path: PathBuf,
    pub found: bool,
}

impl TemplateInfo {
    /// Probe the expected template file for every kind.
    pub fn scan(base_path: &Path, resource_name: &str) -> Vec<TemplateInfo> {
        ResourceKind::ALL
            .iter()
            .map(|&kind| {
                let path = template_path(base_path, resource_name, kind);
                let found = path.is_file();
                TemplateInfo { kind, path, found }
            })
            .collect()
    }
}

/// Table renderer for formatted output
pub struct TableRenderer {
    theme: ColorTheme,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    /// Create a new table renderer with default theme
    pub fn new() -> Self {
        Self {
            theme: ColorTheme::default(),
        }
    }

    /// Render template lookup results as a formatted table
    pub fn render_templates_list(&self, resource_name: &str, templates: &[TemplateInfo]) -> String {
        if templates.is_empty() {
            return format!("No templates checked for '{}'", resource_name);
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("KIND").set_alignment(CellAlignment::Left),
                Cell::new("OBJECT").set_alignment(CellAlignment::Left),
                Cell::new("TEMPLATE").set_alignment(CellAlignment::Left),
                Cell::new("STATUS").set_alignment(CellAlignment::Center),
            ]);

        for info in templates {
            let color = self.theme.get_template_color(info.found);
            table.add_row(vec![
                Cell::new(info.kind.as_str()),
                Cell::new(info.kind.object_kind()).fg(self.theme.info),
                Cell::new(info.path.display().to_string()).fg(self.theme.muted),
                Cell::new(format!(
                    "{} {}",
                    StatusIcon::get_template_icon(info.found),
                    StatusIcon::get_status_text(info.found)
                ))
                .fg(color),
            ]);
        }

        let found = templates.iter().filter(|t| t.found).count();

        let mut output = String::new();
        output.push_str(&format!(
            "╭─ Templates for '{}' {} ─╮\n",
            resource_name,
            format!("[{}/{} found]", found, templates.len()).bright_black()
        ));
        output.push_str(&table.to_string());
        output.push('\n');
        output.push_str(&format!(
            "Legend: {} Found  {} Missing\n",
            StatusIcon::SUCCESS.green(),
            StatusIcon::ERROR.red()
        ));

        output
    }
}
