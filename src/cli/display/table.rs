//! Table rendering for CLI output

use super::{ColorTheme, StatusIcon};
use crate::domain::definition::ResourceKind;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};

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

    /// Render resource names of one kind as a formatted table
    pub fn render_resource_list(
        &self,
        kind: ResourceKind,
        namespace: &str,
        names: &[String],
    ) -> String {
        if names.is_empty() {
            return format!("No {} resources found in namespace {}", kind, namespace);
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("NAME").set_alignment(CellAlignment::Left),
                Cell::new("KIND").set_alignment(CellAlignment::Left),
                Cell::new("NAMESPACE").set_alignment(CellAlignment::Left),
            ]);

        let kind_color = self.theme.get_kind_color(kind);
        for name in names {
            table.add_row(vec![
                Cell::new(name),
                Cell::new(format!("{} {}", StatusIcon::get_kind_icon(kind), kind)).fg(kind_color),
                Cell::new(namespace).fg(self.theme.muted),
            ]);
        }

        let mut output = String::new();
        output.push_str(&format!(
            "╭─ {} resources {} ─╮\n",
            kind,
            format!("[{} found]", names.len()).bright_black()
        ));
        output.push_str(&table.to_string());
        output.push('\n');
        output
    }

    /// Render the outcome of a single name lookup
    pub fn render_lookup(&self, kind: ResourceKind, namespace: &str, name: &str, found: bool) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        let status = if found { "Found" } else { "Not found" };
        table.add_row(vec![
            Cell::new(format!("{} {}", StatusIcon::get_kind_icon(kind), kind))
                .fg(self.theme.get_kind_color(kind)),
            Cell::new(format!("{}/{}", namespace, name)),
            Cell::new(format!("{} {}", StatusIcon::get_presence_icon(found), status))
                .fg(self.theme.get_presence_color(found)),
        ]);

        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_list() {
        let renderer = TableRenderer::new();
        let output = renderer.render_resource_list(ResourceKind::Workload, "default", &[]);
        assert!(output.contains("No Deployment resources found"));
    }

    #[test]
    fn test_render_names() {
        let renderer = TableRenderer::new();
        let names = vec!["vnf-web".to_string(), "vnf-db".to_string()];

        let output = renderer.render_resource_list(ResourceKind::Service, "ns1", &names);
        assert!(output.contains("vnf-web"));
        assert!(output.contains("vnf-db"));
        assert!(output.contains("ns1"));
        assert!(output.contains("Service"));
    }

    #[test]
    fn test_render_lookup() {
        let renderer = TableRenderer::new();
        let output = renderer.render_lookup(ResourceKind::Workload, "default", "vnf-web", false);
        assert!(output.contains("default/vnf-web"));
        assert!(output.contains("Not found"));
    }
}
