use crate::bio::{BioField, BioTemplate, CharacterReport};
use crate::raster::SizePreset;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};

const PREVIEW_WIDTH: usize = 48;

pub struct TableDisplay {
    use_colors: bool,
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TableDisplay {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn bold_header(&self, text: &str, color: Color) -> Cell {
        if self.use_colors {
            Cell::new(text).add_attribute(Attribute::Bold).fg(color)
        } else {
            Cell::new(text).add_attribute(Attribute::Bold)
        }
    }

    fn colored_cell(&self, text: &str, color: Color) -> Cell {
        if self.use_colors {
            Cell::new(text).fg(color)
        } else {
            Cell::new(text)
        }
    }

    fn new_table(&self, headers: &[&str]) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        let cells: Vec<Cell> = headers
            .iter()
            .map(|h| self.bold_header(h, Color::Cyan))
            .collect();
        table.set_header(cells);
        table
    }

    /// One row per platform with the limit and whether the bio fits.
    pub fn render_character_report(&self, report: &CharacterReport) -> String {
        let mut table = self.new_table(&["Platform", "Limit", "Length", "Status"]);
        for check in &report.checks {
            let status = if check.exceeds {
                self.colored_cell("over limit", Color::Red)
            } else {
                self.colored_cell("ok", Color::Green)
            };
            table.add_row(vec![
                Cell::new(&check.platform),
                Cell::new(check.max_chars.to_string()),
                Cell::new(report.length.to_string()),
                status,
            ]);
        }
        table.to_string()
    }

    pub fn render_templates(&self, templates: &[BioTemplate]) -> String {
        let mut table = self.new_table(&["ID", "Name", "Template"]);
        for template in templates {
            let flattened = template.template.replace('\n', " ⏎ ");
            table.add_row(vec![
                self.colored_cell(&template.id, Color::Cyan),
                Cell::new(&template.name),
                self.colored_cell(&truncate(&flattened, PREVIEW_WIDTH), Color::DarkGrey),
            ]);
        }
        table.to_string()
    }

    /// Fields a template can reference, with sample input.
    pub fn render_fields(&self, fields: &[BioField]) -> String {
        let mut table = self.new_table(&["Field", "Placeholder", "Example"]);
        for field in fields {
            table.add_row(vec![
                Cell::new(field.label()),
                self.colored_cell(&format!("{{{{{}}}}}", field.key()), Color::Cyan),
                self.colored_cell(field.example(), Color::DarkGrey),
            ]);
        }
        table.to_string()
    }

    pub fn render_presets(&self, size_presets: &[SizePreset]) -> String {
        let mut table = self.new_table(&["Preset", "Slug", "Width", "Height"]);
        for preset in size_presets {
            table.add_row(vec![
                self.colored_cell(preset.name, Color::Cyan),
                Cell::new(preset.slug()),
                Cell::new(preset.width.to_string()),
                Cell::new(preset.height.to_string()),
            ]);
        }
        table.to_string()
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}
