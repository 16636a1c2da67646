//! Table and JSON output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color as CellColor, ContentArrangement, Table};
use serde::Serialize;

use sld_model::{Color, Rule, Symbolizer};

/// JSON shape of one rule: the filter is rendered as text.
#[derive(Debug, Serialize)]
pub struct RuleView<'a> {
    pub title: &'a str,
    pub filter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbolizer: Option<&'a Symbolizer>,
}

impl<'a> From<&'a Rule> for RuleView<'a> {
    fn from(rule: &'a Rule) -> Self {
        Self {
            title: &rule.title,
            filter: rule.filter.to_string(),
            symbolizer: rule.symbolizer.as_ref(),
        }
    }
}

pub fn rules_json(rules: &[Rule]) -> serde_json::Result<String> {
    let views: Vec<RuleView<'_>> = rules.iter().map(RuleView::from).collect();
    serde_json::to_string_pretty(&views)
}

pub fn rules_table(rules: &[Rule]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Title"),
        header_cell("Filter"),
        header_cell("Color"),
        header_cell("Outline"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for (index, rule) in rules.iter().enumerate() {
        let (color, outline) = match &rule.symbolizer {
            Some(symbolizer) => (
                swatch_cell(symbolizer.class_color()),
                symbolizer
                    .outline()
                    .map(|stroke| Cell::new(format!("{} {}px", stroke.color, stroke.width)))
                    .unwrap_or_else(|| dim_cell("-")),
            ),
            None => (dim_cell("-"), dim_cell("-")),
        };
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&rule.title),
            Cell::new(rule.filter.to_string()),
            color,
            outline,
        ]);
    }
    table
}

pub fn ramp_table(colors: &[Color]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Color")]);
    apply_table_style(&mut table);
    for (index, color) in colors.iter().enumerate() {
        table.add_row(vec![Cell::new(index + 1), swatch_cell(*color)]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(CellColor::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(value: &str) -> Cell {
    Cell::new(value).add_attribute(Attribute::Dim)
}

fn swatch_cell(color: Color) -> Cell {
    Cell::new(color).fg(CellColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sld_model::Filter;

    #[test]
    fn table_has_one_row_per_rule() {
        let rules = vec![
            Rule::new("a", Filter::Include),
            Rule::new("b", Filter::Include),
        ];
        assert_eq!(rules_table(&rules).row_count(), 2);
    }
}
