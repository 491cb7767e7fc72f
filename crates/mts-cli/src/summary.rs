use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mts_export::ExportSummary;
use mts_model::{MimeTypeSettings, SettingId, SettingValue};

/// Columns of the `show` table, after the mime type.
const SHOW_SETTINGS: [SettingId; 7] = [
    SettingId::Enabled,
    SettingId::StoreBinary,
    SettingId::ProcessNamedEntities,
    SettingId::ProcessEmbedded,
    SettingId::ProcessImages,
    SettingId::ProcessText,
    SettingId::TextStrip,
];

pub fn print_export_summary(summary: &ExportSummary) {
    println!("Case: {}", summary.case_name);
    println!("Output: {}", summary.output_dir.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Batch Load"),
        header_cell("Mime Types"),
        header_cell("Disabled"),
        header_cell("JSON"),
        header_cell("CSV"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Center);
    let mut total_types = 0usize;
    let mut total_disabled = 0usize;
    for batch in &summary.batches {
        total_types += batch.mime_types;
        total_disabled += batch.disabled;
        table.add_row(vec![
            Cell::new(&batch.batch_id)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(batch.mime_types),
            count_cell(batch.disabled, Color::Yellow),
            output_cell(batch.json.as_ref()),
            output_cell(batch.csv.as_ref()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_types).add_attribute(Attribute::Bold),
        count_cell(total_disabled, Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");
    println!("{} file(s) written", summary.file_count());
}

pub fn print_batch_settings(batch_id: &str, settings: &MimeTypeSettings) {
    println!("Batch load: {batch_id}");
    if settings.is_empty() {
        println!("  (no mime type settings recorded)");
        return;
    }
    let mut header = vec![header_cell("Mime Type")];
    header.extend(SHOW_SETTINGS.iter().map(|id| header_cell(id.as_str())));
    let mut table = Table::new();
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 1..=SHOW_SETTINGS.len() {
        align_column(&mut table, index, CellAlignment::Center);
    }
    for (mime_type, type_settings) in settings {
        let mut row = vec![Cell::new(mime_type)];
        row.extend(
            SHOW_SETTINGS
                .iter()
                .map(|id| setting_cell(type_settings.get(*id))),
        );
        table.add_row(row);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn setting_cell(value: Option<&SettingValue>) -> Cell {
    match value {
        Some(SettingValue::Bool(true)) => Cell::new("true").fg(Color::Green),
        Some(SettingValue::Bool(false)) => Cell::new("false").fg(Color::Red),
        Some(SettingValue::Raw(raw)) => Cell::new(raw).fg(Color::Yellow),
        None => dim_cell("-"),
    }
}

fn output_cell(path: Option<&PathBuf>) -> Cell {
    match path {
        Some(_) => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
