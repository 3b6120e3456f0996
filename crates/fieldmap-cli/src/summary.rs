use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use fieldmap_model::{CellValue, SourceFields, TransferResponse};

pub fn print_fields(source: &SourceFields) {
    println!("Source: {}", source.path.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Field")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, field) in source.fields.iter().enumerate() {
        table.add_row(vec![dim_cell(index + 1), Cell::new(field)]);
    }
    println!("{table}");
    println!("{} field(s)", source.fields.len());
}

pub fn print_preview(field: &str, values: &[CellValue]) {
    println!("{}", preview_table(field, values));
    if values.is_empty() {
        println!("No data rows.");
    }
}

/// One-column preview of `field`, headed `Source: <field>`.
fn preview_table(field: &str, values: &[CellValue]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(&format!("Source: {field}"))]);
    apply_table_style(&mut table);
    for value in values {
        table.add_row(vec![value_cell(value)]);
    }
    table
}

pub fn print_transfer(response: &TransferResponse) {
    if response.is_success() {
        println!("{}", response.message());
    } else if response.is_cancelled() {
        eprintln!("{}", response.message());
    } else {
        eprintln!("error: {}", response.message());
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: &CellValue) -> Cell {
    match value {
        CellValue::Empty => dim_cell("-"),
        CellValue::Number(_) => Cell::new(value).set_alignment(CellAlignment::Right),
        _ => Cell::new(value),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
