//! Human-readable tables for process results and layouts.

use std::path::PathBuf;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use arules_ingest::IngestSummary;
use arules_layout::Layout;
use arules_model::{Dataset, FieldKind, Item};

/// Print the full post-run summary: counters, transaction preview, item
/// counts, and the files written.
pub fn print_process_summary(
    layout_name: &str,
    summary: IngestSummary,
    dataset: &Dataset,
    outputs: &[PathBuf],
    preview: usize,
) {
    println!("Layout: {layout_name}");
    println!("Records read: {}", summary.records_read);
    println!("Transactions: {}", dataset.count());
    if summary.records_skipped > 0 {
        println!("Skipped records: {}", summary.records_skipped);
    }
    println!("Unique items: {}", dataset.unique_counts().len());
    println!("{}", transactions_table(dataset, preview));
    println!();
    println!("Item counts:");
    println!("{}", counts_table(dataset));
    if !outputs.is_empty() {
        println!();
        println!("Outputs:");
        for path in outputs {
            println!("- {}", path.display());
        }
    }
}

/// Print a validated layout's field table.
pub fn print_layout(layout: &Layout) {
    println!("Layout: {} ({} fields)", layout.name, layout.fields().len());
    println!("{}", layout_table(layout));
}

/// Table of the first `limit` transactions: ID and canonical item list.
pub fn transactions_table(dataset: &Dataset, limit: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("ID"), header_cell("Items")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for transaction in dataset.transactions().iter().take(limit) {
        let items: Vec<&str> = transaction.items.iter().map(Item::as_str).collect();
        table.add_row(vec![
            Cell::new(transaction.id),
            Cell::new(items.join(", ")),
        ]);
    }
    let hidden = dataset.count().saturating_sub(limit);
    if hidden > 0 {
        table.add_row(vec![
            dim_cell("..."),
            dim_cell(format!("{hidden} more transactions")),
        ]);
    }
    table
}

/// Table of every unique item with its occurrence count, in name order.
pub fn counts_table(dataset: &Dataset) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Item"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (item, count) in dataset.unique_counts().iter() {
        table.add_row(vec![Cell::new(item.as_str()), Cell::new(count)]);
    }
    table
}

/// Table of a layout's fields: column, span, encoding, and parameters.
pub fn layout_table(layout: &Layout) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Span"),
        header_cell("Encoding"),
        header_cell("Details"),
    ]);
    apply_table_style(&mut table);
    for field in layout.fields() {
        table.add_row(vec![
            Cell::new(&field.column)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(format!(
                "{}-{} ({})",
                field.span.start,
                field.span.end,
                field.span.width()
            )),
            Cell::new(field.kind.name()),
            Cell::new(kind_details(&field.kind)),
        ]);
    }
    table
}

fn kind_details(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Binary { values } => format!("{} values", values.len()),
        FieldKind::Categorical {
            values,
            others,
            code_range,
        } => {
            let bucket = match others {
                Some(codes) => format!(
                    ", others {{{}}}",
                    codes
                        .iter()
                        .map(|code| code.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
                None => String::new(),
            };
            format!(
                "{} values{bucket}, codes {}..={}",
                values.len(),
                code_range.min,
                code_range.max
            )
        }
        FieldKind::Continuous {
            min,
            max,
            intervals,
        } => format!("min {min}, max {max}, {intervals} intervals"),
    }
}

fn apply_table_style(table: &mut Table) {
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
