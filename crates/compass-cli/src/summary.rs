use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use compass_api::{GenerationSummary, GroupSummary, categories, slugify};
use compass_cli::pipeline::{BuildOutcome, ImportOutcome};
use compass_model::ControlRecord;

pub fn print_import_summary(outcome: &ImportOutcome) {
    println!("Record set: {}", outcome.output.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Standard"),
        header_cell("Source"),
        header_cell("Controls"),
        header_cell("Mappings"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for source in &outcome.report.sources {
        table.add_row(vec![
            standard_cell(source.standard.name()),
            Cell::new(source.path.display()),
            count_cell(source.records),
            count_cell(source.mappings),
        ]);
    }
    table.add_row(vec![
        header_cell("TOTAL"),
        header_cell("All sources"),
        Cell::new(outcome.report.total_records()).add_attribute(Attribute::Bold),
        Cell::new(outcome.report.total_mappings()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_generation_summary(summary: &GenerationSummary) {
    println!("API output: {}", summary.output_dir.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Name"),
        header_cell("Controls"),
        header_cell("Endpoint"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    add_group_rows(&mut table, "standard", &summary.standards);
    add_group_rows(&mut table, "category", &summary.categories);
    println!("{table}");

    let mut totals = Table::new();
    apply_table_style(&mut totals);
    totals.add_row(vec![Cell::new("Total controls"), count_cell(summary.controls)]);
    totals.add_row(vec![Cell::new("Standards"), count_cell(summary.standards.len())]);
    totals.add_row(vec![Cell::new("Categories"), count_cell(summary.categories.len())]);
    totals.add_row(vec![
        Cell::new("Individual control endpoints"),
        count_cell(summary.control_endpoints),
    ]);
    totals.add_row(vec![
        Cell::new("Mapping endpoints"),
        count_cell(summary.mapping_endpoints),
    ]);
    totals.add_row(vec![
        header_cell("Total API files"),
        Cell::new(summary.total_files()).add_attribute(Attribute::Bold),
    ]);
    align_column(&mut totals, 1, CellAlignment::Right);
    println!("{totals}");
}

pub fn print_build_summary(outcome: &BuildOutcome) {
    print_import_summary(&outcome.import);
    println!();
    print_generation_summary(&outcome.generation);
}

pub fn print_search_results(records: &[&ControlRecord]) {
    if records.is_empty() {
        println!("No controls found matching your criteria.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Standard"),
        header_cell("Category"),
        header_cell("Title"),
        header_cell("Mappings"),
    ]);
    apply_table_style(&mut table);
    for record in records {
        table.add_row(vec![
            Cell::new(&record.id).add_attribute(Attribute::Bold),
            standard_cell(&record.standard),
            Cell::new(&record.category),
            Cell::new(&record.title),
            mapping_cell(record),
        ]);
    }
    println!("{table}");
    println!("{} control(s)", records.len());
}

pub fn print_categories(records: &[ControlRecord]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Slug")]);
    apply_table_style(&mut table);
    for category in categories(records) {
        table.add_row(vec![Cell::new(category), dim_cell(slugify(category))]);
    }
    println!("{table}");
}

fn add_group_rows(table: &mut Table, kind: &str, groups: &[GroupSummary]) {
    for group in groups {
        table.add_row(vec![
            dim_cell(kind),
            Cell::new(&group.name),
            count_cell(group.records),
            Cell::new(&group.endpoint),
        ]);
    }
}

fn mapping_cell(record: &ControlRecord) -> Cell {
    let parts: Vec<String> = [
        ("OWASP", &record.mappings.owasp),
        ("ISO27001", &record.mappings.iso27001),
        ("NIST", &record.mappings.nist),
    ]
    .into_iter()
    .filter(|(_, ids)| !ids.is_empty())
    .map(|(label, ids)| format!("{label}: {}", ids.join(", ")))
    .collect();
    if parts.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(parts.join("\n"))
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

fn standard_cell(name: &str) -> Cell {
    let color = match name.to_ascii_uppercase().as_str() {
        "OWASP" => Color::Blue,
        "ISO27001" => Color::Magenta,
        "NIST" => Color::Green,
        _ => Color::White,
    };
    Cell::new(name).fg(color).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
