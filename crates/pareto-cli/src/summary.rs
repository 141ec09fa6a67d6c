use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pareto_model::{Exclusion, MatchStrategy, ResolvedRecord};

use crate::types::SynthesisReport;

pub fn print_summary(report: &SynthesisReport) {
    let output = &report.output;
    match &report.written {
        Some(written) => {
            println!("Resolved: {}", written.resolved.display());
            println!("Debug: {}", written.debug.display());
        }
        None => println!("Dry run: nothing written to {}", report.output_dir.display()),
    }

    let mut strategies = Table::new();
    strategies.set_header(vec![header_cell("Strategy"), header_cell("Models")]);
    apply_summary_table_style(&mut strategies);
    align_column(&mut strategies, 1, CellAlignment::Right);
    for (strategy, count) in output.strategy_counts() {
        strategies.add_row(vec![strategy_cell(strategy), count_cell(count, Color::Reset)]);
    }
    for reason in [Exclusion::Free, Exclusion::DefaultEstimate] {
        strategies.add_row(vec![
            dim_cell(format!("excluded: {reason}")),
            count_cell(output.excluded_count(reason), Color::Yellow),
        ]);
    }
    strategies.add_row(vec![
        Cell::new("skipped (malformed)"),
        count_cell(output.skipped.len(), Color::Red),
    ]);
    println!("{strategies}");

    if !output.resolved.is_empty() {
        print_resolved_table(&output.resolved);
    }

    if !output.skipped.is_empty() {
        eprintln!("Skipped entries:");
        for skipped in &output.skipped {
            eprintln!("- {}", skipped.error);
        }
    }
}

fn print_resolved_table(records: &[ResolvedRecord]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Model"),
        header_cell("Score"),
        header_cell("Input"),
        header_cell("Output"),
        header_cell("Provider"),
        header_cell("Votes"),
        header_cell("Matched"),
        header_cell("Strategy"),
    ]);
    apply_summary_table_style(&mut table);
    for index in [1, 2, 3, 5] {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 7, CellAlignment::Center);
    for record in records {
        table.add_row(vec![
            Cell::new(&record.display_name).add_attribute(Attribute::Bold),
            Cell::new(record.score),
            Cell::new(format!("{:.3}", record.input_price)),
            Cell::new(format!("{:.3}", record.output_price)),
            Cell::new(&record.provider),
            Cell::new(record.votes),
            dim_cell(&record.matched_catalog_name),
            strategy_cell(record.strategy),
        ]);
    }
    println!();
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn strategy_cell(strategy: MatchStrategy) -> Cell {
    let cell = Cell::new(strategy.as_str());
    match strategy {
        MatchStrategy::Exact | MatchStrategy::Normalized => cell.fg(Color::Green),
        MatchStrategy::Fuzzy => cell.fg(Color::Yellow),
        MatchStrategy::NoMatch => cell.fg(Color::Red).add_attribute(Attribute::Bold),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
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
