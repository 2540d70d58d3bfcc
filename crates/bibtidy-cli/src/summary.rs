use std::cmp::Ordering;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use bibtidy_model::{Warning, WarningKind};

use crate::types::CleanResult;

pub fn print_summary(result: &CleanResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None if result.dry_run => println!("Output: (dry run, nothing written)"),
        None => {}
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Changed"),
        header_cell("Detail"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Journals"),
        count_cell(result.journals_replaced, Color::Green),
        Cell::new("names replaced with CASSI abbreviations"),
    ]);
    table.add_row(vec![
        Cell::new("Titles"),
        count_cell(result.titles_rewritten, Color::Green),
        Cell::new("titles recased"),
    ]);
    table.add_row(vec![
        Cell::new("DOIs"),
        count_cell(result.dois_rewritten, Color::Green),
        Cell::new("resolver URL prefixes stripped"),
    ]);
    table.add_row(vec![
        Cell::new("Pages"),
        count_cell(result.pages_rewritten, Color::Green),
        Cell::new("page ranges rewritten with en-dashes"),
    ]);
    table.add_row(vec![
        Cell::new("Pruned"),
        count_cell(result.fields_pruned, Color::Green),
        Cell::new("clutter fields removed"),
    ]);
    table.add_row(vec![
        Cell::new("Records")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.records).add_attribute(Attribute::Bold),
        Cell::new("entries in the cleaned bibliography")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_warning_table(&result.warnings);
}

fn print_warning_table(warnings: &[Warning]) {
    if warnings.is_empty() {
        return;
    }
    let mut ordered: Vec<&Warning> = warnings.iter().collect();
    ordered.sort_by(|a, b| {
        let kind = kind_rank(a.kind).cmp(&kind_rank(b.kind));
        if kind != Ordering::Equal {
            return kind;
        }
        a.key.cmp(&b.key)
    });
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Entry"),
        header_cell("Field"),
        header_cell("Kind"),
        header_cell("Message"),
    ]);
    apply_warning_table_style(&mut table);
    for warning in ordered {
        table.add_row(vec![
            Cell::new(&warning.key)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            field_cell(warning.field.as_deref()),
            kind_cell(warning.kind),
            Cell::new(&warning.message),
        ]);
    }
    println!();
    println!("Warnings:");
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
        .set_width(100);
    if table.column_count() >= 3 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Percentage(60)),
        ]);
    }
}

fn apply_warning_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(20)),
            ColumnConstraint::UpperBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Fixed(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(55)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn kind_rank(kind: WarningKind) -> u8 {
    match kind {
        WarningKind::UnresolvedJournal => 0,
        WarningKind::MalformedDoi => 1,
        WarningKind::IncompleteAuthors => 2,
        WarningKind::MissingDoi => 3,
    }
}

fn kind_cell(kind: WarningKind) -> Cell {
    let color = match kind {
        WarningKind::UnresolvedJournal | WarningKind::MalformedDoi => Color::Yellow,
        WarningKind::IncompleteAuthors | WarningKind::MissingDoi => Color::DarkYellow,
    };
    Cell::new(kind.to_string()).fg(color)
}

fn field_cell(field: Option<&str>) -> Cell {
    match field {
        Some(name) => Cell::new(name),
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
