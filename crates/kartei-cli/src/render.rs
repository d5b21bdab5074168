//! comfy-table rendering of the review table and the projection views.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use kartei_engine::ReviewRow;
use kartei_model::{DeckName, label_from_path};
use kartei_report::{StudiedRow, UpcomingEntry};

pub fn print_review_table(rows: &[ReviewRow]) {
    if rows.is_empty() {
        println!("Nothing due or new today.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Deck"),
        header_cell("N due"),
        header_cell("N new"),
        header_cell("Top card"),
        header_cell("Hard"),
        header_cell("Good"),
        header_cell("Easy"),
    ]);
    apply_table_style(&mut table);
    for index in [0, 2, 3, 5, 6, 7] {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (position, row) in rows.iter().enumerate() {
        table.add_row(vec![
            Cell::new(position + 1).add_attribute(Attribute::Bold),
            Cell::new(row.deck.as_str()).fg(Color::Blue),
            count_cell(row.n_due),
            count_cell(row.n_new),
            Cell::new(&row.label),
            Cell::new(format!("{}d", row.hard)),
            Cell::new(format!("{}d", row.good)),
            Cell::new(format!("{}d", row.easy)),
        ]);
    }
    println!("{table}");
}

pub fn print_new_cards(deck: &DeckName, cards: &[PathBuf]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell(deck.as_str())]);
    apply_table_style(&mut table);
    if cards.is_empty() {
        table.add_row(vec![dim_cell("No new cards")]);
    }
    for path in cards {
        table.add_row(vec![Cell::new(label_from_path(path))]);
    }
    println!("{table}");
    println!();
}

pub fn print_studied(rows: &[StudiedRow], target: NaiveDate) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Deck"),
        header_cell(&format!("Card studied on {target}")),
    ]);
    apply_table_style(&mut table);
    if rows.is_empty() {
        table.add_row(vec![dim_cell("-"), dim_cell("nothing studied")]);
    }
    for row in rows {
        table.add_row(vec![
            Cell::new(row.deck.as_str()).fg(Color::Blue),
            Cell::new(&row.card),
        ]);
    }
    println!("{table}");
}

pub fn print_upcoming(
    calendar: &BTreeMap<NaiveDate, Vec<UpcomingEntry>>,
    today: NaiveDate,
    by_deck: bool,
    max_days: Option<usize>,
) {
    if by_deck {
        print_upcoming_by_deck(calendar, today, max_days);
        return;
    }
    let limit = max_days.unwrap_or(usize::MAX);
    for (position, (date, entries)) in calendar.iter().take(limit).enumerate() {
        if position > 0 {
            println!();
        }
        println!("{}", date_headline(*date, today));
        for entry in entries {
            println!("  {} {}{}", entry.deck, entry.card, interval_suffix(entry.interval));
        }
    }
}

fn print_upcoming_by_deck(
    calendar: &BTreeMap<NaiveDate, Vec<UpcomingEntry>>,
    today: NaiveDate,
    max_days: Option<usize>,
) {
    let mut per_deck: BTreeMap<&DeckName, BTreeMap<NaiveDate, Vec<&UpcomingEntry>>> =
        BTreeMap::new();
    for (date, entries) in calendar {
        for entry in entries {
            per_deck
                .entry(&entry.deck)
                .or_default()
                .entry(*date)
                .or_default()
                .push(entry);
        }
    }
    let limit = max_days.unwrap_or(usize::MAX);
    for (deck, dates) in per_deck {
        println!("{deck}");
        println!("{}", "-".repeat(deck.as_str().len()));
        for (date, entries) in dates.iter().take(limit) {
            println!("  {}", date_headline(*date, today));
            for (position, entry) in entries.iter().enumerate() {
                println!(
                    "    {:>2}. {}{}",
                    position + 1,
                    entry.card,
                    interval_suffix(entry.interval)
                );
            }
        }
    }
}

fn date_headline(date: NaiveDate, today: NaiveDate) -> String {
    let delta = (date - today).num_days();
    let plural = if delta == 1 { "" } else { "s" };
    format!("{date} ({delta} day{plural} from now)")
}

fn interval_suffix(interval: Option<i64>) -> String {
    match interval {
        Some(days) => format!(" ({days} days)"),
        None => String::new(),
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

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell("0")
    } else {
        Cell::new(count)
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
