//! Terminal views of the tracker: record list and controls.

use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::render::{EMPTY_PLACEHOLDER, ListRow};
use crate::core::tracker::SessionTracker;
use crate::models::work_record::{format_date, format_time};
use crate::store::KeyValueStore;
use crate::utils::colors::{RESET, color_for_enabled, colorize_in_out, colorize_phase, colorize_placeholder};
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};

/// Draw rendered rows as a table. `limit` keeps only the newest records;
/// the empty-list placeholder is always drawn.
pub fn records_table(rows: &[ListRow<'_>], cfg: &Config, limit: Option<usize>) -> String {
    let mut columns = vec![Column::new("日付"), Column::new("開始"), Column::new("終了")];
    if cfg.show_duration {
        columns.push(Column::new("作業時間"));
    }

    let mut table = Table::new(columns);

    let mut remaining = limit.unwrap_or(usize::MAX);

    for row in rows {
        match row {
            ListRow::Placeholder => table.add_span(colorize_placeholder(EMPTY_PLACEHOLDER)),
            ListRow::Record(_) if remaining == 0 => break,
            ListRow::Record(r) => {
                remaining -= 1;
                let mut cells = vec![
                    r.date.clone(),
                    colorize_in_out(&r.start_time, true),
                    colorize_in_out(&r.end_time, false),
                ];
                if cfg.show_duration {
                    cells.push(r.duration.clone());
                }
                table.add_row(cells);
            }
        }
    }

    table.render(&cfg.separator_char)
}

pub fn print_records<S: KeyValueStore, C: Clock>(
    tracker: &SessionTracker<S, C>,
    cfg: &Config,
    limit: Option<usize>,
) {
    print!("{}", records_table(&tracker.render(), cfg, limit));
}

pub fn print_status<S: KeyValueStore, C: Clock>(tracker: &SessionTracker<S, C>) {
    let state = tracker.state();
    let controls = tracker.controls();

    println!(
        "{} {}",
        bold("State:"),
        colorize_phase(state.is_active(), tracker.phase().as_str())
    );

    if let Some(start) = state.active_start {
        println!(
            "{} {} {}",
            bold("Started:"),
            format_date(&start),
            format_time(&start)
        );
        if let Some(elapsed) = tracker.elapsed() {
            println!("{} {}", bold("Elapsed:"), elapsed);
        }
    }

    println!(
        "{} {}[{}]{} {}",
        bold("Begin:"),
        color_for_enabled(controls.begin_enabled),
        controls.begin_label,
        RESET,
        if controls.begin_enabled { "enabled" } else { "disabled" }
    );
    println!(
        "{} {}[停止]{} {}",
        bold("End:  "),
        color_for_enabled(controls.end_enabled),
        RESET,
        if controls.end_enabled { "enabled" } else { "disabled" }
    );
    println!("{} {}", bold("Records:"), state.records.len());
}
