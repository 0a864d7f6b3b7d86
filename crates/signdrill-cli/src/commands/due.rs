//! The `signdrill due` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::Table;

use signdrill_core::progress::{due_signs, format_interval, mastery, new_signs};
use signdrill_store::{create_store, load_config_from};

pub fn execute(date: Option<NaiveDate>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let today = super::date_or_today(date);
    let items = create_store(&config)
        .load()
        .context("failed to load review progress")?;

    let due = due_signs(&items, &config.vocabulary, today);
    let fresh = new_signs(&items, &config.vocabulary);

    if due.is_empty() {
        println!("Nothing due on {today}.");
    } else {
        let mut table = Table::new();
        table.set_header(vec!["Sign", "Due", "Interval", "Streak", "Mastery"]);
        for sign in &due {
            let item = &items[sign];
            table.add_row(vec![
                sign.clone(),
                item.due.to_string(),
                format_interval(item.interval_days),
                item.streak.to_string(),
                mastery(Some(item)).to_string(),
            ]);
        }
        println!("{} sign(s) due on {today}:", due.len());
        println!("{table}");
    }

    if !fresh.is_empty() {
        println!("\nNot yet practiced: {}", fresh.join(", "));
    }

    Ok(())
}
