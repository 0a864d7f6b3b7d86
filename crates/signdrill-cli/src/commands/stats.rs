//! The `signdrill stats` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::Table;
use serde::Serialize;

use signdrill_core::progress::{format_interval, mastery, summarize, DeckSummary, Mastery};
use signdrill_core::schedule::is_due;
use signdrill_core::ReviewItem;
use signdrill_store::{create_store, load_config_from};

#[derive(Serialize)]
struct SignStats<'a> {
    sign: &'a str,
    mastery: Mastery,
    due: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    item: Option<&'a ReviewItem>,
}

#[derive(Serialize)]
struct StatsReport<'a> {
    date: NaiveDate,
    signs: Vec<SignStats<'a>>,
    summary: DeckSummary,
}

pub fn execute(date: Option<NaiveDate>, format: String, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let today = super::date_or_today(date);
    let items = create_store(&config)
        .load()
        .context("failed to load review progress")?;

    let signs: Vec<SignStats> = config
        .vocabulary
        .iter()
        .map(|sign| {
            let item = items.get(sign);
            SignStats {
                sign,
                mastery: mastery(item),
                due: is_due(item, today),
                item,
            }
        })
        .collect();
    let summary = summarize(&items, &config.vocabulary, today);

    match format.as_str() {
        "json" => {
            let report = StatsReport {
                date: today,
                signs,
                summary,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            let mut table = Table::new();
            table.set_header(vec!["Sign", "Mastery", "Ease", "Interval", "Due", "Streak"]);
            for s in &signs {
                let row = match s.item {
                    Some(item) => vec![
                        s.sign.to_string(),
                        s.mastery.to_string(),
                        format!("{:.2}", item.ease),
                        format_interval(item.interval_days),
                        if s.due {
                            format!("{} (due)", item.due)
                        } else {
                            item.due.to_string()
                        },
                        item.streak.to_string(),
                    ],
                    None => vec![
                        s.sign.to_string(),
                        s.mastery.to_string(),
                        "-".into(),
                        "-".into(),
                        "-".into(),
                        "-".into(),
                    ],
                };
                table.add_row(row);
            }
            println!("{table}");

            println!(
                "\n{} sign(s): {} new, {} learning, {} review, {} relearning; {} due on {today}",
                summary.total,
                summary.new,
                summary.learning,
                summary.review,
                summary.relearning,
                summary.due,
            );
            if let Some(ease) = summary.average_ease {
                println!("Average ease: {ease:.2}");
            }
        }
    }

    Ok(())
}
