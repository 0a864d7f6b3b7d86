//! The `signdrill review` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use signdrill_core::progress::{format_interval, mastery, record_review};
use signdrill_store::{create_store, load_config_from};

pub fn execute(
    sign: String,
    success: bool,
    date: Option<NaiveDate>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    anyhow::ensure!(
        config.vocabulary.contains(&sign),
        "{sign:?} is not in the vocabulary; add it to signdrill.toml first"
    );

    let today = super::date_or_today(date);
    let store = create_store(&config);
    let mut items = store.load().context("failed to load review progress")?;

    let item = record_review(&mut items, &sign, success, today);
    store.save(&items).context("failed to save review progress")?;

    tracing::debug!("recorded {} for {sign} on {today}", if success { "pass" } else { "fail" });

    println!(
        "{sign}: {} -> due {} (in {}), ease {:.2}, streak {}, {}",
        if success { "pass" } else { "fail" },
        item.due,
        format_interval(item.interval_days),
        item.ease,
        item.streak,
        mastery(Some(&item)),
    );

    Ok(())
}
