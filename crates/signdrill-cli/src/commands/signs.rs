//! The `signdrill signs` command.

use anyhow::Result;

use signdrill_core::Sign;

pub fn execute() -> Result<()> {
    for sign in Sign::ALL {
        let hands = match sign.hands_required() {
            1 => "one hand",
            _ => "two hands",
        };
        println!("{sign} ({hands})");
    }
    Ok(())
}
