//! The `signdrill init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("signdrill.toml").exists() {
        println!("signdrill.toml already exists, skipping.");
    } else {
        std::fs::write("signdrill.toml", SAMPLE_CONFIG)?;
        println!("Created signdrill.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit signdrill.toml to choose where progress is stored");
    println!("  2. Run: signdrill review --sign \"Stop\" --pass");
    println!("  3. Run: signdrill due");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# signdrill configuration

# Where review progress is kept. ${VAR} references are expanded.
store_path = "./signdrill-progress.json"

# Signs to practice. Signs without a recognizer can still be reviewed.
vocabulary = ["I Love You", "Stop", "More", "Help"]

# Consecutive matching frames before `recognize` reports a sign as performed.
stable_frames = 3
"#;
