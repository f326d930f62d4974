use anyhow::Result;
use clap::Parser;

use finance_ledger::config::{paths::LedgerPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "finance",
    author = "Kaylee Beyene",
    version,
    about = "Personal finance manager for the terminal",
    long_about = "Record income and expense entries in a form, review them in a \
                  table, delete the ones you select and export everything to \
                  transactions.csv. Entries live in memory for the session only."
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let paths = LedgerPaths::new();
    let settings = Settings::load_or_default(&paths)?;

    finance_ledger::tui::run_tui(settings, &paths)
}
