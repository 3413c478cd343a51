use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stockroom", bin_name = "stockroom", version)]
#[command(about = "Interactive inventory manager with a flat-file save", long_about = None)]
pub struct Cli {
    /// Directory holding the save file, journal and config.json
    #[arg(long, env = "STOCKROOM_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Save file name inside the data directory (overrides config.json)
    #[arg(long, value_name = "NAME")]
    pub file: Option<String>,

    /// Do not append to the history journal
    #[arg(long)]
    pub no_journal: bool,

    /// Seed the random loot generator
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}
