//! Command-line argument surface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "subtitle-stills",
    about = "Utilities run outside the editor: extract still frames from subtitle label CSVs",
    version
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract still images at the frames listed in label CSVs
    ExtractStills {
        /// Path to the CSVs directory
        #[arg(short, long, value_name = "DIRECTORY", default_value = ".")]
        csvs: PathBuf,

        /// Path to the media directory
        #[arg(short, long, value_name = "DIRECTORY", default_value = ".")]
        media: PathBuf,

        /// Path to the output directory, defaults to the media folder
        #[arg(short, long, value_name = "DIRECTORY")]
        output: Option<PathBuf>,

        /// Path for the log file
        #[arg(
            short,
            long,
            value_name = "PATH",
            default_value = "./extract_subtitle_labels.log"
        )]
        log: PathBuf,

        /// Increase verbosity of shell messages
        #[arg(short, long)]
        verbose: bool,
    },
}
