use clap::Parser;
use std::process::ExitCode;

use subtitle_stills::cli::{Args, Commands};
use subtitle_stills::extract::StillExtractor;
use subtitle_stills::message::MessageHandler;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> subtitle_stills::core::Result<()> {
    match args.command {
        Commands::ExtractStills {
            csvs,
            media,
            output,
            log,
            verbose,
        } => {
            let messages = MessageHandler::builder()
                .verbose(verbose)
                .log_filepath(log)
                .build()?;

            let extractor = StillExtractor::new(csvs, media, output, messages);
            extractor.extract_frames()?;
            Ok(())
        }
    }
}
