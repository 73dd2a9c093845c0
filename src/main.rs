use clap::Parser;
use figdeck::deck::{DeckAssembler, DeckConfig};
use figdeck::layout::CaptionWidth;
use log::{LevelFilter, error};
use std::path::PathBuf;
use std::process::ExitCode;

/// Paste the figures of each subfolder onto one slide of a PowerPoint deck.
#[derive(Parser, Debug)]
#[command(name = "figdeck", version)]
#[command(about = "A tool for pasting figures to PPT")]
#[command(long_about = "Creates one slide per subfolder of the input directory and lays out \
up to 8 figures per slide in a fixed grid, with the file name under each figure. \
TIFF files are converted to a slide-friendly format first.")]
struct Args {
    /// Input directory [default: ./input]
    #[arg(short = 'i', long = "input")]
    input: Option<PathBuf>,

    /// Output directory, created if missing [default: ./output]
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Deck name, saved as <NAME>.pptx [default: ppt_name]
    #[arg(short = 'n', long = "name")]
    name: Option<String>,

    /// Keep image aspect ratio when greater than 0 [default: 1]
    #[arg(short = 'r', long = "keep-ratio", allow_negative_numbers = true)]
    keep_ratio: Option<i64>,

    /// YAML file with deck settings; command-line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not convert TIFF images before building the deck
    #[arg(long)]
    skip_conversion: bool,

    /// Format of converted TIFF images [default: png]
    #[arg(long)]
    convert_ext: Option<String>,

    /// Keep folders and images in filesystem order instead of sorting by name
    #[arg(long)]
    no_sort: bool,

    /// Caption width: image-width, image-height or cell [default: image-width]
    #[arg(long)]
    caption_width: Option<CaptionWidth>,

    /// More log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Defaults, then the YAML file, then explicit flags.
    fn into_config(self) -> figdeck::Result<DeckConfig> {
        let mut config = match &self.config {
            Some(path) => DeckConfig::from_yaml_file(path)?,
            None => DeckConfig::default(),
        };

        if let Some(input) = self.input {
            config.input_dir = input;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if let Some(name) = self.name {
            config.deck_name = name;
        }
        if let Some(keep_ratio) = self.keep_ratio {
            config.keep_ratio = keep_ratio > 0;
        }
        if self.skip_conversion {
            config.conversion.enabled = false;
        }
        if let Some(ext) = self.convert_ext {
            config.conversion.target_ext = ext;
        }
        if self.no_sort {
            config.sort_by_name = false;
        }
        if let Some(caption_width) = self.caption_width {
            config.layout.caption_width = caption_width;
        }
        Ok(config)
    }
}

fn run(args: Args) -> figdeck::Result<()> {
    let config = args.into_config()?;
    DeckAssembler::from_config(config).run()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        },
    }
}
