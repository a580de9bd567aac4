use clap::{Parser, Subcommand};
use slidetree_core::{ConvertSettings, PmlConverter, PmlDocument};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SLIDETREE_REVISION"), ")");

#[derive(Parser)]
#[command(name = "slidetree", version = VERSION)]
#[command(about = "Resolve pptx slide trees into renderer-ready JSON", long_about = None)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a presentation to JSON
    Convert {
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Write JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON file with conversion settings
        #[arg(long, value_name = "JSON")]
        settings: Option<PathBuf>,

        /// Emit media part paths instead of base64 data URIs
        #[arg(long)]
        no_embed_media: bool,

        /// Skip speaker notes
        #[arg(long)]
        no_notes: bool,

        /// Convert slides in parallel
        #[arg(long)]
        parallel: bool,
    },
    /// Print slide count, size and per-slide element counts
    Info {
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert {
            input,
            output,
            settings,
            no_embed_media,
            no_notes,
            parallel,
        } => {
            let mut settings = match settings {
                Some(path) => ConvertSettings::from_json(&std::fs::read_to_string(path)?)?,
                None => ConvertSettings::default(),
            };
            if no_embed_media {
                settings.embed_media = false;
            }
            if no_notes {
                settings.include_notes = false;
            }
            if parallel {
                settings.parallel = true;
            }

            let presentation = convert(&input, &settings)?;
            let json = presentation.to_json()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    tracing::info!(output = %path.display(), "wrote JSON");
                }
                None => println!("{}", json),
            }
        }
        Commands::Info { input } => {
            let settings = ConvertSettings {
                embed_media: false,
                include_notes: false,
                ..ConvertSettings::default()
            };
            let presentation = convert(&input, &settings)?;

            println!("File:   {}", input.display());
            println!("Size:   {} x {} pt", presentation.size.width, presentation.size.height);
            println!("Slides: {}", presentation.slides.len());
            for (i, count) in presentation.element_counts().iter().enumerate() {
                println!("  slide {:>3}: {} elements", i + 1, count);
            }
        }
    }
    Ok(())
}

fn convert(input: &Path, settings: &ConvertSettings) -> slidetree_core::Result<slidetree_core::Presentation> {
    let doc = PmlDocument::from_file(input)?;
    PmlConverter::convert(&doc, Some(settings))
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
