use chrono::Utc;
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::io;
use std::path::PathBuf;

use cookpal::{
    describe_age, normalize_recipe, speech_script, CookPalConfig, CookPalError,
    ElevenLabsSynthesizer, FileStore, History, QueryCapture, ReaderCapture, RecipeGenerator,
    SourceKind, SpeechSynthesizer,
};

/// CookPal - turn the ingredients you have into a recipe
#[derive(Parser)]
#[command(name = "cookpal", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a recipe from comma-separated ingredients
    Generate {
        /// Ingredients, e.g. "chicken, rice, broccoli" (read from stdin if omitted)
        ingredients: Option<String>,
        /// Recipe source: ai or mealdb
        #[arg(long)]
        source: Option<SourceKind>,
        /// Write the recipe read aloud to this MP3 file
        #[arg(long, value_name = "FILE")]
        speak: Option<PathBuf>,
        /// Do not save the recipe to history
        #[arg(long)]
        no_history: bool,
    },

    /// List recent recipes, newest first
    History,

    /// Show a recipe from history
    Show {
        /// Position in the history list, starting at 1
        index: usize,
    },

    /// Forget all saved recipes
    ClearHistory,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = CookPalConfig::load()?;
    debug!(
        "Default source {}, history at {}",
        config.default_source, config.history.path
    );

    match cli.command {
        Commands::Generate {
            ingredients,
            source,
            speak,
            no_history,
        } => {
            let query = match ingredients {
                Some(ingredients) => ingredients,
                None => {
                    eprintln!("Enter ingredients (comma-separated):");
                    ReaderCapture::new(io::stdin().lock()).capture()?
                }
            };

            let mut builder = RecipeGenerator::builder()
                .ingredients(query)
                .config(config.clone());
            if let Some(source) = source {
                builder = builder.source(source);
            }
            let recipe = builder.build().await?;

            println!("{}", recipe.display);

            if !no_history {
                let mut history = open_history(&config)?;
                history.record(&recipe.query, recipe.raw.clone(), Utc::now())?;
            }

            if let Some(path) = speak {
                let synthesizer = ElevenLabsSynthesizer::new(
                    &config.speech,
                    std::time::Duration::from_secs(config.timeout),
                )?;
                let audio = synthesizer
                    .synthesize(&speech_script(&recipe.display))
                    .await?;
                tokio::fs::write(&path, &audio).await?;
                info!("Wrote {} bytes of audio to {}", audio.len(), path.display());
            }
        }

        Commands::History => {
            let history = open_history(&config)?;
            if history.is_empty() {
                println!("No saved recipes yet.");
            }
            let now = Utc::now();
            for (index, conversation) in history.entries().iter().enumerate() {
                println!(
                    "{}. {} ({}) - {}",
                    index + 1,
                    normalize_recipe(&conversation.recipe).title,
                    conversation.ingredients,
                    describe_age(conversation.timestamp, now)
                );
            }
        }

        Commands::Show { index } => {
            let history = open_history(&config)?;
            let conversation = index
                .checked_sub(1)
                .and_then(|i| history.get(i))
                .ok_or_else(|| {
                    CookPalError::HistoryError(format!("no saved recipe at position {}", index))
                })?;
            println!("{}", normalize_recipe(&conversation.recipe));
        }

        Commands::ClearHistory => {
            open_history(&config)?.clear()?;
            println!("History cleared.");
        }
    }

    Ok(())
}

fn open_history(config: &CookPalConfig) -> Result<History<FileStore>, CookPalError> {
    History::open(
        FileStore::new(&config.history.path),
        config.history.capacity,
    )
}
