use anyhow::Result;
use clap::{Parser, Subcommand};
use client_core::{load_settings, normalize_api_url, CardDeckController, HttpApiGateway};
use shared::domain::CardId;
use tracing_subscriber::EnvFilter;

mod study;

#[derive(Parser, Debug)]
#[command(name = "flashcards", about = "Study flashcards served by a flashcards API")]
struct Args {
    /// Overrides `api_url` from flashcards.toml and the environment.
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every card.
    List,
    /// Create a card, then print the deck.
    Add {
        #[arg(long)]
        question: String,
        #[arg(long)]
        answer: String,
    },
    /// Delete a card by id, then print the deck.
    Delete { id: String },
    /// Interactive study session (default).
    Study,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings()?;
    if let Some(api_url) = args.api_url.as_deref() {
        settings.api_url = normalize_api_url(api_url)?;
    }
    tracing::debug!(api_url = %settings.api_url, "using flashcards api");
    let gateway = HttpApiGateway::from_settings(&settings)?;

    let mut controller = CardDeckController::new();
    controller.fetch_all(&gateway).await;

    match args.command.unwrap_or(Command::Study) {
        Command::List => {}
        Command::Add { question, answer } => {
            let draft = controller.draft_mut();
            draft.question = question;
            draft.answer = answer;
            controller.create(&gateway).await;
        }
        Command::Delete { id } => {
            controller.remove(&gateway, &CardId::parse(&id)).await;
        }
        Command::Study => return study::run(&mut controller, &gateway).await,
    }

    print!("{}", study::render_listing(&controller));
    Ok(())
}
