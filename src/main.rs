use std::io::Write as _;
use std::sync::Arc;

use triptactix::advisory::{AdvisoryService, LlmClient, OpenAiClient};
use triptactix::chat::{Completion, DialogueEngine, Outcome};
use triptactix::config::{AdvisoryConfig, ChatConfig, StoreConfig};
use triptactix::store::{HttpStore, MemoryStore, TravelStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    eprintln!("✈️  TripTactix v{}", env!("CARGO_PKG_VERSION"));

    // ── Store ───────────────────────────────────────────────────────────
    let store: Arc<dyn TravelStore> = match StoreConfig::from_env() {
        Some(config) => {
            eprintln!("   Store: HTTP ({})", config.base_url);
            Arc::new(HttpStore::new(&config))
        }
        None => {
            eprintln!("   Store: in-memory (set TRIPTACTIX_API_URL for the travel API)");
            Arc::new(MemoryStore::new())
        }
    };

    // ── Advisory ────────────────────────────────────────────────────────
    let advisory_config = AdvisoryConfig::from_env();
    if advisory_config.api_key.is_some() {
        eprintln!("   Advisory: {} via chat completions", advisory_config.model);
    } else {
        eprintln!("   Advisory: no OPENAI_API_KEY set, canned recommendations only");
    }
    let llm: Arc<dyn LlmClient> = Arc::new(OpenAiClient::new(advisory_config));
    let advisory = Arc::new(AdvisoryService::new(llm));

    // ── Chat loop ───────────────────────────────────────────────────────
    let engine = DialogueEngine::new(store, advisory, ChatConfig::default());

    eprintln!("   Type your answers and press Enter. 'restart' starts over.\n");
    println!("{}", engine.greet().await);

    let stdin = std::io::stdin();
    loop {
        print_quick_replies(&engine).await;
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let before = engine.transcript().await.len();
        let outcome = engine.submit(&line).await;

        // Show every assistant message the turn produced.
        for entry in engine.transcript().await.iter().skip(before) {
            if entry.from_assistant {
                println!("{}", entry.text);
            }
        }

        match outcome {
            Outcome::Completed(Completion::Created { trip_id, .. })
            | Outcome::Retried(Completion::Created { trip_id, .. }) => {
                println!("\nYour trip is ready: {trip_id}");
                break;
            }
            Outcome::Ignored => {
                tracing::debug!("input ignored");
            }
            _ => {}
        }
    }

    Ok(())
}

async fn print_quick_replies(engine: &DialogueEngine) {
    let replies = engine.quick_replies().await;
    if !replies.is_empty() {
        println!("  [{}]", replies.join(" | "));
    }
}
