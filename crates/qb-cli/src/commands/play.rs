use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use qb_engine::{ChannelId, EngineConfig, Session, UserId};
use qb_store::DecisionLog;

use crate::console::ConsoleTransport;
use crate::oracle::TableGenerator;

pub fn run(data: &Path, seed: u64) -> Result<(), String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| e.to_string())?;
    runtime.block_on(run_session(data, seed))
}

async fn run_session(data: &Path, seed: u64) -> Result<(), String> {
    let players = super::open_store(data)?;
    let decisions = DecisionLog::open(super::decision_log_path(data))
        .map_err(|e| format!("failed to open decision log: {e}"))?;

    let user = UserId::new("console");
    let channel = ChannelId::new("console");
    let transport = ConsoleTransport::new(user);
    let generator = TableGenerator::new(seed);
    let config = EngineConfig::default().with_seed(seed);

    let mut session = Session::new(transport, generator, config, players, decisions);

    println!("  {} Questbote session", "Starting".bold());
    println!("  Data: {} | Seed: {seed}", data.display());
    println!("  Commands start with '!'; try !help. Type 'quit' to exit.\n");

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let Some(message) = session.transport_mut().next_message(&channel).await else {
            break; // EOF
        };
        if message.text.eq_ignore_ascii_case("quit") || message.text.eq_ignore_ascii_case("q") {
            println!("Farewell, adventurer.");
            break;
        }
        session
            .handle_message(&message)
            .await
            .map_err(|e| e.to_string())?;
    }

    Ok(())
}
