//! Chat command

use crate::app::ChatArgs;
use crate::output::print_error;
use anyhow::Result;
use jana_core::{ChatContext, ChatMessage, ChatService, JanaConfig};
use std::io::{BufRead, Write};

/// Shown when the provider cannot be reached or answers badly
const FALLBACK_MESSAGE: &str =
    "I apologize, but I am having trouble connecting to my brain at the moment. Please try again later.";

pub async fn run(args: ChatArgs, config: &JanaConfig) -> Result<()> {
    let transformer = jana_core::chat_transformer_from_config(config)?;
    let service = ChatService::new(transformer, config.llm.max_history);

    match args.message {
        Some(message) => {
            let context = ChatContext {
                system_message: args.system,
                ..Default::default()
            };
            match service.send_message(&message, &context).await {
                Ok(reply) => println!("{}", reply),
                Err(e) => {
                    print_error(&format!("chat failed: {}", e));
                    println!("{}", FALLBACK_MESSAGE);
                }
            }
            Ok(())
        }
        None => interactive(service, args.system, config.llm.max_history).await,
    }
}

/// Interactive loop with in-memory history, bounded like the service bounds
/// the outgoing context
async fn interactive(
    service: ChatService,
    system: Option<String>,
    max_history: usize,
) -> Result<()> {
    println!("Chatting with the {} provider. Type 'exit' to quit.", service.transformer_name());

    let stdin = std::io::stdin();
    let mut history: Vec<ChatMessage> = Vec::new();

    loop {
        print!("you> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if message == "exit" || message == "quit" {
            break;
        }

        let context = ChatContext {
            system_message: system.clone(),
            history: history.clone(),
            ..Default::default()
        };

        match service.send_message(message, &context).await {
            Ok(reply) => {
                println!("jana> {}", reply);
                history.push(ChatMessage::user(message));
                history.push(ChatMessage::assistant(reply));
                if history.len() > max_history {
                    let skip = history.len() - max_history;
                    history.drain(..skip);
                }
            }
            Err(e) => {
                print_error(&format!("chat failed: {}", e));
                println!("jana> {}", FALLBACK_MESSAGE);
            }
        }
    }

    Ok(())
}
