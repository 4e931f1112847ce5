//! Main chat loop orchestration.
//!
//! Coordinates the session lifecycle: preflight gates, welcome banner, the
//! input loop with streaming replies, control commands, the typewriter
//! farewell, and per-turn error recovery. Interrupts end the session; every
//! other turn failure is reported and the loop continues.

use std::io::Write;
use std::pin::pin;
use std::time::Duration;

use console::style;
use futures_util::StreamExt;
use tracing::debug;

use dagobah_core::gateway::ModelGateway;
use dagobah_core::preflight::{self, PreflightError};
use dagobah_core::reply;
use dagobah_types::chat::{ChatConfig, History, Speaker};

use super::banner;
use super::commands::{self, Action};
use super::input::{ChatInput, InputEvent};
use super::typing;

const FAREWELL: &str = "End our conversation must. May the Force be with you, always.";
const INTERRUPTED: &str = "Interrupted, our chat was. Peace, I wish you.";

/// How a chat turn ended.
enum TurnOutcome {
    Completed,
    Interrupted,
}

/// Run the interactive session against `gateway` with the requested model.
///
/// Returns without entering the loop when a preflight gate fails; the
/// failure is reported and the process still exits 0.
pub async fn run_chat_loop<G: ModelGateway>(gateway: &G, model: &str) -> anyhow::Result<()> {
    let config = ChatConfig::default();

    if let Err(e) = preflight::run(gateway, model).await {
        report_preflight_failure(&e);
        return Ok(());
    }

    banner::print_welcome(model);

    let mut history = History::default();
    let mut input = ChatInput::new(format!("{} ", style("You:").green().bold()));

    loop {
        match input.read_line().await {
            InputEvent::Eof => {
                println!("\n{}", style("Leave me, you must. Farewell.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n\n{} {INTERRUPTED}", yoda_label());
                break;
            }
            InputEvent::Message(text) => match commands::classify(&text) {
                Action::Noop => continue,
                Action::Help => commands::print_help(),
                Action::Quit => {
                    print!("\n{} ", yoda_label());
                    typing::type_out(FAREWELL).await;
                    println!("\n");
                    break;
                }
                Action::Chat(utterance) => {
                    history.record(Speaker::Human, utterance.clone());
                    debug!(turns = history.len(), "utterance recorded");

                    match run_turn(gateway, &config, model, &utterance).await {
                        Ok(TurnOutcome::Completed) => {}
                        Ok(TurnOutcome::Interrupted) => {
                            println!("\n\n{} {INTERRUPTED}", yoda_label());
                            break;
                        }
                        Err(e) => {
                            eprintln!("\nUnexpected error occurred: {e}");
                            eprintln!(
                                "{}",
                                style("Continue we can, if try again you will.").dim()
                            );
                        }
                    }
                }
            },
        }
    }

    Ok(())
}

/// Stream one reply, rendering each fragment as it arrives.
///
/// A Ctrl+C observed mid-stream abandons the in-flight generation and ends
/// the session. Gateway failures never reach here; the reply adapter keeps
/// them in-band.
async fn run_turn<G: ModelGateway>(
    gateway: &G,
    config: &ChatConfig,
    model: &str,
    utterance: &str,
) -> anyhow::Result<TurnOutcome> {
    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_style(
        indicatif::ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?,
    );
    spinner.set_message("pondering...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let mut stream = pin!(reply::reply_stream(gateway, config, model, utterance));
    let mut out = std::io::stdout();
    let mut full_reply = String::new();
    let mut awaiting_first = true;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                spinner.finish_and_clear();
                return Ok(TurnOutcome::Interrupted);
            }
            fragment = stream.next() => match fragment {
                Some(fragment) => {
                    if awaiting_first {
                        spinner.finish_and_clear();
                        awaiting_first = false;
                        write!(out, "\n{} ", yoda_label())?;
                        out.flush()?;
                    }
                    write!(out, "{fragment}")?;
                    out.flush()?;
                    full_reply.push_str(&fragment);
                }
                None => break,
            }
        }
    }

    if awaiting_first {
        // Empty completion: still show the label so the turn is visible.
        spinner.finish_and_clear();
        write!(out, "\n{} ", yoda_label())?;
    }
    writeln!(out, "\n")?;
    out.flush()?;

    debug!(chars = full_reply.len(), "turn complete");
    Ok(TurnOutcome::Completed)
}

fn yoda_label() -> console::StyledObject<&'static str> {
    style("Yoda:").cyan().bold()
}

/// Render a preflight failure as plain remediation text.
fn report_preflight_failure(err: &PreflightError) {
    match err {
        PreflightError::Unreachable { source } => {
            println!("Error: Cannot connect to Ollama. {source}");
            println!(
                "{}",
                style("Make sure Ollama is installed and running.").dim()
            );
        }
        PreflightError::ModelMissing {
            requested,
            available,
        } => {
            println!("Model '{requested}' not found.");
            if available.is_empty() {
                println!("No models installed. Pull one first with: ollama pull llama3");
            } else {
                println!("Available models:");
                for name in available {
                    println!("  - {name}");
                }
                println!();
                println!(
                    "{}",
                    style(
                        "Tip: use the exact model name from the list above, \
                         e.g. `dagobah llama3:latest`."
                    )
                    .dim()
                );
            }
        }
    }
}
