use actix::Addr;
use std::io::{self, BufRead};
use std::thread;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::actors::{GetHistory, SessionActor, StartSession, SubmitCandidate};
use crate::session::AcceptedWord;
use crate::{Error, Result};

/// What the player asked for with one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NewGame,
    List,
    Quit,
    Submit(String),
}

pub fn parse_line(line: &str) -> Command {
    match line.trim() {
        ":new" => Command::NewGame,
        ":list" => Command::List,
        ":quit" | ":q" => Command::Quit,
        _ => Command::Submit(line.to_string()),
    }
}

/// Text to show for a submission, or `None` when nothing should be shown
pub fn render_outcome(outcome: &Result<AcceptedWord>) -> Option<String> {
    match outcome {
        Ok(accepted) => Some(format!("+ ({}) {}", accepted.letters, accepted.word)),
        Err(Error::Rejected(reason)) if reason.is_silent() => None,
        Err(Error::Rejected(reason)) => Some(format!("{}: {}", reason.title(), reason.message())),
        Err(e) => Some(format!("Error: {}", e)),
    }
}

pub fn render_history(history: &[String]) -> String {
    if history.is_empty() {
        return "No words yet".to_string();
    }

    history
        .iter()
        .map(|word| format!("({}) {}", word.chars().count(), word))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_banner(root_word: &str) -> String {
    format!(
        "Root word: {}\nMake words from its letters. :new restarts, :list shows your words, :quit exits.",
        root_word
    )
}

async fn send<M>(addr: &Addr<SessionActor>, msg: M) -> Result<M::Result>
where
    M: actix::Message + Send + 'static,
    M::Result: Send,
    SessionActor: actix::Handler<M>,
{
    addr.send(msg)
        .await
        .map_err(|e| Error::Actor(format!("Session actor unavailable: {}", e)))
}

/// Read stdin on its own thread so a blocked read never holds up shutdown.
/// The channel closes when stdin ends or the receiver is dropped.
pub fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);

    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("Failed to read from stdin: {}", e);
                    break;
                }
            }
        }
    });

    rx
}

/// Drive one game from the given input lines until the player quits or input ends
pub async fn run(
    addr: Addr<SessionActor>,
    mut lines: mpsc::Receiver<String>,
) -> miette::Result<()> {
    let root_word = send(&addr, StartSession).await?.map_err(|e| {
        error!("Failed to start session: {}", e);
        e
    })?;
    println!("{}", render_banner(&root_word));

    while let Some(line) = lines.recv().await {
        match parse_line(&line) {
            Command::Quit => break,
            Command::List => {
                let history = send(&addr, GetHistory).await?;
                println!("{}", render_history(&history));
            }
            Command::NewGame => match send(&addr, StartSession).await? {
                Ok(root_word) => println!("{}", render_banner(&root_word)),
                Err(e) => {
                    error!("Failed to restart session: {}", e);
                    println!("Could not start a new game");
                }
            },
            Command::Submit(raw) => {
                let outcome = send(&addr, SubmitCandidate { raw }).await?;
                if let Some(text) = render_outcome(&outcome) {
                    println!("{}", text);
                }
            }
        }
    }

    info!("Input closed, leaving the game");
    Ok(())
}
