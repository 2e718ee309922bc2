//! Line-driven study session over a single controller.

use std::{fmt::Write as _, io::Write as _};

use anyhow::Result;
use client_core::{ApiGateway, CardDeckController, ReviewOutcome, NO_CARDS_NOTICE};
use shared::domain::CardFace;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

const HELP: &str = "commands: [n]ext [p]rev [f]lip [k]nown [u]nknown [r]eview unknown \
[a]dd [d]elete [l]oad [h]elp [q]uit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StudyCommand {
    Next,
    Prev,
    Flip,
    Known,
    Unknown,
    Review,
    Add,
    Delete,
    Reload,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<StudyCommand> {
    let command = match line.trim().to_ascii_lowercase().as_str() {
        "n" | "next" | "" => StudyCommand::Next,
        "p" | "prev" => StudyCommand::Prev,
        "f" | "flip" => StudyCommand::Flip,
        "k" | "known" => StudyCommand::Known,
        "u" | "unknown" => StudyCommand::Unknown,
        "r" | "review" => StudyCommand::Review,
        "a" | "add" => StudyCommand::Add,
        "d" | "delete" => StudyCommand::Delete,
        "l" | "load" | "reload" => StudyCommand::Reload,
        "h" | "help" | "?" => StudyCommand::Help,
        "q" | "quit" | "exit" => StudyCommand::Quit,
        _ => return None,
    };
    Some(command)
}

pub async fn run(controller: &mut CardDeckController, gateway: &dyn ApiGateway) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{HELP}");
    print!("{}", render_card(controller));

    loop {
        let Some(line) = prompt(&mut lines, "> ").await? else {
            break;
        };
        let Some(command) = parse_command(&line) else {
            println!("unknown command '{}'; {HELP}", line.trim());
            continue;
        };

        match command {
            StudyCommand::Next => controller.next(),
            StudyCommand::Prev => controller.prev(),
            StudyCommand::Flip => controller.toggle_flip(),
            StudyCommand::Known => {
                controller.mark_current(true);
            }
            StudyCommand::Unknown => {
                controller.mark_current(false);
            }
            StudyCommand::Review => {
                if let ReviewOutcome::Started { cards } = controller.review_unknown() {
                    tracing::debug!(cards, "reviewing unknown cards");
                }
            }
            StudyCommand::Add => {
                let Some(question) = prompt(&mut lines, "question: ").await? else {
                    break;
                };
                let Some(answer) = prompt(&mut lines, "answer: ").await? else {
                    break;
                };
                let draft = controller.draft_mut();
                draft.question = question;
                draft.answer = answer;
                controller.create(gateway).await;
            }
            StudyCommand::Delete => {
                if let Some(id) = controller.current_id() {
                    controller.remove(gateway, &id).await;
                }
            }
            StudyCommand::Reload => controller.fetch_all(gateway).await,
            StudyCommand::Help => {
                println!("{HELP}");
                continue;
            }
            StudyCommand::Quit => break,
        }

        if let Some(notice) = controller.take_notice() {
            println!("{notice}");
        }
        print!("{}", render_card(controller));
    }

    Ok(())
}

async fn prompt(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> Result<Option<String>> {
    print!("{label}");
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?)
}

fn render_card(controller: &CardDeckController) -> String {
    let mut out = String::new();
    match (controller.current(), controller.visible_text()) {
        (Some(card), Some(text)) => {
            let face = match controller.visible_face() {
                CardFace::Question => "question",
                CardFace::Answer => "answer",
            };
            let review = if controller.is_reviewing() {
                " (reviewing unknown)"
            } else {
                ""
            };
            let _ = writeln!(
                out,
                "[{}/{}] card {} {face}{review}",
                controller.cursor() + 1,
                controller.deck().len(),
                card.id
            );
            let _ = writeln!(out, "  {text}");
        }
        _ => {
            let _ = writeln!(out, "{NO_CARDS_NOTICE}");
        }
    }
    let _ = writeln!(out, "{}", controller.counts());
    out
}

pub fn render_listing(controller: &CardDeckController) -> String {
    let cards = controller.deck().cards();
    if cards.is_empty() {
        return format!("{NO_CARDS_NOTICE}\n");
    }
    let mut out = String::new();
    for card in cards {
        let _ = writeln!(out, "{}\t{}\t{}", card.id, card.question, card.answer);
    }
    out
}
