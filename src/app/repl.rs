use crate::adapters::terminal::TerminalDisplay;
use crate::core::{Action, RosterSession};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const HELP: &str = "\
Commands:
  add <name>      add a user
  remove <name>   remove a user (alias: rm)
  search <name>   look up a user (alias: find)
  list            show the roster
  help            show this message
  quit            leave (alias: exit)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 動作與輸入欄位內容 (未修剪)
    Run(Action, String),
    List,
    Help,
    Quit,
    Unknown(String),
}

/// 解析一行輸入；空白行回傳 None
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim_start();
    if line.trim().is_empty() {
        return None;
    }

    let (word, rest) = line
        .split_once(char::is_whitespace)
        .unwrap_or((line, ""));

    let command = match word.to_ascii_lowercase().as_str() {
        "add" => Command::Run(Action::Add, rest.to_string()),
        "remove" | "rm" => Command::Run(Action::Remove, rest.to_string()),
        "search" | "find" => Command::Run(Action::Search, rest.to_string()),
        "list" | "ls" => Command::List,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(word.to_string()),
    };
    Some(command)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplSummary {
    pub actions: usize,
    pub rejected: usize,
}

/// 互動迴圈：讀到 quit 或 EOF 為止
pub fn run<R: BufRead, W: Write>(
    session: &mut RosterSession<TerminalDisplay<W>>,
    input: R,
    prompt: &str,
) -> Result<ReplSummary> {
    let mut summary = ReplSummary::default();
    let mut lines = input.lines();

    loop {
        session.display_mut().write_prompt(prompt)?;
        let Some(line) = lines.next() else {
            tracing::debug!("Input closed");
            break;
        };
        let line = line?;

        let Some(command) = parse_command(&line) else {
            continue;
        };
        tracing::debug!("Command: {:?}", command);

        match command {
            Command::Run(action, text) => {
                session.display_mut().set_input(&text);
                let outcome = session.perform(action)?;
                summary.actions += 1;
                if !outcome.is_success() {
                    summary.rejected += 1;
                }
            }
            Command::List => session.refresh()?,
            Command::Help => session.display_mut().write_line(HELP)?,
            Command::Quit => break,
            Command::Unknown(word) => {
                session
                    .display_mut()
                    .write_line(&format!("❓ Unknown command '{}'. Type `help`.", word))?;
            }
        }
    }

    tracing::info!(
        "Session finished: {} actions, {} rejected",
        summary.actions,
        summary.rejected
    );
    Ok(summary)
}
