//! Interactive terminal chat over the shared `ChatSession`.
//!
//! DESIGN
//! ======
//! The repl owns a `RefCell<ChatSession>` and drives it through the same
//! `ando_core::chat` drivers the browser widget uses. After each step it
//! prints only the transcript entries appended since the previous print,
//! plus the suggestion list whenever it changes.

#[cfg(test)]
#[path = "repl_test.rs"]
mod repl_test;

use std::cell::RefCell;
use std::io::{BufRead, Write};

use ando_core::chat::{self, ChatSession};
use ando_core::{ChatApi, StateCell};

use crate::error::CliError;
use crate::render;

pub const PROMPT: &str = "> ";
pub const HELP: &str = "type a question, /N to ask suggestion N, /quit to leave";

/// One line of user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Empty,
    Quit,
    /// 1-based suggestion number.
    Pick(usize),
    Text(String),
}

pub fn parse_line(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }
    if line == "/quit" || line == "/exit" {
        return Input::Quit;
    }
    match line.strip_prefix('/').and_then(|n| n.parse::<usize>().ok()) {
        Some(n) if n > 0 => Input::Pick(n),
        _ => Input::Text(line.to_owned()),
    }
}

pub struct Repl<'a, A: ChatApi + ?Sized> {
    api: &'a A,
    session: RefCell<ChatSession>,
    rendered: usize,
    shown_suggestions: Vec<String>,
}

impl<'a, A: ChatApi + ?Sized> Repl<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api, session: RefCell::new(ChatSession::default()), rendered: 0, shown_suggestions: Vec::new() }
    }

    /// Open the session and fetch the first suggestions.
    pub async fn open(&mut self) -> Vec<String> {
        self.session.with_mut(ChatSession::toggle);
        chat::load_suggestions(&self.session, self.api).await;
        self.drain()
    }

    /// Apply one line. Returns `None` when the user asked to leave.
    pub async fn handle(&mut self, line: &str) -> Option<Vec<String>> {
        match parse_line(line) {
            Input::Empty => {}
            Input::Quit => return None,
            Input::Pick(n) => {
                let label = self.session.borrow().suggestions.get(n - 1).cloned();
                match label {
                    Some(label) => {
                        chat::select_suggestion(&self.session, self.api, &label).await;
                    }
                    None => return Some(vec![format!("no suggestion /{n}")]),
                }
            }
            Input::Text(text) => {
                self.session.with_mut(|s| s.set_input(&text));
                chat::send_message(&self.session, self.api).await;
            }
        }
        Some(self.drain())
    }

    /// Lines for everything not yet printed.
    fn drain(&mut self) -> Vec<String> {
        let session = self.session.borrow();
        let mut lines: Vec<String> = session.messages[self.rendered..].iter().map(render::message).collect();
        self.rendered = session.messages.len();

        if session.suggestions != self.shown_suggestions && !session.suggestions.is_empty() {
            lines.push(render::suggestions(&session.suggestions));
        }
        self.shown_suggestions.clone_from(&session.suggestions);
        lines
    }

    pub fn session(&self) -> ChatSession {
        self.session.borrow().clone()
    }
}

/// Read lines from `input` until EOF or `/quit`, writing the transcript to
/// `out`.
///
/// # Errors
///
/// Only terminal I/O failures; API failures land in the transcript.
pub async fn run<A, R, W>(api: &A, input: R, out: &mut W) -> Result<(), CliError>
where
    A: ChatApi + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut repl = Repl::new(api);
    writeln!(out, "{HELP}")?;
    print_lines(out, &repl.open().await)?;

    for line in input.lines() {
        let line = line?;
        let Some(lines) = repl.handle(&line).await else {
            break;
        };
        print_lines(out, &lines)?;
    }
    tracing::debug!(messages = repl.session().messages.len(), "repl closed");
    Ok(())
}

fn print_lines<W: Write>(out: &mut W, lines: &[String]) -> Result<(), CliError> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    write!(out, "{PROMPT}")?;
    out.flush()?;
    Ok(())
}
