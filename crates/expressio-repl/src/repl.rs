//! Interactive session

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use expressio::{Interpreter, Language};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::history::History;
use crate::messages::Messages;
use crate::preferences::Preferences;
use crate::render::{render_error, render_output};

const PROMPT: &str = "> ";

/// What the loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this and read the next line
    Text(String),
    /// Leave the session
    Quit,
}

/// Interpreter plus the console state that surrounds it.
pub struct Session {
    interpreter: Interpreter,
    history: History,
    preferences: Preferences,
    preferences_path: PathBuf,
}

impl Session {
    pub fn new(preferences: Preferences, preferences_path: PathBuf) -> Self {
        let mut interpreter = Interpreter::new();
        interpreter.set_language(preferences.language);
        Self {
            interpreter,
            history: History::new(),
            preferences,
            preferences_path,
        }
    }

    pub fn messages(&self) -> &'static Messages {
        Messages::for_language(self.interpreter.language())
    }

    pub fn set_trace(&mut self, trace: bool) {
        self.interpreter.set_trace(trace);
    }

    /// Handle one line of input: a `:command` or an expression.
    pub fn handle(&mut self, line: &str) -> Reply {
        let trimmed = line.trim();
        match trimmed.strip_prefix(':') {
            Some(command) => self.command(command),
            None => match self.evaluate(line) {
                Ok(text) | Err(text) => Reply::Text(text),
            },
        }
    }

    /// Run an expression and record it with its rendering.
    ///
    /// Both arms carry the rendered text; `Err` marks a failed line.
    pub fn evaluate(&mut self, line: &str) -> std::result::Result<String, String> {
        let rendered = match self.interpreter.run(line) {
            Ok(output) => Ok(render_output(&output, self.interpreter.language())),
            Err(err) => Err(render_error(&err, self.messages())),
        };

        self.history.push(line);
        match &rendered {
            Ok(text) | Err(text) => self.history.push(text.as_str()),
        }
        rendered
    }

    fn command(&mut self, command: &str) -> Reply {
        let mut parts = command.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default();
        let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());
        let messages = self.messages();

        let text = match name {
            "help" | "h" => messages.help.to_string(),
            "vars" => self.list_variables(),
            "history" => {
                if self.history.is_empty() {
                    messages.empty_history.to_string()
                } else {
                    self.history.entries().join("\n")
                }
            }
            "clear" => {
                if self.history.is_empty() {
                    messages.empty_history.to_string()
                } else {
                    self.history.clear();
                    self.interpreter.clear();
                    messages.history_cleared.to_string()
                }
            }
            "export" => match arg {
                None => messages.export_usage.to_string(),
                Some(_) if self.history.is_empty() => messages.empty_history.to_string(),
                Some(file) => self.export(Path::new(file)),
            },
            "language" | "lang" => match arg.map(str::parse::<Language>) {
                Some(Ok(language)) => self.change_language(language),
                _ => messages.language_usage.to_string(),
            },
            "about" => format!(
                "Expressio {}\n{}\n{}\n{}",
                expressio::VERSION,
                messages.about,
                messages.copyright,
                messages.license
            ),
            "quit" | "exit" | "q" => return Reply::Quit,
            _ => messages.unknown_command.to_string(),
        };

        Reply::Text(text)
    }

    fn list_variables(&self) -> String {
        let env = self.interpreter.environment();
        if env.is_empty() {
            return self.messages().no_variables.to_string();
        }

        let language = self.interpreter.language();
        env.iter()
            .map(|(name, value)| {
                render_output(&expressio::Output::assignment(name, value), language)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn export(&self, path: &Path) -> String {
        let messages = self.messages();
        match self.history.export(path) {
            Ok(()) => format!("{} {}", messages.exported, path.display()),
            Err(err) => format!("{}: {:#}", messages.export_failed, err),
        }
    }

    /// Switch language, persist it, and start over if it actually changed.
    fn change_language(&mut self, language: Language) -> String {
        if language != self.interpreter.language() {
            self.history.clear();
            self.interpreter.clear();
        }
        self.interpreter.set_language(language);
        self.preferences.language = language;

        let messages = self.messages();
        match self.preferences.save(&self.preferences_path) {
            Ok(()) => format!("{} {}", messages.language_changed, language),
            Err(err) => {
                log::warn!("{:#}", err);
                format!(
                    "{} {}\n{}: {:#}",
                    messages.language_changed, language, messages.preferences_failed, err
                )
            }
        }
    }
}

/// Read lines until the user quits or closes input.
pub fn run(session: &mut Session) -> Result<()> {
    let mut editor = DefaultEditor::new().context("failed to initialize line editor")?;

    println!("Expressio {}", expressio::VERSION);
    println!("{}", session.messages().editor);
    println!();

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                if let Err(err) = editor.add_history_entry(line.as_str()) {
                    log::warn!("failed to record line in editor history: {}", err);
                }

                match session.handle(&line) {
                    Reply::Text(text) => {
                        println!("{}", align_caret(&text));
                        println!();
                    }
                    Reply::Quit => break,
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("failed to read input"),
        }
    }

    Ok(())
}

/// Carets count columns from the start of the input, which the editor
/// echoes after the prompt.
fn align_caret(text: &str) -> String {
    if text.trim_start().starts_with('^') {
        format!("{}{}", " ".repeat(PROMPT.len()), text)
    } else {
        text.to_string()
    }
}
