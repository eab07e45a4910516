use cocorahs::commands::station::StationPicker;
use cocorahs::error::{CocorahsError, Result};
use cocorahs::model::Station;
use console::Term;
use std::io::{BufRead, IsTerminal};

/// Line-oriented questions to the user.
pub trait Prompter {
    /// Reads one line, echoed.
    fn input(&mut self, label: &str) -> Result<String>;

    /// Reads one line without echoing it.
    fn secret(&mut self, label: &str) -> Result<String>;

    /// Shows a line that is not a question.
    fn notice(&mut self, message: &str);
}

/// Asks until a non-blank answer is given. Visible answers are trimmed;
/// hidden ones are returned exactly as typed.
pub fn ask_required<P: Prompter + ?Sized>(
    prompter: &mut P,
    label: &str,
    hidden: bool,
) -> Result<String> {
    loop {
        let answer = if hidden {
            prompter.secret(label)?
        } else {
            prompter.input(label)?
        };
        if answer.trim().is_empty() {
            continue;
        }
        return Ok(if hidden {
            answer
        } else {
            answer.trim().to_string()
        });
    }
}

/// Prompts on stderr. Reads through the terminal when attended (so the
/// password is masked) and falls back to plain stdin lines otherwise.
pub struct TermPrompter {
    term: Term,
    interactive: bool,
}

impl TermPrompter {
    pub fn new() -> Self {
        let term = Term::stderr();
        let interactive = term.is_term() && std::io::stdin().is_terminal();
        Self { term, interactive }
    }

    fn read(&mut self, label: &str, hidden: bool) -> Result<String> {
        self.term.write_str(&format!("{}: ", label))?;

        if self.interactive {
            let line = if hidden {
                self.term.read_secure_line()?
            } else {
                self.term.read_line()?
            };
            return Ok(line);
        }

        let mut line = String::new();
        if std::io::stdin().lock().read_line(&mut line)? == 0 {
            self.term.write_line("")?;
            return Err(CocorahsError::NoInput(label.to_lowercase()));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TermPrompter {
    fn input(&mut self, label: &str) -> Result<String> {
        self.read(label, false)
    }

    fn secret(&mut self, label: &str) -> Result<String> {
        self.read(label, true)
    }

    fn notice(&mut self, message: &str) {
        let _ = self.term.write_line(message);
    }
}

/// Station selection on top of any prompter.
pub struct StationPrompt<'a, P: Prompter + ?Sized> {
    prompter: &'a mut P,
    listed: bool,
}

impl<'a, P: Prompter + ?Sized> StationPrompt<'a, P> {
    pub fn new(prompter: &'a mut P) -> Self {
        Self {
            prompter,
            listed: false,
        }
    }
}

fn choices(stations: &[Station]) -> Vec<&str> {
    stations.iter().map(|s| s.station_number.as_str()).collect()
}

impl<P: Prompter + ?Sized> StationPicker for StationPrompt<'_, P> {
    fn pick(&mut self, stations: &[Station]) -> Result<String> {
        if !self.listed {
            self.prompter.notice("This account reports for several stations:");
            for station in stations {
                self.prompter.notice(&format!("  {}", station));
            }
            self.listed = true;
        }
        let label = format!("Station ({})", choices(stations).join(", "));
        self.prompter.input(&label)
    }

    fn rejected(&mut self, answer: &str, stations: &[Station]) {
        let quoted: Vec<String> = choices(stations)
            .iter()
            .map(|c| format!("'{}'", c))
            .collect();
        self.prompter.notice(&format!(
            "Error: '{}' is not one of {}.",
            answer.trim(),
            quoted.join(", ")
        ));
    }
}
