use console::{style, Term};
use roster::model::{Field, StudentDraft};
use roster::validation::filter_input;
use std::io::{self, BufRead};

/// Line-based prompts on stderr, answers from any reader (stdin in practice).
pub(super) struct Prompter<R: BufRead> {
    input: R,
    term: Term,
}

impl Prompter<io::StdinLock<'static>> {
    pub(super) fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> Prompter<R> {
    pub(super) fn new(input: R) -> Self {
        Self {
            input,
            term: Term::stderr(),
        }
    }

    /// Reads one line. `None` at end of input.
    pub(super) fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.term.write_str(prompt)?;
        self.term.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.term.write_line("")?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    /// Asks a yes/no question. Anything but an explicit yes, including end of input,
    /// is a no.
    pub(super) fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let prompt = format!("{} {} ", question, style("[y/N]").dim());
        let answer = self.read_line(&prompt)?.unwrap_or_default();
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }

    /// Prompts for every field, showing `current` values as defaults. Typed input is
    /// filtered per field; an empty answer keeps the default.
    ///
    /// Returns `None` if input ends before the form is complete.
    pub(super) fn fill_form(&mut self, current: &StudentDraft) -> io::Result<Option<StudentDraft>> {
        let mut draft = current.clone();
        for field in Field::ALL {
            let existing = current.get(field);
            let prompt = if existing.is_empty() {
                format!("{}: ", style(field.label()).bold())
            } else {
                format!(
                    "{} {}: ",
                    style(field.label()).bold(),
                    style(format!("[{}]", existing)).dim()
                )
            };
            let Some(answer) = self.read_line(&prompt)? else {
                return Ok(None);
            };
            if !answer.trim().is_empty() {
                draft.set(field, filter_input(field, &answer));
            }
        }
        Ok(Some(draft))
    }
}
