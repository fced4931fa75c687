//! REPL (Read-Eval-Print Loop) for the enquiry form

use super::command::FormCommand;
use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use folio_application::{Clock, ContactConfig, EnquirySession, SessionState, SubmitOutcome};
use folio_domain::EnquiryField;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 500;

/// What handling one line produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    /// Text to print (may be empty)
    pub output: String,
    /// Whether the REPL should stop
    pub exit: bool,
}

impl LineOutcome {
    fn print(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            exit: false,
        }
    }

    fn exit(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            exit: true,
        }
    }
}

/// Interactive enquiry form
pub struct EnquiryRepl<C: Clock> {
    session: EnquirySession<C>,
    contact: ContactConfig,
    history_path: Option<PathBuf>,
}

impl<C: Clock> EnquiryRepl<C> {
    /// Create a new EnquiryRepl
    pub fn new(session: EnquirySession<C>, contact: ContactConfig) -> Self {
        Self {
            session,
            contact,
            history_path: None,
        }
    }

    /// Persist line history to this file
    pub fn with_history(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    pub fn session(&self) -> &EnquirySession<C> {
        &self.session
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();

        if let Some(history) = self.history_path.as_deref().and_then(open_history) {
            line_editor = line_editor.with_history(Box::new(history));
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("enquiry".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let outcome = self.handle_line(&line);
                    if !outcome.output.is_empty() {
                        println!("{}", outcome.output);
                    }
                    if outcome.exit {
                        break;
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Handle one line of input against the session
    pub fn handle_line(&mut self, line: &str) -> LineOutcome {
        let line = line.trim();
        if line.is_empty() {
            return LineOutcome::print("");
        }

        let command = match FormCommand::parse(line) {
            Ok(command) => command,
            Err(e) => {
                return LineOutcome::print(format!(
                    "{}\nType /help for available commands",
                    e.to_string().red()
                ));
            }
        };
        debug!(?command, "Form command");

        self.execute(command)
    }

    fn execute(&mut self, command: FormCommand) -> LineOutcome {
        let confirming = self.session.state() == SessionState::Confirming;

        match command {
            FormCommand::Set(..) | FormCommand::Clear(_) if confirming => LineOutcome::print(
                "The summary is open. Use /close to return to the form.".yellow().to_string(),
            ),
            FormCommand::Set(field, value) => match self.session.update_field(field, &value) {
                Ok(()) => LineOutcome::print(format!("{} {}", "✓".green(), field.label())),
                Err(e) => LineOutcome::print(e.to_string().red().to_string()),
            },
            FormCommand::Clear(field) => {
                self.session.clear_field(field);
                LineOutcome::print(format!("Cleared {}", field.label()))
            }
            FormCommand::Show => LineOutcome::print(self.render_current()),
            FormCommand::Fields => LineOutcome::print(Self::fields_help()),
            FormCommand::Submit => {
                let output = match self.session.attempt_submit() {
                    SubmitOutcome::Accepted(accepted) => format!(
                        "{}\n{}",
                        ConsoleFormatter::format_summary(accepted, &self.contact),
                        "Use /close to dismiss the summary.".dimmed()
                    ),
                    SubmitOutcome::Rejected(errors) => ConsoleFormatter::format_errors(errors),
                };
                LineOutcome::print(output)
            }
            FormCommand::Close => {
                if confirming {
                    self.session.dismiss_summary();
                    LineOutcome::print("Summary closed. Your details are still in the form.")
                } else {
                    LineOutcome::print("No summary is open.")
                }
            }
            FormCommand::Reset => {
                self.session.reset_draft();
                LineOutcome::print("Started a new enquiry.")
            }
            FormCommand::Help => LineOutcome::print(Self::help()),
            FormCommand::Quit => LineOutcome::exit("Bye!"),
        }
    }

    /// The summary while confirming, otherwise the form
    fn render_current(&self) -> String {
        match (self.session.state(), self.session.accepted()) {
            (SessionState::Confirming, Some(accepted)) => {
                ConsoleFormatter::format_summary(accepted, &self.contact)
            }
            _ => ConsoleFormatter::format_draft(self.session.draft(), self.session.errors()),
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            Get In Touch - Enquiry           │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("To: {}", self.contact.recipient_email);
        println!();
        println!("{}", Self::help());
    }

    fn help() -> String {
        [
            "Commands:",
            "  <field> = <value>        - Fill in a field",
            "  /set <field> <value>     - Fill in a field",
            "  /clear <field>           - Empty a field",
            "  /show                    - Show the form (or the open summary)",
            "  /fields                  - List field names",
            "  /submit                  - Validate and send",
            "  /close                   - Dismiss the summary",
            "  /reset                   - Start a new enquiry",
            "  /help, /h, /?            - Show this help",
            "  /quit, /exit, /q         - Exit",
        ]
        .join("\n")
    }

    fn fields_help() -> String {
        let mut lines = vec!["Fields:".to_string()];
        for field in EnquiryField::ALL {
            let hint = field
                .placeholder()
                .map(|p| format!(" ({})", p))
                .unwrap_or_default();
            lines.push(format!("  {:<20} {}{}", field.as_str(), field.label(), hint));
        }
        lines.join("\n")
    }
}

/// Open the history file, creating its directory first.
///
/// Returns `None` (after logging why) when either step fails; the REPL then
/// runs without persistent history.
fn open_history(path: &Path) -> Option<FileBackedHistory> {
    if let Some(parent) = path.parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        warn!(
            "Could not create history directory {}: {}",
            parent.display(),
            e
        );
        return None;
    }

    match FileBackedHistory::with_file(HISTORY_CAPACITY, path.to_path_buf()) {
        Ok(history) => Some(history),
        Err(e) => {
            warn!("Could not open history file {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use folio_application::FixedClock;
    use std::sync::Arc;

    fn repl() -> EnquiryRepl<FixedClock> {
        let clock = Arc::new(FixedClock::new(
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        ));
        EnquiryRepl::new(
            EnquirySession::new(clock),
            ContactConfig::new("me@example.com"),
        )
    }

    fn fill_valid(repl: &mut EnquiryRepl<FixedClock>) {
        for line in [
            "firstName = Karim",
            "/set projectDescription Build a site",
            "email = a@b.com",
            "confirmEmail = A@B.com",
            "phone = 07123456789",
            "preferredContact = email",
            "projectDate = 2026-10-20",
            "duration = 2 weeks",
        ] {
            assert!(!repl.handle_line(line).exit);
        }
    }

    #[test]
    fn test_valid_enquiry_shows_summary() {
        let mut repl = repl();
        fill_valid(&mut repl);

        let outcome = repl.handle_line("/submit");
        assert!(outcome.output.contains("Enquiry Summary"));
        assert!(outcome.output.contains("me@example.com"));
        assert_eq!(repl.session().state(), SessionState::Confirming);
    }

    #[test]
    fn test_invalid_enquiry_lists_errors() {
        let mut repl = repl();
        fill_valid(&mut repl);
        repl.handle_line("confirmEmail = different@b.com");

        let outcome = repl.handle_line("/submit");
        assert!(outcome.output.contains("Emails do not match."));
        assert_eq!(repl.session().state(), SessionState::Editing);
        assert_eq!(repl.session().errors().len(), 1);
    }

    #[test]
    fn test_edits_blocked_while_summary_open() {
        let mut repl = repl();
        fill_valid(&mut repl);
        repl.handle_line("/submit");

        let outcome = repl.handle_line("firstName = Someone");
        assert!(outcome.output.contains("/close"));
        assert_eq!(repl.session().draft().first_name, "Karim");

        repl.handle_line("/close");
        assert_eq!(repl.session().state(), SessionState::Editing);
        repl.handle_line("firstName = Someone");
        assert_eq!(repl.session().draft().first_name, "Someone");
        assert!(repl.session().accepted().is_some());
    }

    #[test]
    fn test_bad_date_is_reported_and_ignored() {
        let mut repl = repl();
        let outcome = repl.handle_line("projectDate = next week");
        assert!(outcome.output.contains("Invalid date"));
        assert!(repl.session().draft().project_date.is_none());
    }

    #[test]
    fn test_unknown_command() {
        let mut repl = repl();
        let outcome = repl.handle_line("/dance");
        assert!(outcome.output.contains("Unknown command"));
        assert!(!outcome.exit);
    }

    #[test]
    fn test_show_renders_form_with_errors() {
        let mut repl = repl();
        repl.handle_line("/submit");
        let outcome = repl.handle_line("/show");
        assert!(outcome.output.contains("Send Me a Message"));
        assert!(outcome.output.contains("Please enter your first name."));
    }

    #[test]
    fn test_reset_and_quit() {
        let mut repl = repl();
        fill_valid(&mut repl);
        repl.handle_line("/reset");
        assert!(repl.session().draft().is_blank());
        assert!(repl.handle_line("/quit").exit);
    }

    #[test]
    fn test_open_history_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.txt");
        assert!(open_history(&path).is_some());
        assert!(dir.path().join("nested").is_dir());
    }

    #[test]
    fn test_open_history_under_a_file_gives_none() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().join("history.txt");
        assert!(open_history(&path).is_none());
    }

    #[test]
    fn test_blank_line_is_ignored() {
        let mut repl = repl();
        let outcome = repl.handle_line("   ");
        assert!(outcome.output.is_empty());
        assert!(!outcome.exit);
    }
}
