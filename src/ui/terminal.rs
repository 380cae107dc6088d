//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, GqlintTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Reports go to stdout; status messages, warnings and errors go to
/// stderr so machine-readable output stays clean.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: GqlintTheme,
    mode: OutputMode,
    use_color: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, no_color: bool) -> Self {
        let use_color = !no_color && should_use_colors();
        let theme = if use_color {
            GqlintTheme::new()
        } else {
            GqlintTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
            use_color,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn use_color(&self) -> bool {
        self.use_color
    }

    fn report(&mut self, text: &str) {
        write!(self.out, "{}", text).ok();
        self.out.flush().ok();
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_output_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet, true);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn no_color_disables_color() {
        let ui = TerminalUI::new(OutputMode::Normal, true);
        assert!(!ui.use_color());
    }
}
