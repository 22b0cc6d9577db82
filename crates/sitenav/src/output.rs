//! Colored terminal output utilities.

use console::{Style, Term};

/// Width of the label column in [`Output::field`].
const LABEL_WIDTH: usize = 8;

/// Terminal output formatter.
///
/// Status lines go to stderr so that rendered JSON on stdout stays clean.
pub(crate) struct Output {
    status: Term,
    data: Term,
    green: Style,
    yellow: Style,
    red: Style,
    cyan_bold: Style,
    dim: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            status: Term::stderr(),
            data: Term::stdout(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Print a `label: value` summary line with a dimmed label.
    pub(crate) fn field(&self, label: &str, value: &str) {
        let label = format!("{:<LABEL_WIDTH$}", format!("{label}:"));
        let _ = self
            .status
            .write_line(&format!("  {} {value}", self.dim.apply_to(label)));
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.status.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.status.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.status.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print a highlighted message (cyan bold).
    pub(crate) fn highlight(&self, msg: &str) {
        let _ = self
            .status
            .write_line(&self.cyan_bold.apply_to(msg).to_string());
    }

    /// Write command output to stdout.
    ///
    /// Unlike status lines, a failed write here is an error.
    pub(crate) fn data(&self, content: &str) -> std::io::Result<()> {
        self.data.write_line(content)
    }
}
