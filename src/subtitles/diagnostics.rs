//! Scoped collector for a subtitle provider's diagnostic output.

/// Messages captured during one provider call.
///
/// Create one per call, pass it in, and drop it when the call's outcome has
/// been logged.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    debug: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn debug(&mut self, msg: impl Into<String>) {
        self.debug.push(msg.into());
    }

    pub fn warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Sort a tool's stderr into errors, warnings and debug lines by prefix.
    pub fn absorb(&mut self, output: &str) {
        for line in output.lines().map(str::trim_end).filter(|l| !l.trim().is_empty()) {
            if line.starts_with("ERROR:") {
                self.error(line);
            } else if line.starts_with("WARNING:") {
                self.warning(line);
            } else {
                self.debug(line);
            }
        }
    }

    pub fn debug_lines(&self) -> &[String] {
        &self.debug
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.debug.is_empty() && self.warnings.is_empty() && self.errors.is_empty()
    }

    /// All error lines joined by a space, for a single log line.
    pub fn error_summary(&self) -> String {
        self.errors.join(" ")
    }
}
