//! Per-run records produced by the lint command.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Aggregated counters for one lint/format run.
pub struct Summary {
    pub total: usize,
    pub formatted: usize,
    pub linted: usize,
    pub format_errors: usize,
    pub lint_errors: usize,
}

impl Summary {
    /// Record one formatter outcome.
    pub fn record_format(&mut self, ok: bool) {
        if ok {
            self.formatted += 1;
        } else {
            self.format_errors += 1;
        }
    }

    /// Record one linter outcome.
    pub fn record_lint(&mut self, ok: bool) {
        if ok {
            self.linted += 1;
        } else {
            self.lint_errors += 1;
        }
    }

    pub fn has_errors(&self) -> bool {
        self.format_errors + self.lint_errors > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of a lint run that found at least one source file.
pub struct Report {
    pub summary: Summary,
    /// False when no `.chktexrc` was found and the lint pass was skipped.
    pub lint_ran: bool,
}
