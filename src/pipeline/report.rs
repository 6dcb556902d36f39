use std::fmt;

use crate::foundation::error::ForgeError;

/// Category of a skipped item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum IssueKind {
    /// Image produced no regions.
    EmptySegmentation,
    /// No direction in a label or name.
    UnrecognizedDirection,
    /// Name did not follow the grammar.
    GrammarMismatch,
    /// Key already taken by an earlier item.
    DuplicateAxisValues,
    /// Item was structurally unusable (for example an empty frame list).
    InvalidInput,
}

impl IssueKind {
    fn from_error(err: &ForgeError) -> Self {
        match err {
            ForgeError::EmptySegmentation(_) => Self::EmptySegmentation,
            ForgeError::UnrecognizedDirection(_) => Self::UnrecognizedDirection,
            ForgeError::GrammarMismatch(_) => Self::GrammarMismatch,
            ForgeError::DuplicateAxisValues(_) => Self::DuplicateAxisValues,
            _ => Self::InvalidInput,
        }
    }
}

/// One skipped item.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Issue {
    /// Category.
    pub kind: IssueKind,
    /// Offending name or label, verbatim.
    pub subject: String,
    /// Human-readable cause.
    pub detail: String,
}

impl Issue {
    /// Classify `err` for the item called `subject`.
    pub fn from_error(subject: impl Into<String>, err: &ForgeError) -> Self {
        Self {
            kind: IssueKind::from_error(err),
            subject: subject.into(),
            detail: err.to_string(),
        }
    }
}

/// Counts and offending names for one batch run.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BatchReport {
    /// Items that produced output.
    pub processed: usize,
    /// Items that were skipped.
    pub skipped: usize,
    /// One entry per skipped item.
    pub issues: Vec<Issue>,
}

impl BatchReport {
    /// Count a successful item.
    pub fn record_ok(&mut self) {
        self.processed += 1;
    }

    /// Count a skipped item and log it.
    pub fn record_skip(&mut self, subject: impl Into<String>, err: &ForgeError) {
        let issue = Issue::from_error(subject, err);
        tracing::warn!(subject = %issue.subject, kind = ?issue.kind, "skipped: {}", issue.detail);
        self.skipped += 1;
        self.issues.push(issue);
    }

    /// `true` when nothing was skipped.
    pub fn is_clean(&self) -> bool {
        self.skipped == 0 && self.issues.is_empty()
    }

    /// Issues of one kind.
    pub fn issues_of(&self, kind: IssueKind) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.kind == kind)
    }

    /// Multi-line summary: counts, then one line per issue.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "processed {}, skipped {}", self.processed, self.skipped)?;
        for issue in &self.issues {
            write!(f, "\n  {:?}: {} ({})", issue.kind, issue.subject, issue.detail)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/report.rs"]
mod tests;
