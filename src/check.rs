use crate::document::StyleSource;
use crate::engine;
use crate::types::{AuditOptions, CheckReport};

/// A named audit step a report collector can run against a document.
pub trait Check {
    /// Stable identifier, e.g. the WCAG success criterion number.
    fn id(&self) -> &'static str;
    fn title(&self) -> &'static str;
    /// Never fails: problems surface as findings or a not-applicable verdict.
    fn run(&self, doc: &dyn StyleSource) -> CheckReport;
}

/// WCAG 1.4.3 Contrast (Minimum).
#[derive(Debug, Clone, Default)]
pub struct ContrastCheck {
    options: AuditOptions,
}

impl ContrastCheck {
    pub const ID: &'static str = "1.4.3";
    pub const TITLE: &'static str = "Contrast (Minimum)";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: AuditOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AuditOptions {
        &self.options
    }
}

impl Check for ContrastCheck {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn title(&self) -> &'static str {
        Self::TITLE
    }

    fn run(&self, doc: &dyn StyleSource) -> CheckReport {
        let _span = tracing::debug_span!("check", id = Self::ID).entered();
        engine::audit(doc, &self.options)
    }
}
