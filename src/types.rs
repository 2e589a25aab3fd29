use serde::{Deserialize, Serialize};

use crate::ancestor::AncestorPass;
use crate::document::NodeId;
use crate::math::{Color, TextSize};
use crate::remediation::Suggestion;

/// Caller-supplied tuning. Contrast thresholds are fixed by WCAG 1.4.3 and
/// are not part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditOptions {
    /// Characters of text kept per finding.
    pub snippet_max_chars: usize,
    /// Levels listed in a finding's element path.
    pub path_max_depth: usize,
    /// Remediation hints kept in the summary.
    pub max_hints: usize,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            snippet_max_chars: 140,
            path_max_depth: 10,
            max_hints: 6,
        }
    }
}

/// One text node whose contrast is below its threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// UI key only; differs between runs.
    pub id: String,
    pub text_node: NodeId,
    pub element: NodeId,
    pub snippet: String,
    pub path: String,
    pub foreground: Color,
    pub background: Color,
    /// Element that supplied `background`; None when the page default applied.
    pub background_element: Option<NodeId>,
    pub ratio: f64,
    /// 3.0 or 4.5; always greater than `ratio`.
    pub threshold: f64,
    pub text_size: TextSize,
    /// A background image was declared on the way to the background;
    /// treat the ratio as low-confidence.
    pub background_image: bool,
    pub ancestor_pass: Option<AncestorPass>,
    pub suggestion: Suggestion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Verdict {
    Pass,
    Fail,
    NotApplicable,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Visible text candidates enumerated.
    pub total_found: u32,
    /// Candidates evaluated without error.
    pub applicable: u32,
    pub failing: u32,
    pub passing: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub verdict: Verdict,
    pub stats: Stats,
    /// De-duplicated, capped remediation hints.
    pub hints: Vec<String>,
}

/// What a check hands to the report collector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub findings: Vec<Finding>,
    pub summary: Summary,
}
