#[cfg(feature = "node")]
#[macro_use]
extern crate napi_derive;

pub mod ancestor;
pub mod background;
pub mod check;
pub mod document;
pub mod engine;
pub mod error;
pub mod math;
pub mod remediation;
pub mod scanner;
pub mod types;

#[cfg(feature = "node")]
pub mod bindings;

pub use ancestor::{find_passing_ancestor, AncestorPass};
pub use background::{effective_background, own_background, BackgroundResolution};
pub use check::{Check, ContrastCheck};
pub use document::{
    ancestors, Ancestors, ComputedStyle, DocumentSnapshot, Element, NodeId, Rect, StyleSource,
    TextNode,
};
pub use engine::{audit, evaluate_candidate, scan, summarize, ScanOutcome};
pub use error::{AuditError, AuditResult};
pub use math::{
    contrast_ratio, is_large_text, minimum_ratio, parse_color, relative_luminance, Color, TextSize,
};
pub use remediation::{suggest, Suggestion, SuggestionKind};
pub use scanner::{candidates, Candidate, Candidates};
pub use types::{AuditOptions, CheckReport, Finding, Stats, Summary, Verdict};

#[cfg(feature = "node")]
#[napi]
pub fn health_check() -> String {
    "contrast-audit ok".to_string()
}
