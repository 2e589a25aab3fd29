use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::ancestor::find_passing_ancestor;
use crate::background::effective_background;
use crate::document::StyleSource;
use crate::error::AuditResult;
use crate::math::{contrast_ratio, parse_color, Color, TextSize};
use crate::remediation::suggest;
use crate::scanner::{candidates, element_path, snippet, Candidate};
use crate::types::{AuditOptions, CheckReport, Finding, Stats, Summary, Verdict};

/// Source of finding ids. Only UI keys depend on it.
static NEXT_FINDING_ID: AtomicU64 = AtomicU64::new(0);

fn next_finding_id() -> String {
    format!("fnd_{}", NEXT_FINDING_ID.fetch_add(1, Ordering::Relaxed))
}

/// Findings plus counts from one pass over a document.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub findings: Vec<Finding>,
    pub total_found: u32,
    pub applicable: u32,
}

/// Evaluate one candidate. Returns a finding only when its contrast is below
/// the threshold for its text size.
///
/// The background walk starts at the owning element, so its own background
/// counts before any ancestor's.
pub fn evaluate_candidate<S: StyleSource + ?Sized>(
    doc: &S,
    candidate: &Candidate<'_>,
    options: &AuditOptions,
) -> AuditResult<Option<Finding>> {
    let element = &candidate.element;
    let style = element.style;

    let foreground = style.color.as_deref().map_or(Color::BLACK, parse_color);
    let background = effective_background(doc, element)?;
    let text_size = TextSize::classify(style.font_size_px(), style.font_weight_value());
    let threshold = text_size.minimum_ratio();
    let ratio = contrast_ratio(&foreground, &background.color);

    if ratio >= threshold {
        return Ok(None);
    }

    let ancestor_pass = find_passing_ancestor(doc, element, &foreground, threshold)?;
    let suggestion = suggest(&foreground, &background.color, threshold);

    Ok(Some(Finding {
        id: next_finding_id(),
        text_node: candidate.text_node,
        element: element.id,
        snippet: snippet(candidate.text, options.snippet_max_chars),
        path: element_path(doc, element, options.path_max_depth),
        foreground,
        background: background.color,
        background_element: background.element,
        ratio,
        threshold,
        text_size,
        background_image: background.had_image,
        ancestor_pass,
        suggestion,
    }))
}

/// Evaluate every candidate of `doc`. A candidate that fails to evaluate is
/// logged and left out; the rest of the scan continues.
pub fn scan<S: StyleSource + ?Sized>(doc: &S, options: &AuditOptions) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();

    for candidate in candidates(doc) {
        outcome.total_found += 1;
        match evaluate_candidate(doc, &candidate, options) {
            Ok(finding) => {
                outcome.applicable += 1;
                outcome.findings.extend(finding);
            }
            Err(err) => {
                tracing::warn!(
                    text_node = %candidate.text_node,
                    element = %candidate.element.id,
                    error = %err,
                    "skipping contrast candidate"
                );
            }
        }
    }

    tracing::debug!(
        total = outcome.total_found,
        applicable = outcome.applicable,
        failing = outcome.findings.len(),
        "contrast scan finished"
    );
    outcome
}

/// Verdict, counts and hints for a finished scan.
pub fn summarize(outcome: &ScanOutcome, max_hints: usize) -> Summary {
    let failing = outcome.findings.len() as u32;
    let verdict = if outcome.applicable == 0 {
        Verdict::NotApplicable
    } else if failing > 0 {
        Verdict::Fail
    } else {
        Verdict::Pass
    };

    let mut seen = HashSet::new();
    let hints = outcome
        .findings
        .iter()
        .flat_map(hints_for)
        .filter(|hint| seen.insert(hint.clone()))
        .take(max_hints)
        .collect();

    Summary {
        verdict,
        stats: Stats {
            total_found: outcome.total_found,
            applicable: outcome.applicable,
            failing,
            passing: outcome.applicable.saturating_sub(failing),
        },
        hints,
    }
}

fn hints_for(finding: &Finding) -> Vec<String> {
    let mut hints = Vec::with_capacity(3);
    let suggestion = &finding.suggestion;

    if suggestion.kind.meets_target() {
        hints.push(format!(
            "Change text color {} to {} ({}) on {} to reach {:.1}:1.",
            finding.foreground,
            suggestion.color,
            suggestion.kind.label(),
            finding.background,
            finding.threshold,
        ));
    } else {
        hints.push(format!(
            "No text color reaches {:.1}:1 on {}; change the background color.",
            finding.threshold, finding.background,
        ));
    }
    if finding.background_image {
        hints.push("Text over a background image: verify the contrast visually.".to_string());
    }
    if finding.ancestor_pass.is_some() {
        hints.push(
            "An enclosing element already meets the contrast requirement; \
             check whether it is the effective background."
                .to_string(),
        );
    }
    hints
}

/// Scan and summarize in one step.
pub fn audit<S: StyleSource + ?Sized>(doc: &S, options: &AuditOptions) -> CheckReport {
    let outcome = scan(doc, options);
    let summary = summarize(&outcome, options.max_hints);
    CheckReport {
        findings: outcome.findings,
        summary,
    }
}
