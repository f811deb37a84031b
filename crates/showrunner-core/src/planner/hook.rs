//! The attention-grabbing opening line.

use crate::params::PlanRequest;

/// Build the hook from the sanitized request.
///
/// The persona's first framing angle is lowercased and folded into a fixed
/// sentence; when keywords are present the first comma-separated keyword is
/// worked in as a "using ..." clause.
pub(crate) fn build_hook(req: &PlanRequest) -> String {
    let angle = req.persona.angles()[0];

    let keyword_clause = if req.keywords.trim().is_empty() {
        String::new()
    } else {
        let first = req.keywords.split(',').next().unwrap_or_default().trim();
        format!(" using {first}")
    };

    format!(
        "Stop scrolling, {}! {}{} is the difference between {} and staying stuck — here's the playbook {}",
        req.target_audience,
        req.topic,
        keyword_clause,
        req.outcome,
        angle.to_lowercase()
    )
}
