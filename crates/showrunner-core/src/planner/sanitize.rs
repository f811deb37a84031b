//! Default substitution for blank free-text fields.

use crate::params::PlanRequest;

/// Returns a request where each free-text field that is empty after trimming
/// is replaced by its [`PlanRequest::default`] value.
///
/// Only emptiness is checked against the trimmed form; a non-empty value is
/// kept verbatim, surrounding whitespace included. Enum fields pass through
/// unchanged. Sanitizing an already-sanitized request is a fixed point.
pub(crate) fn sanitize(request: &PlanRequest) -> PlanRequest {
    let defaults = PlanRequest::default();

    PlanRequest {
        topic: or_default(&request.topic, defaults.topic),
        target_audience: or_default(&request.target_audience, defaults.target_audience),
        outcome: or_default(&request.outcome, defaults.outcome),
        offer: or_default(&request.offer, defaults.offer),
        tone: request.tone,
        duration: request.duration,
        persona: request.persona,
        platform: request.platform,
        cta: or_default(&request.cta, defaults.cta),
        keywords: or_default(&request.keywords, defaults.keywords),
        monetization_focus: request.monetization_focus,
    }
}

fn or_default(value: &str, fallback: String) -> String {
    if value.trim().is_empty() {
        fallback
    } else {
        value.to_string()
    }
}
