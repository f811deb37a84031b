//! Publishing metadata derivation.

use crate::models::{Chapter, OptimizationMetadata};
use crate::params::PlanRequest;

/// Build the optimization metadata.
///
/// Takes the two segment objectives it interpolates (the opening segment's
/// for the shorts angle, the second segment's for the description) and the
/// prebuilt chapter list, instead of the segment slice itself.
pub(crate) fn build_metadata(
    req: &PlanRequest,
    opening_objective: &str,
    learning_objective: &str,
    chapters: Vec<Chapter>,
) -> OptimizationMetadata {
    let description = [
        format!("🔥 What you'll learn: {learning_objective}"),
        format!(
            "🚀 Why it matters: {} for {}",
            req.outcome, req.target_audience
        ),
        format!(
            "🧠 Who this is for: {} operators deploying {}",
            req.persona.as_str(),
            req.offer
        ),
        format!(
            "💰 Monetization angle: {}",
            req.monetization_focus.angle()
        ),
        format!("📩 CTA: {}", req.cta),
    ]
    .join("\n");

    let shorts_angles = vec![
        format!("Turn the hook into a 30s short focusing on \"{opening_objective}\""),
        "Pull the boldest data point into a green-screen style breakdown".to_string(),
        "Clip the CTA pay-off and wrap with loop back to the hook".to_string(),
    ];

    let topic_lead = req.topic.split_whitespace().next().unwrap_or_default();
    let thumbnail_concepts = vec![
        format!(
            "Split-screen BEFORE/AFTER with bold text: \"{}\"",
            req.outcome
        ),
        format!("High-contrast portrait with overlay \"The {topic_lead} Formula\""),
        format!(
            "Workflow screenshot blurred with headline: \"{} Playbook\"",
            req.offer
        ),
    ];

    OptimizationMetadata {
        title: format!("{}: {} Without Burning Out", req.topic, req.outcome),
        description,
        tags: build_tags(req),
        chapters,
        b_roll_ideas: vec![
            "Screen recordings of dashboard metrics ticking upward.".to_string(),
            "Behind-the-scenes footage of automation workflow setup.".to_string(),
            "User testimonial clips with kinetic typography overlays.".to_string(),
            "Stock clips showing target audience struggling vs succeeding.".to_string(),
        ],
        thumbnail_concepts,
        shorts_angles,
        retention_devices: vec![
            "Deliver numbered promises that must be completed to unlock the CTA.".to_string(),
            "Seed micro-cliffhangers at the end of each segment.".to_string(),
            "Overdeliver at the payoff by bundling a bonus tactic.".to_string(),
        ],
    }
}

/// Tags: lowercased topic/audience/offer, two derived phrases, then the
/// trimmed keyword list as given. Exact-match deduplication preserving
/// insertion order, truncated to the first 12 entries.
fn build_tags(req: &PlanRequest) -> Vec<String> {
    let topic = req.topic.to_lowercase();
    let audience = req.target_audience.to_lowercase();

    let mut candidates = vec![
        topic.clone(),
        audience.clone(),
        req.offer.to_lowercase(),
        format!("{topic} tutorial"),
        format!("{audience} growth"),
    ];
    candidates.extend(
        req.keywords
            .split(',')
            .map(str::trim)
            .filter(|keyword| !keyword.is_empty())
            .map(String::from),
    );

    let mut tags: Vec<String> = Vec::new();
    for candidate in candidates {
        if !tags.contains(&candidate) {
            tags.push(candidate);
        }
    }
    tags.truncate(12);
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_dedup_is_exact_match() {
        let request = PlanRequest {
            topic: "Edits".to_string(),
            keywords: "edits, Edits, edits".to_string(),
            ..PlanRequest::default()
        };

        let tags = build_tags(&request);
        // "edits" (lowercased topic) absorbs the lowercase keyword, but the
        // capitalized keyword survives dedup.
        assert_eq!(tags.iter().filter(|t| t.as_str() == "edits").count(), 1);
        assert!(tags.contains(&"Edits".to_string()));
    }

    #[test]
    fn test_tags_capped_at_twelve() {
        let request = PlanRequest {
            keywords: "k1,k2,k3,k4,k5,k6,k7,k8,k9,k10".to_string(),
            ..PlanRequest::default()
        };

        let tags = build_tags(&request);
        assert_eq!(tags.len(), 12);
        // Insertion order: the five derived tags first, then keywords.
        assert_eq!(tags[0], "ai youtube automation systems");
        assert_eq!(tags[5], "k1");
        assert_eq!(tags[11], "k7");
    }
}
