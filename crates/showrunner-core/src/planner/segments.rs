//! Timeline expansion into script segments.
//!
//! The duration selects a five-beat timecode table; each beat is expanded
//! into a segment with three base script, visual, sound, and editor-note
//! lines, then the first and last segments get positional extras. Persona
//! angles (three per persona) are reused cyclically as segment objectives,
//! so over five segments the first and fourth share an objective source.

use crate::models::Segment;
use crate::params::PlanRequest;

/// Role of a segment within the timeline, derived from its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentPosition {
    First,
    Middle,
    Last,
}

impl SegmentPosition {
    fn of(index: usize, count: usize) -> Self {
        if index == 0 {
            SegmentPosition::First
        } else if index + 1 == count {
            SegmentPosition::Last
        } else {
            SegmentPosition::Middle
        }
    }
}

/// Expand the duration timeline into the ordered segment list.
pub(crate) fn build_segments(req: &PlanRequest) -> Vec<Segment> {
    let profile = req.tone.profile();
    let angles = req.persona.angles();
    let timeline = req.duration.timeline();
    let count = timeline.len();

    timeline
        .into_iter()
        .enumerate()
        .map(|(index, (timestamp, label))| {
            // Angles cycle with period 3 over the 5 beats.
            let objective = angles[index % angles.len()];

            let mut script = vec![
                format!(
                    "Open with a {} beat that dramatizes: {}.",
                    req.tone.as_str(),
                    req.topic
                ),
                format!(
                    "Anchor why it matters for {} aiming for {}.",
                    req.target_audience, req.outcome
                ),
                format!(
                    "Introduce the mechanism: {} — position it as the bridge.",
                    req.offer
                ),
            ];

            let mut visuals = vec![
                format!(
                    "Overlay high-contrast captions with keywords: {}.",
                    req.keywords
                ),
                "Cutaway to proof asset (analytics, testimonial, workflow screen recording)."
                    .to_string(),
                format!("Use motion graphics to highlight {} in action.", req.offer),
            ];

            let mut sound = vec![
                "Bed: High-energy trap beat at 92-100 BPM, drop mids during key lines.".to_string(),
                "SFX: Quick riser + impact when revealing framework steps.".to_string(),
                "Insert subtle woosh transitions between beats to maintain retention.".to_string(),
            ];

            let editor_notes = vec![
                format!("Use {} pacing.", profile.pacing.to_lowercase()),
                format!("Layer on-screen text summarizing: {objective}."),
                format!("Insert CTA reminder: {}.", req.cta),
            ];

            match SegmentPosition::of(index, count) {
                SegmentPosition::First => {
                    script.insert(
                        0,
                        format!(
                            "Deliver a direct callout: \"{}, if you're {}, you can't ignore this.\"",
                            req.target_audience, req.outcome
                        ),
                    );
                    script.push(format!(
                        "Seed curiosity by teasing the final {}-minute CTA payoff.",
                        req.duration.as_str()
                    ));
                }
                SegmentPosition::Last => {
                    script.push(format!("Hard CTA: {}.", req.cta));
                    visuals.push(format!(
                        "Final frame: CTA overlay pointing to {} lead magnet.",
                        req.offer
                    ));
                    sound.push("Drop music volume by 40% to spotlight CTA line.".to_string());
                }
                SegmentPosition::Middle => {}
            }

            Segment {
                id: segment_id(label, index),
                label: label.to_string(),
                objective: objective.to_string(),
                timing: timestamp.to_string(),
                script,
                visual_references: visuals,
                sound_design: sound,
                editor_notes,
            }
        })
        .collect()
}

/// Lowercased whitespace-to-hyphen slug of the label, suffixed with the
/// segment index. Unique by construction since the index is monotonic.
fn segment_id(label: &str, index: usize) -> String {
    let slug = label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("{slug}-{index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_id_slugs_whitespace() {
        assert_eq!(segment_id("Framework reveal", 2), "framework-reveal-2");
        assert_eq!(segment_id("CTA & loop close", 4), "cta-&-loop-close-4");
        assert_eq!(segment_id("Hook", 0), "hook-0");
    }

    #[test]
    fn test_segment_position_roles() {
        assert_eq!(SegmentPosition::of(0, 5), SegmentPosition::First);
        assert_eq!(SegmentPosition::of(2, 5), SegmentPosition::Middle);
        assert_eq!(SegmentPosition::of(4, 5), SegmentPosition::Last);
    }
}
