//! Production workflow checklists and post-publish actions.

use crate::models::WorkflowBlueprint;
use crate::params::PlanRequest;

/// Build the workflow blueprint. All entries are fixed prose except the
/// upload step, which names the target platform.
pub(crate) fn build_workflow(req: &PlanRequest) -> WorkflowBlueprint {
    WorkflowBlueprint {
        research_stack: vec![
            "HypeFury topic scraper → surface trend velocity".to_string(),
            "Glasp highlights → pull quotable stats".to_string(),
            "SparkToro audience intelligence → validate viewer psychographics".to_string(),
        ],
        automation_stack: vec![
            "Notion + Whalesync → script + CTA asset sync".to_string(),
            "Descript → overdub narration, auto filler removal".to_string(),
            "CapCut templates → fast vertical optimization".to_string(),
            "Zapier → auto-push publish metadata + thumbnails to Drive".to_string(),
        ],
        production_workflow: vec![
            "Draft bullet script using the segment objectives.".to_string(),
            "Run AI voiceover pass + manual emphasis tweaks.".to_string(),
            "Drop assets into template timeline and align captions.".to_string(),
            "Run retention check using 3-beat curiosity loop.".to_string(),
        ],
        publishing_checklist: vec![
            format!(
                "Upload to {} with metadata block and chapters.",
                req.platform.as_str()
            ),
            "Add pinned comment teasing CTA asset with trackable link.".to_string(),
            "Schedule Shorts remix 24h later to re-target engaged viewers.".to_string(),
            "Trigger email + SMS notification via marketing automation.".to_string(),
        ],
        repurposing_system: vec![
            "Convert segments into carousel slides (Canva auto layout).".to_string(),
            "Spin hook into 3 newsletter subject line tests.".to_string(),
            "Create Twitter thread with highlight clips + CTA at end.".to_string(),
        ],
        metrics_to_monitor: vec![
            "15s and 30s retention cliffs (Audience retention graph).".to_string(),
            "CTR vs baseline for the series.".to_string(),
            "Comment velocity in first 60 minutes.".to_string(),
            "Opt-in conversion rate on CTA asset.".to_string(),
        ],
    }
}

/// Build the post-publish action list. The final entry names the topic.
pub(crate) fn post_publish_actions(req: &PlanRequest) -> Vec<String> {
    vec![
        "Reply to the first 10 comments with depth to train the algorithm for conversation."
            .to_string(),
        "Pull retention analytics after 12 hours and annotate drop-offs.".to_string(),
        "Launch retargeting ad to viewers who watched 50%+ driving to CTA.".to_string(),
        "Republish audio as mini-podcast episode with call-to-action baked in.".to_string(),
        format!(
            "Update Notion content pipeline with performance notes and next experiment for {}.",
            req.topic
        ),
    ]
}
