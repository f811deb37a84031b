use showrunner_core::{
    build_plan, Duration, MonetizationFocus, Persona, PlanRequest, Platform, Tone,
};

/// Helper building a fully custom request for integration tests.
fn custom_request() -> PlanRequest {
    PlanRequest {
        topic: "Newsletter growth loops".to_string(),
        target_audience: "bootstrapped founders".to_string(),
        outcome: "adding 1k subscribers a month".to_string(),
        offer: "The Loop Audit".to_string(),
        tone: Tone::Educational,
        duration: Duration::Fifteen,
        persona: Persona::Marketer,
        platform: Platform::Podcast,
        cta: "Book the audit call".to_string(),
        keywords: "growth loops, referrals".to_string(),
        monetization_focus: MonetizationFocus::Community,
    }
}

#[test]
fn test_complete_plan_wiring() {
    let plan = build_plan(&custom_request());

    // Hook and promise carry the request through.
    assert!(plan.hook.contains("bootstrapped founders"));
    assert!(plan.hook.contains("Newsletter growth loops using growth loops"));
    assert!(plan
        .promise
        .contains("execute Newsletter growth loops and move toward adding 1k subscribers a month"));

    // Segment content references the offer and the CTA.
    assert!(plan.segments[2]
        .script
        .iter()
        .any(|line| line.contains("The Loop Audit")));
    assert!(plan.segments[1]
        .editor_notes
        .iter()
        .any(|line| line.contains("Book the audit call")));

    // Fifteen-minute timeline labels.
    assert_eq!(plan.segments[2].label, "Mechanism");
    assert_eq!(plan.segments[2].timing, "1:20");

    // Metadata derives from both request and segments.
    assert_eq!(
        plan.metadata.title,
        "Newsletter growth loops: adding 1k subscribers a month Without Burning Out"
    );
    assert_eq!(plan.metadata.chapters[4].title, "CTA");
    assert!(plan
        .metadata
        .description
        .contains("🧠 Who this is for: marketer operators deploying The Loop Audit"));
    assert!(plan
        .metadata
        .thumbnail_concepts
        .iter()
        .any(|concept| concept.contains("The Newsletter Formula")));

    // Workflow and post-publish interpolations.
    assert!(plan.workflow.publishing_checklist[0].contains("podcast"));
    assert!(plan
        .post_publish_actions
        .last()
        .expect("five actions")
        .contains("Newsletter growth loops"));
}

#[test]
fn test_markdown_rendering_covers_every_section() {
    let markdown = build_plan(&custom_request()).to_string();

    for heading in [
        "## Pattern Interrupts",
        "## Segments",
        "#### Script",
        "#### Visual References",
        "#### Sound Design",
        "#### Editor Notes",
        "## Metadata",
        "#### Chapters",
        "#### Thumbnail Concepts",
        "## Workflow",
        "#### Publishing Checklist",
        "## Post-Publish Actions",
    ] {
        assert!(
            markdown.contains(heading),
            "missing heading: {heading}"
        );
    }

    // The plan title renders as the top-level heading.
    assert!(markdown.starts_with("# Newsletter growth loops:"));
}

#[test]
fn test_plan_serializes_for_machine_consumers() {
    let plan = build_plan(&custom_request());

    let json = serde_json::to_string_pretty(&plan).expect("plan serializes");
    let parsed: showrunner_core::VideoPlan =
        serde_json::from_str(&json).expect("plan deserializes");
    assert_eq!(parsed, plan);
}

#[test]
fn test_shared_objective_between_description_and_second_segment() {
    let plan = build_plan(&custom_request());

    let learn_line = plan
        .metadata
        .description
        .lines()
        .next()
        .expect("description has lines");
    assert_eq!(
        learn_line,
        format!("🔥 What you'll learn: {}", plan.segments[1].objective)
    );
}
