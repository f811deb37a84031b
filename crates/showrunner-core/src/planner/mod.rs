//! The plan-generation pipeline.
//!
//! [`build_plan`] runs a strictly linear sequence of pure lookup and
//! interpolation steps over the sanitized request:
//!
//! ```text
//! sanitize ─▶ hook ─┬▶ segments ─▶ metadata ─┐
//!                   │                        ├▶ assemble
//!                   └▶ workflow, post-publish┘
//! ```
//!
//! No step calls back into an earlier one and no state is shared across
//! invocations, so the whole pipeline is a pure function: identical requests
//! produce identical plans.
//!
//! ## Submodules
//!
//! - `sanitize`: default substitution for blank free-text fields
//! - `hook`: the attention-grabbing opening line
//! - `segments`: timeline expansion with positional special cases
//! - `metadata`: title, description, tags, chapters, packaging lists
//! - `workflow`: production checklists and post-publish actions
//!
//! The submodules are crate-private; [`build_plan`] is the only entry point.

mod hook;
mod metadata;
mod sanitize;
mod segments;
mod workflow;


use crate::models::{Chapter, VideoPlan};
use crate::params::PlanRequest;

/// Generate the full content plan for a request.
///
/// This function cannot fail: the request's enum fields are closed domains,
/// every table access is an exhaustive match, and blank free-text fields are
/// recovered by default substitution.
///
/// # Examples
///
/// ```rust
/// use showrunner_core::{build_plan, PlanRequest};
///
/// let plan = build_plan(&PlanRequest::default());
/// assert_eq!(plan.segments.len(), 5);
/// assert_eq!(plan.metadata.chapters.len(), 5);
/// ```
pub fn build_plan(request: &PlanRequest) -> VideoPlan {
    let req = sanitize::sanitize(request);

    let hook = hook::build_hook(&req);
    let profile = req.tone.profile();
    let segments = segments::build_segments(&req);

    // The metadata builder receives exactly the segment-derived values it
    // needs rather than the segment slice itself.
    let chapters = segments
        .iter()
        .map(|segment| Chapter {
            time: segment.timing.clone(),
            title: segment.label.clone(),
        })
        .collect();
    let opening_objective = segments
        .first()
        .map(|segment| segment.objective.clone())
        .unwrap_or_default();
    let learning_objective = segments
        .get(1)
        .map(|segment| segment.objective.clone())
        .unwrap_or_default();
    let metadata =
        metadata::build_metadata(&req, &opening_objective, &learning_objective, chapters);

    VideoPlan {
        hook,
        promise: format!(
            "{}. Viewers finish knowing exactly how to execute {} and move toward {}.",
            profile.voice, req.topic, req.outcome
        ),
        pattern_interrupts: profile
            .pattern_interrupts
            .iter()
            .map(|line| (*line).to_string())
            .collect(),
        platform_directive: req.platform.directive().to_string(),
        segments,
        metadata,
        workflow: workflow::build_workflow(&req),
        post_publish_actions: workflow::post_publish_actions(&req),
    }
}
