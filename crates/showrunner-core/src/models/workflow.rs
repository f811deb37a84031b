//! Workflow blueprint model definition.

use serde::{Deserialize, Serialize};

/// Production workflow checklists attached to every plan.
///
/// The lists are fixed prose; only the publishing checklist interpolates the
/// request (the target platform).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkflowBlueprint {
    /// Tools and passes for topic research
    pub research_stack: Vec<String>,

    /// Automation tooling for scripting and asset handling
    pub automation_stack: Vec<String>,

    /// Ordered production steps from draft to retention check
    pub production_workflow: Vec<String>,

    /// Publishing checklist, parameterized by platform
    pub publishing_checklist: Vec<String>,

    /// How to repurpose the video across formats
    pub repurposing_system: Vec<String>,

    /// Metrics to watch after publishing
    pub metrics_to_monitor: Vec<String>,
}
