//! Plan model definition.

use serde::{Deserialize, Serialize};

use super::{OptimizationMetadata, Segment, WorkflowBlueprint};

/// The full generated content package for one request.
///
/// Constructed fresh on every generation; no identity persists across
/// invocations and the caller takes full ownership of the returned value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoPlan {
    /// Attention-grabbing opening line
    pub hook: String,

    /// What the viewer is promised to walk away with
    pub promise: String,

    /// Tone-specific attention-reset devices
    pub pattern_interrupts: Vec<String>,

    /// Packaging directive for the target platform
    pub platform_directive: String,

    /// The five timed script segments, in order
    pub segments: Vec<Segment>,

    /// Publishing metadata (title, description, tags, chapters, ...)
    pub metadata: OptimizationMetadata,

    /// Production workflow checklists
    pub workflow: WorkflowBlueprint,

    /// Actions to take after the video is live
    pub post_publish_actions: Vec<String>,
}
