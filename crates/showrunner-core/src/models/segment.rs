//! Segment model definition.

use serde::{Deserialize, Serialize};

/// One timed beat of the video's script with its own visual, sound, and
/// editing guidance.
///
/// Segments are created once per plan generation and never mutated after
/// construction; they are owned exclusively by the plan that contains them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Segment {
    /// Identifier derived from the beat label and segment index
    pub id: String,

    /// Beat label from the duration timeline (e.g. "Framework reveal")
    pub label: String,

    /// Persona framing angle this segment is built around
    pub objective: String,

    /// Timestamp where the beat starts (e.g. "1:10")
    pub timing: String,

    /// Ordered narration lines
    pub script: Vec<String>,

    /// Ordered visual direction lines
    pub visual_references: Vec<String>,

    /// Ordered sound design lines
    pub sound_design: Vec<String>,

    /// Ordered notes for the editor
    pub editor_notes: Vec<String>,
}
