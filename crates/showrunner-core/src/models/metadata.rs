//! Optimization metadata model definitions.

use serde::{Deserialize, Serialize};

/// A chapter marker mirroring one segment's timing and label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chapter {
    /// Timestamp where the chapter starts (e.g. "0:45")
    pub time: String,

    /// Chapter title, identical to the segment label
    pub title: String,
}

/// Publishing metadata derived from the request and the built segments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptimizationMetadata {
    /// Video title
    pub title: String,

    /// Newline-joined description block
    pub description: String,

    /// Deduplicated, insertion-ordered tag list, capped at 12 entries
    pub tags: Vec<String>,

    /// Chapter markers, one per segment
    pub chapters: Vec<Chapter>,

    /// B-roll shot suggestions
    pub b_roll_ideas: Vec<String>,

    /// Thumbnail composition concepts
    pub thumbnail_concepts: Vec<String>,

    /// Angles for cutting vertical shorts from the video
    pub shorts_angles: Vec<String>,

    /// Retention devices to script into the edit
    pub retention_devices: Vec<String>,
}
