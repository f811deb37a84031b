//! Parameter structure for plan generation.
//!
//! [`PlanRequest`] is the single input record of the library. It carries no
//! framework-specific derives beyond serde (plus optional schemars), so
//! interface layers can wrap it: the CLI builds one from flags and request
//! files, and other frontends can construct it directly.
//!
//! Missing fields in a serialized request fall back to the field defaults
//! (`#[serde(default)]`), so a request file only needs to name the fields it
//! overrides.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{Duration, MonetizationFocus, Persona, Platform, Tone};

/// User-supplied parameters for one plan generation.
///
/// The free-text fields tolerate empty input: the generator substitutes the
/// corresponding [`Default`] value when a field is empty after trimming. The
/// enum fields are closed domains validated at the parsing boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default)]
pub struct PlanRequest {
    /// What the video is about
    pub topic: String,

    /// Who the video speaks to
    pub target_audience: String,

    /// The transformation the viewer is promised
    pub outcome: String,

    /// The offer positioned as the mechanism
    pub offer: String,

    /// Delivery tone
    pub tone: Tone,

    /// Target runtime in minutes
    pub duration: Duration,

    /// Creator operating style
    pub persona: Persona,

    /// Distribution channel
    pub platform: Platform,

    /// Call to action
    pub cta: String,

    /// Comma-separated keyword list
    pub keywords: String,

    /// How the video makes money
    pub monetization_focus: MonetizationFocus,
}

impl Default for PlanRequest {
    /// The canonical example request, also the source of default
    /// substitutions for blank free-text fields.
    fn default() -> Self {
        Self {
            topic: "AI YouTube Automation Systems".to_string(),
            target_audience: "solo content entrepreneurs".to_string(),
            outcome: "scaling to consistent $10k months".to_string(),
            offer: "Done-With-You Automation Sprint".to_string(),
            tone: Tone::CaseStudy,
            duration: Duration::Ten,
            persona: Persona::Strategist,
            platform: Platform::Youtube,
            cta: "Grab the Automation Ops Dashboard (link in description)".to_string(),
            keywords: "youtube automation, ai workflows, content systems".to_string(),
            monetization_focus: MonetizationFocus::Service,
        }
    }
}
