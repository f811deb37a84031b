//! Closed request enums and their static lookup tables.
//!
//! Every table the generator consumes (tone profiles, persona angles,
//! platform directives, monetization angles, duration timelines) is an
//! exhaustive match over one of these enums, so a missing entry is a compile
//! error rather than a runtime degradation. Out-of-domain labels are rejected
//! at the parsing boundary by the `FromStr` implementations.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Delivery tone of the video, driving voice, pacing, and pattern interrupts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    /// Expert breakdown with actionable steps
    Educational,

    /// Transformation arc with emotional stakes
    Story,

    /// Contrarian myth-busting
    Controversial,

    /// Data-driven real-world example
    CaseStudy,

    /// High-energy vision casting
    Inspirational,
}

/// Voice, pacing, and attention-reset devices associated with a [`Tone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneProfile {
    /// Narrator voice direction
    pub voice: &'static str,

    /// Delivery speed and rhythm direction
    pub pacing: &'static str,

    /// Overall storytelling structure
    pub narrative_style: &'static str,

    /// Scripted attention-reset devices inserted to combat drop-off
    pub pattern_interrupts: [&'static str; 3],
}

impl Tone {
    /// Convert to the wire label used in request files and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Educational => "educational",
            Tone::Story => "story",
            Tone::Controversial => "controversial",
            Tone::CaseStudy => "case-study",
            Tone::Inspirational => "inspirational",
        }
    }

    /// The voice/pacing/narrative/pattern-interrupt table for this tone.
    pub fn profile(&self) -> ToneProfile {
        match self {
            Tone::Educational => ToneProfile {
                voice: "Confident subject-matter expert with actionable breakdowns",
                pacing: "Fast-paced but structured with clear transitions",
                narrative_style: "Step-by-step roadmapping anchored in data and case studies",
                pattern_interrupts: [
                    "Drop a surprising statistic that reframes the problem",
                    "Cut to a quick whiteboard sketch highlighting the framework",
                    "Flash on-screen checklist that viewers can screenshot",
                ],
            },
            Tone::Story => ToneProfile {
                voice: "Relatable narrator unpacking a transformation arc",
                pacing: "Dynamic ebb and flow, pushing tension before payoff",
                narrative_style: "Hero's journey with emotional stakes and vivid imagery",
                pattern_interrupts: [
                    "Reveal a turning-point moment with cinematic underscoring",
                    "Insert a POV b-roll sequence to immerse the viewer",
                    "Drop a rhetorical question inviting comments",
                ],
            },
            Tone::Controversial => ToneProfile {
                voice: "Bold contrarian challenging mainstream beliefs",
                pacing: "Snappy delivery with deliberate pauses for emphasis",
                narrative_style: "Myth-busting backed by proof and bold claims",
                pattern_interrupts: [
                    "Flash bold text overlay summarizing a hot take",
                    "Cut to split-screen comparison of old vs new paradigm",
                    "Insert tweet-style receipts validating the argument",
                ],
            },
            Tone::CaseStudy => ToneProfile {
                voice: "Analytical breakdown of real-world example",
                pacing: "Methodical pacing with data-driven reveals",
                narrative_style: "Problem / diagnosis / execution / measurable outcome",
                pattern_interrupts: [
                    "Reveal a milestone metric with animated counter",
                    "Show raw dashboard or spreadsheet snippet",
                    "Pause to highlight a 'what most people miss' insight",
                ],
            },
            Tone::Inspirational => ToneProfile {
                voice: "High-energy motivator with cinematic momentum",
                pacing: "Ascending pacing culminating in a rallying CTA",
                narrative_style: "Vision casting tied to actionable next steps",
                pattern_interrupts: [
                    "Smash cut to aspirational montage with bold typography",
                    "Drop in a quote-on-screen with punchy sfx",
                    "Use a quick beat drop paired with onscreen transformation",
                ],
            },
        }
    }
}

impl FromStr for Tone {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "educational" => Ok(Tone::Educational),
            "story" => Ok(Tone::Story),
            "controversial" => Ok(Tone::Controversial),
            "case-study" => Ok(Tone::CaseStudy),
            "inspirational" => Ok(Tone::Inspirational),
            _ => Err(PlanError::unknown_label(
                "tone",
                s,
                &[
                    "educational",
                    "story",
                    "controversial",
                    "case-study",
                    "inspirational",
                ],
            )),
        }
    }
}

/// Creator operating style, driving the framing angles reused across segments.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    /// Systems thinker optimizing for compounding leverage
    Strategist,

    /// Personality-led producer optimizing for parasocial depth
    Creator,

    /// Process owner optimizing for SOPs and hand-offs
    Operator,

    /// Funnel owner optimizing for distribution and conversion
    Marketer,
}

impl Persona {
    /// Convert to the wire label used in request files and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Strategist => "strategist",
            Persona::Creator => "creator",
            Persona::Operator => "operator",
            Persona::Marketer => "marketer",
        }
    }

    /// Framing angles for this persona, reused cyclically across segments.
    pub fn angles(&self) -> [&'static str; 3] {
        match self {
            Persona::Strategist => [
                "Map the macro goal to a system that compounds results",
                "Quantify impact using north-star metrics",
                "Highlight leverage points that minimize operator time",
            ],
            Persona::Creator => [
                "Keep production lightweight with repurposable assets",
                "Inject personality-driven hooks that build parasocial depth",
                "Balance storytelling with hard-edged takeaways",
            ],
            Persona::Operator => [
                "Automate repeatable tasks and track SOP compliance",
                "Optimize hand-offs between research, scripting, and editing",
                "Bake in QA checkpoints before publishing push",
            ],
            Persona::Marketer => [
                "Align topic with funnel stage and monetization angle",
                "Engineer retention with curiosity loops and CTAs",
                "Cross-pollinate distribution across owned media",
            ],
        }
    }
}

impl FromStr for Persona {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strategist" => Ok(Persona::Strategist),
            "creator" => Ok(Persona::Creator),
            "operator" => Ok(Persona::Operator),
            "marketer" => Ok(Persona::Marketer),
            _ => Err(PlanError::unknown_label(
                "persona",
                s,
                &["strategist", "creator", "operator", "marketer"],
            )),
        }
    }
}

/// Distribution channel the plan is optimized for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Shorts,
    Tiktok,
    Instagram,
    Podcast,
}

impl Platform {
    /// Convert to the wire label used in request files and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Youtube => "youtube",
            Platform::Shorts => "shorts",
            Platform::Tiktok => "tiktok",
            Platform::Instagram => "instagram",
            Platform::Podcast => "podcast",
        }
    }

    /// Channel-specific packaging directive surfaced on the plan.
    pub fn directive(&self) -> &'static str {
        match self {
            Platform::Youtube => {
                "Design opening 8 seconds to maximize retention, lean on curiosity gaps, deliver a strong promise before 0:15."
            }
            Platform::Shorts => {
                "Lead with the hook in the first second, maintain punchy jump cuts, end on a loop-friendly call-back."
            }
            Platform::Tiktok => {
                "Blend meme-speed pacing with bold captions; on-screen text must stand alone without narration."
            }
            Platform::Instagram => {
                "Keep vertical framing polished, bake in share-to-story triggers and DM-based CTAs."
            }
            Platform::Podcast => {
                "Emphasize narrative clarity and audio contrast, support with show notes and timestamps."
            }
        }
    }
}

impl FromStr for Platform {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "youtube" => Ok(Platform::Youtube),
            "shorts" => Ok(Platform::Shorts),
            "tiktok" => Ok(Platform::Tiktok),
            "instagram" => Ok(Platform::Instagram),
            "podcast" => Ok(Platform::Podcast),
            _ => Err(PlanError::unknown_label(
                "platform",
                s,
                &["youtube", "shorts", "tiktok", "instagram", "podcast"],
            )),
        }
    }
}

/// How the video is expected to make money.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum MonetizationFocus {
    Affiliate,
    Service,
    DigitalProduct,
    Community,
}

impl MonetizationFocus {
    /// Convert to the wire label used in request files and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            MonetizationFocus::Affiliate => "affiliate",
            MonetizationFocus::Service => "service",
            MonetizationFocus::DigitalProduct => "digital-product",
            MonetizationFocus::Community => "community",
        }
    }

    /// The monetization angle line interpolated into the description block.
    pub fn angle(&self) -> &'static str {
        match self {
            MonetizationFocus::Affiliate => {
                "Spotlight the exact stack with embedded trust-building proofs and comparison shots."
            }
            MonetizationFocus::Service => {
                "Position the offer as the natural next step with case-backed credibility and urgency."
            }
            MonetizationFocus::DigitalProduct => {
                "Frame the digital asset as the fast-track bridge with limited access bonuses."
            }
            MonetizationFocus::Community => {
                "Guide viewers into a shared mission with social proof from inside the tribe."
            }
        }
    }
}

impl FromStr for MonetizationFocus {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "affiliate" => Ok(MonetizationFocus::Affiliate),
            "service" => Ok(MonetizationFocus::Service),
            "digital-product" => Ok(MonetizationFocus::DigitalProduct),
            "community" => Ok(MonetizationFocus::Community),
            _ => Err(PlanError::unknown_label(
                "monetization focus",
                s,
                &["affiliate", "service", "digital-product", "community"],
            )),
        }
    }
}

/// Target runtime of the video in minutes.
///
/// The duration selects which timecode table the segment builder expands;
/// every table has exactly five beats, so the segment count never varies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum Duration {
    #[serde(rename = "6")]
    Six,

    #[serde(rename = "8")]
    Eight,

    #[serde(rename = "10")]
    Ten,

    #[serde(rename = "15")]
    Fifteen,
}

impl Duration {
    /// Convert to the wire label used in request files and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Duration::Six => "6",
            Duration::Eight => "8",
            Duration::Ten => "10",
            Duration::Fifteen => "15",
        }
    }

    /// The five (timestamp, beat label) pairs for this runtime.
    pub fn timeline(&self) -> [(&'static str, &'static str); 5] {
        match self {
            Duration::Six => [
                ("0:00", "Hook"),
                ("0:25", "Insight"),
                ("0:55", "Framework"),
                ("1:20", "Proof"),
                ("1:45", "CTA"),
            ],
            Duration::Eight => [
                ("0:00", "Pattern interrupt"),
                ("0:30", "Tension build"),
                ("1:10", "Framework reveal"),
                ("1:50", "Proof stack"),
                ("2:15", "CTA"),
            ],
            Duration::Ten => [
                ("0:00", "Hook"),
                ("0:45", "Story setup"),
                ("1:30", "Core mechanism"),
                ("2:20", "Case study"),
                ("3:00", "CTA & loop close"),
            ],
            Duration::Fifteen => [
                ("0:00", "Hook"),
                ("0:40", "Context"),
                ("1:20", "Mechanism"),
                ("2:10", "Proof"),
                ("3:10", "CTA"),
            ],
        }
    }
}

impl FromStr for Duration {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "6" => Ok(Duration::Six),
            "8" => Ok(Duration::Eight),
            "10" => Ok(Duration::Ten),
            "15" => Ok(Duration::Fifteen),
            _ => Err(PlanError::unknown_label(
                "duration",
                s,
                &["6", "8", "10", "15"],
            )),
        }
    }
}
