//! Command handlers bridging CLI arguments and the core library.
//!
//! This module implements the CLI side of the parameter wrapper pattern:
//! clap argument structs are converted into a core [`PlanRequest`] here, so
//! framework concerns (flag parsing, help text) stay out of the core while
//! enum labels are validated through the core's `FromStr` implementations
//! before any plan is built.

use std::fs;

use anyhow::{Context, Result};
use log::debug;
use showrunner_core::{build_plan, PlanRequest};

use crate::args::GenerateArgs;
use crate::renderer::TerminalRenderer;

/// Command handler holding the output renderer.
pub struct Cli {
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self { renderer }
    }

    /// Generate a plan and render it as markdown or JSON.
    pub fn generate(&self, args: GenerateArgs) -> Result<()> {
        let json = args.json;
        let request = resolve_request(args)?;
        debug!(
            "generating plan: topic={:?} tone={} duration={}min platform={}",
            request.topic, request.tone, request.duration, request.platform
        );

        let plan = build_plan(&request);

        if json {
            let encoded = serde_json::to_string_pretty(&plan)
                .context("Failed to encode plan as JSON")?;
            println!("{encoded}");
            Ok(())
        } else {
            self.renderer.render(&plan.to_string())
        }
    }

    /// Print the default request as pretty JSON, a starting point for
    /// `--request` files.
    pub fn template(&self) -> Result<()> {
        let encoded = serde_json::to_string_pretty(&PlanRequest::default())
            .context("Failed to encode default request as JSON")?;
        println!("{encoded}");
        Ok(())
    }

    /// Print the JSON schema describing the request file format.
    pub fn schema(&self) -> Result<()> {
        let schema = schemars::schema_for!(PlanRequest);
        let encoded = serde_json::to_string_pretty(&schema)
            .context("Failed to encode request schema as JSON")?;
        println!("{encoded}");
        Ok(())
    }
}

/// Assemble the request: start from the default (or a request file when
/// given), then apply per-field flag overrides. Enum flags are parsed at
/// this boundary and fail fast on out-of-domain labels.
fn resolve_request(args: GenerateArgs) -> Result<PlanRequest> {
    let mut request = match &args.request {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read request file '{}'", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse request file '{}'", path.display()))?
        }
        None => PlanRequest::default(),
    };

    if let Some(topic) = args.topic {
        request.topic = topic;
    }
    if let Some(audience) = args.audience {
        request.target_audience = audience;
    }
    if let Some(outcome) = args.outcome {
        request.outcome = outcome;
    }
    if let Some(offer) = args.offer {
        request.offer = offer;
    }
    if let Some(cta) = args.cta {
        request.cta = cta;
    }
    if let Some(keywords) = args.keywords {
        request.keywords = keywords;
    }
    if let Some(tone) = args.tone {
        request.tone = tone.parse()?;
    }
    if let Some(duration) = args.duration {
        request.duration = duration.parse()?;
    }
    if let Some(persona) = args.persona {
        request.persona = persona.parse()?;
    }
    if let Some(platform) = args.platform {
        request.platform = platform.parse()?;
    }
    if let Some(monetization) = args.monetization {
        request.monetization_focus = monetization.parse()?;
    }

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use showrunner_core::{Duration, Tone};

    #[test]
    fn test_resolve_request_defaults_without_flags() {
        let request = resolve_request(GenerateArgs::default()).unwrap();
        assert_eq!(request, PlanRequest::default());
    }

    #[test]
    fn test_resolve_request_applies_flag_overrides() {
        let args = GenerateArgs {
            topic: Some("Podcast clipping".to_string()),
            tone: Some("story".to_string()),
            duration: Some("8".to_string()),
            ..GenerateArgs::default()
        };

        let request = resolve_request(args).unwrap();
        assert_eq!(request.topic, "Podcast clipping");
        assert_eq!(request.tone, Tone::Story);
        assert_eq!(request.duration, Duration::Eight);
        assert_eq!(request.platform, PlanRequest::default().platform);
    }

    #[test]
    fn test_resolve_request_rejects_unknown_tone() {
        let args = GenerateArgs {
            tone: Some("sarcastic".to_string()),
            ..GenerateArgs::default()
        };

        let err = resolve_request(args).unwrap_err();
        assert!(err.to_string().contains("Invalid tone: sarcastic"));
    }
}
