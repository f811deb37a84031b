use std::str::FromStr;

use crate::error::PlanError;
use crate::models::{Duration, MonetizationFocus, Persona, Platform, Tone};
use crate::params::PlanRequest;

#[test]
fn test_tone_from_str_accepts_declared_labels() {
    assert_eq!(Tone::from_str("educational").unwrap(), Tone::Educational);
    assert_eq!(Tone::from_str("story").unwrap(), Tone::Story);
    assert_eq!(
        Tone::from_str("controversial").unwrap(),
        Tone::Controversial
    );
    assert_eq!(Tone::from_str("case-study").unwrap(), Tone::CaseStudy);
    assert_eq!(
        Tone::from_str("inspirational").unwrap(),
        Tone::Inspirational
    );
}

#[test]
fn test_tone_from_str_is_case_insensitive() {
    assert_eq!(Tone::from_str("Case-Study").unwrap(), Tone::CaseStudy);
}

#[test]
fn test_tone_from_str_rejects_unknown_label() {
    let err = Tone::from_str("casual").unwrap_err();
    match err {
        PlanError::InvalidInput { field, reason } => {
            assert_eq!(field, "tone");
            assert!(reason.contains("Invalid tone: casual"));
            assert!(reason.contains("'case-study'"));
        }
    }
}

#[test]
fn test_persona_from_str_round_trips() {
    for persona in [
        Persona::Strategist,
        Persona::Creator,
        Persona::Operator,
        Persona::Marketer,
    ] {
        assert_eq!(Persona::from_str(persona.as_str()).unwrap(), persona);
    }
}

#[test]
fn test_persona_angles_have_three_entries() {
    for persona in [
        Persona::Strategist,
        Persona::Creator,
        Persona::Operator,
        Persona::Marketer,
    ] {
        assert_eq!(persona.angles().len(), 3);
    }
}

#[test]
fn test_platform_from_str_rejects_unknown_label() {
    let err = Platform::from_str("vimeo").unwrap_err();
    match err {
        PlanError::InvalidInput { field, reason } => {
            assert_eq!(field, "platform");
            assert!(reason.contains("'youtube'"));
        }
    }
}

#[test]
fn test_monetization_from_str_round_trips() {
    for focus in [
        MonetizationFocus::Affiliate,
        MonetizationFocus::Service,
        MonetizationFocus::DigitalProduct,
        MonetizationFocus::Community,
    ] {
        assert_eq!(
            MonetizationFocus::from_str(focus.as_str()).unwrap(),
            focus
        );
    }
}

#[test]
fn test_duration_from_str_accepts_minute_labels() {
    assert_eq!(Duration::from_str("6").unwrap(), Duration::Six);
    assert_eq!(Duration::from_str("8").unwrap(), Duration::Eight);
    assert_eq!(Duration::from_str("10").unwrap(), Duration::Ten);
    assert_eq!(Duration::from_str("15").unwrap(), Duration::Fifteen);
    assert!(Duration::from_str("12").is_err());
}

#[test]
fn test_duration_timelines_have_five_beats() {
    for duration in [
        Duration::Six,
        Duration::Eight,
        Duration::Ten,
        Duration::Fifteen,
    ] {
        let timeline = duration.timeline();
        assert_eq!(timeline.len(), 5);
        assert_eq!(timeline[0].0, "0:00");
    }
}

#[test]
fn test_tone_profiles_have_three_pattern_interrupts() {
    for tone in [
        Tone::Educational,
        Tone::Story,
        Tone::Controversial,
        Tone::CaseStudy,
        Tone::Inspirational,
    ] {
        assert_eq!(tone.profile().pattern_interrupts.len(), 3);
        assert!(!tone.profile().voice.is_empty());
        assert!(!tone.profile().narrative_style.is_empty());
    }
}

#[test]
fn test_enum_serde_labels_match_from_str() {
    assert_eq!(
        serde_json::to_string(&Tone::CaseStudy).unwrap(),
        "\"case-study\""
    );
    assert_eq!(
        serde_json::to_string(&MonetizationFocus::DigitalProduct).unwrap(),
        "\"digital-product\""
    );
    assert_eq!(serde_json::to_string(&Duration::Six).unwrap(), "\"6\"");
    assert_eq!(
        serde_json::from_str::<Platform>("\"tiktok\"").unwrap(),
        Platform::Tiktok
    );
}

#[test]
fn test_default_request_matches_canonical_example() {
    let request = PlanRequest::default();
    assert_eq!(request.topic, "AI YouTube Automation Systems");
    assert_eq!(request.target_audience, "solo content entrepreneurs");
    assert_eq!(request.tone, Tone::CaseStudy);
    assert_eq!(request.duration, Duration::Ten);
    assert_eq!(request.persona, Persona::Strategist);
    assert_eq!(request.platform, Platform::Youtube);
    assert_eq!(request.monetization_focus, MonetizationFocus::Service);
}

#[test]
fn test_request_file_missing_fields_fall_back_to_defaults() {
    let request: PlanRequest =
        serde_json::from_str(r#"{"topic": "Home studio lighting", "tone": "story"}"#).unwrap();
    assert_eq!(request.topic, "Home studio lighting");
    assert_eq!(request.tone, Tone::Story);
    // Unnamed fields come from the default request.
    assert_eq!(request.platform, Platform::Youtube);
    assert_eq!(request.cta, PlanRequest::default().cta);
}

#[test]
fn test_request_file_rejects_unknown_enum_label() {
    let result = serde_json::from_str::<PlanRequest>(r#"{"duration": "90"}"#);
    assert!(result.is_err());
}
