//! Tests for the core vocabulary types.

use gmb_writer_core::{
    BusinessInfo, ContentBody, ContentKind, ContentType, GeneratedContent, Language, QaPair,
    ReviewKind, Theme, Tone,
};
use std::str::FromStr;
use strum::IntoEnumIterator;

#[test]
fn missing_required_fields_reports_blank_values() -> anyhow::Result<()> {
    let info = BusinessInfo::builder()
        .name("Padaria Central")
        .category("   ")
        .build()?;

    assert_eq!(info.missing_required_fields(), vec!["category", "address"]);
    assert!(!info.is_complete());
    Ok(())
}

#[test]
fn optional_fields_do_not_block_generation() -> anyhow::Result<()> {
    let info = BusinessInfo::builder()
        .name("Padaria Central")
        .category("Bakery")
        .address("Av. Brasil, 500")
        .build()?;

    assert!(info.is_complete());
    assert!(info.phone().is_empty());
    Ok(())
}

#[test]
fn languages_parse_from_tags() {
    for language in Language::iter() {
        let parsed = Language::from_str(language.code()).unwrap();
        assert_eq!(parsed, language);
    }
    assert!(Language::from_str("fr-FR").is_err());
    assert_eq!(Language::default(), Language::PtBr);
}

#[test]
fn tones_parse_lowercase() {
    assert_eq!(Tone::from_str("promotional").unwrap(), Tone::Promotional);
    assert_eq!(Tone::Authoritative.to_string(), "authoritative");
    assert_eq!(Tone::default(), Tone::Friendly);
}

#[test]
fn content_types_use_kebab_case() {
    assert_eq!(ContentType::ReviewReply.to_string(), "review-reply");
    assert_eq!(ContentType::from_str("qa").unwrap(), ContentType::Qa);
    assert!(ContentType::Post.is_multi_variant());
    assert!(!ContentType::Description.is_multi_variant());
}

#[test]
fn review_kind_labels_follow_language() {
    assert_eq!(ReviewKind::Question.label(Language::PtBr), "pergunta");
    assert_eq!(ReviewKind::Question.label(Language::EsEs), "pregunta");
    assert_eq!(ReviewKind::Question.label(Language::EnUs), "question");
}

#[test]
fn content_kind_maps_to_content_type() {
    let kind = ContentKind::ReviewReply {
        review_kind: ReviewKind::Negative,
        review_text: "Cold coffee".to_string(),
    };
    assert_eq!(kind.content_type(), ContentType::ReviewReply);
    assert_eq!(
        ContentKind::Qa { topics: vec![] }.content_type(),
        ContentType::Qa
    );
}

#[test]
fn qa_blocks_render_question_answer_framing() {
    let body = ContentBody::QuestionsAndAnswers(vec![QaPair::new("Open on Sunday?", "Yes, 8am-2pm.")]);
    assert_eq!(body.blocks(), vec!["Question: Open on Sunday?\nAnswer: Yes, 8am-2pm.".to_string()]);
}

#[test]
fn generated_content_serializes_with_source_flag() -> anyhow::Result<()> {
    let content = GeneratedContent::example(
        ContentType::Description,
        ContentBody::Text("We bake every morning.".to_string()),
    );
    let json = serde_json::to_value(&content)?;

    assert_eq!(json["content_type"], "description");
    assert_eq!(json["source"], "example");
    assert_eq!(json["body"]["kind"], "text");
    assert!(content.is_example());
    Ok(())
}

#[test]
fn theme_toggles_and_parses() {
    assert_eq!(Theme::from_str("dark").unwrap(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}
