//! Facade tests against fake generators.

use async_trait::async_trait;
use slate_analysis::{ScriptAnalyst, ShotListOutcome};
use slate_core::report::{GrammarReport, ToneReport};
use slate_core::{AnalysisDepth, ElementCategory, ParaphraseMode, ShotType, SummaryLength};
use slate_error::{GeminiError, GeminiErrorKind, SlateResult};
use slate_interface::TextGenerator;

/// Generator that always returns the same canned response.
struct CannedGenerator {
    response: String,
}

impl CannedGenerator {
    fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn generate(&self, _prompt: &str) -> SlateResult<String> {
        Ok(self.response.clone())
    }
}

/// Generator whose upstream call always fails.
struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> SlateResult<String> {
        Err(GeminiError::new(GeminiErrorKind::ApiRequest(
            "quota exceeded".to_string(),
        ))
        .into())
    }
}

#[tokio::test]
async fn fenced_breakdown_response_parses_cleanly() {
    let response = "```json\n{\"props\":[\"lamp\"],\"wardrobe\":[],\"cast\":[\"MARLOWE\"]}\n```";
    let analyst = ScriptAnalyst::new(CannedGenerator::new(response));

    let set = analyst.analyze_breakdown("INT. OFFICE - NIGHT").await.unwrap();
    assert_eq!(set.items(ElementCategory::Props), ["lamp"]);
    assert_eq!(set.items(ElementCategory::Cast), ["MARLOWE"]);
    assert!(set.items(ElementCategory::Wardrobe).is_empty());
}

#[tokio::test]
async fn refusal_prose_downgrades_to_default_report() {
    let analyst = ScriptAnalyst::new(CannedGenerator::new("I cannot process this request."));

    let report = analyst.analyze_tone("some text").await.unwrap();
    assert_eq!(report, ToneReport::default());
}

#[tokio::test]
async fn grammar_report_survives_surrounding_prose() {
    let response = "Here you go:\n{\"overallScore\": 92, \"issues\": []}\nCheers!";
    let analyst = ScriptAnalyst::new(CannedGenerator::new(response));

    let report = analyst
        .check_grammar("The dog run fast.", AnalysisDepth::Standard)
        .await
        .unwrap();
    assert_eq!(*report.overall_score(), 92);
    assert!(report.issues().is_empty());
}

#[tokio::test]
async fn malformed_grammar_response_keeps_the_documented_score() {
    let analyst = ScriptAnalyst::new(CannedGenerator::new("{{not json"));

    let report = analyst
        .check_grammar("text", AnalysisDepth::Basic)
        .await
        .unwrap();
    assert_eq!(report, GrammarReport::default());
}

#[tokio::test]
async fn shot_list_ingests_partial_records() {
    let response = r#"[{"description":"Wide shot of the house"}]"#;
    let analyst = ScriptAnalyst::new(CannedGenerator::new(response));

    let outcome = analyst.generate_shot_list("EXT. HOUSE - DAY", None).await.unwrap();
    let shots = outcome.shots();
    assert_eq!(shots.len(), 1);
    assert_eq!(shots[0].description(), "Wide shot of the house");
    assert_eq!(*shots[0].shot_type(), ShotType::MediumShot);
}

#[tokio::test]
async fn zero_shots_is_reported_as_empty_not_error() {
    let analyst = ScriptAnalyst::new(CannedGenerator::new("No shots here, sorry."));

    let outcome = analyst
        .generate_shot_list("EXT. HOUSE - DAY", None)
        .await
        .unwrap();
    assert_eq!(outcome, ShotListOutcome::Empty);
    assert!(outcome.shots().is_empty());
}

#[tokio::test]
async fn upstream_failure_surfaces_as_an_error() {
    let analyst = ScriptAnalyst::new(FailingGenerator);

    let result = analyst.analyze_tone("some text").await;
    let err = result.err().expect("upstream failure must surface");
    assert!(format!("{}", err).contains("quota exceeded"));
}

#[tokio::test]
async fn empty_required_option_fails_before_the_network() {
    // The failing generator would error if reached; the configuration check
    // must fire first.
    let analyst = ScriptAnalyst::new(FailingGenerator);

    let result = analyst
        .paraphrase("text", ParaphraseMode::Custom(String::new()))
        .await;
    let err = result.err().expect("empty custom instruction must fail");
    assert!(format!("{}", err).contains("Configuration Error"));
}

#[tokio::test]
async fn paraphrase_trims_and_counts() {
    let analyst = ScriptAnalyst::new(CannedGenerator::new("  A drizzle tapped the roof.  \n"));

    let result = analyst
        .paraphrase("The rain hammered the tin roof.", ParaphraseMode::Simple)
        .await
        .unwrap();
    assert_eq!(result.text(), "A drizzle tapped the roof.");
    assert_eq!(*result.original_len(), 31);
}

#[tokio::test]
async fn summary_reports_compression() {
    let analyst = ScriptAnalyst::new(CannedGenerator::new("Rain falls."));

    let original = "The rain hammered the tin roof for hours on end.";
    let summary = analyst.summarize(original, SummaryLength::Short).await.unwrap();
    assert_eq!(summary.text(), "Rain falls.");
    assert_eq!(*summary.summary_len(), 11);
}

#[tokio::test]
async fn synonyms_fall_back_to_comma_splitting() {
    let analyst = ScriptAnalyst::new(CannedGenerator::new(
        "pounded, struck, battered, beat, drummed, hit, smacked, thumped, slammed",
    ));

    let synonyms = analyst.synonyms("hammered", "The rain hammered").await.unwrap();
    assert_eq!(synonyms.len(), 8);
    assert_eq!(synonyms[0], "pounded");
}

#[tokio::test]
async fn synonyms_parse_a_json_array_when_present() {
    let analyst = ScriptAnalyst::new(CannedGenerator::new(r#"["pounded", "struck"]"#));

    let synonyms = analyst.synonyms("hammered", "context").await.unwrap();
    assert_eq!(synonyms, ["pounded", "struck"]);
}
