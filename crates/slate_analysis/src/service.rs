//! The analysis facade: one method per task.

use crate::{extraction, ingest};
use slate_core::report::{
    Chapter, CharacterReport, CharacterSuggestion, GrammarReport, ManuscriptReport, Paraphrased,
    PlotReport, ReadabilityReport, SceneReport, Summary, ToneReport, fallback_suggestions,
};
use slate_core::{
    AnalysisDepth, AnalysisRequest, BreakdownElementSet, CharacterFocus, ParaphraseMode,
    ParaphraseOptions, PlotTemplate, ShotRecord, SummaryLength, TaskKind,
};
use slate_error::{JsonError, SlateResult};
use slate_interface::TextGenerator;
use tracing::{debug, info, instrument};

/// Result of a shot-list generation call.
///
/// Zero recovered shots is a success, not an error; the variant keeps the
/// "nothing could be generated" condition distinct so callers can tell the
/// user without treating it as a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ShotListOutcome {
    /// At least one shot was recovered.
    Shots(Vec<ShotRecord>),
    /// The call succeeded but no shots could be recovered.
    Empty,
}

impl ShotListOutcome {
    /// The recovered shots; empty for [`ShotListOutcome::Empty`].
    pub fn shots(&self) -> &[ShotRecord] {
        match self {
            ShotListOutcome::Shots(shots) => shots,
            ShotListOutcome::Empty => &[],
        }
    }

    /// True when no shots were recovered.
    pub fn is_empty(&self) -> bool {
        matches!(self, ShotListOutcome::Empty)
    }

    /// Consume the outcome, yielding the recovered shots.
    pub fn into_shots(self) -> Vec<ShotRecord> {
        match self {
            ShotListOutcome::Shots(shots) => shots,
            ShotListOutcome::Empty => Vec::new(),
        }
    }
}

/// Facade over the upstream model: one method per analysis task.
///
/// Each call composes prompt rendering, the external call, and
/// normalization/ingestion. A call is idle until issued, in flight once, and
/// then either succeeded or failed; there is no streaming and no retry — a
/// failed upstream call surfaces directly, and callers decide whether to
/// re-invoke. Malformed responses never fail a call: they degrade to the
/// task's documented default payload.
///
/// The generator is injected, so tests substitute fakes and multiple
/// credentials can coexist.
#[derive(Debug, Clone)]
pub struct ScriptAnalyst<G> {
    generator: G,
}

impl<G: TextGenerator> ScriptAnalyst<G> {
    /// Create a facade over the given generator.
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    async fn run(&self, request: &AnalysisRequest) -> SlateResult<String> {
        let prompt = slate_prompt::render(request)?;
        debug!(
            task = request.task().label(),
            shape = ?request.task().payload_shape(),
            prompt_chars = prompt.chars().count(),
            "Requesting analysis"
        );
        let raw = self.generator.generate(&prompt).await?;
        debug!(
            task = request.task().label(),
            response_chars = raw.chars().count(),
            "Analysis response received"
        );
        Ok(raw)
    }

    /// Tone and sentiment analysis.
    #[instrument(skip(self, text))]
    pub async fn analyze_tone(&self, text: &str) -> SlateResult<ToneReport> {
        let request = AnalysisRequest::new(text.to_string(), TaskKind::Tone);
        let raw = self.run(&request).await?;
        Ok(extraction::parse_object_report(&raw))
    }

    /// Grammar and style analysis at the given depth.
    #[instrument(skip(self, text), fields(depth = %depth))]
    pub async fn check_grammar(
        &self,
        text: &str,
        depth: AnalysisDepth,
    ) -> SlateResult<GrammarReport> {
        let request = AnalysisRequest::new(text.to_string(), TaskKind::Grammar { depth });
        let raw = self.run(&request).await?;
        Ok(extraction::parse_object_report(&raw))
    }

    /// Analysis of a named character.
    #[instrument(skip(self, text), fields(character = %name))]
    pub async fn analyze_character(
        &self,
        text: &str,
        name: &str,
        focus: CharacterFocus,
    ) -> SlateResult<CharacterReport> {
        let request = AnalysisRequest::new(
            text.to_string(),
            TaskKind::Character {
                name: name.to_string(),
                focus,
            },
        );
        let raw = self.run(&request).await?;
        Ok(extraction::parse_object_report(&raw))
    }

    /// Enhancement suggestions for a named character.
    #[instrument(skip(self, traits), fields(character = %name))]
    pub async fn character_suggestions(
        &self,
        name: &str,
        traits: &[String],
        focus_area: &str,
    ) -> SlateResult<Vec<CharacterSuggestion>> {
        let request = AnalysisRequest::new(
            String::new(),
            TaskKind::CharacterSuggestions {
                name: name.to_string(),
                traits: traits.to_vec(),
                focus_area: focus_area.to_string(),
            },
        );
        let raw = self.run(&request).await?;
        Ok(extraction::parse_array_or(&raw, fallback_suggestions()))
    }

    /// Plot structure analysis against a template.
    #[instrument(skip(self, text), fields(template = %template))]
    pub async fn analyze_plot(
        &self,
        text: &str,
        template: PlotTemplate,
    ) -> SlateResult<PlotReport> {
        let request = AnalysisRequest::new(text.to_string(), TaskKind::Plot { template });
        let raw = self.run(&request).await?;
        Ok(extraction::parse_object_report(&raw))
    }

    /// Structural analysis across all chapters of a manuscript.
    #[instrument(skip(self, chapters), fields(chapter_count = chapters.len()))]
    pub async fn analyze_manuscript(&self, chapters: &[Chapter]) -> SlateResult<ManuscriptReport> {
        let serialized = serde_json::to_string(chapters)
            .map_err(|e| JsonError::new(format!("Failed to serialize chapters: {}", e)))?;
        let request = AnalysisRequest::new(serialized, TaskKind::Manuscript);
        let raw = self.run(&request).await?;
        Ok(extraction::parse_object_report(&raw))
    }

    /// Conflict/tension analysis of a single scene.
    #[instrument(skip(self, text))]
    pub async fn analyze_scene(&self, text: &str, scene_kind: &str) -> SlateResult<SceneReport> {
        let request = AnalysisRequest::new(
            text.to_string(),
            TaskKind::Scene {
                scene_kind: scene_kind.to_string(),
            },
        );
        let raw = self.run(&request).await?;
        Ok(extraction::parse_object_report(&raw))
    }

    /// Readability analysis for a target audience.
    ///
    /// The fallback report carries the unmodified subject text as its
    /// optimized version.
    #[instrument(skip(self, text))]
    pub async fn analyze_readability(
        &self,
        text: &str,
        target_audience: &str,
    ) -> SlateResult<ReadabilityReport> {
        let request = AnalysisRequest::new(
            text.to_string(),
            TaskKind::Readability {
                target_audience: target_audience.to_string(),
            },
        );
        let raw = self.run(&request).await?;
        Ok(extraction::parse_object_or(
            &raw,
            ReadabilityReport::fallback_for(text),
        ))
    }

    /// Script breakdown into production element categories.
    #[instrument(skip(self, script))]
    pub async fn analyze_breakdown(&self, script: &str) -> SlateResult<BreakdownElementSet> {
        let request = AnalysisRequest::new(script.to_string(), TaskKind::Breakdown);
        let raw = self.run(&request).await?;
        Ok(extraction::parse_object_report(&raw))
    }

    /// Shot list generation from a screenplay.
    ///
    /// Shots whose scene label the model omitted take `fallback_scene` when
    /// given. Zero recovered shots is reported as
    /// [`ShotListOutcome::Empty`], not as an error.
    #[instrument(skip(self, script))]
    pub async fn generate_shot_list(
        &self,
        script: &str,
        fallback_scene: Option<&str>,
    ) -> SlateResult<ShotListOutcome> {
        let request = AnalysisRequest::new(script.to_string(), TaskKind::ShotList);
        let raw = self.run(&request).await?;
        let shots = ingest::ingest_shots(&raw, fallback_scene);
        if shots.is_empty() {
            info!("No shots could be generated from the script");
            Ok(ShotListOutcome::Empty)
        } else {
            info!(count = shots.len(), "Generated shot list");
            Ok(ShotListOutcome::Shots(shots))
        }
    }

    /// Single-mode paraphrase.
    #[instrument(skip(self, text, mode))]
    pub async fn paraphrase(&self, text: &str, mode: ParaphraseMode) -> SlateResult<Paraphrased> {
        let request = AnalysisRequest::new(text.to_string(), TaskKind::Paraphrase { mode });
        let raw = self.run(&request).await?;
        Ok(Paraphrased::from_texts(text, raw.trim().to_string()))
    }

    /// Literary paraphrase with style/audience options.
    #[instrument(skip(self, text, options))]
    pub async fn advanced_paraphrase(
        &self,
        text: &str,
        options: ParaphraseOptions,
    ) -> SlateResult<Paraphrased> {
        let request =
            AnalysisRequest::new(text.to_string(), TaskKind::AdvancedParaphrase { options });
        let raw = self.run(&request).await?;
        Ok(Paraphrased::from_texts(text, raw.trim().to_string()))
    }

    /// Summarization at the requested length.
    #[instrument(skip(self, text), fields(length = %length))]
    pub async fn summarize(&self, text: &str, length: SummaryLength) -> SlateResult<Summary> {
        let request = AnalysisRequest::new(text.to_string(), TaskKind::Summarize { length });
        let raw = self.run(&request).await?;
        Ok(Summary::from_texts(text, raw.trim().to_string()))
    }

    /// Synonyms for a word in the context of the given text.
    ///
    /// When no JSON array can be recovered, falls back to comma-splitting
    /// the raw response, capped at eight entries.
    #[instrument(skip(self, context), fields(word = %word))]
    pub async fn synonyms(&self, word: &str, context: &str) -> SlateResult<Vec<String>> {
        let request = AnalysisRequest::new(
            context.to_string(),
            TaskKind::Synonyms {
                word: word.to_string(),
            },
        );
        let raw = self.run(&request).await?;

        let cleaned = extraction::strip_code_fences(&raw);
        let parsed = extraction::extract_array(&cleaned)
            .and_then(|span| serde_json::from_str::<Vec<String>>(span).ok());
        Ok(parsed.unwrap_or_else(|| {
            tracing::warn!("No synonym array recovered, splitting raw response");
            raw.split(',')
                .map(|s| s.trim().replace(['\'', '"'], ""))
                .filter(|s| !s.is_empty())
                .take(8)
                .collect()
        }))
    }

    /// Rewrite machine-sounding text to read naturally.
    #[instrument(skip(self, text))]
    pub async fn humanize(&self, text: &str) -> SlateResult<String> {
        let request = AnalysisRequest::new(text.to_string(), TaskKind::Humanize);
        let raw = self.run(&request).await?;
        Ok(raw.trim().to_string())
    }
}
