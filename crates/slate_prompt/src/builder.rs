//! Instruction assembly for each task kind.

use crate::templates;
use slate_core::{
    AnalysisDepth, AnalysisRequest, CharacterFocus, ParaphraseMode, ParaphraseOptions,
    PlotTemplate, SummaryLength, TaskKind,
};
use slate_error::{ConfigError, SlateResult};
use std::borrow::Cow;

/// Maximum number of characters of subject text embedded in a shot-list
/// instruction. Longer scripts are truncated from the start of the text.
pub const SHOT_LIST_SUBJECT_LIMIT: usize = 15_000;

/// Render the instruction string for a request.
///
/// Pure function of the request. Fails only with a configuration error when
/// a required free-text option is empty; it never touches the network.
pub fn render(request: &AnalysisRequest) -> SlateResult<String> {
    let subject = request.subject_text().as_str();
    let prompt = match request.task() {
        TaskKind::Tone => tone(subject),
        TaskKind::Grammar { depth } => grammar(subject, *depth),
        TaskKind::Character { name, focus } => character(subject, name, *focus)?,
        TaskKind::CharacterSuggestions {
            name,
            traits,
            focus_area,
        } => character_suggestions(name, traits, focus_area)?,
        TaskKind::Plot { template } => plot(subject, *template),
        TaskKind::Manuscript => manuscript(subject),
        TaskKind::Scene { scene_kind } => scene(subject, scene_kind),
        TaskKind::Readability { target_audience } => readability(subject, target_audience),
        TaskKind::Breakdown => breakdown(subject),
        TaskKind::ShotList => shot_list(subject),
        TaskKind::Paraphrase { mode } => paraphrase(subject, mode)?,
        TaskKind::AdvancedParaphrase { options } => advanced_paraphrase(subject, options),
        TaskKind::Summarize { length } => summarize(subject, *length),
        TaskKind::Synonyms { word } => synonyms(subject, word)?,
        TaskKind::Humanize => humanize(subject),
    };
    Ok(prompt)
}

fn require(value: &str, what: &str) -> SlateResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::new(format!("{} must not be empty", what)).into());
    }
    Ok(())
}

/// Keep the first `limit` characters of the subject, deterministically.
fn truncate_subject(subject: &str, limit: usize) -> Cow<'_, str> {
    match subject.char_indices().nth(limit) {
        Some((byte_index, _)) => Cow::Borrowed(&subject[..byte_index]),
        None => Cow::Borrowed(subject),
    }
}

fn tone(subject: &str) -> String {
    format!(
        "Analyze the tone of the following text.\n\n\
         Text: \"{subject}\"\n\n\
         Respond with ONLY a valid JSON object (no markdown formatting) in this exact format:\n{}",
        templates::TONE_FORMAT
    )
}

fn grammar(subject: &str, depth: AnalysisDepth) -> String {
    let analysis_depth = match depth {
        AnalysisDepth::Basic => "Focus only on grammar errors and basic punctuation",
        AnalysisDepth::Standard => "Check grammar, punctuation, style, and clarity issues",
        AnalysisDepth::Comprehensive => {
            "Comprehensive analysis including grammar, style, flow, consistency, and literary quality"
        }
        AnalysisDepth::Literary => {
            "Literary analysis focusing on creative writing, narrative voice, character consistency, and artistic expression"
        }
    };
    format!(
        "Perform a {depth} grammar and style analysis of the following text.\n\n\
         {analysis_depth}\n\n\
         Text: \"{subject}\"\n\n\
         Respond with ONLY a valid JSON object (no markdown formatting) in this exact format:\n{}",
        templates::GRAMMAR_FORMAT
    )
}

fn character(subject: &str, name: &str, focus: CharacterFocus) -> SlateResult<String> {
    require(name, "character name")?;
    let focus_prompt = match focus {
        CharacterFocus::Voice => {
            "Analyze the character's unique voice, speech patterns, vocabulary, and dialogue style"
        }
        CharacterFocus::Development => {
            "Analyze character development, growth, motivations, and character arc"
        }
        CharacterFocus::Consistency => {
            "Check for consistency in character behavior, voice, and personality traits"
        }
        CharacterFocus::Dialogue => {
            "Focus on dialogue quality, authenticity, and character-specific speech patterns"
        }
        CharacterFocus::Backstory => {
            "Analyze implied backstory and suggest areas for character depth"
        }
    };
    Ok(format!(
        "Analyze the character \"{name}\" in the following text.\n\n\
         Focus: {focus_prompt}\n\n\
         Text: \"{subject}\"\n\n\
         Respond with ONLY a valid JSON object (no markdown formatting) in this exact format:\n{}",
        templates::CHARACTER_FORMAT
    ))
}

fn character_suggestions(name: &str, traits: &[String], focus_area: &str) -> SlateResult<String> {
    require(name, "character name")?;
    Ok(format!(
        "Generate creative enhancement suggestions for the character \"{name}\" with traits: {}.\n\n\
         Focus area: {focus_area}\n\n\
         Provide practical, creative suggestions for character development.\n\n\
         Respond with ONLY a valid JSON array (no markdown formatting) in this exact format:\n{}",
        traits.join(", "),
        templates::CHARACTER_SUGGESTIONS_FORMAT
    ))
}

fn plot(subject: &str, template: PlotTemplate) -> String {
    let structure_guide = match template {
        PlotTemplate::ThreeAct => {
            "Three-Act Structure: Setup (25%), Confrontation (50%), Resolution (25%)"
        }
        PlotTemplate::HerosJourney => {
            "Hero's Journey: Ordinary World, Call to Adventure, Refusal, Meeting Mentor, Crossing Threshold, Tests, Ordeal, Reward, Road Back, Resurrection, Return"
        }
        PlotTemplate::SevenPoint => {
            "Seven-Point Structure: Hook, Plot Turn 1, Pinch Point 1, Midpoint, Pinch Point 2, Plot Turn 2, Resolution"
        }
        PlotTemplate::Freytag => {
            "Freytag's Pyramid: Exposition, Rising Action, Climax, Falling Action, Denouement"
        }
        PlotTemplate::Fichtean => "Fichtean Curve: Series of crises building to climax",
        PlotTemplate::Custom => "Custom analysis of narrative structure",
    };
    format!(
        "Analyze the plot structure of the following story using {structure_guide}.\n\n\
         Text: \"{subject}\"\n\n\
         Respond with ONLY a valid JSON object (no markdown formatting) in this exact format:\n{}",
        templates::PLOT_FORMAT
    )
}

fn manuscript(chapters_json: &str) -> String {
    format!(
        "Analyze this manuscript structure and provide insights:\n\n\
         Chapters: {chapters_json}\n\n\
         Respond with ONLY a valid JSON object (no markdown formatting) in this exact format:\n{}",
        templates::MANUSCRIPT_FORMAT
    )
}

fn scene(subject: &str, scene_kind: &str) -> String {
    format!(
        "Analyze this scene for conflict, tension, and effectiveness:\n\n\
         Scene Type: {scene_kind}\n\
         Scene Text: \"{subject}\"\n\n\
         Respond with ONLY a valid JSON object (no markdown formatting) in this exact format:\n{}",
        templates::SCENE_FORMAT
    )
}

fn readability(subject: &str, target_audience: &str) -> String {
    format!(
        "Analyze the readability of this text for target audience: {target_audience}\n\n\
         Text: \"{subject}\"\n\n\
         Respond with ONLY a valid JSON object (no markdown formatting) in this exact format:\n{}",
        templates::READABILITY_FORMAT
    )
}

fn breakdown(subject: &str) -> String {
    format!(
        "Analyze this screenplay and identify production elements in these categories:\n\
         - props: Physical items handled or seen\n\
         - wardrobe: Clothing items and accessories\n\
         - cast: Character names\n\
         - locations: All settings and locations\n\
         - sfx: Sound effects and audio elements\n\
         - vehicles: Cars, trucks, planes, etc.\n\
         - animals: Any animals mentioned\n\
         - stunts: Physical action sequences\n\
         - makeup: Special makeup requirements\n\
         - equipment: Special filmmaking equipment needed\n\
         - extras: Background performers needed\n\n\
         Script:\n\"{subject}\"\n\n\
         Respond with ONLY a valid JSON object (no markdown formatting) in this exact format:\n{}",
        templates::BREAKDOWN_FORMAT
    )
}

fn shot_list(subject: &str) -> String {
    let subject = truncate_subject(subject, SHOT_LIST_SUBJECT_LIMIT);
    format!(
        "Based on this screenplay, create a detailed shot list with appropriate camera setups.\n\
         For each key moment in the script, suggest a specific shot with these technical details:\n\
         - scene number\n\
         - shot number\n\
         - shot description\n\
         - shot type (CU, MS, WS, etc.)\n\
         - camera angle\n\
         - camera movement\n\
         - equipment needed\n\
         - lens recommendation\n\
         - estimated duration\n\
         - frame rate\n\n\
         Script:\n\"{subject}\"\n\n\
         Generate at least 5 shots for this scene.\n\
         Respond with ONLY a valid JSON array (no markdown formatting) in this exact format:\n{}",
        templates::SHOT_LIST_FORMAT
    )
}

fn paraphrase(subject: &str, mode: &ParaphraseMode) -> SlateResult<String> {
    let prompt = match mode {
        ParaphraseMode::Formal => format!(
            "Rewrite the following text in a formal, professional tone while maintaining the original meaning. Provide ONLY the rewritten text without explanations: \"{subject}\""
        ),
        ParaphraseMode::Academic => format!(
            "Rewrite the following text in an academic, scholarly style with appropriate terminology. Provide ONLY the rewritten text: \"{subject}\""
        ),
        ParaphraseMode::Simple => format!(
            "Simplify the following text to make it easier to read and understand. Provide ONLY the simplified text: \"{subject}\""
        ),
        ParaphraseMode::Creative => format!(
            "Creatively rewrite the following text with fresh, original phrasing and style. Provide ONLY the creative version: \"{subject}\""
        ),
        ParaphraseMode::Shorten => format!(
            "Condense the following text while retaining all main points. Provide ONLY the shortened text: \"{subject}\""
        ),
        ParaphraseMode::Expand => format!(
            "Expand the following text by adding more detail and elaboration. Provide ONLY the expanded text: \"{subject}\""
        ),
        ParaphraseMode::Custom(instruction) => {
            require(instruction, "custom paraphrase instruction")?;
            format!("{instruction}. Provide ONLY the result: \"{subject}\"")
        }
    };
    Ok(prompt)
}

fn advanced_paraphrase(subject: &str, options: &ParaphraseOptions) -> String {
    format!(
        "Transform the following text with these specifications:\n\
         - Literary Mode: {}\n\
         - Writing Style: {}\n\
         - Target Audience: {}\n\
         - Preserve Dialogue: {}\n\n\
         Focus on:\n\
         1. Enhancing literary quality while maintaining meaning\n\
         2. Improving sentence variety and flow\n\
         3. Elevating vocabulary appropriately\n\
         4. Maintaining character voice consistency\n\n\
         Text: \"{subject}\"\n\n\
         Provide ONLY the refined version without any explanations or formatting.",
        options.mode(),
        options.writing_style(),
        options.target_audience(),
        options.preserve_dialogue(),
    )
}

fn summarize(subject: &str, length: SummaryLength) -> String {
    match length {
        SummaryLength::Short => format!(
            "Provide a brief summary (2-3 sentences) of the following text. Provide ONLY the summary: \"{subject}\""
        ),
        SummaryLength::Medium => format!(
            "Provide a concise summary of the following text. Provide ONLY the summary: \"{subject}\""
        ),
        SummaryLength::Long => format!(
            "Provide a detailed summary with key points and supporting details. Provide ONLY the summary: \"{subject}\""
        ),
    }
}

fn synonyms(context: &str, word: &str) -> SlateResult<String> {
    require(word, "synonym word")?;
    Ok(format!(
        "Provide 8 synonyms for the word \"{word}\" in this context: \"{context}\".\n\
         Return ONLY a JSON array of synonyms: [\"synonym1\", \"synonym2\", \"synonym3\", \"synonym4\", \"synonym5\", \"synonym6\", \"synonym7\", \"synonym8\"]"
    ))
}

fn humanize(subject: &str) -> String {
    format!(
        "Make the following AI-generated text sound more natural and human-written. Provide ONLY the humanized version without explanations:\n\n\
         Text: \"{subject}\""
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use slate_core::AnalysisRequest;

    fn request(task: TaskKind) -> AnalysisRequest {
        AnalysisRequest::new("The rain hammered the tin roof.".to_string(), task)
    }

    #[test]
    fn subject_text_is_embedded_verbatim() {
        let prompt = render(&request(TaskKind::Tone)).unwrap();
        assert!(prompt.contains("The rain hammered the tin roof."));
        assert!(prompt.contains("ONLY a valid JSON object"));
    }

    #[test]
    fn grammar_prompt_states_the_depth() {
        let prompt = render(&request(TaskKind::Grammar {
            depth: AnalysisDepth::Literary,
        }))
        .unwrap();
        assert!(prompt.starts_with("Perform a literary grammar and style analysis"));
        assert!(prompt.contains("narrative voice"));
    }

    #[test]
    fn shot_list_prompt_truncates_long_scripts() {
        let long_script = "ß".repeat(SHOT_LIST_SUBJECT_LIMIT + 1);
        let request = AnalysisRequest::new(long_script, TaskKind::ShotList);
        let prompt = render(&request).unwrap();
        assert_eq!(prompt.matches('ß').count(), SHOT_LIST_SUBJECT_LIMIT);
    }

    #[test]
    fn shot_list_truncation_respects_char_boundaries() {
        let long_script = "é".repeat(SHOT_LIST_SUBJECT_LIMIT + 10);
        let request = AnalysisRequest::new(long_script, TaskKind::ShotList);
        let prompt = render(&request).unwrap();
        assert_eq!(prompt.matches('é').count(), SHOT_LIST_SUBJECT_LIMIT);
    }

    #[test]
    fn empty_character_name_is_a_configuration_error() {
        let result = render(&request(TaskKind::Character {
            name: "  ".to_string(),
            focus: CharacterFocus::Voice,
        }));
        assert!(result.is_err());
    }

    #[test]
    fn empty_custom_instruction_is_a_configuration_error() {
        let result = render(&request(TaskKind::Paraphrase {
            mode: ParaphraseMode::Custom(String::new()),
        }));
        assert!(result.is_err());
    }

    #[test]
    fn breakdown_prompt_names_every_category() {
        let prompt = render(&request(TaskKind::Breakdown)).unwrap();
        for category in [
            "props", "wardrobe", "cast", "locations", "sfx", "vehicles", "animals", "stunts",
            "makeup", "equipment", "extras",
        ] {
            assert!(prompt.contains(category), "missing category {category}");
        }
    }

    #[test]
    fn synonyms_prompt_carries_word_and_context() {
        let prompt = render(&request(TaskKind::Synonyms {
            word: "hammered".to_string(),
        }))
        .unwrap();
        assert!(prompt.contains("\"hammered\""));
        assert!(prompt.contains("The rain hammered the tin roof."));
        assert!(prompt.contains("JSON array"));
    }

    #[test]
    fn text_tasks_request_plain_output() {
        let prompt = render(&request(TaskKind::Humanize)).unwrap();
        assert!(prompt.contains("ONLY the humanized version"));
        assert!(!prompt.contains("JSON"));
    }
}
