//! Output-shape blocks embedded in the JSON-task instructions.
//!
//! Each block spells out the exact object or array the model must return.
//! The field names here are load-bearing: the report structs in
//! `slate_core::report` deserialize against them.

pub const TONE_FORMAT: &str = r#"{
  "overallTone": "description",
  "sentiment": "positive",
  "confidence": "high",
  "emotions": ["emotion1", "emotion2"],
  "suggestions": "improvement suggestions"
}"#;

pub const GRAMMAR_FORMAT: &str = r#"{
  "overallScore": 85,
  "issues": [
    {
      "type": "Grammar",
      "severity": "critical",
      "originalText": "exact text with issue",
      "description": "explanation of the issue",
      "suggestion": "corrected version"
    }
  ],
  "readability": "Grade level or description",
  "sentenceVariety": "Assessment of sentence structure variety",
  "vocabularyLevel": "Assessment of vocabulary complexity",
  "passiveVoiceUsage": 15,
  "styleNotes": "Overall style assessment"
}"#;

pub const CHARACTER_FORMAT: &str = r#"{
  "traits": ["trait1", "trait2", "trait3"],
  "voiceTone": "description of speaking style",
  "speechPattern": "characteristic speech patterns",
  "vocabularyLevel": "assessment of vocabulary used",
  "emotionalRange": "range of emotions displayed",
  "developmentNotes": "character development observations",
  "inconsistencies": ["issue1", "issue2"],
  "strengths": ["strength1", "strength2"],
  "improvementAreas": ["area1", "area2"]
}"#;

pub const CHARACTER_SUGGESTIONS_FORMAT: &str = r#"[
  {
    "category": "Dialogue",
    "description": "detailed suggestion",
    "example": "example implementation"
  }
]"#;

pub const PLOT_FORMAT: &str = r#"{
  "overallScore": 85,
  "stages": [
    {
      "name": "stage name",
      "completion": 80,
      "description": "assessment of this stage",
      "suggestions": ["improvement1", "improvement2"]
    }
  ],
  "pacing": "assessment of story pacing",
  "conflict": "analysis of conflict development",
  "characterArc": "character development assessment",
  "themeDevelopment": "theme analysis",
  "recommendations": [
    {
      "priority": "high",
      "title": "recommendation title",
      "description": "detailed recommendation"
    }
  ]
}"#;

pub const MANUSCRIPT_FORMAT: &str = r#"{
  "overallProgress": 65,
  "totalWordCount": 50000,
  "averageChapterLength": 2500,
  "paceAnalysis": "analysis of pacing across chapters",
  "consistencyIssues": ["issue1", "issue2"],
  "suggestions": ["suggestion1", "suggestion2"],
  "readabilityScore": 85,
  "chapterInsights": [
    {
      "chapterNumber": 1,
      "strengths": ["strength1"],
      "improvements": ["improvement1"],
      "paceRating": "good"
    }
  ]
}"#;

pub const SCENE_FORMAT: &str = r#"{
  "conflictLevel": 85,
  "tensionRating": 90,
  "paceRating": 75,
  "dialogueQuality": 80,
  "characterDevelopment": 70,
  "conflictTypes": ["internal", "external"],
  "tensionTechniques": ["technique1", "technique2"],
  "strengths": ["strength1", "strength2"],
  "improvements": ["improvement1", "improvement2"],
  "suggestions": [
    {
      "type": "Conflict",
      "description": "suggestion description",
      "example": "example implementation"
    }
  ]
}"#;

pub const READABILITY_FORMAT: &str = r#"{
  "readabilityScore": 85,
  "gradeLevel": "8th Grade",
  "targetMatch": true,
  "wordComplexity": "appropriate",
  "sentenceLength": "good",
  "vocabularyLevel": "suitable",
  "improvements": [
    {
      "issue": "issue description",
      "suggestion": "how to fix",
      "example": "example fix"
    }
  ],
  "strengths": ["strength1", "strength2"],
  "optimizedVersion": "optimized text version"
}"#;

pub const BREAKDOWN_FORMAT: &str = r#"{
  "props": ["prop1", "prop2"],
  "wardrobe": ["item1", "item2"],
  "cast": ["character1", "character2"],
  "locations": ["location1", "location2"],
  "sfx": ["effect1", "effect2"],
  "vehicles": ["vehicle1", "vehicle2"],
  "animals": ["animal1", "animal2"],
  "stunts": ["stunt1", "stunt2"],
  "makeup": ["makeup1", "makeup2"],
  "equipment": ["equipment1", "equipment2"],
  "extras": ["extra1", "extra2"]
}"#;

pub const SHOT_LIST_FORMAT: &str = r#"[
  {
    "scene": "1",
    "shotNumber": "1",
    "description": "Description of the shot content",
    "type": "MS",
    "angle": "Eye Level",
    "movement": "Static",
    "equipment": "Tripod",
    "lens": "50mm",
    "framing": "Medium",
    "notes": "Additional technical notes",
    "duration": "5s",
    "frameRate": "24 fps"
  }
]"#;
