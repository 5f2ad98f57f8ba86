//! End-to-end pipeline tests over fake generators and in-memory stores.

use async_trait::async_trait;
use slate::{
    BreakdownSession, CharRange, ElementCategory, MemoryStore, PlainScript, ScriptAnalyst,
    SessionArchive, ShotListSession, SlateResult, TextGenerator, breakdown_from_csv,
    breakdown_to_csv, shots_to_csv,
};
use std::sync::Arc;

struct CannedGenerator(&'static str);

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn generate(&self, _prompt: &str) -> SlateResult<String> {
        Ok(self.0.to_string())
    }
}

const SCRIPT: &str = "INT. OFFICE - NIGHT\n\nThe brass lamp flickers. MARLOWE waits by the window.\n";

#[tokio::test]
async fn breakdown_flows_from_model_to_csv_and_back() {
    let response = r#"```json
{"props": ["brass lamp"], "cast": ["MARLOWE"], "locations": ["office"]}
```"#;
    let analyst = ScriptAnalyst::new(CannedGenerator(response));

    // Model suggestions land in a session alongside a manual tag.
    let store = Arc::new(MemoryStore::new());
    let mut session = BreakdownSession::open(
        SessionArchive::new(store.clone()),
        PlainScript::new(SCRIPT),
    )
    .unwrap();

    let suggested = analyst.analyze_breakdown(SCRIPT).await.unwrap();
    for (category, items) in suggested.iter() {
        for item in items {
            session.accept_suggestion(category, item.clone()).unwrap();
        }
    }
    session
        .tag_selection(CharRange::new(25, 35), ElementCategory::Props)
        .unwrap();

    // Export round-trips through CSV.
    let csv = breakdown_to_csv(session.elements());
    let recovered = breakdown_from_csv(&csv).unwrap();
    assert_eq!(&recovered, session.elements());
    assert_eq!(recovered.items(ElementCategory::Cast), ["MARLOWE"]);
    assert_eq!(recovered.items(ElementCategory::Props).len(), 2);

    // The mutations were persisted as they happened.
    let reopened =
        BreakdownSession::open(SessionArchive::new(store), PlainScript::new("")).unwrap();
    assert_eq!(reopened.elements().total(), session.elements().total());
}

#[tokio::test]
async fn generated_shots_merge_into_a_session_and_export() {
    let response = r#"[
        {"description": "Establishing shot of the office tower", "type": "Establishing"},
        {"scene": "2", "description": "Lamp insert", "type": "Insert", "lens": "100mm"}
    ]"#;
    let analyst = ScriptAnalyst::new(CannedGenerator(response));

    let store = Arc::new(MemoryStore::new());
    let mut session = ShotListSession::open(SessionArchive::new(store.clone())).unwrap();
    session.set_script(SCRIPT).unwrap();

    let outcome = analyst.generate_shot_list(SCRIPT, Some("1")).await.unwrap();
    assert!(!outcome.is_empty());
    session.merge_generated(outcome.into_shots()).unwrap();

    assert_eq!(session.shots().len(), 2);
    assert_eq!(session.shots()[0].scene(), "1");
    assert_eq!(session.shots()[1].scene(), "2");

    let csv = shots_to_csv(session.shots());
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some(slate::SHOT_LIST_HEADER));
    assert!(lines.next().unwrap().contains("Establishing shot of the office tower"));
    assert!(lines.next().unwrap().contains("100mm"));

    // A fresh session sees the merged shots.
    let reopened = ShotListSession::open(SessionArchive::new(store)).unwrap();
    assert_eq!(reopened.shots().len(), 2);
    assert_eq!(reopened.script(), SCRIPT);
}
