//! Command handlers for the slate binary.

use crate::cli::{Cli, Commands};
use anyhow::Context;
use slate_analysis::{ScriptAnalyst, ShotListOutcome};
use slate_core::SummaryLength;
use slate_export::{breakdown_to_csv, count_scene_headings, read_script, shots_to_csv};
use slate_models::GeminiClient;
use slate_session::ShotListSession;
use slate_storage::{FileStore, SessionArchive};
use std::path::{Path, PathBuf};
use tracing::info;

/// Run the parsed CLI command.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut client = GeminiClient::from_env()
        .context("Gemini credential missing; set GEMINI_API_KEY before running")?;
    if let Some(model) = cli.model {
        client = client.with_model(model);
    }
    let analyst = ScriptAnalyst::new(client);

    match cli.command {
        Commands::Breakdown { script, export } => handle_breakdown(&analyst, &script, export).await,
        Commands::Shots {
            script,
            scene,
            export,
        } => handle_shots(&analyst, &script, scene.as_deref(), export).await,
        Commands::Tone { script } => handle_tone(&analyst, &script).await,
        Commands::Summarize { script, length } => {
            handle_summarize(&analyst, &script, &length).await
        }
    }
}

fn load_subject(path: &Path) -> anyhow::Result<String> {
    let text = read_script(path).with_context(|| format!("Failed to import {}", path.display()))?;
    info!(
        path = %path.display(),
        scenes = count_scene_headings(&text),
        "Imported script"
    );
    Ok(text)
}

async fn handle_breakdown(
    analyst: &ScriptAnalyst<GeminiClient>,
    script: &Path,
    export: Option<PathBuf>,
) -> anyhow::Result<()> {
    let text = load_subject(script)?;
    let elements = analyst
        .analyze_breakdown(&text)
        .await
        .context("Breakdown analysis failed")?;

    if elements.is_empty() {
        println!("No production elements detected.");
    } else {
        for (category, items) in elements.iter() {
            if items.is_empty() {
                continue;
            }
            println!("{} ({})", category, items.len());
            for item in items {
                println!("  - {}", item);
            }
        }
    }

    let archive = SessionArchive::new(FileStore::open_default()?);
    archive.save_breakdown(&elements)?;

    if let Some(path) = export {
        std::fs::write(&path, breakdown_to_csv(&elements))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Breakdown sheet written to {}", path.display());
    }
    Ok(())
}

async fn handle_shots(
    analyst: &ScriptAnalyst<GeminiClient>,
    script: &Path,
    scene: Option<&str>,
    export: Option<PathBuf>,
) -> anyhow::Result<()> {
    let text = load_subject(script)?;
    let outcome = analyst
        .generate_shot_list(&text, scene)
        .await
        .context("Shot list generation failed")?;

    let archive = SessionArchive::new(FileStore::open_default()?);
    let mut session = ShotListSession::open(archive)?;
    session.set_script(text.as_str())?;

    match outcome {
        ShotListOutcome::Empty => {
            println!(
                "No shots could be generated from this script. \
                 Try adding more descriptive scene content."
            );
        }
        ShotListOutcome::Shots(shots) => {
            println!("Generated {} shots:", shots.len());
            for shot in &shots {
                println!(
                    "  {}.{} {} [{} / {} / {}]",
                    shot.scene(),
                    shot.shot_number(),
                    shot.description(),
                    shot.shot_type(),
                    shot.angle(),
                    shot.lens(),
                );
            }
            session.merge_generated(shots)?;
        }
    }

    if let Some(path) = export {
        std::fs::write(&path, shots_to_csv(session.shots()))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Shot list written to {}", path.display());
    }
    Ok(())
}

async fn handle_tone(analyst: &ScriptAnalyst<GeminiClient>, script: &Path) -> anyhow::Result<()> {
    let text = load_subject(script)?;
    let report = analyst
        .analyze_tone(&text)
        .await
        .context("Tone analysis failed")?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn handle_summarize(
    analyst: &ScriptAnalyst<GeminiClient>,
    script: &Path,
    length: &str,
) -> anyhow::Result<()> {
    let length = match length {
        "short" => SummaryLength::Short,
        "medium" => SummaryLength::Medium,
        "long" => SummaryLength::Long,
        other => anyhow::bail!("Unknown summary length {:?} (use short, medium, or long)", other),
    };
    let text = load_subject(script)?;
    let summary = analyst
        .summarize(&text, length)
        .await
        .context("Summarization failed")?;
    println!("{}", summary.text());
    println!(
        "\n({} -> {} chars, {}% shorter)",
        summary.original_len(),
        summary.summary_len(),
        summary.compression_ratio()
    );
    Ok(())
}
