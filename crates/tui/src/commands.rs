use std::fs;
use std::io::Write;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;

use crate::cli::{CliCommand, ReplayArgs, ReplayFormat};
use crate::config::AppConfig;
use crate::core::seeding::seed_sample_tasks;
use crate::core::{Board, BoardSnapshot, Intent, Outcome, OverlayState};
use crate::model::TaskStatus;

pub fn execute<W: Write>(config: &AppConfig, command: CliCommand, mut writer: W) -> Result<()> {
    match command {
        CliCommand::Replay(args) => handle_replay(config, &args, &mut writer),
        CliCommand::Tui(_) => Err(anyhow!("launch interactive surfaces directly")),
    }
}

#[derive(Debug, Serialize)]
struct ReplayStep {
    step: usize,
    intent: &'static str,
    outcome: Outcome,
}

#[derive(Debug, Serialize)]
struct ReplayReport {
    steps: Vec<ReplayStep>,
    board: BoardSnapshot,
}

fn handle_replay<W: Write>(config: &AppConfig, args: &ReplayArgs, mut writer: W) -> Result<()> {
    let raw = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read intents from {}", args.file.display()))?;
    let intents: Vec<Intent> = serde_json::from_str(&raw)
        .with_context(|| format!("invalid intent list in {}", args.file.display()))?;

    let mut board = Board::new(config.settings()).context("failed to build board")?;
    if args.demo {
        seed_sample_tasks(&mut board)?;
    }

    tracing::info!(count = intents.len(), "replaying intents");
    let mut steps = Vec::with_capacity(intents.len());
    for (index, intent) in intents.into_iter().enumerate() {
        let name = intent.name();
        let outcome = board.apply(intent)?;
        steps.push(ReplayStep {
            step: index + 1,
            intent: name,
            outcome,
        });
    }

    let report = ReplayReport {
        steps,
        board: board.snapshot(),
    };
    match args.format {
        ReplayFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &report)?;
            writeln!(writer)?;
        }
        ReplayFormat::Text => write_text_report(&report, args.status, &mut writer)?,
    }
    Ok(())
}

fn write_text_report<W: Write>(
    report: &ReplayReport,
    status: Option<TaskStatus>,
    mut writer: W,
) -> Result<()> {
    for step in &report.steps {
        writeln!(writer, "{:>3}. {:<24} {}", step.step, step.intent, step.outcome)?;
    }
    if !report.steps.is_empty() {
        writeln!(writer)?;
    }

    let board = &report.board;
    let listed: Vec<_> = board
        .tasks
        .iter()
        .filter(|task| status.map_or(true, |status| task.status == status))
        .collect();
    match (listed.is_empty(), status) {
        (true, Some(status)) => writeln!(writer, "No {} tasks", status.as_str())?,
        (true, None) => writeln!(writer, "No tasks")?,
        (false, _) => {}
    }
    for task in listed {
        writeln!(
            writer,
            "#{:<4} [{}] {} ({} | {})",
            task.id, task.status, task.name, task.category, task.responsible
        )?;
    }
    writeln!(
        writer,
        "Progress: {}% ({} done, {} pending, {} total)",
        board.stats.progress_percent(),
        board.stats.done,
        board.stats.pending,
        board.stats.total
    )?;
    writeln!(writer, "Categories: {}", board.categories.join(", "))?;
    writeln!(writer, "Responsibles: {}", board.responsibles.join(", "))?;

    match board.overlay {
        OverlayState::Closed => {}
        OverlayState::CreateOpen => writeln!(writer, "Form still open: new task")?,
        OverlayState::EditOpen(id) => writeln!(writer, "Form still open: editing #{id}")?,
    }
    if let Some(error) = board.draft.as_ref().and_then(|draft| draft.error.as_ref()) {
        writeln!(writer, "Form error: {error}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn temp_config() -> (AppConfig, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let config = AppConfig::from_data_dir(dir.path().to_path_buf()).expect("config");
        (config, dir)
    }

    fn write_intents(dir: &Path, json: &str) -> std::path::PathBuf {
        let path = dir.join("intents.json");
        std::fs::write(&path, json).expect("write intents");
        path
    }

    fn run(config: &AppConfig, file: std::path::PathBuf, format: ReplayFormat) -> String {
        let args = ReplayArgs {
            file,
            format,
            status: None,
            demo: false,
        };
        let mut output = Vec::new();
        execute(config, CliCommand::Replay(args), &mut output).expect("execute replay");
        String::from_utf8(output).expect("utf8")
    }

    #[test]
    fn replay_reports_created_task_and_registry_growth() {
        let (config, dir) = temp_config();
        let file = write_intents(
            dir.path(),
            r#"[
                {"intent": "open_create"},
                {"intent": "set_field", "field": "pending_responsible", "value": "Bia "},
                {"intent": "commit"}
            ]"#,
        );

        let output = run(&config, file, ReplayFormat::Text);

        assert!(output.contains("created task #1"));
        assert!(output.contains("#1    [Pending] Task 1 (Planning | Bia)"));
        assert!(output.contains("Responsibles: Mario, Ana, Carlos, Team, Bia"));
        assert!(output.contains("Progress: 0% (0 done, 1 pending, 1 total)"));
    }

    #[test]
    fn replay_surfaces_rejection_and_open_form() {
        let (config, dir) = temp_config();
        let file = write_intents(
            dir.path(),
            r#"[
                {"intent": "open_create"},
                {"intent": "set_field", "field": "category", "value": ""},
                {"intent": "commit"}
            ]"#,
        );

        let output = run(&config, file, ReplayFormat::Text);

        assert!(output.contains("rejected: Choose a category and a responsible."));
        assert!(output.contains("No tasks"));
        assert!(output.contains("Form still open: new task"));
        assert!(output.contains("Form error:"));
    }

    #[test]
    fn replay_emits_json_snapshot() {
        let (config, dir) = temp_config();
        let file = write_intents(
            dir.path(),
            r#"[{"intent": "open_create"}, {"intent": "commit"}, {"intent": "cycle_status", "id": 1}]"#,
        );

        let output = run(&config, file, ReplayFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).expect("json output");

        assert_eq!(value["steps"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["board"]["tasks"][0]["status"], "in_progress");
        assert_eq!(value["board"]["overlay"]["state"], "closed");
    }

    #[test]
    fn replay_rejects_malformed_file() {
        let (config, dir) = temp_config();
        let file = write_intents(dir.path(), r#"[{"intent": "explode"}]"#);
        let args = ReplayArgs {
            file,
            format: ReplayFormat::Text,
            status: None,
            demo: false,
        };
        let err = execute(&config, CliCommand::Replay(args), Vec::new()).unwrap_err();
        assert!(err.to_string().contains("invalid intent list"));
    }

    #[test]
    fn replay_text_report_filters_by_status() {
        let (config, dir) = temp_config();
        let file = write_intents(
            dir.path(),
            r#"[
                {"intent": "open_create"},
                {"intent": "commit"},
                {"intent": "open_create"},
                {"intent": "commit"},
                {"intent": "cycle_status", "id": 2},
                {"intent": "cycle_status", "id": 2}
            ]"#,
        );
        let render = |status| {
            let args = ReplayArgs {
                file: file.clone(),
                format: ReplayFormat::Text,
                status,
                demo: false,
            };
            let mut output = Vec::new();
            execute(&config, CliCommand::Replay(args), &mut output).expect("execute replay");
            String::from_utf8(output).expect("utf8")
        };

        let done = render(Some(TaskStatus::Done));
        assert!(done.contains("#2    [Done] Task 2"));
        assert!(!done.contains("[Pending] Task 1"));
        assert!(done.contains("Progress: 50% (1 done, 1 pending, 2 total)"));

        let in_progress = render(Some(TaskStatus::InProgress));
        assert!(in_progress.contains("No in_progress tasks"));
    }
}
