use crate::output::{print_json, print_table};
use clap::Subcommand;
use lifecraft_core::progress::ProgressUpdate;
use lifecraft_core::types::{ModuleId, ModuleStatus, UserId};
use std::path::Path;

#[derive(Subcommand)]
pub enum ProgressSubcommand {
    /// Show a user's progress for every module, or one module
    Show {
        #[arg(long)]
        user: UserId,
        #[arg(long)]
        module: Option<ModuleId>,
    },

    /// Update a user's progress in one module
    Set {
        module: ModuleId,
        #[arg(long)]
        user: UserId,
        /// not_started, in_progress or completed
        #[arg(long)]
        status: Option<ModuleStatus>,
        /// Stage name declared by the module
        #[arg(long)]
        stage: Option<String>,
        /// Completion percentage, 0-100
        #[arg(long)]
        percent: Option<u32>,
    },

    /// Delete every progress record for a user
    Reset {
        #[arg(long)]
        user: UserId,
    },
}

pub fn run(root: &Path, subcmd: ProgressSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ProgressSubcommand::Show { user, module } => show(root, &user, module, json),
        ProgressSubcommand::Set {
            module,
            user,
            status,
            stage,
            percent,
        } => {
            let update = ProgressUpdate {
                status,
                current_stage: stage,
                completion_percentage: percent,
            };
            set(root, &user, module, &update, json)
        }
        ProgressSubcommand::Reset { user } => reset(root, &user, json),
    }
}

fn show(root: &Path, user: &UserId, module: Option<ModuleId>, json: bool) -> anyhow::Result<()> {
    let service = super::open_service(root)?;
    let states = match module {
        Some(m) => vec![service.module_progress(user, m)?],
        None => service.all_progress(user)?,
    };

    if json {
        return print_json(&states);
    }

    let rows = states
        .iter()
        .map(|s| {
            let status = s.progress.as_ref().map(|p| p.status).unwrap_or_default();
            let pct = s
                .progress
                .as_ref()
                .map(|p| p.effective_percentage())
                .unwrap_or(0);
            let stage = s
                .progress
                .as_ref()
                .and_then(|p| p.current_stage.clone())
                .unwrap_or_else(|| "-".to_string());
            vec![
                s.order.to_string(),
                s.module.id.to_string(),
                status.to_string(),
                format!("{pct}%"),
                stage,
                if s.gate.can_start { "open" } else { "locked" }.to_string(),
            ]
        })
        .collect();
    print_table(&["#", "MODULE", "STATUS", "PCT", "STAGE", "GATE"], rows);
    Ok(())
}

fn set(
    root: &Path,
    user: &UserId,
    module: ModuleId,
    update: &ProgressUpdate,
    json: bool,
) -> anyhow::Result<()> {
    if update.status.is_none() && update.current_stage.is_none() && update.completion_percentage.is_none() {
        anyhow::bail!("nothing to update: pass --status, --stage or --percent");
    }
    let service = super::open_service(root)?;
    let record = service.update_progress(user, module, update)?;

    if json {
        return print_json(&record);
    }
    println!(
        "{}: {} ({}%)",
        record.module_id,
        record.status,
        record.effective_percentage()
    );
    if let Some(stage) = &record.current_stage {
        println!("  stage: {stage}");
    }
    Ok(())
}

fn reset(root: &Path, user: &UserId, json: bool) -> anyhow::Result<()> {
    let service = super::open_service(root)?;
    let deleted = service.reset(user)?;
    if json {
        return print_json(&serde_json::json!({ "user": user, "deleted": deleted }));
    }
    println!("Deleted {deleted} progress record(s) for {user}");
    Ok(())
}
