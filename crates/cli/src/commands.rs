//! Subcommand execution.

use crate::cli::{AddArgs, Cli, Command, EditArgs, ProgressArgs};
use crate::output;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use pr_core::{ProjectRegistry, StoreOptions};
use pr_protocol::{CreateFailure, FailureKind, NewProject, ProgressPatch, ProjectPatch, StepStatus};
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    let options = StoreOptions {
        db_path: cli.db,
        observer: None,
    };
    let mut registry = ProjectRegistry::open(options).wrap_err("Failed to open project registry")?;
    debug!(path = %registry.db_path().display(), "registry ready");

    let json = cli.json;
    match cli.command {
        Command::List => output::print_list(&registry, json),
        Command::Show { key: None } => output::print_state(&registry, json),
        Command::Show { key: Some(key) } => {
            let project = registry
                .project(&key)
                .ok_or_else(|| eyre!("project of key {key} not found"))?;
            output::print_project(&key, project, json)
        }
        Command::Add(args) => add(&mut registry, args, json),
        Command::Open { path } => {
            let key = registry
                .add_project_and_set_current(&path)
                .wrap_err_with(|| format!("Failed to open {}", path.display()))?;
            output::print_saved(&registry, &key, "Current project", json)
        }
        Command::Use { key } => {
            registry.set_current_project(&key)?;
            output::print_saved(&registry, &key, "Current project", json)
        }
        Command::Remove { key } => {
            let existed = registry.project(&key).is_some();
            registry.delete_project(&key)?;
            output::print_removed(&key, existed, json)
        }
        Command::Edit(args) => edit(&mut registry, args, json),
        Command::NpmClient { key, client } => {
            registry.set_project_npm_client(&key, client)?;
            output::print_saved(&registry, &key, "Updated", json)
        }
        Command::Progress(args) => progress(&mut registry, args, json),
        Command::ProgressDone { key } => {
            registry.set_creating_progress_done(&key)?;
            output::print_saved(&registry, &key, "Progress cleared", json)
        }
        Command::Path => {
            println!("{}", registry.db_path().display());
            Ok(())
        }
    }
}

fn add(registry: &mut ProjectRegistry, args: AddArgs, json: bool) -> Result<()> {
    let key = registry.add_project(NewProject {
        name: args.name,
        path: args.path,
        npm_client: args.npm_client,
        taobao_speed_up: args.taobao_speed_up.then_some(true),
    })?;
    output::print_saved(registry, &key, "Registered", json)
}

fn edit(registry: &mut ProjectRegistry, args: EditArgs, json: bool) -> Result<()> {
    let patch = ProjectPatch {
        name: args.name,
        path: args.path,
        npm_client: args.npm_client,
        taobao_speed_up: args.taobao_speed_up,
    };
    if patch.is_empty() {
        return Err(eyre!("Nothing to edit; pass at least one field"));
    }

    registry.edit_project(&args.key, patch)?;
    output::print_saved(registry, &args.key, "Updated", json)
}

fn progress(registry: &mut ProjectRegistry, args: ProgressArgs, json: bool) -> Result<()> {
    let patch = ProgressPatch {
        step: args.step,
        step_status: args.status.map(StepStatus::from),
        steps: args.steps,
        success: args.success.then_some(true),
        failure: args
            .failure
            .map(|message| CreateFailure::new(FailureKind::Unknown, message)),
    };

    registry.set_creating_progress(&args.key, patch)?;
    output::print_saved(registry, &args.key, "Progress updated", json)
}
