//! Human-readable and JSON output.

use color_eyre::eyre::eyre;
use color_eyre::Result;
use colored::Colorize;
use pr_core::registry::progress::{progress_state, ProgressState};
use pr_core::ProjectRegistry;
use pr_protocol::ProjectItem;

pub fn print_list(registry: &ProjectRegistry, json: bool) -> Result<()> {
    if json {
        return print_json(&registry.state().projects_by_key);
    }

    let current = registry.state().current_project.as_deref();
    let mut empty = true;
    for (key, project) in registry.projects() {
        empty = false;
        let marker = if current == Some(key) { "*".green().bold() } else { " ".normal() };
        println!(
            "{marker} {} {} {}{}",
            key.yellow(),
            project.name.bold(),
            project.path.dimmed(),
            progress_suffix(project)
        );
    }

    if empty {
        println!("{}", "No projects registered".dimmed());
    }
    Ok(())
}

/// Whole-registry view: the file location, the current project and every
/// record.
pub fn print_state(registry: &ProjectRegistry, json: bool) -> Result<()> {
    if json {
        return print_json(registry.state());
    }

    println!("registry:    {}", registry.db_path().display());
    match registry.current_project() {
        Some((key, project)) => println!("current:     {} {}", key.yellow(), project.name.bold()),
        None => println!("current:     {}", "none".dimmed()),
    }
    println!("projects:    {}", registry.state().projects_by_key.len());

    for (key, project) in registry.projects() {
        println!();
        print_project(key, project, false)?;
    }
    Ok(())
}

pub fn print_project(key: &str, project: &ProjectItem, json: bool) -> Result<()> {
    if json {
        return print_json(project);
    }

    println!("{} {}", key.yellow(), project.name.bold());
    println!("  path:        {}", project.path);
    if let Some(created_at) = project.created_at {
        println!("  created_at:  {created_at}");
    }
    if let Some(npm_client) = &project.npm_client {
        println!("  npm client:  {npm_client}");
    }
    if let Some(taobao_speed_up) = project.taobao_speed_up {
        println!("  taobao:      {taobao_speed_up}");
    }
    if let Some(progress) = &project.creating_progress {
        let label = progress
            .steps
            .get(progress.step as usize)
            .map(String::as_str)
            .unwrap_or("-");
        println!(
            "  progress:    step {} ({label}), status {}{}",
            progress.step,
            progress.step_status.code(),
            progress_suffix(project)
        );
        if let Some(failure) = &progress.failure {
            println!("  failure:     {}", failure.message.red());
        }
    }
    Ok(())
}

/// Print the record at `key` after a successful mutation.
pub fn print_saved(registry: &ProjectRegistry, key: &str, verb: &str, json: bool) -> Result<()> {
    let project = registry
        .project(key)
        .ok_or_else(|| eyre!("project of key {key} not found"))?;

    if json {
        return print_json(project);
    }

    println!("{} {} {}", verb.green(), key.yellow(), project.name.bold());
    Ok(())
}

pub fn print_removed(key: &str, existed: bool, json: bool) -> Result<()> {
    if json {
        return print_json(&serde_json::json!({ "key": key, "removed": existed }));
    }

    if existed {
        println!("{} {}", "Removed".green(), key.yellow());
    } else {
        println!("{} {}", "No project with key".dimmed(), key.yellow());
    }
    Ok(())
}

fn progress_suffix(project: &ProjectItem) -> String {
    match progress_state(project) {
        ProgressState::None => String::new(),
        ProgressState::InFlight => format!(" {}", "[creating]".cyan()),
        ProgressState::Succeeded => format!(" {}", "[created]".green()),
        ProgressState::Failed => format!(" {}", "[failed]".red()),
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
