//! Workflow engine
//!
//! This module contains the engine that orchestrates the phases of a run.

use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use log::{debug, info};

use crate::config::{CliOverrides, initialise};
use crate::discovery::list_directory;
use crate::file_ops::{MaterializeReport, materialize};
use crate::logging::format_message;
use crate::path_gen::{PathTemplate, parse_components};
use crate::structure::{Placement, TargetNode, load_structure, save_structure};
use crate::utils::format_batches;

use super::context::{EvaluationStats, RunContext};

/// Options for a run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Path to the control file
    pub control_file: PathBuf,
    /// Directories given on the command line
    pub overrides: CliOverrides,
    /// Whether to plan the copy/rename phase instead of performing it
    pub dry_run: bool,
}

/// Runs the evaluation phase
///
/// Lists the source directory, resolves the path template for every file with
/// the expected number of components, builds the target tree and saves it to
/// the structure file. The tree stays in the context for the copy/rename
/// phase.
///
/// # Errors
/// * Returns an error if the source directory cannot be read
/// * Returns an error on a structural conflict under the `fail` policy
/// * Returns an error if the structure file cannot be written
pub fn evaluate(context: &mut RunContext) -> Result<()> {
    let settings = &context.settings;

    info!(
        "Looking up files in directory {} with extension {:?}.",
        settings.source_directory.display(),
        settings.extension_filter
    );

    let listing = list_directory(
        &settings.source_directory,
        settings.extension_filter.as_deref(),
    )?;

    debug!(
        "Found following files in directory {}:",
        settings.source_directory.display()
    );
    for line in format_batches(&listing.files, settings.num_files_line) {
        debug!("{line}");
    }

    let template = PathTemplate::new(&settings.target_file_syntax, &settings.directory_separator);
    info!("Using target file syntax: {}.", template.syntax());

    let mut root = TargetNode::new();
    let mut stats = EvaluationStats {
        files_listed: listing.files.len(),
        ..EvaluationStats::default()
    };

    for source_file_name in &listing.files {
        let parsed = parse_components(source_file_name, &settings.component_separator);

        if !parsed.has_component_count(settings.num_components) {
            debug!(
                "Skipping {}: {} components, expected {}",
                source_file_name,
                parsed.len(),
                settings.num_components
            );
            stats.files_skipped += 1;
            continue;
        }

        let resolved = template.resolve(&parsed);
        debug!("{} -> {}", source_file_name, resolved.raw);

        let placement = root
            .insert(&resolved, source_file_name, settings.conflict_policy)
            .with_context(|| format!("Failed to place {source_file_name}"))?;
        if let Placement::Flattened { .. } = placement {
            stats.flattened = true;
        }
    }

    stats.files_placed = root.pair_count();

    info!("Saving the target file structure.");
    save_structure(&root, &settings.structure_file)?;

    info!(
        "{} files listed, {} skipped, {} placed{}",
        stats.files_listed,
        stats.files_skipped,
        stats.files_placed,
        if stats.flattened {
            " (target file structure flattened)"
        } else {
            ""
        }
    );

    context.evaluation = stats;
    context.structure = Some(root);

    Ok(())
}

/// Runs the copy/rename phase
///
/// Uses the target tree of the evaluation phase when it ran in this process,
/// otherwise loads it from the structure file.
///
/// # Errors
/// * `StructureArtifactMissing` if there is no tree in memory and no structure file
/// * Returns an error if a directory cannot be created or a file cannot be copied or moved
pub fn copy_rename(context: &mut RunContext) -> Result<()> {
    let settings = &context.settings;

    let root = match context.structure.take() {
        Some(root) => root,
        None => load_structure(&settings.structure_file)?,
    };

    let report = materialize(
        &root,
        &settings.source_directory,
        &settings.target_directory,
        settings.action,
        context.dry_run,
    )?;

    if context.dry_run {
        print_plan(&report);
    }

    context.structure = Some(root);
    context.materialization = Some(report);

    Ok(())
}

/// Runs every enabled phase
///
/// Configuration problems abort the run before any file is touched. A failing
/// phase stops the run; files already copied or moved stay where they are.
pub fn run(options: RunOptions) -> Result<RunContext> {
    let settings =
        initialise(&options.control_file, options.overrides).context("Initialisation failed")?;
    let mut context = RunContext::new(settings, options.dry_run);

    if context.settings.evaluate {
        evaluate(&mut context).context("Evaluation phase failed")?;
    }

    if context.settings.copy_rename {
        copy_rename(&mut context).context("Copy/rename phase failed")?;
    }

    Ok(context)
}

fn print_plan(report: &MaterializeReport) {
    if report.planned_operations.is_empty() {
        println!("\nNothing to copy or rename.");
        return;
    }

    println!("\nDetailed plan of operations:");
    println!("===========================");

    for op in &report.planned_operations {
        let name = op
            .destination
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!(
            "{:?}: {}",
            op.action,
            format_message(&name, &name.bold().to_string())
        );
        println!("  From: {}", op.source.display());
        println!("  To:   {}", op.destination.display());
    }

    println!("\nSummary:");
    println!("--------");
    println!(
        "  Directories to be created: {}",
        report.stats.directories_created
    );
    println!("  Files to be copied:        {}", report.stats.files_copied);
    println!("  Files to be moved:         {}", report.stats.files_moved);
    println!("\nRun without --dry flag to execute these operations.");
}
