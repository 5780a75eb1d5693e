//! `regiongen run` and `regiongen check`

use crate::session::Session;
use anyhow::{Result, bail};
use regiongen_core::{Driver, FileOutcome, WriteMode};
use std::path::Path;
use std::process::ExitCode;

/// Exit status of `run --check` when a target is out of date
const STALE_EXIT: u8 = 2;

pub struct RunOptions {
    pub dry_run: bool,
    pub check: bool,
    pub strict: bool,
}

pub fn run(config_path: &Path, options: RunOptions) -> Result<ExitCode> {
    let session = Session::load(config_path, options.strict)?;
    let registries = session.registries()?;
    let targets = session.targets(&registries)?;

    let mode = if options.dry_run || options.check {
        WriteMode::DryRun
    } else {
        WriteMode::Write
    };
    let driver = Driver::new(&session.config.markers, &session.config.annotation, mode);

    let report = driver.run(&targets);

    for file in &report.files {
        let status = match file.outcome {
            FileOutcome::Unchanged => "up to date",
            FileOutcome::Rewritten => "updated",
            FileOutcome::Stale => "would update",
        };
        println!(
            "✓ {} ({} regions, {status})",
            file.path.display(),
            file.regions.len()
        );
    }
    for (path, err) in &report.failures {
        eprintln!("✗ {}: {err}", path.display());
    }

    if !report.is_success() {
        bail!(
            "{} of {} targets failed; they were left unmodified",
            report.failures.len(),
            targets.len()
        );
    }

    let changed = report.changed().count();
    if options.check && changed > 0 {
        println!("\n{changed} file(s) out of date. Run `regiongen run` to regenerate.");
        return Ok(ExitCode::from(STALE_EXIT));
    }

    match mode {
        WriteMode::DryRun => println!("\n{changed} file(s) would change."),
        WriteMode::Write => println!("\n{changed} file(s) regenerated."),
    }
    Ok(ExitCode::SUCCESS)
}

pub fn check(config_path: &Path, strict: bool) -> Result<()> {
    println!("Checking configuration: {}", config_path.display());

    let session = Session::load(config_path, strict)?;
    let registries = session.registries()?;

    let project = &session.project;
    println!(
        "✓ Actor fields: {} ({} runtime)",
        project.actor().fields().len(),
        project.runtime().fields().len()
    );
    println!("✓ Stage fields: {}", project.stage().fields().len());
    println!("✓ Remote functions: {}", project.remote_functions().len());
    for (name, registry) in &registries {
        println!("✓ Registry {name}: {} markers", registry.len());
    }
    println!("✓ Targets: {}", session.config.targets.len());
    for target in &session.config.targets {
        if !target.path.exists() {
            println!("  ! {} does not exist yet", target.path.display());
        }
    }
    println!("\nConfiguration is valid!");

    Ok(())
}
