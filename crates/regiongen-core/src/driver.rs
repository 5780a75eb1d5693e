//! Driver: patch target files one at a time and replace them atomically

use crate::emit::AnnotationStyle;
use crate::error::{GenError, GenResult};
use crate::patcher::{MarkerSyntax, RegionPatcher, RegionSummary};
use crate::registry::MarkerRegistry;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A file to regenerate and the registry that owns its regions
#[derive(Debug, Clone, Copy)]
pub struct TargetFile<'t, 's> {
    pub path: &'t Path,
    pub registry: &'t MarkerRegistry<'s>,
}

/// Whether patched output is written back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    #[default]
    Write,
    /// Compute outcomes without touching any file
    DryRun,
}

/// What happened to one target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Generated content already matched the file
    Unchanged,
    /// The file was replaced
    Rewritten,
    /// Dry run: the file would have been replaced
    Stale,
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
    pub regions: Vec<RegionSummary>,
}

/// Outcome of a whole run
#[derive(Debug, Default)]
pub struct RunReport {
    pub files: Vec<FileReport>,
    pub failures: Vec<(PathBuf, GenError)>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Files that were (or in a dry run, would be) rewritten
    pub fn changed(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|f| f.outcome != FileOutcome::Unchanged)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Driver<'c> {
    patcher: RegionPatcher<'c>,
    mode: WriteMode,
}

impl<'c> Driver<'c> {
    pub fn new(syntax: &'c MarkerSyntax, annotation: &'c AnnotationStyle, mode: WriteMode) -> Self {
        Self {
            patcher: RegionPatcher::new(syntax, annotation),
            mode,
        }
    }

    /// Read, patch and (unless dry-running) replace one file.
    ///
    /// The file is only written when the whole scan succeeds and the output
    /// differs from what is on disk.
    pub fn patch_file(&self, target: TargetFile<'_, '_>) -> GenResult<FileReport> {
        let path = target.path;
        let source = fs::read_to_string(path).map_err(|e| GenError::io(path, e))?;

        let patched = self.patcher.patch(path, &source, target.registry)?;

        let outcome = if patched.text == source {
            FileOutcome::Unchanged
        } else if self.mode == WriteMode::DryRun {
            FileOutcome::Stale
        } else {
            replace_file(path, &patched.text)?;
            FileOutcome::Rewritten
        };

        if !patched.foreign_markers.is_empty() {
            tracing::debug!(
                path = %path.display(),
                markers = ?patched.foreign_markers,
                "left regions owned by other registries untouched"
            );
        }
        tracing::info!(
            path = %path.display(),
            registry = target.registry.name(),
            regions = patched.regions.len(),
            ?outcome,
            "patched"
        );

        Ok(FileReport {
            path: path.to_path_buf(),
            outcome,
            regions: patched.regions,
        })
    }

    /// Patch every target in order.
    ///
    /// A failing file is recorded and skipped; files already rewritten stay
    /// rewritten.
    pub fn run(&self, targets: &[TargetFile<'_, '_>]) -> RunReport {
        let mut report = RunReport::default();
        for target in targets {
            match self.patch_file(*target) {
                Ok(file) => report.files.push(file),
                Err(err) => {
                    tracing::error!(path = %target.path.display(), error = %err, "file left unmodified");
                    report.failures.push((target.path.to_path_buf(), err));
                }
            }
        }
        report
    }
}

/// Write `contents` to a temp file beside `path`, then rename it over `path`
fn replace_file(path: &Path, contents: &str) -> GenResult<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| GenError::io(dir, e))?;
    temp.write_all(contents.as_bytes())
        .map_err(|e| GenError::io(temp.path(), e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| GenError::io(temp.path(), e))?;

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(temp.path(), metadata.permissions())
            .map_err(|e| GenError::io(temp.path(), e))?;
    }

    temp.persist(path).map_err(|e| GenError::io(path, e.error))?;
    Ok(())
}
