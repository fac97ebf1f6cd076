use crate::clone::CloneRunner;
use crate::lister::RepoLister;
use crate::model::FetchParams;
use crate::paths::repo_dest;
use crate::progress::{ProgressReporter, ProgressState, ProgressUpdate};
use anyhow::Context;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{error, info};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FetchSummary {
    pub cloned: u32,
    pub skipped: u32,
    pub failed: u32,
}

/// One repository fetch run: ensure every listed repository has a local
/// clone under the target directory, skipping the ones already present.
pub struct FetchTask {
    name: String,
    params: FetchParams,
    state: ProgressState,
}

impl FetchTask {
    pub fn new(name: impl Into<String>, params: FetchParams) -> Self {
        Self {
            name: name.into(),
            params,
            state: ProgressState::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &FetchParams {
        &self.params
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// Runs the fetch. Directory-creation failure is fatal; a clone failure
    /// is isolated to its repository and never aborts the run.
    pub fn run(
        &mut self,
        lister: &dyn RepoLister,
        cloner: &dyn CloneRunner,
        progress: Option<&ProgressReporter<'_>>,
    ) -> anyhow::Result<FetchSummary> {
        let root = self.params.target_directory.clone();
        info!(
            region = %self.params.region,
            root = %root.display(),
            "starting repository fetch"
        );

        if !root.exists() {
            fs::create_dir_all(&root)
                .with_context(|| format!("create target directory {}", root.display()))?;
            info!(path = %root.display(), "created target directory");
        }

        let repos = lister.list_repos(&self.params).context("list repositories")?;
        self.state.start(repos.len());
        info!(count = repos.len(), "found repositories");

        let mut summary = FetchSummary::default();
        for repo in repos {
            let step_started = Instant::now();
            let dest = repo_dest(&root, &repo.name);
            if dir_is_populated(&dest) {
                info!(
                    repo = %repo.name,
                    path = %dest.display(),
                    "repository already present; skipping clone"
                );
                summary.skipped += 1;
            } else {
                info!(repo = %repo.name, url = %repo.clone_url, "cloning repository");
                match cloner.clone_repo(&repo.clone_url, &dest) {
                    Ok(()) => summary.cloned += 1,
                    Err(err) => {
                        error!(repo = %repo.name, error = %err, "clone failed");
                        summary.failed += 1;
                    }
                }
            }

            self.state.record_item(step_started.elapsed());
            if let Some(progress) = progress {
                progress(ProgressUpdate {
                    source_name: self.name.clone(),
                    total_items: self.state.total_items(),
                    processed_items: self.state.processed_items(),
                    estimated_remaining: self.state.estimated_remaining(),
                });
            }
        }

        self.state.complete();
        info!(
            cloned = summary.cloned,
            skipped = summary.skipped,
            failed = summary.failed,
            "repository fetch completed"
        );
        Ok(summary)
    }
}

fn dir_is_populated(path: &Path) -> bool {
    match fs::read_dir(path) {
        Ok(mut entries) => entries.next().is_some(),
        Err(_) => false,
    }
}
