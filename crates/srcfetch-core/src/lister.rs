use crate::model::{FetchParams, RemoteRepo};

/// Listing collaborator: supplies the repositories to fetch for a given
/// region and credential pair. Ordering is not guaranteed and the result
/// may be empty.
pub trait RepoLister {
    fn list_repos(&self, params: &FetchParams) -> anyhow::Result<Vec<RemoteRepo>>;
}
