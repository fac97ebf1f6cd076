//! Core engine for fetching external data sources into local storage:
//! the repository fetch task, its progress state, and the collaborator
//! seams (repository listing and clone execution).

pub mod clone;
pub mod fetch;
pub mod lister;
pub mod model;
pub mod paths;
pub mod progress;
