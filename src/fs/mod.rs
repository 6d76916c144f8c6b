//! Filesystem helpers shared by the dispatcher.

mod paths;

pub use paths::{expand_user, resolve_existing, resolve_repo_dir};
