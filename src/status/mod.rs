//! Deploy status page.
//!
//! A single `GET /` route returning an HTML page with the running version
//! (read from a version file at startup) and the deploy date (from the
//! environment). Everything is computed before the listener starts; request
//! handling touches no mutable state.

mod page;
mod server;

pub use page::{StatusInfo, read_version, render_page};
pub use server::{router, serve};
