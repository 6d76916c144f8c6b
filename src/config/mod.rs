//! Status page server configuration.
//!
//! The server is configured from the environment, with optional command-line
//! overrides for the version file and bind host:
//!
//! | Variable           | Required | Default   |
//! |--------------------|----------|-----------|
//! | `PORT`             | yes      |           |
//! | `DEPLOY_DATE`      | no       | `unknown` |
//! | `EAT_VERSION_FILE` | no       | `VERSION` |
//! | `EAT_HOST`         | no       | `0.0.0.0` |

mod model;


pub use model::{
    DEFAULT_HOST, DEFAULT_VERSION_FILE, ServerConfig, UNKNOWN_DEPLOY_DATE,
};
