//! Certificate records, the API client used to look them up, and the
//! renderers turning a record into plain details, an SVG certificate or a
//! standalone HTML page.

pub mod certificate;
pub mod config;
pub mod env;
pub mod error;
pub mod logs;
pub mod output;
pub mod render;

mod ui;
pub use ui::*;

#[cfg(test)]
mod test_support;

pub use error::{ApiError, Result};

#[macro_use]
extern crate tracing;
