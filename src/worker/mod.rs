//! One notification run: fetch, compose, deliver

pub mod compose;
pub mod handler;

pub use compose::build_message;
pub use handler::{run, run_pipeline};
