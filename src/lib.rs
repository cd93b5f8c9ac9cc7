pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;
pub use config::TheoremConfig;

pub use crate::core::{
    checker::{verify_condition, CheckOutcome, ConditionChecker, Verdict},
    engine::VerificationEngine,
    report::{AnnotatedModule, ModuleReport, ModuleReporter},
    task_pool::TaskPool,
};
pub use utils::error::{CheckError, Result};
