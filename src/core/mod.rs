pub mod checker;
pub mod engine;
pub mod report;
pub mod task_pool;

pub use crate::domain::model::{Condition, Ideal, Module, Ring};
pub use crate::domain::ports::{ConfigProvider, Verification};
pub use crate::utils::error::Result;
