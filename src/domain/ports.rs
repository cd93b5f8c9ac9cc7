use crate::domain::model::{Condition, Ideal, Module, Ring};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Source of the ring, module and condition data a verification runs against.
pub trait ConfigProvider: Send + Sync {
    fn ring(&self) -> &Ring;
    fn module(&self) -> &Module;
    fn conditions(&self) -> &[Condition];
    fn work_delay(&self) -> Duration;
    fn report_module_name(&self) -> &str;
    fn associated_primes(&self) -> &[Ideal];
}

#[async_trait]
pub trait Verification: Send + Sync {
    type Outcome: Send;

    fn name(&self) -> &str;

    async fn verify(&self) -> Result<Self::Outcome>;
}
