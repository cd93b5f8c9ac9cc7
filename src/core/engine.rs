use crate::domain::ports::Verification;
use crate::utils::error::Result;
use crate::utils::monitor::RunMonitor;

pub struct VerificationEngine<V: Verification> {
    verification: V,
    monitor: RunMonitor,
}

impl<V: Verification> VerificationEngine<V> {
    pub fn new(verification: V) -> Self {
        Self::new_with_monitoring(verification, false)
    }

    pub fn new_with_monitoring(verification: V, monitor_enabled: bool) -> Self {
        Self {
            verification,
            monitor: RunMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<V::Outcome> {
        let name = self.verification.name();
        tracing::info!("🚀 Starting {}", name);
        self.monitor.log_stats("Verification started");

        let outcome = match self.verification.verify().await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("❌ {} failed: {}", name, e);
                return Err(e);
            }
        };

        self.monitor.log_stats("Verification completed");
        tracing::info!("✅ {} finished in {:?}", name, self.monitor.elapsed());
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CheckError;

    struct FixedVerification {
        fail: bool,
    }

    #[async_trait::async_trait]
    impl Verification for FixedVerification {
        type Outcome = u32;

        fn name(&self) -> &str {
            "fixed"
        }

        async fn verify(&self) -> Result<u32> {
            if self.fail {
                Err(CheckError::IncompleteResults {
                    expected: 1,
                    received: 0,
                })
            } else {
                Ok(42)
            }
        }
    }

    #[tokio::test]
    async fn test_engine_returns_outcome() {
        let engine = VerificationEngine::new(FixedVerification { fail: false });
        assert_eq!(engine.run().await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_engine_propagates_error() {
        let engine = VerificationEngine::new_with_monitoring(FixedVerification { fail: true }, false);
        assert!(matches!(
            engine.run().await,
            Err(CheckError::IncompleteResults { .. })
        ));
    }
}
