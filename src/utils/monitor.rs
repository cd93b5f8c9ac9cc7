use std::time::{Duration, Instant};

#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use sysinfo::{Pid, RefreshKind, System};

#[derive(Debug, Clone)]
pub struct ProcessStats {
    pub cpu_usage: f32,
    pub memory_usage_mb: u64,
    pub elapsed_time: Duration,
}

/// 計時器，啟用時另外記錄行程的 CPU 與記憶體
pub struct RunMonitor {
    start_time: Instant,
    #[cfg(feature = "cli")]
    system: Option<(Mutex<System>, Pid)>,
}

impl RunMonitor {
    #[cfg(feature = "cli")]
    pub fn new(stats_enabled: bool) -> Self {
        let system = if stats_enabled {
            match sysinfo::get_current_pid() {
                Ok(pid) => {
                    let mut system = System::new_with_specifics(RefreshKind::everything());
                    system.refresh_all();
                    Some((Mutex::new(system), pid))
                }
                Err(e) => {
                    tracing::warn!("Process stats unavailable: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Self {
            start_time: Instant::now(),
            system,
        }
    }

    #[cfg(not(feature = "cli"))]
    pub fn new(_stats_enabled: bool) -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    #[cfg(feature = "cli")]
    pub fn stats(&self) -> Option<ProcessStats> {
        let (system, pid) = self.system.as_ref()?;
        let mut system = system.lock().ok()?;
        system.refresh_all();
        let process = system.process(*pid)?;

        Some(ProcessStats {
            cpu_usage: process.cpu_usage(),
            memory_usage_mb: process.memory() / 1024 / 1024,
            elapsed_time: self.elapsed(),
        })
    }

    #[cfg(not(feature = "cli"))]
    pub fn stats(&self) -> Option<ProcessStats> {
        None
    }

    #[cfg(feature = "cli")]
    pub fn is_enabled(&self) -> bool {
        self.system.is_some()
    }

    #[cfg(not(feature = "cli"))]
    pub fn is_enabled(&self) -> bool {
        false
    }

    pub fn log_stats(&self, phase: &str) {
        match self.stats() {
            Some(stats) => tracing::info!(
                "📊 {} - CPU: {:.1}%, Memory: {}MB, Time: {:?}",
                phase,
                stats.cpu_usage,
                stats.memory_usage_mb,
                stats.elapsed_time
            ),
            None => tracing::debug!("{} - Time: {:?}", phase, self.elapsed()),
        }
    }
}

impl Default for RunMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_monitor_reports_no_stats() {
        let monitor = RunMonitor::default();
        assert!(!monitor.is_enabled());
        assert!(monitor.stats().is_none());
    }

    #[test]
    fn test_elapsed_is_monotonic() {
        let monitor = RunMonitor::new(false);
        let first = monitor.elapsed();
        std::thread::sleep(Duration::from_millis(2));
        assert!(monitor.elapsed() > first);
    }
}
