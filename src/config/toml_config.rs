use crate::domain::model::{Condition, Ideal, Module, Ring};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_range, validate_unique, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

const MAX_WORK_DELAY_MS: u64 = 60_000;

/// 驗證所需的全部資料，各區段缺省時使用內建範例
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TheoremConfig {
    pub ring: Ring,
    pub module: Module,
    #[serde(default = "default_conditions")]
    pub conditions: Vec<Condition>,
    pub execution: ExecutionConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    pub work_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub module_name: String,
    pub associated_primes: Vec<Ideal>,
}

impl Default for Ring {
    fn default() -> Self {
        Self {
            name: "A".to_string(),
            noetherian: true,
            maximals: vec!["m1".to_string(), "m2".to_string()],
            primes: vec!["p1".to_string(), "m1".to_string(), "m2".to_string()],
        }
    }
}

impl Default for Module {
    fn default() -> Self {
        Self {
            name: "P".to_string(),
            rank: 3,
            projective: true,
        }
    }
}

impl Default for TheoremConfig {
    fn default() -> Self {
        Self {
            ring: Ring::default(),
            module: Module::default(),
            conditions: default_conditions(),
            execution: ExecutionConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self { work_delay_ms: 100 }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            module_name: "M".to_string(),
            associated_primes: vec![Ideal::new(&["x", "y"]), Ideal::new(&["y", "z"])],
        }
    }
}

/// The three equivalent conditions for a finitely generated module over a Noetherian ring.
pub fn default_conditions() -> Vec<Condition> {
    vec![
        Condition::new(1, "P is projective"),
        Condition::new(2, "Pp free over Ap for all primes p"),
        Condition::new(3, "Pm free over Am for all maximals m"),
    ]
}

impl TheoremConfig {
    /// 內建範例資料
    pub fn fixture() -> Self {
        Self::default()
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CheckError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置；未列出 conditions 時使用預設三條
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CheckError::ConfigParseError {
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${RING_NAME})，未定義的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("static pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

impl ConfigProvider for TheoremConfig {
    fn ring(&self) -> &Ring {
        &self.ring
    }

    fn module(&self) -> &Module {
        &self.module
    }

    fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    fn work_delay(&self) -> Duration {
        Duration::from_millis(self.execution.work_delay_ms)
    }

    fn report_module_name(&self) -> &str {
        &self.report.module_name
    }

    fn associated_primes(&self) -> &[Ideal] {
        &self.report.associated_primes
    }
}

impl Validate for TheoremConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("ring.name", &self.ring.name)?;
        validate_non_empty_string("module.name", &self.module.name)?;

        validate_non_empty_list("conditions", &self.conditions)?;
        let ids: Vec<u32> = self.conditions.iter().map(|c| c.id).collect();
        validate_unique("conditions.id", &ids)?;

        validate_range(
            "execution.work_delay_ms",
            self.execution.work_delay_ms,
            0,
            MAX_WORK_DELAY_MS,
        )?;

        validate_non_empty_string("report.module_name", &self.report.module_name)?;
        for prime in &self.report.associated_primes {
            for generator in &prime.generators {
                validate_non_empty_string("report.associated_primes", generator)?;
            }
        }

        Ok(())
    }
}
