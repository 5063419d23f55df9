use crate::utils::error::{Result, SayError};
use crate::utils::validation::{validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub say: SayTable,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SayTable {
    #[serde(default)]
    pub messages: Vec<String>,
    pub repeat: Option<usize>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SayError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，解析後再替換訊息中的環境變數
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(|e| SayError::TomlParseError {
            message: e.to_string(),
        })?;

        let re = Self::env_var_pattern()?;
        for message in &mut config.say.messages {
            *message = Self::substitute_env_vars(&re, message);
        }

        Ok(config)
    }

    fn env_var_pattern() -> Result<regex::Regex> {
        regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| SayError::TomlParseError {
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${USER})，找不到的變數保持原樣
    fn substitute_env_vars(re: &regex::Regex, value: &str) -> String {
        re.replace_all(value, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn messages(&self) -> &[String] {
        &self.say.messages
    }

    pub fn repeat(&self) -> usize {
        self.say.repeat.unwrap_or(1)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("say.repeat", self.repeat(), 1)
    }
}
