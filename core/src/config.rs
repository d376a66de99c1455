use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Engine settings, read from an optional TOML file. Every section may be omitted.
///
/// ```toml
/// [selection]
/// rank = 20
/// ratio = 0.9
///
/// [snippet]
/// max_words = 50
///
/// [[categories]]
/// keyword = "lidstrom"
/// category = "NikLidstrom"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub selection: SelectionConfig,
    pub snippet: SnippetConfig,
    /// Checked in order; the first keyword found among the query terms wins.
    pub categories: Vec<CategoryRule>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            selection: SelectionConfig::default(),
            snippet: SnippetConfig::default(),
            categories: default_categories(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// 1-based rank whose score anchors the threshold.
    pub rank: usize,
    pub ratio: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self { rank: 20, ratio: 0.90 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetConfig {
    pub max_words: usize,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self { max_words: 50 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub keyword: String,
    pub category: String,
}

impl CategoryRule {
    pub fn new(keyword: &str, category: &str) -> Self {
        Self { keyword: keyword.to_string(), category: category.to_string() }
    }
}

pub fn default_categories() -> Vec<CategoryRule> {
    [
        ("lidstrom", "NikLidstrom"),
        ("sec", "GeorgiaTech"),
        ("heisman", "Heisman"),
        ("quebec", "QuebecNordiques"),
        ("scout", "KCScouts"),
        ("nhl", "NHL"),
        ("nfl", "NFL"),
        ("fbs", "FBS"),
        ("stanford", "Stanford"),
        ("iron", "IronBowl"),
    ]
    .into_iter()
    .map(|(k, c)| CategoryRule::new(k, c))
    .collect()
}

impl EngineConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.selection.ratio.is_finite() || self.selection.ratio < 0.0 {
            return Err(Error::Config(format!(
                "selection.ratio must be a non-negative number, got {}",
                self.selection.ratio
            )));
        }
        if self.snippet.max_words == 0 {
            return Err(Error::Config("snippet.max_words must be at least 1".into()));
        }
        if let Some(rule) = self.categories.iter().find(|r| r.keyword.trim().is_empty()) {
            return Err(Error::Config(format!("category {} has an empty keyword", rule.category)));
        }
        Ok(())
    }
}
