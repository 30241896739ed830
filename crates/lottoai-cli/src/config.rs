use anyhow::{Context, Result, anyhow};
use lottoai_core::Game;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "LOTTOAI_CONFIG";
/// Overrides the history file location.
pub const HISTORY_ENV: &str = "LOTTOAI_HISTORY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub generate: GenerateConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateConfig {
    #[serde(default)]
    pub game: Game,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Where the user config lives: `$LOTTOAI_CONFIG`, else
/// `<config_dir>/lottoai/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("lottoai/config.toml"))
}

pub fn load_user_config() -> Result<UserConfig> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(UserConfig::default()),
    }
}

pub fn load_config_from(path: &Path) -> Result<UserConfig> {
    if !path.exists() {
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<UserConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// History file: `$LOTTOAI_HISTORY`, then `[history] path`, then
/// `<data_dir>/lottoai/history.json`.
pub fn history_path(config: &UserConfig) -> Result<PathBuf> {
    resolve_history_path(
        env::var_os(HISTORY_ENV).map(PathBuf::from),
        config.history.path.clone(),
        dirs::data_dir(),
    )
}

fn resolve_history_path(
    env_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    data_dir: Option<PathBuf>,
) -> Result<PathBuf> {
    env_path
        .or(config_path)
        .or_else(|| data_dir.map(|dir| dir.join("lottoai/history.json")))
        .ok_or_else(|| anyhow!("no data directory available; set {HISTORY_ENV}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn make_temp_dir(label: &str) -> PathBuf {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!("lottoai-config-test-{label}-{id}"));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("temp dir must be created");
        dir
    }

    #[test]
    fn missing_config_uses_defaults() {
        let root = make_temp_dir("missing");
        let cfg = load_config_from(&root.join("config.toml")).expect("load should succeed");
        assert_eq!(cfg.generate.game, Game::Lotto);
        assert!(cfg.output.is_none());
        assert!(cfg.history.path.is_none());
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn config_parses_all_sections() {
        let root = make_temp_dir("full");
        let path = root.join("config.toml");
        std::fs::write(
            &path,
            r#"
output = "json"

[generate]
game = "superenalotto"

[history]
path = "/tmp/lottoai/history.json"
"#,
        )
        .expect("write config");

        let cfg = load_config_from(&path).expect("parse");
        assert_eq!(cfg.output.as_deref(), Some("json"));
        assert_eq!(cfg.generate.game, Game::SuperEnalotto);
        assert_eq!(
            cfg.history.path,
            Some(PathBuf::from("/tmp/lottoai/history.json"))
        );
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let root = make_temp_dir("bad");
        let path = root.join("config.toml");
        std::fs::write(&path, "[generate]\ngame = \"bingo\"\n").expect("write config");
        let err = load_config_from(&path).expect_err("unknown game");
        assert!(err.to_string().contains("Failed to parse"));
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn history_path_precedence() {
        let env_path = Some(PathBuf::from("/env/h.json"));
        let cfg_path = Some(PathBuf::from("/cfg/h.json"));
        let data = Some(PathBuf::from("/data"));

        assert_eq!(
            resolve_history_path(env_path, cfg_path.clone(), data.clone()).expect("path"),
            PathBuf::from("/env/h.json")
        );
        assert_eq!(
            resolve_history_path(None, cfg_path, data.clone()).expect("path"),
            PathBuf::from("/cfg/h.json")
        );
        assert_eq!(
            resolve_history_path(None, None, data).expect("path"),
            PathBuf::from("/data/lottoai/history.json")
        );
        assert!(resolve_history_path(None, None, None).is_err());
    }
}
