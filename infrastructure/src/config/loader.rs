//! Configuration file loader with multi-source merging

use super::file_config::{ConfigValidationError, FileConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

const APP_DIR: &str = "kubecall";
const PROJECT_FILES: [&str; 2] = ["kubecall.toml", ".kubecall.toml"];
const ENV_PREFIX: &str = "KUBECALL_";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigValidationError),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `KUBECALL_KUBECTL__CONTEXT=dev` and friends
    /// 2. Explicit config path (if provided; must exist)
    /// 3. Project root: `./kubecall.toml` or `./.kubecall.toml`
    /// 4. Global: `<config dir>/kubecall/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigError> {
        Self::load_from(
            Self::global_config_path().as_deref(),
            Path::new("."),
            config_path,
        )
    }

    /// Load with explicit global path and project directory
    pub fn load_from(
        global_path: Option<&Path>,
        project_dir: &Path,
        config_path: Option<&Path>,
    ) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = global_path
            && global_path.exists()
        {
            debug!("Loading global config from {}", global_path.display());
            figment = figment.merge(Toml::file(global_path));
        }

        if let Some(project_path) = Self::project_config_in(project_dir) {
            debug!("Loading project config from {}", project_path.display());
            figment = figment.merge(Toml::file(project_path));
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            debug!("Loading config from {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: FileConfig = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_in(Path::new("."))
    }

    fn project_config_in(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used
    pub fn config_sources() -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        lines.push(format!("  [ENV  ] Environment: {}*", ENV_PREFIX));

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push("  [     ] Project: ./kubecall.toml or ./.kubecall.toml".to_string()),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", mark, path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.kubectl.binary, "kubectl");
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_names_the_app() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.to_string_lossy().contains("kubecall"));
            assert!(path.ends_with("config.toml"));
        }
    }

    #[test]
    fn test_empty_sources_give_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::load_from(None, dir.path(), None).unwrap();
        assert_eq!(config.kubectl.binary, "kubectl");
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_project_overrides_global() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        fs::write(
            &global,
            "[kubectl]\ncontext = \"global-ctx\"\nkubeconfig = \"/etc/kube/config\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join(".kubecall.toml"),
            "[kubectl]\ncontext = \"project-ctx\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load_from(Some(&global), dir.path(), None).unwrap();
        assert_eq!(config.kubectl.context.as_deref(), Some("project-ctx"));
        assert_eq!(config.kubectl.kubeconfig.as_deref(), Some("/etc/kube/config"));
    }

    #[test]
    fn test_explicit_path_has_highest_file_priority() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("kubecall.toml"),
            "[output]\nformat = \"text\"\n",
        )
        .unwrap();
        let explicit = dir.path().join("custom.toml");
        fs::write(&explicit, "[output]\nformat = \"json\"\ncolor = false\n").unwrap();

        let config = ConfigLoader::load_from(None, dir.path(), Some(&explicit)).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.color);
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = ConfigLoader::load_from(None, dir.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_empty_binary_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("kubecall.toml"), "[kubectl]\nbinary = \"\"\n").unwrap();

        let err = ConfigLoader::load_from(None, dir.path(), None).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(ConfigValidationError::EmptyBinary)
        ));
    }

    #[test]
    fn test_malformed_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("kubecall.toml"), "[output]\nformat = \"yaml\"\n").unwrap();

        let err = ConfigLoader::load_from(None, dir.path(), None).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }
}
