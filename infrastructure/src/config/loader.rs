//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_CONFIG_FILES: [&str; 2] = ["math-tutor.toml", ".math-tutor.toml"];

/// Prefix for environment overrides, e.g. `MATH_TUTOR_OLLAMA__MODEL=phi3`.
pub const ENV_PREFIX: &str = "MATH_TUTOR_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `MATH_TUTOR_<SECTION>__<KEY>`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./math-tutor.toml` or `./.math-tutor.toml`
    /// 4. Global config: `$XDG_CONFIG_HOME/math-tutor/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns `XDG_CONFIG_HOME/math-tutor/config.toml` if set,
    /// otherwise the platform config directory equivalent.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("math-tutor").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used (for `show-config`)
    pub fn describe_sources(explicit: Option<&Path>) -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        lines.push(format!("  [ENV  ] {}<SECTION>__<KEY>", ENV_PREFIX));

        match explicit {
            Some(path) if path.exists() => lines.push(format!("  [FOUND] Explicit: {}", path.display())),
            Some(path) => lines.push(format!("  [MISS ] Explicit: {}", path.display())),
            None => {}
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push("  [     ] Project: ./math-tutor.toml or ./.math-tutor.toml".to_string()),
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
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.ollama.model, "mistral:latest");
        assert_eq!(config.ollama.timeout_secs, 30);
    }

    #[test]
    fn test_global_config_path_names_the_app() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.to_string_lossy().contains("math-tutor"));
        }
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "math-tutor.toml",
                r#"
[ollama]
model = "llama3"
"#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.ollama.model, "llama3");
            assert_eq!(config.server.bind, "127.0.0.1:5000");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file("math-tutor.toml", "[ollama]\ntimeout_secs = 5\n")?;
            jail.create_file("custom.toml", "[ollama]\ntimeout_secs = 12\n")?;

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).map_err(|e| *e)?;
            assert_eq!(config.ollama.timeout_secs, 12);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file("math-tutor.toml", "[server]\nbind = \"127.0.0.1:6000\"\n")?;
            jail.set_env("MATH_TUTOR_SERVER__BIND", "0.0.0.0:7000");
            jail.set_env("MATH_TUTOR_OLLAMA__TIMEOUT_SECS", "9");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.server.bind, "0.0.0.0:7000");
            assert_eq!(config.ollama.timeout_secs, 9);
            Ok(())
        });
    }

    #[test]
    fn test_describe_sources_mentions_env_prefix() {
        let lines = ConfigLoader::describe_sources(None);
        assert!(lines.iter().any(|l| l.contains(ENV_PREFIX)));
    }
}
