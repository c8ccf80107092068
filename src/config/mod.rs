use crate::models::Settings;
use crate::services::{BundledCatalog, Catalog, FileCatalog, IngestReport, RecipeSource};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use ::config::{Config, Environment, File, FileFormat};
use std::fs;

/// Prefix for environment overrides, e.g. `QZENE_CATALOG_PATH`.
pub const ENV_PREFIX: &str = "QZENE";

/// Name of the settings file inside the configuration directory.
pub const SETTINGS_FILE: &str = "Qzene Settings.yaml";

/// Configuration manager for settings and the recipe catalog.
///
/// Settings are layered: serde defaults, then `Qzene Settings.yaml`, then
/// `QZENE_*` environment variables.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    settings_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager with the specified configuration directory.
    ///
    /// # Arguments
    /// * `config_dir` - Directory holding `Qzene Settings.yaml` (e.g., "Qzene Data")
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {}", config_dir))?;
        }

        Ok(Self {
            settings_path: config_dir.join(SETTINGS_FILE),
            config_dir,
        })
    }

    /// Load settings from the settings file and the process environment.
    ///
    /// A missing settings file is not an error; defaults fill the gaps.
    pub fn load_settings(&self) -> Result<Settings> {
        self.load_settings_with(Environment::with_prefix(ENV_PREFIX))
    }

    fn load_settings_with(&self, environment: Environment) -> Result<Settings> {
        let layered = Config::builder()
            .add_source(File::new(self.settings_path.as_str(), FileFormat::Yaml).required(false))
            .add_source(environment.try_parsing(true))
            .build()
            .with_context(|| format!("Failed to read settings: {}", self.settings_path))?;

        let settings: Settings = layered
            .try_deserialize()
            .with_context(|| format!("Failed to parse settings: {}", self.settings_path))?;

        Ok(settings)
    }

    /// Log where the settings came from.
    ///
    /// Settings are read before the logger exists, so the binary calls this
    /// once logging is up.
    pub fn log_settings_source(&self) {
        if self.settings_path.exists() {
            tracing::info!("Loaded settings from {}", self.settings_path);
        } else {
            tracing::warn!(
                "Settings file not found at {}, using defaults",
                self.settings_path
            );
        }
    }

    /// Save the settings file.
    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(settings).context("Failed to serialize settings to YAML")?;

        fs::write(&self.settings_path, yaml_string)
            .with_context(|| format!("Failed to write settings: {}", self.settings_path))?;

        tracing::info!("Saved settings to {}", self.settings_path);
        Ok(())
    }

    /// Resolve and load the recipe catalog.
    ///
    /// `override_path` (from the command line) wins over `settings.catalog_path`;
    /// with neither set, the bundled catalog is used. Relative catalog paths
    /// from the settings file resolve against the configuration directory.
    pub fn load_catalog(
        &self,
        settings: &Settings,
        override_path: Option<&Utf8Path>,
    ) -> Result<IngestReport> {
        let configured = settings.catalog_path.as_deref();
        let source: Box<dyn RecipeSource> = match (override_path, configured) {
            (Some(path), _) => Box::new(FileCatalog::new(path)),
            (None, Some(path)) => Box::new(FileCatalog::new(self.resolve(path))),
            (None, None) => Box::new(BundledCatalog),
        };

        Catalog::load_from(source.as_ref())
            .with_context(|| format!("Failed to load recipe catalog from {}", source.describe()))
    }

    fn resolve(&self, path: &str) -> Utf8PathBuf {
        let path = Utf8Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.config_dir.join(path)
        }
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    pub fn settings_path(&self) -> &Utf8Path {
        &self.settings_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    /// In-memory log writer for asserting on emitted lines.
    #[derive(Clone, Default)]
    struct LogSink(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_logs(f: impl FnOnce()) -> String {
        let sink = LogSink::default();
        let writer = sink.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = sink.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn create_test_config_manager() -> (ConfigManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        let manager = ConfigManager::new(&config_path).unwrap();
        (manager, temp_dir)
    }

    fn env(pairs: &[(&str, &str)]) -> Environment {
        let vars = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<::config::Map<String, String>>();
        Environment::with_prefix(ENV_PREFIX).source(Some(vars))
    }

    #[test]
    fn test_create_config_manager() {
        let (manager, _temp_dir) = create_test_config_manager();
        assert!(manager.settings_path().ends_with(SETTINGS_FILE));
    }

    #[test]
    fn test_defaults_without_file() {
        let (manager, _temp_dir) = create_test_config_manager();
        let settings = manager.load_settings_with(env(&[])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_missing_settings_file_is_logged_once_logging_is_up() {
        let (manager, _temp_dir) = create_test_config_manager();

        // Loading happens before any subscriber exists and stays silent
        let during_load = capture_logs(|| {
            manager.load_settings_with(env(&[])).unwrap();
        });
        assert!(during_load.is_empty());

        let logs = capture_logs(|| manager.log_settings_source());
        assert!(logs.contains("WARN"));
        assert!(logs.contains("Settings file not found"));
        assert!(logs.contains(SETTINGS_FILE));
    }

    #[test]
    fn test_existing_settings_file_is_logged() {
        let (manager, _temp_dir) = create_test_config_manager();
        manager.save_settings(&Settings::default()).unwrap();

        let logs = capture_logs(|| manager.log_settings_source());
        assert!(logs.contains("INFO"));
        assert!(logs.contains("Loaded settings from"));
        assert!(!logs.contains("not found"));
    }

    #[test]
    fn test_load_save_settings() {
        let (manager, _temp_dir) = create_test_config_manager();

        let settings = Settings {
            catalog_path: Some("recipes.yaml".to_string()),
            debug_mode: true,
            ..Settings::default()
        };
        manager.save_settings(&settings).unwrap();

        let loaded = manager.load_settings_with(env(&[])).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_environment_overrides_file() {
        let (manager, _temp_dir) = create_test_config_manager();
        manager
            .save_settings(&Settings {
                log_prefix: "from-file".to_string(),
                ..Settings::default()
            })
            .unwrap();

        let loaded = manager
            .load_settings_with(env(&[
                ("QZENE_LOG_PREFIX", "from-env"),
                ("QZENE_DEBUG_MODE", "true"),
            ]))
            .unwrap();

        assert_eq!(loaded.log_prefix, "from-env");
        assert!(loaded.debug_mode);
    }

    #[test]
    fn test_load_bundled_catalog_by_default() {
        let (manager, _temp_dir) = create_test_config_manager();
        let report = manager.load_catalog(&Settings::default(), None).unwrap();
        assert!(!report.catalog.is_empty());
    }

    #[test]
    fn test_relative_catalog_path_resolves_against_config_dir() {
        let (manager, _temp_dir) = create_test_config_manager();
        fs::write(
            manager.config_dir().join("mine.yaml"),
            "- {id: a, name: Flatbread, cookingTime: 15}\n",
        )
        .unwrap();

        let settings = Settings {
            catalog_path: Some("mine.yaml".to_string()),
            ..Settings::default()
        };
        let report = manager.load_catalog(&settings, None).unwrap();
        assert_eq!(report.catalog.len(), 1);
        assert_eq!(report.catalog.recipes()[0].name, "Flatbread");
    }
}
