//! Settings parser for .asex/config.toml and run configuration resolution

use std::path::{Path, PathBuf};

use asex_core::prelude::*;
use asex_editor::{default_candidates, EditorLocator};

use super::types::{CliOverrides, RunConfig, Settings};

pub const ASEX_DIR: &str = ".asex";
pub const CONFIG_FILENAME: &str = "config.toml";

/// Load settings from `<project>/.asex/config.toml`.
///
/// A missing file yields defaults. An unreadable or invalid file is logged
/// and also yields defaults.
pub fn load_settings(project_dir: &Path) -> Settings {
    let config_path = project_dir.join(ASEX_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

impl RunConfig {
    /// Combine command-line overrides, settings and the environment.
    ///
    /// Editor precedence: `--aseprite`, then `ASEPRITE_PATH`, then the
    /// settings candidates, then the built-in install locations.
    /// The assets directory must exist; it is returned canonicalized.
    pub fn resolve(
        project_dir: &Path,
        overrides: &CliOverrides,
        settings: &Settings,
    ) -> Result<Self> {
        let assets_dir = overrides
            .assets_dir
            .clone()
            .unwrap_or_else(|| settings.assets.dir.clone());
        let assets_dir = resolve_assets_dir(project_dir, &assets_dir)?;

        let candidates: Vec<PathBuf> = settings
            .editor
            .candidates
            .iter()
            .map(|path| project_dir.join(path))
            .chain(default_candidates())
            .collect();

        let mut locator = EditorLocator::from_env(candidates);
        if let Some(path) = &overrides.aseprite {
            locator = locator.with_override(Some(path.clone()));
        }

        Ok(Self {
            project_dir: project_dir.to_path_buf(),
            assets_dir,
            locator,
            dry_run: overrides.dry_run,
        })
    }
}

/// Resolve `assets_dir` against the project directory and canonicalize it
pub fn resolve_assets_dir(project_dir: &Path, assets_dir: &Path) -> Result<PathBuf> {
    let joined = project_dir.join(assets_dir);
    if !joined.is_dir() {
        return Err(Error::assets_dir_not_found(joined));
    }
    dunce::canonicalize(&joined)
        .with_context(|| format!("Failed to resolve assets directory {}", joined.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use asex_editor::ASEPRITE_PATH_ENV;
    use serial_test::serial;
    use tempfile::tempdir;

    fn write_config(project: &Path, content: &str) {
        let dir = project.join(ASEX_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONFIG_FILENAME), content).unwrap();
    }

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());

        assert_eq!(settings.assets.dir, PathBuf::from("graphics"));
        assert!(settings.editor.candidates.is_empty());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        write_config(
            temp.path(),
            r#"
[assets]
dir = "art/sprites"

[editor]
candidates = ["/opt/aseprite/aseprite", "tools/aseprite"]
"#,
        );

        let settings = load_settings(temp.path());

        assert_eq!(settings.assets.dir, PathBuf::from("art/sprites"));
        assert_eq!(settings.editor.candidates.len(), 2);
    }

    #[test]
    fn test_load_settings_partial_keeps_defaults() {
        let temp = tempdir().unwrap();
        write_config(temp.path(), "[editor]\ncandidates = []\n");

        let settings = load_settings(temp.path());
        assert_eq!(settings.assets.dir, PathBuf::from("graphics"));
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        write_config(temp.path(), "this is not [valid toml");

        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_resolve_assets_dir_missing() {
        let temp = tempdir().unwrap();
        let err = resolve_assets_dir(temp.path(), Path::new("graphics")).unwrap_err();
        assert!(matches!(err, Error::AssetsDirNotFound { .. }));
    }

    #[test]
    fn test_resolve_assets_dir_canonical() {
        let temp = tempdir().unwrap();
        std::fs::create_dir_all(temp.path().join("graphics")).unwrap();

        let resolved = resolve_assets_dir(temp.path(), Path::new("graphics")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("graphics"));
    }

    #[test]
    #[serial]
    fn test_cli_aseprite_beats_environment() {
        let temp = tempdir().unwrap();
        std::fs::create_dir_all(temp.path().join("graphics")).unwrap();
        std::env::set_var(ASEPRITE_PATH_ENV, "/from/env/aseprite");

        let overrides = CliOverrides {
            aseprite: Some(PathBuf::from("/from/cli/aseprite")),
            ..Default::default()
        };
        let config = RunConfig::resolve(temp.path(), &overrides, &Settings::default());
        std::env::remove_var(ASEPRITE_PATH_ENV);

        let config = config.unwrap();
        assert_eq!(
            config.locator.override_path(),
            Some(Path::new("/from/cli/aseprite"))
        );
    }

    #[test]
    #[serial]
    fn test_environment_override_used_without_cli() {
        let temp = tempdir().unwrap();
        std::fs::create_dir_all(temp.path().join("graphics")).unwrap();
        std::env::set_var(ASEPRITE_PATH_ENV, "/from/env/aseprite");

        let config = RunConfig::resolve(temp.path(), &CliOverrides::default(), &Settings::default());
        std::env::remove_var(ASEPRITE_PATH_ENV);

        assert_eq!(
            config.unwrap().locator.override_path(),
            Some(Path::new("/from/env/aseprite"))
        );
    }

    #[test]
    #[serial]
    fn test_settings_candidates_come_first() {
        let temp = tempdir().unwrap();
        std::fs::create_dir_all(temp.path().join("sprites")).unwrap();
        std::env::remove_var(ASEPRITE_PATH_ENV);

        let mut settings = Settings::default();
        settings.assets.dir = PathBuf::from("sprites");
        settings.editor.candidates = vec![PathBuf::from("tools/aseprite")];

        let overrides = CliOverrides {
            dry_run: true,
            ..Default::default()
        };
        let config = RunConfig::resolve(temp.path(), &overrides, &settings).unwrap();

        assert_eq!(
            config.locator.candidates().first(),
            Some(&temp.path().join("tools/aseprite"))
        );
        assert!(config.locator.candidates().len() > 1);
        assert!(config.assets_dir.ends_with("sprites"));
        assert!(config.dry_run);
    }

    #[test]
    #[serial]
    fn test_cli_assets_dir_beats_settings() {
        let temp = tempdir().unwrap();
        std::fs::create_dir_all(temp.path().join("cli_art")).unwrap();
        std::fs::create_dir_all(temp.path().join("settings_art")).unwrap();
        std::env::remove_var(ASEPRITE_PATH_ENV);

        let mut settings = Settings::default();
        settings.assets.dir = PathBuf::from("settings_art");
        let overrides = CliOverrides {
            assets_dir: Some(PathBuf::from("cli_art")),
            ..Default::default()
        };

        let config = RunConfig::resolve(temp.path(), &overrides, &settings).unwrap();
        assert!(config.assets_dir.ends_with("cli_art"));
        assert_eq!(config.project_dir, temp.path());
    }
}
