//! Terminal front-end configuration, loadable from TOML.

use derive_more::{Display, Error};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Characters used to draw the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    pub black: char,
    pub white: char,
    pub empty: char,
    /// Marks an empty cell where the active player may place.
    pub hint: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs {
            black: 'X',
            white: 'O',
            empty: '.',
            hint: '*',
        }
    }
}

/// Top-level front-end configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Mark legal cells for the active player.
    pub hints: bool,
    pub glyphs: Glyphs,
}

#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display(fmt = "failed to read config file {:?}: {}", path, source)]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[display(fmt = "failed to parse TOML: {}", source)]
    TomlParse { source: toml::de::Error },

    #[display(fmt = "config validation error: {}", reason)]
    Validation { reason: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(source: toml::de::Error) -> Self {
        ConfigError::TomlParse { source }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: CliConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Every glyph must be distinct so cells stay readable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Glyphs {
            black,
            white,
            empty,
            hint,
        } = self.glyphs;
        let glyphs = [black, white, empty, hint];

        for (i, a) in glyphs.iter().enumerate() {
            if a.is_whitespace() {
                return Err(ConfigError::Validation {
                    reason: "glyphs must not be whitespace".into(),
                });
            }
            if glyphs[i + 1..].contains(a) {
                return Err(ConfigError::Validation {
                    reason: format!("glyph '{}' is used twice", a),
                });
            }
        }

        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&CliConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        CliConfig::default()
            .validate()
            .expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
hints = true

[glyphs]
black = "B"
"#;
        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert!(config.hints);
        assert_eq!(config.glyphs.black, 'B');
        assert_eq!(config.glyphs.white, 'O');
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_validation_rejects_duplicate_glyphs() {
        let mut config = CliConfig::default();
        config.glyphs.hint = config.glyphs.black;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: glyph 'X' is used twice"
        );
    }

    #[test]
    fn test_validation_rejects_whitespace_glyph() {
        let mut config = CliConfig::default();
        config.glyphs.empty = ' ';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = CliConfig::load_or_default(Path::new("nonexistent_reversi.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reversi.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
hints = true

[glyphs]
empty = "-"
"#
        )
        .unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert!(config.hints);
        assert_eq!(config.glyphs.empty, '-');
        assert_eq!(config.glyphs.black, 'X');
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reversi.toml");
        std::fs::write(&path, "hints = maybe").unwrap();

        assert!(matches!(
            CliConfig::load(&path),
            Err(ConfigError::TomlParse { .. })
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = CliConfig::default_toml();
        let config: CliConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, CliConfig::default());
    }
}
