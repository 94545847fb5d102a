use std::path::Path;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::factory::Variant;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileConfig {
    #[serde(default)]
    pub variant: Variant,
    #[serde(default="default_log_level")]
    pub log_level: String
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<FileConfig, String> {
        let content = std::fs::read_to_string(path).map_err(|err| format!("{}", err))?;
        toml::from_str(&content).map_err(|err| format!("Invalid config file {}: {}", path.display(), err))
    }

    /// Only an explicitly given file is read; without one the defaults apply.
    pub fn load(path: Option<&Path>) -> Result<FileConfig, String> {
        match path {
            Some(path) => FileConfig::from_file(path),
            None => Ok(FileConfig::default())
        }
    }

    pub fn level_filter(&self) -> Result<LevelFilter, String> {
        self.log_level.parse::<LevelFilter>().map_err(|_| format!("Invalid log level '{}'", self.log_level))
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        FileConfig {
            variant: Variant::default(),
            log_level: default_log_level()
        }
    }
}

fn default_log_level() -> String {
    "warn".to_owned()
}

#[test]
fn test_load_missing() {
    let folder = tempfile::tempdir().unwrap();
    assert!(FileConfig::load(Some(&folder.path().join("config.toml"))).is_err());
}

#[test]
fn test_load_none() {
    assert_eq!(FileConfig::default(), FileConfig::load(None).unwrap());
}

#[test]
fn test_load_file1() {
    let folder = tempfile::tempdir().unwrap();
    let path = folder.path().join("config.toml");
    std::fs::write(&path, "variant = \"hello-world\"\nlog_level = \"debug\"\n").unwrap();

    let config = FileConfig::load(Some(&path)).unwrap();
    assert_eq!(Variant::HelloWorld, config.variant);
    assert_eq!(LevelFilter::Debug, config.level_filter().unwrap());
}

#[test]
fn test_load_file_defaults() {
    let folder = tempfile::tempdir().unwrap();
    let path = folder.path().join("config.toml");
    std::fs::write(&path, "").unwrap();

    let config = FileConfig::load(Some(&path)).unwrap();
    assert_eq!(FileConfig::default(), config);
    assert_eq!(LevelFilter::Warn, config.level_filter().unwrap());
}

#[test]
fn test_load_unknown_variant() {
    let folder = tempfile::tempdir().unwrap();
    let path = folder.path().join("config.toml");
    std::fs::write(&path, "variant = \"goodbye\"\n").unwrap();

    let err = FileConfig::load(Some(&path)).unwrap_err();
    assert!(err.contains("Unknown variant 'goodbye'"), "{}", err);
}

#[test]
fn test_invalid_log_level() {
    let config = FileConfig {
        variant: Variant::HelloWorld,
        log_level: "loud".to_owned()
    };

    assert_eq!(Err("Invalid log level 'loud'".to_owned()), config.level_filter());
}
