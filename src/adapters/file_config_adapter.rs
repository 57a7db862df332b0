//! INI file configuration adapter.

use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut config = Ini::new();
        config.load(path).map_err(std::io::Error::other)?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new();
        config.read(content.to_string())?;
        Ok(Self { config })
    }

    fn parse_bool(value: &str) -> Option<bool> {
        match value.to_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        }
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.config
            .getint(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.config
            .getfloat(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.config
            .get(section, key)
            .as_ref()
            .and_then(|v| Self::parse_bool(v))
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE_INI: &str = r#"
[catalog]
path = data/catalog.json

[web]
listen = 127.0.0.1:3000
open_browser = no
max_series_points = 15
"#;

    #[test]
    fn from_string_parses_sections() {
        let adapter = FileConfigAdapter::from_string(SAMPLE_INI).unwrap();
        assert_eq!(
            adapter.get_string("catalog", "path"),
            Some("data/catalog.json".to_string())
        );
        assert_eq!(
            adapter.get_string("web", "listen"),
            Some("127.0.0.1:3000".to_string())
        );
    }

    #[test]
    fn missing_key_returns_none() {
        let adapter = FileConfigAdapter::from_string(SAMPLE_INI).unwrap();
        assert_eq!(adapter.get_string("catalog", "missing"), None);
        assert_eq!(adapter.get_string("missing_section", "path"), None);
    }

    #[test]
    fn get_int_value_and_default() {
        let adapter = FileConfigAdapter::from_string(SAMPLE_INI).unwrap();
        assert_eq!(adapter.get_int("web", "max_series_points", 0), 15);
        assert_eq!(adapter.get_int("web", "missing", 42), 42);
    }

    #[test]
    fn get_double_default_for_non_numeric() {
        let adapter = FileConfigAdapter::from_string("[web]\nlisten = localhost\n").unwrap();
        assert_eq!(adapter.get_double("web", "listen", 9.5), 9.5);
    }

    #[test]
    fn get_bool_recognizes_spellings() {
        let adapter =
            FileConfigAdapter::from_string("[web]\na = true\nb = no\nc = 1\n").unwrap();
        assert!(adapter.get_bool("web", "a", false));
        assert!(!adapter.get_bool("web", "b", true));
        assert!(adapter.get_bool("web", "c", false));
        assert!(adapter.get_bool("web", "missing", true));
    }

    #[test]
    fn from_file_reads_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE_INI).unwrap();
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(
            adapter.get_string("catalog", "path"),
            Some("data/catalog.json".to_string())
        );
    }

    #[test]
    fn from_file_errors_for_missing_file() {
        assert!(FileConfigAdapter::from_file("/nonexistent/hindsight.ini").is_err());
    }
}
