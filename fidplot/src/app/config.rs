use app_core::string_error::ErrorStringExt;
use coord_reader::ReaderSettings;
use std::path::PathBuf;

use crate::lines::LineFormat;

pub const CONFIG_FILE: &str = ".fidplot";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_path: PathBuf,
    pub skip_header: usize,
    pub delimiter: char,
    pub plot_title: String,
    pub x_label: String,
    pub y_label: String,
    pub data_set_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("."),
            skip_header: 1,
            delimiter: ',',
            plot_title: String::new(),
            x_label: "x-label".to_string(),
            y_label: "y-label".to_string(),
            data_set_format: crate::graph::DEFAULT_DATA_SET_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Load `~/.fidplot`. Keys missing from the file keep their defaults.
    pub fn from_config_file() -> Result<Self, String> {
        #[allow(deprecated)]
        let Some(home) = std::env::home_dir() else {
            return Err("could not determine home directory to load config file".into());
        };
        let config_raw = std::fs::read_to_string(home.join(CONFIG_FILE))
            .err_to_string("could not load config file")?;
        Ok(Self::parse(&config_raw))
    }

    pub fn parse(config_raw: &str) -> Self {
        let mut config = Self::default();
        for line in config_raw.lines().map(str::trim) {
            // Lines starting with "#" are considered comments.
            if line.starts_with('#') || line.is_empty() {
                continue;
            }
            let Some((key, val)) = line.split_once('=') else {
                log::warn!("ignoring config line without '=': {line}");
                continue;
            };
            let val = val.trim();
            match key.trim() {
                "data_path" => config.data_path = PathBuf::from(val),
                "skip_header" => {
                    if let Ok(skip) = val.parse::<usize>() {
                        config.skip_header = skip;
                    } else {
                        log::warn!("could not parse 'skip_header' as number")
                    }
                }
                "delimiter" => match parse_delimiter(val) {
                    Some(delimiter) => config.delimiter = delimiter,
                    None => log::warn!("'delimiter' has to be a single character, 'tab' or 'space'"),
                },
                "plot_title" => config.plot_title = val.to_string(),
                "x_label" => config.x_label = val.to_string(),
                "y_label" => config.y_label = val.to_string(),
                "data_set_format" => {
                    if LineFormat::parse(val).is_ok() {
                        config.data_set_format = val.to_string();
                    } else {
                        log::warn!("could not parse 'data_set_format' as line format")
                    }
                }
                _ => continue,
            }
        }
        config
    }

    pub fn reader_settings(&self) -> ReaderSettings {
        ReaderSettings {
            delimiter: self.delimiter,
            skip_header: self.skip_header,
        }
    }
}

fn parse_delimiter(val: &str) -> Option<char> {
    match val {
        "tab" => Some('\t'),
        "space" => Some(' '),
        _ => {
            let mut chars = val.chars();
            match (chars.next(), chars.next()) {
                (Some(chr), None) => Some(chr),
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_file() {
        // Depends on the machine, only make sure it does not panic.
        #[allow(unused)]
        let res = Config::from_config_file();
        dbg!(res);
    }

    #[test]
    fn test_parse() {
        let raw = "# fidplot settings\n\
                   data_path=/srv/nmr\n\
                   skip_header = 3\n\
                   delimiter=tab\n\
                   plot_title=FID of sample=3\n\
                   x_label=time (s)\n\
                   data_set_format=k--\n\
                   unknown_key=1\n";
        let config = Config::parse(raw);
        assert_eq!(config.data_path, PathBuf::from("/srv/nmr"));
        assert_eq!(config.skip_header, 3);
        assert_eq!(config.delimiter, '\t');
        assert_eq!(config.plot_title, "FID of sample=3");
        assert_eq!(config.x_label, "time (s)");
        assert_eq!(config.y_label, "y-label");
        assert_eq!(config.data_set_format, "k--");
    }

    #[test]
    fn test_parse_invalid_values_keep_defaults() {
        let config = Config::parse("skip_header=many\ndelimiter=;;\ndata_set_format=qq\nnoequals");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_reader_settings() {
        let config = Config::parse("delimiter=;\nskip_header=0");
        assert_eq!(
            config.reader_settings(),
            ReaderSettings {
                delimiter: ';',
                skip_header: 0
            }
        );
    }
}
