// std imports
use std::{include_str, path::Path};

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::style::{Color, Mode, Style};

// relative imports
pub use error::Error;

// private modules
mod error;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

pub const CONFIG_ENV_VAR: &str = "LEXSTREAM_CONFIG";
pub const DEFAULT_MAX_DEPTH: usize = 256;
pub const DEFAULT_CARET: &str = "^";

// ---

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    #[serde(default)]
    pub limits: Limits,
    #[serde(default)]
    pub excerpt: Excerpt,
    #[serde(default)]
    pub styles: Styles,
}

impl Settings {
    /// Loads settings from the embedded defaults overlaid with the given files.
    ///
    /// Files that do not exist are silently skipped.
    pub fn load<I>(files: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));
        for file in files {
            let file = file.as_ref();
            log::debug!("adding settings source {}", file.display());
            builder = builder.add_source(File::from(file).required(false));
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Loads settings from the embedded defaults overlaid with the file named
    /// by the `LEXSTREAM_CONFIG` environment variable, if it is set.
    pub fn load_from_env() -> Result<Self, Error> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(filename) if !filename.is_empty() => Self::load([Path::new(&filename)]),
            _ => Self::load(std::iter::empty::<&Path>()),
        }
    }
}

// ---

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Limits {
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

// ---

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Excerpt {
    #[serde(default)]
    pub lines_before: Option<usize>,
    #[serde(default)]
    pub lines_after: Option<usize>,
    #[serde(default = "default_caret")]
    pub caret: String,
}

impl Default for Excerpt {
    fn default() -> Self {
        Self {
            lines_before: None,
            lines_after: None,
            caret: default_caret(),
        }
    }
}

// ---

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Styles {
    #[serde(default)]
    pub path: Style,
    #[serde(default)]
    pub row: Style,
    #[serde(default)]
    pub column: Style,
    #[serde(default)]
    pub label: Style,
    #[serde(default)]
    pub separator: Style,
    #[serde(default)]
    pub message: Style,
}

impl Styles {
    pub fn plain() -> Self {
        Self {
            path: Style::new(),
            row: Style::new(),
            column: Style::new(),
            label: Style::new(),
            separator: Style::new(),
            message: Style::new(),
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            path: Style::new().modes(vec![Mode::Bold]),
            row: Style::new().foreground(Color::Yellow),
            column: Style::new().foreground(Color::Yellow),
            label: Style::new().modes(vec![Mode::Bold]).foreground(Color::BrightRed),
            separator: Style::new().modes(vec![Mode::Faint]),
            message: Style::new().modes(vec![Mode::Bold]),
        }
    }
}

// ---

fn default_caret() -> String {
    DEFAULT_CARET.into()
}
