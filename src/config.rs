//! Configuration management for sort operations

use crate::approach;
use crate::error::{SortError, SortResult};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Locale used by text comparisons
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocaleTag {
    /// No locale: compare by code point
    #[default]
    Undetermined,
    /// A BCP-47 language tag such as `en-US` or `sv-SE`
    Tag(String),
}

impl LocaleTag {
    pub fn is_undetermined(&self) -> bool {
        matches!(self, LocaleTag::Undetermined)
    }
}

impl FromStr for LocaleTag {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("und") {
            Ok(LocaleTag::Undetermined)
        } else {
            Ok(LocaleTag::Tag(trimmed.to_string()))
        }
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleTag::Undetermined => write!(f, "und"),
            LocaleTag::Tag(tag) => write!(f, "{tag}"),
        }
    }
}

/// Path conventions used by the `path` approach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathFlavor {
    #[default]
    Posix,
    Windows,
}

impl fmt::Display for PathFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PathFlavor::Posix => "posix",
            PathFlavor::Windows => "windows",
        };
        write!(f, "{name}")
    }
}

/// Parameters shared by every comparison of one sort invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortParams {
    pub locale: LocaleTag,
    pub case_insensitive: bool,
    pub reverse: bool,
    pub path_flavor: PathFlavor,
}

impl SortParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, locale: LocaleTag) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn with_path_flavor(mut self, path_flavor: PathFlavor) -> Self {
        self.path_flavor = path_flavor;
        self
    }
}

/// Where sorted output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Keep a `.bak` copy and replace the file
    #[default]
    Backup,
    /// Replace the file without a backup
    InPlace,
    /// Print to standard output
    Stdout,
    /// Only verify that the file is already sorted
    Check,
}

/// Main configuration structure for sort operations
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Name of the registered approach
    pub approach: String,
    /// Comparison parameters
    pub params: SortParams,
    /// Output only unique lines (or require uniqueness in check mode)
    pub unique: bool,
    /// Comments starting with this prefix travel with the following line
    pub comment_prefix: Option<String>,
    /// Output mode
    pub output: OutputMode,
    /// File to sort
    pub input_file: PathBuf,
    /// Debug logging
    pub debug: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            approach: "text".to_string(),
            params: SortParams::default(),
            unique: false,
            comment_prefix: None,
            output: OutputMode::default(),
            input_file: PathBuf::new(),
            debug: false,
        }
    }
}

impl SortConfig {
    /// Validate configuration for consistency
    pub fn validate(&self) -> SortResult<()> {
        let approach = approach::find(&self.approach)?;

        if !self.params.locale.is_undetermined() && !approach.supports_locale {
            return Err(SortError::unsupported_option(&format!(
                "you cannot set a locale when sorting by {}",
                approach.name
            )));
        }

        if self.params.path_flavor == PathFlavor::Windows && !approach.supports_path_flavor {
            return Err(SortError::unsupported_option(&format!(
                "you cannot use Windows paths when sorting by {}",
                approach.name
            )));
        }

        if let Some(prefix) = &self.comment_prefix {
            if prefix.trim().is_empty() {
                return Err(SortError::unsupported_option(
                    "the comment prefix cannot be empty",
                ));
            }
        }

        Ok(())
    }

    pub fn is_check(&self) -> bool {
        self.output == OutputMode::Check
    }
}

/// Builder pattern for creating configurations
pub struct SortConfigBuilder {
    config: SortConfig,
    outputs: Vec<OutputMode>,
}

impl SortConfigBuilder {
    /// Start building a new configuration
    pub fn new() -> Self {
        Self {
            config: SortConfig::default(),
            outputs: Vec::new(),
        }
    }

    pub fn approach(mut self, name: &str) -> Self {
        self.config.approach = name.to_string();
        self
    }

    pub fn locale(mut self, locale: LocaleTag) -> Self {
        self.config.params.locale = locale;
        self
    }

    pub fn case_insensitive(mut self) -> Self {
        self.config.params.case_insensitive = true;
        self
    }

    /// Enable reverse sorting
    pub fn reverse(mut self) -> Self {
        self.config.params.reverse = true;
        self
    }

    pub fn windows(mut self) -> Self {
        self.config.params.path_flavor = PathFlavor::Windows;
        self
    }

    /// Enable unique output
    pub fn unique(mut self) -> Self {
        self.config.unique = true;
        self
    }

    pub fn comment_prefix(mut self, prefix: &str) -> Self {
        self.config.comment_prefix = Some(prefix.to_string());
        self
    }

    /// Request an output mode; more than one is a conflict
    pub fn output(mut self, mode: OutputMode) -> Self {
        self.outputs.push(mode);
        self
    }

    pub fn input_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.config.input_file = file.into();
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Build the final configuration
    pub fn build(mut self) -> SortResult<SortConfig> {
        if self.outputs.len() > 1 {
            return Err(SortError::conflicting_options(
                "only one of --in-place, --stdout and --check may be given",
            ));
        }
        if let Some(mode) = self.outputs.pop() {
            self.config.output = mode;
        }
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for SortConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
