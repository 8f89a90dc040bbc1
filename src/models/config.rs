use crate::error::ConfigError;
use census_engine::{ColorCensus, IgnoreSet, ReferencePalette, Rgb};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Default plot threshold: bars below 1% of the pixels are not drawn
pub const DEFAULT_PLOT_THRESHOLD: f64 = 0.01;

/// Census configuration for one run (shared by every image of a batch)
#[derive(Debug, Clone, PartialEq)]
pub struct CensusConfig {
    /// Reference palette, in tie-break order. Empty disables quantization.
    pub references: ReferencePalette,

    /// Colors excluded from all counts
    pub ignore: IgnoreSet,

    /// Minimum share of pixels for an entry to get a histogram bar
    pub plot_threshold: f64,
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self {
            references: ReferencePalette::empty(),
            ignore: IgnoreSet::new(),
            plot_threshold: DEFAULT_PLOT_THRESHOLD,
        }
    }
}

/// Command-line overrides applied on top of the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Replaces `plot_threshold`
    pub threshold: Option<f64>,

    /// `NAME=COLOR` pairs; when non-empty they replace the file's palette
    pub references: Vec<String>,

    /// Colors added to the file's ignore set
    pub ignore: Vec<String>,
}

/// On-disk layout of config.yaml
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default, deserialize_with = "ordered_references")]
    references: Vec<(String, ColorValue)>,

    #[serde(default)]
    ignore: Vec<ColorValue>,

    #[serde(default = "default_plot_threshold")]
    plot_threshold: f64,
}

fn default_plot_threshold() -> f64 {
    DEFAULT_PLOT_THRESHOLD
}

/// A color as written in YAML: `[R, G, B]`, `"#RRGGBB"` or `"R G B"`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ColorValue {
    Channels([u8; 3]),
    Text(String),
}

impl ColorValue {
    fn into_rgb(self) -> Result<Rgb, ConfigError> {
        match self {
            ColorValue::Channels(bytes) => Ok(Rgb::from_bytes(bytes)),
            ColorValue::Text(text) => parse_color(&text),
        }
    }
}

/// Deserialize a YAML mapping into a list, keeping the order entries were written in
fn ordered_references<'de, D>(deserializer: D) -> Result<Vec<(String, ColorValue)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ReferencesVisitor;

    impl<'de> Visitor<'de> for ReferencesVisitor {
        type Value = Vec<(String, ColorValue)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a mapping of reference labels to colors")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((label, color)) = map.next_entry::<String, ColorValue>()? {
                entries.push((label, color));
            }
            Ok(entries)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_none<E>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(ReferencesVisitor)
}

/// Parse color text, keeping the text for the error message
pub fn parse_color(text: &str) -> Result<Rgb, ConfigError> {
    Rgb::from_str(text).map_err(|source| ConfigError::Color {
        text: text.to_string(),
        source,
    })
}

/// Parse a `NAME=COLOR` command-line reference
pub fn parse_reference(arg: &str) -> Result<(String, Rgb), ConfigError> {
    let (label, color) = arg
        .rsplit_once('=')
        .ok_or_else(|| ConfigError::Reference(arg.to_string()))?;
    let label = label.trim();
    if label.is_empty() {
        return Err(ConfigError::Reference(arg.to_string()));
    }
    Ok((label.to_string(), parse_color(color)?))
}

impl CensusConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        // An empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let file: ConfigFile = serde_yaml::from_str(content)?;

        let references = file
            .references
            .into_iter()
            .map(|(label, color)| Ok((label, color.into_rgb()?)))
            .collect::<Result<Vec<_>, ConfigError>>()?;
        let ignore = file
            .ignore
            .into_iter()
            .map(ColorValue::into_rgb)
            .collect::<Result<IgnoreSet, ConfigError>>()?;

        let config = Self {
            references: ReferencePalette::new(references)?,
            ignore,
            plot_threshold: file.plot_threshold,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            references = config.references.len(),
            ignore = config.ignore.len(),
            plot_threshold = config.plot_threshold,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_optional(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(threshold) = overrides.threshold {
            self.plot_threshold = threshold;
        }

        if !overrides.references.is_empty() {
            let references = overrides
                .references
                .iter()
                .map(|s| parse_reference(s))
                .collect::<Result<Vec<_>, _>>()?;
            self.references = ReferencePalette::new(references)?;
        }

        for text in &overrides.ignore {
            self.ignore.insert(parse_color(text)?);
        }

        self.validate()?;
        Ok(self)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.plot_threshold) {
            return Err(ConfigError::InvalidThreshold(self.plot_threshold));
        }
        Ok(())
    }

    /// Build the census pipeline for this configuration
    pub fn census(&self) -> ColorCensus {
        ColorCensus::new()
            .palette(self.references.clone())
            .ignore(self.ignore.clone())
    }
}
