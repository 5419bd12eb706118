// Configuration type definitions

use std::str::FromStr;

use serde::Deserialize;

use crate::error::ColorizerError;

/// How bracket colors cycle through nesting levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// One shared color cycle indexed by the combined nesting depth
    #[default]
    Consecutive,
    /// Each bracket pair has its own cycle, indexed by its own nesting count
    Independent,
}

impl FromStr for ColorMode {
    type Err = ColorizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "consecutive" => Ok(ColorMode::Consecutive),
            "independent" => Ok(ColorMode::Independent),
            _ => Err(ColorizerError::UnknownColorMode(s.to_string())),
        }
    }
}

/// Shared pair/color definition used in consecutive mode
#[derive(Debug, Clone, Deserialize)]
pub struct ConsecutivePairsConfig {
    #[serde(default = "default_pairs")]
    pub pairs: Vec<String>,
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,
    #[serde(default = "default_orphan_color")]
    pub orphan_color: String,
}

impl Default for ConsecutivePairsConfig {
    fn default() -> Self {
        ConsecutivePairsConfig {
            pairs: default_pairs(),
            colors: default_colors(),
            orphan_color: default_orphan_color(),
        }
    }
}

/// One pair definition used in independent mode
#[derive(Debug, Clone, Deserialize)]
pub struct IndependentPairConfig {
    pub pair: String,
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,
    #[serde(default = "default_orphan_color")]
    pub orphan_color: String,
}

/// Colorizer configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ColorizerConfig {
    /// Debounce delay in milliseconds before recomputing after an edit
    #[serde(default = "default_time_out")]
    pub time_out: u64,
    #[serde(default)]
    pub force_unique_opening_color: bool,
    #[serde(default)]
    pub force_iteration_color_cycle: bool,
    #[serde(default)]
    pub color_mode: ColorMode,
    #[serde(default)]
    pub consecutive: ConsecutivePairsConfig,
    #[serde(default = "default_independent")]
    pub independent: Vec<IndependentPairConfig>,
}

impl Default for ColorizerConfig {
    fn default() -> Self {
        ColorizerConfig {
            time_out: default_time_out(),
            force_unique_opening_color: false,
            force_iteration_color_cycle: false,
            color_mode: ColorMode::Consecutive,
            consecutive: ConsecutivePairsConfig::default(),
            independent: default_independent(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub colorizer: ColorizerConfig,
}

pub const DEFAULT_PAIRS: [&str; 3] = ["()", "[]", "{}"];
pub const DEFAULT_COLORS: [&str; 3] = ["Gold", "Orchid", "LightSkyBlue"];
pub const DEFAULT_ORPHAN_COLOR: &str = "Red";
pub const DEFAULT_TIME_OUT_MS: u64 = 200;

fn default_pairs() -> Vec<String> {
    DEFAULT_PAIRS.iter().map(|p| p.to_string()).collect()
}

pub(crate) fn default_colors() -> Vec<String> {
    DEFAULT_COLORS.iter().map(|c| c.to_string()).collect()
}

pub(crate) fn default_orphan_color() -> String {
    DEFAULT_ORPHAN_COLOR.to_string()
}

fn default_time_out() -> u64 {
    DEFAULT_TIME_OUT_MS
}

fn default_independent() -> Vec<IndependentPairConfig> {
    DEFAULT_PAIRS
        .iter()
        .map(|pair| IndependentPairConfig {
            pair: pair.to_string(),
            colors: default_colors(),
            orphan_color: default_orphan_color(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Any valid color_mode value parses into the matching variant
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_color_mode_parsing(mode in prop::sample::select(vec!["consecutive", "independent"])) {
            let toml_content = format!(r#"
[colorizer]
color_mode = "{}"
"#, mode);

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse valid color mode: {}", mode);

            let expected = match mode {
                "consecutive" => ColorMode::Consecutive,
                "independent" => ColorMode::Independent,
                _ => unreachable!(),
            };
            prop_assert_eq!(config.unwrap().colorizer.color_mode, expected);
        }
    }

    // Missing sections and fields always fall back to defaults
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_section in prop::bool::ANY,
            include_time_out in prop::bool::ANY
        ) {
            let toml_content = if !include_section {
                String::new()
            } else if !include_time_out {
                "[colorizer]\n".to_string()
            } else {
                "[colorizer]\ntime_out = 0\n".to_string()
            };

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");

            let config = config.unwrap();
            if !include_section || !include_time_out {
                prop_assert_eq!(config.colorizer.time_out, DEFAULT_TIME_OUT_MS);
            } else {
                prop_assert_eq!(config.colorizer.time_out, 0);
            }
            prop_assert_eq!(config.colorizer.consecutive.pairs.len(), 3);
            prop_assert_eq!(config.colorizer.independent.len(), 3);
        }
    }

    #[test]
    fn test_color_mode_from_str() {
        assert_eq!("consecutive".parse::<ColorMode>().unwrap(), ColorMode::Consecutive);
        assert_eq!("Independent".parse::<ColorMode>().unwrap(), ColorMode::Independent);

        let err = "rainbow".parse::<ColorMode>().unwrap_err();
        assert!(err.to_string().contains("rainbow"));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.colorizer.color_mode, ColorMode::Consecutive);
        assert!(!config.colorizer.force_unique_opening_color);
        assert!(!config.colorizer.force_iteration_color_cycle);
        assert_eq!(config.colorizer.consecutive.colors, default_colors());
        assert_eq!(config.colorizer.consecutive.orphan_color, "Red");
    }

    #[test]
    fn test_parse_consecutive_table() {
        let toml = r#"
[colorizer.consecutive]
pairs = ["ab", "cd"]
colors = ["color0", "color1"]
orphan_color = "orphanColor"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.colorizer.consecutive.pairs, vec!["ab", "cd"]);
        assert_eq!(config.colorizer.consecutive.colors, vec!["color0", "color1"]);
        assert_eq!(config.colorizer.consecutive.orphan_color, "orphanColor");
    }

    #[test]
    fn test_parse_independent_tables() {
        let toml = r#"
[colorizer]
color_mode = "independent"

[[colorizer.independent]]
pair = "ab"
colors = ["color0", "color1"]
orphan_color = "orphanColor0"

[[colorizer.independent]]
pair = "cd"
colors = ["color2", "color3"]
orphan_color = "orphanColor1"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let independent = &config.colorizer.independent;
        assert_eq!(independent.len(), 2);
        assert_eq!(independent[0].pair, "ab");
        assert_eq!(independent[1].colors, vec!["color2", "color3"]);
        assert_eq!(independent[1].orphan_color, "orphanColor1");
    }

    #[test]
    fn test_independent_pair_without_colors_uses_defaults() {
        let toml = r#"
[[colorizer.independent]]
pair = "<>"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.colorizer.independent[0].colors, default_colors());
        assert_eq!(config.colorizer.independent[0].orphan_color, "Red");
    }

    #[test]
    fn test_invalid_color_mode_fails_parse() {
        let toml = r#"
[colorizer]
color_mode = "rainbow"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err(), "Invalid color mode should fail to parse");
    }
}
