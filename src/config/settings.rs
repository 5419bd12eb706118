//! Validated colorizer settings.
//!
//! Raw [`Config`] values are user supplied and may be malformed. This module
//! resolves them into an immutable [`Settings`] value: the bracket pair rules
//! the scanner matches against, the color mode and the cycling flags. Invalid
//! input never fails; it is replaced by the built-in defaults and reported as
//! a warning.

use super::types::{
    ColorMode, Config, DEFAULT_ORPHAN_COLOR, DEFAULT_PAIRS, DEFAULT_TIME_OUT_MS, default_colors,
};

/// Characters that open string literals and therefore cannot be brackets.
pub const QUOTE_CHARS: [char; 3] = ['"', '\'', '`'];

/// Whether a character is an opening or closing bracket of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketRole {
    Open,
    Close,
}

/// A configured bracket pair with its color cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketPairRule {
    pub open: char,
    pub close: char,
    pub colors: Vec<String>,
    pub orphan_color: String,
}

impl BracketPairRule {
    pub fn new(open: char, close: char, colors: Vec<String>, orphan_color: String) -> Self {
        Self {
            open,
            close,
            colors,
            orphan_color,
        }
    }

    /// Length of this rule's color cycle, never zero.
    pub fn cycle_len(&self) -> usize {
        self.colors.len().max(1)
    }

    /// Color at `index` in the cycle, wrapping around.
    pub fn color(&self, index: usize) -> &str {
        match self.colors.get(index % self.cycle_len()) {
            Some(color) => color,
            None => &self.orphan_color,
        }
    }
}

/// Immutable, validated ruleset shared by every document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub rules: Vec<BracketPairRule>,
    pub color_mode: ColorMode,
    pub force_unique_opening_color: bool,
    pub force_iteration_color_cycle: bool,
    /// Debounce delay in milliseconds, consumed by the update scheduler
    pub time_out: u64,
}

/// Settings together with the fallbacks applied while validating them
#[derive(Debug, Clone)]
pub struct SettingsResult {
    pub settings: Settings,
    pub warnings: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::from_config(&Config::default()).settings
    }
}

impl Settings {
    /// Validate raw configuration into settings.
    pub fn from_config(config: &Config) -> SettingsResult {
        let raw = &config.colorizer;
        let mut warnings = Vec::new();

        let rules = match raw.color_mode {
            ColorMode::Consecutive => {
                let colors = resolve_colors(&raw.consecutive.colors, "consecutive", &mut warnings);
                let orphan = resolve_orphan(&raw.consecutive.orphan_color, &mut warnings);
                let pairs: Vec<&str> = raw.consecutive.pairs.iter().map(String::as_str).collect();
                build_rules(&pairs, &mut warnings)
                    .unwrap_or_else(default_rules)
                    .into_iter()
                    .map(|(open, close)| {
                        BracketPairRule::new(open, close, colors.clone(), orphan.clone())
                    })
                    .collect()
            }
            ColorMode::Independent => {
                let pairs: Vec<&str> = raw.independent.iter().map(|p| p.pair.as_str()).collect();
                if let Some(resolved) = build_rules(&pairs, &mut warnings) {
                    resolved
                        .into_iter()
                        .zip(&raw.independent)
                        .map(|((open, close), pair)| {
                            let colors = resolve_colors(&pair.colors, &pair.pair, &mut warnings);
                            let orphan = resolve_orphan(&pair.orphan_color, &mut warnings);
                            BracketPairRule::new(open, close, colors, orphan)
                        })
                        .collect()
                } else {
                    // Pairs were replaced by the defaults, so are their colors
                    default_rules()
                        .into_iter()
                        .map(|(open, close)| {
                            BracketPairRule::new(
                                open,
                                close,
                                default_colors(),
                                DEFAULT_ORPHAN_COLOR.to_string(),
                            )
                        })
                        .collect()
                }
            }
        };

        for warning in &warnings {
            log::warn!("{}", warning);
        }

        SettingsResult {
            settings: Settings {
                rules,
                color_mode: raw.color_mode,
                force_unique_opening_color: raw.force_unique_opening_color,
                force_iteration_color_cycle: raw.force_iteration_color_cycle,
                time_out: raw.time_out,
            },
            warnings,
        }
    }

    /// Settings with the given rules and default flags, mostly for tests and embedding.
    pub fn with_rules(rules: Vec<BracketPairRule>, color_mode: ColorMode) -> Self {
        Settings {
            rules,
            color_mode,
            force_unique_opening_color: false,
            force_iteration_color_cycle: false,
            time_out: DEFAULT_TIME_OUT_MS,
        }
    }

    /// Look up the rule a character opens or closes, first rule wins.
    pub fn classify(&self, ch: char) -> Option<(usize, BracketRole)> {
        self.rules.iter().enumerate().find_map(|(index, rule)| {
            if rule.open == ch {
                Some((index, BracketRole::Open))
            } else if rule.close == ch {
                Some((index, BracketRole::Close))
            } else {
                None
            }
        })
    }

    /// Whether opener colors depend on the previously opened bracket.
    pub fn tracks_previous_opener(&self) -> bool {
        self.force_unique_opening_color || self.force_iteration_color_cycle
    }
}

fn default_rules() -> Vec<(char, char)> {
    DEFAULT_PAIRS
        .iter()
        .filter_map(|pair| {
            let mut chars = pair.chars();
            Some((chars.next()?, chars.next()?))
        })
        .collect()
}

/// Parse pair strings into (open, close) characters.
///
/// Any malformed or overlapping entry rejects the whole set; callers then
/// fall back to the default pairs.
fn build_rules(pairs: &[&str], warnings: &mut Vec<String>) -> Option<Vec<(char, char)>> {
    let mut rules: Vec<(char, char)> = Vec::with_capacity(pairs.len());

    for pair in pairs {
        let chars: Vec<char> = pair.chars().collect();
        let problem = if chars.len() != 2 {
            Some("must be exactly two characters")
        } else if chars[0] == chars[1] {
            Some("opener and closer must differ")
        } else if chars.iter().any(|c| QUOTE_CHARS.contains(c)) {
            Some("quote characters cannot be brackets")
        } else if rules
            .iter()
            .any(|&(o, c)| [o, c].contains(&chars[0]) || [o, c].contains(&chars[1]))
        {
            Some("characters overlap another pair")
        } else {
            None
        };

        if let Some(problem) = problem {
            warnings.push(format!(
                "Invalid bracket pair {:?} ({}), using default pairs",
                pair, problem
            ));
            return None;
        }
        rules.push((chars[0], chars[1]));
    }

    if rules.is_empty() {
        warnings.push("No bracket pairs configured, using default pairs".to_string());
        return None;
    }

    Some(rules)
}

fn resolve_colors(colors: &[String], owner: &str, warnings: &mut Vec<String>) -> Vec<String> {
    let colors: Vec<String> = colors
        .iter()
        .filter(|c| !c.trim().is_empty())
        .cloned()
        .collect();
    if colors.is_empty() {
        warnings.push(format!("Empty color list for {}, using default colors", owner));
        return default_colors();
    }
    colors
}

fn resolve_orphan(orphan: &str, warnings: &mut Vec<String>) -> String {
    if orphan.trim().is_empty() {
        warnings.push("Empty orphan color, using default".to_string());
        return DEFAULT_ORPHAN_COLOR.to_string();
    }
    orphan.to_string()
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod settings_tests;
