//! Tests for settings validation

use super::*;
use crate::config::types::{ColorizerConfig, ConsecutivePairsConfig, IndependentPairConfig};

fn consecutive_config(pairs: &[&str], colors: &[&str], orphan: &str) -> Config {
    Config {
        colorizer: ColorizerConfig {
            consecutive: ConsecutivePairsConfig {
                pairs: pairs.iter().map(|p| p.to_string()).collect(),
                colors: colors.iter().map(|c| c.to_string()).collect(),
                orphan_color: orphan.to_string(),
            },
            ..ColorizerConfig::default()
        },
    }
}

fn independent_pair(pair: &str, colors: &[&str], orphan: &str) -> IndependentPairConfig {
    IndependentPairConfig {
        pair: pair.to_string(),
        colors: colors.iter().map(|c| c.to_string()).collect(),
        orphan_color: orphan.to_string(),
    }
}

fn rule_chars(settings: &Settings) -> Vec<(char, char)> {
    settings.rules.iter().map(|r| (r.open, r.close)).collect()
}

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(rule_chars(&settings), vec![('(', ')'), ('[', ']'), ('{', '}')]);
    assert_eq!(settings.color_mode, ColorMode::Consecutive);
    assert_eq!(settings.time_out, DEFAULT_TIME_OUT_MS);
    assert_eq!(settings.rules[0].colors, vec!["Gold", "Orchid", "LightSkyBlue"]);
    assert_eq!(settings.rules[2].orphan_color, "Red");
}

#[test]
fn test_consecutive_pairs_share_colors() {
    let config = consecutive_config(&["ab", "cd"], &["color0", "color1"], "orphanColor");
    let result = Settings::from_config(&config);

    assert!(result.warnings.is_empty());
    let settings = result.settings;
    assert_eq!(rule_chars(&settings), vec![('a', 'b'), ('c', 'd')]);
    for rule in &settings.rules {
        assert_eq!(rule.colors, vec!["color0", "color1"]);
        assert_eq!(rule.orphan_color, "orphanColor");
    }
}

#[test]
fn test_independent_pairs_keep_own_colors() {
    let mut config = Config::default();
    config.colorizer.color_mode = ColorMode::Independent;
    config.colorizer.independent = vec![
        independent_pair("ab", &["color0", "color1"], "orphanColor0"),
        independent_pair("cd", &["color2", "color3"], "orphanColor1"),
    ];

    let result = Settings::from_config(&config);
    assert!(result.warnings.is_empty());

    let settings = result.settings;
    assert_eq!(settings.color_mode, ColorMode::Independent);
    assert_eq!(rule_chars(&settings), vec![('a', 'b'), ('c', 'd')]);
    assert_eq!(settings.rules[0].colors, vec!["color0", "color1"]);
    assert_eq!(settings.rules[1].colors, vec!["color2", "color3"]);
    assert_eq!(settings.rules[0].orphan_color, "orphanColor0");
    assert_eq!(settings.rules[1].orphan_color, "orphanColor1");
}

#[test]
fn test_flags_and_time_out_are_carried() {
    let mut config = Config::default();
    config.colorizer.time_out = 0;
    config.colorizer.force_unique_opening_color = true;
    config.colorizer.force_iteration_color_cycle = true;

    let settings = Settings::from_config(&config).settings;
    assert_eq!(settings.time_out, 0);
    assert!(settings.force_unique_opening_color);
    assert!(settings.force_iteration_color_cycle);
    assert!(settings.tracks_previous_opener());
}

#[test]
fn test_malformed_pair_falls_back_to_defaults() {
    for bad in ["(", "(((", "", "aa", "\"x"] {
        let config = consecutive_config(&["<>", bad], &["Blue"], "Red");
        let result = Settings::from_config(&config);
        assert_eq!(
            rule_chars(&result.settings),
            vec![('(', ')'), ('[', ']'), ('{', '}')],
            "pair {:?} should be rejected",
            bad
        );
        assert_eq!(result.warnings.len(), 1);
        // Colors survive a pair fallback in consecutive mode
        assert_eq!(result.settings.rules[0].colors, vec!["Blue"]);
    }
}

#[test]
fn test_overlapping_pairs_rejected() {
    let config = consecutive_config(&["()", "(]"], &["Gold"], "Red");
    let result = Settings::from_config(&config);
    assert_eq!(
        rule_chars(&result.settings),
        vec![('(', ')'), ('[', ']'), ('{', '}')]
    );
    assert!(result.warnings[0].contains("overlap"));
}

#[test]
fn test_independent_fallback_resets_colors() {
    let mut config = Config::default();
    config.colorizer.color_mode = ColorMode::Independent;
    config.colorizer.independent = vec![
        independent_pair("ab", &["c0"], "o0"),
        independent_pair("bad", &["c1"], "o1"),
        independent_pair("cd", &["c2"], "o2"),
    ];

    let settings = Settings::from_config(&config).settings;
    assert_eq!(rule_chars(&settings), vec![('(', ')'), ('[', ']'), ('{', '}')]);
    assert_eq!(settings.rules[0].colors, vec!["Gold", "Orchid", "LightSkyBlue"]);
    assert_eq!(settings.rules[0].orphan_color, "Red");
}

#[test]
fn test_empty_pair_list_falls_back() {
    let config = consecutive_config(&[], &["Gold"], "Red");
    let result = Settings::from_config(&config);
    assert_eq!(result.settings.rules.len(), 3);
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn test_empty_colors_and_orphan_fall_back() {
    let config = consecutive_config(&["()"], &[], "  ");
    let result = Settings::from_config(&config);
    let rule = &result.settings.rules[0];
    assert_eq!(rule.colors, vec!["Gold", "Orchid", "LightSkyBlue"]);
    assert_eq!(rule.orphan_color, "Red");
    assert_eq!(result.warnings.len(), 2);
}

#[test]
fn test_classify_first_rule_wins() {
    let settings = Settings::default();
    assert_eq!(settings.classify('('), Some((0, BracketRole::Open)));
    assert_eq!(settings.classify(']'), Some((1, BracketRole::Close)));
    assert_eq!(settings.classify('}'), Some((2, BracketRole::Close)));
    assert_eq!(settings.classify('a'), None);
}

#[test]
fn test_rule_color_wraps() {
    let rule = BracketPairRule::new(
        '(',
        ')',
        vec!["a".to_string(), "b".to_string()],
        "x".to_string(),
    );
    assert_eq!(rule.color(0), "a");
    assert_eq!(rule.color(3), "b");

    let empty = BracketPairRule::new('(', ')', Vec::new(), "x".to_string());
    assert_eq!(empty.cycle_len(), 1);
    assert_eq!(empty.color(5), "x");
}
