// SPDX-License-Identifier: MPL-2.0
use iced_folio::config::{self, Config};
use iced_folio::i18n::fluent::I18n;
use iced_folio::sort;
use iced_folio::ui::sort_visualizer::State as VisualizerState;
use iced_folio::ui::theming::ThemeMode;
use tempfile::tempdir;

fn same_multiset(a: &[u32], b: &[u32]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        theme_mode: Some(ThemeMode::System),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        theme_mode: Some(ThemeMode::System),
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_lang_overrides_config() {
    let config = Config {
        language: Some("fr".to_string()),
        theme_mode: None,
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_theme_mode_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
        let config = Config {
            language: None,
            theme_mode: Some(mode),
        };
        config::save_to_path(&config, &path).expect("Failed to save config");
        let loaded = config::load_from_path(&path).expect("Failed to load config");
        assert_eq!(loaded.theme_mode, Some(mode));
    }
}

#[test]
fn test_full_animation_run_sorts_the_bars() {
    let input = sort::generate(sort::BAR_COUNT, sort::BAR_MIN, sort::BAR_MAX);
    let mut visualizer = VisualizerState::with_bars(input.clone());

    assert!(!visualizer.is_loaded());

    let mut steps = 0;
    while !visualizer.is_loaded() {
        visualizer.advance();
        // Every published snapshot must be a permutation of the input.
        assert!(same_multiset(visualizer.bars(), &input));
        steps += 1;
        assert!(steps < 100_000, "animation must terminate");
    }

    assert!(visualizer.bars().windows(2).all(|w| w[0] <= w[1]));
    assert!(same_multiset(visualizer.bars(), &input));
}

#[test]
fn test_four_element_scenario_plays_out() {
    let mut visualizer = VisualizerState::with_bars(vec![5, 3, 8, 1]);
    while !visualizer.is_loaded() {
        visualizer.advance();
    }
    assert_eq!(visualizer.bars(), &[1, 3, 5, 8]);
}

#[test]
fn test_empty_generation_is_ready_immediately() {
    let bars = sort::generate(0, sort::BAR_MIN, sort::BAR_MAX);
    let visualizer = VisualizerState::with_bars(bars);
    assert!(visualizer.bars().is_empty());
    assert!(visualizer.is_loaded());
}
