use meshview_core::config::ViewerConfig;
use meshview_core::render::RenderToggle;

#[test]
fn test_default_config_round_trips_through_toml() {
    let config = ViewerConfig::default();
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: ViewerConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_partial_config_fills_defaults() {
    let text = r#"
        [world]
        seed = 42
        scene_columns = 2

        [render]
        print_labels = true
    "#;
    let config: ViewerConfig = toml::from_str(text).unwrap();
    let defaults = ViewerConfig::default();

    assert_eq!(config.world.seed, 42);
    assert_eq!(config.world.scene_columns, 2);
    assert_eq!(config.world.scene_rows, defaults.world.scene_rows);
    assert!(config.render.get(RenderToggle::PrintLabels));
    assert!(config.render.get(RenderToggle::MasterScenes));
    assert_eq!(config.preview, defaults.preview);
    assert_eq!(config.preview.size(), (320, 240));
}

#[test]
fn test_empty_config_is_default() {
    let config: ViewerConfig = toml::from_str("").unwrap();
    assert_eq!(config, ViewerConfig::default());
}
