use clocklog::config::{Config, DEFAULT_CHART_WIDTH, default_columns};
use clocklog::models::column::Column;

#[test]
fn test_partial_config_falls_back_to_defaults() {
    let cfg: Config = serde_yaml::from_str("chart_width: 50\n").expect("parse config");

    assert_eq!(cfg.chart_width, 50);
    assert_eq!(cfg.tick, "▇");
    assert_eq!(cfg.default_columns, default_columns());
    assert!(cfg.database.ends_with("db.sqlite"));
}

#[test]
fn test_default_columns_can_be_overridden() {
    let yaml = "database: /tmp/elsewhere.sqlite\ndefault_columns: [description, duration]\n";
    let cfg: Config = serde_yaml::from_str(yaml).expect("parse config");

    assert_eq!(cfg.database, "/tmp/elsewhere.sqlite");
    assert_eq!(cfg.default_columns, vec![Column::Description, Column::Duration]);
    assert_eq!(cfg.chart_width, DEFAULT_CHART_WIDTH);
}

#[test]
fn test_unknown_column_is_rejected() {
    let parsed: Result<Config, _> = serde_yaml::from_str("default_columns: [project]\n");
    assert!(parsed.is_err());
}

#[test]
fn test_data_dir_is_named_after_the_app() {
    assert!(Config::data_dir().ends_with("clocklog"));
    assert!(Config::database_file().ends_with("clocklog/db.sqlite"));
}
