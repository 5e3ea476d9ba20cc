mod support;

use support::vitalis_env::VitalisEnvGuard;

use vitalis::{app_dirs, config};

#[test]
fn first_launch_writes_defaults_under_config_home() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let _env = VitalisEnvGuard::set_config_home(temp.path().to_path_buf());

    let settings = config::load_or_default().expect("load defaults");
    assert_eq!(settings, config::AppSettings::default());

    let path = temp
        .path()
        .join(app_dirs::APP_DIR_NAME)
        .join(config::CONFIG_FILE_NAME);
    let text = std::fs::read_to_string(&path).expect("config written");
    assert!(text.contains("http://localhost:5000/predict"));
    assert!(text.contains("require_all_fields = true"));
    assert!(text.contains("[logging]"));
}

#[test]
fn edited_settings_are_loaded_back() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let _env = VitalisEnvGuard::set_config_home(temp.path().to_path_buf());

    let path = config::config_path().expect("config path");
    let mut settings = config::AppSettings::default();
    settings.prediction.endpoint = "https://predict.example.org/v1/predict".to_string();
    settings.prediction.read_timeout_secs = 5;
    config::save_to_path(&settings, &path).expect("save");

    let loaded = config::load_or_default().expect("load");
    assert_eq!(loaded, settings);
    assert_eq!(loaded.prediction.timeouts().read.as_secs(), 5);
}
