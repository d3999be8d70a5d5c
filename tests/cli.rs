use std::fs;

use clap::Parser;
use einstein::{data_path, Cli, Cmd};

#[test]
fn defaults_to_the_console_loop() {
    let cli = Cli::try_parse_from(["einstein"]).unwrap();
    assert_eq!(cli.cmd, None);
    assert!(!cli.enforce_event_order);
}

#[test]
fn exec_collects_the_whole_line() {
    let cli = Cli::try_parse_from(["einstein", "exec", "deadline", "Return", "book", "/by", "2/12/2019", "1800"])
        .unwrap();
    match cli.cmd {
        Some(Cmd::Exec { line }) => {
            assert_eq!(line.join(" "), "deadline Return book /by 2/12/2019 1800")
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(Cli::try_parse_from(["einstein", "exec"]).is_err());
}

#[test]
fn flags_override_the_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    fs::write(
        &config,
        r#"{ "data_file": "/from/config.txt", "log_level": "info" }"#,
    )
    .unwrap();
    let config_arg = config.to_str().unwrap();

    let cli = Cli::try_parse_from(["einstein", "--config", config_arg, "tui"]).unwrap();
    let settings = cli.settings().unwrap();
    assert_eq!(data_path(&settings).unwrap(), std::path::PathBuf::from("/from/config.txt"));
    assert_eq!(settings.log_level, "info");
    assert!(!settings.enforce_event_order);

    let cli = Cli::try_parse_from([
        "einstein",
        "--config",
        config_arg,
        "--data-file",
        "/from/flag.txt",
        "--enforce-event-order",
        "--log-level",
        "debug",
    ])
    .unwrap();
    let settings = cli.settings().unwrap();
    assert_eq!(settings.data_file.as_deref(), Some(std::path::Path::new("/from/flag.txt")));
    assert!(settings.enforce_event_order);
    assert_eq!(settings.log_level, "debug");
    assert!(settings.parse_options().enforce_event_order);
}
