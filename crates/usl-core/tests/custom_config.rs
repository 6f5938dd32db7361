use std::fs;

use tempfile::tempdir;
use usl_core::config::{self, paths::config_path_in};
use usl_core::{ConfigError, ParseError, Parser, ParserConfig};

#[test]
fn custom_provider_set() {
    let parser =
        Parser::new(ParserConfig::default().with_providers(["git.example.org"])).unwrap();

    let locator = parser.parse("git.example.org/team/tool/src").unwrap();
    assert_eq!(locator.class(), "git");
    assert_eq!(locator.name(), "team/tool");
    assert_eq!(locator.in_path(), "src");
    assert_eq!(locator.to_string(), "https://git.example.org/team/tool.git");

    // github.com is an ordinary host for this parser.
    let locator = parser.parse("github.com/user/repo").unwrap();
    assert_eq!(locator.class(), "");
    assert_eq!(locator.to_string(), "https://github.com/user/repo");
}

#[test]
fn parsers_are_independent() {
    let custom = Parser::new(ParserConfig::default().with_providers(["git.example.org"])).unwrap();
    let builtin = Parser::default();

    assert!(custom.parse("github.com/onlyone").is_ok());
    assert!(matches!(
        builtin.parse("github.com/onlyone"),
        Err(ParseError::IncompletePath { .. })
    ));
}

#[test]
fn custom_classes() {
    let parser = Parser::new(ParserConfig::default().with_classes(["git", "7z"])).unwrap();

    let locator = parser.parse("https://example.com/files/data.7z").unwrap();
    assert_eq!(locator.class(), "7z");
    assert_eq!(locator.name(), "files/data");

    let locator = parser.parse("https://example.com/files/data.zip").unwrap();
    assert_eq!(locator.class(), "");
}

#[test]
fn no_classes_or_providers() {
    let parser = Parser::new(
        ParserConfig::default()
            .with_providers(Vec::<String>::new())
            .with_classes(Vec::<String>::new()),
    )
    .unwrap();

    let locator = parser.parse("github.com/user/repo.git").unwrap();
    assert_eq!(locator.class(), "");
    assert_eq!(locator.name(), "user/repo.git");
}

#[test]
fn custom_fallback_scheme() {
    let parser = Parser::new(ParserConfig::default().with_fallback_scheme("http")).unwrap();

    let locator = parser.parse("example.com/a").unwrap();
    assert_eq!(locator.scheme(), "http");
}

#[test]
fn restricted_schemes() {
    let parser = Parser::new(ParserConfig::default().with_schemes(["https"])).unwrap();

    assert!(matches!(
        parser.parse("ssh://example.com/a"),
        Err(ParseError::UnsupportedScheme { scheme }) if scheme == "ssh"
    ));
}

#[test]
fn invalid_config_is_rejected() {
    let err = Parser::new(ParserConfig::default().with_fallback_scheme("gopher")).unwrap_err();

    assert!(matches!(err, ConfigError::UnknownFallback { .. }));
}

#[test]
fn load_config_file() {
    let temp_dir = tempdir().unwrap();
    let path = config_path_in(temp_dir.path());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        r#"
fallback_scheme = "https"
providers = ["github.com", "codeberg.org"]
"#,
    )
    .unwrap();

    let config = config::load(&path).unwrap();
    assert_eq!(config.providers, ["github.com", "codeberg.org"]);

    let parser = Parser::new(config).unwrap();
    let locator = parser.parse("codeberg.org:owner/project").unwrap();
    assert_eq!(locator.to_string(), "git@codeberg.org:owner/project.git");
}

#[test]
fn load_missing_file_reports_path() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("missing.toml");

    let err = config::load(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn load_malformed_file_reports_path() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("usl.toml");
    fs::write(&path, "providers = [").unwrap();

    let err = config::load(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
    assert!(format!("{err:#}").contains("TOML parsing error"));
}
