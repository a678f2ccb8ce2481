//! Tests for loading game configuration files.

use money_hangman::XpPolicy;
use money_hangman_cli::GameConfig;
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[xp]
hit = 1
miss = -1
won = 5
lost = -5

[[puzzles]]
answer = "needs and wants"
hint = "Two kinds of spending"
"#
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.xp(), XpPolicy::new(1, -1, 5, -5));
    assert_eq!(config.puzzles().len(), 1);
    assert_eq!(config.puzzles()[0].answer_text(), "NEEDS AND WANTS");
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_load_without_path_uses_defaults() {
    let config = GameConfig::load(None).unwrap();
    assert_eq!(*config.xp(), XpPolicy::new(10, -5, 50, -20));
    assert_eq!(config.word_bank().len(), 8);
}
