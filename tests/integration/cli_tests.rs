//! The CLI host: argument wiring, config overrides and `init`

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use paste_json_as_code::cli::{build_host, run_init, ClipboardChoice, Cli, Commands, PasteArgs};
use paste_json_as_code::config::Config;
use paste_json_as_code::host::{ActiveDocumentProvider, ClipboardSource};
use tempfile::tempdir;

fn paste_args(args: &[&str]) -> PasteArgs {
    let argv = ["paste-json-as-code", "paste"].iter().chain(args.iter());
    match Cli::try_parse_from(argv).unwrap().command {
        Commands::Paste(args) => args,
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_init_writes_default_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("paste-json-as-code.toml");

    run_init(&path, false).unwrap();

    assert_eq!(Config::load(&path).unwrap(), Config::default_config());
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("paste-json-as-code.toml");
    fs::write(&path, "[generator]\nexecutable = \"/opt/quicktype\"\n").unwrap();

    let result = run_init(&path, false);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("--force"));
    assert!(fs::read_to_string(&path).unwrap().contains("/opt/quicktype"));
}

#[test]
fn test_init_force_overwrites() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("paste-json-as-code.toml");
    fs::write(&path, "[generator]\nexecutable = \"/opt/quicktype\"\n").unwrap();

    run_init(&path, true).unwrap();

    assert_eq!(Config::load(&path).unwrap(), Config::default_config());
}

#[test]
fn test_language_from_extension() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("Person.cs");
    fs::write(&file, "").unwrap();

    let args = paste_args(&[file.to_str().unwrap()]);
    let host = build_host(&args, &Config::default_config());

    let info = host.document().active_document().unwrap();
    assert_eq!(info.language, "CSharp");
    assert_eq!(info.file_path, file);
}

#[test]
fn test_lang_flag_wins_over_extension() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("Person.cs");
    fs::write(&file, "").unwrap();

    let args = paste_args(&[file.to_str().unwrap(), "--lang", "Java"]);
    let host = build_host(&args, &Config::default_config());

    assert_eq!(host.document().active_document().unwrap().language, "Java");
}

#[test]
fn test_config_language_overrides_applied() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[document.languages]\nkt = \"Kotlin\"\ncs = \"cs\"\n").unwrap();
    let config = Config::load(&config_path).unwrap();

    let kotlin = paste_args(&["Model.kt", "--print"]);
    assert_eq!(kotlin.document_language(&config), "Kotlin");

    let csharp = paste_args(&["Model.cs", "--print"]);
    assert_eq!(csharp.document_language(&config), "cs");

    let swift = paste_args(&["Model.swift", "--print"]);
    assert_eq!(swift.document_language(&config), "Swift");
}

#[test]
fn test_print_works_without_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("Ghost.ts");

    let args = paste_args(&[missing.to_str().unwrap(), "--print"]);
    let host = build_host(&args, &Config::default_config());

    let info = host.document().active_document().unwrap();
    assert_eq!(info.language, "TypeScript");
    assert!(!missing.exists());
}

#[test]
fn test_missing_file_without_print_is_not_active() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("Ghost.ts");

    let args = paste_args(&[missing.to_str().unwrap()]);
    let host = build_host(&args, &Config::default_config());

    assert!(host.document().active_document().is_none());
}

#[test]
fn test_clipboard_choice() {
    assert_eq!(
        paste_args(&["Person.cs"]).clipboard_choice(),
        ClipboardChoice::System
    );
    assert_eq!(
        paste_args(&["Person.cs", "--stdin"]).clipboard_choice(),
        ClipboardChoice::Stdin
    );
    assert_eq!(
        paste_args(&["Person.cs", "--input", "person.json"]).clipboard_choice(),
        ClipboardChoice::File(PathBuf::from("person.json"))
    );
}

#[test]
fn test_input_file_feeds_clipboard() {
    let dir = tempdir().unwrap();
    let json = dir.path().join("person.json");
    fs::write(&json, "{\"name\": \"Ada\"}").unwrap();

    let args = paste_args(&["Person.cs", "--input", json.to_str().unwrap()]);
    let host = build_host(&args, &Config::default_config());

    assert_eq!(host.clipboard().get_text().unwrap(), "{\"name\": \"Ada\"}");
}

#[test]
fn test_configured_generator_path() {
    let mut config = Config::default_config();
    config.generator.executable = PathBuf::from("/opt/tools/quicktype");

    let host = build_host(&paste_args(&["Person.cs", "--print"]), &config);

    assert_eq!(host.generator_path(), Path::new("/opt/tools/quicktype"));
}
