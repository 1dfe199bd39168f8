//! End-to-end runs against a shell script standing in for quicktype

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use paste_json_as_code::error::PasteError;
use paste_json_as_code::generator::QuicktypeProcess;
use paste_json_as_code::host::{
    FileDocument, RecordingNotifier, Selection, StaticClipboard, SystemTempStore,
};
use paste_json_as_code::workflow::{Collaborators, InvocationWorkflow};
use tempfile::tempdir;

/// Echoes its arguments and input as a comment; rejects swift with an error
const FAKE_QUICKTYPE: &str = r#"#!/bin/sh
if [ "$4" = "swift" ]; then
    echo "Error: swift is broken today" >&2
    exit 2
fi
printf '// lang=%s top=%s json=%s\n' "$4" "$6" "$(cat "$7")"
"#;

fn install_fake_quicktype(dir: &Path) -> PathBuf {
    let path = dir.join("quicktype");
    fs::write(&path, FAKE_QUICKTYPE).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn paste(
    generator: &Path,
    scratch: &Path,
    clipboard: &str,
    document: &FileDocument,
    notifier: &RecordingNotifier,
) -> Result<String, PasteError> {
    let clipboard = StaticClipboard::new(clipboard);
    let temp_files = SystemTempStore::in_dir(scratch.to_path_buf(), false);
    let host = Collaborators {
        clipboard: &clipboard,
        document,
        temp_files: &temp_files,
        generator: &QuicktypeProcess,
        notifier,
    };
    InvocationWorkflow::new(host, generator.to_path_buf()).execute()
}

// Script creation and every spawn stay in one test so no concurrent fork can
// hold the script open for writing while it is executed.
#[test]
fn test_paste_with_script_generator() {
    let dir = tempdir().unwrap();
    let generator = install_fake_quicktype(dir.path());
    let scratch = dir.path().join("scratch");
    fs::create_dir_all(&scratch).unwrap();

    // Insert at a caret inside the file
    let source = dir.path().join("Person.cs");
    fs::write(&source, "namespace App;\n\n// end\n").unwrap();
    let document = FileDocument::new(source.clone(), "CSharp".to_string(), Selection::Caret(15));
    let notifier = RecordingNotifier::new();

    let inserted = paste(&generator, &scratch, " {\"a\":1} ", &document, &notifier).unwrap();

    assert_eq!(inserted, "// lang=csharp top=Person json={\"a\":1}\n");
    assert_eq!(
        fs::read_to_string(&source).unwrap(),
        "namespace App;\n// lang=csharp top=Person json={\"a\":1}\n\n// end\n"
    );
    assert!(notifier.messages().is_empty());
    assert_eq!(fs::read_dir(&scratch).unwrap().count(), 0);

    // Replace a selected range
    let source = dir.path().join("order.model.ts");
    fs::write(&source, "// placeholder\n").unwrap();
    let document = FileDocument::new(source.clone(), "TypeScript".to_string(), Selection::Range(0, 14));
    let notifier = RecordingNotifier::new();

    paste(&generator, &scratch, "[1,2]", &document, &notifier).unwrap();

    assert_eq!(
        fs::read_to_string(&source).unwrap(),
        "// lang=typescript top=order.model json=[1,2]\n\n"
    );

    // Generator failure leaves the document alone
    let source = dir.path().join("Person.swift");
    fs::write(&source, "import Foundation\n").unwrap();
    let document = FileDocument::new(source.clone(), "Swift".to_string(), Selection::End);
    let notifier = RecordingNotifier::new();

    let err = paste(&generator, &scratch, "{}", &document, &notifier).unwrap_err();

    assert!(matches!(err, PasteError::GeneratorExecution { .. }));
    assert_eq!(
        notifier.messages(),
        vec!["quicktype could not process your JSON:\n\nError: swift is broken today\n"]
    );
    assert_eq!(fs::read_to_string(&source).unwrap(), "import Foundation\n");
    assert_eq!(fs::read_dir(&scratch).unwrap().count(), 0);

    // A generator path that does not exist
    let notifier = RecordingNotifier::new();
    let missing = dir.path().join("no-such-quicktype");

    let err = paste(&missing, &scratch, "{}", &document, &notifier).unwrap_err();

    assert!(matches!(err, PasteError::GeneratorNotFound { .. }));
    assert_eq!(notifier.messages().len(), 1);
}

#[test]
fn test_missing_file_is_no_active_document() {
    let dir = tempdir().unwrap();
    let document = FileDocument::new(
        dir.path().join("Ghost.cs"),
        "CSharp".to_string(),
        Selection::End,
    );
    let notifier = RecordingNotifier::new();

    let err = paste(
        Path::new("/nonexistent/quicktype"),
        dir.path(),
        "{}",
        &document,
        &notifier,
    )
    .unwrap_err();

    assert!(matches!(err, PasteError::NoActiveDocument));
    assert_eq!(
        notifier.messages(),
        vec!["Cannot paste - there is no active document"]
    );
}
