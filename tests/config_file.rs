// Integration tests for loading config files through the public API

use chaksu::config::{ConfigError, Store, ValueRef};
use chaksu::keys::KeyName;
use chaksu::Settings;
use std::io::Write;
use std::sync::Arc;
use std::thread;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = config_file("width = 800\nheight = 600\ntitle = \"Viewer\"\n# trailing comment");
    let store = Store::from_file(file.path()).unwrap();

    let entries: Vec<_> = store.records().map(|e| (e.key, e.value)).collect();
    assert_eq!(
        entries,
        vec![
            ("width", ValueRef::Int(800)),
            ("height", ValueRef::Int(600)),
            ("title", ValueRef::String("Viewer")),
        ]
    );
    assert_eq!(store.get_int("width"), Some(800));
    assert_eq!(store.get_string("missing"), None);
}

#[test]
fn test_empty_file_is_rejected() {
    let file = config_file("");
    assert!(matches!(
        Store::from_file(file.path()),
        Err(ConfigError::EmptyInput)
    ));
}

#[test]
fn test_comment_only_file_is_an_empty_store() {
    let file = config_file("#comment\n");
    let store = Store::from_file(file.path()).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_lexical_error_reports_line() {
    let file = config_file("a = 1\nb = 2\nname = \"abc");
    match Store::from_file(file.path()) {
        Err(ConfigError::Lexical { line, message }) => {
            assert_eq!(line, 3);
            assert_eq!(message, "unterminated string");
        }
        other => panic!("expected lexical error, got {:?}", other),
    }
}

#[test]
fn test_malformed_entries_do_not_hide_valid_ones() {
    let file = config_file(
        "window_width = 1280\n\
         window_height 720\n\
         framerate = = 30\n\
         next_image = \"n\"\n",
    );
    let store = Store::from_file(file.path()).unwrap();

    let lines: Vec<_> = store.diagnostics().iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![2, 3]);

    let settings = Settings::from_store(&store);
    assert_eq!(settings.window_width, 1280);
    assert_eq!(settings.window_height, Settings::defaults().window_height);
    assert_eq!(settings.framerate, Settings::defaults().framerate);
    assert_eq!(settings.next_image, KeyName::Letter('N'));
}

#[test]
fn test_store_shared_across_threads() {
    let store = Arc::new(Store::from_bytes(b"title = \"Viewer\"\nscale = 0.5").unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (
                    store.get_string("title").map(str::to_string),
                    store.get_float("scale"),
                )
            })
        })
        .collect();

    for handle in handles {
        let (title, scale) = handle.join().unwrap();
        assert_eq!(title.as_deref(), Some("Viewer"));
        assert_eq!(scale, Some(0.5));
    }
}
