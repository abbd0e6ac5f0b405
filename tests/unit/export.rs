use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_export").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn html_artifact_has_fixed_name_and_mime() {
    let a = Artifact::html("<div></div>");
    assert_eq!(a.file_name, "output.html");
    assert_eq!(a.mime, "text/html");
    assert_eq!(a.bytes, b"<div></div>");
}

#[test]
fn in_memory_sink_records_in_order() {
    let mut sink = InMemorySink::new();
    sink.emit(&Artifact::html("a")).unwrap();
    sink.emit(&Artifact::html("b")).unwrap();
    assert_eq!(sink.artifacts().len(), 2);
    assert_eq!(sink.last().unwrap().bytes, b"b");
}

#[test]
fn fs_sink_writes_and_cleans_staging() {
    let dir = scratch_dir("writes");
    let mut sink = FsSink::new(&dir);
    sink.emit(&Artifact::html("<p>hi</p>")).unwrap();

    let written = std::fs::read_to_string(dir.join("output.html")).unwrap();
    assert_eq!(written, "<p>hi</p>");
    assert!(!dir.join(".output.html.partial").exists());
}

#[test]
fn fs_sink_replaces_existing_file() {
    let dir = scratch_dir("replaces");
    let mut sink = FsSink::new(&dir);
    sink.emit(&Artifact::html("first")).unwrap();
    sink.emit(&Artifact::html("second")).unwrap();
    assert_eq!(
        std::fs::read_to_string(sink.target_path("output.html")).unwrap(),
        "second"
    );
}

#[test]
fn fs_sink_rejects_nested_names() {
    let dir = scratch_dir("nested");
    let mut sink = FsSink::new(&dir);
    let mut artifact = Artifact::html("x");
    artifact.file_name = "../escape.html".to_string();
    let err = sink.emit(&artifact).unwrap_err();
    assert!(matches!(err, ImgAnimError::Export(_)));
}

#[test]
fn failed_rename_leaves_no_staging_file() {
    let dir = scratch_dir("rename_fails");
    // A directory at the target path makes the rename fail after staging was written.
    std::fs::create_dir_all(dir.join("output.html").join("occupied")).unwrap();

    let mut sink = FsSink::new(&dir);
    assert!(sink.emit(&Artifact::html("x")).is_err());
    assert!(!dir.join(".output.html.partial").exists());
}
