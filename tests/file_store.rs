use jsonrec::error::RecError;
use jsonrec::model::Record;
use jsonrec::store::fs::FileStore;
use jsonrec::store::RecordStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("db.json"));
    (dir, store)
}

#[test]
fn read_creates_missing_file() {
    let (_dir, mut store) = setup();
    assert!(!store.path().exists());

    assert!(store.read_raw().unwrap().is_empty());
    assert!(store.path().exists());
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn persist_then_load_round_trips() {
    let (_dir, mut store) = setup();
    let records = vec![
        Record::new("1", "a@b.com", 30),
        Record::new("2", "c@d.com", -7),
        Record::new("3", "", 127),
    ];

    store.persist(&records).unwrap();
    assert_eq!(store.load().unwrap(), records);

    // persisting what was loaded changes nothing
    let loaded = store.load().unwrap();
    store.persist(&loaded).unwrap();
    assert_eq!(store.load().unwrap(), records);
}

#[test]
fn persist_overwrites_instead_of_appending() {
    let (_dir, mut store) = setup();
    store
        .persist(&[Record::new("1", "a@b.com", 30), Record::new("2", "", 1)])
        .unwrap();
    store.persist(&[Record::new("3", "", 2)]).unwrap();

    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        r#"[{"id":"3","email":"","age":2}]"#
    );
}

#[test]
fn persist_leaves_no_stray_files() {
    let (dir, mut store) = setup();
    store.persist(&[Record::new("1", "", 0)]).unwrap();

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["db.json".to_string()]);
}

#[cfg(unix)]
#[test]
fn persist_writes_through_symlink() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("real.json");
    let link = dir.path().join("db.json");
    fs::write(&target, "[]").unwrap();
    std::os::unix::fs::symlink(&target, &link).unwrap();

    let mut store = FileStore::new(&link);
    store.persist(&[Record::new("1", "a@b.com", 30)]).unwrap();

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        r#"[{"id":"1","email":"a@b.com","age":30}]"#
    );
}

#[cfg(unix)]
#[test]
fn persist_keeps_file_mode() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, mut store) = setup();
    fs::write(store.path(), "[]").unwrap();
    fs::set_permissions(store.path(), fs::Permissions::from_mode(0o600)).unwrap();

    store.persist(&[Record::new("1", "", 0)]).unwrap();

    let mode = fs::metadata(store.path()).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);
}

#[test]
fn persist_shorter_collection_leaves_no_trailing_bytes() {
    let (_dir, mut store) = setup();
    fs::write(store.path(), "[".repeat(200)).unwrap();

    store.persist(&[]).unwrap();

    assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
}

#[test]
fn read_raw_does_not_normalise() {
    let (_dir, mut store) = setup();
    let text = "[ {\"id\": \"1\"} ]\n";
    fs::write(store.path(), text).unwrap();

    assert_eq!(store.read_raw().unwrap(), text.as_bytes());
}

#[test]
fn malformed_file_fails_to_load() {
    let (_dir, mut store) = setup();
    fs::write(store.path(), "[{\"id\": 1}]").unwrap();

    assert!(matches!(store.load(), Err(RecError::MalformedJson(_))));
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path().join("nope").join("db.json"));

    assert!(matches!(store.read_raw(), Err(RecError::Io(_))));
}
