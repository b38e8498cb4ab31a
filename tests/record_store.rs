use biblias::edition::{Edition, EditionFields};
use biblias::persist::{Persistor, PersistenceMode};

fn store() -> Persistor {
    Persistor::new(PersistenceMode::InMemory).expect("store")
}

#[test]
fn empty_store_lists_nothing() {
    assert!(store().list_all().unwrap().is_empty());
}

#[test]
fn insert_assigns_fresh_positive_ids() {
    let store = store();
    let first = store.insert(&EditionFields::new("Bíblia de Jerusalém", "2002", "pt")).unwrap();
    let second = store.insert(&EditionFields::default()).unwrap();
    assert!(first > 0);
    assert!(second > first);
    assert_eq!(
        store.list_all().unwrap(),
        vec![
            Edition { id: first, name: "Bíblia de Jerusalém".into(), version: "2002".into(), language: "pt".into() },
            Edition { id: second, name: String::new(), version: String::new(), language: String::new() },
        ]
    );
}

#[test]
fn update_overwrites_fields_and_keeps_id() {
    let store = store();
    let id = store.insert(&EditionFields::new("Bíblia de Jerusalém", "2002", "pt")).unwrap();
    let affected = store.update(id, &EditionFields::new("NVI", "2011", "pt")).unwrap();
    assert_eq!(affected, 1);
    assert_eq!(store.list_all().unwrap(), vec![EditionFields::new("NVI", "2011", "pt").with_id(id)]);
}

#[test]
fn update_and_remove_of_missing_id_touch_nothing() {
    let store = store();
    let id = store.insert(&EditionFields::new("KJV", "1611", "en")).unwrap();
    let before = store.list_all().unwrap();
    assert_eq!(store.update(id + 100, &EditionFields::new("x", "y", "z")).unwrap(), 0);
    assert_eq!(store.remove(id + 100).unwrap(), 0);
    assert_eq!(store.list_all().unwrap(), before);
}

#[test]
fn remove_twice_is_harmless() {
    let store = store();
    let id = store.insert(&EditionFields::new("ARC", "1995", "pt")).unwrap();
    assert_eq!(store.remove(id).unwrap(), 1);
    assert_eq!(store.remove(id).unwrap(), 0);
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn ids_of_removed_rows_are_not_reused() {
    let store = store();
    let id = store.insert(&EditionFields::new("a", "b", "c")).unwrap();
    store.remove(id).unwrap();
    let next = store.insert(&EditionFields::new("d", "e", "f")).unwrap();
    assert!(next > id, "autoincrement must not hand out {id} again");
}

#[test]
fn ensure_schema_is_idempotent() {
    let store = store();
    store.insert(&EditionFields::new("NTLH", "2000", "pt")).unwrap();
    store.ensure_schema().unwrap();
    assert_eq!(store.list_all().unwrap().len(), 1);
}

#[test]
fn file_mode_survives_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("biblia.db").to_string_lossy().into_owned();
    let id = {
        let store = Persistor::new(PersistenceMode::File(path.clone())).expect("store");
        store.insert(&EditionFields::new("Vulgata", "405", "la")).unwrap()
    };
    let store = Persistor::new(PersistenceMode::File(path)).expect("reopened store");
    assert_eq!(store.list_all().unwrap(), vec![EditionFields::new("Vulgata", "405", "la").with_id(id)]);
}

#[test]
fn null_columns_read_as_empty_strings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("biblia.db");
    let store = Persistor::new(PersistenceMode::File(path.to_string_lossy().into_owned())).expect("store");
    // a row written by some other tool, bypassing the store
    let other = rusqlite::Connection::open(&path).unwrap();
    other.execute("insert into biblias (nome) values ('Peshitta')", []).unwrap();
    let editions = store.list_all().unwrap();
    assert_eq!(editions.len(), 1);
    assert_eq!(editions[0].name, "Peshitta");
    assert_eq!(editions[0].version, "");
    assert_eq!(editions[0].language, "");
}
