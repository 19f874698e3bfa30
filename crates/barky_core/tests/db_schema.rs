use barky_core::db::schema::{
    drop_bookmarks_table, table_exists, table_has_column, table_uses_autoincrement,
};
use barky_core::db::{open_db, open_db_in_memory};
use barky_core::{Bookmark, BookmarkRepository, ErrorKind, RepoError, SqliteBookmarkRepository};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_bookmarks_table() {
    let conn = open_db_in_memory().unwrap();

    assert!(table_exists(&conn, "bookmarks").unwrap());
    for column in ["id", "title", "url", "notes", "date_added"] {
        assert!(
            table_has_column(&conn, "bookmarks", column).unwrap(),
            "missing column {column}"
        );
    }
}

#[test]
fn opening_same_database_twice_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bookmarks.db");

    {
        let mut repo = SqliteBookmarkRepository::open(&path).unwrap();
        repo.add(&Bookmark::new("persisted", "http://p")).unwrap();
    }

    let repo = SqliteBookmarkRepository::open(&path).unwrap();
    assert_eq!(repo.count().unwrap(), 1);
    assert_eq!(repo.retrieve(1).unwrap().title, "persisted");
}

#[test]
fn drop_bookmarks_table_removes_table() {
    let conn = open_db_in_memory().unwrap();
    drop_bookmarks_table(&conn).unwrap();
    assert!(!table_exists(&conn, "bookmarks").unwrap());

    drop_bookmarks_table(&conn).unwrap();
}

#[test]
fn title_and_url_columns_reject_null() {
    let conn = open_db_in_memory().unwrap();
    let result = conn.execute(
        "INSERT INTO bookmarks (title, url, date_added) VALUES (NULL, 'http://a', '02/10/22');",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn repository_rejects_connection_without_bookmarks_table() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteBookmarkRepository::try_new(conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("bookmarks"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE bookmarks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            url TEXT NOT NULL,
            date_added TEXT NOT NULL
        );",
    )
    .unwrap();

    let result = SqliteBookmarkRepository::try_new(conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "bookmarks",
            column: "notes"
        })
    ));
}

#[test]
fn open_db_fails_for_unwritable_location() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-parent").join("bookmarks.db");

    let result = SqliteBookmarkRepository::open(&path);
    assert!(matches!(result, Err(RepoError::Db(_))));
    assert!(open_db(&path).is_err());
}

#[test]
fn repository_rejects_table_that_would_reuse_ids() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE bookmarks (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            url TEXT NOT NULL,
            notes TEXT,
            date_added TEXT NOT NULL
        );",
    )
    .unwrap();
    assert!(!table_uses_autoincrement(&conn, "bookmarks").unwrap());

    let err = match SqliteBookmarkRepository::try_new(conn) {
        Ok(_) => panic!("table without AUTOINCREMENT should be rejected"),
        Err(err) => err,
    };
    assert!(matches!(err, RepoError::MissingAutoIncrement("bookmarks")));
    assert_eq!(err.kind(), ErrorKind::StoreUnavailable);
}

#[test]
fn open_rejects_existing_table_without_autoincrement() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");
    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE bookmarks (
                id int PRIMARY KEY,
                title TEXT NOT NULL,
                url TEXT NOT NULL,
                notes TEXT,
                date_added TEXT NOT NULL
            );",
        )
        .unwrap();
    }

    let result = SqliteBookmarkRepository::open(&path);
    assert!(matches!(result, Err(RepoError::MissingAutoIncrement(_))));
}

#[test]
fn bootstrapped_table_keeps_deleted_ids_retired() {
    let conn = open_db_in_memory().unwrap();
    assert!(table_uses_autoincrement(&conn, "bookmarks").unwrap());

    let mut repo = SqliteBookmarkRepository::try_new(conn).unwrap();
    repo.add(&Bookmark::new("a", "http://a")).unwrap();
    let second = repo.add(&Bookmark::new("b", "http://b")).unwrap();
    assert!(repo.delete(second).unwrap());

    assert_eq!(repo.next_id().unwrap(), second + 1);
    assert_eq!(repo.add(&Bookmark::new("c", "http://c")).unwrap(), second + 1);
}
