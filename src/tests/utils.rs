use crate::db::{init_db, Database};
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::ops::Deref;
use tempfile::TempDir;

/// A database file that lives in its own temp dir; both go away on drop.
pub struct TestDb {
    db: Database,
    _dir: TempDir,
}

impl Deref for TestDb {
    type Target = Database;

    fn deref(&self) -> &Database {
        &self.db
    }
}

/// App state over a temp database, removed on drop.
pub struct TestApp {
    app: AppState,
    _dir: TempDir,
}

impl Deref for TestApp {
    type Target = AppState;

    fn deref(&self) -> &AppState {
        &self.app
    }
}

fn fresh_db() -> (Database, TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = Database::new(dir.path().join("leads_test.sqlite3"));
    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    (db, dir)
}

/// Fresh database with the production schema applied.
pub fn init_test_db() -> TestDb {
    let (db, dir) = fresh_db();
    TestDb { db, _dir: dir }
}

pub fn init_test_app() -> TestApp {
    let (db, dir) = fresh_db();
    TestApp {
        app: AppState::new(db, 5),
        _dir: dir,
    }
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.as_bytes().to_vec()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
