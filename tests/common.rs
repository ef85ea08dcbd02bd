#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use clocklog::db::initialize::init_db;
use clocklog::db::pool::DbPool;
use tempfile::TempDir;

/// A scratch data directory plus a database path inside it.
pub struct TestEnv {
    pub dir: TempDir,
    pub db_path: String,
}

/// Create an isolated data dir; nothing from the real user profile is read.
pub fn setup_test_db(name: &str) -> TestEnv {
    let dir = tempfile::Builder::new()
        .prefix(name)
        .tempdir()
        .expect("create temp dir");
    let db_path = dir
        .path()
        .join(format!("{}.sqlite", name))
        .to_string_lossy()
        .to_string();
    TestEnv { dir, db_path }
}

impl TestEnv {
    /// The binary, pointed at this env's data dir and database.
    pub fn cli(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("clocklog");
        cmd.env("XDG_DATA_HOME", self.dir.path())
            .args(["--db", &self.db_path]);
        cmd
    }

    /// The binary with only `XDG_DATA_HOME` set, so the default database location is used.
    pub fn cli_default_location(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("clocklog");
        cmd.env("XDG_DATA_HOME", self.dir.path());
        cmd
    }

    /// Write `clocklog.conf` into this env's data dir.
    pub fn write_config(&self, yaml: &str) {
        let dir = self.dir.path().join("clocklog");
        std::fs::create_dir_all(&dir).expect("create config dir");
        std::fs::write(dir.join("clocklog.conf"), yaml).expect("write config");
    }

    pub fn pool(&self) -> DbPool {
        let pool = DbPool::new(&self.db_path).expect("open db");
        init_db(&pool.conn).expect("init db");
        pool
    }
}

/// An initialized in-memory store.
pub fn memory_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid test timestamp")
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}
