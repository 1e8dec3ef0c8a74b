//! 一時ディレクトリ上の SQLite を使うテスト用データベース

use pushie::config::Config;
use pushie::db::{connect_and_migrate, create_db_pool};
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

pub struct TestDatabase {
    _dir: TempDir,
    pub config: Config,
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    pub async fn new() -> Self {
        let (dir, config) = temp_config();
        let connection = connect_and_migrate(&config)
            .await
            .expect("connect and migrate test database");

        Self {
            _dir: dir,
            config,
            connection,
        }
    }

    /// マイグレーションを実行していない空のデータベース
    pub async fn without_migrations() -> Self {
        let (dir, config) = temp_config();
        let connection = create_db_pool(&config)
            .await
            .expect("connect test database");

        Self {
            _dir: dir,
            config,
            connection,
        }
    }

    /// 同じファイルに新しい接続を張る（プロセス再起動の代わり）
    pub async fn reopen(&self) -> DatabaseConnection {
        connect_and_migrate(&self.config)
            .await
            .expect("reopen test database")
    }
}

fn temp_config() -> (TempDir, Config) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let database_url = format!("sqlite://{}?mode=rwc", dir.path().join("prefs.db").display());
    let config = Config::new(
        "http://127.0.0.1",
        database_url,
        "pushie-test".to_string(),
    )
    .expect("valid test config");
    (dir, config)
}
