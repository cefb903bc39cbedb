use blockscope_infrastructure::repositories::SqliteStatusRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub status: Arc<SqliteStatusRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            status: Arc::new(SqliteStatusRepository::new(pool)),
        }
    }
}
