use async_trait::async_trait;
use blockscope_application::ports::{StatusHistoryReader, StatusRecorder};
use blockscope_domain::{
    CycleId, CycleTimestamp, DomainError, LatestStatus, MatchRecord, MatchStatus, OwnerCounts,
    OwnerSummary,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{debug, error, instrument};

type MatchRow = (i64, String, String, String, String);
type CountsRow = (i64, String, String, String, String, String);

/// Append-only SQLite store for the status history.
///
/// Only INSERT and SELECT statements are issued.
pub struct SqliteStatusRepository {
    pool: SqlitePool,
}

impl SqliteStatusRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn db_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
        move |e| {
            error!(error = %e, "{}", context);
            DomainError::DatabaseError(e.to_string())
        }
    }

    fn parse_timestamp(raw: &str) -> Result<CycleTimestamp, DomainError> {
        CycleTimestamp::parse(raw)
            .ok_or_else(|| DomainError::DatabaseError(format!("Malformed timestamp '{}'", raw)))
    }

    fn parse_status(raw: &str) -> Result<MatchStatus, DomainError> {
        raw.parse::<MatchStatus>()
            .map_err(|_| DomainError::DatabaseError(format!("Unknown status '{}'", raw)))
    }

    fn parse_count(raw: &str) -> Result<u128, DomainError> {
        raw.parse::<u128>()
            .map_err(|_| DomainError::DatabaseError(format!("Malformed count '{}'", raw)))
    }

    fn row_to_record(row: MatchRow) -> Result<MatchRecord, DomainError> {
        let (cycle_id, timestamp, owner_code, address, status) = row;

        Ok(MatchRecord {
            cycle_id: CycleId(cycle_id),
            timestamp: Self::parse_timestamp(&timestamp)?,
            owner_code: Arc::from(owner_code.as_str()),
            address,
            status: Self::parse_status(&status)?,
        })
    }

    fn row_to_summary(row: CountsRow) -> Result<OwnerSummary, DomainError> {
        let (cycle_id, timestamp, owner_code, total, blocked, not_blocked) = row;

        Ok(OwnerSummary {
            cycle_id: CycleId(cycle_id),
            timestamp: Self::parse_timestamp(&timestamp)?,
            counts: OwnerCounts {
                owner_code: Arc::from(owner_code.as_str()),
                total_addresses: Self::parse_count(&total)?,
                blocked_count: Self::parse_count(&blocked)?,
                not_blocked_count: Self::parse_count(&not_blocked)?,
            },
        })
    }
}

#[async_trait]
impl StatusRecorder for SqliteStatusRepository {
    #[instrument(skip(self))]
    async fn begin_cycle(&self, timestamp: &CycleTimestamp) -> Result<CycleId, DomainError> {
        let result = sqlx::query("INSERT INTO cycles (timestamp) VALUES (?)")
            .bind(timestamp.as_str())
            .execute(&self.pool)
            .await
            .map_err(Self::db_error("Failed to open cycle"))?;

        let id = CycleId(result.last_insert_rowid());
        debug!(cycle_id = %id, "Cycle opened");
        Ok(id)
    }

    #[instrument(skip(self, record), fields(owner = %record.owner_code, address = %record.address))]
    async fn append(&self, record: &MatchRecord) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO ip_status (cycle_id, timestamp, owner_code, ip_address, status)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(record.cycle_id.0)
        .bind(record.timestamp.as_str())
        .bind(record.owner_code.as_ref())
        .bind(&record.address)
        .bind(record.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(Self::db_error("Failed to append match record"))?;

        Ok(())
    }

    #[instrument(skip(self, counts), fields(owner = %counts.owner_code))]
    async fn record_counts(
        &self,
        cycle_id: CycleId,
        timestamp: &CycleTimestamp,
        counts: &OwnerCounts,
    ) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO owner_counts
                (cycle_id, timestamp, owner_code, total_addresses, blocked_count, not_blocked_count)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(cycle_id.0)
        .bind(timestamp.as_str())
        .bind(counts.owner_code.as_ref())
        .bind(counts.total_addresses.to_string())
        .bind(counts.blocked_count.to_string())
        .bind(counts.not_blocked_count.to_string())
        .execute(&self.pool)
        .await
        .map_err(Self::db_error("Failed to append owner counts"))?;

        Ok(())
    }
}

#[async_trait]
impl StatusHistoryReader for SqliteStatusRepository {
    #[instrument(skip(self))]
    async fn latest_status(&self) -> Result<Vec<LatestStatus>, DomainError> {
        let rows = sqlx::query_as::<_, (String, String, String)>(
            "SELECT s.owner_code, s.ip_address, s.status
             FROM ip_status s
             JOIN (SELECT owner_code, MAX(cycle_id) AS cycle_id
                   FROM (SELECT owner_code, cycle_id FROM owner_counts
                         UNION ALL
                         SELECT owner_code, cycle_id FROM ip_status)
                   GROUP BY owner_code) latest
               ON s.owner_code = latest.owner_code AND s.cycle_id = latest.cycle_id
             ORDER BY s.owner_code, s.id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Self::db_error("Failed to query latest status"))?;

        rows.into_iter()
            .map(|(owner_code, address, status)| {
                Ok(LatestStatus {
                    owner_code,
                    address,
                    status: Self::parse_status(&status)?,
                })
            })
            .collect()
    }

    #[instrument(skip(self))]
    async fn owner_summaries(&self) -> Result<Vec<OwnerSummary>, DomainError> {
        let rows = sqlx::query_as::<_, CountsRow>(
            "SELECT c.cycle_id, c.timestamp, c.owner_code,
                    c.total_addresses, c.blocked_count, c.not_blocked_count
             FROM owner_counts c
             JOIN (SELECT owner_code, MAX(id) AS id
                   FROM owner_counts
                   GROUP BY owner_code) latest
               ON c.id = latest.id
             ORDER BY c.owner_code",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Self::db_error("Failed to query owner summaries"))?;

        rows.into_iter().map(Self::row_to_summary).collect()
    }

    #[instrument(skip(self))]
    async fn history(
        &self,
        owner_code: &str,
        address: &str,
    ) -> Result<Vec<MatchRecord>, DomainError> {
        let rows = sqlx::query_as::<_, MatchRow>(
            "SELECT cycle_id, timestamp, owner_code, ip_address, status
             FROM ip_status
             WHERE owner_code = ? AND ip_address = ?
             ORDER BY timestamp, id",
        )
        .bind(owner_code)
        .bind(address)
        .fetch_all(&self.pool)
        .await
        .map_err(Self::db_error("Failed to query address history"))?;

        rows.into_iter().map(Self::row_to_record).collect()
    }

    #[instrument(skip(self))]
    async fn record_count(&self) -> Result<u64, DomainError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM ip_status")
            .fetch_one(&self.pool)
            .await
            .map_err(Self::db_error("Failed to count match records"))?;

        Ok(count.0 as u64)
    }
}
