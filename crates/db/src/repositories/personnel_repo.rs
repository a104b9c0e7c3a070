//! Repository for the `personnel` table.

use sqlx::PgPool;

use crate::models::personnel::Personnel;

const COLUMNS: &str = "userid, username, email, department, designation, location, created_at";

/// Read access to personnel.
pub struct PersonnelRepo;

impl PersonnelRepo {
    /// List everyone ordered by user id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Personnel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM personnel ORDER BY userid");
        sqlx::query_as::<_, Personnel>(&query).fetch_all(pool).await
    }

    /// Find a person by user id.
    pub async fn find_by_id(pool: &PgPool, userid: &str) -> Result<Option<Personnel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM personnel WHERE userid = $1");
        sqlx::query_as::<_, Personnel>(&query)
            .bind(userid)
            .fetch_optional(pool)
            .await
    }
}
