use sqlx::postgres::{PgArguments, PgPoolOptions, PgRow};
use sqlx::{FromRow, PgPool};

use crate::config::Config;

/// Builds `PgArguments` from positional values, bound in order to `$1, $2, ...`.
macro_rules! pg_args {
    ($($value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut args = sqlx::postgres::PgArguments::default();
        $( sqlx::Arguments::add(&mut args, $value); )*
        args
    }};
}

#[cfg(test)]
pub mod memory;
pub mod store;

pub use store::{DepartmentStore, EmployeeStore, PgStore};

/// Runs one parameterized statement per call.
///
/// Every call checks out its own connection and hands it back to the pool when
/// the guard is dropped, whether the statement succeeded or not. Errors are
/// returned untouched; retrying or mapping them is the caller's business.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn connect(config: &Config) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;
        Ok(Database { pool })
    }

    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }

    /// SELECT returning every matching row; no match is an empty vec.
    pub async fn query_many<T>(&self, sql: &str, params: PgArguments) -> Result<Vec<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let mut conn = self.pool.acquire().await?;
        sqlx::query_as_with::<_, T, _>(sql, params)
            .fetch_all(&mut *conn)
            .await
    }

    /// SELECT expected to match at most one row.
    pub async fn query_one<T>(&self, sql: &str, params: PgArguments) -> Result<Option<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let mut conn = self.pool.acquire().await?;
        sqlx::query_as_with::<_, T, _>(sql, params)
            .fetch_optional(&mut *conn)
            .await
    }

    /// INSERT/UPDATE without projection; returns the number of rows affected.
    pub async fn execute(&self, sql: &str, params: PgArguments) -> Result<u64, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query_with(sql, params).execute(&mut *conn).await?;
        Ok(result.rows_affected())
    }

    /// Statement producing a single value, e.g. `INSERT ... RETURNING id`.
    pub async fn execute_scalar<T>(&self, sql: &str, params: PgArguments) -> Result<T, sqlx::Error>
    where
        (T,): for<'r> FromRow<'r, PgRow>,
        T: Send + Unpin,
    {
        let mut conn = self.pool.acquire().await?;
        sqlx::query_scalar_with::<_, T, _>(sql, params)
            .fetch_one(&mut *conn)
            .await
    }
}
