//! Embedded schema migrations applied at startup.

use diesel::pg::PgConnection;
use diesel::Connection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Migration failure with the step that failed.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// The database could not be reached.
    #[error("failed to connect for migrations: {message}")]
    Connect { message: String },
    /// A migration script failed.
    #[error("failed to apply migrations: {message}")]
    Apply { message: String },
}

/// Apply pending migrations over a blocking connection and return how many
/// ran.
///
/// Call from a blocking context such as `tokio::task::spawn_blocking`.
///
/// # Errors
///
/// [`MigrationError::Connect`] when `database_url` cannot be reached and
/// [`MigrationError::Apply`] when a script fails.
pub fn run_pending_migrations(database_url: &str) -> Result<usize, MigrationError> {
    let mut connection =
        PgConnection::establish(database_url).map_err(|err| MigrationError::Connect {
            message: err.to_string(),
        })?;
    let applied = connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?;
    Ok(applied.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::migration::MigrationSource;

    #[test]
    fn bundles_the_initial_schema() {
        let migrations: Vec<_> =
            MigrationSource::<diesel::pg::Pg>::migrations(&MIGRATIONS).expect("embedded");
        assert_eq!(migrations.len(), 1);
    }
}
