//! Shared helper functions for SQLite repositories.

use sqlx::error::ErrorKind;

use crate::db::{CompletedFlag, DbError};

/// Map a SQLx error onto the storage-agnostic error type.
///
/// Integrity failures become `Constraint`, IO and pool failures become
/// `Connection`, everything else is a generic `Database` error.
pub fn map_sqlx_error(err: sqlx::Error) -> DbError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation => DbError::Constraint {
                message: db_err.message().to_string(),
            },
            _ => DbError::Database {
                message: err.to_string(),
            },
        },
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => DbError::Connection {
            message: err.to_string(),
        },
        _ => DbError::Database {
            message: err.to_string(),
        },
    }
}

/// Decode the `completed` column into the domain flag.
pub fn decode_completed(raw: &str) -> Result<bool, DbError> {
    raw.parse::<CompletedFlag>()
        .map(bool::from)
        .map_err(|message| DbError::InvalidData {
            message,
            help: "Todo_Item.completed must be 'yes' or 'no'".to_string(),
        })
}

/// Encode the domain flag for the `completed` column.
pub fn encode_completed(completed: bool) -> String {
    CompletedFlag::from(completed).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_completed_known_values() {
        assert!(decode_completed("yes").unwrap());
        assert!(!decode_completed("no").unwrap());
    }

    #[test]
    fn test_decode_completed_unknown_value_is_invalid_data() {
        let err = decode_completed("true").unwrap_err();
        assert!(matches!(err, DbError::InvalidData { .. }));
    }

    #[test]
    fn test_encode_completed() {
        assert_eq!(encode_completed(true), "yes");
        assert_eq!(encode_completed(false), "no");
    }

    #[test]
    fn test_pool_errors_map_to_connection() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            DbError::Connection { .. }
        ));
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolClosed),
            DbError::Connection { .. }
        ));
    }

    #[test]
    fn test_row_not_found_maps_to_database() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            DbError::Database { .. }
        ));
    }
}
