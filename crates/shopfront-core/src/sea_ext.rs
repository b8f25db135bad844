use sea_orm::{DbErr, SqlErr};

/// Classification of driver errors that map to a domain error instead of a 500.
pub trait DbErrExt {
    fn is_foreign_key_violation(&self) -> bool;
}

impl DbErrExt for DbErr {
    fn is_foreign_key_violation(&self) -> bool {
        matches!(self.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
    }
}
