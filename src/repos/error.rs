/**
 * Responsibility
 * - repo が上位に伝える意味の定義
 */
use thiserror::Error;

// SQLSTATE foreign_key_violation
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("db error")]
    Db(#[from] sqlx::Error),
    #[error("referenced row does not exist")]
    ForeignKey,
}

impl RepoError {
    pub fn from_sqlx(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(dbe) = &e
            && dbe.code().as_deref() == Some(FOREIGN_KEY_VIOLATION)
        {
            return RepoError::ForeignKey;
        }
        RepoError::Db(e)
    }
}
