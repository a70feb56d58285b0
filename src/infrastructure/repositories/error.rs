use crate::domain::errors::DomainError;

const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_ARTICLE_STATUS_CHECK: &str = "articles_status_chk";
const CNT_ARTICLE_APPROVAL_CHECK: &str = "articles_approval_requires_fields_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_USER_EMAIL => DomainError::Conflict("email already exists".into()),
                    CNT_ARTICLE_STATUS_CHECK => {
                        DomainError::Validation("unknown article status".into())
                    }
                    CNT_ARTICLE_APPROVAL_CHECK => DomainError::Validation(
                        "approved articles require approver and timestamp".into(),
                    ),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
