// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{Email, NewUser, PasswordHash, Role, User, UserId, UserRepository, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const USER_COLUMNS: &str =
    "id, username, email, password_hash, role, institution, bio, created_at";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    role: String,
    institution: String,
    bio: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            email: Email::new(row.email)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            role: row.role.parse()?,
            institution: row.institution,
            bio: row.bio,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert_if_absent(&self, new_user: NewUser) -> DomainResult<Option<User>> {
        let NewUser {
            username,
            email,
            password_hash,
            role,
            institution,
            bio,
            created_at,
        } = new_user;

        // ON CONFLICT DO NOTHING makes the existence check and the
        // insert a single atomic statement.
        let sql = format!(
            "INSERT INTO users (username, email, password_hash, role, institution, bio, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (email) DO NOTHING
             RETURNING {USER_COLUMNS}"
        );

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(username.as_str())
            .bind(email.as_str())
            .bind(password_hash.as_str())
            .bind(role.as_str())
            .bind(institution)
            .bind(bio)
            .bind(created_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>> {
        let raw_ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ANY($1)");
        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .bind(raw_ids)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn list_with_role(&self, role: Role) -> DomainResult<Vec<User>> {
        let sql =
            format!("SELECT {USER_COLUMNS} FROM users WHERE role = $1 ORDER BY created_at DESC");
        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .bind(role.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn count_with_role(&self, role: Role) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE role = $1")
            .bind(role.as_str())
            .fetch_one(&self.pool)
            .await
            .map(|count| count as u64)
            .map_err(map_sqlx)
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("user not found".into()));
        }
        Ok(())
    }
}
