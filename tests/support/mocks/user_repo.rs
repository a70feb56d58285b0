// tests/support/mocks/user_repo.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use scholarly_core::domain::errors::{DomainError, DomainResult};
use scholarly_core::domain::user::{NewUser, Role, User, UserId, UserRepository};

pub struct InMemoryUserRepo {
    inner: Mutex<HashMap<i64, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn seeded(users: Vec<User>) -> Self {
        let next = users.iter().map(|u| i64::from(u.id)).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(users.into_iter().map(|u| (i64::from(u.id), u)).collect()),
            next_id: AtomicI64::new(next),
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.inner.lock().unwrap().contains_key(&id)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert_if_absent(&self, new_user: NewUser) -> DomainResult<Option<User>> {
        // The held lock makes the existence check and insert one atomic
        // step, mirroring ON CONFLICT DO NOTHING.
        let mut map = self.inner.lock().unwrap();
        if map
            .values()
            .any(|u| u.email.as_str() == new_user.email.as_str())
        {
            return Ok(None);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id: UserId::new(id)?,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            institution: new_user.institution,
            bio: new_user.bio,
            created_at: new_user.created_at,
        };
        map.insert(id, user.clone());
        Ok(Some(user))
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.inner.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>> {
        let map = self.inner.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| map.get(&i64::from(*id)).cloned())
            .collect())
    }

    async fn list_with_role(&self, role: Role) -> DomainResult<Vec<User>> {
        let map = self.inner.lock().unwrap();
        let mut users: Vec<User> = map.values().filter(|u| u.role == role).cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }

    async fn count_with_role(&self, role: Role) -> DomainResult<u64> {
        let map = self.inner.lock().unwrap();
        Ok(map.values().filter(|u| u.role == role).count() as u64)
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let mut map = self.inner.lock().unwrap();
        map.remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("user not found".into()))
    }
}
