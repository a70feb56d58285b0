// tests/support/builders.rs
use chrono::Duration;

use scholarly_core::domain::article::*;
use scholarly_core::domain::user::{Email, PasswordHash, Role, User, UserId, Username};

use super::mocks::time::fixed_now;

pub struct ArticleBuilder {
    id: i64,
    title: String,
    abstract_text: String,
    keywords: Vec<String>,
    author_id: i64,
    status: ArticleStatus,
    category: Category,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Article".into(),
            abstract_text: "Test abstract".into(),
            keywords: vec![],
            author_id: 1,
            status: ArticleStatus::Pending,
            category: Category::Other,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn abstract_text(mut self, abstract_text: impl Into<String>) -> Self {
        self.abstract_text = abstract_text.into();
        self
    }

    pub fn keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| (*k).to_owned()).collect();
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn approved(mut self) -> Self {
        self.status = ArticleStatus::Approved;
        self
    }

    pub fn rejected(mut self) -> Self {
        self.status = ArticleStatus::Rejected;
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn build(self) -> Article {
        // Stagger creation times by id so ordering stays deterministic.
        let created_at = fixed_now() + Duration::seconds(self.id);
        let approved = self.status == ArticleStatus::Approved;
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            content: ArticleContent::new("Test body").unwrap(),
            abstract_text: AbstractText::new(self.abstract_text).unwrap(),
            keywords: self.keywords,
            author_id: UserId::new(self.author_id).unwrap(),
            status: self.status,
            rejection_reason: String::new(),
            approved_by: approved.then(|| UserId::new(99).unwrap()),
            approved_at: approved.then(fixed_now),
            category: self.category,
            read_time: 1,
            views: 0,
            likes: vec![],
            created_at,
            updated_at: created_at,
        }
    }
}

pub struct UserBuilder {
    id: i64,
    username: String,
    email: Option<String>,
    role: Role,
}

impl UserBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            username: "contributor".into(),
            email: None,
            role: Role::User,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn admin(mut self) -> Self {
        self.role = Role::Admin;
        self
    }

    pub fn build(self) -> User {
        let email = self
            .email
            .unwrap_or_else(|| format!("{}@example.edu", self.username));
        User {
            id: UserId::new(self.id).unwrap(),
            username: Username::new(self.username).unwrap(),
            email: Email::new(email).unwrap(),
            password_hash: PasswordHash::new("hash").unwrap(),
            role: self.role,
            institution: "Test University".into(),
            bio: String::new(),
            created_at: fixed_now(),
        }
    }
}
