use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleStatus;
use crate::domain::user::{Role, UserId};

/// Caller identity as the policy layer sees it: id plus role, nothing
/// about credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub id: UserId,
    pub role: Role,
}

impl Caller {
    pub fn new(id: UserId, role: Role) -> Self {
        Self { id, role }
    }
}

/// An article is readable when it is approved, or when the caller is its
/// author. A failed check must surface as "not found" so the existence
/// of unapproved or foreign articles is never revealed.
pub struct CanReadArticleSpec<'a> {
    article: &'a Article,
    caller: Option<Caller>,
}

impl<'a> CanReadArticleSpec<'a> {
    pub fn new(article: &'a Article, caller: Option<Caller>) -> Self {
        Self { article, caller }
    }

    pub fn is_satisfied(&self) -> bool {
        if self.article.status == ArticleStatus::Approved {
            return true;
        }
        self.caller
            .is_some_and(|caller| caller.id == self.article.author_id)
    }
}

/// Status transitions (approve/reject) are reserved to administrators.
pub fn can_modify_status(caller: Caller) -> bool {
    caller.role.is_admin()
}

pub struct CanDeleteArticleSpec<'a> {
    article: &'a Article,
    caller: Caller,
}

impl<'a> CanDeleteArticleSpec<'a> {
    pub fn new(article: &'a Article, caller: Caller) -> Self {
        Self { article, caller }
    }

    pub fn is_satisfied(&self) -> bool {
        self.caller.role.is_admin() || self.caller.id == self.article.author_id
    }
}
