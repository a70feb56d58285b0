use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

pub const MAX_TITLE_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if trimmed.chars().count() > MAX_TITLE_CHARS {
            return Err(DomainError::Validation(format!(
                "title cannot exceed {MAX_TITLE_CHARS} characters"
            )));
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleTitle> for String {
    fn from(value: ArticleTitle) -> Self {
        value.0
    }
}

pub const MAX_ABSTRACT_CHARS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbstractText(String);

impl AbstractText {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("abstract cannot be empty".into()));
        }
        if value.chars().count() > MAX_ABSTRACT_CHARS {
            return Err(DomainError::Validation(format!(
                "abstract cannot exceed {MAX_ABSTRACT_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<AbstractText> for String {
    fn from(value: AbstractText) -> Self {
        value.0
    }
}

const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent(String);

impl ArticleContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("content cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Estimated reading time in whole minutes, derived from the visible
    /// word count with markup tags stripped. Always at least one minute.
    pub fn read_time_minutes(&self) -> i32 {
        let words = strip_markup(&self.0).split_whitespace().count();
        words.div_ceil(WORDS_PER_MINUTE).max(1) as i32
    }
}

impl From<ArticleContent> for String {
    fn from(value: ArticleContent) -> Self {
        value.0
    }
}

fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Pending,
    Approved,
    Rejected,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Pending => "pending",
            ArticleStatus::Approved => "approved",
            ArticleStatus::Rejected => "rejected",
        }
    }
}

impl Default for ArticleStatus {
    fn default() -> Self {
        ArticleStatus::Pending
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ArticleStatus::Pending),
            "approved" => Ok(ArticleStatus::Approved),
            "rejected" => Ok(ArticleStatus::Rejected),
            other => Err(DomainError::Validation(format!(
                "unknown article status '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum Category {
    #[serde(rename = "Education Technology")]
    EducationTechnology,
    #[serde(rename = "Curriculum Development")]
    CurriculumDevelopment,
    #[serde(rename = "Teaching Methods")]
    TeachingMethods,
    #[serde(rename = "Student Assessment")]
    StudentAssessment,
    #[serde(rename = "Educational Psychology")]
    EducationalPsychology,
    #[serde(rename = "Special Education")]
    SpecialEducation,
    #[serde(rename = "Higher Education")]
    HigherEducation,
    #[serde(rename = "Early Childhood Education")]
    EarlyChildhoodEducation,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::EducationTechnology => "Education Technology",
            Category::CurriculumDevelopment => "Curriculum Development",
            Category::TeachingMethods => "Teaching Methods",
            Category::StudentAssessment => "Student Assessment",
            Category::EducationalPsychology => "Educational Psychology",
            Category::SpecialEducation => "Special Education",
            Category::HigherEducation => "Higher Education",
            Category::EarlyChildhoodEducation => "Early Childhood Education",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Education Technology" => Ok(Category::EducationTechnology),
            "Curriculum Development" => Ok(Category::CurriculumDevelopment),
            "Teaching Methods" => Ok(Category::TeachingMethods),
            "Student Assessment" => Ok(Category::StudentAssessment),
            "Educational Psychology" => Ok(Category::EducationalPsychology),
            "Special Education" => Ok(Category::SpecialEducation),
            "Higher Education" => Ok(Category::HigherEducation),
            "Early Childhood Education" => Ok(Category::EarlyChildhoodEducation),
            "Other" => Ok(Category::Other),
            other => Err(DomainError::Validation(format!(
                "unknown category '{other}'"
            ))),
        }
    }
}
