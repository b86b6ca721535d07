use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseLevel::Beginner => write!(f, "beginner"),
            CourseLevel::Intermediate => write!(f, "intermediate"),
            CourseLevel::Advanced => write!(f, "advanced"),
        }
    }
}

/// 课程查询过滤条件
#[derive(Debug, Clone, Copy, Default)]
pub struct CourseFilter {
    pub published_only: bool,
}

/// 课程记录，实时数据与演示数据共用同一结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub instructor_id: Uuid,
    pub price: f64,
    /// 时长（分钟）
    pub duration: u32,
    pub level: CourseLevel,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_published: bool,
    pub total_views: u64,
    pub rating: f64,
    pub total_ratings: u32,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}
