use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use utoipa::ToSchema;

/// 数量上限。无限一律用独立哨兵表达，避免调用方拿大数做 `count < limit` 比较踩坑
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Finite(u32),
    Unlimited,
}

impl Limit {
    pub fn allows(&self, current: u32) -> bool {
        match self {
            Limit::Unlimited => true,
            Limit::Finite(max) => current < *max,
        }
    }

    pub fn is_unlimited(&self) -> bool {
        matches!(self, Limit::Unlimited)
    }
}

impl PartialOrd for Limit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Limit {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Limit::Unlimited, Limit::Unlimited) => Ordering::Equal,
            (Limit::Unlimited, Limit::Finite(_)) => Ordering::Greater,
            (Limit::Finite(_), Limit::Unlimited) => Ordering::Less,
            (Limit::Finite(a), Limit::Finite(b)) => a.cmp(b),
        }
    }
}

// 有限值序列化为数字，无限序列化为 "unlimited"
impl Serialize for Limit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Limit::Finite(max) => serializer.serialize_u32(*max),
            Limit::Unlimited => serializer.serialize_str("unlimited"),
        }
    }
}

impl std::fmt::Display for Limit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Limit::Finite(max) => write!(f, "{max}"),
            Limit::Unlimited => write!(f, "unlimited"),
        }
    }
}

/// 由订阅等级推导出的能力集合，纯派生数据
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct EntitlementSet {
    #[schema(value_type = String, example = "unlimited")]
    pub max_courses: Limit,
    #[schema(value_type = String, example = 100)]
    pub max_videos_per_course: Limit,
    pub analytics: bool,
    pub social_integration: bool,
    pub ai_insights: bool,
    pub networking: bool,
    pub custom_branding: bool,
}

impl EntitlementSet {
    pub fn allows_new_course(&self, current_count: u32) -> bool {
        self.max_courses.allows(current_count)
    }

    pub fn allows_new_video(&self, current_count: u32) -> bool {
        self.max_videos_per_course.allows(current_count)
    }
}
