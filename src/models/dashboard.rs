use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Account, Advertisement, Course};

/// 当前展示数据的来源
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DataMode {
    Live,
    Demo,
}

impl std::fmt::Display for DataMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataMode::Live => write!(f, "live"),
            DataMode::Demo => write!(f, "demo"),
        }
    }
}

/// 单条可关闭的提示，从不阻塞渲染
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ErrorNotice {
    pub code: String,
    pub message: String,
}

impl ErrorNotice {
    pub fn record_query_failed(message: impl Into<String>) -> Self {
        Self {
            code: "RECORD_QUERY_FAILED".to_string(),
            message: message.into(),
        }
    }
}

/// 仪表盘统计快照，按需重算、从不持久化
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct DashboardStats {
    pub total_courses: u64,
    pub total_videos: u64,
    pub total_views: u64,
    pub total_students: u64,
    pub total_revenue: f64,
    pub monthly_revenue: f64,
    pub completion_rate: f64,
    pub avg_rating: f64,
}

/// 广告侧统计，同一次调用共用一个 now
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct AdStats {
    pub active_count: u64,
    pub total_impressions: u64,
    pub total_clicks: u64,
    pub estimated_monthly_revenue: f64,
}

/// 带版本号的仪表盘状态，只有最新一代请求的结果才允许写入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardState {
    pub mode: DataMode,
    pub account: Option<Account>,
    pub courses: Vec<Course>,
    pub advertisements: Vec<Advertisement>,
    pub stats: DashboardStats,
    pub ad_stats: AdStats,
    pub error_notice: Option<ErrorNotice>,
    pub generation: u64,
    pub refreshed_at: DateTime<Utc>,
}
