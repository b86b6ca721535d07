use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AdPlacement {
    Banner,
    Sidebar,
    Content,
    Footer,
}

/// 投放状态由日期区间推导，不落库、不可自由设置
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AdStatus {
    Active,
    Pending,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Advertisement {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    pub target_url: String,
    pub price_per_day: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub impressions: u64,
    pub clicks: u64,
    pub category: String,
    pub placement: AdPlacement,
}

impl Advertisement {
    /// 同一次聚合必须传入同一个 now，避免边界上状态闪变
    pub fn status_at(&self, now: DateTime<Utc>) -> AdStatus {
        if now < self.start_date {
            AdStatus::Pending
        } else if now > self.end_date {
            AdStatus::Expired
        } else {
            AdStatus::Active
        }
    }

    pub fn to_response(&self, now: DateTime<Utc>) -> AdvertisementResponse {
        AdvertisementResponse {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            company: self.company.clone(),
            target_url: self.target_url.clone(),
            price_per_day: self.price_per_day,
            start_date: self.start_date,
            end_date: self.end_date,
            impressions: self.impressions,
            clicks: self.clicks,
            category: self.category.clone(),
            placement: self.placement,
            status: self.status_at(now),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdvertisementResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub company: Option<String>,
    pub target_url: String,
    pub price_per_day: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub impressions: u64,
    pub clicks: u64,
    pub category: String,
    pub placement: AdPlacement,
    pub status: AdStatus,
}
