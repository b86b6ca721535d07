use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use uuid::Uuid;

use crate::config::SupabaseConfig;
use crate::error::{AppError, AppResult};
use crate::models::{Account, Advertisement, Course, CourseFilter, Session};

/// 远端记录存储的访问端口。每个方法都可能独立失败，调用方必须自行降级
#[async_trait]
pub trait RecordStore: Send + Sync {
    fn is_configured(&self) -> bool;

    async fn get_session(&self) -> AppResult<Option<Session>>;

    async fn get_profile(&self, id: Uuid) -> AppResult<Option<Account>>;

    async fn query_courses(&self, filter: CourseFilter, limit: u32) -> AppResult<Vec<Course>>;

    async fn query_advertisements(&self, limit: u32) -> AppResult<Vec<Advertisement>>;
}

#[derive(Debug, Deserialize)]
struct AuthUser {
    id: Uuid,
    email: Option<String>,
    #[serde(default)]
    user_metadata: serde_json::Value,
}

/// Supabase REST 实现（auth/v1 读会话，rest/v1 走 PostgREST 过滤）
#[derive(Clone)]
pub struct SupabaseStore {
    client: Client,
    config: SupabaseConfig,
}

impl SupabaseStore {
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.url, table)
    }
}

#[async_trait]
impl RecordStore for SupabaseStore {
    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    async fn get_session(&self) -> AppResult<Option<Session>> {
        // 没有会话令牌就是匿名访客，不算失败
        let Some(access_token) = self.config.access_token.as_deref() else {
            return Ok(None);
        };

        let url = format!("{}/auth/v1/user", self.config.url);
        let response = self
            .client
            .get(&url)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            // 令牌过期或被吊销，视同无会话
            return Ok(None);
        }
        let response = response.error_for_status()?;

        let user: AuthUser = response.json().await?;
        let name = user.user_metadata["name"].as_str().map(|s| s.to_string());
        Ok(Some(Session {
            user_id: user.id,
            email: user.email.unwrap_or_default(),
            name,
        }))
    }

    async fn get_profile(&self, id: Uuid) -> AppResult<Option<Account>> {
        let url = self.rest_url("profiles");
        let response = self
            .client
            .get(&url)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
            .query(&[
                ("id", format!("eq.{id}")),
                ("select", "*".to_string()),
                ("limit", "1".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::NotFound(format!(
                "Profile lookup failed for {id}: {error_text}"
            )));
        }

        let mut rows: Vec<Account> = response.json().await?;
        Ok(rows.drain(..).next())
    }

    async fn query_courses(&self, filter: CourseFilter, limit: u32) -> AppResult<Vec<Course>> {
        let url = self.rest_url("courses");
        let mut query = vec![
            ("select".to_string(), "*".to_string()),
            ("order".to_string(), "total_views.desc".to_string()),
            ("limit".to_string(), limit.to_string()),
        ];
        if filter.published_only {
            query.push(("is_published".to_string(), "eq.true".to_string()));
        }

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
            .query(&query)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::QueryError(format!(
                "Course query failed: {error_text}"
            )));
        }

        let courses: Vec<Course> = response.json().await?;
        Ok(courses)
    }

    async fn query_advertisements(&self, limit: u32) -> AppResult<Vec<Advertisement>> {
        let url = self.rest_url("advertisements");
        let response = self
            .client
            .get(&url)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
            .query(&[
                ("select", "*".to_string()),
                ("order", "start_date.desc".to_string()),
                ("limit", limit.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::QueryError(format!(
                "Advertisement query failed: {error_text}"
            )));
        }

        let ads: Vec<Advertisement> = response.json().await?;
        Ok(ads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_store() {
        let store = SupabaseStore::new(SupabaseConfig::default());
        assert!(!store.is_configured());
    }

    #[test]
    fn test_configured_store() {
        let store = SupabaseStore::new(SupabaseConfig {
            url: "https://example.supabase.co".to_string(),
            anon_key: "anon_123".to_string(),
            access_token: None,
        });
        assert!(store.is_configured());
    }
}
