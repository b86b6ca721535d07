use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, ToSchema,
)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum AccountTier {
    #[default]
    Basic,
    Premium,
    Full,
}

impl AccountTier {
    pub const ALL: [AccountTier; 3] = [AccountTier::Basic, AccountTier::Premium, AccountTier::Full];

    /// 未知取值一律回退 basic，绝不放大权限
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "premium" => AccountTier::Premium,
            "full" => AccountTier::Full,
            _ => AccountTier::Basic,
        }
    }
}

impl From<String> for AccountTier {
    fn from(value: String) -> Self {
        AccountTier::parse(&value)
    }
}

impl std::fmt::Display for AccountTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountTier::Basic => write!(f, "basic"),
            AccountTier::Premium => write!(f, "premium"),
            AccountTier::Full => write!(f, "full"),
        }
    }
}

/// 认证子系统持有的会话级身份，本服务只读
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Session {
    pub user_id: Uuid,
    pub email: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub account_type: AccountTier,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// 档案读取失败时由会话身份合成的最小账户，等级一律回退 basic
    pub fn synthesized_from(session: &Session) -> Self {
        let name = match &session.name {
            Some(n) if !n.is_empty() => n.clone(),
            _ => {
                let local = session.email.split('@').next().unwrap_or_default();
                if local.is_empty() {
                    "Instructor".to_string()
                } else {
                    local.to_string()
                }
            }
        };
        let now = Utc::now();
        Self {
            id: session.user_id,
            email: session.email.clone(),
            name,
            avatar_url: None,
            account_type: AccountTier::Basic,
            created_at: now,
            updated_at: now,
        }
    }
}
