use crate::models::{AccountTier, EntitlementSet, Limit};

/// 等级 → 能力集合的查找表，启动时构建一次，之后只读
#[derive(Debug, Clone)]
pub struct EntitlementService {
    table: [(AccountTier, EntitlementSet); 3],
}

impl EntitlementService {
    pub fn new() -> Self {
        let table = [
            (
                AccountTier::Basic,
                EntitlementSet {
                    max_courses: Limit::Finite(3),
                    max_videos_per_course: Limit::Finite(10),
                    analytics: false,
                    social_integration: false,
                    ai_insights: false,
                    networking: false,
                    custom_branding: false,
                },
            ),
            (
                AccountTier::Premium,
                EntitlementSet {
                    max_courses: Limit::Finite(25),
                    max_videos_per_course: Limit::Finite(100),
                    analytics: true,
                    social_integration: true,
                    ai_insights: false,
                    networking: true,
                    custom_branding: false,
                },
            ),
            (
                AccountTier::Full,
                EntitlementSet {
                    max_courses: Limit::Unlimited,
                    max_videos_per_course: Limit::Unlimited,
                    analytics: true,
                    social_integration: true,
                    ai_insights: true,
                    networking: true,
                    custom_branding: true,
                },
            ),
        ];
        Self { table }
    }

    /// 全函数：任何等级都解析出确定的能力集合，查不到按 basic 兜底
    pub fn resolve(&self, tier: AccountTier) -> EntitlementSet {
        self.table
            .iter()
            .find(|(t, _)| *t == tier)
            .map(|(_, set)| *set)
            .unwrap_or(self.table[0].1)
    }

    pub fn table(&self) -> &[(AccountTier, EntitlementSet)] {
        &self.table
    }
}

impl Default for EntitlementService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_deterministic() {
        let service = EntitlementService::new();
        for tier in AccountTier::ALL {
            assert_eq!(service.resolve(tier), service.resolve(tier));
        }
    }

    #[test]
    fn test_table_is_monotonic() {
        let service = EntitlementService::new();
        for pair in service.table().windows(2) {
            let (lower_tier, lower) = pair[0];
            let (higher_tier, higher) = pair[1];
            assert!(lower_tier < higher_tier);
            assert!(lower.max_courses <= higher.max_courses);
            assert!(lower.max_videos_per_course <= higher.max_videos_per_course);
            // 低等级已开启的能力不允许在高等级消失
            assert!(!lower.analytics || higher.analytics);
            assert!(!lower.social_integration || higher.social_integration);
            assert!(!lower.ai_insights || higher.ai_insights);
            assert!(!lower.networking || higher.networking);
            assert!(!lower.custom_branding || higher.custom_branding);
        }
    }

    #[test]
    fn test_unknown_tier_falls_back_to_basic() {
        let service = EntitlementService::new();
        let basic = service.resolve(AccountTier::Basic);
        let full = service.resolve(AccountTier::Full);
        for raw in ["", "gold", "FULL_ACCESS", "premium+", "42"] {
            let resolved = service.resolve(AccountTier::parse(raw));
            assert_eq!(resolved, basic);
            assert_ne!(resolved, full);
        }
    }

    #[test]
    fn test_known_tier_strings_parse() {
        assert_eq!(AccountTier::parse("basic"), AccountTier::Basic);
        assert_eq!(AccountTier::parse("premium"), AccountTier::Premium);
        assert_eq!(AccountTier::parse("full"), AccountTier::Full);
        assert_eq!(AccountTier::parse(" Premium "), AccountTier::Premium);
    }

    #[test]
    fn test_unlimited_sentinel_ordering() {
        assert!(Limit::Unlimited > Limit::Finite(u32::MAX));
        assert!(Limit::Finite(3) < Limit::Finite(25));
        assert_eq!(Limit::Unlimited, Limit::Unlimited);
    }

    #[test]
    fn test_limit_gating() {
        let service = EntitlementService::new();
        let basic = service.resolve(AccountTier::Basic);
        assert!(basic.allows_new_course(2));
        assert!(!basic.allows_new_course(3));
        let full = service.resolve(AccountTier::Full);
        assert!(full.allows_new_course(u32::MAX - 1));
    }

    #[test]
    fn test_unlimited_serializes_as_sentinel() {
        let service = EntitlementService::new();
        let full = service.resolve(AccountTier::Full);
        let json = serde_json::to_value(full).unwrap();
        assert_eq!(json["max_courses"], serde_json::json!("unlimited"));
        let premium = service.resolve(AccountTier::Premium);
        let json = serde_json::to_value(premium).unwrap();
        assert_eq!(json["max_courses"], serde_json::json!(25));
    }
}
