use crate::models::{Advertisement, Course};

/// 聚合前的记录清洗：越界字段收敛到合法区间，坏记录不允许炸掉聚合
pub fn sanitize_courses(courses: &[Course]) -> Vec<Course> {
    courses
        .iter()
        .map(|course| {
            let mut course = course.clone();
            if !course.price.is_finite() || course.price < 0.0 {
                course.price = 0.0;
            }
            if !course.rating.is_finite() {
                course.rating = 0.0;
            }
            course.rating = course.rating.clamp(0.0, 5.0);
            course
        })
        .collect()
}

pub fn sanitize_advertisements(ads: &[Advertisement]) -> Vec<Advertisement> {
    ads.iter()
        .map(|ad| {
            let mut ad = ad.clone();
            if !ad.price_per_day.is_finite() || ad.price_per_day < 0.0 {
                ad.price_per_day = 0.0;
            }
            // 点击数不可能超过展示数
            if ad.clicks > ad.impressions {
                ad.clicks = ad.impressions;
            }
            ad
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdPlacement, CourseLevel};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn course(price: f64, rating: f64) -> Course {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Course {
            id: Uuid::from_u128(1),
            title: "Test Course".to_string(),
            description: String::new(),
            thumbnail_url: None,
            instructor_id: Uuid::from_u128(9),
            price,
            duration: 60,
            level: CourseLevel::Beginner,
            category: "Testing".to_string(),
            tags: vec![],
            is_published: true,
            total_views: 0,
            rating,
            total_ratings: 0,
            created_at: ts,
            updated_at: ts,
        }
    }

    fn ad(impressions: u64, clicks: u64, price_per_day: f64) -> Advertisement {
        Advertisement {
            id: Uuid::from_u128(2),
            title: "Test Ad".to_string(),
            description: String::new(),
            image_url: None,
            company: None,
            target_url: "https://example.com".to_string(),
            price_per_day,
            start_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap(),
            impressions,
            clicks,
            category: "Testing".to_string(),
            placement: AdPlacement::Banner,
        }
    }

    #[test]
    fn test_negative_price_clamped() {
        let sanitized = sanitize_courses(&[course(-10.0, 4.0)]);
        assert_eq!(sanitized[0].price, 0.0);
        assert_eq!(sanitized[0].rating, 4.0);
    }

    #[test]
    fn test_rating_clamped_into_range() {
        let sanitized = sanitize_courses(&[course(10.0, 7.5), course(10.0, -1.0)]);
        assert_eq!(sanitized[0].rating, 5.0);
        assert_eq!(sanitized[1].rating, 0.0);
    }

    #[test]
    fn test_nan_fields_reset() {
        let sanitized = sanitize_courses(&[course(f64::NAN, f64::NAN)]);
        assert_eq!(sanitized[0].price, 0.0);
        assert_eq!(sanitized[0].rating, 0.0);
    }

    #[test]
    fn test_clicks_capped_at_impressions() {
        let sanitized = sanitize_advertisements(&[ad(100, 150, 5.0), ad(100, 10, 5.0)]);
        assert_eq!(sanitized[0].clicks, 100);
        assert_eq!(sanitized[1].clicks, 10);
    }

    #[test]
    fn test_negative_ad_price_clamped() {
        let sanitized = sanitize_advertisements(&[ad(0, 0, -3.0)]);
        assert_eq!(sanitized[0].price_per_day, 0.0);
    }
}
