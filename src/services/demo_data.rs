use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::models::{AdPlacement, Advertisement, Course, CourseLevel};

/// 演示数据里的固定讲师 id
pub const DEMO_INSTRUCTOR_ID: Uuid = Uuid::from_u128(0xED0C_0001);

fn ts(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// 固定种子课程：每次调用产出完全一致的记录，测试与支持人员看到的数字永远相同
pub fn demo_courses() -> Vec<Course> {
    vec![
        Course {
            id: Uuid::from_u128(0xC0DE_0001),
            title: "Advanced React Masterclass".to_string(),
            description: "React from the ground up to advanced patterns, with hands-on projects"
                .to_string(),
            thumbnail_url: Some(
                "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=400&h=300&fit=crop"
                    .to_string(),
            ),
            instructor_id: DEMO_INSTRUCTOR_ID,
            price: 199.90,
            duration: 1200,
            level: CourseLevel::Advanced,
            category: "Programming".to_string(),
            tags: vec![
                "React".to_string(),
                "JavaScript".to_string(),
                "Frontend".to_string(),
            ],
            is_published: true,
            total_views: 1250,
            rating: 4.8,
            total_ratings: 89,
            created_at: ts(2024, 1, 1),
            updated_at: ts(2024, 1, 1),
        },
        Course {
            id: Uuid::from_u128(0xC0DE_0002),
            title: "Complete Digital Marketing".to_string(),
            description: "End-to-end digital marketing strategies for the current year".to_string(),
            thumbnail_url: Some(
                "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400&h=300&fit=crop"
                    .to_string(),
            ),
            instructor_id: DEMO_INSTRUCTOR_ID,
            price: 299.90,
            duration: 1800,
            level: CourseLevel::Intermediate,
            category: "Marketing".to_string(),
            tags: vec![
                "Marketing".to_string(),
                "Digital".to_string(),
                "Social Media".to_string(),
            ],
            is_published: true,
            total_views: 890,
            rating: 4.6,
            total_ratings: 67,
            created_at: ts(2024, 1, 15),
            updated_at: ts(2024, 1, 15),
        },
    ]
}

/// 固定种子广告，三条分别覆盖投放中 / 待投放 / 已过期
pub fn demo_advertisements() -> Vec<Advertisement> {
    vec![
        Advertisement {
            id: Uuid::from_u128(0xAD00_0001),
            title: "TechBooks Spring Sale".to_string(),
            description: "Discounted programming ebooks for course students".to_string(),
            image_url: Some("https://cdn.example.com/ads/techbooks.png".to_string()),
            company: Some("TechBooks".to_string()),
            target_url: "https://techbooks.example.com/sale".to_string(),
            price_per_day: 25.0,
            start_date: ts(2024, 2, 1),
            end_date: ts(2035, 12, 31),
            impressions: 15400,
            clicks: 480,
            category: "Education".to_string(),
            placement: AdPlacement::Banner,
        },
        Advertisement {
            id: Uuid::from_u128(0xAD00_0002),
            title: "StudioCam Gear".to_string(),
            description: "Recording equipment bundles for instructors".to_string(),
            image_url: Some("https://cdn.example.com/ads/studiocam.png".to_string()),
            company: Some("StudioCam".to_string()),
            target_url: "https://studiocam.example.com".to_string(),
            price_per_day: 12.5,
            start_date: ts(2024, 1, 1),
            end_date: ts(2024, 6, 30),
            impressions: 8200,
            clicks: 190,
            category: "Hardware".to_string(),
            placement: AdPlacement::Sidebar,
        },
        Advertisement {
            id: Uuid::from_u128(0xAD00_0003),
            title: "CloudHost Launch".to_string(),
            description: "Managed hosting for course landing pages".to_string(),
            image_url: None,
            company: Some("CloudHost".to_string()),
            target_url: "https://cloudhost.example.com/launch".to_string(),
            price_per_day: 40.0,
            start_date: ts(2035, 1, 1),
            end_date: ts(2036, 1, 1),
            impressions: 0,
            clicks: 0,
            category: "Infrastructure".to_string(),
            placement: AdPlacement::Content,
        },
    ]
}
