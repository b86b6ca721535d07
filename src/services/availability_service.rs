use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tokio::sync::RwLock;

use crate::config::DashboardConfig;
use crate::external::RecordStore;
use crate::models::{
    Account, CourseFilter, DashboardState, DataMode, ErrorNotice,
};
use crate::services::demo_data;
use crate::services::stats_service::StatsService;

/// 数据可用性控制器：拉实时数据，任何一步失败都按既定路径回退演示数据，
/// 只有最新一代请求的结果允许写入共享状态
#[derive(Clone)]
pub struct AvailabilityService {
    store: Arc<dyn RecordStore>,
    stats: StatsService,
    config: DashboardConfig,
    state: Arc<RwLock<DashboardState>>,
    issued: Arc<AtomicU64>,
}

impl AvailabilityService {
    pub fn new(store: Arc<dyn RecordStore>, stats: StatsService, config: DashboardConfig) -> Self {
        // 初始状态即演示快照，未初始化时界面也有一致数据可渲染
        let initial = Self::demo_state(&stats, 0, None, None);
        Self {
            store,
            stats,
            config,
            state: Arc::new(RwLock::new(initial)),
            issued: Arc::new(AtomicU64::new(0)),
        }
    }

    /// 当前状态快照，展示层只读
    pub async fn state(&self) -> DashboardState {
        self.state.read().await.clone()
    }

    /// 初始化/刷新。每一步独立可失败且都有回退，整体从不失败、从不悬挂
    pub async fn initialize(&self) -> DashboardState {
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let snapshot = self.build_snapshot(generation).await;
        self.apply(snapshot).await
    }

    async fn build_snapshot(&self, generation: u64) -> DashboardState {
        // 步骤 1：存储未配置直接走演示数据，预期路径，不是错误
        if !self.store.is_configured() {
            log::info!("Record store not configured, serving demo data");
            return Self::demo_state(&self.stats, generation, None, None);
        }

        // 步骤 2：读会话。读取失败或没有会话都按匿名演示访客处理
        let session = match self.store.get_session().await {
            Ok(session) => session,
            Err(e) => {
                log::warn!("Session read failed, treating viewer as anonymous: {e}");
                None
            }
        };
        let Some(session) = session else {
            return Self::demo_state(&self.stats, generation, None, None);
        };

        // 步骤 3：读账户档案，失败就用会话身份合成最小账户，绝不阻塞
        let account = match self.store.get_profile(session.user_id).await {
            Ok(Some(account)) => account,
            Ok(None) => {
                log::warn!("Profile {} missing, synthesizing from session", session.user_id);
                Account::synthesized_from(&session)
            }
            Err(e) => {
                log::warn!("Profile load failed, synthesizing from session: {e}");
                Account::synthesized_from(&session)
            }
        };

        // 步骤 4：拉取已发布课程。查询错误回退演示记录并给出唯一一条提示；
        // 空结果同样回退，但空库是新账户的正常状态，不提示
        let filter = CourseFilter {
            published_only: true,
        };
        let courses = match self
            .store
            .query_courses(filter, self.config.course_page_size)
            .await
        {
            Ok(courses) if !courses.is_empty() => courses,
            Ok(_) => {
                log::info!("Course query returned no rows, falling back to demo records");
                return Self::demo_state(&self.stats, generation, Some(account), None);
            }
            Err(e) => {
                log::error!("Course query failed, falling back to demo records: {e}");
                let notice = ErrorNotice::record_query_failed(
                    "Live course data is unavailable, showing demo records",
                );
                return Self::demo_state(&self.stats, generation, Some(account), Some(notice));
            }
        };

        // 广告查询失败只静默回退演示广告，提示额度已由课程查询占用
        let advertisements = match self
            .store
            .query_advertisements(self.config.course_page_size)
            .await
        {
            Ok(ads) if !ads.is_empty() => ads,
            Ok(_) => demo_data::demo_advertisements(),
            Err(e) => {
                log::warn!("Advertisement query failed, using demo ads: {e}");
                demo_data::demo_advertisements()
            }
        };

        let now = Utc::now();
        DashboardState {
            mode: DataMode::Live,
            stats: self.stats.compute_stats(&courses),
            ad_stats: self.stats.compute_ad_stats(&advertisements, now),
            account: Some(account),
            courses,
            advertisements,
            error_notice: None,
            generation,
            refreshed_at: now,
        }
    }

    /// 只有代号仍是最新的结果才允许落地，过期结果整体丢弃
    async fn apply(&self, snapshot: DashboardState) -> DashboardState {
        let mut state = self.state.write().await;
        let latest = self.issued.load(Ordering::SeqCst);
        if snapshot.generation == latest {
            *state = snapshot.clone();
            snapshot
        } else {
            log::info!(
                "Discarding stale refresh result (generation {}, latest {})",
                snapshot.generation,
                latest
            );
            state.clone()
        }
    }

    fn demo_state(
        stats: &StatsService,
        generation: u64,
        account: Option<Account>,
        error_notice: Option<ErrorNotice>,
    ) -> DashboardState {
        let courses = demo_data::demo_courses();
        let advertisements = demo_data::demo_advertisements();
        let now = Utc::now();
        DashboardState {
            mode: DataMode::Demo,
            stats: stats.compute_stats(&courses),
            ad_stats: stats.compute_ad_stats(&advertisements, now),
            account,
            courses,
            advertisements,
            error_notice,
            generation,
            refreshed_at: now,
        }
    }
}
