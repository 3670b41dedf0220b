use crate::core::pagination::{filter_advocates, visible_rows, PaginationWindow, PAGE_SIZE};
use crate::domain::model::AdvocateRow;
use crate::domain::ports::AdvocateSource;
use crate::utils::error::LoadError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(Vec<AdvocateRow>),
    Error(LoadError),
}

/// 畫面被關閉時設定；fetch 回來後檢查，已取消就丟掉結果
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Owns the fetch lifecycle, the query and the pagination window of one
/// directory page. Filtered and visible rows are derived on every call.
#[derive(Debug)]
pub struct PageController {
    state: LoadState,
    query: String,
    window: PaginationWindow,
}

impl PageController {
    pub fn new(page_size: usize) -> Self {
        Self {
            state: LoadState::Loading,
            query: String::new(),
            window: PaginationWindow::new(page_size),
        }
    }

    /// Performs the single fetch of this page. Returns `true` when the result
    /// was applied, `false` when the page was torn down before it settled.
    pub async fn load<S>(&mut self, source: &S, cancel: &CancellationFlag) -> bool
    where
        S: AdvocateSource + ?Sized,
    {
        tracing::debug!("Fetching advocates");
        let result = source.fetch_advocates().await;

        if cancel.is_cancelled() {
            tracing::warn!("Page closed before advocates loaded, discarding result");
            return false;
        }

        self.apply(result);
        true
    }

    /// `Loading -> Ready | Error`. Results arriving in any other state are ignored.
    pub fn apply(&mut self, result: std::result::Result<Vec<AdvocateRow>, LoadError>) {
        if !matches!(self.state, LoadState::Loading) {
            tracing::warn!("Ignoring fetch result, advocates already settled");
            return;
        }

        self.state = match result {
            Ok(records) => {
                tracing::info!("✅ Loaded {} advocates", records.len());
                LoadState::Ready(records)
            }
            Err(e) => {
                tracing::error!("❌ Failed to load advocates: {}", e);
                LoadState::Error(e)
            }
        };
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&LoadError> {
        match &self.state {
            LoadState::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error().map(LoadError::user_message)
    }

    /// 尚未載入或載入失敗時為空
    pub fn records(&self) -> &[AdvocateRow] {
        match &self.state {
            LoadState::Ready(records) => records.as_slice(),
            _ => &[],
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.query {
            return;
        }
        tracing::debug!(query = %query, "query changed, pagination reset");
        self.query = query;
        self.window.reset();
    }

    pub fn reset_query(&mut self) {
        self.set_query(String::new());
    }

    pub fn pages_shown(&self) -> usize {
        self.window.pages_shown()
    }

    pub fn page_size(&self) -> usize {
        self.window.page_size()
    }

    pub fn filtered(&self) -> Vec<&AdvocateRow> {
        filter_advocates(self.records(), &self.query)
    }

    pub fn visible(&self) -> Vec<&AdvocateRow> {
        visible_rows(
            self.records(),
            &self.query,
            self.window.pages_shown(),
            self.window.page_size(),
        )
    }

    pub fn can_load_more(&self) -> bool {
        self.window.has_more(self.filtered().len())
    }

    /// No-op once every filtered record is visible.
    pub fn load_more(&mut self) -> bool {
        let filtered_len = self.filtered().len();
        let grew = self.window.load_more(filtered_len);
        if grew {
            tracing::debug!(pages_shown = self.window.pages_shown(), "load more");
        }
        grew
    }
}

impl Default for PageController {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}
