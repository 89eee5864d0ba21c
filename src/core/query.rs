use crate::core::filter::{BreedFilter, FactFilter, Predicate};
use crate::core::search::search;
use crate::core::sort::{BreedSort, FactSort, SortOrder};
use crate::domain::ports::Searchable;

/// 列表頁的組合查詢：搜尋 + 篩選 + 排序
#[derive(Debug, Clone, PartialEq)]
pub struct Query<F, S> {
    pub search: Option<String>,
    pub filters: Vec<F>,
    pub sort: Option<S>,
}

pub type BreedQuery = Query<BreedFilter, BreedSort>;
pub type FactQuery = Query<FactFilter, FactSort>;

impl<F, S> Default for Query<F, S> {
    fn default() -> Self {
        Self {
            search: None,
            filters: Vec::new(),
            sort: None,
        }
    }
}

impl<F, S> Query<F, S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_filter(mut self, filter: F) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_sort(mut self, sort: S) -> Self {
        self.sort = Some(sort);
        self
    }

    /// 任何非空字串都算，只有空白也一樣
    pub fn has_search(&self) -> bool {
        self.search.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// 搜尋字串也算一個啟用中的條件
    pub fn active_filter_count(&self) -> usize {
        self.filters.len() + usize::from(self.has_search())
    }

    /// 清除搜尋與篩選，保留排序
    pub fn cleared(&self) -> Self
    where
        S: Clone,
    {
        Self {
            search: None,
            filters: Vec::new(),
            sort: self.sort.clone(),
        }
    }
}

/// 執行順序固定：
/// 1. 非空白的搜尋字串取代基底集合
/// 2. 依序套用每個篩選 (AND)
/// 3. 穩定排序
pub fn run_query<'a, T, F, S>(collection: &'a [T], query: &Query<F, S>) -> Vec<&'a T>
where
    T: Searchable,
    F: Predicate<T>,
    S: SortOrder<T>,
{
    let mut results = match query.search.as_deref() {
        Some(text) => search(collection, text),
        None => collection.iter().collect(),
    };

    for filter in &query.filters {
        results.retain(|item| filter.matches(item));
    }

    if let Some(sort) = &query.sort {
        results.sort_by(|a, b| sort.compare(a, b));
    }

    tracing::debug!(
        "Query matched {} of {} entries ({} active conditions)",
        results.len(),
        collection.len(),
        query.active_filter_count()
    );

    results
}
