//! Case-insensitive substring search.
//!
//! No ranking: hits come back in collection order.

use crate::domain::ports::Searchable;

/// 查詢字串正規化；空白查詢回傳 None 代表「不過濾」
/// 非空白查詢不去頭尾空白，前後空格也是比對內容的一部分
pub fn normalize_query(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

/// `needle` 必須已經是小寫
pub fn matches_query<T: Searchable + ?Sized>(item: &T, needle: &str) -> bool {
    item.searchable_text()
        .iter()
        .any(|text| text.to_lowercase().contains(needle))
        || item
            .tags()
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

pub fn search<'a, T: Searchable>(collection: &'a [T], query: &str) -> Vec<&'a T> {
    match normalize_query(query) {
        Some(needle) => collection
            .iter()
            .filter(|item| matches_query(*item, &needle))
            .collect(),
        None => collection.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doc {
        title: String,
        body: String,
        tags: Vec<String>,
    }

    impl Searchable for Doc {
        fn title(&self) -> &str {
            &self.title
        }

        fn searchable_text(&self) -> Vec<&str> {
            vec![&self.title, &self.body]
        }

        fn tags(&self) -> &[String] {
            &self.tags
        }
    }

    fn docs() -> Vec<Doc> {
        vec![
            Doc {
                title: "Rumen".to_string(),
                body: "The largest stomach chamber".to_string(),
                tags: vec!["Anatomy".to_string()],
            },
            Doc {
                title: "Grazing".to_string(),
                body: "Rotational grazing restores soil".to_string(),
                tags: vec!["environment".to_string()],
            },
        ]
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let docs = docs();
        assert_eq!(search(&docs, "").len(), 2);
        assert_eq!(search(&docs, "   \t").len(), 2);
    }

    #[test]
    fn test_matches_tags_case_insensitively() {
        let docs = docs();
        let hits = search(&docs, "ANATOMY");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Rumen");
    }

    #[test]
    fn test_matches_body_text() {
        let docs = docs();
        let hits = search(&docs, " soil");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Grazing");
        assert!(search(&docs, "horns").is_empty());
    }

    #[test]
    fn test_surrounding_spaces_are_part_of_the_query() {
        let docs = docs();
        // "soil" 在句尾，後面沒有空格
        assert!(search(&docs, " soil ").is_empty());
        assert_eq!(normalize_query(" Rumen "), Some(" rumen ".to_string()));
        assert_eq!(normalize_query(" \t "), None);
    }
}
