use crate::domain::model::{Breed, Fact};
use crate::domain::ports::Searchable;
use crate::utils::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub trait SortOrder<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// 近似瀏覽器 localeCompare：先忽略大小寫比較，相同時小寫排前面
///
/// 只做大小寫折疊，仍以 code point 比較，沒有語系排序規則；
/// 帶重音的名稱 (例如 "Évolène") 會排在 "z" 之後。種子資料全是 ASCII。
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BreedSort {
    NameAsc,
    NameDesc,
    PopularityAsc,
    #[default]
    PopularityDesc,
}

impl BreedSort {
    pub const KEYS: &'static [&'static str] =
        &["name-asc", "name-desc", "popularity-asc", "popularity-desc"];

    pub fn as_str(&self) -> &'static str {
        match self {
            BreedSort::NameAsc => "name-asc",
            BreedSort::NameDesc => "name-desc",
            BreedSort::PopularityAsc => "popularity-asc",
            BreedSort::PopularityDesc => "popularity-desc",
        }
    }
}

impl SortOrder<Breed> for BreedSort {
    fn compare(&self, a: &Breed, b: &Breed) -> Ordering {
        match self {
            BreedSort::NameAsc => locale_compare(a.title(), b.title()),
            BreedSort::NameDesc => locale_compare(b.title(), a.title()),
            BreedSort::PopularityAsc => a.popularity().cmp(&b.popularity()),
            BreedSort::PopularityDesc => b.popularity().cmp(&a.popularity()),
        }
    }
}

impl FromStr for BreedSort {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "name-asc" => Ok(BreedSort::NameAsc),
            "name-desc" => Ok(BreedSort::NameDesc),
            "popularity-asc" => Ok(BreedSort::PopularityAsc),
            "popularity-desc" => Ok(BreedSort::PopularityDesc),
            other => Err(CatalogError::InvalidSortKey {
                value: other.to_string(),
                expected: Self::KEYS.join(", "),
            }),
        }
    }
}

impl fmt::Display for BreedSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FactSort {
    TitleAsc,
    TitleDesc,
    ReadTimeAsc,
    ReadTimeDesc,
}

impl FactSort {
    pub const KEYS: &'static [&'static str] =
        &["title-asc", "title-desc", "read-time-asc", "read-time-desc"];

    pub fn as_str(&self) -> &'static str {
        match self {
            FactSort::TitleAsc => "title-asc",
            FactSort::TitleDesc => "title-desc",
            FactSort::ReadTimeAsc => "read-time-asc",
            FactSort::ReadTimeDesc => "read-time-desc",
        }
    }
}

impl SortOrder<Fact> for FactSort {
    fn compare(&self, a: &Fact, b: &Fact) -> Ordering {
        match self {
            FactSort::TitleAsc => locale_compare(a.title(), b.title()),
            FactSort::TitleDesc => locale_compare(b.title(), a.title()),
            FactSort::ReadTimeAsc => a.read_time.cmp(&b.read_time),
            FactSort::ReadTimeDesc => b.read_time.cmp(&a.read_time),
        }
    }
}

impl FromStr for FactSort {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "title-asc" => Ok(FactSort::TitleAsc),
            "title-desc" => Ok(FactSort::TitleDesc),
            "read-time-asc" => Ok(FactSort::ReadTimeAsc),
            "read-time-desc" => Ok(FactSort::ReadTimeDesc),
            other => Err(CatalogError::InvalidSortKey {
                value: other.to_string(),
                expected: Self::KEYS.join(", "),
            }),
        }
    }
}

impl fmt::Display for FactSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_compare_ignores_case_first() {
        assert_eq!(locale_compare("angus", "Hereford"), Ordering::Less);
        assert_eq!(locale_compare("Jersey", "holstein"), Ordering::Greater);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("Angus", "Angus"), Ordering::Equal);
    }

    #[test]
    fn test_accented_names_sort_after_ascii() {
        assert_eq!(locale_compare("Évolène", "Zebu"), Ordering::Greater);
    }

    #[test]
    fn test_name_sort_uses_searchable_title() {
        let catalog = crate::core::catalog::Catalog::seeded().unwrap();
        let breeds = catalog.breeds();
        for a in breeds {
            for b in breeds {
                assert_eq!(
                    BreedSort::NameAsc.compare(a, b),
                    locale_compare(a.title(), b.title())
                );
            }
        }

        let facts = catalog.facts();
        assert_eq!(
            FactSort::TitleDesc.compare(&facts[0], &facts[1]),
            locale_compare(facts[1].title(), facts[0].title())
        );
    }

    #[test]
    fn test_sort_keys_round_trip_through_strings() {
        for key in BreedSort::KEYS {
            assert_eq!(key.parse::<BreedSort>().unwrap().as_str(), *key);
        }
        for key in FactSort::KEYS {
            assert_eq!(key.parse::<FactSort>().unwrap().as_str(), *key);
        }
    }

    #[test]
    fn test_unknown_sort_key_is_rejected() {
        let err = "relevance".parse::<BreedSort>().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidSortKey { .. }));
        assert!("name-asc".parse::<FactSort>().is_err());
    }

    #[test]
    fn test_default_breed_sort_is_popularity_desc() {
        assert_eq!(BreedSort::default(), BreedSort::PopularityDesc);
    }
}
