use crate::domain::model::{AgeGroup, Breed, Category, Choice, Difficulty, Fact, Purpose, Size};
use crate::domain::ports::{Entity, Slugged};
use crate::utils::error::{CatalogError, Result};

/// 單一篩選維度
pub trait Predicate<T> {
    fn matches(&self, item: &T) -> bool;
}

pub fn find_by_id<'a, T: Entity>(collection: &'a [T], id: &str) -> Option<&'a T> {
    collection.iter().find(|item| item.id() == id)
}

pub fn find_by_slug<'a, T: Slugged>(collection: &'a [T], slug: &str) -> Option<&'a T> {
    collection.iter().find(|item| item.slug() == slug)
}

/// 依原始順序回傳 featured 項目
pub fn featured<T: Entity>(collection: &[T]) -> Vec<&T> {
    collection.iter().filter(|item| item.featured()).collect()
}

pub fn filter_by<'a, T, I, P>(items: I, predicate: P) -> Vec<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    P: Fn(&T) -> bool,
{
    items.into_iter().filter(|item| predicate(*item)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreedFilter {
    Purpose(Purpose),
    Size(Size),
    /// 完全相等比對
    Origin(String),
    /// popularity >= 門檻
    MinPopularity(u8),
}

impl BreedFilter {
    pub const FIELDS: &'static [&'static str] = &["purpose", "size", "origin", "popularity"];

    /// 從外部字串 (例如 URL 查詢參數) 建立篩選條件
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        match field {
            "purpose" => Ok(BreedFilter::Purpose(Purpose::parse_choice(value)?)),
            "size" => Ok(BreedFilter::Size(Size::parse_choice(value)?)),
            "origin" => {
                if value.trim().is_empty() {
                    return Err(CatalogError::InvalidFilterValue {
                        field: "origin".to_string(),
                        value: value.to_string(),
                        reason: "origin cannot be empty".to_string(),
                    });
                }
                Ok(BreedFilter::Origin(value.to_string()))
            }
            "popularity" => {
                let threshold = value.trim().parse::<u8>().ok().filter(|n| (1..=10).contains(n));
                threshold
                    .map(BreedFilter::MinPopularity)
                    .ok_or_else(|| CatalogError::InvalidFilterValue {
                        field: "popularity".to_string(),
                        value: value.to_string(),
                        reason: "expected a whole number from 1 to 10".to_string(),
                    })
            }
            other => Err(CatalogError::UnknownFilterField {
                field: other.to_string(),
                expected: Self::FIELDS.join(", "),
            }),
        }
    }
}

impl Predicate<Breed> for BreedFilter {
    fn matches(&self, breed: &Breed) -> bool {
        match self {
            BreedFilter::Purpose(purpose) => breed.primary_purpose == *purpose,
            BreedFilter::Size(size) => breed.characteristics.size == *size,
            BreedFilter::Origin(origin) => breed.origin == *origin,
            BreedFilter::MinPopularity(threshold) => breed.popularity() >= *threshold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactFilter {
    Category(Category),
    Difficulty(Difficulty),
    /// ageGroup 為 all 的項目永遠符合
    AgeGroup(AgeGroup),
}

impl FactFilter {
    pub const FIELDS: &'static [&'static str] = &["category", "difficulty", "ageGroup"];

    pub fn parse(field: &str, value: &str) -> Result<Self> {
        match field {
            "category" => Ok(FactFilter::Category(Category::parse_choice(value)?)),
            "difficulty" => Ok(FactFilter::Difficulty(Difficulty::parse_choice(value)?)),
            "ageGroup" => Ok(FactFilter::AgeGroup(AgeGroup::parse_choice(value)?)),
            other => Err(CatalogError::UnknownFilterField {
                field: other.to_string(),
                expected: Self::FIELDS.join(", "),
            }),
        }
    }
}

impl Predicate<Fact> for FactFilter {
    fn matches(&self, fact: &Fact) -> bool {
        match self {
            FactFilter::Category(category) => fact.category == *category,
            FactFilter::Difficulty(difficulty) => fact.difficulty == *difficulty,
            FactFilter::AgeGroup(group) => fact.age_group.accepts(*group),
        }
    }
}
