use crate::adapters::dataset::EmbeddedDataset;
use crate::core::filter::{featured, filter_by, find_by_id, find_by_slug, BreedFilter, FactFilter};
use crate::core::query::{run_query, BreedQuery, FactQuery};
use crate::core::sample::{sample, sample_with_rng};
use crate::core::search::search;
use crate::domain::model::{AgeGroup, Breed, Category, Difficulty, Fact, Purpose, Size};
use crate::domain::ports::{DatasetSource, Entity};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{
    validate_entity_positive, validate_entity_range, validate_entity_text, validate_unique_keys,
    Validate,
};
use rand::Rng;
use serde::Serialize;

/// 載入後不可變的目錄；所有查詢只回傳共享參考
#[derive(Debug, Clone)]
pub struct Catalog {
    breeds: Vec<Breed>,
    facts: Vec<Fact>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreedFilterOptions {
    pub purposes: Vec<Purpose>,
    pub sizes: Vec<Size>,
    /// 依字母排序
    pub origins: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactFilterOptions {
    pub categories: Vec<Category>,
    pub difficulties: Vec<Difficulty>,
    pub age_groups: Vec<AgeGroup>,
}

/// 保留第一次出現的順序去重
fn distinct<T: PartialEq + Copy>(values: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

impl Catalog {
    pub fn new(breeds: Vec<Breed>, facts: Vec<Fact>) -> Result<Self> {
        let catalog = Self { breeds, facts };
        catalog.validate()?;

        tracing::info!(
            "📚 Catalog ready: {} breeds, {} facts",
            catalog.breeds.len(),
            catalog.facts.len()
        );
        Ok(catalog)
    }

    pub fn load<D: DatasetSource + ?Sized>(source: &D) -> Result<Self> {
        tracing::debug!("Loading catalog from {}", source.describe());
        Self::new(source.load_breeds()?, source.load_facts()?)
    }

    /// 內嵌的種子資料
    pub fn seeded() -> Result<Self> {
        Self::load(&EmbeddedDataset)
    }

    pub fn breeds(&self) -> &[Breed] {
        &self.breeds
    }

    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    // ---- 查找 ----

    pub fn breed_by_id(&self, id: &str) -> Option<&Breed> {
        find_by_id(&self.breeds, id)
    }

    pub fn breed_by_slug(&self, slug: &str) -> Option<&Breed> {
        find_by_slug(&self.breeds, slug)
    }

    pub fn fact_by_id(&self, id: &str) -> Option<&Fact> {
        find_by_id(&self.facts, id)
    }

    pub fn featured_breeds(&self) -> Vec<&Breed> {
        featured(&self.breeds)
    }

    pub fn featured_facts(&self) -> Vec<&Fact> {
        featured(&self.facts)
    }

    // ---- 單一維度篩選 ----

    pub fn breeds_by_purpose(&self, purpose: Purpose) -> Vec<&Breed> {
        filter_by(&self.breeds, |b: &Breed| b.primary_purpose == purpose)
    }

    pub fn breeds_by_size(&self, size: Size) -> Vec<&Breed> {
        filter_by(&self.breeds, |b: &Breed| b.characteristics.size == size)
    }

    pub fn facts_by_category(&self, category: Category) -> Vec<&Fact> {
        filter_by(&self.facts, |f: &Fact| f.category == category)
    }

    pub fn facts_by_difficulty(&self, difficulty: Difficulty) -> Vec<&Fact> {
        filter_by(&self.facts, |f: &Fact| f.difficulty == difficulty)
    }

    pub fn facts_by_age_group(&self, age_group: AgeGroup) -> Vec<&Fact> {
        filter_by(&self.facts, |f: &Fact| f.age_group.accepts(age_group))
    }

    // ---- 搜尋與組合查詢 ----

    pub fn search_breeds(&self, query: &str) -> Vec<&Breed> {
        search(&self.breeds, query)
    }

    pub fn search_facts(&self, query: &str) -> Vec<&Fact> {
        search(&self.facts, query)
    }

    pub fn query_breeds(&self, query: &BreedQuery) -> Vec<&Breed> {
        run_query(&self.breeds, query)
    }

    pub fn query_facts(&self, query: &FactQuery) -> Vec<&Fact> {
        run_query(&self.facts, query)
    }

    // ---- 隨機抽樣 ----

    pub fn random_facts(&self, count: usize) -> Vec<&Fact> {
        sample(&self.facts, count)
    }

    pub fn random_facts_with_rng<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<&Fact> {
        sample_with_rng(&self.facts, count, rng)
    }

    // ---- 詳細頁與首頁輔助 ----

    /// 同用途的其他品種，依原始順序，最多 `limit` 筆
    pub fn related_breeds(&self, breed: &Breed, limit: usize) -> Vec<&Breed> {
        self.breeds
            .iter()
            .filter(|b| b.id != breed.id && b.primary_purpose == breed.primary_purpose)
            .take(limit)
            .collect()
    }

    pub fn highlighted_breeds(&self, limit: usize) -> Vec<&Breed> {
        self.breeds.iter().filter(|b| b.featured).take(limit).collect()
    }

    pub fn highlighted_facts(&self, limit: usize) -> Vec<&Fact> {
        self.facts.iter().filter(|f| f.featured).take(limit).collect()
    }

    pub fn breed_filter_options(&self) -> BreedFilterOptions {
        let mut origins: Vec<String> = Vec::new();
        for breed in &self.breeds {
            if !origins.contains(&breed.origin) {
                origins.push(breed.origin.clone());
            }
        }
        origins.sort();

        BreedFilterOptions {
            purposes: distinct(self.breeds.iter().map(|b| b.primary_purpose)),
            sizes: distinct(self.breeds.iter().map(|b| b.characteristics.size)),
            origins,
        }
    }

    pub fn fact_filter_options(&self) -> FactFilterOptions {
        FactFilterOptions {
            categories: distinct(self.facts.iter().map(|f| f.category)),
            difficulties: distinct(self.facts.iter().map(|f| f.difficulty)),
            age_groups: distinct(self.facts.iter().map(|f| f.age_group)),
        }
    }

    /// 把未經驗證的 (欄位, 值) 組合轉成篩選條件
    pub fn parse_breed_filters<'a, I>(pairs: I) -> Result<Vec<BreedFilter>>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        pairs
            .into_iter()
            .map(|(field, value)| BreedFilter::parse(field, value))
            .collect()
    }

    pub fn parse_fact_filters<'a, I>(pairs: I) -> Result<Vec<FactFilter>>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        pairs
            .into_iter()
            .map(|(field, value)| FactFilter::parse(field, value))
            .collect()
    }
}

impl Validate for Breed {
    fn validate(&self) -> Result<()> {
        let entity = self.id();
        validate_entity_text(entity, "id", &self.id)?;
        validate_entity_text(entity, "slug", &self.slug)?;
        validate_entity_text(entity, "name", &self.name)?;
        validate_entity_range(entity, "economicValue.popularity", self.popularity(), 1, 10)?;
        validate_entity_positive(
            entity,
            "characteristics.averageWeight.male",
            self.characteristics.average_weight.male,
        )?;
        validate_entity_positive(
            entity,
            "characteristics.averageWeight.female",
            self.characteristics.average_weight.female,
        )?;
        validate_entity_positive(entity, "characteristics.lifespan", self.characteristics.lifespan)?;

        if let Some(liters) = self.characteristics.milk_production {
            if !(liters >= 0.0) {
                return Err(CatalogError::DatasetValidationError {
                    entity: entity.to_string(),
                    field: "characteristics.milkProduction".to_string(),
                    value: liters.to_string(),
                    reason: "cannot be negative".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Validate for Fact {
    fn validate(&self) -> Result<()> {
        let entity = self.id();
        validate_entity_text(entity, "id", &self.id)?;
        validate_entity_text(entity, "title", &self.title)?;
        validate_entity_range(entity, "readTime", self.read_time, 1, u32::MAX)?;
        Ok(())
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        for breed in &self.breeds {
            breed.validate()?;
        }
        for fact in &self.facts {
            fact.validate()?;
        }

        validate_unique_keys("breeds", "id", self.breeds.iter().map(|b| b.id.as_str()))?;
        validate_unique_keys("breeds", "slug", self.breeds.iter().map(|b| b.slug.as_str()))?;
        validate_unique_keys("facts", "id", self.facts.iter().map(|f| f.id.as_str()))?;
        Ok(())
    }
}
