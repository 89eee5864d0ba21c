use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 有限選項的列舉，可由外部字串解析
pub trait Choice: Sized + Copy + 'static {
    const FIELD: &'static str;
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn expected() -> String {
        Self::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn parse_choice(value: &str) -> crate::utils::error::Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == value)
            .ok_or_else(|| crate::utils::error::CatalogError::InvalidFilterValue {
                field: Self::FIELD.to_string(),
                value: value.to_string(),
                reason: format!("expected one of: {}", Self::expected()),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Purpose {
    Dairy,
    Beef,
    DualPurpose,
}

impl Choice for Purpose {
    const FIELD: &'static str = "purpose";
    const ALL: &'static [Self] = &[Purpose::Dairy, Purpose::Beef, Purpose::DualPurpose];

    fn as_str(&self) -> &'static str {
        match self {
            Purpose::Dairy => "dairy",
            Purpose::Beef => "beef",
            Purpose::DualPurpose => "dual-purpose",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Choice for Size {
    const FIELD: &'static str = "size";
    const ALL: &'static [Self] = &[Size::Small, Size::Medium, Size::Large];

    fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

/// 市場需求與飼養成本共用的三級量表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Nutrition,
    Behavior,
    Anatomy,
    Environment,
    History,
    Culture,
}

impl Choice for Category {
    const FIELD: &'static str = "category";
    const ALL: &'static [Self] = &[
        Category::Nutrition,
        Category::Behavior,
        Category::Anatomy,
        Category::Environment,
        Category::History,
        Category::Culture,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Category::Nutrition => "nutrition",
            Category::Behavior => "behavior",
            Category::Anatomy => "anatomy",
            Category::Environment => "environment",
            Category::History => "history",
            Category::Culture => "culture",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Choice for Difficulty {
    const FIELD: &'static str = "difficulty";
    const ALL: &'static [Self] = &[
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Children,
    Teens,
    Adults,
    /// 萬用值：符合任何年齡層篩選
    All,
}

impl AgeGroup {
    pub fn accepts(&self, wanted: AgeGroup) -> bool {
        *self == wanted || *self == AgeGroup::All
    }
}

impl Choice for AgeGroup {
    const FIELD: &'static str = "ageGroup";
    const ALL: &'static [Self] = &[
        AgeGroup::Children,
        AgeGroup::Teens,
        AgeGroup::Adults,
        AgeGroup::All,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Children => "children",
            AgeGroup::Teens => "teens",
            AgeGroup::Adults => "adults",
            AgeGroup::All => "all",
        }
    }
}

macro_rules! display_choice {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.pad(self.as_str())
                }
            }

            impl std::str::FromStr for $ty {
                type Err = crate::utils::error::CatalogError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as Choice>::parse_choice(s)
                }
            }
        )*
    };
}

display_choice!(Purpose, Size, Category, Difficulty, AgeGroup);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SexValues {
    pub male: f64,
    pub female: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Characteristics {
    pub size: Size,
    pub temperament: String,
    pub colors: Vec<String>,
    /// 公斤
    pub average_weight: SexValues,
    /// 公升/年，肉牛沒有此值
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milk_production: Option<f64>,
    /// 年
    pub lifespan: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalTraits {
    /// 公分
    pub height: SexValues,
    pub distinguishing_features: Vec<String>,
    pub coat_pattern: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareRequirements {
    pub climate: Vec<String>,
    pub diet: Vec<String>,
    pub space_needs: String,
    pub special_needs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomicValue {
    /// 1-10
    pub popularity: u8,
    pub market_demand: Level,
    pub cost_to_raise: Level,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Images {
    pub primary: String,
    pub gallery: Vec<String>,
    pub thumbnails: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedingInfo {
    /// 天
    pub gestation_period: u32,
    pub average_litter_size: u32,
    /// 月
    pub breeding_age: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthInfo {
    pub common_issues: Vec<String>,
    pub vaccinations: Vec<String>,
    pub genetic_traits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breed {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub short_description: String,
    pub origin: String,
    pub primary_purpose: Purpose,
    pub characteristics: Characteristics,
    pub physical_traits: PhysicalTraits,
    pub care_requirements: CareRequirements,
    pub economic_value: EconomicValue,
    pub images: Images,
    pub fun_facts: Vec<String>,
    pub history: String,
    pub breeding_info: BreedingInfo,
    pub health_info: HealthInfo,
    pub tags: Vec<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Breed {
    pub fn popularity(&self) -> u8 {
        self.economic_value.popularity
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fact {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub icon: String,
    pub difficulty: Difficulty,
    pub age_group: AgeGroup,
    /// 分鐘
    pub read_time: u32,
    pub sources: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}
