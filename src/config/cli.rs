use crate::core::filter::{BreedFilter, FactFilter};
use crate::core::query::{BreedQuery, FactQuery};
use crate::core::sort::{BreedSort, FactSort};
use crate::domain::model::{AgeGroup, Category, Difficulty, Purpose, Size};
use crate::utils::error::Result;
use crate::utils::validation::validate_sample_count;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "cattle-catalog")]
#[command(about = "Browse the cattle breed and fact catalog")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List breeds with optional search, filters and sort
    Breeds(BreedListArgs),
    /// Show one breed by slug
    Breed {
        slug: String,
    },
    /// List facts with optional search and filters
    Facts(FactListArgs),
    /// Show one fact by id
    Fact {
        id: String,
    },
    /// Pick random facts
    RandomFacts {
        /// Number of facts (defaults to the configured count)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        count: Option<i64>,
    },
    /// Show featured breeds and facts
    Featured,
    /// Show the values each filter accepts
    Options,
}

#[derive(Debug, Clone, Default, Args)]
pub struct BreedListArgs {
    #[arg(short, long)]
    pub search: Option<String>,

    #[arg(long)]
    pub purpose: Option<Purpose>,

    #[arg(long)]
    pub size: Option<Size>,

    #[arg(long)]
    pub origin: Option<String>,

    /// Minimum popularity (1-10)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub min_popularity: Option<u8>,

    /// name-asc, name-desc, popularity-asc or popularity-desc
    #[arg(long)]
    pub sort: Option<BreedSort>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct FactListArgs {
    #[arg(short, long)]
    pub search: Option<String>,

    #[arg(long)]
    pub category: Option<Category>,

    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    #[arg(long)]
    pub age_group: Option<AgeGroup>,

    /// title-asc, title-desc, read-time-asc or read-time-desc
    #[arg(long)]
    pub sort: Option<FactSort>,
}

impl BreedListArgs {
    /// 沒指定排序時使用預設排序
    pub fn to_query(&self, default_sort: BreedSort) -> BreedQuery {
        let mut query = BreedQuery::new().with_sort(self.sort.unwrap_or(default_sort));

        if let Some(search) = &self.search {
            query = query.with_search(search.clone());
        }
        if let Some(purpose) = self.purpose {
            query = query.with_filter(BreedFilter::Purpose(purpose));
        }
        if let Some(size) = self.size {
            query = query.with_filter(BreedFilter::Size(size));
        }
        if let Some(origin) = &self.origin {
            query = query.with_filter(BreedFilter::Origin(origin.clone()));
        }
        if let Some(threshold) = self.min_popularity {
            query = query.with_filter(BreedFilter::MinPopularity(threshold));
        }
        query
    }
}

impl FactListArgs {
    pub fn to_query(&self) -> FactQuery {
        let mut query = FactQuery::new();

        if let Some(search) = &self.search {
            query = query.with_search(search.clone());
        }
        if let Some(category) = self.category {
            query = query.with_filter(FactFilter::Category(category));
        }
        if let Some(difficulty) = self.difficulty {
            query = query.with_filter(FactFilter::Difficulty(difficulty));
        }
        if let Some(group) = self.age_group {
            query = query.with_filter(FactFilter::AgeGroup(group));
        }
        if let Some(sort) = self.sort {
            query = query.with_sort(sort);
        }
        query
    }
}

/// 命令列的樣本數可能是負數，統一在這裡擋下
pub fn resolve_sample_count(requested: Option<i64>, configured: usize) -> Result<usize> {
    match requested {
        Some(count) => validate_sample_count(count),
        None => Ok(configured),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CatalogError;

    #[test]
    fn test_parse_breed_listing_args() {
        let cli = CliConfig::try_parse_from([
            "cattle-catalog",
            "breeds",
            "--purpose",
            "dairy",
            "--min-popularity",
            "7",
            "--sort",
            "name-desc",
        ])
        .unwrap();

        let Command::Breeds(args) = cli.command else {
            panic!("expected breeds subcommand");
        };
        let query = args.to_query(BreedSort::PopularityDesc);
        assert_eq!(
            query.filters,
            vec![
                BreedFilter::Purpose(Purpose::Dairy),
                BreedFilter::MinPopularity(7)
            ]
        );
        assert_eq!(query.sort, Some(BreedSort::NameDesc));
    }

    #[test]
    fn test_invalid_enum_value_is_rejected_by_clap() {
        let result = CliConfig::try_parse_from(["cattle-catalog", "breeds", "--size", "huge"]);
        assert!(result.is_err());

        let result =
            CliConfig::try_parse_from(["cattle-catalog", "breeds", "--min-popularity", "11"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_fact_listing_without_sort_keeps_order() {
        let cli = CliConfig::try_parse_from([
            "cattle-catalog",
            "facts",
            "--age-group",
            "children",
            "--search",
            "cow",
        ])
        .unwrap();

        let Command::Facts(args) = cli.command else {
            panic!("expected facts subcommand");
        };
        let query = args.to_query();
        assert_eq!(query.sort, None);
        assert_eq!(query.active_filter_count(), 2);
    }

    #[test]
    fn test_resolve_sample_count() {
        assert_eq!(resolve_sample_count(None, 3).unwrap(), 3);
        assert_eq!(resolve_sample_count(Some(0), 3).unwrap(), 0);
        assert!(matches!(
            resolve_sample_count(Some(-2), 3),
            Err(CatalogError::InvalidSampleCount { count: -2 })
        ));
    }

    #[test]
    fn test_negative_count_reaches_validation() {
        let cli = CliConfig::try_parse_from(["cattle-catalog", "random-facts", "-n", "-1"]).unwrap();
        let Command::RandomFacts { count } = cli.command else {
            panic!("expected random-facts subcommand");
        };
        assert_eq!(count, Some(-1));
    }
}
