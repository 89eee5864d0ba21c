use cattle_catalog::app::views::{self, ListingSummary};
use cattle_catalog::config::cli::{resolve_sample_count, Command};
use cattle_catalog::utils::error::ErrorSeverity;
use cattle_catalog::utils::{logger, validation::Validate};
use cattle_catalog::{Catalog, CatalogConfig, CatalogError, CliConfig, Result};
use clap::Parser;
use serde::Serialize;

fn main() {
    let cli = CliConfig::parse();

    // 載入設定檔 (可選)
    let config = match &cli.config {
        Some(path) => match CatalogConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => CatalogConfig::default(),
    };

    // 初始化日誌
    if cli.log_json || config.json_logs() {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let result = Catalog::load(&config.dataset_source())
        .and_then(|catalog| run(&cli, &config, &catalog));

    if let Err(e) = result {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ Catalog command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        // 輸出用戶友好的錯誤信息
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(exit_code(&e));
    }
}

/// 根據錯誤嚴重程度決定退出碼
fn exit_code(e: &CatalogError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2, // 輸入錯誤
        ErrorSeverity::High => 1,   // 資料或設定錯誤
        ErrorSeverity::Critical => 3,
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: &CliConfig, config: &CatalogConfig, catalog: &Catalog) -> Result<()> {
    match &cli.command {
        Command::Breeds(args) => {
            let query = args.to_query(config.default_breed_sort());
            let breeds = catalog.query_breeds(&query);
            let summary = ListingSummary::new(
                breeds.len(),
                catalog.breeds().len(),
                query.active_filter_count(),
            );

            if cli.json {
                return print_json(&breeds);
            }

            println!("{}", summary);
            if summary.is_empty() {
                println!("No breeds match these filters. Try clearing some of them.");
            }
            for breed in breeds {
                println!("  {}", views::breed_line(breed));
            }
        }
        Command::Breed { slug } => match catalog.breed_by_slug(slug) {
            Some(breed) => {
                let related = catalog.related_breeds(breed, config.related_breed_limit());
                if cli.json {
                    return print_json(breed);
                }
                print!("{}", views::breed_detail(breed, &related));
            }
            None => {
                tracing::warn!("Breed not found: {}", slug);
                println!("🔍 No breed with slug '{}'", slug);
            }
        },
        Command::Facts(args) => {
            let query = args.to_query();
            let facts = catalog.query_facts(&query);
            let summary =
                ListingSummary::new(facts.len(), catalog.facts().len(), query.active_filter_count());

            if cli.json {
                return print_json(&facts);
            }

            println!("{}", summary);
            if summary.is_empty() {
                println!("No facts match these filters. Try clearing some of them.");
            }
            for fact in facts {
                println!("  {}", views::fact_line(fact));
            }
        }
        Command::Fact { id } => match catalog.fact_by_id(id) {
            Some(fact) => {
                if cli.json {
                    return print_json(fact);
                }
                print!("{}", views::fact_detail(fact));
            }
            None => {
                tracing::warn!("Fact not found: {}", id);
                println!("🔍 No fact with id '{}'", id);
            }
        },
        Command::RandomFacts { count } => {
            let count = resolve_sample_count(*count, config.random_fact_count())?;
            let facts = catalog.random_facts(count);

            if cli.json {
                return print_json(&facts);
            }

            println!("🎲 {} random facts", facts.len());
            for fact in facts {
                println!("  {}", views::fact_line(fact));
            }
        }
        Command::Featured => {
            let limit = config.highlight_limit();
            let breeds = catalog.highlighted_breeds(limit);
            let facts = catalog.highlighted_facts(limit);

            if cli.json {
                return print_json(&serde_json::json!({ "breeds": breeds, "facts": facts }));
            }

            println!("⭐ Featured breeds:");
            for breed in breeds {
                println!("  {}", views::breed_line(breed));
            }
            println!();
            println!("⭐ Featured facts:");
            for fact in facts {
                println!("  {}", views::fact_line(fact));
            }
        }
        Command::Options => {
            let breed_options = catalog.breed_filter_options();
            let fact_options = catalog.fact_filter_options();

            if cli.json {
                return print_json(
                    &serde_json::json!({ "breeds": breed_options, "facts": fact_options }),
                );
            }

            let join = |items: Vec<String>| items.join(", ");
            println!("📋 Breed filters:");
            println!(
                "  purpose:    {}",
                join(breed_options.purposes.iter().map(|p| p.to_string()).collect())
            );
            println!(
                "  size:       {}",
                join(breed_options.sizes.iter().map(|s| s.to_string()).collect())
            );
            println!("  origin:     {}", breed_options.origins.join(", "));
            println!("  popularity: 1-10 (minimum)");
            println!();
            println!("📋 Fact filters:");
            println!(
                "  category:   {}",
                join(fact_options.categories.iter().map(|c| c.to_string()).collect())
            );
            println!(
                "  difficulty: {}",
                join(fact_options.difficulties.iter().map(|d| d.to_string()).collect())
            );
            println!(
                "  age group:  {}",
                join(fact_options.age_groups.iter().map(|a| a.to_string()).collect())
            );
        }
    }

    Ok(())
}
