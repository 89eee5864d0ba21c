use anyhow::Result;
use cattle_catalog::core::sample::{sample, sample_with_rng};
use cattle_catalog::utils::validation::validate_sample_count;
use cattle_catalog::{Catalog, CatalogError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

#[test]
fn test_three_random_facts_are_distinct_members() -> Result<()> {
    let catalog = Catalog::seeded()?;
    let known: HashSet<&str> = catalog.facts().iter().map(|f| f.id.as_str()).collect();

    for _ in 0..20 {
        let picked = catalog.random_facts(3);
        assert_eq!(picked.len(), 3);

        let unique: HashSet<&str> = picked.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(unique.len(), 3);
        assert!(unique.is_subset(&known));
    }
    Ok(())
}

#[test]
fn test_zero_count_is_empty() -> Result<()> {
    let catalog = Catalog::seeded()?;
    assert!(catalog.random_facts(0).is_empty());
    assert!(sample(catalog.breeds(), 0).is_empty());
    Ok(())
}

#[test]
fn test_full_count_is_a_permutation() -> Result<()> {
    let catalog = Catalog::seeded()?;
    let total = catalog.facts().len();

    for count in [total, total + 5] {
        let picked = catalog.random_facts(count);
        assert_eq!(picked.len(), total);

        let mut picked_ids: Vec<&str> = picked.iter().map(|f| f.id.as_str()).collect();
        let mut all_ids: Vec<&str> = catalog.facts().iter().map(|f| f.id.as_str()).collect();
        picked_ids.sort();
        all_ids.sort();
        assert_eq!(picked_ids, all_ids);
    }
    Ok(())
}

#[test]
fn test_empty_collection_with_positive_count() {
    let empty: Vec<String> = Vec::new();
    assert!(sample(&empty, 4).is_empty());
}

#[test]
fn test_sampling_leaves_source_untouched() -> Result<()> {
    let catalog = Catalog::seeded()?;
    let before: Vec<String> = catalog.facts().iter().map(|f| f.id.clone()).collect();

    let _ = catalog.random_facts(5);

    let after: Vec<String> = catalog.facts().iter().map(|f| f.id.clone()).collect();
    assert_eq!(before, after);
    Ok(())
}

#[test]
fn test_seeded_sampling_is_deterministic() -> Result<()> {
    let catalog = Catalog::seeded()?;

    let first = catalog.random_facts_with_rng(4, &mut StdRng::seed_from_u64(7));
    let second = catalog.random_facts_with_rng(4, &mut StdRng::seed_from_u64(7));
    assert_eq!(first, second);

    let breeds = sample_with_rng(catalog.breeds(), 2, &mut StdRng::seed_from_u64(7));
    assert_eq!(breeds.len(), 2);
    Ok(())
}

/// 不同次呼叫不應永遠得到同一組
#[test]
fn test_every_fact_can_be_picked() -> Result<()> {
    let catalog = Catalog::seeded()?;
    let mut seen = HashSet::new();

    for seed in 0..200 {
        for fact in catalog.random_facts_with_rng(1, &mut StdRng::seed_from_u64(seed)) {
            seen.insert(fact.id.clone());
        }
    }
    assert_eq!(seen.len(), catalog.facts().len());
    Ok(())
}

#[test]
fn test_negative_count_is_invalid_input() {
    let err = validate_sample_count(-3).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidSampleCount { count: -3 }));
    assert!(err.recovery_suggestion().contains("zero or more"));
}
