use anyhow::Result;
use cattle_catalog::core::filter::{find_by_id, find_by_slug};
use cattle_catalog::Catalog;
use std::sync::Arc;
use std::thread;

#[test]
fn test_every_breed_round_trips_through_lookup() -> Result<()> {
    let catalog = Catalog::seeded()?;

    for breed in catalog.breeds() {
        assert_eq!(catalog.breed_by_id(&breed.id), Some(breed));
        assert_eq!(catalog.breed_by_slug(&breed.slug), Some(breed));
    }
    for fact in catalog.facts() {
        assert_eq!(catalog.fact_by_id(&fact.id), Some(fact));
    }
    Ok(())
}

#[test]
fn test_unknown_keys_are_absent() -> Result<()> {
    let catalog = Catalog::seeded()?;

    assert!(catalog.breed_by_id("wagyu").is_none());
    assert!(catalog.breed_by_slug("").is_none());
    assert!(catalog.fact_by_id("cow-flight").is_none());

    // 大小寫必須完全相同
    assert!(catalog.breed_by_slug("Holstein").is_none());
    assert!(find_by_id(catalog.facts(), "COW-MEMORY").is_none());
    assert!(find_by_slug(catalog.breeds(), "jersey").is_some());
    Ok(())
}

#[test]
fn test_featured_breeds_keep_collection_order() -> Result<()> {
    let catalog = Catalog::seeded()?;
    let featured: Vec<&str> = catalog
        .featured_breeds()
        .iter()
        .map(|b| b.id.as_str())
        .collect();

    assert_eq!(featured, vec!["holstein", "angus", "jersey", "hereford"]);
    assert_eq!(catalog.highlighted_breeds(3).len(), 3);
    Ok(())
}

#[test]
fn test_catalog_is_shareable_across_threads() -> Result<()> {
    let catalog = Arc::new(Catalog::seeded()?);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || catalog.search_breeds("dairy").len())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("reader thread panicked"), 2);
    }
    Ok(())
}
