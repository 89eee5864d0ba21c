use crate::domain::model::{Breed, Fact};
use serde::Serialize;
use std::fmt;
use std::fmt::Write;

/// 列表頁頂端的「Showing X of Y」資訊
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSummary {
    pub shown: usize,
    pub total: usize,
    pub active_filters: usize,
}

impl ListingSummary {
    pub fn new(shown: usize, total: usize, active_filters: usize) -> Self {
        Self {
            shown,
            total,
            active_filters,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shown == 0
    }
}

impl fmt::Display for ListingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {}", self.shown, self.total)?;
        if self.active_filters > 0 {
            write!(f, " ({} active filters)", self.active_filters)?;
        }
        Ok(())
    }
}

pub fn breed_line(breed: &Breed) -> String {
    format!(
        "{:<12} {:<13} {:<7} ★{:>2}  {}",
        breed.name,
        breed.primary_purpose,
        breed.characteristics.size,
        breed.popularity(),
        breed.origin
    )
}

pub fn breed_detail(breed: &Breed, related: &[&Breed]) -> String {
    let mut out = String::new();
    let c = &breed.characteristics;

    let _ = writeln!(out, "🐄 {} ({})", breed.name, breed.origin);
    let _ = writeln!(out, "{}", breed.short_description);
    let _ = writeln!(out);
    let _ = writeln!(out, "  Purpose:     {}", breed.primary_purpose);
    let _ = writeln!(out, "  Size:        {}", c.size);
    let _ = writeln!(out, "  Temperament: {}", c.temperament);
    let _ = writeln!(out, "  Colors:      {}", c.colors.join(", "));
    let _ = writeln!(
        out,
        "  Weight:      {} kg (male) / {} kg (female)",
        c.average_weight.male, c.average_weight.female
    );
    if let Some(milk) = c.milk_production {
        let _ = writeln!(out, "  Milk:        {} l/year", milk);
    }
    let _ = writeln!(out, "  Lifespan:    {} years", c.lifespan);
    let _ = writeln!(
        out,
        "  Popularity:  {}/10 (demand {}, cost {})",
        breed.economic_value.popularity,
        breed.economic_value.market_demand,
        breed.economic_value.cost_to_raise
    );

    if !breed.fun_facts.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "💡 Fun facts:");
        for fact in &breed.fun_facts {
            let _ = writeln!(out, "  - {}", fact);
        }
    }

    if !related.is_empty() {
        let _ = writeln!(out);
        let names: Vec<&str> = related.iter().map(|b| b.name.as_str()).collect();
        let _ = writeln!(out, "🔗 Related breeds: {}", names.join(", "));
    }

    out
}

pub fn fact_line(fact: &Fact) -> String {
    format!(
        "{} {} [{} · {} · {} · {} min]",
        fact.icon, fact.title, fact.category, fact.difficulty, fact.age_group, fact.read_time
    )
}

pub fn fact_detail(fact: &Fact) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", fact_line(fact));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", fact.content);
    if !fact.sources.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "📖 Sources: {}", fact.sources.join("; "));
    }
    if !fact.tags.is_empty() {
        let _ = writeln!(out, "🏷️ Tags: {}", fact.tags.join(", "));
    }
    out
}
