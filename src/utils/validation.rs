use crate::utils::error::{CatalogError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// 樣本數來自外部輸入時，負數直接拒絕
pub fn validate_sample_count(count: i64) -> Result<usize> {
    usize::try_from(count).map_err(|_| CatalogError::InvalidSampleCount { count })
}

/// 檢查資料集欄位的數值範圍 (閉區間)
pub fn validate_entity_range<T: PartialOrd + std::fmt::Display + Copy>(
    entity: &str,
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CatalogError::DatasetValidationError {
            entity: entity.to_string(),
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_entity_positive(entity: &str, field_name: &str, value: f64) -> Result<()> {
    if !(value > 0.0) {
        return Err(CatalogError::DatasetValidationError {
            entity: entity.to_string(),
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}

pub fn validate_entity_text(entity: &str, field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::DatasetValidationError {
            entity: entity.to_string(),
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// 確認 key 在整個集合中唯一
pub fn validate_unique_keys<'a, I>(collection: &str, field_name: &str, keys: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(CatalogError::DuplicateKey {
                collection: collection.to_string(),
                field: field_name.to_string(),
                value: key.to_string(),
            });
        }
    }
    Ok(())
}
