use crate::domain::model::{Breed, Fact};
use crate::domain::ports::DatasetSource;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

const SEED_BREEDS: &str = include_str!("../../data/breeds.json");
const SEED_FACTS: &str = include_str!("../../data/facts.json");

pub fn parse_breeds(json: &str) -> Result<Vec<Breed>> {
    Ok(serde_json::from_str(json)?)
}

pub fn parse_facts(json: &str) -> Result<Vec<Fact>> {
    Ok(serde_json::from_str(json)?)
}

/// 編譯時內嵌的種子資料
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDataset;

impl DatasetSource for EmbeddedDataset {
    fn load_breeds(&self) -> Result<Vec<Breed>> {
        parse_breeds(SEED_BREEDS)
    }

    fn load_facts(&self) -> Result<Vec<Fact>> {
        parse_facts(SEED_FACTS)
    }

    fn describe(&self) -> String {
        "embedded seed data".to_string()
    }
}

/// 從磁碟讀取 JSON；沒指定的集合退回內嵌資料
#[derive(Debug, Clone, Default)]
pub struct FileDataset {
    breeds_path: Option<PathBuf>,
    facts_path: Option<PathBuf>,
}

impl FileDataset {
    pub fn new(breeds_path: Option<PathBuf>, facts_path: Option<PathBuf>) -> Self {
        Self {
            breeds_path,
            facts_path,
        }
    }

    fn read(path: &Path) -> Result<String> {
        tracing::debug!("Reading dataset file: {}", path.display());
        let content = fs::read_to_string(path)?;
        Ok(content)
    }
}

impl DatasetSource for FileDataset {
    fn load_breeds(&self) -> Result<Vec<Breed>> {
        match &self.breeds_path {
            Some(path) => parse_breeds(&Self::read(path)?),
            None => EmbeddedDataset.load_breeds(),
        }
    }

    fn load_facts(&self) -> Result<Vec<Fact>> {
        match &self.facts_path {
            Some(path) => parse_facts(&Self::read(path)?),
            None => EmbeddedDataset.load_facts(),
        }
    }

    fn describe(&self) -> String {
        let show = |p: &Option<PathBuf>| {
            p.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "embedded".to_string())
        };
        format!(
            "breeds: {}, facts: {}",
            show(&self.breeds_path),
            show(&self.facts_path)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CatalogError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_embedded_dataset_parses() {
        let breeds = EmbeddedDataset.load_breeds().unwrap();
        let facts = EmbeddedDataset.load_facts().unwrap();
        assert_eq!(breeds[0].id, "holstein");
        assert_eq!(breeds[1].characteristics.milk_production, None);
        assert_eq!(facts.last().unwrap().id, "cow-nutrition-needs");
    }

    #[test]
    fn test_file_dataset_falls_back_to_embedded() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let facts = serde_json::to_string(&EmbeddedDataset.load_facts().unwrap()[..2]).unwrap();
        temp_file.write_all(facts.as_bytes()).unwrap();

        let source = FileDataset::new(None, Some(temp_file.path().to_path_buf()));
        assert_eq!(source.load_facts().unwrap().len(), 2);
        assert_eq!(source.load_breeds().unwrap().len(), 6);
        assert!(source.describe().starts_with("breeds: embedded"));
    }

    #[test]
    fn test_malformed_json_is_a_serialization_error() {
        let err = parse_facts("[{\"id\": 1}]").unwrap_err();
        assert!(matches!(err, CatalogError::SerializationError(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let source = FileDataset::new(Some(PathBuf::from("/nonexistent/breeds.json")), None);
        assert!(matches!(
            source.load_breeds(),
            Err(CatalogError::IoError(_))
        ));
    }
}
