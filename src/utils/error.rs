use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unknown filter field '{field}' (expected one of: {expected})")]
    UnknownFilterField { field: String, expected: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidFilterValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid sort key '{value}' (expected one of: {expected})")]
    InvalidSortKey { value: String, expected: String },

    #[error("Invalid sample count {count}: must be zero or positive")]
    InvalidSampleCount { count: i64 },

    #[error("Duplicate {field} '{value}' in {collection} collection")]
    DuplicateKey {
        collection: String,
        field: String,
        value: String,
    },

    #[error("Invalid dataset entry '{entity}': {field} = {value} ({reason})")]
    DatasetValidationError {
        entity: String,
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Dataset,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::UnknownFilterField { .. }
            | CatalogError::InvalidFilterValue { .. }
            | CatalogError::InvalidSortKey { .. }
            | CatalogError::InvalidSampleCount { .. } => ErrorCategory::Input,
            CatalogError::DuplicateKey { .. }
            | CatalogError::DatasetValidationError { .. }
            | CatalogError::SerializationError(_) => ErrorCategory::Dataset,
            CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CatalogError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 使用者輸入錯誤，修正參數即可
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Dataset => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::UnknownFilterField { field, .. } => {
                format!("'{}' is not a filter this listing supports", field)
            }
            CatalogError::InvalidFilterValue { field, value, .. } => {
                format!("'{}' is not a valid {}", value, field)
            }
            CatalogError::InvalidSortKey { value, .. } => {
                format!("'{}' is not a recognised sort order", value)
            }
            CatalogError::InvalidSampleCount { count } => {
                format!("Cannot pick {} items", count)
            }
            CatalogError::DuplicateKey { .. } | CatalogError::DatasetValidationError { .. } => {
                format!("The catalog data is inconsistent: {}", self)
            }
            CatalogError::SerializationError(e) => {
                format!("The catalog data could not be read: {}", e)
            }
            CatalogError::IoError(e) => format!("File access failed: {}", e),
            _ => format!("Configuration problem: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CatalogError::UnknownFilterField { expected, .. } => {
                format!("Use one of the supported filters: {}", expected)
            }
            CatalogError::InvalidFilterValue { reason, .. } => reason.clone(),
            CatalogError::InvalidSortKey { expected, .. } => {
                format!("Use one of: {}", expected)
            }
            CatalogError::InvalidSampleCount { .. } => {
                "Pass a count of zero or more".to_string()
            }
            CatalogError::DuplicateKey { field, .. } => {
                format!("Give every entry a unique {}", field)
            }
            CatalogError::DatasetValidationError { field, .. } => {
                format!("Fix the '{}' value in the dataset file", field)
            }
            CatalogError::SerializationError(_) => {
                "Check that the dataset file is valid JSON in the catalog schema".to_string()
            }
            CatalogError::IoError(_) => {
                "Check that the file exists and is readable".to_string()
            }
            CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. } => {
                "Review the configuration file against the documented keys".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
