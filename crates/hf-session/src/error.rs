use hf_data::DataError;
use hf_flow::FlowError;
use hf_metrics::MetricError;
use hf_roles::RoleError;

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("Invalid selection: {reason}")]
    InvalidSelection { reason: String },

    #[error("No dataset loaded")]
    NoDataset,

    #[error("Data error: {0}")]
    Data(DataError),

    #[error("Flow error: {0}")]
    Flow(#[from] FlowError),

    #[error("Role error: {0}")]
    Role(#[from] RoleError),

    #[error("Metrics error: {0}")]
    Metrics(MetricError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<DataError> for SessionError {
    fn from(e: DataError) -> Self {
        match e {
            DataError::InvalidSelection { reason } => SessionError::InvalidSelection { reason },
            other => SessionError::Data(other),
        }
    }
}

impl From<MetricError> for SessionError {
    fn from(e: MetricError) -> Self {
        match e {
            MetricError::InvalidSelection { reason } => SessionError::InvalidSelection { reason },
            other => SessionError::Metrics(other),
        }
    }
}
