use thiserror::Error;

use crate::api::{ChartKind, DatasetKind};

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid plot area: width={width}, height={height}")]
    InvalidPlotArea { width: f64, height: f64 },

    #[error("chart kind {kind:?} cannot lay out a {dataset:?} dataset")]
    DatasetMismatch { kind: ChartKind, dataset: DatasetKind },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render backend failure: {0}")]
    Render(String),
}
