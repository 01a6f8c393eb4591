use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::LayoutResult;

pub const LAYOUT_RESULT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope used for golden layout snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResultJsonContractV1 {
    pub schema_version: u32,
    pub result: LayoutResult,
}

impl LayoutResult {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize layout result: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = LayoutResultJsonContractV1 {
            schema_version: LAYOUT_RESULT_JSON_SCHEMA_V1,
            result: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize layout contract v1: {e}"))
        })
    }

    /// Accepts either a bare result or a versioned v1 envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(result) = serde_json::from_str::<LayoutResult>(input) {
            return Ok(result);
        }
        let payload: LayoutResultJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse layout json payload: {e}"))
        })?;
        if payload.schema_version != LAYOUT_RESULT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported layout schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.result)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{Color, Point};
    use crate::render::{LayoutResult, LegendEntry, MarkerPrimitive};

    #[test]
    fn rejects_unknown_schema_version() {
        let input = r#"{"schema_version": 7, "result": {"primitives": [], "ticks": [], "legend_entries": []}}"#;
        assert!(LayoutResult::from_json_compat_str(input).is_err());
    }

    #[test]
    fn envelope_and_bare_forms_agree() {
        let mut result = LayoutResult::empty();
        result.push(MarkerPrimitive::new(Point::new(4.0, 5.0), 4.0, Color::RED));
        result.legend_entries.push(LegendEntry::new("a", Color::RED));

        let wrapped = result.to_json_contract_v1_pretty().expect("serialize");
        let bare = result.to_json_pretty().expect("serialize");
        assert_eq!(LayoutResult::from_json_compat_str(&wrapped).expect("parse"), result);
        assert_eq!(LayoutResult::from_json_compat_str(&bare).expect("parse"), result);
    }
}
