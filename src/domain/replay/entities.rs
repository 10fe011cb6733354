use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::value_objects::FilterParameters;

/// Body of `POST /api/replay`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayRequest {
    pub exchange: String,
    pub from_date: String,
    pub to_date: String,
    pub symbols: Vec<String>,
    pub limit: i64,
}

impl From<FilterParameters> for ReplayRequest {
    fn from(params: FilterParameters) -> Self {
        Self {
            exchange: params.exchange,
            from_date: params.from_date,
            to_date: params.to_date,
            symbols: params.symbols,
            limit: params.limit,
        }
    }
}

/// One recorded exchange message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub timestamp: String,
    pub data: Value,
}

/// Answer of the replay service, discriminated by its `success` flag
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "ReplayResponseDto")]
pub enum ReplayResponse {
    Success { count: u64, data: Vec<Message> },
    Failure { error: String },
}

#[derive(Debug, Deserialize)]
struct ReplayResponseDto {
    success: bool,
    #[serde(default)]
    count: Option<u64>,
    #[serde(default)]
    data: Option<Vec<Message>>,
    #[serde(default)]
    error: Option<String>,
}

impl TryFrom<ReplayResponseDto> for ReplayResponse {
    type Error = String;

    fn try_from(dto: ReplayResponseDto) -> Result<Self, Self::Error> {
        if !dto.success {
            return Ok(ReplayResponse::Failure {
                error: dto.error.unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        match (dto.count, dto.data) {
            (Some(count), Some(data)) => Ok(ReplayResponse::Success { count, data }),
            (None, Some(data)) => Ok(ReplayResponse::Success { count: data.len() as u64, data }),
            (Some(0) | None, None) => Ok(ReplayResponse::Success { count: 0, data: Vec::new() }),
            (Some(count), None) => Err(format!(
                "response reports {} messages but has no data field",
                count
            )),
        }
    }
}
