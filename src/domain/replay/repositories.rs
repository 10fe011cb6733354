use super::entities::{ReplayRequest, ReplayResponse};
use crate::domain::errors::ReplayResult;

/// Port to the replay service.
///
/// `Err` covers transport and decoding failures only; a `success: false`
/// answer comes back as `Ok(ReplayResponse::Failure { .. })`.
#[allow(async_fn_in_trait)]
pub trait ReplayRepository {
    async fn replay(&self, request: &ReplayRequest) -> ReplayResult<ReplayResponse>;
}
