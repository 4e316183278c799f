//! Tariff repository interface

use async_trait::async_trait;

use super::model::{RoomId, TariffRow};
use crate::domain::DomainResult;

/// Read access to the per-room tariff table.
///
/// Implementations may be local snapshots or remote stores; an unknown room
/// is `Ok(None)`, never an error.
#[async_trait]
pub trait TariffRepository: Send + Sync {
    async fn find_tariff(&self, room_id: RoomId) -> DomainResult<Option<TariffRow>>;

    /// Rows for the rooms that exist, in request order, each room at most once
    async fn find_tariffs(&self, room_ids: &[RoomId]) -> DomainResult<Vec<TariffRow>>;
}
