//! In-memory tariff repository

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{DomainError, DomainResult, RoomId, TariffRepository, TariffRow};

/// Immutable snapshot of the tariff table, seeded once at startup
#[derive(Debug, Clone, Default)]
pub struct InMemoryTariffRepository {
    tariffs: HashMap<RoomId, TariffRow>,
}

impl InMemoryTariffRepository {
    /// Seed from rows, rejecting negative rates and duplicate rooms
    pub fn from_rows(rows: impl IntoIterator<Item = TariffRow>) -> DomainResult<Self> {
        let mut tariffs = HashMap::new();
        for row in rows {
            row.validate()?;
            if tariffs.contains_key(&row.room_id) {
                return Err(DomainError::DuplicateRoom(row.room_id));
            }
            tariffs.insert(row.room_id, row);
        }

        info!(rooms = tariffs.len(), "Tariff repository seeded");
        Ok(Self { tariffs })
    }

    pub fn from_config(config: &AppConfig) -> DomainResult<Self> {
        Self::from_rows(config.tariffs.iter().cloned())
    }

    pub fn len(&self) -> usize {
        self.tariffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tariffs.is_empty()
    }
}

#[async_trait]
impl TariffRepository for InMemoryTariffRepository {
    async fn find_tariff(&self, room_id: RoomId) -> DomainResult<Option<TariffRow>> {
        Ok(self.tariffs.get(&room_id).cloned())
    }

    async fn find_tariffs(&self, room_ids: &[RoomId]) -> DomainResult<Vec<TariffRow>> {
        let mut seen = HashSet::new();
        Ok(room_ids
            .iter()
            .filter(|id| seen.insert(**id))
            .filter_map(|id| self.tariffs.get(id).cloned())
            .collect())
    }
}
