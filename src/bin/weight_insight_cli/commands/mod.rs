// ABOUTME: Command modules for the weight-insight CLI
// ABOUTME: Shares the file import step used by analyze and log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod analyze;
pub mod log;

use std::path::Path;
use std::sync::Arc;
use tracing::info;
use weight_insight::{
    config::InsightConfig,
    database::{file_source::load_records, GoalRepository, InMemoryObservationStore},
    errors::AppResult,
    models::UserId,
    services::{InsightService, RecordOutcome},
};

/// A service holding one imported user's records
pub struct Imported {
    /// Service over the populated store
    pub service: InsightService<InMemoryObservationStore>,
    /// Owner of the imported records
    pub user: UserId,
    /// Outcome of the last record in file order
    pub last: Option<RecordOutcome>,
}

/// Load `path` into a fresh in-memory store, setting `goal` before any record
pub async fn import(
    path: &Path,
    config: &InsightConfig,
    goal: Option<u32>,
) -> AppResult<Imported> {
    let records = load_records(path)?;
    let store = Arc::new(InMemoryObservationStore::new());
    let user = UserId::new();
    if let Some(goal_weight) = goal {
        store.set_goal(user, goal_weight).await?;
    }

    let service = InsightService::new(store, config);
    let mut last = None;
    for record in &records {
        last = Some(service.record_weight(user, record.date, record.weight).await?);
    }
    info!(path = %path.display(), records = records.len(), "Imported weight records");

    Ok(Imported {
        service,
        user,
        last,
    })
}
