// ABOUTME: In-memory observation and goal store behind a tokio RwLock
// ABOUTME: Validates every write and hands out monotonically increasing, never-reused ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::validation::{today, validate_date, validate_weight};
use super::{GoalRepository, ObservationRepository};
use crate::errors::{AppError, AppResult};
use crate::models::{Observation, ObservationId, UserId};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{info, warn};

#[derive(Debug, Default)]
struct StoreState {
    last_id: u64,
    observations: HashMap<UserId, Vec<Observation>>,
    goals: HashMap<UserId, u32>,
}

/// Process-local store; contents are lost when it is dropped
pub struct InMemoryObservationStore {
    state: RwLock<StoreState>,
    clock: fn() -> NaiveDate,
}

impl Default for InMemoryObservationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryObservationStore {
    /// Create an empty store validating dates against the local calendar
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(today)
    }

    /// Create an empty store with a custom "today" source
    #[must_use]
    pub fn with_clock(clock: fn() -> NaiveDate) -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
            clock,
        }
    }

    fn validate(&self, date: NaiveDate, weight: u32) -> AppResult<()> {
        validate_weight(weight)
            .and_then(|()| validate_date(date, (self.clock)()))
            .inspect_err(|e| warn!(error = %e, "Rejected observation write"))
    }
}

#[async_trait]
impl ObservationRepository for InMemoryObservationStore {
    async fn add(&self, user_id: UserId, date: NaiveDate, weight: u32) -> AppResult<Observation> {
        self.validate(date, weight)?;

        let mut state = self.state.write().await;
        state.last_id += 1;
        let observation = Observation::new(ObservationId(state.last_id), date, weight);
        state
            .observations
            .entry(user_id)
            .or_default()
            .push(observation);

        info!(user.id = %user_id, observation.id = %observation.id, %date, weight, "Observation recorded");
        Ok(observation)
    }

    async fn update(
        &self,
        user_id: UserId,
        id: ObservationId,
        date: NaiveDate,
        weight: u32,
    ) -> AppResult<Observation> {
        self.validate(date, weight)?;

        let mut state = self.state.write().await;
        let slot = state
            .observations
            .get_mut(&user_id)
            .and_then(|entries| entries.iter_mut().find(|o| o.id == id))
            .ok_or_else(|| {
                AppError::not_found(format!("Observation {id}")).with_resource_id(id.to_string())
            })?;
        *slot = Observation::new(id, date, weight);

        info!(user.id = %user_id, observation.id = %id, %date, weight, "Observation updated");
        Ok(*slot)
    }

    async fn delete(&self, user_id: UserId, id: ObservationId) -> AppResult<()> {
        let mut state = self.state.write().await;
        let removed = state.observations.get_mut(&user_id).and_then(|entries| {
            let index = entries.iter().position(|o| o.id == id)?;
            Some(entries.remove(index))
        });

        if removed.is_none() {
            return Err(
                AppError::not_found(format!("Observation {id}")).with_resource_id(id.to_string())
            );
        }
        info!(user.id = %user_id, observation.id = %id, "Observation deleted");
        Ok(())
    }

    async fn list(&self, user_id: UserId) -> AppResult<Vec<Observation>> {
        let state = self.state.read().await;
        Ok(state
            .observations
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn latest(&self, user_id: UserId) -> AppResult<Option<Observation>> {
        let state = self.state.read().await;
        Ok(state
            .observations
            .get(&user_id)
            .and_then(|entries| entries.iter().max_by_key(|o| o.id).copied()))
    }
}

#[async_trait]
impl GoalRepository for InMemoryObservationStore {
    async fn set_goal(&self, user_id: UserId, goal_weight: u32) -> AppResult<()> {
        validate_weight(goal_weight)
            .inspect_err(|e| warn!(error = %e, "Rejected goal weight"))?;

        let mut state = self.state.write().await;
        let previous = state.goals.insert(user_id, goal_weight);
        info!(
            user.id = %user_id,
            goal_weight,
            updated = previous.is_some(),
            "Goal weight saved"
        );
        Ok(())
    }

    async fn goal(&self, user_id: UserId) -> AppResult<Option<u32>> {
        Ok(self.state.read().await.goals.get(&user_id).copied())
    }
}
