// ABOUTME: Observation store seam: repository traits the insight service reads from
// ABOUTME: Ships an in-memory implementation and a JSON file source for imports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Observation Store
//!
//! Durable storage is an external collaborator. The traits here describe what
//! the insight service needs from it: per-user observation CRUD, a
//! "read everything for a user" query, and the user's goal weight. The store
//! owns domain validation ([`validation`]); the analysis engine never
//! re-validates.

/// JSON file source for bulk imports
pub mod file_source;
/// In-memory store used by the CLI and tests
pub mod memory;
/// Weight and date validation applied on every write
pub mod validation;

pub use memory::InMemoryObservationStore;

use crate::errors::AppResult;
use crate::models::{Observation, ObservationId, UserId};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Per-user storage of weight observations
#[async_trait]
pub trait ObservationRepository: Send + Sync {
    /// Record a new observation and return it with its assigned id
    async fn add(&self, user_id: UserId, date: NaiveDate, weight: u32) -> AppResult<Observation>;

    /// Correct the date and weight of an existing observation, keeping its id
    async fn update(
        &self,
        user_id: UserId,
        id: ObservationId,
        date: NaiveDate,
        weight: u32,
    ) -> AppResult<Observation>;

    /// Remove an observation; its id is never handed out again
    async fn delete(&self, user_id: UserId, id: ObservationId) -> AppResult<()>;

    /// All observations for a user in store (insertion) order
    async fn list(&self, user_id: UserId) -> AppResult<Vec<Observation>>;

    /// Most recently created observation for a user
    async fn latest(&self, user_id: UserId) -> AppResult<Option<Observation>>;
}

/// Per-user goal weight storage
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Insert or replace the user's goal weight
    async fn set_goal(&self, user_id: UserId, goal_weight: u32) -> AppResult<()>;

    /// The user's goal weight, if one was set
    async fn goal(&self, user_id: UserId) -> AppResult<Option<u32>>;
}
