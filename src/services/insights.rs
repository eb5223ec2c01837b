// ABOUTME: Insight service: load a user's series, sort it, and run the trend analyzer
// ABOUTME: Also records new weights and reports goal progress for notification dispatch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::InsightConfig;
use crate::database::{GoalRepository, ObservationRepository};
use crate::errors::AppResult;
use crate::intelligence::{sort_observations, GoalProgress, SortOrder, Trend, TrendAnalyzer};
use crate::models::{Observation, UserId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// How much data backed an [`InsightSummary`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightStatus {
    /// No observations recorded yet
    NoData,
    /// A single observation; no direction can be derived
    InsufficientData,
    /// Two or more observations were analysed
    Ready,
}

/// Latest smoothed weight and trend for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightSummary {
    /// Number of observations analysed
    pub observation_count: usize,
    /// Weight of the most recently entered observation, whatever its date
    pub current_weight: Option<u32>,
    /// Last rolling average; the sole weight when only one exists
    pub latest_average: Option<f64>,
    /// Direction of the last two rolling averages
    pub trend: Trend,
    /// Data sufficiency
    pub status: InsightStatus,
}

impl InsightSummary {
    /// Summarise a series already sorted ascending by date
    ///
    /// `current_weight` comes from the store's latest entry, which differs
    /// from the last element of `series` when an older date was back-filled.
    #[must_use]
    pub fn from_sorted_series(
        series: &[Observation],
        current_weight: Option<u32>,
        analyzer: &TrendAnalyzer,
    ) -> Self {
        match series {
            [] => Self {
                observation_count: 0,
                current_weight,
                latest_average: None,
                trend: Trend::Stable,
                status: InsightStatus::NoData,
            },
            [only] => Self {
                observation_count: 1,
                current_weight,
                latest_average: Some(only.weight_value()),
                trend: Trend::Stable,
                status: InsightStatus::InsufficientData,
            },
            _ => {
                let analysis = analyzer.analyze(series);
                Self {
                    observation_count: series.len(),
                    current_weight,
                    latest_average: analysis.latest_average(),
                    trend: analysis.trend,
                    status: InsightStatus::Ready,
                }
            }
        }
    }
}

/// Outcome of recording a weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordOutcome {
    /// The stored observation
    pub observation: Observation,
    /// Progress toward the goal, when the user has one
    pub goal: Option<GoalProgress>,
}

/// Reads a user's observations from a store and produces insights
pub struct InsightService<R> {
    repository: Arc<R>,
    analyzer: TrendAnalyzer,
}

impl<R> InsightService<R>
where
    R: ObservationRepository + GoalRepository,
{
    /// Create a service using the window and threshold from `config`
    #[must_use]
    pub fn new(repository: Arc<R>, config: &InsightConfig) -> Self {
        Self {
            repository,
            analyzer: config.analyzer(),
        }
    }

    /// Current weight, latest rolling average and trend for a user
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails
    pub async fn summarize(&self, user_id: UserId) -> AppResult<InsightSummary> {
        let mut series = self.repository.list(user_id).await?;
        sort_observations(&mut series, SortOrder::Ascending);
        let current_weight = self
            .repository
            .latest(user_id)
            .await?
            .map(|latest| latest.weight);

        let summary = InsightSummary::from_sorted_series(&series, current_weight, &self.analyzer);
        debug!(
            user.id = %user_id,
            current_weight = ?summary.current_weight,
            observations = summary.observation_count,
            status = ?summary.status,
            trend = summary.trend.as_str(),
            "Computed weight insight"
        );
        Ok(summary)
    }

    /// Record a weight and compare it with the user's goal
    ///
    /// The caller decides whether to send a congratulatory notification when
    /// [`GoalProgress::reached`] is true.
    ///
    /// # Errors
    ///
    /// Returns an error if validation rejects the weight or date, or the store fails
    pub async fn record_weight(
        &self,
        user_id: UserId,
        date: NaiveDate,
        weight: u32,
    ) -> AppResult<RecordOutcome> {
        let observation = self.repository.add(user_id, date, weight).await?;
        let goal = self
            .repository
            .goal(user_id)
            .await?
            .map(|goal_weight| GoalProgress::new(weight, goal_weight));

        if let Some(progress) = goal.filter(|p| p.reached) {
            info!(
                user.id = %user_id,
                current = progress.current,
                goal = progress.goal,
                "Goal weight reached"
            );
        }

        Ok(RecordOutcome { observation, goal })
    }

    /// Observations for a log view, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails
    pub async fn display_log(&self, user_id: UserId) -> AppResult<Vec<Observation>> {
        let mut entries = self.repository.list(user_id).await?;
        sort_observations(&mut entries, SortOrder::Descending);
        Ok(entries)
    }
}
