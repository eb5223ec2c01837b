// ABOUTME: Goal comparison for a newly recorded weight against the user's goal weight
// ABOUTME: Exposes the "current <= goal" fact; dispatching a notification is the caller's job
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Whether `current` meets or beats `goal`
#[must_use]
pub const fn goal_reached(current: u32, goal: u32) -> bool {
    current <= goal
}

/// Progress of a recorded weight toward the goal weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Most recently recorded weight
    pub current: u32,
    /// Goal weight supplied by the caller
    pub goal: u32,
    /// Weight still to lose; 0 once the goal is reached
    pub remaining: u32,
    /// `current <= goal`
    pub reached: bool,
}

impl GoalProgress {
    /// Compare a recorded weight with the goal
    #[must_use]
    pub const fn new(current: u32, goal: u32) -> Self {
        Self {
            current,
            goal,
            remaining: current.saturating_sub(goal),
            reached: goal_reached(current, goal),
        }
    }
}
