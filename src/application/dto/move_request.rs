// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::ordering::MoveDirection;
use serde::{Deserialize, Serialize};

/// 上移/下移请求
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MoveRequestDto {
    /// `up` 或 `down`
    #[serde(default)]
    pub direction: String,
}

impl MoveRequestDto {
    pub fn direction(&self) -> Option<MoveDirection> {
        self.direction.trim().to_ascii_lowercase().parse().ok()
    }
}
