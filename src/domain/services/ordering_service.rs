// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::ordering::MoveDirection;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 参与排序的记录
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranked {
    pub id: Uuid,
    pub order: i32,
    pub created_at: DateTime<Utc>,
}

/// 移动计划的执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovePlan {
    /// 目标 id 不在序列中
    NotFound,
    /// 已经在边界上，无需改动
    Unchanged,
    /// 需要写回的 `(id, order)` 列表，必须在同一事务内全部生效
    Assign(Vec<(Uuid, i32)>),
}

/// 排序服务
///
/// 计算上移/下移需要写回的 `order` 值，不涉及存储
pub struct OrderingService;

impl OrderingService {
    /// 按展示顺序排序：`order`，其次创建时间，最后 id
    pub fn sort(items: &mut [Ranked]) {
        items.sort_by(|a, b| {
            a.order
                .cmp(&b.order)
                .then(a.created_at.cmp(&b.created_at))
                .then(a.id.cmp(&b.id))
        });
    }

    /// 计算将 `id` 向 `direction` 移动一位的写回计划
    ///
    /// 正常情况下只与相邻记录交换 `order`。若序列中存在重复的 `order`，
    /// 先按当前顺序重新编号为 `1..=n` 再交换，保证结束后没有两条记录共享同一个值。
    pub fn plan_move(items: &[Ranked], id: Uuid, direction: MoveDirection) -> MovePlan {
        let mut sorted = items.to_vec();
        Self::sort(&mut sorted);

        let Some(index) = sorted.iter().position(|r| r.id == id) else {
            return MovePlan::NotFound;
        };

        let neighbor = match direction {
            MoveDirection::Up if index > 0 => index - 1,
            MoveDirection::Down if index + 1 < sorted.len() => index + 1,
            _ => return MovePlan::Unchanged,
        };

        let has_duplicates = sorted.windows(2).any(|w| w[0].order == w[1].order);

        if !has_duplicates {
            let current = sorted[index];
            let other = sorted[neighbor];
            return MovePlan::Assign(vec![(current.id, other.order), (other.id, current.order)]);
        }

        let mut ranks: Vec<(Uuid, i32)> = sorted
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id, i as i32 + 1))
            .collect();
        let (current_rank, neighbor_rank) = (ranks[index].1, ranks[neighbor].1);
        ranks[index].1 = neighbor_rank;
        ranks[neighbor].1 = current_rank;

        // Only rows whose value actually changes need to be written
        let assignments = ranks
            .into_iter()
            .zip(sorted.iter())
            .filter(|((_, new_order), original)| *new_order != original.order)
            .map(|(assignment, _)| assignment)
            .collect();

        MovePlan::Assign(assignments)
    }

    /// 在已有序列之后追加时使用的 `order`
    pub fn next_order(max_order: Option<i32>) -> i32 {
        max_order.map(|m| m.saturating_add(1)).unwrap_or(1)
    }
}
