//! Fixed-size pages over the in-memory collection
//!
//! Pages are 1-based. An empty collection still has one (empty) page, and a
//! page size of zero is treated as one.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Ticks spent in each half of a page fade
pub const FADE_TICKS: u32 = 6;

pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

pub fn is_valid_page(len: usize, page_size: usize, page: usize) -> bool {
    page >= 1 && page <= total_pages(len, page_size)
}

pub fn visible_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Target page for a relative move, `None` when it would leave `1..=total`
pub fn offset_page(len: usize, page_size: usize, page: usize, delta: i32) -> Option<usize> {
    let target = i64::try_from(page).ok()? + i64::from(delta);
    let target = usize::try_from(target).ok()?;
    is_valid_page(len, page_size, target).then_some(target)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FadePhase {
    Out,
    In,
}

/// Fade-out, swap while hidden, fade-in
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTransition {
    pub target: usize,
    pub phase: FadePhase,
    pub ticks: u32,
}

/// What a tick did to a running transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionStep {
    Running,
    /// Content is hidden: reset scroll and swap to `target` now.
    Swap { target: usize },
    Finished,
}

impl PageTransition {
    pub fn start(target: usize) -> Self {
        Self {
            target,
            phase: FadePhase::Out,
            ticks: 0,
        }
    }

    pub fn advance(&mut self) -> TransitionStep {
        self.ticks = self.ticks.saturating_add(1);
        if self.ticks < FADE_TICKS {
            return TransitionStep::Running;
        }
        match self.phase {
            FadePhase::Out => {
                self.phase = FadePhase::In;
                self.ticks = 0;
                TransitionStep::Swap {
                    target: self.target,
                }
            }
            FadePhase::In => TransitionStep::Finished,
        }
    }

    pub fn opacity(&self) -> f32 {
        let progress = (self.ticks.min(FADE_TICKS) as f32) / FADE_TICKS as f32;
        match self.phase {
            FadePhase::Out => 1.0 - progress,
            FadePhase::In => progress,
        }
    }
}
