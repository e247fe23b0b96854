//! 検索リクエストの世代管理
//!
//! 応答は完了順に届くため、最新の検索以外の応答は捨てる。

use std::sync::atomic::{AtomicU64, Ordering};

/// 発行したリクエストの世代番号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しいリクエストを開始（以前のチケットは無効になる）
    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// 現在有効なチケット
    pub fn current(&self) -> Ticket {
        Ticket(self.latest.load(Ordering::SeqCst))
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// 保留中の応答をすべて無効にする（検索欄クリア時）
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}
