//! イベント種別 → ハンドラのディスパッチテーブル

use super::{Effect, EventKind, SessionState, UiEvent};
use std::collections::HashMap;

/// イベントハンドラ
pub type Handler<F> = fn(&mut SessionState<F>, UiEvent<F>) -> Vec<Effect<F>>;

pub struct DispatchTable<F> {
    handlers: HashMap<EventKind, Handler<F>>,
}

impl<F> Default for DispatchTable<F> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }
}

impl<F> DispatchTable<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// ハンドラを登録。既存のものがあれば置き換えて返す
    pub fn register(&mut self, kind: EventKind, handler: Handler<F>) -> Option<Handler<F>> {
        self.handlers.insert(kind, handler)
    }

    pub fn is_registered(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// 未登録のイベントは無視する
    pub fn dispatch(&self, state: &mut SessionState<F>, event: UiEvent<F>) -> Vec<Effect<F>> {
        match self.handlers.get(&event.kind()) {
            Some(handler) => handler(state, event),
            None => Vec::new(),
        }
    }
}
