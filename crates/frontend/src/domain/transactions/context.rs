//! Reactive wrapper around [`SelectionState`], shared between the available
//! transactions list and the closing form through Leptos context.

use leptos::prelude::*;

use contracts::domain::transaction::Transaction;

use super::selection::{ProviderMismatch, SelectionState};

#[derive(Clone, Copy)]
pub struct SelectionContext {
    pub state: RwSignal<SelectionState>,
    /// Last rejected provider mix, consumed by the warning dialog.
    pub mismatch: RwSignal<Option<ProviderMismatch>>,
    /// Bumped when the available pool changed on the server (e.g. after a
    /// closing was submitted) so the list reloads.
    pub pool_version: RwSignal<u64>,
}

impl SelectionContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SelectionState::new()),
            mismatch: RwSignal::new(None),
            pool_version: RwSignal::new(0),
        }
    }

    pub fn invalidate_pool(&self) {
        self.pool_version.update(|v| *v += 1);
    }

    /// Select one transaction; a provider mismatch lands in `mismatch`
    /// instead of the selection.
    pub fn select(&self, transaction: Transaction) {
        let mut rejected = None;
        self.state.update(|state| {
            if let Err(e) = state.select(transaction) {
                rejected = Some(e);
            }
        });
        if rejected.is_some() {
            self.mismatch.set(rejected);
        }
    }

    pub fn deselect(&self, id: &str) {
        let id = id.to_string();
        self.state.update(|state| state.deselect(&id));
    }

    pub fn clear(&self) {
        self.state.update(|state| state.clear());
    }

    pub fn dismiss_mismatch(&self) {
        self.mismatch.set(None);
    }
}

pub fn provide_selection() -> SelectionContext {
    let ctx = SelectionContext::new();
    provide_context(ctx);
    ctx
}

pub fn use_selection() -> SelectionContext {
    use_context::<SelectionContext>().expect("SelectionContext not provided")
}
