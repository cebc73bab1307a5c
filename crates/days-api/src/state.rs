use std::sync::Arc;

use days_core::Ledger;

#[derive(Clone, Default)]
pub struct ApiState {
    pub ledger: Arc<Ledger>,
}

impl ApiState {
    pub fn new(ledger: Arc<Ledger>) -> Self {
        Self { ledger }
    }
}
