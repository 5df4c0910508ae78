pub mod config;
pub mod db;
pub mod error;
pub mod points;
pub mod routes;

use db::ReceiptStore;

#[derive(Clone, Default)]
pub struct AppState {
    pub store: ReceiptStore,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
