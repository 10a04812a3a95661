use std::sync::Arc;
use crate::services::{Notifier, Store};

// Application state shared between handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub notifier: Notifier,
    pub bcrypt_cost: u32,
    // verified against when the e-mail is unknown, so both login failures cost the same
    pub decoy_hash: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, notifier: Notifier, bcrypt_cost: u32) -> Result<Self, bcrypt::BcryptError> {
        let decoy_hash = bcrypt::hash(uuid::Uuid::new_v4().to_string(), bcrypt_cost)?;

        Ok(Self {
            store,
            notifier,
            bcrypt_cost,
            decoy_hash: decoy_hash.into(),
        })
    }
}
