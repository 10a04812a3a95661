mod store;
mod redis_service;
mod memory_store;
mod mailer;
mod notifier;
#[cfg(test)]
mod store_contract;

pub use store::Store;
pub use redis_service::RedisStore;
pub use memory_store::MemoryStore;
pub use mailer::{Email, Mailer, HttpMailer, LogMailer, mailer_from_config};
pub use notifier::Notifier;
