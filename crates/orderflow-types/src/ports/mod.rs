pub mod notifier;
pub mod order_store;
pub mod user_directory;
