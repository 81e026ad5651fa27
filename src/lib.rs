pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod page;
pub mod ui;
pub mod widget;

pub use client::CounterClient;
pub use config::CounterConfig;
pub use errors::CounterError;
pub use page::{Page, SharedPage};
pub use widget::{LoadOutcome, ViewCounterWidget};
