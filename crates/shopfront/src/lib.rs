pub mod server;

pub mod bus;
pub mod catalog;
pub mod config;
pub mod error;
pub mod event;
pub mod home;
pub mod nav;
pub mod utils;

pub use crate::bus::Bus;
pub use crate::catalog::{Category, Product};
pub use crate::config::ShopfrontConfig;
pub use crate::error::{CoreError, CoreResult};
pub use crate::event::HomeEvent;
pub use crate::home::{FilterCriteria, HomeAction, HomePanel, HomeStore, HomeViewState};
