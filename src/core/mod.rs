pub mod decorator;
pub mod logistics;
pub mod observer;
pub mod runner;

pub use crate::domain::model::{DecoratorKind, Demo, LogisticsKind, ObserverKind};
pub use crate::domain::ports::{Component, Logistics, Observer, ScenarioProvider, Transport};
pub use crate::utils::error::Result;
