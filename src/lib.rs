pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::DemoConfig;
pub use crate::core::{
    decorator::{build_chain, chain_depth, ConcreteComponent, ConcreteDecoratorA, ConcreteDecoratorB},
    logistics::{logistics_for, RoadLogistics, SeaLogistics, Ship, Truck},
    observer::{observer_for, ConcreteObserverA, ConcreteObserverB, Subject},
    runner::DemoRunner,
};
pub use domain::model::{DecoratorKind, Demo, LogisticsKind, ObserverKind};
pub use domain::ports::{Component, Logistics, Observer, ScenarioProvider, Transport};
pub use utils::error::{DemoError, Result};
