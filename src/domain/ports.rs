use crate::domain::model::{Demo, DecoratorKind, LogisticsKind, ObserverKind};
use crate::utils::error::Result;
use std::io::Write;

/// Something that can carry a delivery.
pub trait Transport {
    fn name(&self) -> &'static str;
    fn deliver(&self, out: &mut dyn Write) -> Result<()>;
}

/// Planner whose implementors decide which transport gets built.
pub trait Logistics {
    fn create_transport(&self) -> Box<dyn Transport>;

    fn plan_delivery(&self, out: &mut dyn Write) -> Result<()> {
        let transport = self.create_transport();
        tracing::debug!(transport = transport.name(), "planning delivery");
        transport.deliver(out)
    }
}

pub trait Component {
    fn name(&self) -> &'static str;
    fn operation(&self, out: &mut dyn Write) -> Result<()>;

    /// The component this one delegates to, `None` for the terminal node.
    fn wrapped(&self) -> Option<&dyn Component> {
        None
    }
}

pub trait Observer {
    fn name(&self) -> &'static str;
    fn update(&self, out: &mut dyn Write) -> Result<()>;
}

/// Source of the scenario the runner plays back.
pub trait ScenarioProvider {
    fn demos(&self) -> &[Demo];
    fn logistics(&self) -> &[LogisticsKind];
    /// Decorator layers, outermost first.
    fn decorator_layers(&self) -> &[DecoratorKind];
    fn observers_to_attach(&self) -> &[ObserverKind];
    fn observers_to_detach(&self) -> &[ObserverKind];
}
