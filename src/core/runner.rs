use crate::core::decorator::build_chain;
use crate::core::logistics::logistics_for;
use crate::core::observer::{observer_for, Subject};
use crate::core::{Demo, Observer, ObserverKind, Result, ScenarioProvider};
use std::io::Write;
use std::rc::Rc;

/// Plays the configured demos back, in order, into one output sink.
pub struct DemoRunner<C: ScenarioProvider> {
    config: C,
}

impl<C: ScenarioProvider> DemoRunner<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn run(&self, out: &mut dyn Write) -> Result<()> {
        for demo in self.config.demos() {
            tracing::info!("Running {} demo", demo);
            match demo {
                Demo::Factory => self.run_factory(out)?,
                Demo::Decorator => self.run_decorator(out)?,
                Demo::Observer => self.run_observer(out)?,
            }
        }
        Ok(())
    }

    fn run_factory(&self, out: &mut dyn Write) -> Result<()> {
        for &kind in self.config.logistics() {
            logistics_for(kind).plan_delivery(out)?;
        }
        Ok(())
    }

    fn run_decorator(&self, out: &mut dyn Write) -> Result<()> {
        let component = build_chain(self.config.decorator_layers());
        component.operation(out)
    }

    fn run_observer(&self, out: &mut dyn Write) -> Result<()> {
        let mut subject = Subject::new();
        let mut attached: Vec<(ObserverKind, Rc<dyn Observer>)> = Vec::new();

        for &kind in self.config.observers_to_attach() {
            let observer = observer_for(kind);
            subject.attach(observer.clone());
            attached.push((kind, observer));
        }

        subject.notify(out)?;

        for &kind in self.config.observers_to_detach() {
            // A kind with nothing left attached detaches a fresh handle, which is a no-op.
            let observer = match attached.iter().position(|(k, _)| *k == kind) {
                Some(index) => attached.remove(index).1,
                None => observer_for(kind),
            };
            subject.detach(&observer);
        }

        subject.notify(out)
    }
}
