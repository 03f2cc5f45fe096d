use crate::core::{Observer, ObserverKind, Result};
use std::io::Write;
use std::rc::Rc;

pub struct ConcreteObserverA;

impl Observer for ConcreteObserverA {
    fn name(&self) -> &'static str {
        "ConcreteObserverA"
    }

    fn update(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "ConcreteObserverA.Update()")?;
        Ok(())
    }
}

pub struct ConcreteObserverB;

impl Observer for ConcreteObserverB {
    fn name(&self) -> &'static str {
        "ConcreteObserverB"
    }

    fn update(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "ConcreteObserverB.Update()")?;
        Ok(())
    }
}

pub fn observer_for(kind: ObserverKind) -> Rc<dyn Observer> {
    match kind {
        ObserverKind::A => Rc::new(ConcreteObserverA),
        ObserverKind::B => Rc::new(ConcreteObserverB),
    }
}

/// Ordered observer registry. Observers are compared by identity, not by
/// type, so two `ConcreteObserverA` handles are distinct entries.
#[derive(Default)]
pub struct Subject {
    observers: Vec<Rc<dyn Observer>>,
}

impl Subject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `observer`. Duplicates are kept.
    pub fn attach(&mut self, observer: Rc<dyn Observer>) {
        tracing::debug!(observer = observer.name(), "attaching observer");
        self.observers.push(observer);
    }

    /// Removes the first entry that is the same allocation as `observer`.
    /// Does nothing when it is not attached.
    pub fn detach(&mut self, observer: &Rc<dyn Observer>) {
        match self
            .observers
            .iter()
            .position(|attached| Rc::ptr_eq(attached, observer))
        {
            Some(index) => {
                self.observers.remove(index);
                tracing::debug!(observer = observer.name(), "detached observer");
            }
            None => {
                tracing::debug!(observer = observer.name(), "observer not attached, ignoring detach");
            }
        }
    }

    /// Updates every observer in attachment order. Stops at the first failure.
    pub fn notify(&self, out: &mut dyn Write) -> Result<()> {
        tracing::debug!(count = self.observers.len(), "notifying observers");
        for observer in &self.observers {
            observer.update(out)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn observer_names(&self) -> Vec<&'static str> {
        self.observers.iter().map(|o| o.name()).collect()
    }

    /// Snapshot of the registry, useful for comparing states by identity.
    pub fn snapshot(&self) -> Vec<Rc<dyn Observer>> {
        self.observers.clone()
    }

    pub fn is_same_registry(&self, snapshot: &[Rc<dyn Observer>]) -> bool {
        self.observers.len() == snapshot.len()
            && self
                .observers
                .iter()
                .zip(snapshot)
                .all(|(a, b)| Rc::ptr_eq(a, b))
    }
}
