use crate::core::{Component, DecoratorKind, Result};
use std::io::Write;

/// Terminal node of every decorator chain.
pub struct ConcreteComponent;

impl Component for ConcreteComponent {
    fn name(&self) -> &'static str {
        "ConcreteComponent"
    }

    fn operation(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "ConcreteComponent.Operation()")?;
        Ok(())
    }
}

// Decorators run the wrapped component first, then add their own line.
pub struct ConcreteDecoratorA {
    component: Box<dyn Component>,
}

impl ConcreteDecoratorA {
    pub fn new(component: Box<dyn Component>) -> Self {
        Self { component }
    }
}

impl Component for ConcreteDecoratorA {
    fn name(&self) -> &'static str {
        "ConcreteDecoratorA"
    }

    fn operation(&self, out: &mut dyn Write) -> Result<()> {
        tracing::debug!(wrapped = self.component.name(), "ConcreteDecoratorA delegating");
        self.component.operation(out)?;
        writeln!(out, "ConcreteDecoratorA.Operation()")?;
        Ok(())
    }

    fn wrapped(&self) -> Option<&dyn Component> {
        Some(self.component.as_ref())
    }
}

pub struct ConcreteDecoratorB {
    component: Box<dyn Component>,
}

impl ConcreteDecoratorB {
    pub fn new(component: Box<dyn Component>) -> Self {
        Self { component }
    }
}

impl Component for ConcreteDecoratorB {
    fn name(&self) -> &'static str {
        "ConcreteDecoratorB"
    }

    fn operation(&self, out: &mut dyn Write) -> Result<()> {
        tracing::debug!(wrapped = self.component.name(), "ConcreteDecoratorB delegating");
        self.component.operation(out)?;
        writeln!(out, "ConcreteDecoratorB.Operation()")?;
        Ok(())
    }

    fn wrapped(&self) -> Option<&dyn Component> {
        Some(self.component.as_ref())
    }
}

pub fn decorate(kind: DecoratorKind, component: Box<dyn Component>) -> Box<dyn Component> {
    match kind {
        DecoratorKind::A => Box::new(ConcreteDecoratorA::new(component)),
        DecoratorKind::B => Box::new(ConcreteDecoratorB::new(component)),
    }
}

/// Wraps a `ConcreteComponent` in `layers`, listed outermost first.
pub fn build_chain(layers: &[DecoratorKind]) -> Box<dyn Component> {
    layers
        .iter()
        .rev()
        .fold(Box::new(ConcreteComponent) as Box<dyn Component>, |inner, &kind| {
            decorate(kind, inner)
        })
}

/// Number of nodes from `component` down to the terminal, inclusive.
pub fn chain_depth(component: &dyn Component) -> usize {
    let mut depth = 1;
    let mut current = component;
    while let Some(inner) = current.wrapped() {
        depth += 1;
        current = inner;
    }
    depth
}
