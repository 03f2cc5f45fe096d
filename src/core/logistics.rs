use crate::core::{Logistics, LogisticsKind, Result, Transport};
use std::io::Write;

pub struct Truck;

impl Transport for Truck {
    fn name(&self) -> &'static str {
        "truck"
    }

    fn deliver(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Delivering by truck")?;
        Ok(())
    }
}

pub struct Ship;

impl Transport for Ship {
    fn name(&self) -> &'static str {
        "ship"
    }

    fn deliver(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Delivering by ship")?;
        Ok(())
    }
}

pub struct RoadLogistics;

impl Logistics for RoadLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Truck)
    }
}

pub struct SeaLogistics;

impl Logistics for SeaLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Ship)
    }
}

pub fn logistics_for(kind: LogisticsKind) -> Box<dyn Logistics> {
    match kind {
        LogisticsKind::Road => Box::new(RoadLogistics),
        LogisticsKind::Sea => Box::new(SeaLogistics),
    }
}
