pub mod natal;

pub use natal::{AkashicAnalysis, BirthInfo, ChartPositions, House, NatalData, PlanetaryPosition};
