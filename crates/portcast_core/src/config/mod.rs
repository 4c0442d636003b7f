mod builder;

pub use builder::SimulationBuilder;
