//! Driver registry for dynamic driver discovery and execution.
//!
//! This module provides a generic interface for registering and running
//! the example drivers without needing separate binary files for each.

use crate::utils::sweep::SweepConfig;

/// Options assembled from the command line, shared by every driver.
#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Sweep configuration, consumed by the comparison driver.
    pub sweep: SweepConfig,
    /// Seed for the drivers' own input generation; `None` seeds from the
    /// OS.
    pub seed: Option<u64>,
    /// Bare numeric arguments following the driver name.
    pub positionals: Vec<usize>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            sweep: SweepConfig::default(),
            seed: None,
            positionals: Vec::new(),
        }
    }
}

/// Trait that all example drivers must implement
pub trait Driver: Send + Sync {
    /// Name of the driver (e.g., "compare")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Run the driver to completion, printing its report to stdout.
    ///
    /// Returns `Err` with a message suitable for stderr when the options
    /// do not fit the driver.
    fn run(&self, opts: &RunOptions) -> Result<(), String>;
}

/// Global registry of all drivers
pub struct DriverRegistry {
    drivers: Vec<Box<dyn Driver>>,
}

impl DriverRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            drivers: Vec::new(),
        }
    }

    /// Register a driver
    pub fn register<D: Driver + 'static>(&mut self, driver: D) {
        self.drivers.push(Box::new(driver));
    }

    /// Get all registered drivers
    pub fn all(&self) -> &[Box<dyn Driver>] {
        &self.drivers
    }

    /// Find a driver by name
    pub fn find(&self, name: &str) -> Option<&dyn Driver> {
        self.drivers
            .iter()
            .find(|d| d.name() == name)
            .map(|d| d.as_ref())
    }

    /// List driver names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.drivers.iter().map(|d| d.name()).collect()
    }
}

impl Default for DriverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all drivers
pub fn build_registry() -> DriverRegistry {
    let mut registry = DriverRegistry::new();

    // Register all drivers here, in run-all order: the cheap examples
    // first, the timing sweep last
    registry.register(crate::drivers::table::TableDriver);
    registry.register(crate::drivers::average::AverageDriver);
    registry.register(crate::drivers::compare::CompareDriver);

    registry
}
