//! Built-in pattern demonstrations.
//!
//! One module per pattern. Each demo is a fixed-data routine: no clock, no
//! randomness, no external input, so its transcript is identical on every
//! run. [`builtin_registry`] registers all of them in catalog order, which
//! becomes the default execution order.

pub mod abstract_factory;
pub mod adapter;
pub mod builder;
pub mod chain_of_responsibility;
pub mod command;
pub mod decorator;
pub mod facade;
pub mod factory_method;
pub mod mediator;
pub mod prototype;
pub mod state;
pub mod strategy;
pub mod visitor;

use vitrine_core::{DemoRegistry, RegistryError};

/// Build a registry holding every built-in demo, in catalog order.
///
/// Creational patterns first, then behavioral, then structural -- the same
/// order the catalog presents them in.
pub fn builtin_registry() -> Result<DemoRegistry, RegistryError> {
    let mut registry = DemoRegistry::new();
    registry.register(factory_method::FactoryMethodDemo)?;
    registry.register(abstract_factory::AbstractFactoryDemo)?;
    registry.register(prototype::PrototypeDemo)?;
    registry.register(builder::BuilderDemo)?;
    registry.register(chain_of_responsibility::ChainOfResponsibilityDemo)?;
    registry.register(command::CommandDemo)?;
    registry.register(mediator::MediatorDemo)?;
    registry.register(visitor::VisitorDemo)?;
    registry.register(state::StateDemo)?;
    registry.register(strategy::StrategyDemo)?;
    registry.register(adapter::AdapterDemo)?;
    registry.register(facade::FacadeDemo)?;
    registry.register(decorator::DecoratorDemo)?;
    Ok(registry)
}
