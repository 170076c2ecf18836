pub mod orchestrator;
pub mod resolver;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
