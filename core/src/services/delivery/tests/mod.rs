//! Tests for the delivery gate

#[cfg(test)]
mod mocks;
