pub mod backup;
pub mod elevation;
pub mod power;
pub mod registry;
