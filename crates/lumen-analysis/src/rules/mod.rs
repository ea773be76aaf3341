//! Rule system: the `Rule` contract, the ordered `RuleCatalog`, and the
//! concrete rules grouped as basic (structural) and visual checks.

pub mod basic;
pub mod catalog;
pub mod control_types;
pub mod traits;
pub mod visual;

pub use catalog::RuleCatalog;
pub use traits::Rule;
