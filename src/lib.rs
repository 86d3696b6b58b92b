//! geocrunch: small demonstrations of columnar data crunching on Arrow
//! tables — reference lookups, vectorized metrics, and derived columns.

pub mod measure;
pub mod population;
pub mod table;
