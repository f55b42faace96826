pub mod bench;
pub mod digest;
pub mod fetch;
pub mod file_hash;
pub mod lengths;
pub mod plot;
