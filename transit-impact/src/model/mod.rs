pub mod impact;
pub mod network;
