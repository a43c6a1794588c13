#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod contract;
pub mod errors;
mod events;
mod farm;
pub mod msg;
mod storage;

pub use contract::*;

#[cfg(test)]
mod tests;
