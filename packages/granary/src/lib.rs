#![no_std]

pub mod constants;
