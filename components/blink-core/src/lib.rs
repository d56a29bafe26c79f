#![cfg_attr(not(test), no_std)]
#![allow(async_fn_in_trait)]

#[macro_use]
pub mod fmt;

pub mod blink;
pub mod config;
pub mod delay;
pub mod diag;
pub mod error;
pub mod pin;
