#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(warnings)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod models;
