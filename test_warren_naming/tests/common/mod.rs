#![allow(dead_code)]

pub mod messages;
pub mod names;
