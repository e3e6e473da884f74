#![doc = include_str!("../README.MD")]
#![cfg_attr(not(feature = "std"), no_std)]

pub mod channel_order;
pub mod color_1555;
pub mod color_8888;
pub mod row_mirror;

#[cfg(test)]
mod tests;
