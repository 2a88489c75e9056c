pub mod normalization;
pub mod notation;
pub mod ratio;
pub mod resolver;
