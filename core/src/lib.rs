//! # Colorup Core
//!
//! Value types shared by every colorup crate: the RGB, HSL and HSV records,
//! the [`ColorInput`] sum type accepted at the validation boundary, the closed
//! tag enums ([`ColorFormat`], [`ExportFormat`], [`BlendMode`], ...), the
//! named color table and numeric range tables, and the [`ColorError`] type.
//!
//! Nothing in this crate holds state. Every value is a small `Copy` or owned
//! record constructed per call.

extern crate alloc;

mod config;
pub mod constants;
mod error;
mod model;
mod tags;
pub mod util;

pub use config::Config;
pub use error::ColorError;
pub use model::{ColorInput, ColorObject, Hsl, Hsv, Rgb, ValidationResult};
pub use tags::{BlendMode, ColorFormat, ExportFormat, HarmonyType, ParseTagError, TextSize, WcagLevel};
