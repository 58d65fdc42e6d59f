/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::dimension::Dimension;
use super::ratio::Ratio;
use super::unit::Unit;

/// Errors of the unit algebra and conversion engine.
///
/// This type is `Copy` so that it can be produced and matched inside
/// `const fn`s; the statically typed units report the same variants
/// as compile errors.
#[derive(Serialize, Deserialize, Error, PartialEq, Eq, Clone, Copy, Debug)]
pub enum UnitError {
    #[error("Incompatible units: {0} <-> {1}")]
    Conversion(Dimension, Dimension),
    #[error("Unsupported unit composition: {0} * {1}")]
    Mul(Unit, Unit),
    #[error("Unsupported unit composition: {0} / {1}")]
    Div(Unit, Unit),
    #[error("Unsupported unit composition: {0} ^ {1}")]
    Pow(Unit, i32),
    #[error("Unsupported unit composition: 1 / {0}")]
    Inv(Unit),
    #[error("Unsupported unit composition: {1} * {0}")]
    Scale(Unit, Ratio),
    #[error("Unsupported unit composition: {0} + {1}")]
    Offset(Unit, Ratio),
    #[error("Unsupported unit operation: {0} + {1}")]
    Add(Unit, Unit),
    #[error("Unsupported unit operation: {0} - {1}")]
    Sub(Unit, Unit),
    #[error("Ratio overflow")]
    Overflow,
    #[error("Zero denominator")]
    ZeroDenominator,
    #[error("Invalid scale factor: {0}")]
    InvalidScale(Ratio),
    #[error("Not a dimension encoding: {0}")]
    InvalidDimension(Ratio),
    #[error("Conversion by {0} requires floating-point storage")]
    Inexact(Ratio),
    #[error("Floating-point value cannot be stored as an integer")]
    IntegerStorage,
    #[error("{0} is not a canonical SI unit")]
    NotCanonical(Unit),
    #[error("Invalid number")]
    ParseNumber,
}

/// Errors while defining, loading or looking up named units.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
    #[error("Unit already defined: {0}")]
    Duplicate(String),
    #[error("Cyclic unit definition: {0}")]
    Cycle(String),
    #[error("{0}")]
    Unit(#[from] UnitError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
