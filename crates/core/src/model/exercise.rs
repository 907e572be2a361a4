use serde::Serialize;

use crate::model::profile::Operation;

/// One generated arithmetic exercise with its multiple-choice options.
///
/// Exercises are never persisted; they are built per request and discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub number1: u32,
    pub number2: u32,
    pub operation: Operation,
    pub correct_answer: u32,
    pub options: Vec<u32>,
}
