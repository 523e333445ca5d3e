// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdjustError {
  #[error("Cell matrix is singular and cannot be inverted")]
  SingularCell,

  #[error("No object loaded")]
  NoObject,

  #[error("Unknown object: {0}")]
  UnknownObject(String),

  #[error("Rank {rank} is out of range for object {object}")]
  RankOutOfRange { object: String, rank: usize },

  #[error("Reference {axis} is not a number: {text:?}")]
  InvalidReference { axis: char, text: String },

  #[error("Parse error: {0}")]
  Parse(String),

  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AdjustError>;
