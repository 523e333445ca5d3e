pub mod linalg;
pub mod logger;
