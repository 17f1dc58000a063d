pub mod error;
pub mod models;
pub mod tally;
pub mod validation;

pub use error::{parse_selection, SelectionError, NO_CHOICE_SELECTED};
pub use models::*;
pub use tally::{Tally, TallyEntry};
pub use validation::*;

#[cfg(test)]
mod tests;
