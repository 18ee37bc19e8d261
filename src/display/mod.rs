//! Display ports written to by the form controller and strength indicator

mod traits;

pub use traits::{ErrorSink, StrengthSink};

#[cfg(test)]
pub use traits::{MockErrorSink, MockStrengthSink};
