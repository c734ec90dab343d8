mod spinner;

pub use spinner::{Spinner, SpinnerSize};
