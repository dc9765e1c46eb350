mod empty;
pub use empty::*;

mod numbers;
pub use numbers::*;

mod values;
pub use values::*;
