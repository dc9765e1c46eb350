//! Jobs that write to the console or wait

mod echo;
pub use echo::*;

mod null;
pub use null::*;

mod sleep;
pub use sleep::*;
