pub mod checks;
pub mod probe;

pub use probe::{ProbeRunner, Reporter};
