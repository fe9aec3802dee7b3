pub mod outcome;
pub mod session;

pub use outcome::{Answer, LookupLine};
pub use session::{DEFAULT_SENTINEL, Words, run_query_loop};
