pub mod runs;
pub mod scenarios;

pub use runs::post_run;
pub use scenarios::{create_scenario, get_scenario, list_scenarios};
