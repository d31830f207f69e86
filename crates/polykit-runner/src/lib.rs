//! PolyKit Runner Crate
//!
//! Collaborator for the external path-planning algorithm: builds its
//! parameter record from the drawn polygons, manages the algorithm
//! repository's git branches, and runs the algorithm through a generated
//! driver script. Long-running work runs on tokio tasks that report once
//! through a oneshot channel.

pub mod branches;
pub mod error;
pub mod params;
pub mod runner;
pub mod script;

pub use branches::parse_branch_list;
pub use error::{JobKind, RunnerError, RunnerResult};
pub use params::{AlgorithmInput, AlgorithmParams};
pub use runner::{wait_for, AlgorithmRunner, RunnerOutcome};
pub use script::{render_driver_script, SCRIPT_PREFIX};
