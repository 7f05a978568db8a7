pub mod pool;
pub mod script;
pub mod sweep;

pub use pool::WorkerPool;
pub use script::{demo_script, load_script, run_script, DuelReport, DuelScript, ScriptStep, Side};
pub use sweep::{run_sweep, run_sweep_batches, run_sweep_parallel, SweepReport};
