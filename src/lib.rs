use logger::TracingLogger;
use runner::{FilePointsRunner, Runner, RunnerError, Strictness};

pub mod logger;
pub mod parser;
pub mod result;
pub mod runner;
pub mod scorer;

pub async fn points_from_file(
    input_file: &str,
    team: &str,
    strictness: Strictness,
) -> Result<u32, RunnerError> {
    let mut runner = FilePointsRunner::<TracingLogger>::new(input_file, team, strictness);
    runner.run().await
}
