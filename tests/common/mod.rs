use yokan::environment::{Environment, EnvRef};
use yokan::object::Value;

/// Runs `source` against a fresh root environment and returns the
/// last value plus any parser errors, mirroring `yokan::run` but
/// giving integration tests a convenient one-shot entry point.
#[allow(dead_code)]
pub fn eval(source: &str) -> (Value, Vec<String>) {
    let env = Environment::new_root();
    yokan::run(source, &env)
}

/// Like [`eval`], but keeps the environment so a test can run several
/// chunks of source against it in sequence, the way a REPL would.
#[allow(dead_code)]
pub fn new_env() -> EnvRef {
    Environment::new_root()
}
