//! TCP liveness probe for container orchestration.
//!
//! Dials the configured service port on localhost and exits 0 on success,
//! 1 otherwise. Does not touch the weather provider.

use std::net::TcpStream;
use std::process::ExitCode;

use pogoda_web::config::AppConfig;

fn main() -> ExitCode {
    let Ok(config) = AppConfig::from_env() else {
        return ExitCode::FAILURE;
    };
    match TcpStream::connect(("localhost", config.server.port)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
