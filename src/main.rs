//! # Mentor Tracker Probe
//!
//! Sends one startup event with the current configuration and waits for the
//! result, so a deployment can check that its backend URL carries a board id and
//! that the Mentor endpoint is reachable.
//!
//! Delivery failures show up as warnings in the log output; the probe itself
//! still exits successfully, the same way reporting behaves inside an application.

use mentor_tracker::logger::{self, log};
use mentor_tracker::{Reporter, TrackerConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = logger::init_logger() {
        eprintln!("Failed to initialize logger: {}", e);
        return ExitCode::FAILURE;
    }

    let config = TrackerConfig::load();
    let reporter = match Reporter::new(config) {
        Ok(reporter) => reporter,
        Err(e) => {
            log::error!("Failed to create reporter: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let Some(board_id) = reporter.board_id() else {
        log::error!(api_url = %reporter.config().api_url, "No board id in configured api_url");
        return ExitCode::FAILURE;
    };

    println!("board id: {}", board_id);
    println!("endpoint: {}", reporter.endpoint());

    if let Some(delivery) = reporter.report_page_loaded() {
        if delivery.join().is_err() {
            log::error!("Delivery worker panicked");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
