use std::process::ExitCode;

use human_panic::setup_panic;
use log::{error, info};

use copy_rename::cli::{get_matches, get_run_options, get_trace_file, get_verbosity};
use copy_rename::logging::{TraceBuffer, TraceGuard, init_logger};
use copy_rename::workflow::run;

fn main() -> ExitCode {
    setup_panic!();

    let matches = get_matches();

    let trace = TraceBuffer::new();
    // Flushed once when the guard is finalised or dropped
    let trace_guard = TraceGuard::new(trace.clone(), get_trace_file(&matches));

    let logger_ready = match init_logger(get_verbosity(&matches), &trace) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Failed to initialise the logger: {e}");
            false
        }
    };

    let status = match run(get_run_options(&matches)) {
        Ok(context) => {
            if let Some(report) = &context.materialization {
                info!(
                    "Done: {} files copied, {} files moved",
                    report.stats.files_copied, report.stats.files_moved
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            if logger_ready {
                error!("ERROR:\n{e:#}");
            } else {
                eprintln!("ERROR:\n{e:#}");
            }
            ExitCode::FAILURE
        }
    };

    if let Err(e) = trace_guard.finalise() {
        eprintln!("{e}");
    }

    status
}
