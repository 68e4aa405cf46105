//! crashgen - Controlled Fault Injection Tool
//!
//! Dispatcher for the six fault routines. Takes exactly one crash-type
//! identifier, announces it, induces the fault, and only ever gets to
//! say anything else if the fault failed to materialize.
//! Usage: crashgen <crash_type>

use std::io::Write;
use std::panic;
use std::process::ExitCode;

use crashgen::{routines, FaultKind, SetupResult};

/// Exit status when a routine returns instead of crashing. Distinct
/// from the usage-error status so a supervisor can classify outcomes
/// without parsing stdout.
const EXIT_SURVIVED: u8 = 2;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let kind: FaultKind = match args[1].parse() {
        Ok(kind) => kind,
        Err(message) => {
            println!("{}", message);
            print_usage();
            return ExitCode::from(1);
        }
    };

    println!("Generating crash: {}", kind);
    // The fault kills the process before buffered output would make it
    // out, so the announcement is flushed first.
    let _ = std::io::stdout().flush();

    log::info!("inducing fault: {}", kind.summary());

    // Guards against language-level panics only. Hardware faults are
    // delivered by the OS and never reach the unwinder.
    let outcome = panic::catch_unwind(|| dispatch(kind));

    match outcome {
        Ok(Ok(())) => {
            println!("If you see this message the program has survived the crash.");
            ExitCode::from(EXIT_SURVIVED)
        }
        Ok(Err(setup)) => {
            println!("Could not set up fault: {}", setup);
            ExitCode::from(EXIT_SURVIVED)
        }
        Err(_) => {
            println!("Caught a panic instead of a crash.");
            ExitCode::from(1)
        }
    }
}

fn dispatch(kind: FaultKind) -> SetupResult<()> {
    match kind {
        FaultKind::NullWrite => routines::null_write(),
        FaultKind::WildWrite => routines::wild_write(),
        FaultKind::StackOverflow => routines::stack_overflow(),
        FaultKind::DivideByZero => routines::divide_by_zero(),
        FaultKind::IllegalInstruction => routines::illegal_instruction()?,
        FaultKind::HeapOverrun => routines::heap_overrun(),
    }
    Ok(())
}

fn print_usage() {
    println!("crashgen - controlled fault injection tool");
    println!();
    println!("USAGE:");
    println!("    crashgen <crash_type>");
    println!();
    println!("CRASH TYPES:");
    for kind in FaultKind::ALL {
        println!("    {:<8} {}", kind.identifier(), kind.summary());
    }
}
