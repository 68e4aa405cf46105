//! Fault request model.
//!
//! A fault request is the single immutable value this tool runs on: one
//! of six fault classes, parsed from the command line at startup and
//! consulted exactly once by the dispatcher. Identifiers are stable,
//! they are the contract with whatever supervisor launches the process.

use std::fmt;
use std::str::FromStr;

/// A fault class that can be induced on demand.
///
/// Each variant maps to one routine in [`crate::routines`]. Five of the
/// six are expected to terminate the process through OS fault delivery;
/// none of them are recoverable from inside the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// Write through a null pointer (`null`).
    NullWrite,
    /// Write through a fixed pointer into unmapped address space
    /// (`access`).
    WildWrite,
    /// Exhaust the stack with unbounded self-recursion (`stack`).
    StackOverflow,
    /// Integer division by a runtime zero divisor (`divide`).
    DivideByZero,
    /// Execute a guaranteed-undefined opcode (`illegal`).
    IllegalInstruction,
    /// Overrun a small heap allocation, then free it (`heap`).
    HeapOverrun,
}

impl FaultKind {
    /// Every fault kind, in the order the usage text lists them.
    pub const ALL: [FaultKind; 6] = [
        FaultKind::NullWrite,
        FaultKind::WildWrite,
        FaultKind::StackOverflow,
        FaultKind::DivideByZero,
        FaultKind::IllegalInstruction,
        FaultKind::HeapOverrun,
    ];

    /// Command-line identifier for this fault kind.
    pub fn identifier(&self) -> &'static str {
        match self {
            FaultKind::NullWrite => "null",
            FaultKind::WildWrite => "access",
            FaultKind::StackOverflow => "stack",
            FaultKind::DivideByZero => "divide",
            FaultKind::IllegalInstruction => "illegal",
            FaultKind::HeapOverrun => "heap",
        }
    }

    /// One-line summary shown in the usage text.
    pub fn summary(&self) -> &'static str {
        match self {
            FaultKind::NullWrite => "Null pointer dereference",
            FaultKind::WildWrite => "Access violation",
            FaultKind::StackOverflow => "Stack overflow",
            FaultKind::DivideByZero => "Divide by zero",
            FaultKind::IllegalInstruction => "Illegal instruction",
            FaultKind::HeapOverrun => "Heap corruption",
        }
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for FaultKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "null" => Ok(FaultKind::NullWrite),
            "access" => Ok(FaultKind::WildWrite),
            "stack" => Ok(FaultKind::StackOverflow),
            "divide" => Ok(FaultKind::DivideByZero),
            "illegal" => Ok(FaultKind::IllegalInstruction),
            "heap" => Ok(FaultKind::HeapOverrun),
            _ => Err(format!("Unknown crash type: {}", s)),
        }
    }
}
