//! crashgen - Controlled Fault Injection Tool
//!
//! crashgen is a deliberately self-destructive process: given one of six
//! fault identifiers on the command line, it induces exactly that fault
//! class and dies through the OS's native fault-delivery path. It exists
//! as a reproducible crash source for testing the thing that is supposed
//! to survive: a supervising debugger, a crash logger, or a kernel
//! exception handler that must attach, classify, and report the fault.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      crashgen process                        │
//! │                                                              │
//! │  argv[1] ──→ FaultKind ──→ dispatcher ──→ fault routine      │
//! │                  │              │              │             │
//! │                  ▼              ▼              ▼             │
//! │            usage/unknown   catch_unwind   OS fault delivery  │
//! │            (exit 1)        (panics only)  (SIGSEGV, SIGFPE,  │
//! │                                            SIGILL, SIGABRT)  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Fault classes
//!
//! | identifier | fault induced                  | expected delivery    |
//! |------------|--------------------------------|----------------------|
//! | `null`     | write through a null pointer   | SIGSEGV              |
//! | `access`   | write to an unmapped address   | SIGSEGV              |
//! | `stack`    | unbounded recursion            | SIGSEGV / abort      |
//! | `divide`   | integer division by zero       | SIGFPE (x86)         |
//! | `illegal`  | undefined opcode execution     | SIGILL               |
//! | `heap`     | heap buffer overrun + free     | allocator abort      |
//!
//! Hardware faults bypass Rust's panic machinery entirely; the only
//! thing the process guards against is a language-level panic, which is
//! reported as a distinct outcome because it means the fault never
//! reached the CPU.

// Core modules
pub mod error;
pub mod exec_mem;
pub mod fault;
pub mod routines;

pub use error::{FaultSetupError, SetupResult};
pub use exec_mem::ExecRegion;
pub use fault::FaultKind;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
