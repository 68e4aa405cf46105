//! Executable memory regions.
//!
//! The illegal-instruction fault needs a page the process can first
//! fill with an opcode and then jump into. This module is the only
//! place that talks to the OS memory-protection surface: an anonymous
//! read-write mapping is created, code is copied in, and the mapping is
//! re-protected to read-execute before any control transfer.
//!
//! The two-phase protection matters: if the execute permission is
//! refused, the caller sees the failure before jumping anywhere, and no
//! fault is induced at all.

#[cfg(not(unix))]
compile_error!("exec_mem requires a Unix mmap/mprotect surface");

use std::io;
use std::ptr;

use crate::error::{FaultSetupError, SetupResult};

/// An anonymous mapping that can be filled with code and then made
/// executable.
pub struct ExecRegion {
    base: *mut u8,
    len: usize,
}

impl ExecRegion {
    /// Map a new read-write anonymous region of at least `len` bytes.
    pub fn new(len: usize) -> SetupResult<Self> {
        let len = len.max(1);
        let base = unsafe {
            libc::mmap(
                ptr::null_mut(),
                len,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                -1,
                0,
            )
        };
        if base == libc::MAP_FAILED {
            return Err(FaultSetupError::RegionAlloc(io::Error::last_os_error()));
        }
        Ok(Self {
            base: base as *mut u8,
            len,
        })
    }

    /// Copy `code` to the start of the region.
    ///
    /// Panics if `code` is larger than the region; callers size the
    /// region from the code they are about to write.
    pub fn fill(&mut self, code: &[u8]) {
        assert!(code.len() <= self.len, "code larger than mapped region");
        unsafe {
            ptr::copy_nonoverlapping(code.as_ptr(), self.base, code.len());
        }
    }

    /// Exchange write access for execute access on the whole region.
    pub fn make_executable(&mut self) -> SetupResult<()> {
        let rc = unsafe {
            libc::mprotect(
                self.base as *mut libc::c_void,
                self.len,
                libc::PROT_READ | libc::PROT_EXEC,
            )
        };
        if rc != 0 {
            return Err(FaultSetupError::RegionProtect(io::Error::last_os_error()));
        }
        Ok(())
    }

    /// Base address of the mapping.
    pub fn addr(&self) -> *const u8 {
        self.base
    }

    /// Reinterpret the start of the region as a function entry point.
    ///
    /// # Safety
    ///
    /// [`ExecRegion::make_executable`] must have succeeded, and the
    /// region must start with machine code that is valid to enter with
    /// the C ABI (or code that is intended to trap, which is this
    /// crate's whole business).
    pub unsafe fn entry(&self) -> extern "C" fn() {
        std::mem::transmute::<*mut u8, extern "C" fn()>(self.base)
    }
}

impl Drop for ExecRegion {
    fn drop(&mut self) {
        unsafe {
            libc::munmap(self.base as *mut libc::c_void, self.len);
        }
    }
}
