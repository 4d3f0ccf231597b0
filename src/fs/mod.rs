//! Filesystem helpers for graft.

mod atomic;

pub use atomic::atomic_write_file;
