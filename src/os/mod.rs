//! Operating system abstraction layer
//!
//! This module provides a unified, platform-independent way to read bytes
//! from the operating system's entropy pool.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same surface, a
//! single `sys_random` function, so `entropy::OsEntropy` stays portable.

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;
