//! C heap bindings for buffers handed to generated code.
//!
//! Strings returned across the FFI boundary are released by the caller with
//! the C allocator's `free`, so they come from `malloc` rather than Rust's
//! global allocator.

use core::alloc::Layout;
use core::ffi::c_void;
use core::ptr::NonNull;

unsafe extern "C" {
    fn malloc(size: usize) -> *mut c_void;
    fn free(ptr: *mut c_void);
}

/// Allocate `size` bytes from the C heap.
///
/// Never returns null: running out of memory aborts the process, since no
/// primitive has a channel to report it.
pub(crate) fn c_alloc(size: usize) -> NonNull<u8> {
    // malloc(0) is allowed to return null.
    let size = size.max(1);
    match NonNull::new(unsafe { malloc(size) }.cast::<u8>()) {
        Some(ptr) => ptr,
        None => alloc_failed(size),
    }
}

/// # Safety
///
/// `ptr` must have been returned by [`c_alloc`] (or C `malloc`) and must not
/// be used afterwards.
pub(crate) unsafe fn c_free(ptr: NonNull<u8>) {
    unsafe { free(ptr.as_ptr().cast()) }
}

#[cold]
fn alloc_failed(size: usize) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(size, "C heap allocation failed");
    let layout = Layout::from_size_align(size, 1).unwrap_or(Layout::new::<u8>());
    std::alloc::handle_alloc_error(layout)
}
