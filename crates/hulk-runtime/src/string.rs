//! String values at the FFI boundary.
//!
//! HULK strings are null-terminated C strings. Every string a primitive
//! returns is a fresh `malloc` allocation that the caller owns
//! ([`OwnedStr`]); every string passed in is only borrowed for the duration
//! of the call ([`BorrowedStr`]).

use core::ffi::{CStr, c_char};
use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::memory::{c_alloc, c_free};

/// Non-owning view of a string argument.
///
/// Layout-compatible with `const char*`. A null pointer reads as the empty
/// string.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct BorrowedStr<'a> {
    ptr: *const c_char,
    _marker: PhantomData<&'a c_char>,
}

impl<'a> BorrowedStr<'a> {
    /// # Safety
    ///
    /// `ptr` must be null or point to a null-terminated string that stays
    /// valid and unmodified for `'a`.
    pub const unsafe fn from_ptr(ptr: *const c_char) -> Self {
        BorrowedStr {
            ptr,
            _marker: PhantomData,
        }
    }

    pub fn as_c_str(&self) -> &'a CStr {
        if self.ptr.is_null() {
            c""
        } else {
            unsafe { CStr::from_ptr(self.ptr) }
        }
    }

    /// The string's bytes, without the terminator.
    pub fn to_bytes(&self) -> &'a [u8] {
        self.as_c_str().to_bytes()
    }
}

impl<'a> From<&'a CStr> for BorrowedStr<'a> {
    fn from(s: &'a CStr) -> Self {
        unsafe { BorrowedStr::from_ptr(s.as_ptr()) }
    }
}

impl fmt::Debug for BorrowedStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_c_str(), f)
    }
}

/// Owning handle to a `malloc`ed, null-terminated string.
///
/// Layout-compatible with `char*`. Returned from a primitive, it becomes a
/// plain pointer that generated code releases with `free`; held on the Rust
/// side, it frees itself on drop.
#[repr(transparent)]
pub struct OwnedStr {
    ptr: NonNull<c_char>,
}

// Unique ownership of a plain byte buffer.
unsafe impl Send for OwnedStr {}
unsafe impl Sync for OwnedStr {}

impl OwnedStr {
    /// Copy `s` into a new buffer.
    pub fn from_c_str(s: &CStr) -> Self {
        OwnedStr::from_parts(&[s.to_bytes()])
    }

    /// Allocate a buffer holding each part in order, then a terminator.
    ///
    /// Parts must not contain NUL bytes, or C readers will see the string
    /// end early.
    pub(crate) fn from_parts(parts: &[&[u8]]) -> Self {
        let len = parts
            .iter()
            .fold(0usize, |total, part| total.saturating_add(part.len()));
        let buf = c_alloc(len.saturating_add(1));
        unsafe {
            let mut cursor = buf.as_ptr();
            for part in parts {
                core::ptr::copy_nonoverlapping(part.as_ptr(), cursor, part.len());
                cursor = cursor.add(part.len());
            }
            cursor.write(0);
        }
        OwnedStr { ptr: buf.cast() }
    }

    /// Take ownership of a string previously released with
    /// [`OwnedStr::into_raw`] or returned by a primitive.
    ///
    /// # Safety
    ///
    /// `ptr` must be a non-null, null-terminated buffer from the C heap that
    /// nothing else will free or use.
    pub unsafe fn from_raw(ptr: *mut c_char) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| OwnedStr { ptr })
    }

    /// Hand the buffer off; the receiver must eventually `free` it.
    pub fn into_raw(self) -> *mut c_char {
        let ptr = self.ptr.as_ptr();
        core::mem::forget(self);
        ptr
    }

    pub fn as_ptr(&self) -> *const c_char {
        self.ptr.as_ptr()
    }

    pub fn as_c_str(&self) -> &CStr {
        unsafe { CStr::from_ptr(self.ptr.as_ptr()) }
    }

    pub fn to_bytes(&self) -> &[u8] {
        self.as_c_str().to_bytes()
    }

    /// Mutable access to the bytes before the terminator.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let len = self.to_bytes().len();
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr().cast::<u8>(), len) }
    }

    pub fn borrow(&self) -> BorrowedStr<'_> {
        BorrowedStr::from(self.as_c_str())
    }
}

impl Drop for OwnedStr {
    fn drop(&mut self) {
        unsafe { c_free(self.ptr.cast()) }
    }
}

impl PartialEq for OwnedStr {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for OwnedStr {}

impl fmt::Debug for OwnedStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_c_str(), f)
    }
}
