//! Object header shared by every heap-allocated composite value.
//!
//! Generated code allocates objects itself and calls [`object_ctor`] on the
//! storage once. The header is the object's first field, so its type
//! identifier can be read without knowing the concrete type.

use hulk_abi::{BASE_TYPEID, OBJECT_HEADER_ALIGN, OBJECT_HEADER_SIZE};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Object {
    typeid: u32,
}

const _: () = assert!(size_of::<Object>() == OBJECT_HEADER_SIZE);
const _: () = assert!(align_of::<Object>() == OBJECT_HEADER_ALIGN);

impl Object {
    pub fn typeid(&self) -> u32 {
        self.typeid
    }
}

/// Initialize the header at `object` as an untyped base object and return
/// the same pointer. Null is passed through untouched.
///
/// # Safety
///
/// `object` must be null, or point to writable storage of at least
/// `OBJECT_HEADER_SIZE` bytes aligned to `OBJECT_HEADER_ALIGN`. The storage
/// may be uninitialized.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn object_ctor(object: *mut Object) -> *mut Object {
    if !object.is_null() {
        unsafe { (&raw mut (*object).typeid).write(BASE_TYPEID) };
    }
    object
}
