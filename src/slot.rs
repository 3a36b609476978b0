use std::mem::{self, MaybeUninit};
use std::ptr;

/// Storage for at most one `T`, plus the flag saying whether it is live.
///
/// The slot is the only owner of the value's destruction: when it goes
/// away while `present` is set, the value is dropped once. For types where
/// `needs_drop` is false that check is a constant and the whole body goes
/// away.
///
/// No `Clone`: copying and moving values between slots is decided by the
/// layer that holds the slot.
pub(crate) struct RawSlot<T> {
    // `value` is initialized iff `present`
    pub(crate) present: bool,
    pub(crate) value: MaybeUninit<T>,
}

impl<T> RawSlot<T> {
    #[inline]
    pub(crate) const fn new() -> Self {
        RawSlot { present: false, value: MaybeUninit::uninit() }
    }

    /// Construct the value directly into a fresh slot.
    #[inline]
    pub(crate) fn in_place<F>(f: F) -> Self
        where F: FnOnce() -> T
    {
        RawSlot { present: true, value: MaybeUninit::new(f()) }
    }
}

impl<T> Drop for RawSlot<T> {
    fn drop(&mut self) {
        if mem::needs_drop::<T>() && self.present {
            // flag first, so a panicking destructor can't run twice
            self.present = false;
            unsafe {
                ptr::drop_in_place(self.value.as_mut_ptr());
            }
        }
    }
}
