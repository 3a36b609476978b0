use std::mem;
use std::ptr;

/// Implements the lifetime handling shared by both optional types - based
/// on a few required methods for the presence flag and the storage.
pub(crate) trait OptionalImpl {
    type Item;

    fn is_present(&self) -> bool;

    /// Overwrite the presence flag without touching the storage.
    unsafe fn set_present(&mut self, present: bool);

    /// Return a raw pointer to the storage.
    fn as_ptr(&self) -> *const Self::Item;

    /// Return a raw mutable pointer to the storage.
    fn as_mut_ptr(&mut self) -> *mut Self::Item;

    unsafe fn get_unchecked(&self) -> &Self::Item {
        debug_assert!(self.is_present(), "Optional: dereference of an absent value");
        &*self.as_ptr()
    }

    unsafe fn get_unchecked_mut(&mut self) -> &mut Self::Item {
        debug_assert!(self.is_present(), "Optional: dereference of an absent value");
        &mut *self.as_mut_ptr()
    }

    fn as_ref(&self) -> Option<&Self::Item> {
        if self.is_present() {
            unsafe { Some(self.get_unchecked()) }
        } else {
            None
        }
    }

    fn as_mut(&mut self) -> Option<&mut Self::Item> {
        if self.is_present() {
            unsafe { Some(self.get_unchecked_mut()) }
        } else {
            None
        }
    }

    /// Write `value` into empty storage and mark it present.
    ///
    /// ## Safety
    ///
    /// The storage must not hold a live value.
    unsafe fn write_unchecked(&mut self, value: Self::Item) -> &mut Self::Item {
        debug_assert!(!self.is_present());
        let ptr = self.as_mut_ptr();
        ptr::write(ptr, value);
        self.set_present(true);
        &mut *ptr
    }

    fn reset(&mut self) {
        if self.is_present() {
            unsafe {
                self.set_present(false);
                if mem::needs_drop::<Self::Item>() {
                    ptr::drop_in_place(self.as_mut_ptr());
                }
            }
        }
    }

    /// Drop the current value if any, then construct a new one from `f`.
    ///
    /// If `f` panics, the optional stays empty.
    fn emplace_with<F>(&mut self, f: F) -> &mut Self::Item
        where F: FnOnce() -> Self::Item
    {
        self.reset();
        let value = f();
        unsafe {
            self.write_unchecked(value)
        }
    }

    /// Move the value out, leaving the storage empty.
    fn take_value(&mut self) -> Option<Self::Item> {
        if !self.is_present() {
            return None;
        }
        unsafe {
            self.set_present(false);
            Some(ptr::read(self.as_ptr()))
        }
    }

    /// Copy assignment.
    ///
    /// | self    | other   | result                             |
    /// |---------|---------|------------------------------------|
    /// | empty   | empty   | nothing happens                    |
    /// | empty   | present | clone of other's value constructed |
    /// | present | empty   | self's value dropped               |
    /// | present | present | `clone_from` into self's value     |
    fn assign_clone(&mut self, other: &Self)
        where Self::Item: Clone
    {
        match (self.is_present(), other.as_ref()) {
            (false, None) => {}
            (false, Some(value)) => {
                let value = value.clone();
                unsafe {
                    self.write_unchecked(value);
                }
            }
            (true, None) => self.reset(),
            (true, Some(value)) => unsafe {
                self.get_unchecked_mut().clone_from(value);
            },
        }
        debug_assert_eq!(self.is_present(), other.is_present());
    }

    /// Move assignment: the same four cases as `assign_clone`, moving
    /// instead of cloning. `source` is empty afterwards.
    fn assign_take(&mut self, source: &mut Self) {
        match (self.is_present(), source.take_value()) {
            (false, None) => {}
            (false, Some(value)) => unsafe {
                self.write_unchecked(value);
            },
            (true, None) => self.reset(),
            (true, Some(value)) => unsafe {
                // assign-through: drops the old value exactly once
                *self.get_unchecked_mut() = value;
            },
        }
    }
}
