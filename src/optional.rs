use std::fmt;

use crate::absent::Absent;
use crate::errors::AbsentError;
use crate::optional_impl::OptionalImpl;
use crate::slot::RawSlot;

/// A value that might be absent, stored inline.
///
/// The `Optional` keeps a presence flag next to uninitialized storage for
/// exactly one `T`. A `T` is only constructed into the storage when the
/// optional becomes present, and only dropped when it stops being present
/// or the optional itself is dropped. Nothing is allocated.
///
/// Cloning follows the value: `clone` only clones a present value, and
/// `clone_from` clones into, drops, or assigns through the existing value
/// depending on which side is present. For `T: Copy` use
/// [`OptionalCopy`](crate::OptionalCopy), which is itself `Copy`.
///
/// Reading the value is unchecked ([`get_unchecked`](Optional::get_unchecked));
/// guard it with [`is_present`](Optional::is_present), or use the checked
/// views [`as_ref`](Optional::as_ref) and [`as_mut`](Optional::as_mut).
pub struct Optional<T> {
    slot: RawSlot<T>,
}

impl<T> Optional<T> {
    /// Create a new empty `Optional`.
    ///
    /// ```
    /// use inlineopt::Optional;
    ///
    /// let opt = Optional::<String>::new();
    /// assert!(opt.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Optional<T> {
        Optional { slot: RawSlot::new() }
    }

    /// Create an empty `Optional` from the absent marker.
    #[inline]
    pub const fn from_absent(_: Absent) -> Optional<T> {
        Optional::new()
    }

    /// Create an `Optional` holding `value`.
    #[inline]
    pub fn some(value: T) -> Optional<T> {
        Optional::with(move || value)
    }

    /// Create an `Optional` whose value is constructed by `f`, directly into
    /// the new optional's storage.
    ///
    /// ```
    /// use inlineopt::Optional;
    ///
    /// let opt = Optional::with(|| vec![0u8; 4]);
    /// assert_eq!(opt.as_ref().map(Vec::len), Some(4));
    /// ```
    #[inline]
    pub fn with<F>(f: F) -> Optional<T>
        where F: FnOnce() -> T
    {
        Optional { slot: RawSlot::in_place(f) }
    }

    /// Return `true` if the `Optional` holds a value.
    #[inline(always)]
    pub fn is_present(&self) -> bool { self.slot.present }

    /// Return `true` if the `Optional` holds no value.
    #[inline(always)]
    pub fn is_empty(&self) -> bool { !self.is_present() }

    /// Return a reference to the value, without checking that it is present.
    ///
    /// ## Safety
    ///
    /// The `Optional` must be present. Calling this on an empty `Optional`
    /// is undefined behavior.
    ///
    /// ```
    /// use inlineopt::Optional;
    ///
    /// let opt = Optional::from(5);
    /// if opt.is_present() {
    ///     assert_eq!(unsafe { *opt.get_unchecked() }, 5);
    /// }
    /// ```
    #[inline]
    pub unsafe fn get_unchecked(&self) -> &T {
        OptionalImpl::get_unchecked(self)
    }

    /// Return a mutable reference to the value, without checking that it is
    /// present.
    ///
    /// ## Safety
    ///
    /// The `Optional` must be present.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        OptionalImpl::get_unchecked_mut(self)
    }

    /// Return a raw pointer to the storage.
    ///
    /// The pointer may only be read through while the `Optional` is present.
    pub fn as_ptr(&self) -> *const T {
        OptionalImpl::as_ptr(self)
    }

    /// Return a raw mutable pointer to the storage.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        OptionalImpl::as_mut_ptr(self)
    }

    /// Return `Some(&value)` if present, else `None`.
    #[inline]
    pub fn as_ref(&self) -> Option<&T> {
        OptionalImpl::as_ref(self)
    }

    /// Return `Some(&mut value)` if present, else `None`.
    #[inline]
    pub fn as_mut(&mut self) -> Option<&mut T> {
        OptionalImpl::as_mut(self)
    }

    /// Store `value`, dropping the current value first if there is one.
    ///
    /// Return a mutable reference to the stored value.
    ///
    /// ```
    /// use inlineopt::Optional;
    ///
    /// let mut opt = Optional::from(1);
    /// *opt.emplace(2) += 1;
    /// assert_eq!(opt, Optional::from(3));
    /// ```
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.emplace_with(move || value)
    }

    /// Drop the current value if there is one, then construct a new value
    /// from `f` in its place.
    ///
    /// The old value is gone before `f` runs. If `f` panics, the `Optional`
    /// is left empty.
    ///
    /// ```
    /// use inlineopt::Optional;
    ///
    /// let mut opt = Optional::from(String::from("old"));
    /// opt.emplace_with(|| String::from("new"));
    /// assert_eq!(opt.as_ref().map(String::as_str), Some("new"));
    /// ```
    pub fn emplace_with<F>(&mut self, f: F) -> &mut T
        where F: FnOnce() -> T
    {
        OptionalImpl::emplace_with(self, f)
    }

    /// Drop the value, if any, leaving the `Optional` empty.
    ///
    /// ```
    /// use inlineopt::Optional;
    ///
    /// let mut opt = Optional::from(vec![1, 2, 3]);
    /// opt.reset();
    /// assert!(opt.is_empty());
    /// opt.reset();
    /// assert!(opt.is_empty());
    /// ```
    pub fn reset(&mut self) {
        OptionalImpl::reset(self)
    }

    /// Assign the absent marker: the same as [`reset`](Optional::reset).
    pub fn assign_absent(&mut self, _: Absent) -> &mut Self {
        self.reset();
        self
    }

    /// Move the value out into a new `Optional`, leaving `self` empty.
    ///
    /// ```
    /// use inlineopt::Optional;
    ///
    /// let mut a = Optional::from(String::from("x"));
    /// let b = a.take();
    /// assert!(a.is_empty());
    /// assert_eq!(b.as_ref().map(String::as_str), Some("x"));
    /// ```
    pub fn take(&mut self) -> Optional<T> {
        match self.take_value() {
            Some(value) => Optional::some(value),
            None => Optional::new(),
        }
    }

    /// Move assignment from `source`.
    ///
    /// Afterwards `self` holds what `source` held, and `source` is empty.
    /// When both are present the value is assigned through, dropping the
    /// old value of `self` exactly once.
    ///
    /// ```
    /// use inlineopt::Optional;
    ///
    /// let mut a = Optional::from(1);
    /// let mut b = Optional::<i32>::new();
    /// a.take_from(&mut b);
    /// assert!(a.is_empty() && b.is_empty());
    /// ```
    pub fn take_from(&mut self, source: &mut Optional<T>) {
        self.assign_take(source)
    }

    /// Store `value` and return the previous contents.
    pub fn replace(&mut self, value: T) -> Optional<T> {
        let old = self.take();
        self.emplace(value);
        old
    }

    /// Convert into a std `Option`.
    pub fn into_option(mut self) -> Option<T> {
        self.take_value()
    }

    /// Return the value, or an error if the `Optional` is empty.
    ///
    /// ```
    /// use inlineopt::{Optional, AbsentError};
    ///
    /// assert_eq!(Optional::from(3).into_inner(), Ok(3));
    /// assert!(Optional::<i32>::new().into_inner().is_err());
    /// ```
    pub fn into_inner(self) -> Result<T, AbsentError> {
        self.into_option().ok_or(AbsentError::new())
    }
}

impl<T> OptionalImpl for Optional<T> {
    type Item = T;

    #[inline(always)]
    fn is_present(&self) -> bool { self.slot.present }

    #[inline(always)]
    unsafe fn set_present(&mut self, present: bool) {
        self.slot.present = present;
    }

    fn as_ptr(&self) -> *const T {
        self.slot.value.as_ptr()
    }

    fn as_mut_ptr(&mut self) -> *mut T {
        self.slot.value.as_mut_ptr()
    }
}

impl<T> Clone for Optional<T>
    where T: Clone
{
    fn clone(&self) -> Self {
        match self.as_ref() {
            Some(value) => Optional::with(|| value.clone()),
            None => Optional::new(),
        }
    }

    fn clone_from(&mut self, rhs: &Self) {
        self.assign_clone(rhs)
    }
}

impl<T> Default for Optional<T> {
    /// Return an empty `Optional`
    fn default() -> Optional<T> {
        Optional::new()
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Optional::some(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::some(value),
            None => Optional::new(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T> fmt::Debug for Optional<T> where T: fmt::Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.as_ref() {
            Some(value) => f.debug_tuple("Present").field(value).finish(),
            None => f.write_str("Absent"),
        }
    }
}

#[cfg(feature = "zeroize")]
/// "Best efforts" zeroing of the `Optional`'s storage.
///
/// The value is zeroized and dropped, then the whole storage is zeroed.
impl<Z: zeroize::Zeroize> zeroize::Zeroize for Optional<Z> {
    fn zeroize(&mut self) {
        if let Some(value) = self.as_mut() {
            zeroize::Zeroize::zeroize(value);
        }
        self.reset();
        zeroize::Zeroize::zeroize(&mut self.slot.value);
    }
}
