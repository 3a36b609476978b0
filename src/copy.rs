use std::fmt;
use std::mem::MaybeUninit;

use crate::absent::Absent;
use crate::errors::AbsentError;
use crate::optional::Optional;
use crate::optional_impl::OptionalImpl;

/// A value that might be absent, stored inline, that implements `Copy`.
///
/// The trivially copyable counterpart of [`Optional`]: copying is the
/// built-in bitwise copy of the presence flag and the storage, and there is
/// nothing to drop. Presence, value and comparison behave exactly as for
/// `Optional`.
///
/// ```
/// use inlineopt::OptionalCopy;
///
/// const ORIGIN: OptionalCopy<(i32, i32)> = OptionalCopy::some((0, 0));
///
/// let a = ORIGIN;
/// let b = a;
/// assert_eq!(a, b);
/// assert_eq!(b.get(), Some((0, 0)));
/// ```
#[derive(Copy, Clone)]
pub struct OptionalCopy<T: Copy> {
    // `value` is initialized iff `present`
    present: bool,
    value: MaybeUninit<T>,
}

impl<T: Copy> OptionalCopy<T> {
    /// Create a new empty `OptionalCopy`.
    #[inline]
    pub const fn new() -> Self {
        OptionalCopy { present: false, value: MaybeUninit::uninit() }
    }

    /// Create an empty `OptionalCopy` from the absent marker.
    #[inline]
    pub const fn from_absent(_: Absent) -> Self {
        OptionalCopy::new()
    }

    /// Create an `OptionalCopy` holding `value`.
    #[inline]
    pub const fn some(value: T) -> Self {
        OptionalCopy { present: true, value: MaybeUninit::new(value) }
    }

    /// Create an `OptionalCopy` whose value is constructed by `f`.
    #[inline]
    pub fn with<F>(f: F) -> Self
        where F: FnOnce() -> T
    {
        OptionalCopy::some(f())
    }

    /// Return `true` if the `OptionalCopy` holds a value.
    #[inline(always)]
    pub fn is_present(&self) -> bool { self.present }

    /// Return `true` if the `OptionalCopy` holds no value.
    #[inline(always)]
    pub fn is_empty(&self) -> bool { !self.present }

    /// Return a reference to the value, without checking that it is present.
    ///
    /// ## Safety
    ///
    /// The `OptionalCopy` must be present.
    #[inline]
    pub unsafe fn get_unchecked(&self) -> &T {
        OptionalImpl::get_unchecked(self)
    }

    /// Return a mutable reference to the value, without checking that it is
    /// present.
    ///
    /// ## Safety
    ///
    /// The `OptionalCopy` must be present.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        OptionalImpl::get_unchecked_mut(self)
    }

    pub fn as_ptr(&self) -> *const T {
        OptionalImpl::as_ptr(self)
    }

    pub fn as_mut_ptr(&mut self) -> *mut T {
        OptionalImpl::as_mut_ptr(self)
    }

    #[inline]
    pub fn as_ref(&self) -> Option<&T> {
        OptionalImpl::as_ref(self)
    }

    #[inline]
    pub fn as_mut(&mut self) -> Option<&mut T> {
        OptionalImpl::as_mut(self)
    }

    /// Return a copy of the value, if present.
    #[inline]
    pub fn get(&self) -> Option<T> {
        self.as_ref().copied()
    }

    /// Store `value`, replacing the current value if there is one.
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.emplace_with(move || value)
    }

    /// Forget the current value if there is one, then construct a new value
    /// from `f` in its place. If `f` panics, the `OptionalCopy` is left empty.
    pub fn emplace_with<F>(&mut self, f: F) -> &mut T
        where F: FnOnce() -> T
    {
        OptionalImpl::emplace_with(self, f)
    }

    /// Forget the value, if any.
    pub fn reset(&mut self) {
        OptionalImpl::reset(self)
    }

    /// Assign the absent marker: the same as [`reset`](OptionalCopy::reset).
    pub fn assign_absent(&mut self, _: Absent) -> &mut Self {
        self.reset();
        self
    }

    /// Return the current contents, leaving `self` empty.
    ///
    /// ```
    /// use inlineopt::OptionalCopy;
    ///
    /// let mut a = OptionalCopy::some(1u8);
    /// let b = a.take();
    /// assert!(a.is_empty());
    /// assert_eq!(b.get(), Some(1));
    /// ```
    pub fn take(&mut self) -> Self {
        let taken = *self;
        self.reset();
        taken
    }

    /// Move assignment from `source`; `source` is empty afterwards.
    pub fn take_from(&mut self, source: &mut Self) {
        self.assign_take(source)
    }

    /// Store `value` and return the previous contents.
    pub fn replace(&mut self, value: T) -> Self {
        let old = *self;
        self.emplace(value);
        old
    }

    /// Convert into a std `Option`.
    pub fn into_option(self) -> Option<T> {
        self.get()
    }

    /// Return the value, or an error if the `OptionalCopy` is empty.
    pub fn into_inner(self) -> Result<T, AbsentError> {
        self.get().ok_or(AbsentError::new())
    }
}

impl<T: Copy> OptionalImpl for OptionalCopy<T> {
    type Item = T;

    #[inline(always)]
    fn is_present(&self) -> bool { self.present }

    #[inline(always)]
    unsafe fn set_present(&mut self, present: bool) {
        self.present = present;
    }

    fn as_ptr(&self) -> *const T {
        self.value.as_ptr()
    }

    fn as_mut_ptr(&mut self) -> *mut T {
        self.value.as_mut_ptr()
    }
}

impl<T: Copy> Default for OptionalCopy<T> {
    /// Return an empty `OptionalCopy`
    fn default() -> Self {
        OptionalCopy::new()
    }
}

impl<T: Copy> From<T> for OptionalCopy<T> {
    fn from(value: T) -> Self {
        OptionalCopy::some(value)
    }
}

impl<T: Copy> From<Option<T>> for OptionalCopy<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => OptionalCopy::some(value),
            None => OptionalCopy::new(),
        }
    }
}

impl<T: Copy> From<OptionalCopy<T>> for Option<T> {
    fn from(value: OptionalCopy<T>) -> Self {
        value.get()
    }
}

impl<T: Copy> From<OptionalCopy<T>> for Optional<T> {
    fn from(value: OptionalCopy<T>) -> Self {
        value.get().into()
    }
}

impl<T: Copy> From<Optional<T>> for OptionalCopy<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option().into()
    }
}

impl<T: Copy> fmt::Debug for OptionalCopy<T> where T: fmt::Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.as_ref() {
            Some(value) => f.debug_tuple("Present").field(value).finish(),
            None => f.write_str("Absent"),
        }
    }
}

#[cfg(feature = "zeroize")]
/// Zero the whole storage and mark the `OptionalCopy` empty.
impl<Z: Copy + zeroize::Zeroize> zeroize::Zeroize for OptionalCopy<Z> {
    fn zeroize(&mut self) {
        if let Some(value) = self.as_mut() {
            zeroize::Zeroize::zeroize(value);
        }
        self.reset();
        zeroize::Zeroize::zeroize(&mut self.value);
    }
}
