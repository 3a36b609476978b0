use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::copy::OptionalCopy;
use crate::optional::Optional;

// An absent value is equal to another absent value and orders strictly
// before any present value. Present values compare by `T`.
//
// `gt` and `ge` are the mirrored `lt` and `le`, not the negations of `le`
// and `lt`, so all four agree with `partial_cmp`. For a partial order such
// as `f64` with NaN, `a > b` is false whenever the values are unordered.
macro_rules! impl_cmp {
    ($name:ident $(, $extra:ident)?) => {
        impl<T> PartialEq for $name<T>
            where T: PartialEq $(+ $extra)?
        {
            fn eq(&self, other: &Self) -> bool {
                match (self.as_ref(), other.as_ref()) {
                    (Some(a), Some(b)) => *a == *b,
                    (None, None) => true,
                    _ => false,
                }
            }
        }

        impl<T> Eq for $name<T> where T: Eq $(+ $extra)? { }

        impl<T> PartialOrd for $name<T>
            where T: PartialOrd $(+ $extra)?
        {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                match (self.as_ref(), other.as_ref()) {
                    (Some(a), Some(b)) => a.partial_cmp(b),
                    (None, None) => Some(Ordering::Equal),
                    (None, Some(_)) => Some(Ordering::Less),
                    (Some(_), None) => Some(Ordering::Greater),
                }
            }

            #[inline]
            fn lt(&self, other: &Self) -> bool {
                match (self.as_ref(), other.as_ref()) {
                    (_, None) => false,
                    (None, Some(_)) => true,
                    (Some(a), Some(b)) => *a < *b,
                }
            }

            #[inline]
            fn le(&self, other: &Self) -> bool {
                match (self.as_ref(), other.as_ref()) {
                    (None, _) => true,
                    (Some(_), None) => false,
                    (Some(a), Some(b)) => *a <= *b,
                }
            }

            #[inline]
            fn gt(&self, other: &Self) -> bool {
                other.lt(self)
            }

            #[inline]
            fn ge(&self, other: &Self) -> bool {
                other.le(self)
            }
        }

        impl<T> Ord for $name<T>
            where T: Ord $(+ $extra)?
        {
            fn cmp(&self, other: &Self) -> Ordering {
                match (self.as_ref(), other.as_ref()) {
                    (Some(a), Some(b)) => a.cmp(b),
                    (None, None) => Ordering::Equal,
                    (None, Some(_)) => Ordering::Less,
                    (Some(_), None) => Ordering::Greater,
                }
            }
        }

        impl<T> Hash for $name<T>
            where T: Hash $(+ $extra)?
        {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.as_ref().hash(state)
            }
        }
    }
}

impl_cmp!(Optional);
impl_cmp!(OptionalCopy, Copy);
