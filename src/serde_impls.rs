use std::fmt;
use std::marker::PhantomData;

use serde::de::Visitor;
use serde::{self, Deserialize, Deserializer, Serialize, Serializer};

use crate::{Optional, OptionalCopy};

/// Requires crate feature `"serde"`
///
/// Serialized like a std `Option`: `none`, or `some` of the value.
impl<T> Serialize for Optional<T>
    where T: Serialize
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_ref() {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

/// Requires crate feature `"serde"`
impl<T> Serialize for OptionalCopy<T>
    where T: Copy + Serialize
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_ref() {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

struct OptionalVisitor<'de, T: 'de>(PhantomData<(&'de (), T)>);

impl<'de, T> Visitor<'de> for OptionalVisitor<'de, T>
    where T: Deserialize<'de>
{
    type Value = Optional<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an optional value")
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(Optional::new())
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(Optional::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        T::deserialize(deserializer).map(Optional::from)
    }
}

/// Requires crate feature `"serde"`
impl<'de, T> Deserialize<'de> for Optional<T>
    where T: Deserialize<'de> + 'de
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(OptionalVisitor::<T>(PhantomData))
    }
}

/// Requires crate feature `"serde"`
impl<'de, T> Deserialize<'de> for OptionalCopy<T>
    where T: Copy + Deserialize<'de> + 'de
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Optional::<T>::deserialize(deserializer).map(OptionalCopy::from)
    }
}
