use borsh::io::{Read, Result, Write};
use borsh::{BorshDeserialize, BorshSerialize};

use crate::{Optional, OptionalCopy};

// Same encoding as a borsh `Option`: a `0` byte when absent, `1` followed
// by the value when present.

/// Requires crate feature `"borsh"`
impl<T> BorshSerialize for Optional<T>
    where T: BorshSerialize
{
    fn serialize<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.as_ref().serialize(writer)
    }
}

/// Requires crate feature `"borsh"`
impl<T> BorshDeserialize for Optional<T>
    where T: BorshDeserialize
{
    fn deserialize_reader<R: Read>(reader: &mut R) -> Result<Self> {
        Option::<T>::deserialize_reader(reader).map(Optional::from)
    }
}

/// Requires crate feature `"borsh"`
impl<T> BorshSerialize for OptionalCopy<T>
    where T: Copy + BorshSerialize
{
    fn serialize<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.as_ref().serialize(writer)
    }
}

/// Requires crate feature `"borsh"`
impl<T> BorshDeserialize for OptionalCopy<T>
    where T: Copy + BorshDeserialize
{
    fn deserialize_reader<R: Read>(reader: &mut R) -> Result<Self> {
        Option::<T>::deserialize_reader(reader).map(OptionalCopy::from)
    }
}
