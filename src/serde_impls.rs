use core::result::Result;

use alloc::vec::Vec;

use num_traits::float::FloatCore;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::{Integer, Interval, Weighted, WrapInt, WrapList};

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename = "WrapInt")]
struct RawWrapInt<T> {
    value: T,
    left: T,
    right: T,
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename = "Interval")]
struct RawInterval<T> {
    left: T,
    right: T,
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename = "Weighted")]
struct RawWeighted<F> {
    value: F,
    weight: F,
}

impl<T: Integer + Serialize> Serialize for Interval<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawInterval {
            left: self.left(),
            right: self.right(),
        }
        .serialize(serializer)
    }
}

impl<'de, T: Integer + Deserialize<'de>> Deserialize<'de> for Interval<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawInterval::<T>::deserialize(deserializer)?;
        Interval::new(raw.left, raw.right).map_err(de::Error::custom)
    }
}

impl<T: Integer + Serialize> Serialize for WrapInt<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawWrapInt {
            value: self.get(),
            left: self.left(),
            right: self.right(),
        }
        .serialize(serializer)
    }
}

/// Out-of-range values are wrapped, just like [`WrapInt::new`] does; empty intervals are rejected.
impl<'de, T: Integer + Deserialize<'de>> Deserialize<'de> for WrapInt<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawWrapInt::<T>::deserialize(deserializer)?;
        WrapInt::new(raw.value, raw.left, raw.right).map_err(de::Error::custom)
    }
}

impl<T: Serialize> Serialize for WrapList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for WrapList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(WrapList::from)
    }
}

impl<F: FloatCore + Serialize> Serialize for Weighted<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawWeighted {
            value: self.value(),
            weight: self.weight(),
        }
        .serialize(serializer)
    }
}

impl<'de, F: FloatCore + Deserialize<'de>> Deserialize<'de> for Weighted<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawWeighted::<F>::deserialize(deserializer)?;
        Ok(Weighted::new(raw.value, raw.weight))
    }
}
