//! Wire form of move endpoints: a point index, or the `"bar"`/`"off"`
//! sentinel, matching the move request payload
//! `{ from: 0..23 | "bar", to: 0..23 | "off", die: 1..6 }`.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::board::POINTS;
use super::moves::{MoveFrom, MoveTo};

impl Serialize for MoveFrom {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            MoveFrom::Bar => serializer.serialize_str("bar"),
            MoveFrom::Point(index) => serializer.serialize_u64(u64::from(*index)),
        }
    }
}

struct MoveFromVisitor;

impl<'de> Visitor<'de> for MoveFromVisitor {
    type Value = MoveFrom;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a point index 0..=23 or \"bar\"")
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if value < POINTS as u64 {
            Ok(MoveFrom::Point(value as u8))
        } else {
            Err(E::custom(format!("point index out of range: {value}")))
        }
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(value)
            .map_err(|_| E::custom(format!("point index out of range: {value}")))
            .and_then(|value| self.visit_u64(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match value {
            "bar" => Ok(MoveFrom::Bar),
            other => Err(E::custom(format!("invalid move origin: {other:?}"))),
        }
    }
}

impl<'de> Deserialize<'de> for MoveFrom {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MoveFromVisitor)
    }
}

impl Serialize for MoveTo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            MoveTo::Off => serializer.serialize_str("off"),
            MoveTo::Point(index) => serializer.serialize_u64(u64::from(*index)),
        }
    }
}

struct MoveToVisitor;

impl<'de> Visitor<'de> for MoveToVisitor {
    type Value = MoveTo;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a point index 0..=23 or \"off\"")
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if value < POINTS as u64 {
            Ok(MoveTo::Point(value as u8))
        } else {
            Err(E::custom(format!("point index out of range: {value}")))
        }
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(value)
            .map_err(|_| E::custom(format!("point index out of range: {value}")))
            .and_then(|value| self.visit_u64(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match value {
            "off" => Ok(MoveTo::Off),
            other => Err(E::custom(format!("invalid move destination: {other:?}"))),
        }
    }
}

impl<'de> Deserialize<'de> for MoveTo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MoveToVisitor)
    }
}
