//! Geolocation range checks: latitude within ±90°, longitude within ±180°.

use super::values::{Boundary, GuardValue};
use super::{error_codes, reject, GuardResult, Validate};
use rust_decimal::Decimal;

const LATITUDE_LIMIT: i16 = 90;
const LONGITUDE_LIMIT: i16 = 180;

/// **COORDINATE** - a fractional type that can hold degrees
pub trait Coordinate: Boundary {
    /// Converts whole degrees into this type.
    fn degrees(value: i16) -> Self;
}

impl Coordinate for f32 {
    fn degrees(value: i16) -> Self {
        Self::from(value)
    }
}

impl Coordinate for f64 {
    fn degrees(value: i16) -> Self {
        Self::from(value)
    }
}

impl Coordinate for Decimal {
    fn degrees(value: i16) -> Self {
        Self::from(value)
    }
}

fn check_degrees<V>(
    value: V,
    limit: i16,
    (min_code, max_code): (&str, &str),
    property: &str,
) -> GuardResult<V>
where
    V: GuardValue,
    V::Inner: Coordinate,
{
    match value.present() {
        Some(current) if current < V::Inner::degrees(-limit) => reject(property, min_code),
        Some(current) if current > V::Inner::degrees(limit) => reject(property, max_code),
        _ => Ok(value),
    }
}

impl Validate {
    /// Fails with `MIN_LATITUDE` below -90° or `MAX_LATITUDE` above 90°. Absent values pass.
    pub fn if_latitude_out_of_range<V>(self, value: V, property: &str) -> GuardResult<V>
    where
        V: GuardValue,
        V::Inner: Coordinate,
    {
        check_degrees(
            value,
            LATITUDE_LIMIT,
            (error_codes::MIN_LATITUDE, error_codes::MAX_LATITUDE),
            property,
        )
    }

    /// Fails with `MIN_LONGITUDE` below -180° or `MAX_LONGITUDE` above 180°. Absent values pass.
    pub fn if_longitude_out_of_range<V>(self, value: V, property: &str) -> GuardResult<V>
    where
        V: GuardValue,
        V::Inner: Coordinate,
    {
        check_degrees(
            value,
            LONGITUDE_LIMIT,
            (error_codes::MIN_LONGITUDE, error_codes::MAX_LONGITUDE),
            property,
        )
    }
}
