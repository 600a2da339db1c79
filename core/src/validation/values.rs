//! # CHECKED VALUE TRAITS
//!
//! Each guard category is written once against one of these traits instead of
//! once per concrete type. An absent value (`None`) is reported as `None` by
//! every accessor so the checks can apply their own absence rule.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use uuid::Uuid;

/// Date bounds render as `yyyy-MM-dd`.
const DATE_LABEL: &str = "%Y-%m-%d";

/// **BOUNDARY** - a totally or partially ordered value usable as a min/max
pub trait Boundary: Copy + PartialOrd {
    /// Canonical text placed after `MAX:` / `MIN:`.
    fn label(&self) -> String;
}

/// **GUARD VALUE** - a bound-checked value, plain or optional
pub trait GuardValue: Copy {
    /// The underlying comparable type.
    type Inner: Boundary;

    /// `None` when the value is absent.
    fn present(self) -> Option<Self::Inner>;
}

macro_rules! guard_values {
    (|$v:ident| $label:expr => $($t:ty),* $(,)?) => {
        $(
            impl Boundary for $t {
                fn label(&self) -> String {
                    let $v = self;
                    $label
                }
            }

            impl GuardValue for $t {
                type Inner = $t;

                fn present(self) -> Option<$t> {
                    Some(self)
                }
            }

            impl GuardValue for Option<$t> {
                type Inner = $t;

                fn present(self) -> Option<$t> {
                    self
                }
            }
        )*
    };
}

guard_values!(|v| v.to_string() =>
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64, Decimal,
);

guard_values!(|v| v.format(DATE_LABEL).to_string() => NaiveDate, NaiveDateTime, DateTime<Utc>);

/// **TEXT VALUE** - borrowed, owned or optional text
pub trait TextValue {
    /// `None` when the text is absent.
    fn text(&self) -> Option<&str>;
}

impl TextValue for &str {
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl TextValue for &String {
    fn text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl TextValue for String {
    fn text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl TextValue for Option<&str> {
    fn text(&self) -> Option<&str> {
        *self
    }
}

impl TextValue for Option<&String> {
    fn text(&self) -> Option<&str> {
        self.map(String::as_str)
    }
}

impl TextValue for Option<String> {
    fn text(&self) -> Option<&str> {
        self.as_deref()
    }
}

/// **EMPTINESS** - values with a zero/empty state
pub trait Emptiness {
    /// `Some(true)` when empty, `None` when absent.
    fn is_blank(&self) -> Option<bool>;
}

/// **COUNTABLE** - collections with an element count
pub trait Countable {
    /// Number of elements, `None` when absent.
    fn count(&self) -> Option<usize>;
}

macro_rules! text_emptiness {
    ($($t:ty),* $(,)?) => {
        $(
            impl Emptiness for $t {
                fn is_blank(&self) -> Option<bool> {
                    self.text().map(str::is_empty)
                }
            }
        )*
    };
}

text_emptiness!(&str, &String, String, Option<&str>, Option<&String>, Option<String>);

impl Emptiness for Uuid {
    fn is_blank(&self) -> Option<bool> {
        Some(self.is_nil())
    }
}

impl Emptiness for Option<Uuid> {
    fn is_blank(&self) -> Option<bool> {
        self.map(|id| id.is_nil())
    }
}

macro_rules! collections {
    ($([$($gen:tt)*] $t:ty),* $(,)?) => {
        $(
            impl<$($gen)*> Countable for $t {
                fn count(&self) -> Option<usize> {
                    Some(self.len())
                }
            }

            impl<$($gen)*> Countable for Option<$t> {
                fn count(&self) -> Option<usize> {
                    self.as_ref().map(|c| c.len())
                }
            }

            impl<$($gen)*> Emptiness for $t {
                fn is_blank(&self) -> Option<bool> {
                    Some(self.is_empty())
                }
            }

            impl<$($gen)*> Emptiness for Option<$t> {
                fn is_blank(&self) -> Option<bool> {
                    self.as_ref().map(|c| c.is_empty())
                }
            }
        )*
    };
}

collections!(
    ['a, T] &'a [T],
    ['a, T, const N: usize] &'a [T; N],
    [T] Vec<T>,
    ['a, T] &'a Vec<T>,
    [T] VecDeque<T>,
    ['a, T] &'a VecDeque<T>,
    [K, V, S] HashMap<K, V, S>,
    ['a, K, V, S] &'a HashMap<K, V, S>,
    [T, S] HashSet<T, S>,
    ['a, T, S] &'a HashSet<T, S>,
    [K, V] BTreeMap<K, V>,
    ['a, K, V] &'a BTreeMap<K, V>,
    [T] BTreeSet<T>,
    ['a, T] &'a BTreeSet<T>,
    [K, V, S] IndexMap<K, V, S>,
    ['a, K, V, S] &'a IndexMap<K, V, S>,
);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_numeric_labels() {
        assert_eq!(5i32.label(), "5");
        assert_eq!((-12i64).label(), "-12");
        assert_eq!(2.5f64.label(), "2.5");
        assert_eq!(5.0f64.label(), "5");
        assert_eq!(Decimal::new(1999, 2).label(), "19.99");
    }

    #[test]
    fn test_date_labels() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 7).unwrap();
        assert_eq!(date.label(), "2021-03-07");
        let stamp = Utc.with_ymd_and_hms(2021, 3, 7, 23, 59, 1).unwrap();
        assert_eq!(stamp.label(), "2021-03-07");
        assert_eq!(stamp.naive_utc().label(), "2021-03-07");
    }

    #[test]
    fn test_optional_presence() {
        assert_eq!(Some(4u16).present(), Some(4));
        assert_eq!(None::<u16>.present(), None);
        assert_eq!(7u64.present(), Some(7));
    }

    #[test]
    fn test_text_emptiness() {
        assert_eq!("".is_blank(), Some(true));
        assert_eq!(String::from("x").is_blank(), Some(false));
        assert_eq!(None::<&str>.is_blank(), None);
    }

    #[test]
    fn test_collection_counts() {
        let items = vec![1, 2, 3];
        assert_eq!((&items).count(), Some(3));
        assert_eq!(items.as_slice().count(), Some(3));
        assert_eq!(None::<Vec<u8>>.count(), None);
        let map: HashMap<&str, u8> = HashMap::new();
        assert_eq!(map.is_blank(), Some(true));
    }

    #[test]
    fn test_uuid_emptiness() {
        assert_eq!(Uuid::nil().is_blank(), Some(true));
        assert_eq!(Uuid::new_v4().is_blank(), Some(false));
        assert_eq!(None::<Uuid>.is_blank(), None);
    }
}
