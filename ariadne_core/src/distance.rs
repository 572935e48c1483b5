use std::{fmt, iter::Sum, marker::PhantomData, ops::Add};

pub trait DistanceUnit: Copy + Ord {
    const NAME: &'static str;
    const NANOMETERS_IN_UNIT: i64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Meters;

impl DistanceUnit for Meters {
    const NAME: &'static str = "meter";
    const NANOMETERS_IN_UNIT: i64 = 1_000_000_000;
}

/// A length stored as integer nanometers, so that summing the arcs of a path
/// gives the same result in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance<T: DistanceUnit> {
    nm: i64,
    unit: PhantomData<T>,
}

impl<T: DistanceUnit> Distance<T> {
    pub const ZERO: Distance<T> = Distance {
        nm: 0,
        unit: PhantomData,
    };

    #[inline(always)]
    pub fn value(&self) -> f64 {
        self.nm as f64 / T::NANOMETERS_IN_UNIT as f64
    }
}

impl<T: DistanceUnit> fmt::Display for Distance<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = self.value();
        let plural = if value == 1.0 { "" } else { "s" };
        write!(f, "{} {}{}", value, T::NAME, plural)
    }
}

impl<T: DistanceUnit> From<f64> for Distance<T> {
    fn from(value: f64) -> Self {
        Distance {
            nm: (value * T::NANOMETERS_IN_UNIT as f64).round() as i64,
            unit: PhantomData,
        }
    }
}

impl<T: DistanceUnit> From<i64> for Distance<T> {
    fn from(value: i64) -> Self {
        Distance {
            nm: value * T::NANOMETERS_IN_UNIT,
            unit: PhantomData,
        }
    }
}

/// Saturates at the largest representable length instead of overflowing.
impl<T: DistanceUnit> Add for Distance<T> {
    type Output = Distance<T>;

    fn add(self, other: Distance<T>) -> Distance<T> {
        Distance {
            nm: self.nm.saturating_add(other.nm),
            unit: PhantomData,
        }
    }
}

impl<T: DistanceUnit> Sum for Distance<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[macro_export]
macro_rules! meters {
    ($num:expr) => {
        $crate::distance::Distance::<$crate::distance::Meters>::from($num)
    };
}
