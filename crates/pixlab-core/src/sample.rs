//! Scalar sample access shared by the gray pixel buffers.
//!
//! [`Sample`] carries just enough to write kind-generic inner loops:
//! widening to `f64`, rounded narrowing back, and a total order for
//! sorting distinct values. Operations still dispatch on the
//! [`PixelData`](crate::PixelData) tag explicitly; the trait only keeps
//! the per-scalar arms from repeating themselves.

use std::cmp::Ordering;

use crate::image::PixelData;
use crate::kind::PixelKind;

/// A scalar type backing one of the gray [`PixelKind`]s.
pub trait Sample: Copy + PartialEq {
    /// Native-order kind for this scalar type.
    const KIND: PixelKind;

    fn to_f64(self) -> f64;

    /// Nearest representable value to `v`, rounding ties to even and
    /// saturating at the type bounds. `NaN` maps to zero for the integer
    /// types.
    fn from_f64(v: f64) -> Self;

    /// Total ordering; the float types use the IEEE total order.
    fn total_cmp(&self, other: &Self) -> Ordering;

    fn is_negative(self) -> bool;

    /// Move the samples into the matching [`PixelData`] buffer.
    fn wrap(samples: Vec<Self>) -> PixelData;
}

impl Sample for bool {
    const KIND: PixelKind = PixelKind::Bit;

    #[inline]
    fn to_f64(self) -> f64 {
        if self { 1.0 } else { 0.0 }
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v.round_ties_even() != 0.0
    }

    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }

    #[inline]
    fn is_negative(self) -> bool {
        false
    }

    #[inline]
    fn wrap(samples: Vec<Self>) -> PixelData {
        PixelData::Bit(samples)
    }
}

macro_rules! unsigned_sample {
    ($($t:ty => $kind:ident),* $(,)?) => {$(
        impl Sample for $t {
            const KIND: PixelKind = PixelKind::$kind;

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v.round_ties_even() as $t
            }

            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }

            #[inline]
            fn is_negative(self) -> bool {
                false
            }

            #[inline]
            fn wrap(samples: Vec<Self>) -> PixelData {
                PixelData::$kind(samples)
            }
        }
    )*};
}

macro_rules! signed_sample {
    ($($t:ty => $kind:ident),* $(,)?) => {$(
        impl Sample for $t {
            const KIND: PixelKind = PixelKind::$kind;

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v.round_ties_even() as $t
            }

            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }

            #[inline]
            fn is_negative(self) -> bool {
                self < 0
            }

            #[inline]
            fn wrap(samples: Vec<Self>) -> PixelData {
                PixelData::$kind(samples)
            }
        }
    )*};
}

macro_rules! float_sample {
    ($($t:ty => $kind:ident),* $(,)?) => {$(
        impl Sample for $t {
            const KIND: PixelKind = PixelKind::$kind;

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }

            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                <$t>::total_cmp(self, other)
            }

            #[inline]
            fn is_negative(self) -> bool {
                self < 0.0
            }

            #[inline]
            fn wrap(samples: Vec<Self>) -> PixelData {
                PixelData::$kind(samples)
            }
        }
    )*};
}

unsigned_sample! {
    u8 => Byte,
    u16 => UShort,
    u32 => UInt,
    u64 => ULong,
}

signed_sample! {
    i8 => SByte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
}

float_sample! {
    f32 => Float,
    f64 => Double,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_f64_rounds_ties_to_even() {
        assert_eq!(u8::from_f64(0.5), 0);
        assert_eq!(u8::from_f64(1.5), 2);
        assert_eq!(u8::from_f64(2.5), 2);
        assert_eq!(i16::from_f64(-0.5), 0);
        assert_eq!(i16::from_f64(-1.5), -2);
    }

    #[test]
    fn test_from_f64_saturates_at_bounds() {
        assert_eq!(u8::from_f64(300.0), 255);
        assert_eq!(u8::from_f64(-5.0), 0);
        assert_eq!(i8::from_f64(200.0), 127);
        assert_eq!(u8::from_f64(f64::NAN), 0);
    }

    #[test]
    fn test_bool_sample_thresholds_at_half() {
        assert!(!bool::from_f64(0.4));
        assert!(bool::from_f64(0.6));
        assert!(!bool::from_f64(0.5));
        assert!(bool::from_f64(1.5));
    }

    #[test]
    fn test_total_cmp_sorts_nan_last() {
        let mut v = vec![1.0f32, f32::NAN, -2.0, 0.5];
        v.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(v[0], -2.0);
        assert_eq!(v[1], 0.5);
        assert_eq!(v[2], 1.0);
        assert!(v[3].is_nan());
    }
}
