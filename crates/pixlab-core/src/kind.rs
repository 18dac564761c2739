//! Pixel element kinds and their fixed value tables.
//!
//! Every [`Image`](crate::Image) carries a [`PixelKind`] tag describing its
//! element type. Gray kinds hold one scalar per pixel; [`PixelKind::Rgb24`]
//! holds a red/green/blue byte triple. The `*Be` kinds tag samples that
//! arrived in big-endian storage (16-bit PNG, for instance); sample values
//! are always kept in native order, the tag only records provenance.

use std::fmt;

/// Element type of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelKind {
    /// 1-bit black and white, stored as booleans
    Bit,
    /// Unsigned 8-bit
    Byte,
    /// Signed 8-bit
    SByte,
    /// Signed 16-bit
    Short,
    /// Signed 16-bit, big-endian provenance
    ShortBe,
    /// Unsigned 16-bit
    UShort,
    /// Unsigned 16-bit, big-endian provenance
    UShortBe,
    /// Signed 32-bit
    Int,
    /// Signed 32-bit, big-endian provenance
    IntBe,
    /// Unsigned 32-bit
    UInt,
    /// Unsigned 32-bit, big-endian provenance
    UIntBe,
    /// Signed 64-bit
    Long,
    /// Signed 64-bit, big-endian provenance
    LongBe,
    /// Unsigned 64-bit
    ULong,
    /// Unsigned 64-bit, big-endian provenance
    ULongBe,
    /// 32-bit floating point
    Float,
    /// 64-bit floating point
    Double,
    /// 24-bit RGB, one byte per channel
    Rgb24,
}

impl PixelKind {
    /// Unsigned kinds ordered from narrowest to widest, used when picking
    /// the smallest kind able to hold a label count.
    pub const LABEL_KINDS: [PixelKind; 5] = [
        PixelKind::Bit,
        PixelKind::Byte,
        PixelKind::UShort,
        PixelKind::UInt,
        PixelKind::ULong,
    ];

    /// Bits per pixel.
    #[inline]
    pub fn bits(&self) -> u32 {
        match self {
            PixelKind::Bit => 1,
            PixelKind::Byte | PixelKind::SByte => 8,
            PixelKind::Short | PixelKind::ShortBe | PixelKind::UShort | PixelKind::UShortBe => 16,
            PixelKind::Int
            | PixelKind::IntBe
            | PixelKind::UInt
            | PixelKind::UIntBe
            | PixelKind::Float => 32,
            PixelKind::Long
            | PixelKind::LongBe
            | PixelKind::ULong
            | PixelKind::ULongBe
            | PixelKind::Double => 64,
            PixelKind::Rgb24 => 24,
        }
    }

    /// True for the RGB kind.
    #[inline]
    pub fn is_rgb(&self) -> bool {
        matches!(self, PixelKind::Rgb24)
    }

    /// True for every single-scalar kind (everything except RGB).
    #[inline]
    pub fn is_gray(&self) -> bool {
        !self.is_rgb()
    }

    /// True for the floating-point kinds.
    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, PixelKind::Float | PixelKind::Double)
    }

    /// True for signed integer kinds.
    #[inline]
    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            PixelKind::SByte
                | PixelKind::Short
                | PixelKind::ShortBe
                | PixelKind::Int
                | PixelKind::IntBe
                | PixelKind::Long
                | PixelKind::LongBe
        )
    }

    /// True for unsigned integer kinds, including [`PixelKind::Bit`].
    #[inline]
    pub fn is_unsigned_int(&self) -> bool {
        matches!(
            self,
            PixelKind::Bit
                | PixelKind::Byte
                | PixelKind::UShort
                | PixelKind::UShortBe
                | PixelKind::UInt
                | PixelKind::UIntBe
                | PixelKind::ULong
                | PixelKind::ULongBe
        )
    }

    /// True for kinds tagged with big-endian provenance.
    #[inline]
    pub fn is_big_endian(&self) -> bool {
        matches!(
            self,
            PixelKind::ShortBe
                | PixelKind::UShortBe
                | PixelKind::IntBe
                | PixelKind::UIntBe
                | PixelKind::LongBe
                | PixelKind::ULongBe
        )
    }

    /// The native-order kind with the same scalar type, dropping any
    /// big-endian tag.
    #[inline]
    pub fn native(&self) -> PixelKind {
        match self {
            PixelKind::ShortBe => PixelKind::Short,
            PixelKind::UShortBe => PixelKind::UShort,
            PixelKind::IntBe => PixelKind::Int,
            PixelKind::UIntBe => PixelKind::UInt,
            PixelKind::LongBe => PixelKind::Long,
            PixelKind::ULongBe => PixelKind::ULong,
            other => *other,
        }
    }

    /// The unsigned kind of the same width and byte order, for signed
    /// integer kinds. `None` for everything else.
    pub fn unsigned_counterpart(&self) -> Option<PixelKind> {
        match self {
            PixelKind::SByte => Some(PixelKind::Byte),
            PixelKind::Short => Some(PixelKind::UShort),
            PixelKind::ShortBe => Some(PixelKind::UShortBe),
            PixelKind::Int => Some(PixelKind::UInt),
            PixelKind::IntBe => Some(PixelKind::UIntBe),
            PixelKind::Long => Some(PixelKind::ULong),
            PixelKind::LongBe => Some(PixelKind::ULongBe),
            _ => None,
        }
    }

    /// Nominal value range of the kind.
    ///
    /// Integer kinds report their full representable range. The float
    /// kinds report the nominal `(0.0, 1.0)` intensity range; use
    /// [`Image::value_range`](crate::Image::value_range) for the
    /// data-driven variant. [`PixelKind::Rgb24`] reports the per-channel
    /// byte range.
    pub fn value_range(&self) -> (f64, f64) {
        match self {
            PixelKind::Bit => (0.0, 1.0),
            PixelKind::Byte => (0.0, 255.0),
            PixelKind::SByte => (i8::MIN as f64, i8::MAX as f64),
            PixelKind::Short | PixelKind::ShortBe => (i16::MIN as f64, i16::MAX as f64),
            PixelKind::UShort | PixelKind::UShortBe => (0.0, u16::MAX as f64),
            PixelKind::Int | PixelKind::IntBe => (i32::MIN as f64, i32::MAX as f64),
            PixelKind::UInt | PixelKind::UIntBe => (0.0, u32::MAX as f64),
            PixelKind::Long | PixelKind::LongBe => (i64::MIN as f64, i64::MAX as f64),
            PixelKind::ULong | PixelKind::ULongBe => (0.0, u64::MAX as f64),
            PixelKind::Float | PixelKind::Double => (0.0, 1.0),
            PixelKind::Rgb24 => (0.0, 255.0),
        }
    }

    /// Largest label value an unsigned kind can store, `None` for signed,
    /// float, and RGB kinds.
    pub fn max_label(&self) -> Option<u64> {
        match self {
            PixelKind::Bit => Some(1),
            PixelKind::Byte => Some(u8::MAX as u64),
            PixelKind::UShort | PixelKind::UShortBe => Some(u16::MAX as u64),
            PixelKind::UInt | PixelKind::UIntBe => Some(u32::MAX as u64),
            PixelKind::ULong | PixelKind::ULongBe => Some(u64::MAX),
            _ => None,
        }
    }
}

impl fmt::Display for PixelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PixelKind::Bit => "bit",
            PixelKind::Byte => "byte",
            PixelKind::SByte => "sbyte",
            PixelKind::Short => "short",
            PixelKind::ShortBe => "short_be",
            PixelKind::UShort => "ushort",
            PixelKind::UShortBe => "ushort_be",
            PixelKind::Int => "int",
            PixelKind::IntBe => "int_be",
            PixelKind::UInt => "uint",
            PixelKind::UIntBe => "uint_be",
            PixelKind::Long => "long",
            PixelKind::LongBe => "long_be",
            PixelKind::ULong => "ulong",
            PixelKind::ULongBe => "ulong_be",
            PixelKind::Float => "float",
            PixelKind::Double => "double",
            PixelKind::Rgb24 => "rgb24",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_range_tables() {
        assert_eq!(PixelKind::Bit.value_range(), (0.0, 1.0));
        assert_eq!(PixelKind::Byte.value_range(), (0.0, 255.0));
        assert_eq!(PixelKind::SByte.value_range(), (-128.0, 127.0));
        assert_eq!(PixelKind::UShortBe.value_range(), (0.0, 65535.0));
        assert_eq!(PixelKind::Short.value_range(), (-32768.0, 32767.0));
        assert_eq!(PixelKind::Float.value_range(), (0.0, 1.0));
    }

    #[test]
    fn test_unsigned_counterpart_preserves_byte_order() {
        assert_eq!(
            PixelKind::Short.unsigned_counterpart(),
            Some(PixelKind::UShort)
        );
        assert_eq!(
            PixelKind::ShortBe.unsigned_counterpart(),
            Some(PixelKind::UShortBe)
        );
        assert_eq!(
            PixelKind::LongBe.unsigned_counterpart(),
            Some(PixelKind::ULongBe)
        );
        assert_eq!(PixelKind::Byte.unsigned_counterpart(), None);
        assert_eq!(PixelKind::Float.unsigned_counterpart(), None);
    }

    #[test]
    fn test_max_label_capacities() {
        assert_eq!(PixelKind::Bit.max_label(), Some(1));
        assert_eq!(PixelKind::Byte.max_label(), Some(255));
        assert_eq!(PixelKind::UShort.max_label(), Some(65535));
        assert_eq!(PixelKind::UInt.max_label(), Some(4294967295));
        assert_eq!(PixelKind::ULong.max_label(), Some(u64::MAX));
        assert_eq!(PixelKind::Short.max_label(), None);
        assert_eq!(PixelKind::Rgb24.max_label(), None);
    }

    #[test]
    fn test_native_drops_byte_order_tag() {
        assert_eq!(PixelKind::UShortBe.native(), PixelKind::UShort);
        assert_eq!(PixelKind::IntBe.native(), PixelKind::Int);
        assert_eq!(PixelKind::Byte.native(), PixelKind::Byte);
        assert!(!PixelKind::UShortBe.native().is_big_endian());
    }
}
