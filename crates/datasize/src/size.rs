use crate::Unit;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A quantity of digital storage, counted in bytes.
///
/// `Size` is a plain `u64` underneath; every operation returns a new value.
/// The canonical string form is produced by [`Display`](fmt::Display) and
/// accepted back by [`Size::parse`].
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Size(u64);

impl Size {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(u64::MAX);

    pub const BYTE: Self = Self(1);

    pub const KILOBYTE: Self = Self(1000 * Self::BYTE.0);
    pub const MEGABYTE: Self = Self(1000 * Self::KILOBYTE.0);
    pub const GIGABYTE: Self = Self(1000 * Self::MEGABYTE.0);
    pub const TERABYTE: Self = Self(1000 * Self::GIGABYTE.0);
    pub const PETABYTE: Self = Self(1000 * Self::TERABYTE.0);

    pub const KIBIBYTE: Self = Self(1024 * Self::BYTE.0);
    pub const MEBIBYTE: Self = Self(1024 * Self::KIBIBYTE.0);
    pub const GIBIBYTE: Self = Self(1024 * Self::MEBIBYTE.0);
    pub const TEBIBYTE: Self = Self(1024 * Self::GIBIBYTE.0);
    pub const PEBIBYTE: Self = Self(1024 * Self::TEBIBYTE.0);

    /// Creates a size of `bytes` bytes.
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    /// Raw byte count.
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Value expressed as a (possibly fractional) count of `unit`.
    pub fn in_unit(self, unit: Unit) -> f64 {
        self.0 as f64 / unit.size().0 as f64
    }

    pub fn kilobytes(self) -> f64 {
        self.in_unit(Unit::Kilobyte)
    }

    pub fn megabytes(self) -> f64 {
        self.in_unit(Unit::Megabyte)
    }

    pub fn gigabytes(self) -> f64 {
        self.in_unit(Unit::Gigabyte)
    }

    pub fn terabytes(self) -> f64 {
        self.in_unit(Unit::Terabyte)
    }

    pub fn petabytes(self) -> f64 {
        self.in_unit(Unit::Petabyte)
    }

    pub fn kibibytes(self) -> f64 {
        self.in_unit(Unit::Kibibyte)
    }

    pub fn mebibytes(self) -> f64 {
        self.in_unit(Unit::Mebibyte)
    }

    pub fn gibibytes(self) -> f64 {
        self.in_unit(Unit::Gibibyte)
    }

    pub fn tebibytes(self) -> f64 {
        self.in_unit(Unit::Tebibyte)
    }

    pub fn pebibytes(self) -> f64 {
        self.in_unit(Unit::Pebibyte)
    }

    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    pub const fn checked_mul(self, rhs: u64) -> Option<Self> {
        match self.0.checked_mul(rhs) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Largest unit in [`Unit::DESCENDING`] that does not exceed this value.
    pub(crate) fn largest_unit(self) -> Option<Unit> {
        Unit::DESCENDING
            .into_iter()
            .find(|unit| self >= unit.size())
    }
}

impl fmt::Debug for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Size({})", self.0)
    }
}

impl From<u64> for Size {
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl From<Size> for u64 {
    fn from(size: Size) -> Self {
        size.0
    }
}

impl Add for Size {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Size {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<u64> for Size {
    type Output = Self;

    fn mul(self, rhs: u64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Mul<Size> for u64 {
    type Output = Size;

    fn mul(self, rhs: Size) -> Size {
        Size(self * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_constants() {
        assert_eq!(Size::KILOBYTE.bytes(), 1_000);
        assert_eq!(Size::PETABYTE.bytes(), 1_000_000_000_000_000);
        assert_eq!(Size::KIBIBYTE.bytes(), 1_024);
        assert_eq!(Size::PEBIBYTE.bytes(), 1 << 50);
    }

    #[test]
    fn accessors_divide_by_unit() {
        let size = 3 * Size::GIBIBYTE;
        assert_eq!(size.gibibytes(), 3.0);
        assert_eq!(size.mebibytes(), 3072.0);
        assert_eq!(size.bytes(), 3 * 1024 * 1024 * 1024);

        let size = Size::new(1_500);
        assert_eq!(size.kilobytes(), 1.5);
        assert_eq!(Size::MEGABYTE.megabytes(), 1.0);
        assert_eq!(Size::GIGABYTE.gigabytes(), 1.0);
        assert_eq!(Size::TERABYTE.terabytes(), 1.0);
        assert_eq!(Size::PETABYTE.petabytes(), 1.0);
        assert_eq!(Size::KIBIBYTE.kibibytes(), 1.0);
        assert_eq!(Size::TEBIBYTE.tebibytes(), 1.0);
        assert_eq!(Size::PEBIBYTE.pebibytes(), 1.0);
        assert_eq!(Size::ZERO.pebibytes(), 0.0);
    }

    #[test]
    fn in_unit_matches_named_accessors() {
        let size = Size::new(123_456_789);
        assert_eq!(size.in_unit(Unit::Megabyte), size.megabytes());
        assert_eq!(size.in_unit(Unit::Mebibyte), size.mebibytes());
        assert_eq!(size.in_unit(Unit::Byte), 123_456_789.0);
    }

    #[test]
    fn arithmetic() {
        assert_eq!(Size::KIBIBYTE + Size::KIBIBYTE, 2 * Size::KIBIBYTE);
        assert_eq!(Size::KILOBYTE - Size::BYTE, Size::new(999));
        assert_eq!(Size::MEBIBYTE * 2, Size::new(2 * 1024 * 1024));
        assert_eq!(Size::MAX.checked_add(Size::BYTE), None);
        assert_eq!(Size::PEBIBYTE.checked_mul(1 << 14), None);
        assert_eq!(
            Size::PEBIBYTE.checked_mul(2),
            Some(Size::new(2 * Size::PEBIBYTE.bytes()))
        );
    }

    #[test]
    fn largest_unit_selection() {
        assert_eq!(Size::new(999).largest_unit(), None);
        assert_eq!(Size::new(1000).largest_unit(), Some(Unit::Kilobyte));
        assert_eq!(Size::new(1024).largest_unit(), Some(Unit::Kibibyte));
        assert_eq!(Size::MEGABYTE.largest_unit(), Some(Unit::Megabyte));
        assert_eq!(Size::MAX.largest_unit(), Some(Unit::Pebibyte));
    }

    #[test]
    fn debug_shows_raw_bytes() {
        assert_eq!(format!("{:?}", Size::KIBIBYTE), "Size(1024)");
    }
}
