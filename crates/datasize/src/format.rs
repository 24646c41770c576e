//! Canonical string form and unit-aligned rounding.

use crate::{Size, Unit};
use std::fmt;

/// Tiers in the order the formatter checks them. Within a tier, an exact
/// multiple of the decimal unit wins over the binary unit.
const TIERS: [(Unit, Unit); 5] = [
    (Unit::Petabyte, Unit::Pebibyte),
    (Unit::Terabyte, Unit::Tebibyte),
    (Unit::Gigabyte, Unit::Gibibyte),
    (Unit::Megabyte, Unit::Mebibyte),
    (Unit::Kilobyte, Unit::Kibibyte),
];

impl Size {
    /// Unit the canonical string is expressed in.
    fn display_unit(self) -> Unit {
        if self == Self::ZERO {
            return Unit::Byte;
        }
        for (decimal, binary) in TIERS {
            if self.bytes() % decimal.size().bytes() == 0 {
                return decimal;
            }
            if self >= binary.size() {
                return binary;
            }
        }
        Unit::Byte
    }

    /// Truncate to a whole multiple of the largest unit not exceeding this
    /// value. Values under one kilobyte are returned unchanged.
    ///
    /// ```
    /// use datasize::Size;
    ///
    /// let size: Size = "1.013MB".parse().unwrap();
    /// assert_eq!(size.floor(), Size::MEGABYTE);
    /// ```
    pub fn floor(self) -> Self {
        match self.largest_unit() {
            Some(unit) => {
                let unit = unit.size().bytes();
                Self::new(self.bytes() / unit * unit)
            }
            None => self,
        }
    }

    /// Round to the nearest whole multiple of the largest unit not exceeding
    /// this value, ties away from zero. Values under one kilobyte are returned
    /// unchanged.
    ///
    /// ```
    /// use datasize::Size;
    ///
    /// let size: Size = "2.51GiB".parse().unwrap();
    /// assert_eq!(size.round(), 3 * Size::GIBIBYTE);
    /// ```
    pub fn round(self) -> Self {
        match self.largest_unit() {
            Some(unit) => {
                let count = self.in_unit(unit).round() as u64;
                Self::new(count.saturating_mul(unit.size().bytes()))
            }
            None => self,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.display_unit();
        if unit == Unit::Byte {
            return write!(f, "{}B", self.bytes());
        }

        let magnitude = self.in_unit(unit);
        if magnitude.floor() == magnitude {
            write!(f, "{}{}", magnitude as u64, unit.suffix())
        } else {
            write!(f, "{magnitude:.2}{}", unit.suffix())
        }
    }
}
