use crate::Size;
use std::fmt;

/// A named magnitude of storage.
///
/// Decimal units are powers of 1000 bytes, binary units are powers of 1024.
/// Both sequences share [`Unit::Byte`] as their base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Byte,
    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
    Petabyte,
    Kibibyte,
    Mebibyte,
    Gibibyte,
    Tebibyte,
    Pebibyte,
}

impl Unit {
    /// Every unit, byte first, then decimal, then binary.
    pub const ALL: [Self; 11] = [
        Self::Byte,
        Self::Kilobyte,
        Self::Megabyte,
        Self::Gigabyte,
        Self::Terabyte,
        Self::Petabyte,
        Self::Kibibyte,
        Self::Mebibyte,
        Self::Gibibyte,
        Self::Tebibyte,
        Self::Pebibyte,
    ];

    /// The ten non-byte units, largest first. Each entry is strictly
    /// greater than the next.
    pub const DESCENDING: [Self; 10] = [
        Self::Pebibyte,
        Self::Petabyte,
        Self::Tebibyte,
        Self::Terabyte,
        Self::Gibibyte,
        Self::Gigabyte,
        Self::Mebibyte,
        Self::Megabyte,
        Self::Kibibyte,
        Self::Kilobyte,
    ];

    /// The byte size of one of this unit.
    pub const fn size(self) -> Size {
        match self {
            Self::Byte => Size::BYTE,
            Self::Kilobyte => Size::KILOBYTE,
            Self::Megabyte => Size::MEGABYTE,
            Self::Gigabyte => Size::GIGABYTE,
            Self::Terabyte => Size::TERABYTE,
            Self::Petabyte => Size::PETABYTE,
            Self::Kibibyte => Size::KIBIBYTE,
            Self::Mebibyte => Size::MEBIBYTE,
            Self::Gibibyte => Size::GIBIBYTE,
            Self::Tebibyte => Size::TEBIBYTE,
            Self::Pebibyte => Size::PEBIBYTE,
        }
    }

    /// Suffix used by the canonical string form, e.g. `kB` or `MiB`.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Byte => "B",
            Self::Kilobyte => "kB",
            Self::Megabyte => "MB",
            Self::Gigabyte => "GB",
            Self::Terabyte => "TB",
            Self::Petabyte => "PB",
            Self::Kibibyte => "KiB",
            Self::Mebibyte => "MiB",
            Self::Gibibyte => "GiB",
            Self::Tebibyte => "TiB",
            Self::Pebibyte => "PiB",
        }
    }

    /// Look up a unit by suffix, case-insensitively.
    ///
    /// ```
    /// use datasize::Unit;
    ///
    /// assert_eq!(Unit::from_suffix("GiB"), Some(Unit::Gibibyte));
    /// assert_eq!(Unit::from_suffix("kb"), Some(Unit::Kilobyte));
    /// assert_eq!(Unit::from_suffix("xb"), None);
    /// ```
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.suffix().eq_ignore_ascii_case(suffix))
    }

    /// Whether this is a power-of-1024 unit.
    pub const fn is_binary(self) -> bool {
        matches!(
            self,
            Self::Kibibyte | Self::Mebibyte | Self::Gibibyte | Self::Tebibyte | Self::Pebibyte
        )
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descending_is_strictly_decreasing() {
        for pair in Unit::DESCENDING.windows(2) {
            assert!(
                pair[0].size() > pair[1].size(),
                "{} should be larger than {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn descending_excludes_byte() {
        assert!(!Unit::DESCENDING.contains(&Unit::Byte));
        assert_eq!(Unit::DESCENDING.len() + 1, Unit::ALL.len());
    }

    #[test]
    fn suffix_lookup_round_trips() {
        for unit in Unit::ALL {
            assert_eq!(Unit::from_suffix(unit.suffix()), Some(unit));
            assert_eq!(
                Unit::from_suffix(&unit.suffix().to_lowercase()),
                Some(unit)
            );
        }
    }

    #[test]
    fn suffix_lookup_rejects_unknown() {
        assert_eq!(Unit::from_suffix(""), None);
        assert_eq!(Unit::from_suffix("xb"), None);
        assert_eq!(Unit::from_suffix("bytes"), None);
        assert_eq!(Unit::from_suffix("eib"), None);
    }

    #[test]
    fn binary_units_are_powers_of_1024() {
        let binary: Vec<_> = Unit::ALL.into_iter().filter(|u| u.is_binary()).collect();
        assert_eq!(binary.len(), 5);
        for (exp, unit) in (1u32..).zip(binary) {
            assert_eq!(unit.size().bytes(), 1024u64.pow(exp));
        }
    }
}
