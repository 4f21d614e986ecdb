//! Rupiah amounts.
//!
//! Storefront prices are whole IDR values; there is no minor unit, so all
//! arithmetic stays in `u64`.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// An amount in Indonesian rupiah.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rupiah(pub u64);

impl Rupiah {
    pub const ZERO: Rupiah = Rupiah(0);

    pub fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub fn amount(self) -> u64 {
        self.0
    }
}

impl From<u64> for Rupiah {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

/// Arithmetic saturates at `u64::MAX` rather than wrapping or panicking.
impl Add for Rupiah {
    type Output = Rupiah;

    fn add(self, rhs: Rupiah) -> Rupiah {
        Rupiah(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Rupiah {
    fn add_assign(&mut self, rhs: Rupiah) {
        *self = *self + rhs;
    }
}

/// Line total: unit price times quantity.
impl Mul<u32> for Rupiah {
    type Output = Rupiah;

    fn mul(self, quantity: u32) -> Rupiah {
        Rupiah(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl Sum for Rupiah {
    fn sum<I: Iterator<Item = Rupiah>>(iter: I) -> Rupiah {
        iter.fold(Rupiah::ZERO, Add::add)
    }
}

/// Formats as `Rp 695.000`, with `.` as the thousands separator.
impl Display for Rupiah {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        write!(f, "Rp {}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Rupiah(0).to_string(), "Rp 0");
        assert_eq!(Rupiah(999).to_string(), "Rp 999");
        assert_eq!(Rupiah(15000).to_string(), "Rp 15.000");
        assert_eq!(Rupiah(695000).to_string(), "Rp 695.000");
        assert_eq!(Rupiah(1250000).to_string(), "Rp 1.250.000");
    }

    #[test]
    fn test_line_total_and_sum() {
        let lines = [Rupiah(250000) * 2, Rupiah(180000) * 1];
        assert_eq!(lines.into_iter().sum::<Rupiah>(), Rupiah(680000));
    }

    #[test]
    fn test_arithmetic_saturates_at_max() {
        let max = Rupiah(u64::MAX);
        assert_eq!(max + Rupiah(1), max);
        assert_eq!(Rupiah(u64::MAX / 2 + 1) * 2, max);
        assert_eq!(Rupiah(u64::MAX - 1) * 1, Rupiah(u64::MAX - 1));
        assert_eq!([max, max, Rupiah(5)].into_iter().sum::<Rupiah>(), max);

        let mut total = Rupiah(u64::MAX - 10);
        total += Rupiah(20);
        assert_eq!(total, max);
    }
}
