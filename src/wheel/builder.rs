//! Static construction of the full outcome table
//!
//! Populates every canonical outcome family on an American double-zero
//! wheel: straight, split, street, corner, line, dozen, column, the
//! even-money pairs, and the combined 0/00/1/2/3 five bet. Deterministic
//! data loading, no algorithmic content.
//!
//! Layout reference: the betting grid is 12 rows of 3 columns, numbered
//! `3*row + column` with `row` in 0..=11 and `column` in 1..=3.

use std::sync::Arc;

use super::{Outcome, Payout, Wheel, DOUBLE_ZERO_BIN};

/// The 18 red numbers on a standard layout
const RED_NUMBERS: [usize; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// Build a fully populated wheel.
///
/// Guarantees every name used by the betting strategies ("Black", "Red")
/// is registered and reachable through [`Wheel::outcome`].
pub fn build_wheel() -> Wheel {
    let mut wheel = Wheel::new();
    add_straight_bets(&mut wheel);
    add_split_bets(&mut wheel);
    add_street_bets(&mut wheel);
    add_corner_bets(&mut wheel);
    add_line_bets(&mut wheel);
    add_dozen_bets(&mut wheel);
    add_column_bets(&mut wheel);
    add_even_money_bets(&mut wheel);
    add_five_bets(&mut wheel);
    wheel
}

/// One 35:1 straight outcome per bin, including 0 and 00
fn add_straight_bets(wheel: &mut Wheel) {
    for number in 0..=36 {
        let outcome = Arc::new(Outcome::new(format!("Straight {}", number), Payout::new(35, 1)));
        wheel.add_outcome(number, outcome);
    }
    wheel.add_outcome(
        DOUBLE_ZERO_BIN,
        Arc::new(Outcome::new("Straight 00", Payout::new(35, 1))),
    );
}

/// 17:1 splits: left-right pairs within a row, up-down pairs across rows
fn add_split_bets(wheel: &mut Wheel) {
    for row in 0..12 {
        for column in 1..3 {
            let first = 3 * row + column;
            let outcome = Arc::new(Outcome::new(
                format!("Split {}, {}", first, first + 1),
                Payout::new(17, 1),
            ));
            wheel.add_outcome(first, Arc::clone(&outcome));
            wheel.add_outcome(first + 1, outcome);
        }
    }

    for first in 1..=33 {
        let outcome = Arc::new(Outcome::new(
            format!("Split {}, {}", first, first + 3),
            Payout::new(17, 1),
        ));
        wheel.add_outcome(first, Arc::clone(&outcome));
        wheel.add_outcome(first + 3, outcome);
    }
}

/// 11:1 streets, one per row of three numbers
fn add_street_bets(wheel: &mut Wheel) {
    for row in 0..12 {
        let first = 3 * row + 1;
        let outcome = Arc::new(Outcome::new(
            format!("Street {}, {}, {}", first, first + 1, first + 2),
            Payout::new(11, 1),
        ));
        for number in first..first + 3 {
            wheel.add_outcome(number, Arc::clone(&outcome));
        }
    }
}

/// 8:1 corners spanning two rows and two columns
fn add_corner_bets(wheel: &mut Wheel) {
    for row in 0..11 {
        for column in 1..3 {
            let first = 3 * row + column;
            let outcome = Arc::new(Outcome::new(
                format!(
                    "Corner {}, {}, {}, {}",
                    first,
                    first + 1,
                    first + 3,
                    first + 4
                ),
                Payout::new(8, 1),
            ));
            for number in [first, first + 1, first + 3, first + 4] {
                wheel.add_outcome(number, Arc::clone(&outcome));
            }
        }
    }
}

/// 5:1 lines spanning two adjacent rows
fn add_line_bets(wheel: &mut Wheel) {
    for row in 0..11 {
        let first = 3 * row + 1;
        let outcome = Arc::new(Outcome::new(
            format!(
                "Line {}, {}, {}, {}, {}, {}",
                first,
                first + 1,
                first + 2,
                first + 3,
                first + 4,
                first + 5
            ),
            Payout::new(5, 1),
        ));
        for number in first..first + 6 {
            wheel.add_outcome(number, Arc::clone(&outcome));
        }
    }
}

/// 2:1 dozens: First 12, Second 12, Third 12
fn add_dozen_bets(wheel: &mut Wheel) {
    for (dozen, label) in ["First", "Second", "Third"].iter().enumerate() {
        let outcome = Arc::new(Outcome::new(format!("{} 12", label), Payout::new(2, 1)));
        for offset in 0..12 {
            wheel.add_outcome(12 * dozen + offset + 1, Arc::clone(&outcome));
        }
    }
}

/// 2:1 columns
fn add_column_bets(wheel: &mut Wheel) {
    for column in 0..3 {
        let outcome = Arc::new(Outcome::new(
            format!("Column {}", column + 1),
            Payout::new(2, 1),
        ));
        for row in 0..12 {
            wheel.add_outcome(3 * row + column + 1, Arc::clone(&outcome));
        }
    }
}

/// Even-money pairs: Red/Black, Even/Odd, High/Low
fn add_even_money_bets(wheel: &mut Wheel) {
    let red = Arc::new(Outcome::new("Red", Payout::EVEN));
    let black = Arc::new(Outcome::new("Black", Payout::EVEN));
    let even = Arc::new(Outcome::new("Even", Payout::EVEN));
    let odd = Arc::new(Outcome::new("Odd", Payout::EVEN));
    let high = Arc::new(Outcome::new("High", Payout::EVEN));
    let low = Arc::new(Outcome::new("Low", Payout::EVEN));

    for number in 1..=36 {
        if number < 19 {
            wheel.add_outcome(number, Arc::clone(&low));
        } else {
            wheel.add_outcome(number, Arc::clone(&high));
        }
        if number % 2 == 0 {
            wheel.add_outcome(number, Arc::clone(&even));
        } else {
            wheel.add_outcome(number, Arc::clone(&odd));
        }
        if RED_NUMBERS.contains(&number) {
            wheel.add_outcome(number, Arc::clone(&red));
        } else {
            wheel.add_outcome(number, Arc::clone(&black));
        }
    }
}

/// The 6:1 five bet covering 0, 00, 1, 2 and 3
fn add_five_bets(wheel: &mut Wheel) {
    let outcome = Arc::new(Outcome::new("Five 00-0-1-2-3", Payout::new(6, 1)));
    for bin in [0, DOUBLE_ZERO_BIN, 1, 2, 3] {
        wheel.add_outcome(bin, Arc::clone(&outcome));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_resolve() {
        let wheel = build_wheel();
        for name in [
            "Red",
            "Black",
            "Even",
            "Odd",
            "High",
            "Low",
            "Straight 0",
            "Straight 00",
            "Straight 36",
            "First 12",
            "Column 3",
            "Five 00-0-1-2-3",
            "Split 35, 36",
            "Street 34, 35, 36",
        ] {
            assert!(wheel.outcome(name).is_ok(), "missing outcome {}", name);
        }
        assert!(wheel.outcome("Straight 38").is_err());
    }

    #[test]
    fn test_registered_outcome_count() {
        // 38 straights + 24 row splits + 33 column splits + 12 streets
        // + 22 corners + 11 lines + 3 dozens + 3 columns + 6 even-money + 1 five
        let wheel = build_wheel();
        assert_eq!(wheel.outcomes().count(), 153);
    }

    #[test]
    fn test_zero_bins_hold_only_straight_and_five() {
        let wheel = build_wheel();
        for (bin, straight) in [(0, "Straight 0"), (DOUBLE_ZERO_BIN, "Straight 00")] {
            let bin = wheel.bin(bin);
            assert_eq!(bin.len(), 2);
            assert!(bin.contains(&wheel.outcome(straight).unwrap()));
            assert!(bin.contains(&wheel.outcome("Five 00-0-1-2-3").unwrap()));
        }
    }

    #[test]
    fn test_bin_two_membership() {
        let wheel = build_wheel();
        let bin = wheel.bin(2);
        for name in [
            "Straight 2",
            "Split 1, 2",
            "Split 2, 3",
            "Split 2, 5",
            "Street 1, 2, 3",
            "Corner 1, 2, 4, 5",
            "Corner 2, 3, 5, 6",
            "Line 1, 2, 3, 4, 5, 6",
            "First 12",
            "Column 2",
            "Even",
            "Black",
            "Five 00-0-1-2-3",
        ] {
            assert!(
                bin.contains(&wheel.outcome(name).unwrap()),
                "bin 2 missing {}",
                name
            );
        }
        assert_eq!(bin.len(), 13);
        assert!(!bin.contains(&wheel.outcome("Red").unwrap()));
    }

    #[test]
    fn test_even_money_odds() {
        let wheel = build_wheel();
        assert_eq!(wheel.outcome("Black").unwrap().odds(), Payout::EVEN);
        assert_eq!(wheel.outcome("Red").unwrap().odds(), Payout::EVEN);
        assert_eq!(
            wheel.outcome("Straight 17").unwrap().odds(),
            Payout::new(35, 1)
        );
    }

    #[test]
    fn test_red_black_partition() {
        let wheel = build_wheel();
        let red = wheel.outcome("Red").unwrap();
        let black = wheel.outcome("Black").unwrap();
        let mut reds = 0;
        let mut blacks = 0;
        for number in 1..=36 {
            let bin = wheel.bin(number);
            assert!(bin.contains(&red) != bin.contains(&black));
            if bin.contains(&red) {
                reds += 1;
            } else {
                blacks += 1;
            }
        }
        assert_eq!(reds, 18);
        assert_eq!(blacks, 18);
    }
}
