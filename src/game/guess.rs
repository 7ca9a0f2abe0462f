//! file: guess.rs
//! author: Jacob Xie
//! date: 2025/12/20 10:13:05 Saturday
//! brief:

use super::Candidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    Higher,
    Lower,
}

impl Guess {
    /// Ties count as correct in both directions.
    pub fn is_correct(self, current: &Candidate, challenger: &Candidate) -> bool {
        match self {
            Guess::Higher => challenger.calories >= current.calories,
            Guess::Lower => challenger.calories <= current.calories,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Guess::Higher => "higher",
            Guess::Lower => "lower",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_calories(calories: u32) -> Candidate {
        Candidate::new(u64::from(calories), "dish", "https://img.test/dish.jpg", calories)
    }

    #[test]
    fn higher_wins_when_challenger_has_more() {
        assert!(Guess::Higher.is_correct(&with_calories(500), &with_calories(600)));
        assert!(!Guess::Lower.is_correct(&with_calories(500), &with_calories(600)));
    }

    #[test]
    fn lower_wins_when_challenger_has_less() {
        assert!(Guess::Lower.is_correct(&with_calories(600), &with_calories(500)));
        assert!(!Guess::Higher.is_correct(&with_calories(600), &with_calories(500)));
    }

    #[test]
    fn tie_accepts_both_directions() {
        let (a, b) = (with_calories(500), with_calories(500));
        assert!(Guess::Higher.is_correct(&a, &b));
        assert!(Guess::Lower.is_correct(&a, &b));
    }
}
