use crate::config::ConfigError;
use rand::Rng;

/// A named, iconified prize. Constant data; selected, never created, per grab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prize {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const TEDDY_BEAR: Prize = Prize {
    name: "Teddy Bear",
    icon: "🧸",
};
pub const LOLLIPOP: Prize = Prize {
    name: "Lollipop",
    icon: "🍭",
};
pub const DUCKLING: Prize = Prize {
    name: "Duckling",
    icon: "🦆",
};
pub const MYSTERY_BOX: Prize = Prize {
    name: "Mystery Box",
    icon: "🎁",
};
pub const MISSED: Prize = Prize {
    name: "Missed!",
    icon: "💦",
};

pub const PRIZE_CATALOG: [Prize; 3] = [TEDDY_BEAR, LOLLIPOP, DUCKLING];

/// Result of one grab resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Miss,
    Prize(Prize),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Prize(_))
    }

    /// What the player sees for this outcome; a miss has its own card.
    pub fn display(&self) -> Prize {
        match self {
            Outcome::Miss => MISSED,
            Outcome::Prize(p) => *p,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutcomeEntry {
    /// Exclusive cumulative upper bound of this entry's slice of [0, 1).
    pub upper: f64,
    pub outcome: Outcome,
}

/// Maps a uniform draw in [0, 1) to an outcome by cumulative bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct OutcomeTable {
    entries: Vec<OutcomeEntry>,
}

impl OutcomeTable {
    pub fn new(entries: Vec<OutcomeEntry>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyOutcomeTable);
        }
        let mut prev = 0.0;
        for (index, e) in entries.iter().enumerate() {
            if !(e.upper > prev && e.upper <= 1.0) {
                return Err(ConfigError::OutcomeBoundsNotIncreasing { index });
            }
            prev = e.upper;
        }
        if prev != 1.0 {
            return Err(ConfigError::OutcomeTableIncomplete { last: prev });
        }
        Ok(Self { entries })
    }

    /// 40% miss, 20% for each of the three catalog prizes.
    pub fn prize_catalog() -> Self {
        use crate::constants::*;
        Self {
            entries: vec![
                OutcomeEntry {
                    upper: CATALOG_MISS_BOUND,
                    outcome: Outcome::Miss,
                },
                OutcomeEntry {
                    upper: CATALOG_PRIZE_A_BOUND,
                    outcome: Outcome::Prize(PRIZE_CATALOG[0]),
                },
                OutcomeEntry {
                    upper: CATALOG_PRIZE_B_BOUND,
                    outcome: Outcome::Prize(PRIZE_CATALOG[1]),
                },
                OutcomeEntry {
                    upper: 1.0,
                    outcome: Outcome::Prize(PRIZE_CATALOG[2]),
                },
            ],
        }
    }

    pub fn coin_flip(prize: Prize) -> Self {
        Self {
            entries: vec![
                OutcomeEntry {
                    upper: crate::constants::COIN_FLIP_BOUND,
                    outcome: Outcome::Miss,
                },
                OutcomeEntry {
                    upper: 1.0,
                    outcome: Outcome::Prize(prize),
                },
            ],
        }
    }

    pub fn entries(&self) -> &[OutcomeEntry] {
        &self.entries
    }

    /// Pure mapping of a draw `r` to an outcome. Values outside [0, 1) clamp
    /// to the first or last entry.
    pub fn resolve(&self, r: f64) -> Outcome {
        self.entries
            .iter()
            .find(|e| r < e.upper)
            .or_else(|| self.entries.last())
            .map(|e| e.outcome)
            .unwrap_or(Outcome::Miss)
    }

    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Outcome {
        self.resolve(rng.gen::<f64>())
    }
}
