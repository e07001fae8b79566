use chrono::NaiveDate;
use models::domains::matches::{self, SetScore, Tiebreak};
use models::domains::sea_orm_active_enums::{MatchStatus, MatchType};
use models::domains::users;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SideKey {
    A,
    B,
}

impl SideKey {
    pub const fn opponent(self) -> Self {
        match self {
            SideKey::A => SideKey::B,
            SideKey::B => SideKey::A,
        }
    }
}

/// One competing party: a single player, or a player and partner in doubles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Side {
    pub first: String,
    pub partner: Option<String>,
}

impl Side {
    pub fn single(first: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            partner: None,
        }
    }

    pub fn pair(first: impl Into<String>, partner: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            partner: Some(partner.into()),
        }
    }

    pub fn members(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.first.as_str()).chain(self.partner.as_deref())
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.members().any(|id| id == user_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(SideKey),
    /// Equal totals, including a match without sets.
    Undecided,
}

/// Read-only view of a match used by the statistics code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub id: String,
    pub match_date: NaiveDate,
    pub match_type: MatchType,
    pub side_a: Side,
    pub side_b: Side,
    pub sets: Vec<SetScore>,
    pub status: MatchStatus,
}

impl MatchRecord {
    pub fn side(&self, key: SideKey) -> &Side {
        match key {
            SideKey::A => &self.side_a,
            SideKey::B => &self.side_b,
        }
    }

    /// Side the user plays on, checked against all four slots.
    pub fn side_of(&self, user_id: &str) -> Option<SideKey> {
        if self.side_a.contains(user_id) {
            Some(SideKey::A)
        } else if self.side_b.contains(user_id) {
            Some(SideKey::B)
        } else {
            None
        }
    }

    pub fn participants(&self) -> impl Iterator<Item = &str> {
        self.side_a.members().chain(self.side_b.members())
    }

    pub fn has_duplicate_participant(&self) -> bool {
        let ids: Vec<&str> = self.participants().collect();
        ids.iter()
            .enumerate()
            .any(|(i, id)| ids[i + 1..].contains(id))
    }

    /// Sum of the side's score over every set.
    pub fn points(&self, key: SideKey) -> i64 {
        self.sets
            .iter()
            .map(|set| i64::from(set_score(set, key)))
            .sum()
    }

    /// The side with the larger summed set score wins. This is a points
    /// comparison, not a count of sets won.
    pub fn outcome(&self) -> Outcome {
        let a = self.points(SideKey::A);
        let b = self.points(SideKey::B);
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => Outcome::Winner(SideKey::A),
            std::cmp::Ordering::Less => Outcome::Winner(SideKey::B),
            std::cmp::Ordering::Equal => Outcome::Undecided,
        }
    }

    /// Sets rewritten so that `player1_score` belongs to `key`.
    pub fn sets_from(&self, key: SideKey) -> Vec<SetScore> {
        match key {
            SideKey::A => self.sets.clone(),
            SideKey::B => self.sets.iter().map(swap_set).collect(),
        }
    }
}

pub fn set_score(set: &SetScore, key: SideKey) -> i32 {
    match key {
        SideKey::A => set.player1_score,
        SideKey::B => set.player2_score,
    }
}

fn swap_set(set: &SetScore) -> SetScore {
    SetScore {
        player1_score: set.player2_score,
        player2_score: set.player1_score,
        tiebreak: set.tiebreak.map(|tb| Tiebreak {
            player1_score: tb.player2_score,
            player2_score: tb.player1_score,
        }),
    }
}

impl From<matches::Model> for MatchRecord {
    fn from(m: matches::Model) -> Self {
        Self {
            id: m.id,
            match_date: m.match_date,
            match_type: m.match_type,
            side_a: Side {
                first: m.player1_id,
                partner: m.teammate_id,
            },
            side_b: Side {
                first: m.player2_id,
                partner: m.opponent2_id,
            },
            sets: m.sets.0,
            status: m.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    pub display_name: String,
}

impl UserRecord {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

impl From<users::Model> for UserRecord {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            display_name: user.name,
        }
    }
}
