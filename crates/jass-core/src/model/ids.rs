use core::fmt;
use serde::{Deserialize, Serialize};

/// One of the four seats, in fixed playing order. Seats of equal parity
/// form a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PlayerId {
    Player1 = 0,
    Player2 = 1,
    Player3 = 2,
    Player4 = 3,
}

impl PlayerId {
    pub const ALL: [PlayerId; 4] = [
        PlayerId::Player1,
        PlayerId::Player2,
        PlayerId::Player3,
        PlayerId::Player4,
    ];
    pub const COUNT: usize = 4;

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PlayerId::Player1),
            1 => Some(PlayerId::Player2),
            2 => Some(PlayerId::Player3),
            3 => Some(PlayerId::Player4),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn team(self) -> TeamId {
        if self.index() % 2 == 0 { TeamId::Team1 } else { TeamId::Team2 }
    }

    /// The seat playing after this one.
    pub const fn next(self) -> PlayerId {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player3,
            PlayerId::Player3 => PlayerId::Player4,
            PlayerId::Player4 => PlayerId::Player1,
        }
    }

    /// The partner seat, two positions away.
    pub const fn partner(self) -> PlayerId {
        self.next().next()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.index() + 1)
    }
}

/// One of the two teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TeamId {
    Team1 = 0,
    Team2 = 1,
}

impl TeamId {
    pub const ALL: [TeamId; 2] = [TeamId::Team1, TeamId::Team2];
    pub const COUNT: usize = 2;

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(TeamId::Team1),
            1 => Some(TeamId::Team2),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn other(self) -> TeamId {
        match self {
            TeamId::Team1 => TeamId::Team2,
            TeamId::Team2 => TeamId::Team1,
        }
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "team {}", self.index() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::{PlayerId, TeamId};

    #[test]
    fn teams_split_by_seat_parity() {
        assert_eq!(PlayerId::Player1.team(), TeamId::Team1);
        assert_eq!(PlayerId::Player2.team(), TeamId::Team2);
        assert_eq!(PlayerId::Player3.team(), TeamId::Team1);
        assert_eq!(PlayerId::Player4.team(), TeamId::Team2);
    }

    #[test]
    fn next_wraps_around() {
        assert_eq!(PlayerId::Player4.next(), PlayerId::Player1);
    }

    #[test]
    fn partner_shares_the_team() {
        for seat in PlayerId::ALL {
            assert_eq!(seat.partner().team(), seat.team());
            assert_ne!(seat.partner(), seat);
        }
    }

    #[test]
    fn other_team_is_involutive() {
        assert_eq!(TeamId::Team1.other(), TeamId::Team2);
        assert_eq!(TeamId::Team2.other().other(), TeamId::Team2);
    }
}
