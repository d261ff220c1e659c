use serde::{Deserialize, Serialize};

use crate::layout::{player, team};

/// Where the player and team tables sit inside the buffer, as determined by
/// one discovery pass. A count of zero means the corresponding table was not
/// found; record access then always reports out-of-range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableAnchors {
    pub player_table_offset: usize,
    pub player_count: usize,
    pub player_record_size: usize,
    pub team_table_offset: usize,
    pub team_count: usize,
    pub team_record_size: usize,
}

impl TableAnchors {
    /// Anchors with the format's record sizes and nothing located yet.
    pub fn unlocated() -> Self {
        Self {
            player_record_size: player::RECORD_SIZE,
            team_record_size: team::RECORD_SIZE,
            ..Default::default()
        }
    }

    pub fn has_players(&self) -> bool {
        self.player_count > 0
    }

    pub fn has_teams(&self) -> bool {
        self.team_count > 0
    }

    /// Base offset of player record `index`, or `None` past the population.
    pub fn player_record_offset(&self, index: usize) -> Option<usize> {
        (index < self.player_count)
            .then(|| self.player_table_offset + index * self.player_record_size)
    }

    /// Base offset of team record `index`, or `None` past the population.
    pub fn team_record_offset(&self, index: usize) -> Option<usize> {
        (index < self.team_count).then(|| self.team_table_offset + index * self.team_record_size)
    }
}
