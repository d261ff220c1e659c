//! Search constants for table discovery
//!
//! # Search strategy
//!
//! The roster format carries no self-describing header, so both tables are
//! located structurally:
//!
//! 1. The player table is the first offset where a run of records all carry
//!    a plausible cyberface id at record-relative +28. One candidate must
//!    pass the check at [`VALIDATION_DEPTH`] consecutive record strides
//!    before it is accepted, which makes accidental matches in surrounding
//!    data vanishingly unlikely.
//! 2. The team table is pinned by a known roster opening: the first team
//!    after the table head carries the player indices in
//!    [`ROSTER_SIGNATURE`] at record-relative +108. One signature hit fixes
//!    the whole table.

/// Player-table candidates are tried on this byte alignment.
pub const CANDIDATE_STEP: usize = 4;

/// Consecutive records that must pass the cyberface check before a
/// player-table candidate is accepted.
pub const VALIDATION_DEPTH: usize = 10;

/// Highest cyberface id considered plausible. Retail rosters top out well
/// below this; values above it are other data misread as a record.
pub const CFID_MAX: u16 = 15_000;

/// Upper bound on the player population.
pub const MAX_PLAYERS: usize = 1_664;

/// Roster opening (player indices) that identifies the second team record.
pub const ROSTER_SIGNATURE: [u16; 5] = [1, 9, 17, 25, 33];

/// Team-table candidates are tried on this byte alignment (roster entries
/// are 16-bit).
pub const TEAM_SCAN_STEP: usize = 2;

/// Upper bound on the team population.
pub const MAX_TEAMS: usize = 100;
