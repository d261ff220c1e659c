mod enums;
mod player;
mod team;

pub use enums::{HotZoneLevel, Position, RatingId, VitalId};
pub use player::Player;
pub use team::Team;
