use serde::{Deserialize, Serialize};
use strum::{Display, FromRepr, IntoStaticStr};

/// Rating field ids, in the order of the skills section of the player data
/// sheet. The numeric value indexes the rating offset table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    IntoStaticStr,
    Display,
)]
#[repr(u8)]
pub enum RatingId {
    Overall = 0,
    ShotLowPost = 1,
    ShotClose = 2,
    ShotMedium = 3,
    ShotThreePoint = 4,
    FreeThrow = 5,
    Dunk = 6,
    StandingDunk = 7,
    Layup = 8,
    StandingLayup = 9,
    SpinLayup = 10,
    EuroLayup = 11,
    HopLayup = 12,
    Runner = 13,
    StepThrough = 14,
    ShootInTraffic = 15,
    PostFadeaway = 16,
    PostHook = 17,
    ShootOffDribble = 18,
    BallHandling = 19,
    OffHandDribble = 20,
    BallSecurity = 21,
    Pass = 22,
    Block = 23,
    Steal = 24,
    Hands = 25,
    OnBallDefense = 26,
    OffensiveRebound = 27,
    DefensiveRebound = 28,
    OffensiveLowPost = 29,
    DefensiveLowPost = 30,
    OffensiveAwareness = 31,
    DefensiveAwareness = 32,
    Consistency = 33,
    Stamina = 34,
    Speed = 35,
    Quickness = 36,
    Strength = 37,
    Vertical = 38,
    Hustle = 39,
    Durability = 40,
    Potential = 41,
    Emotion = 42,
}

impl RatingId {
    pub const COUNT: usize = 43;

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }
}

/// Vital field ids. The numeric value indexes the vital placement table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    IntoStaticStr,
    Display,
)]
#[repr(u8)]
pub enum VitalId {
    Position = 0,
    Height = 1,
    Weight = 2,
    BirthDay = 3,
    BirthMonth = 4,
    BirthYear = 5,
    Hand = 6,
    DunkHand = 7,
    YearsPro = 8,
    JerseyNumber = 9,
    TeamId1 = 10,
    TeamId2 = 11,
    ContractYear1 = 12,
    ContractYear2 = 13,
    ContractYear3 = 14,
    ContractYear4 = 15,
    ContractYear5 = 16,
    ContractYear6 = 17,
    ContractYear7 = 18,
    ContractOption = 19,
    NoTrade = 20,
    InjuryType = 21,
    InjuryDays = 22,
    PlayStyle = 23,
    PlayType1 = 24,
    PlayType2 = 25,
    PlayType3 = 26,
    PlayType4 = 27,
    BodyType = 28,
    MuscleTone = 29,
    SkinTone = 30,
    HairType = 31,
    HairColor = 32,
    EyeColor = 33,
    Eyebrow = 34,
    Mustache = 35,
    FacialHairColor = 36,
    Beard = 37,
    Goatee = 38,
    SecondaryPosition = 39,
    DraftYear = 40,
    DraftRound = 41,
    DraftPick = 42,
    DraftTeam = 43,
    Nickname = 44,
    PlayInitiator = 45,
    GoesToThree = 46,
    PeakAgeStart = 47,
    PeakAgeEnd = 48,
    Potential = 49,
    Loyalty = 50,
    FinancialSecurity = 51,
    PlayForWinner = 52,
}

impl VitalId {
    pub const COUNT: usize = 53;

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }
}

/// On-court position, as stored in the position vital.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    IntoStaticStr,
    Display,
)]
#[repr(u8)]
pub enum Position {
    #[strum(serialize = "PG")]
    PointGuard = 0,
    #[strum(serialize = "SG")]
    ShootingGuard = 1,
    #[strum(serialize = "SF")]
    SmallForward = 2,
    #[strum(serialize = "PF")]
    PowerForward = 3,
    #[strum(serialize = "C")]
    Center = 4,
}

impl Position {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

/// Shooting affinity of one floor region, a 2-bit value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromRepr,
    IntoStaticStr,
    Display,
)]
#[repr(u8)]
pub enum HotZoneLevel {
    #[default]
    Cold = 0,
    Neutral = 1,
    Hot = 2,
    Burned = 3,
}

impl HotZoneLevel {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }
}
