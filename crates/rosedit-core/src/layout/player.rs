//! Player record layout for the 2K14 roster format
//!
//! One player record is a fixed 1023-byte region mixing aligned bytes,
//! little-endian 16/32-bit integers, and bit-packed runs at arbitrary bit
//! offsets. All offsets below are relative to the record base.
//!
//! # Record map
//!
//! ```text
//! +0    vitals (bit-packed and aligned, scattered through the record)
//! +14,3 signature skills  — 5 slots x 6 bits
//! +28   cyberface id      — LE16, 0 marks an empty slot
//! +129,7 gear             — 48 mixed-width bit fields
//! +144,3 tendencies       — 58 x 8 bits (low 7 = value, high bit = flag)
//! +202,3 hot zones        — 14 x 2 bits, directly after the tendencies
//! +178  dunk packages     — 15 one-byte animation slots
//! +193  shot animations   — one-byte animation slots
//! +409  ratings           — 43 raw rating bytes
//! ```

use super::{FieldDescriptor, ValueCodec, packed_entry};
use crate::game::{RatingId, VitalId};

/// Binary size of one player record.
pub const RECORD_SIZE: usize = 1023;

/// Cyberface id: unsigned 16-bit little-endian. Zero marks an empty slot.
pub const CFID_OFFSET: usize = 28;

/// Number of rating fields.
pub const RATING_COUNT: usize = 43;

/// Byte offset of each rating, indexed by `RatingId`.
///
/// The ordering follows the skills section of the player data sheet; the
/// bytes themselves sit in a mostly-contiguous block at 409..=451 with a few
/// fields swapped out of sequence.
pub const RATING_OFFSETS: [usize; RATING_COUNT] = [
    409, 410, 411, 424, 423, 412, 425, 413, 414, 415, //
    416, 417, 418, 419, 420, 421, 422, 426, 428, 429, //
    430, 431, 432, 433, 434, 435, 436, 437, 438, 439, //
    440, 441, 442, 443, 444, 427, 445, 446, 447, 448, //
    449, 450, 451,
];

/// Descriptor for one rating field.
pub fn rating_field(id: RatingId) -> FieldDescriptor {
    FieldDescriptor::rating(RATING_OFFSETS[id as usize])
}

/// Tendencies: 58 sequential 8-bit fields from byte 144, bit 3.
pub mod tendencies {
    pub const COUNT: usize = 58;
    pub const BASE_BYTE: usize = 144;
    pub const BASE_BIT: u8 = 3;
    pub const BASE_BITS: usize = BASE_BYTE * 8 + BASE_BIT as usize;
    pub const STRIDE_BITS: usize = 8;
}

/// Descriptor for tendency `index`, or `None` past the 58-entry block.
pub fn tendency_field(index: usize) -> Option<FieldDescriptor> {
    if index >= tendencies::COUNT {
        return None;
    }
    Some(FieldDescriptor {
        placement: packed_entry(tendencies::BASE_BITS, tendencies::STRIDE_BITS, 8, index),
        codec: ValueCodec::TendencyMasked,
    })
}

/// Hot zones: 14 two-bit fields directly after the tendency block.
/// Values: 0 = cold, 1 = neutral, 2 = hot, 3 = burned.
pub mod hot_zones {
    use super::tendencies;

    pub const COUNT: usize = 14;
    pub const BASE_BITS: usize =
        tendencies::BASE_BITS + tendencies::COUNT * tendencies::STRIDE_BITS;
    pub const STRIDE_BITS: usize = 2;
}

/// Descriptor for hot zone `index`, or `None` past the 14-entry block.
pub fn hot_zone_field(index: usize) -> Option<FieldDescriptor> {
    if index >= hot_zones::COUNT {
        return None;
    }
    Some(FieldDescriptor {
        placement: packed_entry(hot_zones::BASE_BITS, hot_zones::STRIDE_BITS, 2, index),
        codec: ValueCodec::Identity,
    })
}

/// Signature skills: 5 six-bit slots from byte 14, bit 3.
pub mod sig_skills {
    pub const COUNT: usize = 5;
    pub const BASE_BYTE: usize = 14;
    pub const BASE_BIT: u8 = 3;
    pub const BASE_BITS: usize = BASE_BYTE * 8 + BASE_BIT as usize;
    pub const STRIDE_BITS: usize = 6;
}

/// Descriptor for signature skill slot `index`, or `None` past slot 4.
pub fn sig_skill_field(index: usize) -> Option<FieldDescriptor> {
    if index >= sig_skills::COUNT {
        return None;
    }
    Some(FieldDescriptor {
        placement: packed_entry(sig_skills::BASE_BITS, sig_skills::STRIDE_BITS, 6, index),
        codec: ValueCodec::Identity,
    })
}

/// Gear: 48 mixed-width bit fields from byte 129, bit 7.
///
/// Widths 1..=4 cover toggles and enum picks; the four 32-bit entries hold
/// packed color words.
pub mod gear {
    pub const COUNT: usize = 48;
    pub const BASE_BYTE: usize = 129;
    pub const BASE_BIT: u8 = 7;
    pub const BASE_BITS: usize = BASE_BYTE * 8 + BASE_BIT as usize;

    /// `(bit offset from the gear base, width)` for each gear slot.
    pub const DEFS: [(usize, u8); COUNT] = [
        (0, 1),
        (1, 3),
        (4, 2),
        (6, 2),
        (8, 3),
        (11, 2),
        (13, 3),
        (16, 2),
        (18, 4),
        (22, 2),
        (24, 2),
        (26, 2),
        (28, 2),
        (30, 3),
        (33, 2),
        (35, 3),
        (38, 2),
        (40, 4),
        (44, 2),
        (46, 2),
        (48, 2),
        (50, 2),
        (52, 1),
        (53, 2),
        (55, 3),
        (58, 2),
        (60, 2),
        (62, 2),
        (64, 2),
        (66, 2),
        (68, 3),
        (71, 2),
        (73, 2),
        (75, 2),
        (77, 2),
        (79, 2),
        (81, 3),
        (84, 4),
        (88, 4),
        (92, 32),
        (124, 32),
        (156, 32),
        (188, 32),
        (220, 2),
        (222, 2),
        (224, 2),
        (226, 2),
        (228, 2),
    ];
}

/// Descriptor for gear slot `index`, or `None` past the 48-entry table.
pub fn gear_field(index: usize) -> Option<FieldDescriptor> {
    let (bit_offset, width) = *gear::DEFS.get(index)?;
    let total = gear::BASE_BITS + bit_offset;
    Some(FieldDescriptor::bits(total / 8, (total % 8) as u8, width))
}

/// Signature animations: 40 slots split across three byte runs plus one
/// bit-packed layup selector.
pub mod animations {
    pub const COUNT: usize = 40;
    /// Shots, momentum, post and iso drives (slots 0..=18), and pregame
    /// intros (slots 35..=39) continue the same run.
    pub const SHOTS_BASE: usize = 193;
    /// Dunk packages (slots 20..=34).
    pub const DUNKS_BASE: usize = 178;
    /// Pregame intros follow the 19-byte shots run.
    pub const INTROS_BASE: usize = SHOTS_BASE + 19;
}

/// Descriptor for animation slot `index`, or `None` past the 40-slot table.
pub fn animation_field(index: usize) -> Option<FieldDescriptor> {
    match index {
        0..=18 => Some(FieldDescriptor::byte(animations::SHOTS_BASE + index)),
        // Layup package is a 4-bit pick, not a full byte.
        19 => Some(FieldDescriptor::bits(274, 2, 4)),
        20..=34 => Some(FieldDescriptor::byte(animations::DUNKS_BASE + index - 20)),
        35..=39 => Some(FieldDescriptor::byte(animations::INTROS_BASE + index - 35)),
        _ => None,
    }
}

/// Number of vital fields.
pub const VITAL_COUNT: usize = 53;

/// Placement of every vital, indexed by `VitalId`.
pub const VITAL_FIELDS: [FieldDescriptor; VITAL_COUNT] = [
    FieldDescriptor::byte(33),                // Position
    FieldDescriptor::byte(34),                // Height
    FieldDescriptor::byte(35),                // Weight
    FieldDescriptor::byte(37),                // BirthDay
    FieldDescriptor::byte(38),                // BirthMonth
    FieldDescriptor::u16_le(39),              // BirthYear
    FieldDescriptor::byte(41),                // Hand
    FieldDescriptor::byte(42),                // DunkHand
    FieldDescriptor::byte(43),                // YearsPro
    FieldDescriptor::bits(13, 4, 8),          // JerseyNumber
    FieldDescriptor::bits(1, 0, 8),           // TeamId1
    FieldDescriptor::bits(267, 0, 8),         // TeamId2
    FieldDescriptor::bits(222, 0, 32),        // ContractYear1
    FieldDescriptor::bits(226, 0, 32),        // ContractYear2
    FieldDescriptor::bits(230, 0, 32),        // ContractYear3
    FieldDescriptor::bits(234, 0, 32),        // ContractYear4
    FieldDescriptor::bits(238, 0, 32),        // ContractYear5
    FieldDescriptor::bits(242, 0, 32),        // ContractYear6
    FieldDescriptor::bits(246, 0, 32),        // ContractYear7
    FieldDescriptor::bits(162, 0, 2),         // ContractOption
    FieldDescriptor::bits(185, 5, 1),         // NoTrade
    FieldDescriptor::bits(32, 1, 7),          // InjuryType
    FieldDescriptor::bits(36, 0, 16),         // InjuryDays
    FieldDescriptor::bits(162, 5, 5),         // PlayStyle
    FieldDescriptor::bits(151, 5, 4),         // PlayType1
    FieldDescriptor::bits(152, 1, 4),         // PlayType2
    FieldDescriptor::bits(152, 5, 4),         // PlayType3
    FieldDescriptor::bits(153, 1, 4),         // PlayType4
    FieldDescriptor::bits(134, 3, 2),         // BodyType
    FieldDescriptor::bits(134, 5, 1),         // MuscleTone
    FieldDescriptor::bits(134, 6, 3),         // SkinTone
    FieldDescriptor::bits(135, 1, 6),         // HairType
    FieldDescriptor::bits(135, 7, 4),         // HairColor
    FieldDescriptor::bits(136, 3, 3),         // EyeColor
    FieldDescriptor::bits(136, 6, 4),         // Eyebrow
    FieldDescriptor::bits(138, 0, 3),         // Mustache
    FieldDescriptor::bits(138, 3, 4),         // FacialHairColor
    FieldDescriptor::bits(138, 7, 4),         // Beard
    FieldDescriptor::bits(139, 3, 5),         // Goatee
    FieldDescriptor::byte(44),                // SecondaryPosition
    FieldDescriptor::byte(48),                // DraftYear
    FieldDescriptor::bits(49, 0, 4),          // DraftRound
    FieldDescriptor::bits(49, 4, 6),          // DraftPick
    FieldDescriptor::byte(51),                // DraftTeam
    FieldDescriptor::byte(54),                // Nickname
    FieldDescriptor::bits(96, 0, 1),          // PlayInitiator
    FieldDescriptor::bits(96, 1, 1),          // GoesToThree
    FieldDescriptor::byte(60),                // PeakAgeStart
    FieldDescriptor::byte(61),                // PeakAgeEnd
    FieldDescriptor::byte(267),               // Potential
    FieldDescriptor::byte(58),                // Loyalty
    FieldDescriptor::byte(59),                // FinancialSecurity
    FieldDescriptor::byte(57),                // PlayForWinner
];

/// Descriptor for one vital field.
pub fn vital_field(id: VitalId) -> FieldDescriptor {
    VITAL_FIELDS[id as usize]
}
