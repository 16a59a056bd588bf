// Expiry label ranking used as the secondary sort key for groups

/// Fixed ranking of the primary expiry labels. Lower rank means more
/// urgent. Exact match only - labels reach us already stripped of
/// decorations, so no fuzzy matching is wanted here.
const EXPIRY_PRIORITY: &[(&str, u32)] = &[
    ("至急", 1),
    ("でき次第", 2),
    ("朝一", 3),
    ("朝２", 4),
    ("６時", 5),
    ("７時", 6),
    ("８時", 7),
    ("９時", 8),
    ("１０時", 9),
    ("１１時", 10),
    ("１２時", 11),
    ("午前中", 12),
    ("昼一", 13),
    ("午後１時", 14),
    ("昼２", 15),
    ("午後２時", 16),
    ("午後３時", 17),
    ("午後４時", 18),
    ("午後５時", 19),
    ("午後", 20),
    ("今日中", 21),
    ("午後６時", 22),
    ("午後７時", 23),
    ("午後８時", 24),
    ("連絡待ち", 25),
    ("その他", 26),
    ("未入力", 27),
];

/// Rank assigned to a missing or empty label, same as 未入力.
const UNSET_RANK: u32 = 27;

/// Normalize a label before lookup: leading/trailing whitespace only.
fn normalize(label: &str) -> &str {
    label.trim()
}

/// Rank of an exact label, if known.
fn rank_of(label: &str) -> Option<u32> {
    EXPIRY_PRIORITY
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, rank)| *rank)
}

/// Sort rank for a primary expiry label.
///
/// Missing or empty labels rank as 未入力 (27); labels not in the table
/// rank after every known label.
pub fn priority_of(label: Option<&str>) -> u32 {
    let normalized = normalize(label.unwrap_or(""));
    if normalized.is_empty() {
        return UNSET_RANK;
    }
    rank_of(normalized).unwrap_or(u32::MAX)
}
