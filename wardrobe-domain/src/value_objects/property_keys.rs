// Well-known keys of an equipped item's property bag

pub const TYPE: &str = "Type";
pub const EFFECT: &str = "Effect";
pub const DIFFICULTY: &str = "Difficulty";

pub const LOCKED_BY: &str = "LockedBy";
pub const LOCK: &str = "Lock";
pub const LOCK_MEMBER_NUMBER: &str = "LockMemberNumber";

pub const COMBINATION_NUMBER: &str = "CombinationNumber";
pub const PASSWORD: &str = "Password";
pub const REMOVE_TIMER: &str = "RemoveTimer";
pub const MEMBER_NUMBER_LIST_KEYS: &str = "MemberNumberListKeys";

/// Keys never copied from an item config's generic properties onto a live item.
pub const RESERVED_LOCK_KEYS: [&str; 3] = [LOCKED_BY, LOCK, LOCK_MEMBER_NUMBER];

/// Lock field values carried over when capturing a locked item.
pub const CAPTURED_LOCK_FIELDS: [&str; 4] = [
    COMBINATION_NUMBER,
    PASSWORD,
    REMOVE_TIMER,
    MEMBER_NUMBER_LIST_KEYS,
];

/// Every key a lock may leave behind, across all lock kinds.
pub const ALL_LOCK_KEYS: [&str; 7] = [
    LOCKED_BY,
    LOCK_MEMBER_NUMBER,
    COMBINATION_NUMBER,
    PASSWORD,
    REMOVE_TIMER,
    MEMBER_NUMBER_LIST_KEYS,
    LOCK,
];
