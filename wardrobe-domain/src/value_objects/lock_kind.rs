// Lock kind value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LockKind {
    #[default]
    None,
    Padlock,
    CombinationPadlock,
    TimerPadlock,
    PasswordPadlock,
    OwnerPadlock,
    LoversPadlock,
    MistressPadlock,
    HighSecurityPadlock,
    MetalPadlock,
    LoversTimerPadlock,
}

impl LockKind {
    pub const ALL: [LockKind; 11] = [
        LockKind::None,
        LockKind::Padlock,
        LockKind::CombinationPadlock,
        LockKind::TimerPadlock,
        LockKind::PasswordPadlock,
        LockKind::OwnerPadlock,
        LockKind::LoversPadlock,
        LockKind::MistressPadlock,
        LockKind::HighSecurityPadlock,
        LockKind::MetalPadlock,
        LockKind::LoversTimerPadlock,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LockKind::None => "None",
            LockKind::Padlock => "Padlock",
            LockKind::CombinationPadlock => "CombinationPadlock",
            LockKind::TimerPadlock => "TimerPadlock",
            LockKind::PasswordPadlock => "PasswordPadlock",
            LockKind::OwnerPadlock => "OwnerPadlock",
            LockKind::LoversPadlock => "LoversPadlock",
            LockKind::MistressPadlock => "MistressPadlock",
            LockKind::HighSecurityPadlock => "HighSecurityPadlock",
            LockKind::MetalPadlock => "MetalPadlock",
            LockKind::LoversTimerPadlock => "LoversTimerPadlock",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, LockKind::None)
    }

    /// Timer kinds store an absolute expiry instead of a duration once applied.
    pub fn is_timer(&self) -> bool {
        matches!(self, LockKind::TimerPadlock | LockKind::LoversTimerPadlock)
    }
}

impl fmt::Display for LockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LockKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LockKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::UnknownLockKind(s.to_string()))
    }
}

impl TryFrom<String> for LockKind {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LockKind> for String {
    fn from(kind: LockKind) -> Self {
        kind.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_kind() {
        for kind in LockKind::ALL {
            assert_eq!(kind.as_str().parse::<LockKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert_eq!(
            "bogus-kind".parse::<LockKind>(),
            Err(DomainError::UnknownLockKind("bogus-kind".to_string()))
        );
        assert!(serde_json::from_str::<LockKind>("\"bogus-kind\"").is_err());
    }

    #[test]
    fn only_timer_family_is_time_bounded() {
        let timers: Vec<_> = LockKind::ALL.iter().filter(|k| k.is_timer()).collect();
        assert_eq!(
            timers,
            vec![&LockKind::TimerPadlock, &LockKind::LoversTimerPadlock]
        );
    }
}
