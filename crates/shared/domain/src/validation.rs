use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Separators a username may contain between its alphanumeric ends.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct AllowedSeparators: u8 {
        const DOT = 1 << 0;
        const DASH = 1 << 1;
        const UNDER = 1 << 2;

        const ALL = Self::DOT.bits() | Self::DASH.bits() | Self::UNDER.bits();
    }
}

impl AllowedSeparators {
    /// Characters permitted by this set.
    pub fn chars(self) -> impl Iterator<Item = char> {
        [(Self::DOT, '.'), (Self::DASH, '-'), (Self::UNDER, '_')]
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, c)| c)
    }

    pub fn allows(self, c: char) -> bool {
        self.chars().any(|allowed| allowed == c)
    }
}

impl From<&str> for AllowedSeparators {
    fn from(s: &str) -> Self {
        match s {
            "dot" | "." => Self::DOT,
            "dash" | "-" => Self::DASH,
            "under" | "_" => Self::UNDER,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl From<u8> for AllowedSeparators {
    fn from(bits: u8) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for AllowedSeparators {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for AllowedSeparators {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}
