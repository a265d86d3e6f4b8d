use std::fmt;
use std::str::FromStr;

/// Column a dependency list can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Type,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Current sort of a list view, `name`/`asc` by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortDescriptor {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortDescriptor {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    /// Result of clicking the header of `key`: the active column flips its
    /// order, any other column becomes active in ascending order.
    pub fn select(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.order.reversed())
        } else {
            Self::new(key, SortOrder::Asc)
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "type" => Ok(SortKey::Type),
            _ => Err(format!(
                "Invalid sort key: {}. Please specify 'name' or 'type'",
                s
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Name => f.write_str("name"),
            SortKey::Type => f.write_str("type"),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => f.write_str("asc"),
            SortOrder::Desc => f.write_str("desc"),
        }
    }
}
