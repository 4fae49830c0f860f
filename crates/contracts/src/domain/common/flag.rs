use serde::{Deserialize, Serialize};

/// Boolean switches a record can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flag {
    /// Active / inactive
    Status,
    /// Shown in featured blocks
    Featured,
    /// Shown in the home page slider
    Slider,
}

impl Flag {
    pub fn label(&self) -> &'static str {
        match self {
            Flag::Status => "Status",
            Flag::Featured => "Featured",
            Flag::Slider => "Slider",
        }
    }
}

/// Access to the boolean flags of a record.
///
/// Records without a given flag return `None`, which turns toggling that
/// flag into a no-op.
pub trait Flagged {
    fn flag(&self, flag: Flag) -> Option<bool>;

    /// Mutable slot for the flag, if the record carries it
    fn flag_mut(&mut self, flag: Flag) -> Option<&mut bool>;

    /// Copy of the record with `flag` set to `value`
    fn with_flag(&self, flag: Flag, value: bool) -> Option<Self>
    where
        Self: Clone,
    {
        let mut copy = self.clone();
        *copy.flag_mut(flag)? = value;
        Some(copy)
    }

    fn is_set(&self, flag: Flag) -> bool {
        self.flag(flag).unwrap_or(false)
    }
}
