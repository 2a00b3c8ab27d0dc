use std::fmt;

/// Gender as reported by the WeChat user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Unknown,
    Male,
    Female,
}

impl Gender {
    /// Map the profile code: 0 unknown, 1 male, 2 female. Any other code
    /// maps to male.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Gender::Unknown,
            2 => Gender::Female,
            _ => Gender::Male,
        }
    }

    /// The label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Unknown => "未知",
            Gender::Male => "男",
            Gender::Female => "女",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
