use std::fmt;

/// Index of a player in the session's ordered player list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(pub usize);

/// A player in a game. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    token: char,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, token: char) -> Self {
        Player {
            id,
            name: name.into(),
            token,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-character board token, used as the display symbol of this
    /// player's chips.
    pub fn token(&self) -> char {
        self.token
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
