use serde::{Deserialize, Serialize};

/// A signed axial hex coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    pub fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The canonical `"q,r"` lookup key (no spaces).
    pub fn key(&self) -> String {
        format!("{},{}", self.q, self.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_has_no_spaces() {
        assert_eq!(HexCoord::new(3, -4).key(), "3,-4");
    }
}
