use serde::{Deserialize, Serialize};

/// Keys the session reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// `f`: switch to File Mode.
    FileMode,
    /// `d`: switch to Draw Mode.
    DrawMode,
    /// `c`: advance the stroke color.
    CycleColor,
    /// `b`: while held, each click starts a new polyline.
    NewLine,
    Other(char),
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        match c {
            'f' => Key::FileMode,
            'd' => Key::DrawMode,
            'c' => Key::CycleColor,
            'b' => Key::NewLine,
            other => Key::Other(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from('f'), Key::FileMode);
        assert_eq!(Key::from('d'), Key::DrawMode);
        assert_eq!(Key::from('c'), Key::CycleColor);
        assert_eq!(Key::from('b'), Key::NewLine);
        assert_eq!(Key::from('F'), Key::Other('F'));
    }
}
