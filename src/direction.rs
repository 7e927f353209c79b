use serde::Serialize;

/// Where a click landed relative to the grid center. Drives which way the
/// fill animation sweeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Center,
}

impl Direction {
    /// Compare against `rows / 2` and `cols / 2` (floored). Rows are checked
    /// first, so only clicks on the center row can be `Left`/`Right`.
    pub fn classify(row: isize, col: isize, rows: usize, cols: usize) -> Self {
        let center_row = (rows / 2) as isize;
        let center_col = (cols / 2) as isize;
        if row < center_row {
            Direction::Up
        } else if row > center_row {
            Direction::Down
        } else if col < center_col {
            Direction::Left
        } else if col > center_col {
            Direction::Right
        } else {
            Direction::Center
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Center => "center",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_take_precedence() {
        // 5x5: center (2, 2)
        assert_eq!(Direction::classify(0, 4, 5, 5), Direction::Up);
        assert_eq!(Direction::classify(4, 0, 5, 5), Direction::Down);
        assert_eq!(Direction::classify(2, 0, 5, 5), Direction::Left);
        assert_eq!(Direction::classify(2, 4, 5, 5), Direction::Right);
        assert_eq!(Direction::classify(2, 2, 5, 5), Direction::Center);
    }

    #[test]
    fn even_extents_floor_the_center() {
        // 4x6: center (2, 3)
        assert_eq!(Direction::classify(1, 3, 4, 6), Direction::Up);
        assert_eq!(Direction::classify(2, 3, 4, 6), Direction::Center);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Center).unwrap(), "\"center\"");
        assert_eq!(Direction::Left.as_str(), "left");
    }
}
