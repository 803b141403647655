pub const ROWS: i8 = 8;
pub const COLS: i8 = 8;

/// True if (row, col) is a real board square.
pub fn on_board(row: i8, col: i8) -> bool {
    (0..ROWS).contains(&row) && (0..COLS).contains(&col)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row direction a non-king piece moves in. Light starts on rows 0-2
    /// and advances down the board, Dark starts on rows 5-7 and advances up.
    pub fn forward(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Reaching this row promotes the piece to a king.
    pub fn promotion_row(self) -> i8 {
        match self {
            Color::Light => ROWS - 1,
            Color::Dark => 0,
        }
    }
}

/// One-shot elemental ability assigned to a piece at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Element {
    Fire,
    Water,
    Air,
    Earth,
}

pub const ELEMENTS: [Element; 4] = [Element::Fire, Element::Water, Element::Air, Element::Earth];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Piece {
    pub row: i8,
    pub col: i8,
    pub color: Color,
    pub king: bool,
    pub element: Option<Element>,
    pub power_used: bool,
}

impl Piece {
    pub fn new(row: i8, col: i8, color: Color) -> Self {
        Self {
            row,
            col,
            color,
            king: false,
            element: None,
            power_used: false,
        }
    }

    pub fn with_element(row: i8, col: i8, color: Color, element: Element) -> Self {
        Self {
            element: Some(element),
            ..Self::new(row, col, color)
        }
    }

    /// Kings forfeit their elemental power; `power_used` never reverts.
    pub fn promote(&mut self) {
        self.king = true;
        self.power_used = true;
    }

    pub fn can_use_power(&self) -> bool {
        self.element.is_some() && !self.power_used
    }

    pub fn has_power(&self, element: Element) -> bool {
        self.element == Some(element) && !self.power_used
    }
}

/// How a destination in a [`MoveMap`] is reached.
///
/// Capture lists are in jump order; `WaterPower` and `AirPower` relocate
/// without capturing, `FirePower` captures without relocating.
#[derive(Clone, Debug, PartialEq)]
pub enum MoveKind {
    Simple,
    Capture(Vec<Piece>),
    WaterPower,
    AirPower,
    FirePower(Vec<Piece>),
}

impl MoveKind {
    /// Entries that trigger the forced-capture rule. Water and air moves
    /// never force; fire does, just like a regular jump.
    pub fn is_forcing_capture(&self) -> bool {
        matches!(self, MoveKind::Capture(_) | MoveKind::FirePower(_))
    }
}

/// Destination -> move-kind map for a single piece.
///
/// Backed by a Vec so iteration follows insertion order: ray directions
/// up-left, up-right, down-left, down-right, then water, air and fire
/// entries. Search tie-breaking depends on this order being stable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MoveMap {
    entries: Vec<((i8, i8), MoveKind)>,
}

impl MoveMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; replacing keeps the entry's original position.
    pub fn insert(&mut self, dest: (i8, i8), kind: MoveKind) {
        match self.entries.iter_mut().find(|(d, _)| *d == dest) {
            Some((_, k)) => *k = kind,
            None => self.entries.push((dest, kind)),
        }
    }

    pub fn get(&self, dest: (i8, i8)) -> Option<&MoveKind> {
        self.entries.iter().find(|(d, _)| *d == dest).map(|(_, k)| k)
    }

    pub fn contains(&self, dest: (i8, i8)) -> bool {
        self.get(dest).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &((i8, i8), MoveKind)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_forcing_capture(&self) -> bool {
        self.entries.iter().any(|(_, k)| k.is_forcing_capture())
    }

    /// Restrict to plain capture entries (multi-jump continuation set).
    pub fn captures_only(&self) -> MoveMap {
        MoveMap {
            entries: self
                .entries
                .iter()
                .filter(|(_, k)| matches!(k, MoveKind::Capture(_)))
                .cloned()
                .collect(),
        }
    }
}
