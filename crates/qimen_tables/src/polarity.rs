//! Yin/Yang polarity and the five elements.

/// Yang (forward) or Yin (reverse) polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::Yang => Self::Yin,
            Self::Yin => Self::Yang,
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The five elements (五行).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Water,
    Earth,
    Wood,
    Metal,
    Fire,
}

impl Element {
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Water => "水",
            Self::Earth => "土",
            Self::Wood => "木",
            Self::Metal => "金",
            Self::Fire => "火",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
