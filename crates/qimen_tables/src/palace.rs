//! The nine palaces of the Luo Shu square with their fixed attributes,
//! plus the stars, gates, and spirits that circulate over them.
//!
//! Circulation never enters the center palace: the eight outer palaces form
//! a fixed ring (1 8 3 4 9 2 7 6 clockwise). The center takes part only by
//! borrowing a host palace's position.

use crate::polarity::{Element, Polarity};

/// The nine palaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palace {
    Kan,
    Kun,
    Zhen,
    Xun,
    Zhong,
    Qian,
    Dui,
    Gen,
    Li,
}

/// All nine palaces in ordinal order (1..9).
pub const ALL_PALACES: [Palace; 9] = [
    Palace::Kan,
    Palace::Kun,
    Palace::Zhen,
    Palace::Xun,
    Palace::Zhong,
    Palace::Qian,
    Palace::Dui,
    Palace::Gen,
    Palace::Li,
];

/// The outer palaces in clockwise circulation order, starting from Kan.
pub const CLOCKWISE_RING: [Palace; 8] = [
    Palace::Kan,
    Palace::Gen,
    Palace::Zhen,
    Palace::Xun,
    Palace::Li,
    Palace::Kun,
    Palace::Dui,
    Palace::Qian,
];

/// Direction of circulation around the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    /// Yang circulates forward (clockwise), Yin reverse.
    pub const fn from_polarity(p: Polarity) -> Self {
        match p {
            Polarity::Yang => Self::Clockwise,
            Polarity::Yin => Self::CounterClockwise,
        }
    }
}

/// The eight trigrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigram {
    Qian,
    Kun,
    Zhen,
    Xun,
    Kan,
    Li,
    Gen,
    Dui,
}

impl Trigram {
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Qian => "乾",
            Self::Kun => "坤",
            Self::Zhen => "震",
            Self::Xun => "巽",
            Self::Kan => "坎",
            Self::Li => "离",
            Self::Gen => "艮",
            Self::Dui => "兑",
        }
    }
}

impl Palace {
    /// Luo Shu ordinal, 1-9.
    pub const fn number(self) -> u8 {
        match self {
            Self::Kan => 1,
            Self::Kun => 2,
            Self::Zhen => 3,
            Self::Xun => 4,
            Self::Zhong => 5,
            Self::Qian => 6,
            Self::Dui => 7,
            Self::Gen => 8,
            Self::Li => 9,
        }
    }

    /// Palace for a Luo Shu ordinal.
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Kan),
            2 => Some(Self::Kun),
            3 => Some(Self::Zhen),
            4 => Some(Self::Xun),
            5 => Some(Self::Zhong),
            6 => Some(Self::Qian),
            7 => Some(Self::Dui),
            8 => Some(Self::Gen),
            9 => Some(Self::Li),
            _ => None,
        }
    }

    /// Full palace name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kan => "坎一宫",
            Self::Kun => "坤二宫",
            Self::Zhen => "震三宫",
            Self::Xun => "巽四宫",
            Self::Zhong => "中五宫",
            Self::Qian => "乾六宫",
            Self::Dui => "兑七宫",
            Self::Gen => "艮八宫",
            Self::Li => "离九宫",
        }
    }

    /// Trigram of the palace; the center has none.
    pub const fn trigram(self) -> Option<Trigram> {
        match self {
            Self::Kan => Some(Trigram::Kan),
            Self::Kun => Some(Trigram::Kun),
            Self::Zhen => Some(Trigram::Zhen),
            Self::Xun => Some(Trigram::Xun),
            Self::Zhong => None,
            Self::Qian => Some(Trigram::Qian),
            Self::Dui => Some(Trigram::Dui),
            Self::Gen => Some(Trigram::Gen),
            Self::Li => Some(Trigram::Li),
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Kan => Element::Water,
            Self::Kun | Self::Zhong | Self::Gen => Element::Earth,
            Self::Zhen | Self::Xun => Element::Wood,
            Self::Qian | Self::Dui => Element::Metal,
            Self::Li => Element::Fire,
        }
    }

    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Kun | Self::Dui | Self::Li => Polarity::Yin,
            _ => Polarity::Yang,
        }
    }

    /// The star resident in this palace on the unrotated plate.
    pub const fn native_star(self) -> Star {
        match self {
            Self::Kan => Star::TianPeng,
            Self::Kun => Star::TianRui,
            Self::Zhen => Star::TianChong,
            Self::Xun => Star::TianFu,
            Self::Zhong => Star::TianQin,
            Self::Qian => Star::TianXin,
            Self::Dui => Star::TianZhu,
            Self::Gen => Star::TianRen,
            Self::Li => Star::TianYing,
        }
    }

    /// The gate resident in this palace; the center has none.
    pub const fn native_gate(self) -> Option<Gate> {
        match self {
            Self::Kan => Some(Gate::Rest),
            Self::Kun => Some(Gate::Death),
            Self::Zhen => Some(Gate::Injury),
            Self::Xun => Some(Gate::Block),
            Self::Zhong => None,
            Self::Qian => Some(Gate::Open),
            Self::Dui => Some(Gate::Fright),
            Self::Gen => Some(Gate::Life),
            Self::Li => Some(Gate::Brilliance),
        }
    }

    /// Position on the clockwise ring; None for the center.
    pub fn ring_position(self) -> Option<usize> {
        CLOCKWISE_RING.iter().position(|&p| p == self)
    }

    /// Walk `steps` palaces around the ring from this palace. None if this
    /// palace is the center.
    pub fn ring_step(self, steps: u8, rotation: Rotation) -> Option<Palace> {
        let pos = self.ring_position()?;
        let idx = match rotation {
            Rotation::Clockwise => (pos + steps as usize) % 8,
            Rotation::CounterClockwise => (pos + 8 - (steps as usize % 8)) % 8,
        };
        Some(CLOCKWISE_RING[idx])
    }

    /// Number of steps from `self` to `to` along `rotation`. None if either
    /// palace is the center.
    pub fn ring_distance(self, to: Palace, rotation: Rotation) -> Option<u8> {
        let from = self.ring_position()?;
        let to = to.ring_position()?;
        let cw = (to + 8 - from) % 8;
        Some(match rotation {
            Rotation::Clockwise => cw as u8,
            Rotation::CounterClockwise => ((8 - cw) % 8) as u8,
        })
    }
}

impl std::fmt::Display for Palace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The nine stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Star {
    TianPeng,
    TianRen,
    TianChong,
    TianFu,
    TianYing,
    TianRui,
    TianZhu,
    TianXin,
    TianQin,
}

/// All nine stars; the first eight follow their home palaces' ring order,
/// 天禽 (center resident) comes last.
pub const ALL_STARS: [Star; 9] = [
    Star::TianPeng,
    Star::TianRen,
    Star::TianChong,
    Star::TianFu,
    Star::TianYing,
    Star::TianRui,
    Star::TianZhu,
    Star::TianXin,
    Star::TianQin,
];

impl Star {
    pub const fn name(self) -> &'static str {
        match self {
            Self::TianPeng => "天蓬",
            Self::TianRen => "天任",
            Self::TianChong => "天冲",
            Self::TianFu => "天辅",
            Self::TianYing => "天英",
            Self::TianRui => "天芮",
            Self::TianZhu => "天柱",
            Self::TianXin => "天心",
            Self::TianQin => "天禽",
        }
    }

    /// Home palace on the unrotated plate.
    pub const fn home_palace(self) -> Palace {
        match self {
            Self::TianPeng => Palace::Kan,
            Self::TianRen => Palace::Gen,
            Self::TianChong => Palace::Zhen,
            Self::TianFu => Palace::Xun,
            Self::TianYing => Palace::Li,
            Self::TianRui => Palace::Kun,
            Self::TianZhu => Palace::Dui,
            Self::TianXin => Palace::Qian,
            Self::TianQin => Palace::Zhong,
        }
    }
}

impl std::fmt::Display for Star {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The eight gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    Rest,
    Life,
    Injury,
    Block,
    Brilliance,
    Death,
    Fright,
    Open,
}

/// All eight gates in the ring order of their home palaces.
pub const ALL_GATES: [Gate; 8] = [
    Gate::Rest,
    Gate::Life,
    Gate::Injury,
    Gate::Block,
    Gate::Brilliance,
    Gate::Death,
    Gate::Fright,
    Gate::Open,
];

impl Gate {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rest => "休门",
            Self::Life => "生门",
            Self::Injury => "伤门",
            Self::Block => "杜门",
            Self::Brilliance => "景门",
            Self::Death => "死门",
            Self::Fright => "惊门",
            Self::Open => "开门",
        }
    }

    /// Home palace on the unrotated plate.
    pub const fn home_palace(self) -> Palace {
        match self {
            Self::Rest => Palace::Kan,
            Self::Life => Palace::Gen,
            Self::Injury => Palace::Zhen,
            Self::Block => Palace::Xun,
            Self::Brilliance => Palace::Li,
            Self::Death => Palace::Kun,
            Self::Fright => Palace::Dui,
            Self::Open => Palace::Qian,
        }
    }
}

impl std::fmt::Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The eight spirits in fixed circulation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spirit {
    ZhiFu,
    TengShe,
    TaiYin,
    LiuHe,
    BaiHu,
    XuanWu,
    JiuDi,
    JiuTian,
}

/// All eight spirits in circulation order, 值符 first.
pub const ALL_SPIRITS: [Spirit; 8] = [
    Spirit::ZhiFu,
    Spirit::TengShe,
    Spirit::TaiYin,
    Spirit::LiuHe,
    Spirit::BaiHu,
    Spirit::XuanWu,
    Spirit::JiuDi,
    Spirit::JiuTian,
];

impl Spirit {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ZhiFu => "值符",
            Self::TengShe => "螣蛇",
            Self::TaiYin => "太阴",
            Self::LiuHe => "六合",
            Self::BaiHu => "白虎",
            Self::XuanWu => "玄武",
            Self::JiuDi => "九地",
            Self::JiuTian => "九天",
        }
    }
}

impl std::fmt::Display for Spirit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
