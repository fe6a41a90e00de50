//! The sixty-pair stem-branch cycle and its six-decad (Xun) partition.
//!
//! Each Xun covers ten consecutive pairs. Its two five-pair halves (pentads)
//! each carry one of the three Yuan sub-periods, leaving one Yuan slot empty
//! per Xun; together the six Xun populate every Yuan exactly twice. The two
//! branches that a Xun never reaches are its Kong-Wang (void) branches, and
//! the stem concealing the cycle leader 甲 is its Dun stem.

use crate::branch::Branch;
use crate::stem::Stem;

/// An ordered stem-branch pair. Value equality; immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StemBranch {
    pub stem: Stem,
    pub branch: Branch,
}

impl StemBranch {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pair at a sexagenary cycle index, wrapping modulo 60.
    pub const fn from_index(i: u8) -> Self {
        let i = i % 60;
        Self {
            stem: Stem::from_index(i % 10),
            branch: Branch::from_index(i % 12),
        }
    }

    /// Position in the sexagenary cycle (0 = 甲子 .. 59 = 癸亥).
    ///
    /// Returns None for pairs outside the cycle (stem and branch of
    /// opposite parity never co-occur in the 60 valid pairs).
    pub fn cycle_index(self) -> Option<u8> {
        let s = self.stem.index();
        let b = self.branch.index();
        (0..6u8).map(|k| s + 10 * k).find(|n| n % 12 == b)
    }

    /// The Xun (decad) this pair belongs to.
    pub fn xun(self) -> Option<Xun> {
        self.cycle_index().map(|i| ALL_XUN[(i / 10) as usize])
    }

    /// The Dun stem of the governing Xun: the stem standing in for the
    /// concealed cycle leader 甲 within this pair's decad.
    pub fn leading_stem(self) -> Option<Stem> {
        self.xun().map(Xun::hidden_stem)
    }
}

impl std::fmt::Display for StemBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.symbol(), self.branch.symbol())
    }
}

/// One of three ten-day sub-periods within a solar term's window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Yuan {
    Shang,
    Zhong,
    Xia,
}

/// All three Yuan in order (0 = Shang .. 2 = Xia).
pub const ALL_YUAN: [Yuan; 3] = [Yuan::Shang, Yuan::Zhong, Yuan::Xia];

impl Yuan {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Shang => "上元",
            Self::Zhong => "中元",
            Self::Xia => "下元",
        }
    }

    /// 0-based index into a solar term's Ju triple.
    pub const fn index(self) -> u8 {
        match self {
            Self::Shang => 0,
            Self::Zhong => 1,
            Self::Xia => 2,
        }
    }
}

impl std::fmt::Display for Yuan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The six decads partitioning the sexagenary cycle, named by leader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Xun {
    JiaZi,
    JiaXu,
    JiaShen,
    JiaWu,
    JiaChen,
    JiaYin,
}

/// All six Xun in cycle order.
pub const ALL_XUN: [Xun; 6] = [
    Xun::JiaZi,
    Xun::JiaXu,
    Xun::JiaShen,
    Xun::JiaWu,
    Xun::JiaChen,
    Xun::JiaYin,
];

impl Xun {
    /// 0-based decad index (甲子=0 .. 甲寅=5).
    pub const fn index(self) -> u8 {
        match self {
            Self::JiaZi => 0,
            Self::JiaXu => 1,
            Self::JiaShen => 2,
            Self::JiaWu => 3,
            Self::JiaChen => 4,
            Self::JiaYin => 5,
        }
    }

    /// The leading pair of the decad (甲子, 甲戌, ...).
    pub const fn leader(self) -> StemBranch {
        StemBranch::from_index(self.index() * 10)
    }

    /// The Dun stem concealing 甲 for this decad.
    pub const fn hidden_stem(self) -> Stem {
        match self {
            Self::JiaZi => Stem::Wu,
            Self::JiaXu => Stem::Ji,
            Self::JiaShen => Stem::Geng,
            Self::JiaWu => Stem::Xin,
            Self::JiaChen => Stem::Ren,
            Self::JiaYin => Stem::Gui,
        }
    }

    /// The two Kong-Wang (void) branches the decad never reaches.
    pub const fn void_branches(self) -> [Branch; 2] {
        match self {
            Self::JiaZi => [Branch::Xu, Branch::Hai],
            Self::JiaXu => [Branch::Shen, Branch::You],
            Self::JiaShen => [Branch::Wu, Branch::Wei],
            Self::JiaWu => [Branch::Chen, Branch::Si],
            Self::JiaChen => [Branch::Yin, Branch::Mao],
            Self::JiaYin => [Branch::Zi, Branch::Chou],
        }
    }

    /// Yuan carried by each half of the decad (half 0 = pairs 0-4,
    /// half 1 = pairs 5-9).
    pub const fn pentad_yuan(self, half: u8) -> Yuan {
        let pair = match self {
            Self::JiaZi | Self::JiaWu => (Yuan::Shang, Yuan::Zhong),
            Self::JiaXu | Self::JiaChen => (Yuan::Xia, Yuan::Shang),
            Self::JiaShen | Self::JiaYin => (Yuan::Zhong, Yuan::Xia),
        };
        if half % 2 == 0 { pair.0 } else { pair.1 }
    }

    /// The five pairs of the given Yuan slot, or None for the Yuan this
    /// decad leaves empty.
    pub fn pentad(self, yuan: Yuan) -> Option<[StemBranch; 5]> {
        let half = if self.pentad_yuan(0) == yuan {
            0
        } else if self.pentad_yuan(1) == yuan {
            1
        } else {
            return None;
        };
        let base = self.index() * 10 + half * 5;
        let mut out = [StemBranch::from_index(base); 5];
        for (k, slot) in out.iter_mut().enumerate() {
            *slot = StemBranch::from_index(base + k as u8);
        }
        Some(out)
    }

    /// Which Yuan slot of this decad contains the pair, if any.
    pub fn yuan_of(self, pair: StemBranch) -> Option<Yuan> {
        let i = pair.cycle_index()?;
        if i / 10 != self.index() {
            return None;
        }
        Some(self.pentad_yuan((i % 10) / 5))
    }
}

impl std::fmt::Display for Xun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.leader())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_index_round_trip() {
        for i in 0..60u8 {
            assert_eq!(StemBranch::from_index(i).cycle_index(), Some(i));
        }
    }

    #[test]
    fn invalid_pair_has_no_index() {
        // 甲丑 mixes a Yang stem with a Yin branch: not in the cycle.
        let pair = StemBranch::new(Stem::Jia, Branch::Chou);
        assert_eq!(pair.cycle_index(), None);
        assert_eq!(pair.xun(), None);
    }

    #[test]
    fn xun_leaders() {
        assert_eq!(Xun::JiaZi.leader().to_string(), "甲子");
        assert_eq!(Xun::JiaXu.leader().to_string(), "甲戌");
        assert_eq!(Xun::JiaShen.leader().to_string(), "甲申");
        assert_eq!(Xun::JiaWu.leader().to_string(), "甲午");
        assert_eq!(Xun::JiaChen.leader().to_string(), "甲辰");
        assert_eq!(Xun::JiaYin.leader().to_string(), "甲寅");
    }

    /// Every pair of the 60-cycle belongs to exactly one Xun and exactly
    /// one populated Yuan slot within it.
    #[test]
    fn partition_property() {
        for i in 0..60u8 {
            let pair = StemBranch::from_index(i);
            let owners: Vec<(Xun, Yuan)> = ALL_XUN
                .iter()
                .filter_map(|&x| x.yuan_of(pair).map(|y| (x, y)))
                .collect();
            assert_eq!(owners.len(), 1, "pair {pair} owned by {owners:?}");
            let (xun, yuan) = owners[0];
            let pentad = xun.pentad(yuan).expect("owning slot is populated");
            assert!(pentad.contains(&pair));
        }
    }

    /// Each Xun populates exactly two of the three Yuan slots.
    #[test]
    fn one_empty_yuan_per_xun() {
        for xun in ALL_XUN {
            let populated = ALL_YUAN.iter().filter(|&&y| xun.pentad(y).is_some()).count();
            assert_eq!(populated, 2, "{xun}");
        }
    }

    #[test]
    fn jiazi_pentads() {
        let shang = Xun::JiaZi.pentad(Yuan::Shang).unwrap();
        let names: Vec<String> = shang.iter().map(|p| p.to_string()).collect();
        assert_eq!(names, ["甲子", "乙丑", "丙寅", "丁卯", "戊辰"]);
        assert!(Xun::JiaZi.pentad(Yuan::Xia).is_none());
    }

    #[test]
    fn void_branches_absent_from_decad() {
        for xun in ALL_XUN {
            let voids = xun.void_branches();
            for off in 0..10u8 {
                let pair = StemBranch::from_index(xun.index() * 10 + off);
                assert!(!voids.contains(&pair.branch), "{pair} in {xun} voids");
            }
        }
    }

    #[test]
    fn leading_stem_lookup() {
        // 戊午 sits in the 甲寅 decad, whose Dun stem is 癸.
        let pair = StemBranch::from_index(54);
        assert_eq!(pair.to_string(), "戊午");
        assert_eq!(pair.xun(), Some(Xun::JiaYin));
        assert_eq!(pair.leading_stem(), Some(Stem::Gui));
    }
}
