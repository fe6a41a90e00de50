//! The 24 solar terms: Ju numbers per Yuan and circulation polarity.

use crate::polarity::Polarity;

/// The 24 solar terms in annual order starting from 立春.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarTerm {
    LiChun,
    YuShui,
    JingZhe,
    ChunFen,
    QingMing,
    GuYu,
    LiXia,
    XiaoMan,
    MangZhong,
    XiaZhi,
    XiaoShu,
    DaShu,
    LiQiu,
    ChuShu,
    BaiLu,
    QiuFen,
    HanLu,
    ShuangJiang,
    LiDong,
    XiaoXue,
    DaXue,
    DongZhi,
    XiaoHan,
    DaHan,
}

/// All 24 terms in annual order (0 = 立春 .. 23 = 大寒).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::LiChun,
    SolarTerm::YuShui,
    SolarTerm::JingZhe,
    SolarTerm::ChunFen,
    SolarTerm::QingMing,
    SolarTerm::GuYu,
    SolarTerm::LiXia,
    SolarTerm::XiaoMan,
    SolarTerm::MangZhong,
    SolarTerm::XiaZhi,
    SolarTerm::XiaoShu,
    SolarTerm::DaShu,
    SolarTerm::LiQiu,
    SolarTerm::ChuShu,
    SolarTerm::BaiLu,
    SolarTerm::QiuFen,
    SolarTerm::HanLu,
    SolarTerm::ShuangJiang,
    SolarTerm::LiDong,
    SolarTerm::XiaoXue,
    SolarTerm::DaXue,
    SolarTerm::DongZhi,
    SolarTerm::XiaoHan,
    SolarTerm::DaHan,
];

impl SolarTerm {
    /// Chinese name of the term.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LiChun => "立春",
            Self::YuShui => "雨水",
            Self::JingZhe => "惊蛰",
            Self::ChunFen => "春分",
            Self::QingMing => "清明",
            Self::GuYu => "谷雨",
            Self::LiXia => "立夏",
            Self::XiaoMan => "小满",
            Self::MangZhong => "芒种",
            Self::XiaZhi => "夏至",
            Self::XiaoShu => "小暑",
            Self::DaShu => "大暑",
            Self::LiQiu => "立秋",
            Self::ChuShu => "处暑",
            Self::BaiLu => "白露",
            Self::QiuFen => "秋分",
            Self::HanLu => "寒露",
            Self::ShuangJiang => "霜降",
            Self::LiDong => "立冬",
            Self::XiaoXue => "小雪",
            Self::DaXue => "大雪",
            Self::DongZhi => "冬至",
            Self::XiaoHan => "小寒",
            Self::DaHan => "大寒",
        }
    }

    /// 0-based annual index (立春=0 .. 大寒=23).
    pub const fn index(self) -> u8 {
        match self {
            Self::LiChun => 0,
            Self::YuShui => 1,
            Self::JingZhe => 2,
            Self::ChunFen => 3,
            Self::QingMing => 4,
            Self::GuYu => 5,
            Self::LiXia => 6,
            Self::XiaoMan => 7,
            Self::MangZhong => 8,
            Self::XiaZhi => 9,
            Self::XiaoShu => 10,
            Self::DaShu => 11,
            Self::LiQiu => 12,
            Self::ChuShu => 13,
            Self::BaiLu => 14,
            Self::QiuFen => 15,
            Self::HanLu => 16,
            Self::ShuangJiang => 17,
            Self::LiDong => 18,
            Self::XiaoXue => 19,
            Self::DaXue => 20,
            Self::DongZhi => 21,
            Self::XiaoHan => 22,
            Self::DaHan => 23,
        }
    }

    /// Term from an annual index, wrapping modulo 24.
    pub const fn from_index(i: u8) -> Self {
        ALL_SOLAR_TERMS[(i % 24) as usize]
    }

    /// Governing Ju numbers for the Shang, Zhong, and Xia Yuan.
    pub const fn ju_numbers(self) -> [u8; 3] {
        match self {
            Self::LiChun => [8, 5, 2],
            Self::YuShui => [9, 6, 3],
            Self::JingZhe => [1, 7, 4],
            Self::ChunFen => [3, 9, 6],
            Self::QingMing => [4, 1, 7],
            Self::GuYu => [5, 2, 8],
            Self::LiXia => [4, 1, 7],
            Self::XiaoMan => [5, 2, 8],
            Self::MangZhong => [6, 3, 9],
            Self::XiaZhi => [9, 3, 6],
            Self::XiaoShu => [8, 2, 5],
            Self::DaShu => [7, 1, 4],
            Self::LiQiu => [2, 5, 8],
            Self::ChuShu => [1, 4, 7],
            Self::BaiLu => [9, 3, 6],
            Self::QiuFen => [7, 1, 4],
            Self::HanLu => [6, 9, 3],
            Self::ShuangJiang => [5, 8, 2],
            Self::LiDong => [6, 9, 3],
            Self::XiaoXue => [5, 8, 2],
            Self::DaXue => [4, 7, 1],
            Self::DongZhi => [1, 7, 4],
            Self::XiaoHan => [2, 8, 5],
            Self::DaHan => [3, 9, 6],
        }
    }

    /// Circulation polarity of the term's half-year: the twelve terms from
    /// 冬至 through 芒种 run Yang, the twelve from 夏至 through 大雪 run Yin.
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::LiChun
            | Self::YuShui
            | Self::JingZhe
            | Self::ChunFen
            | Self::QingMing
            | Self::GuYu
            | Self::LiXia
            | Self::XiaoMan
            | Self::MangZhong
            | Self::DongZhi
            | Self::XiaoHan
            | Self::DaHan => Polarity::Yang,
            Self::XiaZhi
            | Self::XiaoShu
            | Self::DaShu
            | Self::LiQiu
            | Self::ChuShu
            | Self::BaiLu
            | Self::QiuFen
            | Self::HanLu
            | Self::ShuangJiang
            | Self::LiDong
            | Self::XiaoXue
            | Self::DaXue => Polarity::Yin,
        }
    }

    /// Solar month the term belongs to (1 = 寅月 opened by 立春 .. 12 =
    /// 丑月). Two terms per month: the opening Jie and the mid-month Qi.
    pub const fn solar_month(self) -> u8 {
        self.index() / 2 + 1
    }
}

impl std::fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
