//! Golden-value integration tests for full chart construction.
//!
//! Reference moments are resolved with a fixed solar term so the
//! expectations stay independent of the approximate term source; the term
//! for each moment matches the historical almanac.

use qimen_core::{ChartOptions, FixedTerm, Moment, Pan, build_chart};
use qimen_tables::{Gate, Palace, Polarity, SolarTerm, Spirit, Star, Stem, Yuan};

fn chart(moment: Moment, term: SolarTerm) -> Pan {
    build_chart(&moment, &FixedTerm(term), &ChartOptions::default()).unwrap()
}

fn earth_stem(pan: &Pan, palace: Palace) -> Stem {
    pan.earth_plate.value.stems_at(palace).unwrap().0
}

fn heaven_stem(pan: &Pan, palace: Palace) -> Stem {
    pan.heaven_plate.value.stems_at(palace).unwrap().0
}

/// 2024-01-01 12:30, a 甲子 day in 冬至 上元: Ju 1, Yang Dun. The earth
/// plate walks the flight stems through palaces 1,8,3,4,9,2,7,6 in ring
/// order.
#[test]
fn yang_chart_ju1() {
    let pan = chart(
        Moment::new(2024, 1, 1, 12, 30).unwrap(),
        SolarTerm::DongZhi,
    );

    assert_eq!(pan.year_pillar.value.to_string(), "癸卯");
    assert_eq!(pan.month_pillar.value.to_string(), "甲子");
    assert_eq!(pan.day_pillar.value.to_string(), "甲子");
    assert_eq!(pan.hour_pillar.value.to_string(), "庚午");
    assert_eq!(pan.polarity.value, Polarity::Yang);
    assert_eq!(pan.yuan.value, Yuan::Shang);
    assert_eq!(pan.ju.value, 1);
    assert_eq!(pan.xun_leader.value.to_string(), "甲子");
    assert_eq!(
        [
            pan.void_branches.value[0].symbol(),
            pan.void_branches.value[1].symbol()
        ],
        ["戌", "亥"]
    );

    // Earth plate ring walk.
    let ring_stems = [
        (Palace::Kan, Stem::Wu),
        (Palace::Gen, Stem::Ji),
        (Palace::Zhen, Stem::Geng),
        (Palace::Xun, Stem::Xin),
        (Palace::Li, Stem::Ren),
        (Palace::Kun, Stem::Gui),
        (Palace::Dui, Stem::Ding),
        (Palace::Qian, Stem::Bing),
    ];
    for (palace, stem) in ring_stems {
        assert_eq!(earth_stem(&pan, palace), stem, "earth {palace}");
    }

    // Hour stem 庚 sits at 震三宫: leading star and gate are its natives.
    assert_eq!(pan.leading_star, Star::TianChong);
    assert_eq!(pan.leading_gate.value, Gate::Injury);

    // Heaven plate rotates two steps clockwise.
    assert_eq!(heaven_stem(&pan, Palace::Zhen), Stem::Wu);
    assert_eq!(heaven_stem(&pan, Palace::Xun), Stem::Ji);
    assert_eq!(heaven_stem(&pan, Palace::Li), Stem::Geng);
    assert_eq!(heaven_stem(&pan, Palace::Kan), Stem::Ding);
    assert_eq!(heaven_stem(&pan, Palace::Gen), Stem::Bing);

    // Stars and gates follow the same rotation.
    let kan = pan.palaces.get(Palace::Kan);
    assert_eq!(kan.star, Star::TianZhu);
    assert_eq!(kan.gate, Some(Gate::Fright));
    assert_eq!(kan.spirit, Some(Spirit::ZhiFu));
    let qian = pan.palaces.get(Palace::Qian);
    assert_eq!(qian.star, Star::TianRui);
    assert_eq!(qian.companion_star, Some(Star::TianQin));
    assert_eq!(qian.gate, Some(Gate::Death));
    assert_eq!(qian.spirit, Some(Spirit::JiuTian));
    let zhen = pan.palaces.get(Palace::Zhen);
    assert_eq!(zhen.star, Star::TianPeng);
    assert_eq!(zhen.gate, Some(Gate::Rest));
    assert_eq!(zhen.spirit, Some(Spirit::TaiYin));
}

/// 2008-11-04 12:30, a 戊申 day in 霜降 下元: Ju 2, Yin Dun.
#[test]
fn yin_chart_ju2() {
    let pan = chart(
        Moment::new(2008, 11, 4, 12, 30).unwrap(),
        SolarTerm::ShuangJiang,
    );

    assert_eq!(pan.year_pillar.value.to_string(), "戊子");
    assert_eq!(pan.month_pillar.value.to_string(), "壬戌");
    assert_eq!(pan.day_pillar.value.to_string(), "戊申");
    assert_eq!(pan.hour_pillar.value.to_string(), "戊午");
    assert_eq!(pan.polarity.value, Polarity::Yin);
    assert_eq!(pan.yuan.value, Yuan::Xia);
    assert_eq!(pan.ju.value, 2);
    assert_eq!(pan.xun_leader.value.to_string(), "甲寅");
    assert_eq!(
        [
            pan.void_branches.value[0].symbol(),
            pan.void_branches.value[1].symbol()
        ],
        ["子", "丑"]
    );

    // Earth plate seeds 戊 at 坤 and walks the ring in reverse.
    assert_eq!(earth_stem(&pan, Palace::Kun), Stem::Wu);
    assert_eq!(earth_stem(&pan, Palace::Li), Stem::Ji);
    assert_eq!(earth_stem(&pan, Palace::Kan), Stem::Gui);
    assert_eq!(earth_stem(&pan, Palace::Dui), Stem::Bing);

    assert_eq!(pan.leading_star, Star::TianRui);
    assert_eq!(pan.leading_gate.value, Gate::Death);

    // The hour decad's Dun stem 癸 flies from 坎 onto 坤.
    assert_eq!(heaven_stem(&pan, Palace::Kun), Stem::Gui);
    assert_eq!(heaven_stem(&pan, Palace::Zhen), Stem::Wu);

    let zhen = pan.palaces.get(Palace::Zhen);
    assert_eq!(zhen.star, Star::TianRui);
    assert_eq!(zhen.companion_star, Some(Star::TianQin));
    assert_eq!(zhen.gate, Some(Gate::Death));
    let kun = pan.palaces.get(Palace::Kun);
    assert_eq!(kun.star, Star::TianPeng);
    assert_eq!(kun.gate, Some(Gate::Rest));
    assert_eq!(kun.spirit, Some(Spirit::ZhiFu));

    // Center borrows 坤.
    let center = pan.palaces.get(Palace::Zhong);
    assert!(center.borrowed);
    assert_eq!(center.earth_stems.0, Stem::Wu);
    assert_eq!(center.heaven_stems.0, Stem::Gui);
    assert_eq!(center.star, Star::TianPeng);
    assert_eq!(center.gate, None);
    assert_eq!(center.spirit, None);
}

/// 1998-09-26 11:20, a 丁丑 day in 秋分 下元: Ju 4, Yin Dun, with a
/// Yin-polarity day stem reversing the spirit walk.
#[test]
fn yin_chart_ju4() {
    let pan = chart(
        Moment::new(1998, 9, 26, 11, 20).unwrap(),
        SolarTerm::QiuFen,
    );

    assert_eq!(pan.day_pillar.value.to_string(), "丁丑");
    assert_eq!(pan.hour_pillar.value.to_string(), "丙午");
    assert_eq!(pan.ju.value, 4);
    assert_eq!(pan.yuan.value, Yuan::Xia);
    assert_eq!(pan.xun_leader.value.to_string(), "甲午");

    assert_eq!(earth_stem(&pan, Palace::Xun), Stem::Wu);
    assert_eq!(earth_stem(&pan, Palace::Kan), Stem::Xin);
    assert_eq!(earth_stem(&pan, Palace::Li), Stem::Bing);

    // Hour stem 丙 anchors at 离九宫.
    assert_eq!(pan.leading_star, Star::TianYing);
    assert_eq!(pan.leading_gate.value, Gate::Brilliance);

    // Dun stem 辛 flies from 坎 onto 离; 丙 and its rider 乙 reach 坎.
    assert_eq!(heaven_stem(&pan, Palace::Li), Stem::Xin);
    assert_eq!(heaven_stem(&pan, Palace::Kan), Stem::Bing);
    assert_eq!(
        pan.heaven_plate.value.stems_at(Palace::Kan).unwrap().1,
        Some(Stem::Yi)
    );

    // 丁 (Yin) anchors 值符 at 坤 and walks counter-clockwise.
    assert_eq!(pan.palaces.get(Palace::Kun).spirit, Some(Spirit::ZhiFu));
    assert_eq!(pan.palaces.get(Palace::Li).spirit, Some(Spirit::TengShe));
    assert_eq!(pan.palaces.get(Palace::Dui).spirit, Some(Spirit::JiuTian));
}

/// Crossing 23:00 rolls the day pillar and with it the whole period:
/// 2025-11-05 21:43 and 23:30 sit in the same solar term yet produce
/// different Yuan, Ju, and hour decad.
#[test]
fn late_zi_changes_period() {
    let early = chart(
        Moment::new(2025, 11, 5, 21, 43).unwrap(),
        SolarTerm::ShuangJiang,
    );
    assert_eq!(early.day_pillar.value.to_string(), "戊寅");
    assert_eq!(early.hour_pillar.value.to_string(), "癸亥");
    assert_eq!(early.yuan.value, Yuan::Xia);
    assert_eq!(early.ju.value, 2);
    assert_eq!(early.xun_leader.value.to_string(), "甲寅");

    let late = chart(
        Moment::new(2025, 11, 5, 23, 30).unwrap(),
        SolarTerm::ShuangJiang,
    );
    assert_eq!(late.day_pillar.value.to_string(), "己卯");
    assert_eq!(late.hour_pillar.value.to_string(), "甲子");
    assert_eq!(late.yuan.value, Yuan::Shang);
    assert_eq!(late.ju.value, 5);
    assert_eq!(late.xun_leader.value.to_string(), "甲子");
    assert_eq!(
        [
            late.void_branches.value[0].symbol(),
            late.void_branches.value[1].symbol()
        ],
        ["戌", "亥"]
    );
}

/// A 甲-stem hour anchors through its Dun stem instead of failing.
#[test]
fn jia_hour_resolves_via_dun_stem() {
    let pan = chart(
        Moment::new(2025, 11, 5, 23, 30).unwrap(),
        SolarTerm::ShuangJiang,
    );
    // Hour 甲子: Dun stem 戊, seeded at 中→坤 for Ju 5.
    assert_eq!(pan.hour_pillar.value.stem, Stem::Jia);
    assert_eq!(pan.leading_star, Star::TianRui);
    assert_eq!(pan.leading_gate.value, Gate::Death);
}

/// The same moment processed twice yields field-for-field identical Pans.
#[test]
fn full_round_trip_identical() {
    let moment = Moment::new(1998, 9, 26, 11, 20).unwrap();
    let a = chart(moment, SolarTerm::QiuFen);
    let b = chart(moment, SolarTerm::QiuFen);
    assert_eq!(a, b);
    assert_eq!(a.to_string(), b.to_string());
}

/// The alternative 艮八宫 host policy moves the center's borrowings.
#[test]
fn gen_host_policy() {
    let moment = Moment::new(2008, 11, 4, 12, 30).unwrap();
    let options = ChartOptions {
        center_host: Palace::Gen,
        ..ChartOptions::default()
    };
    let pan = build_chart(&moment, &FixedTerm(SolarTerm::ShuangJiang), &options).unwrap();
    let center = pan.palaces.get(Palace::Zhong);
    let host = pan.palaces.get(Palace::Gen);
    assert!(center.borrowed);
    assert_eq!(center.earth_stems, host.earth_stems);
    assert_eq!(center.star, host.star);
}
