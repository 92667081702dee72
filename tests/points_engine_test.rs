//! Scoring rules of the points engine, exercised through the public API

use fpl_xpts::{
    fpl::{
        compute::{
            calculate_base_points, calculate_expected_points_breakdown, calculate_other_points,
            calculate_points_breakdown,
        },
        report::build_stats_report,
        types::{RawDecimal, RawPlayerStats},
    },
    BasePoints, PointsBreakdown, Position, XptsError,
};

fn stats(minutes: u32, goals: u32, assists: u32, clean_sheets: u32, total: i32) -> RawPlayerStats {
    RawPlayerStats {
        minutes,
        goals_scored: goals,
        assists,
        clean_sheets,
        total_points: total,
        ..Default::default()
    }
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_forward_two_goals_one_assist() {
        let s = stats(90, 2, 1, 0, 11);

        let base = calculate_base_points(&s, Position::Forward);
        assert_eq!(
            base,
            BasePoints {
                goals: 8,
                assists: 3,
                clean_sheets: 0
            }
        );
        assert_eq!(calculate_other_points(11, &base), 0);
        assert_eq!(
            calculate_points_breakdown(11, &s, Position::Forward),
            PointsBreakdown {
                goals: 8,
                assists: 3,
                clean_sheets: 0,
                other: 0,
                total: 11
            }
        );
    }

    #[test]
    fn test_goalkeeper_under_sixty_minutes_gets_no_clean_sheet() {
        let s = stats(45, 0, 0, 1, 2);

        let base = calculate_base_points(&s, Position::Goalkeeper);
        assert_eq!(base, BasePoints::default());
        assert_eq!(calculate_other_points(2, &base), 2);
    }

    #[test]
    fn test_defender_expected_rounding() {
        let mut s = stats(90, 0, 0, 0, 2);
        s.expected_goals = Some(RawDecimal::from("0.8"));
        s.expected_assists = Some(RawDecimal::from("0.3"));

        let actual = calculate_points_breakdown(2, &s, Position::Defender);
        let expected = calculate_expected_points_breakdown(&s, Position::Defender, &actual);
        assert_eq!(expected.goals, 6);
        assert_eq!(expected.assists, 0);

        let report = build_stats_report(&s, Position::Defender);
        assert_eq!(report.expected.stats.expected_goals, 1);
        assert_eq!(report.expected.stats.expected_assists, 0);
        assert_eq!(report.expected.stats.raw_xg, 0.8);
        assert_eq!(report.expected.stats.raw_xa, 0.3);
    }

    #[test]
    fn test_unknown_element_type_is_reported() {
        match Position::from_element_type(0) {
            Err(XptsError::InvalidPositionCode { code }) => assert_eq!(code, 0),
            other => panic!("expected InvalidPositionCode, got {other:?}"),
        }
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;

    fn sample_stats() -> Vec<RawPlayerStats> {
        let mut samples = Vec::new();
        for minutes in [0, 30, 59, 60, 90, 1800] {
            for goals in [0, 1, 3] {
                for assists in [0, 2] {
                    for clean_sheets in [0, 1, 5] {
                        for total in [-3, 0, 2, 14, 120] {
                            samples.push(stats(minutes, goals, assists, clean_sheets, total));
                        }
                    }
                }
            }
        }
        samples
    }

    #[test]
    fn test_residual_identity_for_all_positions() {
        for s in sample_stats() {
            for pos in Position::ALL {
                let b = calculate_points_breakdown(s.total_points, &s, pos);
                assert_eq!(
                    b.goals + b.assists + b.clean_sheets + b.other,
                    b.total,
                    "{pos} {s:?}"
                );
                assert_eq!(b.total, s.total_points);
            }
        }
    }

    #[test]
    fn test_no_clean_sheet_points_below_sixty_minutes() {
        for s in sample_stats().into_iter().filter(|s| s.minutes < 60) {
            for pos in Position::ALL {
                assert_eq!(calculate_base_points(&s, pos).clean_sheets, 0);
            }
        }
    }

    #[test]
    fn test_assist_value_is_three_everywhere() {
        let s = stats(90, 0, 1, 0, 0);
        for pos in Position::ALL {
            assert_eq!(calculate_base_points(&s, pos).assists, 3);
        }
    }

    #[test]
    fn test_expected_keeps_actual_clean_sheets_and_other() {
        for s in sample_stats() {
            let mut s = s;
            s.expected_goals = Some(RawDecimal::from(1.49));
            s.expected_assists = Some(RawDecimal::from("2.5"));
            for pos in Position::ALL {
                let actual = calculate_points_breakdown(s.total_points, &s, pos);
                let expected = calculate_expected_points_breakdown(&s, pos, &actual);

                assert_eq!(expected.clean_sheets, actual.clean_sheets);
                assert_eq!(expected.other, actual.other);
                assert_eq!(expected.goals, pos.goal_points());
                assert_eq!(expected.assists, 9);
            }
        }
    }

    #[test]
    fn test_position_mapping_is_bijective() {
        let positions: Vec<Position> = (1..=4)
            .map(|code| Position::from_element_type(code).unwrap())
            .collect();
        assert_eq!(positions, Position::ALL.to_vec());

        for code in [-5, 0, 5, 6, 100] {
            assert!(Position::from_element_type(code).is_err());
        }
    }
}
