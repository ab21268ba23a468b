use super::*;

#[test]
fn move_then_line_applies_delta_for_uppercase_l() {
    // Uppercase L still accumulates a delta; that quirk is the contract.
    let pts = parse_path_points("M10 10 L5 5");
    assert_eq!(pts, vec![Point::new(10.0, 10.0), Point::new(15.0, 15.0)]);
}

#[test]
fn absolute_and_relative_move() {
    let pts = parse_path_points("M10 20 m1 2");
    assert_eq!(pts, vec![Point::new(10.0, 20.0), Point::new(11.0, 22.0)]);
}

#[test]
fn horizontal_and_vertical_accumulate() {
    let pts = parse_path_points("M1 1 H2 V3 h-1 v-1");
    assert_eq!(
        pts,
        vec![
            Point::new(1.0, 1.0),
            Point::new(3.0, 1.0),
            Point::new(3.0, 4.0),
            Point::new(2.0, 4.0),
            Point::new(2.0, 3.0),
        ]
    );
}

#[test]
fn cubic_emits_control_points_as_waypoints() {
    let pts = parse_path_points("M0 0 C1 2 3 4 5 6");
    assert_eq!(
        pts,
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(3.0, 4.0),
            Point::new(5.0, 6.0),
        ]
    );
}

#[test]
fn relative_cubic_resolves_against_current_point() {
    let pts = parse_path_points("M10 10 c1 1 2 2 3 3");
    assert_eq!(
        pts,
        vec![
            Point::new(10.0, 10.0),
            Point::new(11.0, 11.0),
            Point::new(12.0, 12.0),
            Point::new(13.0, 13.0),
        ]
    );
}

#[test]
fn quadratic_emits_control_point_and_endpoint() {
    let pts = parse_path_points("M0 0 Q1 2 3 4");
    assert_eq!(
        pts,
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(3.0, 4.0),
        ]
    );
}

#[test]
fn arc_emits_endpoint_only() {
    let pts = parse_path_points("M0 0 A5 5 0 0 1 10 10");
    assert_eq!(pts, vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);
}

#[test]
fn operand_groups_repeat_the_command() {
    let cmds = parse_commands("l1 2 3 4");
    assert_eq!(cmds.len(), 2);
    let pts = trace_points(&cmds);
    assert_eq!(pts, vec![Point::new(1.0, 2.0), Point::new(4.0, 6.0)]);
}

#[test]
fn unknown_letters_are_skipped() {
    let pts = parse_path_points("M1 1 Z X9 9 l1 0");
    assert_eq!(pts, vec![Point::new(1.0, 1.0), Point::new(2.0, 1.0)]);
}

#[test]
fn incomplete_trailing_operands_are_dropped() {
    // Second L pair is missing its y.
    let pts = parse_path_points("M0 0 L1 1 3");
    assert_eq!(pts, vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);

    // A cubic with five operands parses to nothing.
    assert_eq!(parse_commands("C1 2 3 4 5"), vec![]);
}

#[test]
fn garbage_degrades_to_empty() {
    assert!(parse_path_points("").is_empty());
    assert!(parse_path_points("not a path").is_empty());
    assert!(parse_path_points("1 2 3 4").is_empty());
}

#[test]
fn numbers_tokenize_by_pattern_not_whitespace() {
    // A sign starts a new number; a second decimal point starts a new number.
    let pts = parse_path_points("M10-5l1.5.5");
    assert_eq!(pts, vec![Point::new(10.0, -5.0), Point::new(11.5, -4.5)]);
}

#[test]
fn commas_separate_operands() {
    let pts = parse_path_points("M1,2l3,4");
    assert_eq!(pts, vec![Point::new(1.0, 2.0), Point::new(4.0, 6.0)]);
}

#[test]
fn lex_handles_bare_signs_and_dots() {
    assert_eq!(lex_numbers("- . -."), Vec::<f64>::new());
    assert_eq!(lex_numbers("-.5 5."), vec![-0.5, 5.0]);
}

#[test]
fn arc_flags_parse_as_booleans() {
    let cmds = parse_commands("a1 2 30 1 0 4 5");
    assert_eq!(
        cmds,
        vec![PathCommand::ArcTo {
            mode: CoordMode::Relative,
            rx: 1.0,
            ry: 2.0,
            x_axis_rotation: 30.0,
            large_arc: true,
            sweep: false,
            x: 4.0,
            y: 5.0,
        }]
    );
    assert_eq!(cmds[0].mode(), CoordMode::Relative);
}
