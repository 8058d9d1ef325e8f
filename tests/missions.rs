// tests/missions.rs
use glam::DVec2;
use mars_rover::display;
use mars_rover::{ErrorKind, Heading, MarsRover, Mission, MissionReport, RoverConfig};

#[test]
fn test_mission_parse_composes_all_fields() {
    let mission = Mission::parse("5,5", "1, 2, n", "LMLMLMLMM").unwrap();
    assert_eq!(mission.bounds, DVec2::new(5.0, 5.0));
    assert_eq!(mission.start, DVec2::new(1.0, 2.0));
    assert_eq!(mission.heading, Heading::N);
    assert_eq!(mission.commands.len(), 9);
}

#[test]
fn test_mission_parse_reports_first_bad_field() {
    let err = Mission::parse("5,-1", "1,2,N", "M").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Negative);
    assert!(err.to_string().starts_with("Plateau height"));

    let err = Mission::parse("5,5", "1,2,Q", "M").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidDirection);

    let err = Mission::parse("5,5", ",2,N", "M").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyInput);
    assert!(err.to_string().starts_with("X coordinate"));
}

#[test]
fn test_run_reports_final_state() {
    let mut rover = MarsRover::default();
    let first = Mission::parse("5,5", "1,2,N", "LMLMLMLMM").unwrap();
    let report = rover.run(&first);
    assert_eq!(
        report,
        MissionReport {
            position: DVec2::new(1.0, 3.0),
            heading: Heading::N,
            bounds: DVec2::new(5.0, 5.0),
        }
    );

    // A second mission on the same rover starts from scratch.
    let second = Mission::parse("5,5", "3,3,E", "MMRMMRMRRM").unwrap();
    let report = rover.run(&second);
    assert_eq!(report.position, DVec2::new(5.0, 1.0));
    assert_eq!(report.heading, Heading::E);
}

#[test]
fn test_run_keeps_config_across_reset() {
    let mut rover = MarsRover::new(RoverConfig { step: 2.0 });
    let mission = Mission::parse("6,6", "0,0,E", "MM").unwrap();
    let report = rover.run(&mission);
    assert_eq!(report.position, DVec2::new(4.0, 0.0));
    assert_eq!(rover.config().step, 2.0);
}

#[test]
fn test_report_serializes_to_json() {
    let report = MissionReport {
        position: DVec2::new(1.0, 3.0),
        heading: Heading::N,
        bounds: DVec2::new(5.0, 5.0),
    };
    let json = serde_json::to_value(report).unwrap();
    assert_eq!(json["heading"], "N");
    assert_eq!(json["position"][0], 1.0);
    assert_eq!(json["position"][1], 3.0);
}

#[test]
fn test_display_lines() {
    assert_eq!(
        display::plateau_set(DVec2::new(5.0, 5.0)),
        "Plateau set to 5x5 (coordinates: 0,0 to 5,5)\n"
    );
    assert_eq!(
        display::rover_placed(DVec2::new(1.0, 2.5), Heading::E),
        "Rover positioned at (1,2.5) facing E\n"
    );

    let report = MissionReport {
        position: DVec2::new(1.0, 3.0),
        heading: Heading::W,
        bounds: DVec2::new(5.0, 5.0),
    };
    let text = display::mission_complete(&report);
    assert!(text.contains("Coordinates: (1, 3)"));
    assert!(text.contains("Direction: W (West)"));
    assert!(text.contains("Plateau: 5x5"));

    assert!(display::position_step().contains("N=North, E=East, S=South, W=West"));
    assert!(display::commands_step().contains("L = turn Left"));
}

#[test]
fn test_error_block_shows_message() {
    let err = Mission::parse_bounds("5").unwrap_err();
    let text = display::error_block(&err);
    assert!(text.contains("Invalid format: '5'"));
    assert!(text.ends_with("Let's try again...\n"));
}
