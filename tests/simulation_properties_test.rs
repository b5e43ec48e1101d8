//! Whole-run properties of the stratigraphy simulation
//!
//! These tests drive complete runs through the public API and check the
//! guarantees the event log and canvas must satisfy for any seed.

use strata::*;

const SEEDS: [u64; 8] = [1, 2, 3, 42, 99, 123, 2024, 31337];

/// A 400x400 configuration scaled down from the reference one
fn small_config() -> SimulationConfig {
    SimulationConfig::new()
        .with_dimensions(400, 400)
        .with_bottom_margin(120)
        .with_foundation_thickness(100..=110)
        .with_deposition_thickness(10..=30)
        .with_capping_thickness(100..=120)
        .with_intrusion_window(120, 280)
        .with_intrusion_band(140..=260)
}

#[test]
fn same_seed_produces_identical_output() {
    let a = StrataSimulation::new(42).run();
    let b = StrataSimulation::new(42).run();
    assert_eq!(a.canvas, b.canvas);
    assert_eq!(a.events, b.events);
    assert_eq!(a.events.messages(), b.events.messages());
}

#[test]
fn different_seeds_produce_different_logs() {
    let a = StrataSimulation::new(1).run();
    let b = StrataSimulation::new(2).run();
    assert_ne!(a.events, b.events);
}

#[test]
fn adjacent_layers_never_share_a_color() {
    for seed in SEEDS {
        let section = StrataSimulation::new(seed).run();
        let colors = section.events.layer_colors();
        for pair in colors.windows(2) {
            assert_ne!(pair[0], pair[1], "seed {seed}: repeated color {}", hex(pair[0]));
        }
    }
}

#[test]
fn every_layer_color_comes_from_the_palette() {
    for seed in SEEDS {
        let section = StrataSimulation::new(seed).run();
        for event in section.events.iter() {
            if let Some(color) = event.layer_color() {
                assert!(section.palette.rock_for(color).is_some());
            }
        }
    }
}

#[test]
fn bend_and_rotation_happen_at_most_once() {
    for seed in SEEDS {
        let section = StrataSimulation::new(seed).run();
        assert!(section.events.count("bend") <= 1, "seed {seed}");
        assert!(section.events.count("rotation") <= 1, "seed {seed}");
    }
}

#[test]
fn intrusions_only_fire_inside_height_window() {
    let config = SimulationConfig::new().with_probabilities(0.1, 0.1, 0.1, 0.5);
    for seed in SEEDS {
        let section = generate(config.clone(), seed).unwrap();
        for event in section.events.iter() {
            if let Event::Intrusion { cursor, .. } = event {
                assert!(300 < *cursor && *cursor < 700, "seed {seed}: intrusion at {cursor}");
            }
        }
    }
}

#[test]
fn log_starts_with_foundation_and_is_never_empty() {
    for seed in SEEDS {
        let section = StrataSimulation::new(seed).run();
        assert!(!section.events.is_empty());
        assert_eq!(section.events.events()[0].kind(), "foundation");
        assert_eq!(section.events.count("foundation"), 1);
        assert!(section.events.count("capping") <= 1);
    }
}

#[test]
fn cursor_only_rises_through_deformation() {
    let config = SimulationConfig::new().with_probabilities(0.3, 0.3, 0.3, 0.3);
    for seed in SEEDS {
        let mut sim = StrataSimulation::with_config(seed, config.clone()).unwrap();
        loop {
            let before = sim.cursor();
            let logged = sim.events().len();
            let phase = sim.step();
            let new_events = &sim.events().events()[logged..];

            let thickness: usize = new_events.iter().filter_map(Event::layer_thickness).sum();
            let raised: isize = new_events
                .iter()
                .map(|event| match event {
                    Event::Bend { direction, .. } => direction.cursor_adjustment(),
                    Event::Fault { offset, .. } => *offset as isize,
                    Event::Rotation { adjustment, .. } => *adjustment,
                    _ => 0,
                })
                .sum();

            let expected_max = before as isize - thickness as isize + raised;
            assert!(sim.cursor() as isize <= expected_max.max(0), "seed {seed}");
            assert!(sim.cursor() <= 1000);
            if raised == 0 {
                assert!(sim.cursor() <= before);
            }
            if phase == Phase::Done {
                break;
            }
        }
    }
}

#[test]
fn plain_deposition_builds_clean_horizontal_bands() {
    let config = SimulationConfig::new().without_deformation();
    for seed in SEEDS {
        let section = generate(config.clone(), seed).unwrap();
        let canvas = &section.canvas;

        for y in 0..canvas.height() {
            let row: Vec<Rgb> = canvas.row(y).collect();
            assert!(row[1..].iter().all(|&p| p == row[1]), "seed {seed}: row {y} is not uniform");
        }
        assert!(section.events.iter().all(Event::is_layer));
    }
}

#[test]
fn plain_deposition_log_has_expected_shape() {
    let config = SimulationConfig::new().without_deformation();
    for seed in SEEDS {
        let section = generate(config.clone(), seed).unwrap();
        let events = section.events.events();

        let foundation = events[0].layer_thickness().unwrap();
        assert!((270..=300).contains(&foundation));
        let capping = events.last().unwrap();
        assert_eq!(capping.kind(), "capping");
        assert!((270..=300).contains(&capping.layer_thickness().unwrap()));

        // The loop deposits exactly the gap between the foundation and the margin
        let deposited = &events[1..events.len() - 1];
        let total: usize = deposited.iter().filter_map(Event::layer_thickness).sum();
        let gap = 1000 - foundation - 300;
        assert_eq!(total, gap);
        assert!(deposited.len() >= gap.div_ceil(75));
        assert!(deposited.len() <= gap.div_ceil(25));
        assert!(deposited.iter().all(|e| e.kind() == "layer"));
        assert_eq!(events.len(), deposited.len() + 2);
    }
}

#[test]
fn always_firing_deformations_respect_latches() {
    let config = small_config().with_probabilities(1.0, 1.0, 1.0, 1.0).with_max_iterations(30);
    for seed in SEEDS {
        let section = generate(config.clone(), seed).unwrap();
        let events = section.events.events();

        assert_eq!(section.events.count("bend"), 1, "seed {seed}");
        assert_eq!(section.events.count("rotation"), 1, "seed {seed}");
        assert!(section.events.count("fault") >= 1);

        // Both one-shot operators fire during the first deposition pass
        assert_eq!(events[1].kind(), "layer");
        assert_eq!(events[2].kind(), "bend");
        assert_eq!(events[3].kind(), "fault");
        assert_eq!(events[4].kind(), "rotation");
        let capping = events.iter().position(|e| e.kind() == "capping");
        if let Some(capping) = capping {
            assert_eq!(capping, events.len() - 1);
        }
    }
}

#[test]
fn reference_config_with_every_operator_firing_terminates_quickly() {
    let config = SimulationConfig::new().with_probabilities(1.0, 1.0, 1.0, 1.0);
    let cap = config.iteration_cap();
    assert_eq!(cap, 56);

    for seed in SEEDS {
        let mut sim = StrataSimulation::with_config(seed, config.clone()).unwrap();
        let mut steps = 0;
        while sim.phase() != Phase::Done {
            sim.step();
            steps += 1;
            // Foundation and capping take one step each
            assert!(steps <= cap + 2, "seed {seed}: still {:?} after {steps} steps", sim.phase());
        }
        assert!(sim.state().iterations <= cap, "seed {seed}");
        assert_eq!(sim.events().count("bend"), 1, "seed {seed}");
        assert_eq!(sim.events().count("rotation"), 1, "seed {seed}");
    }
}

#[test]
fn output_canvas_matches_configured_size() {
    let section = generate(small_config(), 5).unwrap();
    assert_eq!(section.canvas.width(), 400);
    assert_eq!(section.canvas.height(), 400);
}
