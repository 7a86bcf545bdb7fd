//! End-to-end properties of board assembly across all variants.
//!
//! Every valid variant configuration must produce internally consistent
//! tables (unique resource identities, unique connector slot labels), and
//! the daughterboard/test rewiring must land exactly where the board data
//! says it does.

use basalt_boards::{
    load_board, Board, BoardError, BoardRequest, BoardVariant, ColorlightQmtech,
    ColorlightQmtechConfig, IoVoltage, QmtechXc7k325t, QmtechXc7k325tConfig, SodimmModule,
    VariantRequest, BOARD_NAMES,
};
use basalt_bsp::{pins, Direction, Resource};
use std::collections::BTreeSet;

/// All requests that every board is expected to accept.
fn valid_requests_for(name: &str) -> Vec<BoardRequest> {
    let mut requests = vec![BoardRequest::default()];
    match name {
        "colorlight_qmtech" => {
            for module in [SodimmModule::I5, SodimmModule::I9] {
                for (daughterboard, test) in [(false, false), (true, false), (false, true)] {
                    requests.push(BoardRequest {
                        variant: VariantRequest {
                            daughterboard,
                            test,
                        },
                        module: Some(module),
                        ..Default::default()
                    });
                }
            }
        }
        "qmtech_xc7k325t" => {
            requests.push(BoardRequest {
                variant: VariantRequest {
                    daughterboard: true,
                    test: false,
                },
                ..Default::default()
            });
        }
        "hpc_xc7k420t" => {
            for io_voltage in [IoVoltage::V2_5, IoVoltage::V3_3] {
                requests.push(BoardRequest {
                    io_voltage: Some(io_voltage),
                    ..Default::default()
                });
            }
        }
        _ => {}
    }
    requests
}

#[test]
fn resource_identities_unique_for_all_valid_variants() {
    for name in BOARD_NAMES {
        for request in valid_requests_for(name) {
            let board = load_board(name, request).unwrap();
            let mut seen = BTreeSet::new();
            for r in board.resources() {
                assert!(
                    seen.insert((r.kind.clone(), r.index)),
                    "{name}: duplicate ({}, {})",
                    r.kind,
                    r.index
                );
            }
        }
    }
}

#[test]
fn connector_labels_unique_for_all_valid_variants() {
    for name in BOARD_NAMES {
        for request in valid_requests_for(name) {
            let board = load_board(name, request).unwrap();
            let mut connector_ids = BTreeSet::new();
            for c in board.connectors() {
                assert!(connector_ids.insert(c.ident()), "{name}: duplicate {}", c.ident());
                let mut labels = BTreeSet::new();
                for label in c.labels() {
                    assert!(
                        labels.insert(label),
                        "{name} {}: duplicate slot pin {label}",
                        c.ident()
                    );
                }
            }
        }
    }
}

#[test]
fn exclusive_modes_rejected_everywhere() {
    let request = || BoardRequest {
        variant: VariantRequest {
            daughterboard: true,
            test: true,
        },
        ..Default::default()
    };
    for name in BOARD_NAMES {
        assert!(
            matches!(
                load_board(name, request()),
                Err(BoardError::IncompatibleVariants)
            ),
            "{name} accepted daughterboard+test"
        );
    }
}

#[test]
fn unsupported_voltage_rejected() {
    assert!(matches!(
        "1.2V".parse::<IoVoltage>(),
        Err(BoardError::UnsupportedVoltage(_))
    ));
    assert!(matches!(
        "".parse::<IoVoltage>(),
        Err(BoardError::UnsupportedVoltage(_))
    ));
}

#[test]
fn test_mode_led_is_the_connector_union() {
    let board = ColorlightQmtech::new(ColorlightQmtechConfig {
        module: SodimmModule::I5,
        variant: BoardVariant::ConnectorTest,
        extra_resources: Vec::new(),
    })
    .unwrap();

    let expected: Vec<String> = board.connectors()[0]
        .package_pins()
        .chain(board.connectors()[1].package_pins())
        .map(str::to_string)
        .collect();

    let led = board
        .resources()
        .iter()
        .find(|r| r.kind == "led")
        .expect("test mode must provide an led resource");
    assert_eq!(led.direct_pins().unwrap(), expected);

    // Non-LED resources keep their relative order from the base table.
    let others: Vec<&str> = board
        .resources()
        .iter()
        .filter(|r| r.kind != "led")
        .map(|r| r.kind.as_str())
        .collect();
    assert_eq!(others, vec!["clk25", "qspi_flash"]);
}

#[test]
fn daughterboard_mode_extends_connectors_and_renames_user_io() {
    let standalone = QmtechXc7k325t::new(QmtechXc7k325tConfig::default()).unwrap();
    let with_db = QmtechXc7k325t::new(QmtechXc7k325tConfig {
        variant: BoardVariant::Daughterboard,
        ..Default::default()
    })
    .unwrap();

    // Connector list is the base board's connectors plus the
    // daughterboard's, in that order.
    let base_idents: Vec<String> = standalone.connectors().iter().map(|c| c.ident()).collect();
    let db_idents: Vec<String> = with_db.connectors().iter().map(|c| c.ident()).collect();
    assert_eq!(db_idents[..base_idents.len()], base_idents[..]);
    assert_eq!(&db_idents[base_idents.len()..], &["pmod0", "pmod1"]);

    // Reserved user-IO indices are replaced by renamed core resources.
    assert_eq!(with_db.resources()[2].key(), ("core_led", 0));
    assert_eq!(with_db.resources()[3].key(), ("core_led", 1));
    assert_eq!(with_db.resources()[4].key(), ("core_button", 0));

    // The daughterboard's own user IO arrives on connector-relative pins.
    let led0 = with_db
        .resources()
        .iter()
        .find(|r| r.key() == ("led", 0))
        .unwrap();
    assert!(led0.direct_pins().unwrap()[0].starts_with("J_2:"));
}

#[test]
fn extra_resources_appended_after_assembly() {
    let extras = vec![
        Resource::new("probe", 0, pins("J_2:7", Direction::Bidir)),
        Resource::new("probe", 1, pins("J_2:9", Direction::Bidir)),
    ];
    let board = load_board(
        "qmtech_xc7k325t",
        BoardRequest {
            extra_resources: extras,
            ..Default::default()
        },
    )
    .unwrap();
    let n = board.resources().len();
    assert_eq!(board.resources()[n - 2].key(), ("probe", 0));
    assert_eq!(board.resources()[n - 1].key(), ("probe", 1));
}

#[test]
fn extra_resource_collision_rejected_on_every_board() {
    for name in BOARD_NAMES {
        let board = load_board(name, BoardRequest::default()).unwrap();
        let first = &board.resources()[0];
        let colliding = Resource::new(&first.kind, first.index, pins("A1", Direction::Input));
        let err = load_board(
            name,
            BoardRequest {
                extra_resources: vec![colliding],
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(
            matches!(err, BoardError::ExtraResourceCollision { .. }),
            "{name} accepted a colliding extra resource"
        );
    }
}

#[test]
fn programmer_templates_per_toolchain() {
    let trellis = load_board("colorlight_qmtech", BoardRequest::default()).unwrap();
    assert_eq!(trellis.programmer().args(), &["-m"]);

    for name in ["qmtech_xc7k325t", "hpc_xc7k420t"] {
        let board = load_board(name, BoardRequest::default()).unwrap();
        assert_eq!(board.programmer().args(), &["-v", "-c", "ft232"]);
    }
}
