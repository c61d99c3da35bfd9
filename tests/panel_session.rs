//! End-to-end pass over the public surface: ladder configuration for a
//! two-ladder panel plus a full host command session.

use flydash_panel::{Builder, ButtonSensorConfig, Command, FrameDecoder, Report, RESERVED_PIN};

#[test]
fn two_ladder_panel_configuration() {
    // Main ladder carries four navigation buttons, the aux ladder two.
    let main = Builder::new()
        .pin(0)
        .levels(&[3100, 2090, 750, 120])
        .build()
        .unwrap();
    let aux = Builder::new().pin(1).levels(&[1120, 240]).build().unwrap();
    let spare = ButtonSensorConfig::default();

    assert_eq!(main.level_count(), 4);
    assert_eq!(main.levels(), &[3100, 2090, 750, 120]);
    assert_eq!(aux.raw_pin(), 1);
    assert_eq!(aux.levels(), &[1120, 240]);
    assert!(!spare.is_configured());
    assert_eq!(spare.raw_pin(), RESERVED_PIN);
}

#[test]
fn host_session_byte_stream() {
    let session = b"$CONNE#$ALTIT3500#$HEADI-12#$GROSP140#$AIRSP132#$DISCO#";

    let mut decoder = FrameDecoder::new();
    let mut commands = Vec::new();
    for &byte in session.iter() {
        if let Some(result) = decoder.push_byte(byte) {
            commands.push(result.expect("well formed session"));
        }
    }

    assert_eq!(
        commands,
        vec![
            Command::Connect,
            Command::Altitude(3500),
            Command::Heading(-12),
            Command::GroundSpeed(140),
            Command::AirSpeed(132),
            Command::Disconnect,
        ]
    );
}

#[test]
fn panel_reports_use_the_line_format() {
    let report = Report::new("HEADI", 348).unwrap();
    assert_eq!(report.encode().as_str(), "HEADI-348\n");
}
