//! Snapshot tests for frame formatting used in logs.

use cansafe_can::CanFrame;
use insta::assert_snapshot;

#[test]
fn display_format() -> Result<(), Box<dyn std::error::Error>> {
    let frame = CanFrame::new(0, 0x164, &[0x00, 0x9C, 0x1F, 0x01, 0, 0, 0, 0xBC])?;
    assert_snapshot!(frame.to_string(), @"bus0 0x164 [8] 00 9C 1F 01 00 00 00 BC");

    let echo = CanFrame::new(2, 0xD3, &[0xAB; 7])?;
    assert_snapshot!(echo.to_string(), @"bus2 0x0d3 [7] AB AB AB AB AB AB AB");
    Ok(())
}

#[test]
fn debug_format() -> Result<(), Box<dyn std::error::Error>> {
    let frame = CanFrame::new(2, 0x161, &[1, 2])?;
    assert_snapshot!(format!("{frame:?}"), @"CanFrame { bus: 2, addr: 0x161, len: 2, data: [1, 2] }");
    Ok(())
}
