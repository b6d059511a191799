//! `sense`: read the robot's sensors once

use std::io::Write;

use finch_hal::{celsius_to_fahrenheit, HardwarePort, LightLevels, PortError};

use super::Context;
use crate::error::Result;

pub fn execute(ctx: &Context, out: &mut dyn Write) -> Result<()> {
    let mut finch = ctx.connect(true)?;
    let readings = read_sensors(&mut finch);
    finch.disconnect();
    let (celsius, lights) = readings?;

    writeln!(
        out,
        "temperature  {:.1} °F ({:.1} °C)",
        celsius_to_fahrenheit(celsius),
        celsius
    )?;
    writeln!(
        out,
        "light        left {}  right {}  average {}",
        lights.left,
        lights.right,
        lights.average()
    )?;
    Ok(())
}

fn read_sensors<P: HardwarePort>(
    port: &mut P,
) -> std::result::Result<(f64, LightLevels), PortError> {
    let celsius = port.read_temperature_celsius()?;
    let lights = port.read_lights()?;
    Ok((celsius, lights))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{context, output};

    #[test]
    fn test_sense_reports_configured_readings() {
        let (_temp_dir, mut ctx) = context();
        ctx.config.simulator.temperature_c = 20.0;
        ctx.config.simulator.left_light = 40;
        ctx.config.simulator.right_light = 60;

        let mut out = Vec::new();
        execute(&ctx, &mut out).unwrap();

        assert_eq!(
            output(out),
            "temperature  68.0 °F (20.0 °C)\nlight        left 40  right 60  average 50\n"
        );
    }

    #[test]
    fn test_sense_extreme_readings() {
        let (_temp_dir, mut ctx) = context();
        ctx.config.simulator.left_light = i32::MAX;
        ctx.config.simulator.right_light = 1;

        let mut out = Vec::new();
        execute(&ctx, &mut out).unwrap();

        assert!(output(out).ends_with("average 1073741824\n"));
    }
}
