use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::{Command, Error, Ili9341, Interface, Orientation};

/// Vendor power and driver-timing registers, sent before the orientation.
const POWER_SEQUENCE: &[(u8, &[u8])] = &[
    (0xef, &[0x03, 0x80, 0x02]),
    // Power control B
    (0xcf, &[0x00, 0xc1, 0x30]),
    // Power on sequence control
    (0xed, &[0x64, 0x03, 0x12, 0x81]),
    // Driver timing control A
    (0xe8, &[0x85, 0x00, 0x78]),
    // Power control A
    (0xcb, &[0x39, 0x2c, 0x00, 0x34, 0x02]),
    // Pump ratio control
    (0xf7, &[0x20]),
    // Driver timing control B
    (0xea, &[0x00, 0x00]),
    // VRH[5:0]
    (Command::PowerControl1 as u8, &[0x23]),
    // SAP[2:0], BT[3:0]
    (Command::PowerControl2 as u8, &[0x10]),
    (Command::VcomControl1 as u8, &[0x3e, 0x28]),
    (Command::VcomControl2 as u8, &[0x86]),
];

/// Pixel format, frame rate and gamma registers, sent after the orientation.
const PANEL_SEQUENCE: &[(u8, &[u8])] = &[
    // 16 bits per pixel
    (Command::PixelFormatSet as u8, &[0x55]),
    // 0x13: 100Hz, 0x18: 79Hz, 0x1b: 70Hz (reset default)
    (Command::FrameRateControl as u8, &[0x00, 0x13]),
    (Command::DisplayFunctionControl as u8, &[0x08, 0x82, 0x27]),
    // 3-gamma function disable
    (0xf2, &[0x00]),
    (Command::GammaSet as u8, &[0x01]),
    (
        Command::PositiveGammaCorrection as u8,
        &[
            0x0f, 0x31, 0x2b, 0x0c, 0x0e, 0x08, 0x4e, 0xf1, 0x37, 0x07, 0x10, 0x03, 0x0e, 0x09,
            0x00,
        ],
    ),
    (
        Command::NegativeGammaCorrection as u8,
        &[
            0x00, 0x0e, 0x14, 0x03, 0x11, 0x07, 0x31, 0xc1, 0x48, 0x08, 0x0f, 0x0c, 0x31, 0x36,
            0x0f,
        ],
    ),
];

impl<IFACE, RESET> Ili9341<IFACE, RESET>
where
    IFACE: Interface,
    RESET: OutputPin,
{
    /// Pulses the reset line: high, low, then high again for normal operation
    pub fn hard_reset<DELAY: DelayNs>(
        &mut self,
        delay: &mut DELAY,
    ) -> Result<(), Error<IFACE::Error, RESET::Error>> {
        debug!("ili9341: hardware reset");
        self.reset.set_high().map_err(Error::OutputPin)?;
        delay.delay_ms(self.timing.reset_settle_ms);
        self.reset.set_low().map_err(Error::OutputPin)?;
        delay.delay_ms(self.timing.reset_pulse_ms);
        self.reset.set_high().map_err(Error::OutputPin)?;
        delay.delay_ms(self.timing.reset_recovery_ms);
        Ok(())
    }
}

impl<IFACE, RESET> Ili9341<IFACE, RESET>
where
    IFACE: Interface,
{
    /// Sends the power-on register sequence, wakes the panel and turns it on.
    ///
    /// Leaves the panel in [`Orientation::Landscape`].
    pub fn init<DELAY: DelayNs>(&mut self, delay: &mut DELAY) -> Result<(), IFACE::Error> {
        debug!("ili9341: init sequence");
        for &(command, args) in POWER_SEQUENCE {
            self.interface.write(command, args)?;
        }
        self.set_orientation(Orientation::Landscape)?;
        for &(command, args) in PANEL_SEQUENCE {
            self.interface.write(command, args)?;
        }

        self.interface.write_command(Command::SleepOut as u8)?;
        delay.delay_ms(self.timing.sleep_out_ms);

        self.interface.write_command(Command::DisplayOn as u8)?;
        delay.delay_ms(self.timing.display_on_ms);
        Ok(())
    }
}
