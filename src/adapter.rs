//! Bridge to buses from the `display-interface` ecosystem.

use core::iter;

use display_interface::{DataFormat, DisplayError, WriteOnlyDataCommand};

use crate::Interface;

/// Drives the panel through any [`WriteOnlyDataCommand`] bus.
///
/// Such buses have no notion of re-latching, so [`Interface::strobe`] resends
/// the last data byte.
pub struct DisplayInterface<DI> {
    di: DI,
    last: u8,
}

impl<DI> DisplayInterface<DI>
where
    DI: WriteOnlyDataCommand,
{
    pub fn new(di: DI) -> Self {
        Self { di, last: 0 }
    }

    /// Releases the wrapped bus
    pub fn release(self) -> DI {
        self.di
    }
}

impl<DI> Interface for DisplayInterface<DI>
where
    DI: WriteOnlyDataCommand,
{
    type Error = DisplayError;

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.di.send_commands(DataFormat::U8(&[command]))
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        let last = match data.last() {
            Some(&last) => last,
            None => return Ok(()),
        };
        self.di.send_data(DataFormat::U8(data))?;
        self.last = last;
        Ok(())
    }

    fn strobe(&mut self, count: usize) -> Result<(), Self::Error> {
        let mut bytes = iter::repeat(self.last).take(count);
        self.di.send_data(DataFormat::U8Iter(&mut bytes))
    }

    fn write_words(&mut self, data: impl IntoIterator<Item = u16>) -> Result<(), Self::Error> {
        let mut last = None;
        {
            let mut words = data.into_iter().inspect(|w| last = Some(*w));
            self.di.send_data(DataFormat::U16BEIter(&mut words))?;
        }
        if let Some(w) = last {
            self.last = w.to_be_bytes()[1];
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use display_interface::{DataFormat, DisplayError, WriteOnlyDataCommand};

    use super::DisplayInterface;
    use crate::Interface;

    #[derive(Default)]
    struct Recorder {
        commands: Vec<u8>,
        data: Vec<u8>,
    }

    fn bytes(format: DataFormat<'_>) -> Result<Vec<u8>, DisplayError> {
        match format {
            DataFormat::U8(bytes) => Ok(bytes.to_vec()),
            DataFormat::U8Iter(iter) => Ok(iter.collect()),
            DataFormat::U16BEIter(iter) => Ok(iter.flat_map(u16::to_be_bytes).collect()),
            _ => Err(DisplayError::DataFormatNotImplemented),
        }
    }

    impl WriteOnlyDataCommand for Recorder {
        fn send_commands(&mut self, cmd: DataFormat<'_>) -> Result<(), DisplayError> {
            self.commands.extend(bytes(cmd)?);
            Ok(())
        }

        fn send_data(&mut self, buf: DataFormat<'_>) -> Result<(), DisplayError> {
            self.data.extend(bytes(buf)?);
            Ok(())
        }
    }

    #[test]
    fn commands_and_data_are_separated() {
        let mut iface = DisplayInterface::new(Recorder::default());
        iface.write(0x2a, &[0x00, 0x00, 0x01, 0x3f]).unwrap();
        iface.write_command(0x2c).unwrap();

        let recorder = iface.release();
        assert_eq!(recorder.commands, [0x2a, 0x2c]);
        assert_eq!(recorder.data, [0x00, 0x00, 0x01, 0x3f]);
    }

    #[test]
    fn words_then_strobe_repeat_low_byte() {
        let mut iface = DisplayInterface::new(Recorder::default());
        iface.write_words([0x1234, 0x5678]).unwrap();
        iface.strobe(3).unwrap();

        let recorder = iface.release();
        assert_eq!(recorder.data, [0x12, 0x34, 0x56, 0x78, 0x78, 0x78, 0x78]);
    }
}
