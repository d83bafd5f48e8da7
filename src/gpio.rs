use crate::{Error, Interface};
use embedded_hal::digital::OutputPin;

/// `Interface` implementation for 8-bit parallel (8080 MCU) buses driven by GPIO
///
/// Data is latched on the rising edge of WRX. The data lines keep their level
/// between writes, which is what makes [`Interface::strobe`] a pure WRX pulse
/// here.
pub struct Gpio8Interface<'a, PinE, CSX, WRX, RDX, DCX> {
	data_pins: [&'a mut dyn OutputPin<Error = PinE>; 8],
	csx: CSX,
	wrx: WRX,
	rdx: RDX,
	dcx: DCX,
	bus: Option<u8>,
}

impl<'a, PinE, CSX, WRX, RDX, DCX> Gpio8Interface<'a, PinE, CSX, WRX, RDX, DCX>
where
	PinE: embedded_hal::digital::Error,
	CSX: OutputPin<Error = PinE>,
	WRX: OutputPin<Error = PinE>,
	RDX: OutputPin<Error = PinE>,
	DCX: OutputPin<Error = PinE>,
{
	/// Create a new Gpio8Interface
	///
	/// Example useage:
	///
	/// let csx = gpiob.pb1.into_push_pull_output();
	/// let wrx = gpiob.pb4.into_push_pull_output();
	/// let rdx = gpiob.pb3.into_push_pull_output();
	/// let dcx = gpiob.pb5.into_push_pull_output();
	///
	/// let data_pins: [&mut dyn OutputPin<Error = _>; 8] = [
	/// 	&mut gpioa.pa0.into_push_pull_output(),
	/// 	&mut gpioa.pa1.into_push_pull_output(),
	/// 	...
	/// ];
	///
	/// let if_gpio = Gpio8Interface::new(data_pins, csx, wrx, rdx, dcx);
	pub fn new(
		data_pins: [&'a mut dyn OutputPin<Error = PinE>; 8],
		csx: CSX,
		wrx: WRX,
		rdx: RDX,
		dcx: DCX,
	) -> Self {
		Self {
			data_pins,
			csx,
			wrx,
			rdx,
			dcx,
			bus: None,
		}
	}

	/// Sets the gpio data pins used in the parallel interface
	///
	/// Pins are only driven when the byte differs from the one on the bus.
	fn set_data_bus(&mut self, data: u8) -> Result<(), Error<PinE, PinE>> {
		if self.bus == Some(data) {
			return Ok(());
		}
		// Unknown until every line is driven
		self.bus = None;
		for (i, d) in self.data_pins.iter_mut().enumerate() {
			if ((data >> i) & 0b1) == 0b1 {
				d.set_high().map_err(Error::OutputPin)?;
			} else {
				d.set_low().map_err(Error::OutputPin)?;
			}
		}
		self.bus = Some(data);
		Ok(())
	}

	fn begin(&mut self, data: bool) -> Result<(), Error<PinE, PinE>> {
		self.csx.set_low().map_err(Error::OutputPin)?;
		self.rdx.set_high().map_err(Error::OutputPin)?;
		if data {
			self.dcx.set_high().map_err(Error::OutputPin)
		} else {
			self.dcx.set_low().map_err(Error::OutputPin)
		}
	}

	fn end(&mut self) -> Result<(), Error<PinE, PinE>> {
		self.csx.set_high().map_err(Error::OutputPin)
	}

	fn write_byte(&mut self, byte: u8) -> Result<(), Error<PinE, PinE>> {
		self.wrx.set_low().map_err(Error::OutputPin)?;
		self.set_data_bus(byte)?;
		self.wrx.set_high().map_err(Error::OutputPin)
	}

	/// Releases the data pins and the control pins
	pub fn release(self) -> ([&'a mut dyn OutputPin<Error = PinE>; 8], CSX, WRX, RDX, DCX) {
		(self.data_pins, self.csx, self.wrx, self.rdx, self.dcx)
	}
}

impl<'a, PinE, CSX, WRX, RDX, DCX> Interface for Gpio8Interface<'a, PinE, CSX, WRX, RDX, DCX>
where
	PinE: embedded_hal::digital::Error,
	CSX: OutputPin<Error = PinE>,
	WRX: OutputPin<Error = PinE>,
	RDX: OutputPin<Error = PinE>,
	DCX: OutputPin<Error = PinE>,
{
	type Error = Error<PinE, PinE>;

	fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
		self.begin(false)?;
		self.write_byte(command)?;
		self.end()
	}

	fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
		self.begin(true)?;
		for &val in data {
			self.write_byte(val)?;
		}
		self.end()
	}

	fn strobe(&mut self, count: usize) -> Result<(), Self::Error> {
		self.begin(true)?;
		for _ in 0..count {
			self.wrx.set_low().map_err(Error::OutputPin)?;
			self.wrx.set_high().map_err(Error::OutputPin)?;
		}
		self.end()
	}

	fn write_words(&mut self, data: impl IntoIterator<Item = u16>) -> Result<(), Self::Error> {
		self.begin(true)?;
		for word in data {
			for b in word.to_be_bytes() {
				self.write_byte(b)?;
			}
		}
		self.end()
	}
}
