//! # Getting started
//!
//! A platform agnostic driver for the [MS5805](https://www.te.com/usa-en/product-CAT-BLPS0014.html)
//! barometric pressure and temperature sensor from TE Connectivity.
//!
//! This driver reads the factory calibration out of the PROM, checks it
//! against the on-chip CRC4 and uses it to compensate the raw ADC samples
//! into degrees Celsius and millibar.
//!
//! ## Example
//! ```rust
//! # // NOTE: Use real i2c instance for your app.
//! # use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
//! # let i2c = I2cMock::new(&[I2cTransaction::write(0x76, vec![0x1E]),
//! #     I2cTransaction::write_read(0x76, vec![0xA0], vec![0xBB, 0x10]),
//! #     I2cTransaction::write_read(0x76, vec![0xA2], vec![0xB5, 0x24]),
//! #     I2cTransaction::write_read(0x76, vec![0xA4], vec![0xAB, 0xCD]),
//! #     I2cTransaction::write_read(0x76, vec![0xA6], vec![0x71, 0x83]),
//! #     I2cTransaction::write_read(0x76, vec![0xA8], vec![0x6C, 0xC2]),
//! #     I2cTransaction::write_read(0x76, vec![0xAA], vec![0x7B, 0x41]),
//! #     I2cTransaction::write_read(0x76, vec![0xAC], vec![0x6E, 0x05]),
//! #     I2cTransaction::write(0x76, vec![0b0101_1010]),
//! #     I2cTransaction::write_read(0x76, vec![0x00], vec![0x7B, 0x41, 0x44]),
//! #     I2cTransaction::write(0x76, vec![0b0100_1010]),
//! #     I2cTransaction::write_read(0x76, vec![0x00], vec![0x62, 0xA7, 0xA4]),
//! # ]);
//! use ms5805::mock_utils::SleepNop;
//! // NOTE: You should provide a real DelayNs implementation for this driver
//! // to work correctly.
//! let mut pressure_sensor = ms5805::new(i2c, SleepNop);
//! pressure_sensor.init().unwrap();
//! println!(
//!     "{:?}",
//!     pressure_sensor.read_temperature_and_pressure().unwrap()
//! );
//! # let (mut i2c, _) = pressure_sensor.release();
//! # i2c.done();
//! ```
//!
//! ## Features
//!
//! - `defmt`: log through [`defmt`](https://docs.rs/defmt) and derive
//!   `defmt::Format` on the public types.
//! - `log`: log through the [`log`](https://docs.rs/log) facade.

#![no_std]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Features \"defmt\" and \"log\" are mutually exclusive and cannot be enabled together");

#[cfg(test)]
#[macro_use]
extern crate std;

mod fmt;

use core::fmt::{Display, Formatter};
use embedded_hal::{
    delay::DelayNs,
    i2c::{ErrorKind, I2c},
};

/// Mock utils is a set of tools to aid in testing and documenting you should not
/// use any of the mocks defined in this module in your release binaries.
pub mod mock_utils {
    use embedded_hal::delay::DelayNs;

    /// A sleep implementation that does nothing and immediately exits. This is
    /// useful for testing and fuzzing.
    pub struct SleepNop;

    impl DelayNs for SleepNop {
        fn delay_ns(&mut self, _ns: u32) {
            // Nop
        }
    }

    /// A fake clock. Returns immediately but keeps a running total of every
    /// delay it was asked for.
    #[derive(Debug, Default)]
    pub struct SleepRecorder {
        elapsed_ns: u64,
    }

    impl SleepRecorder {
        pub fn new() -> Self {
            Self::default()
        }

        /// Total requested delay in microseconds.
        pub fn elapsed_us(&self) -> u64 {
            self.elapsed_ns / 1_000
        }
    }

    impl DelayNs for SleepRecorder {
        fn delay_ns(&mut self, ns: u32) {
            self.elapsed_ns += u64::from(ns);
        }

        fn delay_us(&mut self, us: u32) {
            self.elapsed_ns += u64::from(us) * 1_000;
        }

        fn delay_ms(&mut self, ms: u32) {
            self.elapsed_ns += u64::from(ms) * 1_000_000;
        }
    }
}


/// Generates a 4bit cyclic redundancy check as described in the datasheet.
///
/// `prom` holds the seven PROM words with the CRC nibble (the top 4 bits of
/// word 0) already cleared. A trailing zero word is appended internally.
///
/// The 4bit crc is stored in the 4 LSBs of the result.
pub fn crc4(prom: &[u16]) -> u8 {
    let mut n_remainder: u16 = 0;
    for byte in prom
        .iter()
        .chain([0u16].iter())
        .flat_map(|word| word.to_be_bytes())
    {
        n_remainder ^= byte as u16;
        for _ in 0..8 {
            if n_remainder & 0x8000 != 0 {
                n_remainder = (n_remainder << 1) ^ 0x3000;
            } else {
                n_remainder <<= 1;
            }
        }
    }
    ((n_remainder >> 12) & 0x000F) as u8
}

/// A catch all error for this driver.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// The sensor did not acknowledge its address. Check the wiring.
    NoI2cAcknowledge,
    /// An i2c transfer was started but failed.
    I2cTransferError,
    /// The PROM contents do not match the CRC stored alongside them.
    CrcError { expected: u8, got: u8 },
}

impl SensorError {
    fn from_i2c<E: embedded_hal::i2c::Error>(error: E) -> Self {
        match error.kind() {
            ErrorKind::NoAcknowledge(_) => SensorError::NoI2cAcknowledge,
            _ => SensorError::I2cTransferError,
        }
    }
}

impl Display for SensorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            SensorError::NoI2cAcknowledge => write!(f, "i2c address not acknowledged"),
            SensorError::I2cTransferError => write!(f, "i2c transfer error"),
            SensorError::CrcError { expected, got } => write!(
                f,
                "PROM crc mismatch: expected {expected:#x}, got {got:#x}"
            ),
        }
    }
}

const I2C_ADDRESS: u8 = 0x76;

/// Number of 16bit words in the PROM, CRC word included.
const PROM_WORDS: usize = 7;

/// Time for the PROM to be reloaded after a reset command.
const RESET_TIME_US: u32 = 2800;

/// Create a driver object. No i2c traffic happens until the sensor is used.
///
/// # Example
///
/// ```
/// // NOTE: Use real i2c instance for your app.
/// use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
/// use ms5805::mock_utils::SleepNop;
/// // NOTE: You should provide a real DelayNs implementation for this driver
/// // to work correctly.
/// let i2c = I2cMock::new(&[]);
/// let pressure_sensor = ms5805::new(i2c, SleepNop);
/// # let (mut i2c, _) = pressure_sensor.release();
/// # i2c.done();
/// ```
pub fn new<I2C: I2c, D: DelayNs>(i2c: I2C, sleep: D) -> Ms5805<I2C, D> {
    Ms5805 {
        i2c,
        sleep,
        calibration_data: None,
        over_sampling_ratio: OverSamplingRatio::default(),
    }
}

/// The oversampling ratio to use internal to the ADC. This is analogous to taking
/// n samples and then taking the average.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OverSamplingRatio {
    R256 = 0x0,
    R512 = 0x2,
    R1024 = 0x4,
    R2048 = 0x6,
    R4096 = 0x8,
    #[default]
    R8192 = 0xA,
}

impl OverSamplingRatio {
    /// Minimum time to wait between starting a conversion and reading the ADC.
    pub fn conversion_time_us(&self) -> u32 {
        use OverSamplingRatio::*;
        match *self {
            R256 => 560,
            R512 => 1100,
            R1024 => 2170,
            R2048 => 4320,
            R4096 => 8610,
            R8192 => 17200,
        }
    }
}

/// Which quantity the ADC should convert.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// D1 in the datasheet.
    Pressure,
    /// D2 in the datasheet.
    Temperature,
}

/// The factory calibration data as fetched from the PROM. Fields are the
/// coefficients C1 to C6 of the datasheet.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FactoryCalibrationData {
    /// C1, SENS_T1
    pub pressure_sensitivity: u16,
    /// C2, OFF_T1
    pub pressure_offset: u16,
    /// C3, TCS
    pub temperature_coefficient_of_pressure_sensitivity: u16,
    /// C4, TCO
    pub temperature_coefficient_of_pressure_offset: u16,
    /// C5, T_REF
    pub reference_temperature: u16,
    /// C6, TEMPSENS
    pub temperature_coefficient_of_temperature: u16,
}

/// An I2C command to send to the pressure sensor.
enum Command {
    Reset,
    ConvertD1(OverSamplingRatio),
    ConvertD2(OverSamplingRatio),
    AdcRead,
    PromRead(u8),
}

/// Convert the command into a single byte that can be sent over i2c.
impl From<Command> for u8 {
    fn from(val: Command) -> u8 {
        use Command::*;
        match val {
            Reset => 0x1E,
            ConvertD1(osr) => 0x40u8 | osr as u8,
            ConvertD2(osr) => 0x50u8 | osr as u8,
            AdcRead => 0x00,
            PromRead(address) => 0xA0u8 | (address << 1),
        }
    }
}

/// A temperature and pressure pair. These are grouped as pressure
/// compensation requires sampling the current temperature.
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperaturePressure {
    /// Degrees Celsius.
    pub temperature: f32,
    /// Millibar.
    pub pressure: f32,
}

/// First order terms in the sensor's fixed point units.
#[derive(Debug, PartialEq)]
struct FirstOrder {
    dt: i64,
    /// Hundredths of a degree C.
    temperature: i64,
    offset: i64,
    sensitivity: i64,
}

/// Second order corrections, subtracted from the first order terms.
#[derive(Debug, Default, PartialEq)]
struct SecondOrder {
    temperature: i64,
    offset: i64,
    sensitivity: i64,
}

fn first_order(raw_temperature: u32, calibration_data: &FactoryCalibrationData) -> FirstOrder {
    let FactoryCalibrationData {
        pressure_sensitivity,
        pressure_offset,
        temperature_coefficient_of_pressure_sensitivity,
        temperature_coefficient_of_pressure_offset,
        reference_temperature,
        temperature_coefficient_of_temperature,
    } = *calibration_data;
    let (
        pressure_sensitivity,
        pressure_offset,
        temperature_coefficient_of_pressure_sensitivity,
        temperature_coefficient_of_pressure_offset,
        reference_temperature,
        temperature_coefficient_of_temperature,
    ): (i64, i64, i64, i64, i64, i64) = (
        pressure_sensitivity.into(),
        pressure_offset.into(),
        temperature_coefficient_of_pressure_sensitivity.into(),
        temperature_coefficient_of_pressure_offset.into(),
        reference_temperature.into(),
        temperature_coefficient_of_temperature.into(),
    );

    // dT = D2 - T_REF
    let dt = i64::from(raw_temperature) - (reference_temperature << 8);

    FirstOrder {
        dt,
        // Actual temperature = 2000 + dT * TEMPSENS
        temperature: 2000 + ((dt * temperature_coefficient_of_temperature) >> 23),
        // OFF = OFF_T1 + TCO * dT
        offset: (pressure_offset << 17) + ((temperature_coefficient_of_pressure_offset * dt) >> 6),
        // SENS = SENS_T1 + TCS * dT
        sensitivity: (pressure_sensitivity << 16)
            + ((temperature_coefficient_of_pressure_sensitivity * dt) >> 7),
    }
}

/// Low temperature compensation, only applied below 20 degC.
fn second_order(dt: i64, temperature: i64) -> SecondOrder {
    if temperature >= 2000 {
        return SecondOrder::default();
    }

    let mut correction = SecondOrder {
        temperature: (3 * dt.pow(2)) >> 33,
        offset: 61 * (temperature - 2000).pow(2) / 16,
        sensitivity: 29 * (temperature - 2000).pow(2) / 16,
    };
    if temperature < -1500 {
        correction.offset += 17 * (temperature + 1500).pow(2);
        correction.sensitivity += 9 * (temperature + 1500).pow(2);
    }
    correction
}

/// Compensates raw ADC counts into degrees C and mbar.
///
/// `raw_temperature` and `raw_pressure` are the D2 and D1 samples of the
/// datasheet. Intermediate arithmetic is done in 64bit fixed point, only the
/// final scaling into physical units is floating point.
///
/// # Example
///
/// ```
/// use ms5805::{compensate, FactoryCalibrationData};
/// let calibration_data = FactoryCalibrationData {
///     pressure_sensitivity: 46372,
///     pressure_offset: 43981,
///     temperature_coefficient_of_pressure_sensitivity: 29059,
///     temperature_coefficient_of_pressure_offset: 27842,
///     reference_temperature: 31553,
///     temperature_coefficient_of_temperature: 28165,
/// };
/// let reading = compensate(8077636, 6465444, &calibration_data);
/// assert!((reading.temperature - 20.00).abs() < 0.01);
/// assert!((reading.pressure - 1100.02).abs() < 0.01);
/// ```
pub fn compensate(
    raw_temperature: u32,
    raw_pressure: u32,
    calibration_data: &FactoryCalibrationData,
) -> TemperaturePressure {
    let first = first_order(raw_temperature, calibration_data);
    let second = second_order(first.dt, first.temperature);

    let temperature = first.temperature - second.temperature;
    let offset = first.offset - second.offset;
    let sensitivity = first.sensitivity - second.sensitivity;

    // Temperature compensated pressure = D1 * SENS - OFF
    let pressure = (((i64::from(raw_pressure) * sensitivity) >> 21) - offset) >> 15;

    TemperaturePressure {
        temperature: (temperature as f32) / 100.0,
        pressure: (pressure as f32) / 100.0,
    }
}

/// An ms5805 driver object. Owns the i2c handle, the delay and the cached
/// factory calibration.
pub struct Ms5805<I2C, D> {
    i2c: I2C,
    sleep: D,
    calibration_data: Option<FactoryCalibrationData>,
    over_sampling_ratio: OverSamplingRatio,
}

impl<I2C: I2c, D: DelayNs> Ms5805<I2C, D> {
    /// Releases the i2c handle and delay consuming the driver object.
    ///
    /// # Example
    ///
    /// ```
    /// // NOTE: Use real i2c instance for your app.
    /// use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    /// // Dummy sleep implementation.
    /// use ms5805::mock_utils::SleepNop;
    /// let i2c = I2cMock::new(&[]);
    /// let pressure_sensor = ms5805::new(i2c, SleepNop);
    /// let (mut i2c, _) = pressure_sensor.release();
    /// # i2c.done();
    /// ```
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.sleep)
    }

    /// Checks whether the sensor acknowledges its address.
    pub fn is_connected(&mut self) -> bool {
        self.i2c.write(I2C_ADDRESS, &[]).is_ok()
    }

    /// Reset the ms5805 internal state machine and reload the PROM.
    pub fn reset(&mut self) -> Result<(), SensorError> {
        debug!("ms5805: reset");
        self.i2c
            .write(I2C_ADDRESS, &[Command::Reset.into()])
            .map_err(SensorError::from_i2c)?;
        self.sleep.delay_us(RESET_TIME_US);
        Ok(())
    }

    /// Resets the sensor and loads the factory calibration data.
    ///
    /// # Errors
    /// Initialisation can fail if;
    /// - There was a problem communicating over i2c.
    /// - There was a crc mismatch when reading factory calibration data off the
    ///   PROM.
    ///
    /// # Example
    ///
    /// ```rust
    /// // NOTE: Use real i2c instance for your app.
    /// # use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    /// # let i2c = I2cMock::new(&[I2cTransaction::write(0x76, vec![0x1E]),
    /// #     I2cTransaction::write_read(0x76, vec![0xA0], vec![0x6F, 0xA6]),
    /// #     I2cTransaction::write_read(0x76, vec![0xA2], vec![0x8E, 0x00]),
    /// #     I2cTransaction::write_read(0x76, vec![0xA4], vec![0x4F, 0x68]),
    /// #     I2cTransaction::write_read(0x76, vec![0xA6], vec![0x57, 0x52]),
    /// #     I2cTransaction::write_read(0x76, vec![0xA8], vec![0x66, 0x22]),
    /// #     I2cTransaction::write_read(0x76, vec![0xAA], vec![0x66, 0x22]),
    /// #     I2cTransaction::write_read(0x76, vec![0xAC], vec![0x66, 0x22])
    /// # ]);
    /// use ms5805::mock_utils::SleepNop;
    /// let mut pressure_sensor = ms5805::new(i2c, SleepNop);
    /// pressure_sensor.init().unwrap();
    /// # let (mut i2c, _) = pressure_sensor.release();
    /// # i2c.done();
    /// ```
    pub fn init(&mut self) -> Result<(), SensorError> {
        self.reset()?;
        self.load_coefficients()?;
        Ok(())
    }

    /// Selects the oversampling ratio used by subsequent readings.
    pub fn set_resolution(&mut self, over_sampling_ratio: OverSamplingRatio) {
        self.over_sampling_ratio = over_sampling_ratio;
    }

    /// The oversampling ratio used by readings.
    pub fn resolution(&self) -> OverSamplingRatio {
        self.over_sampling_ratio
    }

    /// The cached factory calibration data, if it has been loaded.
    pub fn coefficients(&self) -> Option<&FactoryCalibrationData> {
        self.calibration_data.as_ref()
    }

    /// Read the contents of the PROM.
    fn read_prom(&mut self, prom: &mut [u16; PROM_WORDS]) -> Result<(), SensorError> {
        for (prom_address, entry) in (0u8..).zip(prom.iter_mut()) {
            let mut buffer = [0, 0];
            self.i2c
                .write_read(
                    I2C_ADDRESS,
                    &[Command::PromRead(prom_address).into()],
                    &mut buffer,
                )
                .map_err(SensorError::from_i2c)?;
            *entry = u16::from_be_bytes(buffer);
            trace!("ms5805: prom[{}] = {:#x}", prom_address, *entry);
        }
        Ok(())
    }

    /// Reads the PROM, checks its crc and caches the factory calibration data.
    ///
    /// The cache is only replaced when the crc matches.
    pub fn load_coefficients(&mut self) -> Result<&FactoryCalibrationData, SensorError> {
        let mut prom = [0u16; PROM_WORDS];
        self.read_prom(&mut prom)?;
        let expected = ((0xF000 & prom[0]) >> 12) as u8;
        prom[0] &= 0x0FFF;
        let got = crc4(&prom);
        if expected != got {
            warn!("ms5805: PROM crc mismatch, expected {} got {}", expected, got);
            return Err(SensorError::CrcError { expected, got });
        }
        let calibration_data: &FactoryCalibrationData =
            self.calibration_data.insert(FactoryCalibrationData {
                pressure_sensitivity: prom[1],
                pressure_offset: prom[2],
                temperature_coefficient_of_pressure_sensitivity: prom[3],
                temperature_coefficient_of_pressure_offset: prom[4],
                reference_temperature: prom[5],
                temperature_coefficient_of_temperature: prom[6],
            });
        Ok(calibration_data)
    }

    /// Starts a conversion and reads back the raw 24bit ADC sample.
    ///
    /// A sample of 0 means the conversion did not complete and is reported as
    /// [`SensorError::I2cTransferError`].
    pub fn start_conversion(
        &mut self,
        channel: Channel,
        over_sampling_ratio: OverSamplingRatio,
    ) -> Result<u32, SensorError> {
        trace!("ms5805: convert {:?} at {:?}", channel, over_sampling_ratio);
        let command = match channel {
            Channel::Pressure => Command::ConvertD1(over_sampling_ratio),
            Channel::Temperature => Command::ConvertD2(over_sampling_ratio),
        };
        self.i2c
            .write(I2C_ADDRESS, &[command.into()])
            .map_err(SensorError::from_i2c)?;
        self.sleep.delay_us(over_sampling_ratio.conversion_time_us());

        let mut raw_buffer = [0u8; 4];
        self.i2c
            .write_read(
                I2C_ADDRESS,
                &[Command::AdcRead.into()],
                // ADC is 24bit but we are storing in u32.
                &mut raw_buffer[1..],
            )
            .map_err(SensorError::from_i2c)?;
        // The ADC reads back 0 when the conversion was not finished or got
        // interrupted.
        match u32::from_be_bytes(raw_buffer) {
            0 => Err(SensorError::I2cTransferError),
            raw => Ok(raw),
        }
    }

    fn calibration_data_or_load(&mut self) -> Result<FactoryCalibrationData, SensorError> {
        match self.calibration_data {
            Some(calibration_data) => Ok(calibration_data),
            None => self.load_coefficients().copied(),
        }
    }

    /// Reads the temperature and pressure samples from the sensor.
    ///
    /// Loads the factory calibration first if that has not happened yet, so a
    /// bad PROM is reported before any conversion is started.
    ///
    /// # Errors
    /// This may return an error if there is a problem with i2c communication
    /// or the PROM fails its crc check.
    ///
    /// # Example
    ///
    /// ```rust
    /// # // NOTE: Use real i2c instance for your app.
    /// # use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    /// # let i2c = I2cMock::new(&[
    /// #     I2cTransaction::write_read(0x76, vec![0xA0], vec![0xBB, 0x10]),
    /// #     I2cTransaction::write_read(0x76, vec![0xA2], vec![0xB5, 0x24]),
    /// #     I2cTransaction::write_read(0x76, vec![0xA4], vec![0xAB, 0xCD]),
    /// #     I2cTransaction::write_read(0x76, vec![0xA6], vec![0x71, 0x83]),
    /// #     I2cTransaction::write_read(0x76, vec![0xA8], vec![0x6C, 0xC2]),
    /// #     I2cTransaction::write_read(0x76, vec![0xAA], vec![0x7B, 0x41]),
    /// #     I2cTransaction::write_read(0x76, vec![0xAC], vec![0x6E, 0x05]),
    /// #     I2cTransaction::write(0x76, vec![0b0101_1000]),
    /// #     I2cTransaction::write_read(0x76, vec![0x00], vec![0x7B, 0x41, 0x44]),
    /// #     I2cTransaction::write(0x76, vec![0b0100_1000]),
    /// #     I2cTransaction::write_read(0x76, vec![0x00], vec![0x62, 0xA7, 0xA4]),
    /// # ]);
    /// use ms5805::{OverSamplingRatio, mock_utils::SleepNop};
    /// let mut pressure_sensor = ms5805::new(i2c, SleepNop);
    /// pressure_sensor.set_resolution(OverSamplingRatio::R4096);
    /// let reading = pressure_sensor.read_temperature_and_pressure().unwrap();
    /// println!("{} deg C, {} mbar", reading.temperature, reading.pressure);
    /// # let (mut i2c, _) = pressure_sensor.release();
    /// # i2c.done();
    /// ```
    pub fn read_temperature_and_pressure(&mut self) -> Result<TemperaturePressure, SensorError> {
        let calibration_data = self.calibration_data_or_load()?;
        // Temperature first, pressure compensation depends on it.
        let temperature = self.start_conversion(Channel::Temperature, self.over_sampling_ratio)?;
        let pressure = self.start_conversion(Channel::Pressure, self.over_sampling_ratio)?;

        let reading = compensate(temperature, pressure, &calibration_data);
        debug!(
            "ms5805: {} degC {} mbar",
            reading.temperature, reading.pressure
        );
        Ok(reading)
    }

    /// Reads the temperature from the sensor in degrees C.
    ///
    /// # Errors
    /// This may return an error if there is a problem with i2c communication
    /// or the PROM fails its crc check.
    pub fn read_temperature(&mut self) -> Result<f32, SensorError> {
        let calibration_data = self.calibration_data_or_load()?;
        let raw_temperature =
            self.start_conversion(Channel::Temperature, self.over_sampling_ratio)?;
        let first = first_order(raw_temperature, &calibration_data);
        let second = second_order(first.dt, first.temperature);
        Ok(((first.temperature - second.temperature) as f32) / 100.0)
    }
}
