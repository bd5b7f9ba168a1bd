use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use ms5805::{
    mock_utils::{SleepNop, SleepRecorder},
    OverSamplingRatio, SensorError, TemperaturePressure,
};

const ADDRESS: u8 = 0x76;

/// Datasheet example calibration, CRC nibble 0xB in word 0.
const PROM: [u16; 7] = [0xBB10, 0xB524, 0xABCD, 0x7183, 0x6CC2, 0x7B41, 0x6E05];

fn startup() -> Vec<I2cTransaction> {
    let mut transactions = vec![
        I2cTransaction::write(ADDRESS, vec![]),
        I2cTransaction::write(ADDRESS, vec![0x1E]),
    ];
    for (address, word) in (0u8..).zip(PROM) {
        transactions.push(I2cTransaction::write_read(
            ADDRESS,
            vec![0xA0 + address * 2],
            word.to_be_bytes().to_vec(),
        ));
    }
    transactions
}

fn measurement(osr_bits: u8) -> Vec<I2cTransaction> {
    vec![
        I2cTransaction::write(ADDRESS, vec![0x50 | osr_bits]),
        I2cTransaction::write_read(ADDRESS, vec![0x00], vec![0x7B, 0x41, 0x44]),
        I2cTransaction::write(ADDRESS, vec![0x40 | osr_bits]),
        I2cTransaction::write_read(ADDRESS, vec![0x00], vec![0x62, 0xA7, 0xA4]),
    ]
}

fn assert_datasheet_reading(reading: TemperaturePressure) {
    assert!((reading.temperature - 20.00).abs() < 0.01, "{reading:?}");
    assert!((reading.pressure - 1100.02).abs() < 0.01, "{reading:?}");
}

#[test]
fn init_and_read() {
    let mut transactions = startup();
    transactions.extend(measurement(0x0A));
    transactions.extend(measurement(0x00));
    let i2c = I2cMock::new(&transactions);

    let mut pressure_sensor = ms5805::new(i2c, SleepRecorder::new());
    assert!(pressure_sensor.is_connected());
    pressure_sensor.init().unwrap();

    assert_datasheet_reading(pressure_sensor.read_temperature_and_pressure().unwrap());
    pressure_sensor.set_resolution(OverSamplingRatio::R256);
    assert_datasheet_reading(pressure_sensor.read_temperature_and_pressure().unwrap());

    let (mut i2c, sleep) = pressure_sensor.release();
    // Reset, then two conversions at 8192 and two at 256.
    assert_eq!(sleep.elapsed_us(), 2800 + 2 * 17200 + 2 * 560);
    i2c.done();
}

#[test]
fn absent_sensor() {
    let nack = ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address);
    let i2c = I2cMock::new(&[
        I2cTransaction::write(ADDRESS, vec![]).with_error(nack),
        I2cTransaction::write(ADDRESS, vec![0x1E]).with_error(nack),
    ]);

    let mut pressure_sensor = ms5805::new(i2c, SleepNop);
    assert!(!pressure_sensor.is_connected());
    assert_eq!(pressure_sensor.init(), Err(SensorError::NoI2cAcknowledge));
    assert_eq!(pressure_sensor.coefficients(), None);

    let (mut i2c, _) = pressure_sensor.release();
    i2c.done();
}

#[test]
fn corrupted_prom_is_rejected() {
    let mut transactions = startup();
    // Skip the probe, corrupt C6.
    transactions.remove(0);
    transactions[7] = I2cTransaction::write_read(ADDRESS, vec![0xAC], vec![0x6E, 0x04]);
    let i2c = I2cMock::new(&transactions);

    let mut pressure_sensor = ms5805::new(i2c, SleepNop);
    match pressure_sensor.init() {
        Err(SensorError::CrcError { expected, got }) => {
            assert_eq!(expected, 0xB);
            assert_ne!(got, expected);
        }
        other => panic!("unexpected result {other:?}"),
    }
    assert!(pressure_sensor.coefficients().is_none());

    let (mut i2c, _) = pressure_sensor.release();
    i2c.done();
}
