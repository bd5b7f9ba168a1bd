#![no_main]
use embedded_hal::i2c::SevenBitAddress;
use embedded_hal_fuzz::i2c::ArbitraryI2c;
use libfuzzer_sys::fuzz_target;
use ms5805::OverSamplingRatio;

fuzz_target!(|i2c: ArbitraryI2c<SevenBitAddress>| {
    let mut pressure_sensor = ms5805::new(i2c, ms5805::mock_utils::SleepNop);
    pressure_sensor.set_resolution(OverSamplingRatio::R4096);
    // We ignore the result as it is likely garbage. We don't care about
    // the result/error just if it crashes or not.
    let _ = pressure_sensor.read_temperature_and_pressure();
    let _ = pressure_sensor.read_temperature();
});
