#![no_main]
use embedded_hal::i2c::SevenBitAddress;
use embedded_hal_fuzz::i2c::ArbitraryI2c;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|i2c: ArbitraryI2c<SevenBitAddress>| {
    let mut pressure_sensor = ms5805::new(i2c, ms5805::mock_utils::SleepNop);
    // We ignore the result/error as we only care about potential crashes.
    let _ = pressure_sensor.init();
});
