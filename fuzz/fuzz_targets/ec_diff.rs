#![no_main]
// Feeds every generated input to the whole backend registry; a finding
// surfaces as a panic, which libFuzzer records as a crash.
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    ecdiff::fuzz_entry(data);
});
