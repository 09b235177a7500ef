#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: full L64Decoder::decode entry point.
//
// Besides looking for panics, asserts that the buffer length never changes
// and that a rejected buffer is left exactly as it was.
fuzz_target!(|data: &[u8]| {
    let mut buf = data.to_vec();
    match l64_decoder::L64Decoder::decode(&mut buf) {
        Ok(_) => assert_eq!(buf.len(), data.len()),
        Err(_) => assert_eq!(buf, data),
    }
});
