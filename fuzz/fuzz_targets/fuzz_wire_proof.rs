#![no_main]

use libfuzzer_sys::fuzz_target;
use possession_proof::{DecimalCodec, DomainParameters, Proof, WireProof, P256};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(wire) = WireProof::from_json(text) {
        let codec = DecimalCodec::new(&DomainParameters::<P256>::new());
        let _ = Proof::<P256>::from_wire(&wire, &codec);
    }
});
