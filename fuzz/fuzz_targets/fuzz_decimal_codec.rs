#![no_main]

use libfuzzer_sys::fuzz_target;
use possession_proof::{DecimalCodec, DomainParameters, PublicKey, P256};

fuzz_target!(|text: &str| {
    let codec = DecimalCodec::new(&DomainParameters::<P256>::new());
    if let Ok(scalar) = codec.decode_scalar::<P256>(text) {
        assert_eq!(codec.encode_scalar::<P256>(&scalar), text);
    }
    let _ = PublicKey::<P256>::from_decimal_x(&codec, text);
});
