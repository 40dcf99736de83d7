#![no_main]

use libfuzzer_sys::fuzz_target;
use tinct_style::{
    Hsl, Rgb, contrast_between, hex_to_hsl, hsl_to_hex, relative_luminance, smart_invert,
};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 1024 {
        return;
    }

    // Hex output keeps its shape for any input.
    let hex = hsl_to_hex(text);
    assert_eq!(hex.len(), 7, "hex {hex:?} from {text:?}");
    assert!(hex.starts_with('#'));
    assert!(hex[1..].bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));

    // Never panics, whatever the input.
    let _ = relative_luminance(text);
    let _ = hex_to_hsl(text);
    let _ = smart_invert(text);

    // Strictly valid input agrees with the lenient engine.
    if let Ok(hsl) = Hsl::parse(text) {
        assert_eq!(hsl.to_hex(), hex);
        let lum = relative_luminance(text);
        assert!((-1e-12..=1.0 + 1e-12).contains(&lum), "luminance {lum}");
        let ratio = contrast_between(text, "0 0 50");
        assert!((1.0..=21.0 + 1e-9).contains(&ratio), "ratio {ratio}");
    }
    if let Ok(rgb) = Rgb::from_hex(text) {
        assert_eq!(hex_to_hsl(text), rgb.to_hsl().to_string());
    }
});
