//! Morphological sequence regression test
//!
//! Tests:
//!   (1) Each sequence op matches the direct function call
//!   (2) Composite sequences: closing plus white top-hat, h-dome after closing
//!   (3) Spectrum helpers agree with the sequence interpreter
//!
//! Run with:
//! ```
//! cargo test -p morphomath-morph --test morphseq_reg
//! ```

use morphomath_morph::{
    StructuringElement, bottom_hat, close, dilate, erode, gradient, h_dome, morph_sequence, open,
    prominent_peak, quantize_decibels, spectrum_h_dome, top_hat,
};
use morphomath_test::{RegParams, signal};

#[test]
fn morphseq_reg() {
    let mut rp = RegParams::new("morphseq");

    let f = signal("4 9 3 3 15 2 8 8 8 1 0 6 11 2").unwrap();
    let ball2 = StructuringElement::ball(2);

    // ====================================================================
    // Test 1: single ops vs direct calls
    // ====================================================================
    eprintln!("  Testing single operations vs sequence");
    rp.compare_functions(&dilate(&f, &ball2), &morph_sequence(&f, "D2").unwrap());
    rp.compare_functions(&erode(&f, &ball2), &morph_sequence(&f, "E2").unwrap());
    rp.compare_functions(&open(&f, &ball2), &morph_sequence(&f, "O2").unwrap());
    rp.compare_functions(&close(&f, &ball2), &morph_sequence(&f, "C2").unwrap());
    rp.compare_functions(&top_hat(&f, &ball2), &morph_sequence(&f, "Tw2").unwrap());
    rp.compare_functions(&bottom_hat(&f, &ball2), &morph_sequence(&f, "Tb2").unwrap());
    rp.compare_functions(&gradient(&f, &ball2), &morph_sequence(&f, "G2").unwrap());
    rp.compare_functions(&h_dome(&f, 3).unwrap(), &morph_sequence(&f, "H3").unwrap());

    // ====================================================================
    // Test 2: composite sequences
    // ====================================================================
    eprintln!("  Testing closing + white tophat");
    let closed = close(&f, &ball2);
    let expected = top_hat(&closed, &ball2);
    rp.compare_functions(&expected, &morph_sequence(&f, "C2 + Tw2").unwrap());

    eprintln!("  Testing closing + h-dome");
    let expected = h_dome(&close(&f, &StructuringElement::ball(1)), 4).unwrap();
    rp.compare_functions(&expected, &morph_sequence(&f, "c1 + h4").unwrap());

    // ====================================================================
    // Test 3: spectrum helpers
    // ====================================================================
    eprintln!("  Testing spectrum helpers");
    let db = [4.2, 9.9, 3.0, 3.1, 15.7, 2.0, 8.0, 8.5, 8.0, 1.0, -20.0, 6.0, 11.0, 2.0];
    let quantized = quantize_decibels(&db).unwrap();
    rp.compare_functions(&f, &quantized);
    let domes = spectrum_h_dome(&db, 3).unwrap();
    rp.compare_values(
        1.0,
        if domes.as_slice() == morph_sequence(&f, "h3").unwrap().as_slice() {
            1.0
        } else {
            0.0
        },
        0.0,
    );
    let peak = prominent_peak(&db, 3).unwrap();
    rp.compare_values(
        h_dome(&f, 3).unwrap().argmax() as f64,
        peak as f64,
        0.0,
    );

    eprintln!();
    assert!(rp.cleanup(), "morphseq regression test failed");
}
