#![no_main]

use calculate::{Calculator, Outcome};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let calculator = Calculator::new();

        if let Outcome::Computed(record) = calculator.evaluate(Some(s)) {
            let line = record.to_json().expect("result record always serializes");
            assert!(!line.contains('\n'));
        }
    }
});
