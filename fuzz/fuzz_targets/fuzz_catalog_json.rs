#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and checking arbitrary catalogs must never panic
        if let Ok(catalog) = catalog_tree::catalog::from_json_str(content) {
            let _ = catalog_tree::catalog::check(&catalog);
        }
    }
});
