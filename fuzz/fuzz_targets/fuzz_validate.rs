#![no_main]

use libfuzzer_sys::fuzz_target;
use strictjson_lint::{mask_strings, mask_strings_outside_comments, RuleRegistry, ValidatorOptions};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    assert_eq!(mask_strings(text).len(), text.len());
    assert_eq!(mask_strings_outside_comments(text).len(), text.len());

    for options in [ValidatorOptions::default(), ValidatorOptions::mask_all()] {
        let result = RuleRegistry::default_rules()
            .with_options(options)
            .validate(text);
        assert_eq!(result.is_valid(), result.errors().is_empty());
    }
});
