#![no_main]
use libfuzzer_sys::fuzz_target;
use kmldom::{parse, serialize, Mode};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(tree) = parse(s) else {
        return;
    };
    for mode in [Mode::Pretty, Mode::Compact] {
        let first = serialize(&tree, mode);
        let reparsed = parse(&first).expect("serializer output must parse");
        assert_eq!(serialize(&reparsed, mode), first);
    }
});
