#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // byte-at-a-time model of the grammar, indexing only through `get`
    fn model(input: &[u8]) -> Option<Vec<u8>> {
        let mut out = Vec::new();
        let mut i = 0;

        while let Some(&b) = input.get(i) {
            match b {
                b'+' => {
                    out.push(b' ');
                    i += 1;
                }
                b'%' => {
                    let hi = (*input.get(i + 1)? as char).to_digit(16)?;
                    let lo = (*input.get(i + 2)? as char).to_digit(16)?;
                    out.push((hi * 16 + lo) as u8);
                    i += 3;
                }
                other => {
                    out.push(other);
                    i += 1;
                }
            }
        }

        Some(out)
    }

    let real = cgi_decode::decode(data);

    match (real, model(data)) {
        (Ok(real), Some(expected)) => {
            assert!(real.len() <= data.len(), "output longer than input");
            assert_eq!(real, expected, "decoded output did not match");
        }
        (Err(cgi_decode::DecodeError::MalformedEscape { offset }), None) => {
            assert_eq!(data[offset], b'%', "error offset is not a '%'");
        }
        (real, expected) => panic!("decoder and model disagree: {:?} vs {:?}", real, expected),
    }

    let mut buf = data.to_vec();
    if cgi_decode::decode_in_place(&mut buf).is_err() {
        assert!(buf.len() <= data.len());
    }
});
