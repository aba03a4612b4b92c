use crate::decoder::{DecodedStream, StreamEnd};

pub fn assert_decoded(decoded: &DecodedStream, expected_citations: &[&str], expected_end: StreamEnd) {
    assert_eq!(decoded.citations, expected_citations);
    assert_eq!(decoded.end, expected_end);
}

pub fn assert_output(output: &[u8], expected: &str) {
    assert_eq!(
        String::from_utf8(output.to_vec()).expect("Output should be UTF-8"),
        expected
    );
}
