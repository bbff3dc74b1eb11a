use afl::fuzz;
use promql_selector_extract::extract;

fn main() {
    fuzz!(|data: &[u8]| {
        if let Ok(s) = std::str::from_utf8(data) {
            let records = extract(s);
            assert_eq!(records.len(), s.bytes().filter(|&b| b == b'{').count());
        }
    });
}
