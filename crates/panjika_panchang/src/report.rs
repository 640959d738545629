//! JSON reporter.

use std::io::Write;

use crate::error::PanchangError;
use crate::record::ResultRecord;

/// Write `records` as one pretty-printed JSON array (2-space indent)
/// followed by a newline.
pub fn write_report<W: Write>(records: &[ResultRecord], mut out: W) -> Result<(), PanchangError> {
    serde_json::to_writer_pretty(&mut out, records)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// Same text as [`write_report`], as a string.
pub fn render_report(records: &[ResultRecord]) -> Result<String, PanchangError> {
    let mut text = serde_json::to_string_pretty(records)?;
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use panjika_time::DateSpec;
    use panjika_vedic_base::calendar_indices;

    fn sample() -> ResultRecord {
        ResultRecord::new(
            &DateSpec::new(2025, 1, 1),
            2_460_676.5,
            280.0,
            10.0,
            calendar_indices(280.0, 10.0),
        )
    }

    #[test]
    fn empty_is_bare_brackets() {
        assert_eq!(render_report(&[]).unwrap(), "[]\n");
    }

    #[test]
    fn fields_in_order_with_two_space_indent() {
        let text = render_report(&[sample()]).unwrap();
        let expected = "[\n  {\n    \"date\": \"2025-01-01T00:00:00\",\n    \"jd\": 2460676.5,\n    \"sun_lon\": 280.0,\n    \"moon_lon\": 10.0,\n    \"tithi_index\": 8,\n    \"nakshatra_index\": 0\n  }\n]\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn writer_matches_render() {
        let records = vec![sample(), sample()];
        let mut buf = Vec::new();
        write_report(&records, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), render_report(&records).unwrap());
    }
}
