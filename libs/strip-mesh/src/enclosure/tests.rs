//! # Enclosure Scaling Tests

use super::*;
use crate::parts::PartKind;

const TEMPLATE: &str = "\
# bottom enclosure
o shell
v 0.000000 0.000000 0.000000
v 20.000000 0.000000 -10.000000
v 17.000000 3.000000 -7.000000
v 20. 1.5 -10.
vn 20.000000 0.000000 -10.000000
f 1//1 2//1 3//1
";

#[test]
fn test_dimensions_for_params() {
    let params = StripParams {
        num_parts: 2,
        kind: PartKind::American,
        pitch: 25.0,
        lateral_gap: 15.0,
        vertical_gap: 25.0,
    };
    let dims = EnclosureDimensions::for_params(&params);
    assert_eq!(dims.length, 50.0 + 2.0 * 70.0 - 25.0);
    assert_eq!(dims.width, 75.0);
}

#[test]
fn test_placeholders_are_replaced() {
    let out = scale_template(TEMPLATE, 165.0, 75.0);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[3], "v 165.000000 0.000000 -75.000000");
    assert_eq!(lines[4], "v 162.000000 3.000000 -72.000000");
    assert_eq!(lines[5], "v 165.000000 1.5 -75.000000");
}

#[test]
fn test_untouched_lines_pass_through() {
    let out = scale_template(TEMPLATE, 165.0, 75.0);
    let before: Vec<&str> = TEMPLATE.split_inclusive('\n').collect();
    let after: Vec<&str> = out.split_inclusive('\n').collect();
    assert_eq!(before.len(), after.len());
    for i in [0, 1, 2, 6, 7] {
        assert_eq!(before[i], after[i]);
    }
}

#[test]
fn test_only_whole_tokens_match() {
    let line = "v 120.000000 20.5 117.0 -100.0 -70.0\n";
    assert_eq!(scale_template(line, 300.0, 90.0), line);
}

#[test]
fn test_sign_is_preserved() {
    let out = scale_template("v -20.000000 +17.0 0\n", 100.0, 60.0);
    assert_eq!(out, "v -100.000000 +97.000000 0\n");
}

#[test]
fn test_replacements_are_not_rescanned() {
    // length 17 produces "17.000000", which must not be read again as the
    // inner-length placeholder
    let out = scale_template("v 20. 0 0\n", 17.0, 60.0);
    assert_eq!(out, "v 17.000000 0 0\n");
}

#[test]
fn test_whitespace_and_terminators_survive() {
    let out = scale_template("v  20.\t-7.0 0\r\nv 1 2 3", 50.0, 40.0);
    assert_eq!(out, "v  50.000000\t-37.000000 0\r\nv 1 2 3");
}

#[test]
fn test_scale_template_for_uses_params() {
    let params = StripParams::default();
    let dims = EnclosureDimensions::for_params(&params);
    assert_eq!(
        scale_template_for(TEMPLATE, &params),
        scale_template(TEMPLATE, dims.length, dims.width)
    );
}
