use cmake_projectgen::utils::logging::level_directive;
use cmake_projectgen::utils::table;

#[test]
fn table_renderer_right_aligns_numbers() {
    let headers = ["Scope", "Macros"];
    let rows = vec![vec!["common".into(), "5".into()], vec!["unique".into(), "1,250".into()]];
    let out = table::render(&headers, &rows);
    assert!(out.starts_with('+'));
    assert!(out.contains("| Scope  |"));
    assert!(out.contains("| common |      5 |"));
    assert!(out.contains("| unique |  1,250 |"));
}

#[test]
fn quiet_wins_over_verbosity() {
    assert_eq!(level_directive(0, false), "warn");
    assert_eq!(level_directive(2, false), "debug");
    assert_eq!(level_directive(7, false), "trace");
    assert_eq!(level_directive(3, true), "error");
}
