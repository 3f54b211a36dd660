use super::articles::Fixture;

/// Distinct non-empty values of `field` across `set`, in first-seen order.
pub fn distinct(
    set: &[Fixture],
    lang: &str,
    field: impl Fn(&Fixture) -> &'static str,
) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for f in set.iter().filter(|f| f.language == lang) {
        let v = field(f);
        if !v.is_empty() && !out.iter().any(|o| o == v) {
            out.push(v.to_string());
        }
    }
    out
}
